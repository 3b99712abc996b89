//! Advisory service settings.

use serde::Deserialize;

use crate::error::AdvisorError;

const DEFAULT_CONFIG_PATH: &str = "config/advisor";

/// Connection settings for the text-generation service.
///
/// Every field has a default except `api_key`, which defaults to empty and
/// must come from the config file or the environment for requests to be
/// accepted upstream.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

impl AdvisorConfig {
    /// Loads settings from the optional `config/advisor` file, then from
    /// `LIBRETTO_ADVISOR_*` environment variables, which win.
    pub fn load() -> Result<Self, AdvisorError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_PATH).required(false))
            .add_source(config::Environment::with_prefix("LIBRETTO_ADVISOR"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
