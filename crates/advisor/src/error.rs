//! Errors the advisory client can produce.
//!
//! None of these escape [`Advisor::advise`], which folds every failure into
//! a fixed message. They surface only to code driving a [`TextModel`]
//! directly.
//!
//! [`Advisor::advise`]: crate::Advisor::advise
//! [`TextModel`]: crate::TextModel
use thiserror::Error;

/// Advisor custom errors.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model error: {0}")]
    Model(String),
}
