use async_trait::async_trait;
use ledger::Transaction;

pub use self::config::AdvisorConfig;
pub use self::error::AdvisorError;
pub use self::gemini::Gemini;
pub use self::prompt::build_prompt;

mod config;
mod error;
mod gemini;
mod prompt;

/// Shown instead of advice while the ledger has no transactions yet.
pub const NO_DATA_ADVICE: &str = "Add some transactions to receive a personalized analysis.";

/// Fixed fallback returned whenever the advisory request fails.
pub const ADVICE_UNAVAILABLE: &str = "The analysis could not be generated. Please try again later.";

/// Seam to the external text-generation service.
#[async_trait]
pub trait TextModel {
    /// Produces a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// The advisory client: turns the current transaction collection into a
/// short natural-language recommendation.
///
/// [`advise`] never fails. Transport errors, upstream errors and empty
/// completions all collapse into [`ADVICE_UNAVAILABLE`], so callers can
/// render the returned string as-is. The advisor neither queues nor
/// deduplicates requests; a caller that wants at most one outstanding
/// request keeps its own busy flag and discards results it no longer wants.
///
/// [`advise`]: Advisor::advise
#[derive(Clone, Debug)]
pub struct Advisor<M> {
    model: M,
}

impl<M: TextModel> Advisor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Returns advice for the given transactions.
    ///
    /// An empty slice short-circuits to [`NO_DATA_ADVICE`] without touching
    /// the model.
    pub async fn advise(&self, transactions: &[Transaction]) -> String {
        if transactions.is_empty() {
            return NO_DATA_ADVICE.to_string();
        }

        let prompt = prompt::build_prompt(transactions);
        match self.model.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("advisory model returned an empty completion");
                ADVICE_UNAVAILABLE.to_string()
            }
            Err(err) => {
                tracing::warn!("advisory request failed: {err}");
                ADVICE_UNAVAILABLE.to_string()
            }
        }
    }
}
