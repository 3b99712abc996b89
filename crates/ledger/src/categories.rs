//! Category metadata.

use serde::{Deserialize, Serialize};

/// Planned spending ceiling for one expense category, in minor units.
///
/// Inert for now: part of the data model but not persisted with the ledger
/// and not consumed by any statistic. Reserved for the budget-vs-actual
/// comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub category: String,
    pub budget_minor: i64,
}
