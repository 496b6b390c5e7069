use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::percent_used;

/// Forecast-vs-actual figures for one task, phase, or project.
///
/// `forecast`, `actual`, and `remaining` are carried at full decimal
/// precision so nested rollups never compound rounding errors;
/// `percent_used` alone is rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub forecast: Decimal,
    pub actual: Decimal,
    pub remaining: Decimal,
    pub percent_used: Decimal,
}

impl BudgetSummary {
    /// Builds a summary from a forecast and an actual; `remaining` may go
    /// negative when over budget, and a zero forecast always reads as 0%
    /// used.
    pub fn from_figures(forecast: Decimal, actual: Decimal) -> Self {
        BudgetSummary {
            forecast,
            actual,
            remaining: forecast - actual,
            percent_used: percent_used(actual, forecast),
        }
    }
}
