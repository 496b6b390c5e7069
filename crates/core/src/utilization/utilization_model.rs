use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Staffed-vs-logged hours for one staffed user on one project.
///
/// Utilization measures effort, not invoiceable value: actual hours count
/// every time entry of the user on the project's tasks, regardless of the
/// billable flag or of which assignment rate would apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUtilization {
    pub user_id: String,
    pub user_name: String,
    pub role_name: String,
    pub forecast_hours: Decimal,
    pub actual_hours: Decimal,
    pub utilization: Decimal,
}

/// One project's slice of a user's cross-project utilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjectUtilization {
    pub project_id: String,
    pub project_name: String,
    pub forecast_hours: Decimal,
    pub actual_hours: Decimal,
    pub utilization: Decimal,
}

/// A user's utilization across every project they are staffed on.
///
/// Totals are plain sums over the per-project figures, not weighted
/// averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUtilization {
    pub total_forecast: Decimal,
    pub total_actual: Decimal,
    pub utilization: Decimal,
    pub projects: Vec<UserProjectUtilization>,
}
