use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_ENTRY_HOURS;
use crate::errors::{Error, Result, ValidationError};
use crate::users::User;

/// Hours recorded by one user against one task on one date.
///
/// `is_billable` controls only whether the hours reach an invoice; budget
/// consumption counts billable and non-billable time alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub is_billable: bool,
}

/// Input model for logging time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub task_id: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    #[serde(default = "default_billable")]
    pub is_billable: bool,
}

fn default_billable() -> bool {
    true
}

impl NewTimeEntry {
    pub fn validate(&self) -> Result<()> {
        validate_hours(self.hours)
    }
}

/// Partial update of an owned time entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryUpdate {
    pub date: Option<NaiveDate>,
    pub hours: Option<Decimal>,
    pub is_billable: Option<bool>,
}

impl TimeEntryUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(hours) = self.hours {
            validate_hours(hours)?;
        }
        Ok(())
    }
}

fn validate_hours(hours: Decimal) -> Result<()> {
    if hours <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Hours must be a positive number".to_string(),
        )));
    }
    if hours > Decimal::from(MAX_ENTRY_HOURS) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Hours must not exceed {} for a single entry",
            MAX_ENTRY_HOURS
        ))));
    }
    Ok(())
}

/// One time entry joined to its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryWithUser {
    pub entry: TimeEntry,
    pub user: User,
}
