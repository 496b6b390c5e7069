use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::tasks::TaskWithRecords;
use crate::users::User;

/// Domain model representing a consulting project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Forecast commitment of one user on one project, independent of any task.
///
/// The (project_id, user_id) pair is unique; duplicate creation is a
/// conflict, never an upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStaffing {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub role_name: String,
    pub hourly_rate: Decimal,
    pub forecast_hours: Decimal,
}

/// A phase of a project, owning an ordered set of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhase {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Input model for creating a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewProject {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.client_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "clientName".to_string(),
            )));
        }
        if self.start_date > self.end_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Project start date must not be after end date".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for staffing a user onto a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectStaffing {
    pub user_id: String,
    pub role_name: String,
    pub hourly_rate: Decimal,
    pub forecast_hours: Decimal,
}

impl NewProjectStaffing {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        if self.role_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "roleName".to_string(),
            )));
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Hourly rate must not be negative".to_string(),
            )));
        }
        if self.forecast_hours < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Forecast hours must not be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for creating a project phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectPhase {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewProjectPhase {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.start_date > self.end_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Phase start date must not be after end date".to_string(),
            )));
        }
        Ok(())
    }
}

// === Joined read shapes handed over by the store ===

/// One staffing row joined to its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingWithUser {
    pub staffing: ProjectStaffing,
    pub user: User,
}

/// A phase with its tasks and their records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseWithTasks {
    pub phase: ProjectPhase,
    pub tasks: Vec<TaskWithRecords>,
}

/// A project with its full nested subtree: staffing rows (each with its
/// user) and phases down to tasks, assignments, and time entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGraph {
    pub project: Project,
    pub staffing: Vec<StaffingWithUser>,
    pub phases: Vec<PhaseWithTasks>,
}

/// One staffing row of a user joined to its project subtree, with time
/// entries filtered to that user. Read shape for per-user utilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffedProject {
    pub staffing: ProjectStaffing,
    pub project: Project,
    pub phases: Vec<PhaseWithTasks>,
}
