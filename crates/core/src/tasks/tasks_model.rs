use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::time_entries::TimeEntryWithUser;
use crate::users::User;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

/// Domain model representing a task inside a project phase.
///
/// The budget is fixed at creation and independent of any staffing
/// forecast; consumption against it is derived from time entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub phase_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub due_date: NaiveDate,
    pub budget: Decimal,
}

/// Assignment of a user to a task at a task-specific hourly rate.
///
/// The rate here is the one used to price this user's time on this task,
/// and may differ from their project-level staffing rate. The
/// (task_id, user_id) pair is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub hourly_rate: Decimal,
}

/// Input model for creating a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub due_date: NaiveDate,
    pub budget: Decimal,
}

impl NewTask {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if self.budget < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Task budget must not be negative".to_string(),
            )));
        }
        if self.start_date > self.end_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Task start date must not be after end date".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for assigning a user to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskAssignment {
    pub user_id: String,
    pub hourly_rate: Decimal,
}

impl NewTaskAssignment {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Hourly rate must not be negative".to_string(),
            )));
        }
        Ok(())
    }
}

// === Joined read shapes handed over by the store ===

/// One task assignment joined to its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentWithUser {
    pub assignment: TaskAssignment,
    pub user: User,
}

/// A task with its assignments and time entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithRecords {
    pub task: Task,
    pub assignments: Vec<AssignmentWithUser>,
    pub time_entries: Vec<TimeEntryWithUser>,
}

impl TaskWithRecords {
    /// Rate for pricing a user's time on this task: the matching
    /// assignment's hourly rate, or zero when no assignment exists. Hours
    /// priced at zero are still hours; callers must not drop the entry.
    pub fn rate_for_user(&self, user_id: &str) -> Decimal {
        self.assignments
            .iter()
            .find(|a| a.assignment.user_id == user_id)
            .map(|a| a.assignment.hourly_rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether the user holds an assignment on this task.
    pub fn has_assignment(&self, user_id: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.assignment.user_id == user_id)
    }
}

/// A task as seen from a contributor's worklist: the task plus the rate
/// their own assignment carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTask {
    #[serde(flatten)]
    pub task: Task,
    pub my_hourly_rate: Decimal,
}
