use log::debug;
use std::sync::Arc;

use super::time_entries_model::{NewTimeEntry, TimeEntry, TimeEntryUpdate, TimeEntryWithUser};
use super::time_entries_traits::{TimeEntryRepositoryTrait, TimeEntryServiceTrait};
use crate::errors::{Error, Result};
use crate::tasks::TaskRepositoryTrait;

/// Service for recording time against tasks.
pub struct TimeEntryService {
    repository: Arc<dyn TimeEntryRepositoryTrait>,
    task_repository: Arc<dyn TaskRepositoryTrait>,
}

impl TimeEntryService {
    pub fn new(
        repository: Arc<dyn TimeEntryRepositoryTrait>,
        task_repository: Arc<dyn TaskRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            task_repository,
        }
    }

    /// Loads an entry and checks that `user_id` owns it. Entries are
    /// mutable and deletable only by the user who logged them.
    fn owned_entry(&self, user_id: &str, entry_id: &str) -> Result<TimeEntry> {
        let entry = self
            .repository
            .find_entry(entry_id)?
            .ok_or_else(|| Error::NotFound(format!("Time entry '{}' not found", entry_id)))?;
        if entry.user_id != user_id {
            return Err(Error::Forbidden(
                "Time entries can only be modified by their owner".to_string(),
            ));
        }
        Ok(entry)
    }
}

#[async_trait::async_trait]
impl TimeEntryServiceTrait for TimeEntryService {
    /// Logs hours for the acting user against a task.
    ///
    /// The user must hold a TaskAssignment on the task before logging time;
    /// the assignment's rate is what later prices these hours.
    async fn log_time(&self, user_id: &str, new_entry: NewTimeEntry) -> Result<TimeEntry> {
        debug!(
            "Logging {}h for user '{}' on task '{}'",
            new_entry.hours, user_id, new_entry.task_id
        );
        new_entry.validate()?;

        self.task_repository
            .find_task(&new_entry.task_id)?
            .ok_or_else(|| Error::NotFound(format!("Task '{}' not found", new_entry.task_id)))?;

        if self
            .task_repository
            .find_assignment_pair(&new_entry.task_id, user_id)?
            .is_none()
        {
            return Err(Error::Forbidden(
                "You are not assigned to this task".to_string(),
            ));
        }

        self.repository.insert_entry(user_id, new_entry).await
    }

    async fn update_entry(
        &self,
        user_id: &str,
        entry_id: &str,
        update: TimeEntryUpdate,
    ) -> Result<TimeEntry> {
        update.validate()?;
        self.owned_entry(user_id, entry_id)?;
        self.repository.update_entry(entry_id, update).await
    }

    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<usize> {
        self.owned_entry(user_id, entry_id)?;
        self.repository.delete_entry(entry_id).await
    }

    fn entries_for_task(&self, task_id: &str) -> Result<Vec<TimeEntryWithUser>> {
        self.task_repository
            .find_task(task_id)?
            .ok_or_else(|| Error::NotFound(format!("Task '{}' not found", task_id)))?;
        self.repository.load_task_entries(task_id)
    }

    fn entries_for_user(&self, user_id: &str) -> Result<Vec<TimeEntry>> {
        self.repository.load_user_entries(user_id)
    }
}
