use async_trait::async_trait;

use crate::errors::Result;
use crate::time_entries::time_entries_model::{
    NewTimeEntry, TimeEntry, TimeEntryUpdate, TimeEntryWithUser,
};

/// Trait for time entry repository operations.
#[async_trait]
pub trait TimeEntryRepositoryTrait: Send + Sync {
    fn find_entry(&self, entry_id: &str) -> Result<Option<TimeEntry>>;
    fn load_task_entries(&self, task_id: &str) -> Result<Vec<TimeEntryWithUser>>;
    fn load_user_entries(&self, user_id: &str) -> Result<Vec<TimeEntry>>;
    async fn insert_entry(&self, user_id: &str, new_entry: NewTimeEntry) -> Result<TimeEntry>;
    async fn update_entry(&self, entry_id: &str, update: TimeEntryUpdate) -> Result<TimeEntry>;
    async fn delete_entry(&self, entry_id: &str) -> Result<usize>;
}

/// Trait for time entry service operations.
///
/// Every operation acts on behalf of an identified user; ownership and
/// assignment gating happen here, before the repository is touched.
#[async_trait]
pub trait TimeEntryServiceTrait: Send + Sync {
    async fn log_time(&self, user_id: &str, new_entry: NewTimeEntry) -> Result<TimeEntry>;
    async fn update_entry(
        &self,
        user_id: &str,
        entry_id: &str,
        update: TimeEntryUpdate,
    ) -> Result<TimeEntry>;
    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<usize>;

    fn entries_for_task(&self, task_id: &str) -> Result<Vec<TimeEntryWithUser>>;
    fn entries_for_user(&self, user_id: &str) -> Result<Vec<TimeEntry>>;
}
