//! Time entries module - domain models, services, and traits.

mod time_entries_model;
mod time_entries_service;
mod time_entries_traits;


// Re-export the public interface
pub use time_entries_model::{NewTimeEntry, TimeEntry, TimeEntryUpdate, TimeEntryWithUser};
pub use time_entries_service::TimeEntryService;
pub use time_entries_traits::{TimeEntryRepositoryTrait, TimeEntryServiceTrait};
