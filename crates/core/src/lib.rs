//! Staffline Core - Domain entities, services, and traits.
//!
//! This crate contains the budget, utilization, and invoicing logic for
//! Staffline. It is database-agnostic and defines repository traits that
//! are implemented by a storage crate.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod invoices;
pub mod projects;
pub mod tasks;
pub mod time_entries;
pub mod users;
pub mod utilization;
pub mod utils;

// Re-export common types
pub use budget::*;
pub use utilization::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
