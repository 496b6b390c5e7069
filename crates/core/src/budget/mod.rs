//! Budget module - forecast-vs-actual rollups at task, phase, and project
//! level.

mod budget_model;
mod budget_service;
mod budget_traits;

#[cfg(test)]
mod budget_service_tests;

// Re-export the public interface
pub use budget_model::BudgetSummary;
pub use budget_service::{task_actual_cost, BudgetService};
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
