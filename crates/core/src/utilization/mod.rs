//! Utilization module - staffed-vs-logged hour ratios per user.

mod utilization_model;
mod utilization_service;
mod utilization_traits;


// Re-export the public interface
pub use utilization_model::{ProjectUtilization, UserProjectUtilization, UserUtilization};
pub use utilization_service::UtilizationService;
pub use utilization_traits::{UtilizationRepositoryTrait, UtilizationServiceTrait};
