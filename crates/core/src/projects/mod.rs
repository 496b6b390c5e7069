//! Projects module - domain models, services, and traits.

mod projects_model;
mod projects_service;
mod projects_traits;


// Re-export the public interface
pub use projects_model::{
    NewProject, NewProjectPhase, NewProjectStaffing, PhaseWithTasks, Project, ProjectGraph,
    ProjectPhase, ProjectStaffing, StaffedProject, StaffingWithUser,
};
pub use projects_service::ProjectService;
pub use projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
