use async_trait::async_trait;

use crate::errors::Result;
use crate::projects::{PhaseWithTasks, Project, StaffedProject, StaffingWithUser};
use crate::utilization::utilization_model::{ProjectUtilization, UserUtilization};

/// Read boundary for the utilization aggregator.
#[async_trait]
pub trait UtilizationRepositoryTrait: Send + Sync {
    fn find_project(&self, project_id: &str) -> Result<Option<Project>>;

    /// Staffing rows of a project, each joined to its user.
    fn load_project_staffing(&self, project_id: &str) -> Result<Vec<StaffingWithUser>>;

    /// Phase subtrees of a project, down to time entries.
    fn load_project_phases(&self, project_id: &str) -> Result<Vec<PhaseWithTasks>>;

    /// Every staffing row of a user, each joined to its project subtree
    /// with time entries filtered to that user.
    fn load_user_staffing(&self, user_id: &str) -> Result<Vec<StaffedProject>>;
}

/// Trait for utilization aggregation operations.
#[async_trait]
pub trait UtilizationServiceTrait: Send + Sync {
    fn project_utilization(&self, project_id: &str) -> Result<Vec<ProjectUtilization>>;
    fn user_utilization(&self, user_id: &str) -> Result<UserUtilization>;
}
