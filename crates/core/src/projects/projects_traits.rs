use async_trait::async_trait;

use crate::errors::Result;
use crate::projects::projects_model::{
    NewProject, NewProjectPhase, NewProjectStaffing, Project, ProjectPhase, ProjectStaffing,
    StaffingWithUser,
};

/// Trait for project repository operations.
///
/// Implemented by the storage crate; single-record lookups return `None`
/// when the id does not resolve, and the service maps that to `NotFound`.
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    fn find_project(&self, project_id: &str) -> Result<Option<Project>>;
    fn list_projects(&self) -> Result<Vec<Project>>;
    async fn insert_project(&self, new_project: NewProject) -> Result<Project>;

    fn load_staffing(&self, project_id: &str) -> Result<Vec<StaffingWithUser>>;
    fn find_staffing_pair(&self, project_id: &str, user_id: &str)
        -> Result<Option<ProjectStaffing>>;
    async fn insert_staffing(
        &self,
        project_id: &str,
        new_staffing: NewProjectStaffing,
    ) -> Result<ProjectStaffing>;

    fn load_phases(&self, project_id: &str) -> Result<Vec<ProjectPhase>>;
    fn find_phase(&self, phase_id: &str) -> Result<Option<ProjectPhase>>;
    async fn insert_phase(
        &self,
        project_id: &str,
        new_phase: NewProjectPhase,
    ) -> Result<ProjectPhase>;
}

/// Trait for project service operations (the write path plus plain reads).
#[async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    async fn create_project(&self, new_project: NewProject) -> Result<Project>;
    fn get_project(&self, project_id: &str) -> Result<Project>;
    fn list_projects(&self) -> Result<Vec<Project>>;

    async fn add_staffing(
        &self,
        project_id: &str,
        new_staffing: NewProjectStaffing,
    ) -> Result<ProjectStaffing>;
    fn get_staffing(&self, project_id: &str) -> Result<Vec<StaffingWithUser>>;

    async fn add_phase(
        &self,
        project_id: &str,
        new_phase: NewProjectPhase,
    ) -> Result<ProjectPhase>;
    fn get_phases(&self, project_id: &str) -> Result<Vec<ProjectPhase>>;
}
