use log::debug;
use std::sync::Arc;

use super::projects_model::{
    NewProject, NewProjectPhase, NewProjectStaffing, Project, ProjectPhase, ProjectStaffing,
    StaffingWithUser,
};
use super::projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing projects, staffing forecasts, and phases.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepositoryTrait>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn ensure_project_exists(&self, project_id: &str) -> Result<Project> {
        self.repository
            .find_project(project_id)?
            .ok_or_else(|| Error::NotFound(format!("Project '{}' not found", project_id)))
    }
}

#[async_trait::async_trait]
impl ProjectServiceTrait for ProjectService {
    async fn create_project(&self, new_project: NewProject) -> Result<Project> {
        debug!("Creating project '{}'", new_project.name);
        new_project.validate()?;
        self.repository.insert_project(new_project).await
    }

    fn get_project(&self, project_id: &str) -> Result<Project> {
        self.ensure_project_exists(project_id)
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        self.repository.list_projects()
    }

    /// Staffs a user onto a project at a forecast rate and hour count.
    ///
    /// The (project, user) pair is unique; staffing the same user twice is
    /// a conflict rather than an upsert.
    async fn add_staffing(
        &self,
        project_id: &str,
        new_staffing: NewProjectStaffing,
    ) -> Result<ProjectStaffing> {
        debug!(
            "Staffing user '{}' on project '{}'",
            new_staffing.user_id, project_id
        );
        new_staffing.validate()?;
        self.ensure_project_exists(project_id)?;

        if self
            .repository
            .find_staffing_pair(project_id, &new_staffing.user_id)?
            .is_some()
        {
            return Err(Error::Conflict(
                "This user is already staffed on this project".to_string(),
            ));
        }

        self.repository.insert_staffing(project_id, new_staffing).await
    }

    fn get_staffing(&self, project_id: &str) -> Result<Vec<StaffingWithUser>> {
        self.ensure_project_exists(project_id)?;
        self.repository.load_staffing(project_id)
    }

    async fn add_phase(
        &self,
        project_id: &str,
        new_phase: NewProjectPhase,
    ) -> Result<ProjectPhase> {
        debug!("Adding phase '{}' to project '{}'", new_phase.name, project_id);
        new_phase.validate()?;
        self.ensure_project_exists(project_id)?;
        self.repository.insert_phase(project_id, new_phase).await
    }

    /// Phases of a project, ordered by start date.
    fn get_phases(&self, project_id: &str) -> Result<Vec<ProjectPhase>> {
        self.ensure_project_exists(project_id)?;
        let mut phases = self.repository.load_phases(project_id)?;
        phases.sort_by_key(|p| p.start_date);
        Ok(phases)
    }
}
