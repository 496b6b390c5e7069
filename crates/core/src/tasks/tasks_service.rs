use log::debug;
use std::sync::Arc;

use super::tasks_model::{
    AssignedTask, NewTask, NewTaskAssignment, Task, TaskAssignment, TaskStatus, TaskWithRecords,
};
use super::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
use crate::errors::{Error, Result};
use crate::projects::ProjectRepositoryTrait;

/// Service for managing tasks and task assignments.
pub struct TaskService {
    repository: Arc<dyn TaskRepositoryTrait>,
    project_repository: Arc<dyn ProjectRepositoryTrait>,
}

impl TaskService {
    pub fn new(
        repository: Arc<dyn TaskRepositoryTrait>,
        project_repository: Arc<dyn ProjectRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            project_repository,
        }
    }
}

#[async_trait::async_trait]
impl TaskServiceTrait for TaskService {
    async fn create_task(&self, phase_id: &str, new_task: NewTask) -> Result<Task> {
        debug!("Creating task '{}' in phase '{}'", new_task.title, phase_id);
        new_task.validate()?;
        self.project_repository
            .find_phase(phase_id)?
            .ok_or_else(|| Error::NotFound(format!("Phase '{}' not found", phase_id)))?;
        self.repository.insert_task(phase_id, new_task).await
    }

    fn get_task(&self, task_id: &str) -> Result<TaskWithRecords> {
        self.repository
            .load_task_with_records(task_id)?
            .ok_or_else(|| Error::NotFound(format!("Task '{}' not found", task_id)))
    }

    /// Tasks of a phase, ordered by due date.
    fn tasks_for_phase(&self, phase_id: &str) -> Result<Vec<Task>> {
        self.project_repository
            .find_phase(phase_id)?
            .ok_or_else(|| Error::NotFound(format!("Phase '{}' not found", phase_id)))?;
        let mut tasks = self.repository.load_phase_tasks(phase_id)?;
        tasks.sort_by_key(|t| t.due_date);
        Ok(tasks)
    }

    /// The contributor worklist: every task the user is assigned to, with
    /// their own rate attached, ordered by due date.
    fn tasks_for_user(&self, user_id: &str) -> Result<Vec<AssignedTask>> {
        let mut tasks = self.repository.load_user_tasks(user_id)?;
        tasks.sort_by_key(|t| t.task.due_date);
        Ok(tasks)
    }

    /// Assigns a user to a task at a task-specific rate.
    ///
    /// The (task, user) pair is unique; assigning twice is a conflict.
    async fn assign_user(
        &self,
        task_id: &str,
        new_assignment: NewTaskAssignment,
    ) -> Result<TaskAssignment> {
        debug!(
            "Assigning user '{}' to task '{}'",
            new_assignment.user_id, task_id
        );
        new_assignment.validate()?;
        self.repository
            .find_task(task_id)?
            .ok_or_else(|| Error::NotFound(format!("Task '{}' not found", task_id)))?;

        if self
            .repository
            .find_assignment_pair(task_id, &new_assignment.user_id)?
            .is_some()
        {
            return Err(Error::Conflict(
                "This user is already assigned to this task".to_string(),
            ));
        }

        self.repository.insert_assignment(task_id, new_assignment).await
    }

    async fn update_status(&self, task_id: &str, status: TaskStatus) -> Result<Task> {
        self.repository
            .find_task(task_id)?
            .ok_or_else(|| Error::NotFound(format!("Task '{}' not found", task_id)))?;
        self.repository.update_task_status(task_id, status).await
    }
}
