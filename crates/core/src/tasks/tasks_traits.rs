use async_trait::async_trait;

use crate::errors::Result;
use crate::tasks::tasks_model::{
    AssignedTask, NewTask, NewTaskAssignment, Task, TaskAssignment, TaskStatus, TaskWithRecords,
};

/// Trait for task repository operations.
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    fn find_task(&self, task_id: &str) -> Result<Option<Task>>;
    fn load_task_with_records(&self, task_id: &str) -> Result<Option<TaskWithRecords>>;
    fn load_phase_tasks(&self, phase_id: &str) -> Result<Vec<Task>>;
    fn load_user_tasks(&self, user_id: &str) -> Result<Vec<AssignedTask>>;
    async fn insert_task(&self, phase_id: &str, new_task: NewTask) -> Result<Task>;

    fn find_assignment_pair(&self, task_id: &str, user_id: &str)
        -> Result<Option<TaskAssignment>>;
    async fn insert_assignment(
        &self,
        task_id: &str,
        new_assignment: NewTaskAssignment,
    ) -> Result<TaskAssignment>;

    async fn update_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task>;
}

/// Trait for task service operations.
#[async_trait]
pub trait TaskServiceTrait: Send + Sync {
    async fn create_task(&self, phase_id: &str, new_task: NewTask) -> Result<Task>;
    fn get_task(&self, task_id: &str) -> Result<TaskWithRecords>;
    fn tasks_for_phase(&self, phase_id: &str) -> Result<Vec<Task>>;
    fn tasks_for_user(&self, user_id: &str) -> Result<Vec<AssignedTask>>;

    async fn assign_user(
        &self,
        task_id: &str,
        new_assignment: NewTaskAssignment,
    ) -> Result<TaskAssignment>;
    async fn update_status(&self, task_id: &str, status: TaskStatus) -> Result<Task>;
}
