use async_trait::async_trait;

use crate::budget::budget_model::BudgetSummary;
use crate::errors::Result;
use crate::projects::{PhaseWithTasks, ProjectGraph};
use crate::tasks::TaskWithRecords;

/// Read boundary for the budget aggregator.
///
/// Each method hands back the already-joined subtree the rollup needs;
/// `None` means the root id did not resolve.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn load_task_with_records(&self, task_id: &str) -> Result<Option<TaskWithRecords>>;
    fn load_phase_with_tasks(&self, phase_id: &str) -> Result<Option<PhaseWithTasks>>;
    fn load_project_graph(&self, project_id: &str) -> Result<Option<ProjectGraph>>;
}

/// Trait for budget aggregation operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn task_budget(&self, task_id: &str) -> Result<BudgetSummary>;
    fn phase_budget(&self, phase_id: &str) -> Result<BudgetSummary>;
    fn project_budget(&self, project_id: &str) -> Result<BudgetSummary>;
}
