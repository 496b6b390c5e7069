use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::budget_model::BudgetSummary;
use super::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result};
use crate::tasks::TaskWithRecords;

/// Realized cost of a task: every time entry priced at the matching
/// assignment's rate, or at zero when the user holds no assignment.
///
/// Billable and non-billable time both consume budget; invoicing, not
/// budgeting, filters on the billable flag. Entries without an assignment
/// contribute zero cost but are never skipped, so their hours still show
/// up in any hours-based figure computed elsewhere.
pub fn task_actual_cost(records: &TaskWithRecords) -> Decimal {
    records
        .time_entries
        .iter()
        .map(|e| e.entry.hours * records.rate_for_user(&e.entry.user_id))
        .sum()
}

/// Service computing forecast-vs-actual rollups.
///
/// Stateless: every call re-reads the relevant subtree from the store and
/// computes fresh. Consistency of reads during concurrent writes is the
/// backing store's concern.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    /// Budget consumption of a single task. Forecast is the task's fixed
    /// budget.
    fn task_budget(&self, task_id: &str) -> Result<BudgetSummary> {
        let records = self
            .repository
            .load_task_with_records(task_id)?
            .ok_or_else(|| Error::NotFound(format!("Task '{}' not found", task_id)))?;

        let forecast = records.task.budget;
        let actual = task_actual_cost(&records);
        Ok(BudgetSummary::from_figures(forecast, actual))
    }

    /// Budget consumption of a phase. Forecast is the sum of its task
    /// budgets; staffing plays no part at this level.
    fn phase_budget(&self, phase_id: &str) -> Result<BudgetSummary> {
        let phase = self
            .repository
            .load_phase_with_tasks(phase_id)?
            .ok_or_else(|| Error::NotFound(format!("Phase '{}' not found", phase_id)))?;

        let mut forecast = Decimal::ZERO;
        let mut actual = Decimal::ZERO;
        for task in &phase.tasks {
            forecast += task.task.budget;
            actual += task_actual_cost(task);
        }
        Ok(BudgetSummary::from_figures(forecast, actual))
    }

    /// Budget consumption of a whole project.
    ///
    /// Forecast comes from staffing commitments (rate × forecast hours),
    /// NOT from summed task budgets; the two are computed from different
    /// sources and will generally not reconcile. Actual is the priced sum
    /// of every time entry under every phase.
    fn project_budget(&self, project_id: &str) -> Result<BudgetSummary> {
        debug!("Computing project budget for '{}'", project_id);
        let graph = self
            .repository
            .load_project_graph(project_id)?
            .ok_or_else(|| Error::NotFound(format!("Project '{}' not found", project_id)))?;

        let forecast: Decimal = graph
            .staffing
            .iter()
            .map(|s| s.staffing.hourly_rate * s.staffing.forecast_hours)
            .sum();

        let actual: Decimal = graph
            .phases
            .iter()
            .flat_map(|p| p.tasks.iter())
            .map(task_actual_cost)
            .sum();

        Ok(BudgetSummary::from_figures(forecast, actual))
    }
}
