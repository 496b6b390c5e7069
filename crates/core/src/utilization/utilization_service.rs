use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::utilization_model::{ProjectUtilization, UserProjectUtilization, UserUtilization};
use super::utilization_traits::{UtilizationRepositoryTrait, UtilizationServiceTrait};
use crate::errors::{Error, Result};
use crate::projects::PhaseWithTasks;
use crate::utils::percent_used;

/// Service computing staffed-vs-logged hour ratios.
///
/// Only staffing rows are iterated: hours logged by a user who holds a
/// TaskAssignment but no ProjectStaffing row are invisible here, even
/// though they count toward budget actuals.
pub struct UtilizationService {
    repository: Arc<dyn UtilizationRepositoryTrait>,
}

impl UtilizationService {
    pub fn new(repository: Arc<dyn UtilizationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

/// Sums logged hours per user across a project's phase subtrees.
fn hours_by_user(phases: &[PhaseWithTasks]) -> HashMap<String, Decimal> {
    let mut hours: HashMap<String, Decimal> = HashMap::new();
    for phase in phases {
        for task in &phase.tasks {
            for entry in &task.time_entries {
                *hours.entry(entry.entry.user_id.clone()).or_default() += entry.entry.hours;
            }
        }
    }
    hours
}

/// Sums one user's logged hours across a project's phase subtrees.
fn user_hours(phases: &[PhaseWithTasks], user_id: &str) -> Decimal {
    phases
        .iter()
        .flat_map(|p| p.tasks.iter())
        .flat_map(|t| t.time_entries.iter())
        .filter(|e| e.entry.user_id == user_id)
        .map(|e| e.entry.hours)
        .sum()
}

#[async_trait::async_trait]
impl UtilizationServiceTrait for UtilizationService {
    /// One row per staffing record on the project. A staffed user who has
    /// logged nothing still gets a row with zero actual hours.
    fn project_utilization(&self, project_id: &str) -> Result<Vec<ProjectUtilization>> {
        debug!("Computing utilization for project '{}'", project_id);
        self.repository
            .find_project(project_id)?
            .ok_or_else(|| Error::NotFound(format!("Project '{}' not found", project_id)))?;

        let staffing = self.repository.load_project_staffing(project_id)?;
        let phases = self.repository.load_project_phases(project_id)?;
        let logged = hours_by_user(&phases);

        Ok(staffing
            .into_iter()
            .map(|s| {
                let actual_hours = logged
                    .get(&s.staffing.user_id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let forecast_hours = s.staffing.forecast_hours;
                ProjectUtilization {
                    user_id: s.staffing.user_id,
                    user_name: s.user.name,
                    role_name: s.staffing.role_name,
                    forecast_hours,
                    actual_hours,
                    utilization: percent_used(actual_hours, forecast_hours),
                }
            })
            .collect())
    }

    /// A user's utilization across every project they are staffed on.
    /// Zero staffing yields an all-zero result with an empty project list.
    fn user_utilization(&self, user_id: &str) -> Result<UserUtilization> {
        debug!("Computing utilization for user '{}'", user_id);
        let staffing = self.repository.load_user_staffing(user_id)?;

        let mut total_forecast = Decimal::ZERO;
        let mut total_actual = Decimal::ZERO;
        let mut projects = Vec::with_capacity(staffing.len());

        for staffed in staffing {
            let forecast_hours = staffed.staffing.forecast_hours;
            let actual_hours = user_hours(&staffed.phases, user_id);
            total_forecast += forecast_hours;
            total_actual += actual_hours;

            projects.push(UserProjectUtilization {
                project_id: staffed.project.id,
                project_name: staffed.project.name,
                forecast_hours,
                actual_hours,
                utilization: percent_used(actual_hours, forecast_hours),
            });
        }

        Ok(UserUtilization {
            total_forecast,
            total_actual,
            utilization: percent_used(total_actual, total_forecast),
            projects,
        })
    }
}
