#[cfg(test)]
mod tests {
    use crate::budget::{BudgetService, BudgetServiceTrait, BudgetSummary};
    use crate::budget::budget_traits::BudgetRepositoryTrait;
    use crate::errors::{Error, Result};
    use crate::projects::{
        PhaseWithTasks, Project, ProjectGraph, ProjectPhase, ProjectStaffing, StaffingWithUser,
    };
    use crate::tasks::{AssignmentWithUser, Task, TaskAssignment, TaskStatus, TaskWithRecords};
    use crate::time_entries::{TimeEntry, TimeEntryWithUser};
    use crate::users::{User, UserRole};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Arc;

    // --- Mock BudgetRepository ---
    #[derive(Default)]
    struct MockBudgetRepository {
        tasks: HashMap<String, TaskWithRecords>,
        phases: HashMap<String, PhaseWithTasks>,
        projects: HashMap<String, ProjectGraph>,
    }

    #[async_trait]
    impl BudgetRepositoryTrait for MockBudgetRepository {
        fn load_task_with_records(&self, task_id: &str) -> Result<Option<TaskWithRecords>> {
            Ok(self.tasks.get(task_id).cloned())
        }

        fn load_phase_with_tasks(&self, phase_id: &str) -> Result<Option<PhaseWithTasks>> {
            Ok(self.phases.get(phase_id).cloned())
        }

        fn load_project_graph(&self, project_id: &str) -> Result<Option<ProjectGraph>> {
            Ok(self.projects.get(project_id).cloned())
        }
    }

    // --- Fixture helpers ---
    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            role: UserRole::Contributor,
        }
    }

    fn task(id: &str, budget: Decimal) -> Task {
        Task {
            id: id.to_string(),
            phase_id: "ph-1".to_string(),
            title: format!("Task {}", id),
            description: None,
            status: TaskStatus::InProgress,
            start_date: date("2024-01-01"),
            end_date: date("2024-03-31"),
            due_date: date("2024-03-31"),
            budget,
        }
    }

    fn assignment(task_id: &str, u: &User, rate: Decimal) -> AssignmentWithUser {
        AssignmentWithUser {
            assignment: TaskAssignment {
                id: format!("asg-{}-{}", task_id, u.id),
                task_id: task_id.to_string(),
                user_id: u.id.clone(),
                hourly_rate: rate,
            },
            user: u.clone(),
        }
    }

    fn entry(task_id: &str, u: &User, hours: Decimal, billable: bool) -> TimeEntryWithUser {
        TimeEntryWithUser {
            entry: TimeEntry {
                id: format!("te-{}", uuid::Uuid::new_v4()),
                task_id: task_id.to_string(),
                user_id: u.id.clone(),
                date: date("2024-02-10"),
                hours,
                is_billable: billable,
            },
            user: u.clone(),
        }
    }

    fn phase(id: &str, tasks: Vec<TaskWithRecords>) -> PhaseWithTasks {
        PhaseWithTasks {
            phase: ProjectPhase {
                id: id.to_string(),
                project_id: "pr-1".to_string(),
                name: format!("Phase {}", id),
                start_date: date("2024-01-01"),
                end_date: date("2024-06-30"),
            },
            tasks,
        }
    }

    fn staffing(u: &User, rate: Decimal, forecast_hours: Decimal) -> StaffingWithUser {
        StaffingWithUser {
            staffing: ProjectStaffing {
                id: format!("st-{}", u.id),
                project_id: "pr-1".to_string(),
                user_id: u.id.clone(),
                role_name: "Consultant".to_string(),
                hourly_rate: rate,
                forecast_hours,
            },
            user: u.clone(),
        }
    }

    fn project_graph(staffing: Vec<StaffingWithUser>, phases: Vec<PhaseWithTasks>) -> ProjectGraph {
        ProjectGraph {
            project: Project {
                id: "pr-1".to_string(),
                name: "Replatforming".to_string(),
                client_name: "Acme Corp".to_string(),
                start_date: date("2024-01-01"),
                end_date: date("2024-12-31"),
                created_at: Utc::now(),
            },
            staffing,
            phases,
        }
    }

    fn service(repo: MockBudgetRepository) -> BudgetService {
        BudgetService::new(Arc::new(repo))
    }

    // --- task_budget ---

    #[test]
    fn test_task_budget_concrete_scenario() {
        // $2000 budget; contributor A at $100/hr logs 8h then 6h.
        let a = user("u-a", "Alice");
        let records = TaskWithRecords {
            task: task("t-1", dec!(2000)),
            assignments: vec![assignment("t-1", &a, dec!(100))],
            time_entries: vec![
                entry("t-1", &a, dec!(8), true),
                entry("t-1", &a, dec!(6), true),
            ],
        };
        let mut repo = MockBudgetRepository::default();
        repo.tasks.insert("t-1".to_string(), records);

        let summary = service(repo).task_budget("t-1").unwrap();
        assert_eq!(summary.forecast, dec!(2000));
        assert_eq!(summary.actual, dec!(1400));
        assert_eq!(summary.remaining, dec!(600));
        assert_eq!(summary.percent_used, dec!(70.00));
    }

    #[test]
    fn test_task_budget_counts_non_billable_time() {
        let a = user("u-a", "Alice");
        let records = TaskWithRecords {
            task: task("t-1", dec!(1000)),
            assignments: vec![assignment("t-1", &a, dec!(50))],
            time_entries: vec![
                entry("t-1", &a, dec!(4), true),
                entry("t-1", &a, dec!(4), false),
            ],
        };
        let mut repo = MockBudgetRepository::default();
        repo.tasks.insert("t-1".to_string(), records);

        // Budget consumption ignores the billable flag.
        let summary = service(repo).task_budget("t-1").unwrap();
        assert_eq!(summary.actual, dec!(400));
    }

    #[test]
    fn test_task_budget_prices_unassigned_hours_at_zero() {
        let a = user("u-a", "Alice");
        let b = user("u-b", "Bob"); // no assignment on this task
        let records = TaskWithRecords {
            task: task("t-1", dec!(1000)),
            assignments: vec![assignment("t-1", &a, dec!(100))],
            time_entries: vec![
                entry("t-1", &a, dec!(5), true),
                entry("t-1", &b, dec!(7), true),
            ],
        };
        let mut repo = MockBudgetRepository::default();
        repo.tasks.insert("t-1".to_string(), records);

        // Bob's 7 hours contribute $0, not an error and not a skip.
        let summary = service(repo).task_budget("t-1").unwrap();
        assert_eq!(summary.actual, dec!(500));
        assert_eq!(summary.remaining, dec!(500));
    }

    #[test]
    fn test_task_budget_zero_forecast_yields_zero_percent() {
        let a = user("u-a", "Alice");
        let records = TaskWithRecords {
            task: task("t-1", dec!(0)),
            assignments: vec![assignment("t-1", &a, dec!(100))],
            time_entries: vec![entry("t-1", &a, dec!(3), true)],
        };
        let mut repo = MockBudgetRepository::default();
        repo.tasks.insert("t-1".to_string(), records);

        let summary = service(repo).task_budget("t-1").unwrap();
        assert_eq!(summary.actual, dec!(300));
        assert_eq!(summary.percent_used, dec!(0));
    }

    #[test]
    fn test_task_budget_negative_remaining_when_over_budget() {
        let a = user("u-a", "Alice");
        let records = TaskWithRecords {
            task: task("t-1", dec!(500)),
            assignments: vec![assignment("t-1", &a, dec!(100))],
            time_entries: vec![entry("t-1", &a, dec!(8), true)],
        };
        let mut repo = MockBudgetRepository::default();
        repo.tasks.insert("t-1".to_string(), records);

        let summary = service(repo).task_budget("t-1").unwrap();
        assert_eq!(summary.remaining, dec!(-300));
        assert_eq!(summary.percent_used, dec!(160.00));
    }

    #[test]
    fn test_task_budget_not_found() {
        let result = service(MockBudgetRepository::default()).task_budget("missing");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    // --- phase_budget ---

    #[test]
    fn test_phase_budget_sums_task_budgets() {
        let a = user("u-a", "Alice");
        let t1 = TaskWithRecords {
            task: task("t-1", dec!(1200)),
            assignments: vec![assignment("t-1", &a, dec!(100))],
            time_entries: vec![entry("t-1", &a, dec!(2), true)],
        };
        let t2 = TaskWithRecords {
            task: task("t-2", dec!(800)),
            assignments: vec![assignment("t-2", &a, dec!(80))],
            time_entries: vec![entry("t-2", &a, dec!(5), false)],
        };
        let mut repo = MockBudgetRepository::default();
        repo.phases.insert("ph-1".to_string(), phase("ph-1", vec![t1, t2]));

        let summary = service(repo).phase_budget("ph-1").unwrap();
        assert_eq!(summary.forecast, dec!(2000));
        assert_eq!(summary.actual, dec!(600)); // 2*100 + 5*80
        assert_eq!(summary.remaining, dec!(1400));
        assert_eq!(summary.percent_used, dec!(30.00));
    }

    #[test]
    fn test_phase_budget_empty_phase_is_all_zeros() {
        let mut repo = MockBudgetRepository::default();
        repo.phases.insert("ph-1".to_string(), phase("ph-1", vec![]));

        let summary = service(repo).phase_budget("ph-1").unwrap();
        assert_eq!(summary.forecast, dec!(0));
        assert_eq!(summary.actual, dec!(0));
        assert_eq!(summary.percent_used, dec!(0));
    }

    #[test]
    fn test_phase_budget_not_found() {
        let result = service(MockBudgetRepository::default()).phase_budget("missing");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    // --- project_budget ---

    #[test]
    fn test_project_budget_concrete_scenario() {
        // Staffing: A at $100/hr x 50h, B at $80/hr x 30h. Only A logs 14h
        // at a task rate of $100.
        let a = user("u-a", "Alice");
        let b = user("u-b", "Bob");
        let t1 = TaskWithRecords {
            task: task("t-1", dec!(2000)),
            assignments: vec![assignment("t-1", &a, dec!(100))],
            time_entries: vec![
                entry("t-1", &a, dec!(8), true),
                entry("t-1", &a, dec!(6), true),
            ],
        };
        let graph = project_graph(
            vec![staffing(&a, dec!(100), dec!(50)), staffing(&b, dec!(80), dec!(30))],
            vec![phase("ph-1", vec![t1])],
        );
        let mut repo = MockBudgetRepository::default();
        repo.projects.insert("pr-1".to_string(), graph);

        let summary = service(repo).project_budget("pr-1").unwrap();
        assert_eq!(summary.forecast, dec!(7400)); // 5000 + 2400
        assert_eq!(summary.actual, dec!(1400));
        assert_eq!(summary.remaining, dec!(6000));
        assert_eq!(summary.percent_used, dec!(18.92));
    }

    #[test]
    fn test_project_forecast_ignores_task_budgets() {
        // Task budgets total 9000 but staffing totals 1000; the project
        // forecast follows staffing and the two legitimately differ.
        let a = user("u-a", "Alice");
        let t1 = TaskWithRecords {
            task: task("t-1", dec!(9000)),
            assignments: vec![],
            time_entries: vec![],
        };
        let graph = project_graph(
            vec![staffing(&a, dec!(100), dec!(10))],
            vec![phase("ph-1", vec![t1])],
        );
        let mut repo = MockBudgetRepository::default();
        repo.projects.insert("pr-1".to_string(), graph);

        let summary = service(repo).project_budget("pr-1").unwrap();
        assert_eq!(summary.forecast, dec!(1000));
        assert_ne!(summary.forecast, dec!(9000));
    }

    #[test]
    fn test_project_budget_spans_all_phases() {
        let a = user("u-a", "Alice");
        let t1 = TaskWithRecords {
            task: task("t-1", dec!(100)),
            assignments: vec![assignment("t-1", &a, dec!(10))],
            time_entries: vec![entry("t-1", &a, dec!(1), true)],
        };
        let t2 = TaskWithRecords {
            task: task("t-2", dec!(100)),
            assignments: vec![assignment("t-2", &a, dec!(20))],
            time_entries: vec![entry("t-2", &a, dec!(2), false)],
        };
        let graph = project_graph(
            vec![staffing(&a, dec!(50), dec!(100))],
            vec![phase("ph-1", vec![t1]), phase("ph-2", vec![t2])],
        );
        let mut repo = MockBudgetRepository::default();
        repo.projects.insert("pr-1".to_string(), graph);

        let summary = service(repo).project_budget("pr-1").unwrap();
        assert_eq!(summary.actual, dec!(50)); // 1*10 + 2*20
    }

    #[test]
    fn test_project_budget_not_found() {
        let result = service(MockBudgetRepository::default()).project_budget("missing");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    // --- output shape ---

    #[test]
    fn test_budget_summary_serializes_camel_case() {
        let summary = BudgetSummary::from_figures(dec!(2000), dec!(1400));
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("percentUsed").is_some());
        assert!(json.get("percent_used").is_none());
    }

    // --- arithmetic invariants ---

    proptest! {
        #[test]
        fn prop_remaining_is_forecast_minus_actual(
            forecast_cents in 0u64..10_000_000,
            hours_tenths in 0u64..10_000,
            rate_cents in 0u64..100_000,
        ) {
            let forecast = Decimal::new(forecast_cents as i64, 2);
            let hours = Decimal::new(hours_tenths as i64, 1);
            let rate = Decimal::new(rate_cents as i64, 2);
            let actual = hours * rate;

            let summary = BudgetSummary::from_figures(forecast, actual);
            prop_assert_eq!(summary.remaining, forecast - actual);
            if forecast == Decimal::ZERO {
                prop_assert_eq!(summary.percent_used, Decimal::ZERO);
            }
        }
    }
}
