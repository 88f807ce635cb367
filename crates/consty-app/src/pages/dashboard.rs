//! Dashboard page
//!
//! Batch-fetches every list the dashboard reads and replaces them in one
//! locked section, so derived numbers never mix data from two cycles.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use consty_calc::compute_progress;
use consty_client::{ApiClient, ApiError};
use consty_core::traits::{Id, Identifiable};
use consty_models::{Project, Task};
use consty_state::Action;

use super::{Page, SharedState};

pub struct DashboardPage {
    client: Arc<ApiClient>,
}

impl DashboardPage {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

/// Effective completion percent per project, explicit value first, then
/// task ratio, then schedule position.
pub(crate) fn progress_by_project(
    projects: &[Project],
    tasks: &[Task],
    today: NaiveDate,
) -> Vec<(Id, u8)> {
    projects
        .iter()
        .filter_map(|project| {
            let id = project.id()?;
            Some((id, compute_progress(project, tasks, today)))
        })
        .collect()
}

#[async_trait]
impl Page for DashboardPage {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    async fn refresh(&self, state: &SharedState, cancel: &CancellationToken) -> Result<(), ApiError> {
        state.lock().await.dispatch(Action::SetLoading(true));

        let (projects, tasks, materials, machines, employees, expenses, suppliers, salaries) =
            futures::try_join!(
                self.client.list_projects(cancel),
                self.client.list_tasks(cancel),
                self.client.list_materials(cancel),
                self.client.list_machines(cancel),
                self.client.list_employees(cancel),
                self.client.list_expenses(cancel),
                self.client.list_suppliers(cancel),
                self.client.list_salary_payments(cancel),
            )?;

        let mut guard = state.lock().await;
        guard.dispatch(Action::ReplaceProjects(projects));
        guard.dispatch(Action::ReplaceTasks(tasks));
        guard.dispatch(Action::ReplaceMaterials(materials));
        guard.dispatch(Action::ReplaceMachines(machines));
        guard.dispatch(Action::ReplaceEmployees(employees));
        guard.dispatch(Action::ReplaceExpenses(expenses));
        guard.dispatch(Action::ReplaceSuppliers(suppliers));
        guard.dispatch(Action::ReplaceSalaryPayments(salaries));
        guard.dispatch(Action::SetLoading(false));

        for (id, pct) in progress_by_project(&guard.projects, &guard.tasks, Utc::now().date_naive()) {
            debug!(project_id = id, progress = pct, "project progress");
        }

        let stats = guard.dashboard_stats();
        info!(
            projects = stats.total_projects,
            completed = stats.completed_projects,
            employees = stats.employee_count,
            total_budget = stats.total_budget,
            total_spent = stats.total_spent,
            "dashboard refreshed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consty_models::TaskStatus;

    fn project(id: Id) -> Project {
        Project {
            id: Some(id),
            name: format!("Site {id}"),
            ..Default::default()
        }
    }

    fn task(project_id: Id, status: TaskStatus) -> Task {
        Task {
            id: Some(1),
            project_id: Some(project_id),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_progress_uses_task_ratio_per_project() {
        let projects = vec![project(1), project(2)];
        let tasks = vec![
            task(1, TaskStatus::Completed),
            task(1, TaskStatus::Pending),
            task(2, TaskStatus::Completed),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let progress = progress_by_project(&projects, &tasks, today);
        assert_eq!(progress, vec![(1, 50), (2, 100)]);
    }

    #[test]
    fn test_unsaved_projects_are_skipped() {
        let projects = vec![Project::default()];
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(progress_by_project(&projects, &[], today).is_empty());
    }
}
