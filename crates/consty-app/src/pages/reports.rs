//! Reports page
//!
//! Rebuilds the budget-vs-actual breakdown on a short cycle. The refresh
//! interval is user-tunable but clamped, so a typo in the environment
//! cannot hammer the server or freeze the report.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use consty_calc::{generate_cost_analysis, CostAnalysisRow};
use consty_client::{ApiClient, ApiError};
use consty_models::{Expense, Material, Project};
use consty_state::Action;

use super::{Page, SharedState};

/// One refresh cycle's breakdown across all projects
#[derive(Debug, Clone)]
pub struct CostReport {
    pub total_budget: f64,
    pub rows: Vec<CostAnalysisRow>,
}

impl CostReport {
    pub fn build(projects: &[Project], materials: &[Material], expenses: &[Expense]) -> Self {
        let total_budget: f64 = projects.iter().map(|p| p.budget).sum();
        Self {
            rows: generate_cost_analysis(total_budget, materials, expenses),
            total_budget,
        }
    }

    /// Rows whose actual spend exceeds the allocated budget
    pub fn overruns(&self) -> impl Iterator<Item = &CostAnalysisRow> {
        self.rows.iter().filter(|row| row.actual > row.budget)
    }
}

pub struct ReportsPage {
    client: Arc<ApiClient>,
}

impl ReportsPage {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn load(
        &self,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Project>, Vec<Material>, Vec<Expense>), ApiError> {
        futures::try_join!(
            self.client.list_projects(cancel),
            self.client.list_materials(cancel),
            self.client.list_expenses(cancel),
        )
    }
}

#[async_trait]
impl Page for ReportsPage {
    fn name(&self) -> &'static str {
        "reports"
    }

    async fn refresh(&self, state: &SharedState, cancel: &CancellationToken) -> Result<(), ApiError> {
        let (projects, materials, expenses) = self.load(cancel).await?;
        let report = CostReport::build(&projects, &materials, &expenses);

        {
            let mut guard = state.lock().await;
            guard.dispatch(Action::ReplaceProjects(projects));
            guard.dispatch(Action::ReplaceMaterials(materials));
            guard.dispatch(Action::ReplaceExpenses(expenses));
        }

        for row in &report.rows {
            info!(
                category = row.category.as_str(),
                budget = row.budget,
                actual = row.actual,
                variance = row.variance,
                "cost analysis row"
            );
        }
        for row in report.overruns() {
            warn!(
                category = row.category.as_str(),
                over_by = row.actual - row.budget,
                "budget overrun"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consty_calc::money_spent;

    fn project_with_budget(budget: f64) -> Project {
        Project {
            id: Some(1),
            name: "Tower".into(),
            budget,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_totals_project_budgets() {
        let projects = vec![project_with_budget(600.0), project_with_budget(400.0)];
        let report = CostReport::build(&projects, &[], &[]);

        assert_eq!(report.total_budget, 1000.0);
        let allocated: f64 = report.rows.iter().map(|r| r.budget).sum();
        assert_eq!(allocated, 1000.0);
    }

    #[test]
    fn test_overruns_flag_heavy_material_spend() {
        let projects = vec![project_with_budget(100.0)];
        let materials = vec![Material {
            id: Some(1),
            name: "Steel".into(),
            quantity: 50.0,
            used: 40.0,
            damaged: 0.0,
            unit_price: 10.0,
            ..Default::default()
        }];
        assert_eq!(money_spent(&materials[0]), 400.0);

        let report = CostReport::build(&projects, &materials, &[]);
        let overrun: Vec<_> = report.overruns().collect();
        assert_eq!(overrun.len(), 1);
        assert_eq!(overrun[0].category.as_str(), "Materials");
    }
}
