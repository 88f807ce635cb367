//! The owned application state

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use consty_calc::{total_money_spent, validate_usage, UsageDelta, UsageLogEntry};
use consty_core::error::ValidationErrors;
use consty_core::traits::{Id, Identifiable};
use consty_models::{
    Document, Employee, Expense, Machine, Material, Project, SalaryPayment, SessionUser, Supplier,
    Task,
};

use crate::action::{Action, Modal};

/// Which stock-tracked list a usage delta targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Material,
    Machine,
}

impl ResourceKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Machine => "machine",
        }
    }
}

/// Headline numbers shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub employee_count: usize,
    pub total_budget: f64,
    pub total_spent: f64,
}

/// All state a page can read. One owned value, mutated only through
/// [`AppState::dispatch`] and [`AppState::log_usage`].
#[derive(Debug, Default)]
pub struct AppState {
    pub session: Option<SessionUser>,

    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub materials: Vec<Material>,
    pub machines: Vec<Machine>,
    pub employees: Vec<Employee>,
    pub expenses: Vec<Expense>,
    pub suppliers: Vec<Supplier>,
    pub salary_payments: Vec<SalaryPayment>,
    pub documents: Vec<Document>,

    /// Synthetic usage-log lines awaiting server confirmation
    pub pending_usage_logs: Vec<UsageLogEntry>,

    pub open_modals: HashSet<Modal>,
    pub selected_project: Option<Id>,
    pub selected_employee: Option<Id>,

    pub search: String,
    pub loading: bool,
    /// Dismissible error banner; `None` when hidden
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one state transition.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetSession(user) => self.session = user,

            Action::ReplaceProjects(list) => self.projects = list,
            Action::ReplaceTasks(list) => self.tasks = list,
            Action::ReplaceMaterials(list) => {
                self.materials = list;
                // Server truth arrived; synthetic material lines are stale.
                self.drop_pending_logs(ResourceKind::Material);
            }
            Action::ReplaceMachines(list) => {
                self.machines = list;
                self.drop_pending_logs(ResourceKind::Machine);
            }
            Action::ReplaceEmployees(list) => self.employees = list,
            Action::ReplaceExpenses(list) => self.expenses = list,
            Action::ReplaceSuppliers(list) => self.suppliers = list,
            Action::ReplaceSalaryPayments(list) => self.salary_payments = list,
            Action::ReplaceDocuments(list) => self.documents = list,

            Action::OpenModal(modal) => {
                self.open_modals.insert(modal);
            }
            Action::CloseModal(modal) => {
                self.open_modals.remove(&modal);
            }
            Action::CloseAllModals => self.open_modals.clear(),

            Action::SelectProject(id) => self.selected_project = id,
            Action::SelectEmployee(id) => self.selected_employee = id,

            Action::SetSearch(term) => self.search = term,
            Action::SetLoading(loading) => self.loading = loading,

            Action::SetError(message) => self.error = Some(message),
            Action::DismissError => self.error = None,
        }
    }

    /// Optimistically apply a usage delta to a material or machine.
    ///
    /// Validates against the current leftover first; a rejected delta
    /// returns the errors and leaves every field of the state untouched.
    /// On acceptance the counters move immediately and a synthetic log
    /// entry is queued until the next refetch replaces the list.
    pub fn log_usage(
        &mut self,
        kind: ResourceKind,
        resource_id: Id,
        delta: UsageDelta,
        now: DateTime<Utc>,
    ) -> Result<UsageLogEntry, ValidationErrors> {
        let entry = match kind {
            ResourceKind::Material => {
                let material = self
                    .materials
                    .iter_mut()
                    .find(|m| m.id() == Some(resource_id))
                    .ok_or_else(|| ValidationErrors::single("material", "not found"))?;
                validate_usage(&*material, &delta)?;
                material.used += delta.used;
                material.damaged += delta.damaged;
                UsageLogEntry::synthetic(Some(resource_id), kind.as_str(), &delta, now)
            }
            ResourceKind::Machine => {
                let machine = self
                    .machines
                    .iter_mut()
                    .find(|m| m.id() == Some(resource_id))
                    .ok_or_else(|| ValidationErrors::single("machine", "not found"))?;
                validate_usage(&*machine, &delta)?;
                machine.used += delta.used;
                machine.damaged += delta.damaged;
                UsageLogEntry::synthetic(Some(resource_id), kind.as_str(), &delta, now)
            }
        };

        tracing::debug!(
            resource_id,
            kind = entry.resource_kind,
            used = delta.used,
            damaged = delta.damaged,
            "usage logged optimistically"
        );
        self.pending_usage_logs.push(entry.clone());
        Ok(entry)
    }

    fn drop_pending_logs(&mut self, kind: ResourceKind) {
        self.pending_usage_logs
            .retain(|entry| entry.resource_kind != kind.as_str());
    }

    // ---- derived views ----

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|u| u.is_admin())
    }

    pub fn is_modal_open(&self, modal: Modal) -> bool {
        self.open_modals.contains(&modal)
    }

    /// Projects whose name matches the current search, case-insensitive
    pub fn filtered_projects(&self) -> Vec<&Project> {
        let term = self.search.to_lowercase();
        self.projects
            .iter()
            .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Employees whose name matches the current search
    pub fn filtered_employees(&self) -> Vec<&Employee> {
        let term = self.search.to_lowercase();
        self.employees
            .iter()
            .filter(|e| term.is_empty() || e.name.to_lowercase().contains(&term))
            .collect()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected_project?;
        self.projects.iter().find(|p| p.id() == Some(id))
    }

    /// Headline dashboard numbers from the loaded lists
    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_projects: self.projects.len(),
            completed_projects: self.projects.iter().filter(|p| p.is_completed()).count(),
            employee_count: self.employees.len(),
            total_budget: self.projects.iter().map(|p| p.budget).sum(),
            total_spent: total_money_spent(&self.materials) + total_money_spent(&self.machines),
        }
    }
}
