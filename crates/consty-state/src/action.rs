//! State transitions

use consty_core::traits::Id;
use consty_models::{
    Document, Employee, Expense, Machine, Material, Project, SalaryPayment, SessionUser, Supplier,
    Task,
};

/// The modal dialogs a page can have open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    NewProject,
    EditProject,
    ConfirmDelete,
    NewTask,
    LogUsage,
    PaySalary,
    UploadDocument,
}

/// Every way the application state can change
#[derive(Debug)]
pub enum Action {
    SetSession(Option<SessionUser>),

    // Wholesale list replacement after a fetch (refetch-after-write).
    ReplaceProjects(Vec<Project>),
    ReplaceTasks(Vec<Task>),
    ReplaceMaterials(Vec<Material>),
    ReplaceMachines(Vec<Machine>),
    ReplaceEmployees(Vec<Employee>),
    ReplaceExpenses(Vec<Expense>),
    ReplaceSuppliers(Vec<Supplier>),
    ReplaceSalaryPayments(Vec<SalaryPayment>),
    ReplaceDocuments(Vec<Document>),

    OpenModal(Modal),
    CloseModal(Modal),
    CloseAllModals,

    SelectProject(Option<Id>),
    SelectEmployee(Option<Id>),

    SetSearch(String),
    SetLoading(bool),

    SetError(String),
    DismissError,
}
