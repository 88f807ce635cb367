//! # consty-models
//!
//! Domain models for Consty RS.
//!
//! Plain records mirrored from the remote relational store. The frontend
//! owns no authoritative state: every list is refetched after each write,
//! so these structs stay lenient about what the server sends (optional
//! fields, numbers-as-strings, unknown enum values).

pub use consty_core::traits::{Id, Identifiable, ProjectScoped, StockTracked};

pub mod document;
pub mod employee;
pub mod expense;
pub mod machine;
pub mod material;
pub mod project;
pub mod salary;
pub mod session;
pub mod supplier;
pub mod task;

pub use document::Document;
pub use employee::{CreateEmployeeDto, Employee};
pub use expense::{CreateExpenseDto, Expense};
pub use machine::{CreateMachineDto, Machine};
pub use material::{CreateMaterialDto, Material};
pub use project::{CreateProjectDto, Project, ProjectStatus, UpdateProjectDto};
pub use salary::{PreviousBalance, SalaryPayment, UnpaidMonth};
pub use session::{SessionUser, UserRole};
pub use supplier::{CreateSupplierDto, Supplier};
pub use task::{CreateTaskDto, Task, TaskPriority, TaskStatus};
