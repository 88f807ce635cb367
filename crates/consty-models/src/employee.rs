//! Employee model

use consty_core::traits::{Id, Identifiable, ProjectScoped};
use consty_core::types::de_f64_flex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Employee {
    pub id: Option<Id>,

    pub name: String,

    /// Job title as entered (engineer, foreman, laborer)
    pub position: Option<String>,

    /// Monthly salary baseline
    #[serde(default, deserialize_with = "de_f64_flex")]
    pub salary: f64,

    /// Project the employee is currently assigned to
    pub project_id: Option<Id>,
}

impl Identifiable for Employee {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl ProjectScoped for Employee {
    fn project_id(&self) -> Option<Id> {
        self.project_id
    }
}

/// DTO for creating an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeDto {
    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub name: String,

    pub position: Option<String>,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub salary: f64,

    pub project_id: Option<Id>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_salary_string() {
        let json = r#"{"id": 7, "name": "A. Mason", "salary": "2500", "project_id": 1}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.salary, 2500.0);
        assert!(employee.belongs_to(1));
    }
}
