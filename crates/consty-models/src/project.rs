//! Project model

use chrono::NaiveDate;
use consty_core::traits::{Id, Identifiable};
use consty_core::types::{de_f64_flex, de_opt_f64_flex, DateSpan};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    #[default]
    Ongoing,
    OnHold,
    Completed,
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Ongoing => "ongoing",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }
}

/// Project entity
///
/// `progress` is the explicit completion percentage when the server has
/// one; when absent it is derived from tasks or dates (see `consty-calc`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Project {
    pub id: Option<Id>,

    pub name: String,

    /// Client the project is billed to
    pub client: Option<String>,

    /// Total approved budget
    #[serde(default, deserialize_with = "de_f64_flex")]
    pub budget: f64,

    #[serde(default)]
    pub status: ProjectStatus,

    pub start_date: Option<NaiveDate>,

    /// Contractual deadline; the API uses `end_date` and `deadline`
    /// interchangeably
    #[serde(alias = "end_date")]
    pub deadline: Option<NaiveDate>,

    /// Explicit completion percentage, when the server tracks one
    #[serde(default, deserialize_with = "de_opt_f64_flex")]
    pub progress: Option<f64>,
}

impl Identifiable for Project {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn dates(&self) -> DateSpan {
        DateSpan::new(self.start_date, self.deadline)
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProjectStatus::Completed
    }
}

/// DTO for creating a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectDto {
    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub name: String,

    pub client: Option<String>,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub budget: f64,

    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
}

/// DTO for updating a project
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProjectDto {
    pub name: Option<String>,
    pub client: Option<String>,
    pub budget: Option<f64>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub progress: Option<f64>,
}

impl UpdateProjectDto {
    /// Apply the set fields to a project
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(ref name) = self.name {
            project.name = name.clone();
        }
        if let Some(ref client) = self.client {
            project.client = Some(client.clone());
        }
        if let Some(budget) = self.budget {
            project.budget = budget;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(start) = self.start_date {
            project.start_date = Some(start);
        }
        if let Some(deadline) = self.deadline {
            project.deadline = Some(deadline);
        }
        if let Some(progress) = self.progress {
            project.progress = Some(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_lenient() {
        let json = r#"{
            "id": 3,
            "name": "Riverside Tower",
            "client": "Acme Holdings",
            "budget": "125000.50",
            "status": "ongoing",
            "start_date": "2025-01-15",
            "end_date": "2025-12-31",
            "progress": null
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, Some(3));
        assert_eq!(project.budget, 125000.50);
        assert_eq!(project.status, ProjectStatus::Ongoing);
        assert_eq!(project.progress, None);
        assert!(project.deadline.is_some());
    }

    #[test]
    fn test_unknown_status_tolerated() {
        let json = r#"{"id": 1, "name": "X", "status": "archived"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::Unknown);
    }

    #[test]
    fn test_update_apply_to() {
        let mut project = Project::new("Old name");
        let dto = UpdateProjectDto {
            name: Some("New name".into()),
            budget: Some(5000.0),
            ..Default::default()
        };
        dto.apply_to(&mut project);

        assert_eq!(project.name, "New name");
        assert_eq!(project.budget, 5000.0);
        assert_eq!(project.status, ProjectStatus::Ongoing);
    }

    #[test]
    fn test_create_dto_validation() {
        use validator::Validate;

        let dto = CreateProjectDto {
            name: String::new(),
            client: None,
            budget: -5.0,
            status: None,
            start_date: None,
            deadline: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("budget"));
    }
}
