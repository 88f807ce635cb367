//! Task model

use chrono::NaiveDate;
use consty_core::traits::{Id, Identifiable, ProjectScoped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

/// Task entity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Task {
    pub id: Option<Id>,
    pub project_id: Option<Id>,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub deadline: Option<NaiveDate>,
    /// Employee the task is assigned to
    pub assigned_to: Option<Id>,
}

impl Identifiable for Task {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl ProjectScoped for Task {
    fn project_id(&self) -> Option<Id> {
        self.project_id
    }
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed() && self.deadline.is_some_and(|d| d < today)
    }
}

/// DTO for creating a task
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskDto {
    pub project_id: Id,

    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub title: String,

    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub deadline: Option<NaiveDate>,
    pub assigned_to: Option<Id>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_completed() {
        let mut task = Task {
            title: "Pour foundation".into(),
            ..Default::default()
        };
        assert!(!task.is_completed());

        task.status = TaskStatus::Completed;
        assert!(task.is_completed());
    }

    #[test]
    fn test_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let task = Task {
            title: "Install wiring".into(),
            deadline: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..Default::default()
        };
        assert!(task.is_overdue(today));

        let done = Task {
            status: TaskStatus::Completed,
            ..task.clone()
        };
        assert!(!done.is_overdue(today));
    }

    #[test]
    fn test_deserialize_unknown_priority() {
        let json = r#"{"id": 1, "project_id": 2, "title": "X", "priority": "urgent"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, TaskPriority::Unknown);
        assert!(task.belongs_to(2));
    }
}
