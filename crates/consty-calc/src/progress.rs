//! Project progress derivation
//!
//! Completion percentage by priority: explicit `progress` field, then the
//! task-completion ratio, then date interpolation, then 0.

use chrono::NaiveDate;
use consty_models::{Project, Task};

/// Compute a project's completion percentage in [0, 100].
///
/// Deterministic given its inputs; `today` is passed in rather than read
/// from the clock.
pub fn compute_progress(project: &Project, tasks: &[Task], today: NaiveDate) -> u8 {
    // Explicit percentage wins regardless of task data.
    if let Some(p) = project.progress {
        if p.is_finite() {
            return clamp_percent(p);
        }
    }

    // Task-completion ratio. A project without an id cannot own tasks.
    if let Some(project_id) = project.id {
        let mut total = 0usize;
        let mut completed = 0usize;
        for task in tasks.iter().filter(|t| t.project_id == Some(project_id)) {
            total += 1;
            if task.is_completed() {
                completed += 1;
            }
        }
        if total > 0 {
            return clamp_percent(completed as f64 / total as f64 * 100.0);
        }
    }

    // Date interpolation fallback.
    if let Some(fraction) = project.dates().fraction_elapsed(today) {
        return clamp_percent(fraction * 100.0);
    }

    0
}

fn clamp_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use consty_models::TaskStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn task(project_id: i64, status: TaskStatus) -> Task {
        Task {
            id: Some(1),
            project_id: Some(project_id),
            title: "t".into(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_progress_wins() {
        let project = Project {
            id: Some(1),
            progress: Some(37.4),
            ..Project::new("P")
        };
        // Tasks would say 0%, but the explicit field takes priority.
        let tasks = vec![task(1, TaskStatus::Pending)];
        assert_eq!(compute_progress(&project, &tasks, today()), 37);
    }

    #[test]
    fn test_explicit_progress_clamped() {
        let mut project = Project {
            id: Some(1),
            progress: Some(140.0),
            ..Project::new("P")
        };
        assert_eq!(compute_progress(&project, &[], today()), 100);

        project.progress = Some(-3.0);
        assert_eq!(compute_progress(&project, &[], today()), 0);
    }

    #[test]
    fn test_non_finite_progress_falls_through() {
        let project = Project {
            id: Some(1),
            progress: Some(f64::NAN),
            ..Project::new("P")
        };
        let tasks = vec![
            task(1, TaskStatus::Completed),
            task(1, TaskStatus::Pending),
        ];
        assert_eq!(compute_progress(&project, &tasks, today()), 50);
    }

    #[test]
    fn test_task_ratio() {
        let project = Project {
            id: Some(1),
            ..Project::new("P")
        };
        let tasks = vec![
            task(1, TaskStatus::Completed),
            task(1, TaskStatus::Completed),
            task(1, TaskStatus::Pending),
            task(1, TaskStatus::InProgress),
            // Another project's task must not count.
            task(2, TaskStatus::Completed),
        ];
        assert_eq!(compute_progress(&project, &tasks, today()), 50);
    }

    #[test]
    fn test_date_interpolation() {
        let project = Project {
            id: Some(1),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 5),
            deadline: NaiveDate::from_ymd_opt(2025, 6, 25),
            ..Project::new("P")
        };
        // 10 of 20 days elapsed.
        assert_eq!(compute_progress(&project, &[], today()), 50);

        // Past the deadline clamps to 100.
        let late = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(compute_progress(&project, &[], late), 100);
    }

    #[test]
    fn test_inverted_dates_yield_zero() {
        let project = Project {
            id: Some(1),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 25),
            deadline: NaiveDate::from_ymd_opt(2025, 6, 5),
            ..Project::new("P")
        };
        assert_eq!(compute_progress(&project, &[], today()), 0);
    }

    #[test]
    fn test_no_data_yields_zero() {
        let project = Project {
            id: Some(1),
            ..Project::new("P")
        };
        assert_eq!(compute_progress(&project, &[], today()), 0);
    }
}
