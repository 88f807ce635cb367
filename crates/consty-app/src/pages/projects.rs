//! Project and task write flows
//!
//! Every mutation follows write-then-refetch: the server response is
//! only an ack, the replaced list is the authority.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use validator::Validate;

use consty_client::ApiClient;
use consty_core::error::{from_validator, ValidationErrors};
use consty_core::result::SubmitResult;
use consty_core::traits::{Id, Identifiable};
use consty_models::{CreateProjectDto, CreateTaskDto, Project, TaskStatus, UpdateProjectDto};
use consty_state::{Action, Modal};

use super::SharedState;

pub struct ProjectsPage {
    client: Arc<ApiClient>,
}

/// Run derive-level validation plus the date-order rule shared by the
/// create and edit forms.
pub(crate) fn validate_project_dates(
    start: Option<chrono::NaiveDate>,
    deadline: Option<chrono::NaiveDate>,
) -> Result<(), ValidationErrors> {
    if let (Some(start), Some(deadline)) = (start, deadline) {
        if deadline <= start {
            return Err(ValidationErrors::single(
                "deadline",
                "must be after the start date",
            ));
        }
    }
    Ok(())
}

/// Validate an edit against the record it lands on. The partial DTO is
/// applied to a copy of the stored project so a lone deadline change is
/// still checked against the existing start date.
pub(crate) fn validate_update(
    project: &Project,
    dto: &UpdateProjectDto,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(budget) = dto.budget {
        if budget < 0.0 {
            errors.add("budget", "must not be negative");
        }
    }
    errors.into_result()?;

    let mut merged = project.clone();
    dto.apply_to(&mut merged);
    validate_project_dates(merged.start_date, merged.deadline)
}

impl ProjectsPage {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create_project(
        &self,
        state: &SharedState,
        dto: &CreateProjectDto,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(errors) = dto.validate() {
            return SubmitResult::failure(from_validator(errors));
        }
        if let Err(errors) = validate_project_dates(dto.start_date, dto.deadline) {
            return SubmitResult::failure(errors);
        }

        if let Err(err) = self.client.create_project(dto, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }
        info!(name = %dto.name, "project created");

        self.reload_projects(state, cancel).await;
        state.lock().await.dispatch(Action::CloseModal(Modal::NewProject));
        SubmitResult::success(())
    }

    pub async fn update_project(
        &self,
        state: &SharedState,
        id: Id,
        dto: &UpdateProjectDto,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        let current = {
            let guard = state.lock().await;
            guard
                .projects
                .iter()
                .find(|p| p.id() == Some(id))
                .cloned()
        };
        let Some(current) = current else {
            return SubmitResult::failure(ValidationErrors::single("project", "not found"));
        };
        if let Err(errors) = validate_update(&current, dto) {
            return SubmitResult::failure(errors);
        }

        if let Err(err) = self.client.update_project(id, dto, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }

        self.reload_projects(state, cancel).await;
        state.lock().await.dispatch(Action::CloseModal(Modal::EditProject));
        SubmitResult::success(())
    }

    pub async fn delete_project(
        &self,
        state: &SharedState,
        id: Id,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(err) = self.client.delete_project(id, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }

        {
            let mut guard = state.lock().await;
            if guard.selected_project == Some(id) {
                guard.dispatch(Action::SelectProject(None));
            }
            guard.dispatch(Action::CloseModal(Modal::ConfirmDelete));
        }
        self.reload_projects(state, cancel).await;
        SubmitResult::success(())
    }

    pub async fn create_task(
        &self,
        state: &SharedState,
        dto: &CreateTaskDto,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(errors) = dto.validate() {
            return SubmitResult::failure(from_validator(errors));
        }

        if let Err(err) = self.client.create_task(dto, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }

        self.reload_tasks(state, cancel).await;
        state.lock().await.dispatch(Action::CloseModal(Modal::NewTask));
        SubmitResult::success(())
    }

    /// Move a task between the board columns.
    pub async fn set_task_status(
        &self,
        state: &SharedState,
        id: Id,
        status: TaskStatus,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(err) = self.client.update_task_status(id, status, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }
        self.reload_tasks(state, cancel).await;
        SubmitResult::success(())
    }

    pub async fn delete_task(
        &self,
        state: &SharedState,
        id: Id,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(err) = self.client.delete_task(id, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }
        self.reload_tasks(state, cancel).await;
        SubmitResult::success(())
    }

    async fn reload_projects(&self, state: &SharedState, cancel: &CancellationToken) {
        match self.client.list_projects(cancel).await {
            Ok(projects) => state
                .lock()
                .await
                .dispatch(Action::ReplaceProjects(projects)),
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!(error = %err, "refetch after project write failed"),
        }
    }

    async fn reload_tasks(&self, state: &SharedState, cancel: &CancellationToken) {
        match self.client.list_tasks(cancel).await {
            Ok(tasks) => state.lock().await.dispatch(Action::ReplaceTasks(tasks)),
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!(error = %err, "refetch after task write failed"),
        }
    }
}
