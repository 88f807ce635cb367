//! Task endpoints

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::{CreateTaskDto, Task, TaskStatus};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct TasksEnvelope {
    #[serde(default)]
    tasks: Vec<Task>,
}

impl ApiClient {
    pub async fn list_tasks(&self, cancel: &CancellationToken) -> Result<Vec<Task>, ApiError> {
        let request = self.http.get(self.endpoint("tasks"));
        let envelope: TasksEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.tasks)
    }

    pub async fn create_task(
        &self,
        dto: &CreateTaskDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("tasks")).json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn update_task_status(
        &self,
        id: Id,
        status: TaskStatus,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .patch(self.endpoint("tasks"))
            .query(&[("id", id)])
            .json(&serde_json::json!({ "status": status }));
        self.mutate(request, cancel).await
    }

    pub async fn delete_task(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.delete(self.endpoint("tasks")).query(&[("id", id)]);
        self.mutate(request, cancel).await
    }
}
