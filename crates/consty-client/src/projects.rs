//! Project endpoints

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::{CreateProjectDto, Project, UpdateProjectDto};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct ProjectsEnvelope {
    #[serde(default)]
    projects: Vec<Project>,
}

impl ApiClient {
    pub async fn list_projects(&self, cancel: &CancellationToken) -> Result<Vec<Project>, ApiError> {
        let request = self.http.get(self.endpoint("projects"));
        let envelope: ProjectsEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.projects)
    }

    pub async fn create_project(
        &self,
        dto: &CreateProjectDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("projects")).json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn update_project(
        &self,
        id: Id,
        dto: &UpdateProjectDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .patch(self.endpoint("projects"))
            .query(&[("id", id)])
            .json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn delete_project(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("projects"))
            .query(&[("id", id)]);
        self.mutate(request, cancel).await
    }
}
