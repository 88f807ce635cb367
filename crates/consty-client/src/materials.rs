//! Material endpoints, including usage logging

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::{CreateMaterialDto, Material};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct MaterialsEnvelope {
    #[serde(default)]
    materials: Vec<Material>,
}

/// Body of a usage-log write, validated client-side before this is sent
#[derive(Debug, Serialize)]
pub(crate) struct UsageLogRequest {
    pub material_id: Id,
    pub quantity_used: f64,
    pub quantity_damaged: f64,
}

impl ApiClient {
    pub async fn list_materials(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Material>, ApiError> {
        let request = self.http.get(self.endpoint("materials"));
        let envelope: MaterialsEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.materials)
    }

    pub async fn create_material(
        &self,
        dto: &CreateMaterialDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("materials")).json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn delete_material(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("materials"))
            .query(&[("id", id)]);
        self.mutate(request, cancel).await
    }

    /// Record used/damaged quantities against a material
    pub async fn log_material_usage(
        &self,
        material_id: Id,
        quantity_used: f64,
        quantity_damaged: f64,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let body = UsageLogRequest {
            material_id,
            quantity_used,
            quantity_damaged,
        };
        let request = self.http.post(self.endpoint("material_usage")).json(&body);
        self.mutate(request, cancel).await
    }
}
