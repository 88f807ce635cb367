//! Supplier endpoints

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::{CreateSupplierDto, Supplier};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct SuppliersEnvelope {
    #[serde(default)]
    suppliers: Vec<Supplier>,
}

impl ApiClient {
    pub async fn list_suppliers(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Supplier>, ApiError> {
        let request = self.http.get(self.endpoint("suppliers"));
        let envelope: SuppliersEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.suppliers)
    }

    pub async fn create_supplier(
        &self,
        dto: &CreateSupplierDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("suppliers")).json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn delete_supplier(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("suppliers"))
            .query(&[("id", id)]);
        self.mutate(request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope() {
        let json = r#"{"suppliers": [{"id": 4, "name": "SteelCo", "phone": "555-0101"}]}"#;
        let envelope: SuppliersEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.suppliers[0].name, "SteelCo");
    }
}
