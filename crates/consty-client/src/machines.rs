//! Machine endpoints, mirroring the material surface

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::{CreateMachineDto, Machine};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct MachinesEnvelope {
    #[serde(default)]
    machines: Vec<Machine>,
}

impl ApiClient {
    pub async fn list_machines(&self, cancel: &CancellationToken) -> Result<Vec<Machine>, ApiError> {
        let request = self.http.get(self.endpoint("machines"));
        let envelope: MachinesEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.machines)
    }

    pub async fn create_machine(
        &self,
        dto: &CreateMachineDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("machines")).json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn delete_machine(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("machines"))
            .query(&[("id", id)]);
        self.mutate(request, cancel).await
    }

    /// Record used/damaged counts against a machine
    pub async fn log_machine_usage(
        &self,
        machine_id: Id,
        quantity_used: f64,
        quantity_damaged: f64,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let body = serde_json::json!({
            "machine_id": machine_id,
            "quantity_used": quantity_used,
            "quantity_damaged": quantity_damaged,
        });
        let request = self.http.post(self.endpoint("machine_usage")).json(&body);
        self.mutate(request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope() {
        let json = r#"{"machines": [
            {"id": 2, "name": "Excavator", "quantity": 4, "used": 1, "damaged": 0, "unit_price": "50000"}
        ]}"#;
        let envelope: MachinesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.machines[0].unit_price, 50000.0);
    }
}
