//! Inventory page (materials and machines)
//!
//! Usage logging is the one optimistic write in the app: the counters
//! move locally the moment the delta validates, then the server copy
//! replaces the list on the follow-up fetch.

use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use consty_calc::{UsageDelta, UsageLogEntry};
use consty_client::{ApiClient, ApiError};
use consty_core::result::SubmitResult;
use consty_core::traits::Id;
use consty_models::{CreateMachineDto, CreateMaterialDto};
use consty_state::{Action, ResourceKind};

use super::SharedState;

pub struct InventoryPage {
    client: Arc<ApiClient>,
}

impl InventoryPage {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Log used/damaged quantities against a material or machine.
    ///
    /// A delta the local validation rejects never reaches the network.
    /// An accepted delta is applied to the state immediately; the entry
    /// it returns carries the synthetic id shown until the refetch.
    pub async fn submit_usage(
        &self,
        state: &SharedState,
        kind: ResourceKind,
        resource_id: Id,
        delta: UsageDelta,
        cancel: &CancellationToken,
    ) -> SubmitResult<UsageLogEntry> {
        let entry = {
            let mut guard = state.lock().await;
            match guard.log_usage(kind, resource_id, delta, Utc::now()) {
                Ok(entry) => entry,
                Err(errors) => return SubmitResult::failure(errors),
            }
        };

        let sent = match kind {
            ResourceKind::Material => {
                self.client
                    .log_material_usage(resource_id, delta.used, delta.damaged, cancel)
                    .await
            }
            ResourceKind::Machine => {
                self.client
                    .log_machine_usage(resource_id, delta.used, delta.damaged, cancel)
                    .await
            }
        };
        if let Err(err) = sent {
            if !err.is_cancelled() {
                state.lock().await.dispatch(Action::SetError(err.to_string()));
            }
            return SubmitResult::failure_with_message(err.to_string());
        }

        self.reconcile(state, kind, cancel).await;
        SubmitResult::success(entry)
    }

    pub async fn add_material(
        &self,
        state: &SharedState,
        dto: &CreateMaterialDto,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(err) = self.client.create_material(dto, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }
        self.reconcile(state, ResourceKind::Material, cancel).await;
        SubmitResult::success(())
    }

    pub async fn add_machine(
        &self,
        state: &SharedState,
        dto: &CreateMachineDto,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(err) = self.client.create_machine(dto, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }
        self.reconcile(state, ResourceKind::Machine, cancel).await;
        SubmitResult::success(())
    }

    /// Refetch one list after a write; the replacement also clears the
    /// pending synthetic log entries for that kind.
    async fn reconcile(&self, state: &SharedState, kind: ResourceKind, cancel: &CancellationToken) {
        let refreshed: Result<Action, ApiError> = match kind {
            ResourceKind::Material => self
                .client
                .list_materials(cancel)
                .await
                .map(Action::ReplaceMaterials),
            ResourceKind::Machine => self
                .client
                .list_machines(cancel)
                .await
                .map(Action::ReplaceMachines),
        };
        match refreshed {
            Ok(action) => state.lock().await.dispatch(action),
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!(error = %err, "refetch after inventory write failed"),
        }
    }
}
