//! Document upload and listing

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use consty_client::ApiClient;
use consty_core::error::ValidationErrors;
use consty_core::result::SubmitResult;
use consty_core::traits::Id;
use consty_state::{Action, Modal};

use super::SharedState;

pub struct DocumentsPage {
    client: Arc<ApiClient>,
}

impl DocumentsPage {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Upload a file against a project, then refetch the list.
    pub async fn upload(
        &self,
        state: &SharedState,
        project_id: Id,
        file_name: &str,
        bytes: Vec<u8>,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        let mut errors = ValidationErrors::new();
        if file_name.trim().is_empty() {
            errors.add("file", "name is required");
        }
        if bytes.is_empty() {
            errors.add("file", "is empty");
        }
        if let Err(errors) = errors.into_result() {
            return SubmitResult::failure(errors);
        }

        let size = bytes.len();
        if let Err(err) = self
            .client
            .upload_document(project_id, file_name, bytes, cancel)
            .await
        {
            return SubmitResult::failure_with_message(err.to_string());
        }
        info!(project_id, file_name, size, "document uploaded");

        self.reload(state, cancel).await;
        state.lock().await.dispatch(Action::CloseModal(Modal::UploadDocument));
        SubmitResult::success(())
    }

    pub async fn remove(
        &self,
        state: &SharedState,
        document_id: Id,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        if let Err(err) = self.client.delete_document(document_id, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }
        self.reload(state, cancel).await;
        SubmitResult::success(())
    }

    async fn reload(&self, state: &SharedState, cancel: &CancellationToken) {
        match self.client.list_documents(cancel).await {
            Ok(documents) => state
                .lock()
                .await
                .dispatch(Action::ReplaceDocuments(documents)),
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!(error = %err, "refetch after document write failed"),
        }
    }
}
