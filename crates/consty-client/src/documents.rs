//! Document endpoints
//!
//! Uploads go as `multipart/form-data`; everything else is the usual JSON
//! surface. Uploaded files are later served as static paths under the
//! API host.

use reqwest::multipart;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::Document;

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct DocumentsEnvelope {
    #[serde(default)]
    documents: Vec<Document>,
}

impl ApiClient {
    pub async fn list_documents(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Document>, ApiError> {
        let request = self.http.get(self.endpoint("documents"));
        let envelope: DocumentsEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.documents)
    }

    /// Upload a document for a project. The MIME type is guessed from the
    /// file name; the server decides the final stored path.
    pub async fn upload_document(
        &self,
        project_id: Id,
        file_name: &str,
        bytes: Vec<u8>,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())?;
        let form = multipart::Form::new()
            .text("project_id", project_id.to_string())
            .part("file", part);

        let request = self.http.post(self.endpoint("documents")).multipart(form);
        self.mutate(request, cancel).await
    }

    pub async fn delete_document(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("documents"))
            .query(&[("id", id)]);
        self.mutate(request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope() {
        let json = r#"{"documents": [
            {"id": 5, "project_id": 2, "name": "site-plan.pdf", "path": "/uploads/site-plan.pdf"}
        ]}"#;
        let envelope: DocumentsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.documents[0].name, "site-plan.pdf");
    }

    #[test]
    fn test_mime_guess_for_uploads() {
        let mime = mime_guess::from_path("site-plan.pdf").first_or_octet_stream();
        assert_eq!(mime.as_ref(), "application/pdf");

        let fallback = mime_guess::from_path("blueprint.xyzq").first_or_octet_stream();
        assert_eq!(fallback.as_ref(), "application/octet-stream");
    }
}
