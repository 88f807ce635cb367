//! Document model
//!
//! Uploaded files are stored server-side; records carry the static path
//! they are served from under the API host.

use chrono::{DateTime, Utc};
use consty_core::traits::{Id, Identifiable, ProjectScoped};
use serde::{Deserialize, Serialize};

/// Document entity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Document {
    pub id: Option<Id>,
    pub project_id: Option<Id>,
    pub name: String,
    /// Static path under the API host
    pub path: String,
    pub mime_type: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Identifiable for Document {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl ProjectScoped for Document {
    fn project_id(&self) -> Option<Id> {
        self.project_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "id": 5,
            "project_id": 2,
            "name": "site-plan.pdf",
            "path": "/consty/api/uploads/site-plan.pdf",
            "mime_type": "application/pdf"
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.name, "site-plan.pdf");
        assert!(doc.path.ends_with("site-plan.pdf"));
    }
}
