//! Response envelope conventions of the PHP API
//!
//! Lists arrive as `{"<resource_plural>": [...]}` (each endpoint module
//! declares its own envelope struct); mutations arrive as
//! `{"success": bool, "error"?: string, ...}`.

use consty_core::traits::Id;
use serde::Deserialize;

/// Standard mutation response
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,

    pub error: Option<String>,

    /// Id of the created record, when the endpoint returns one
    pub id: Option<Id>,
}

/// Error payload some endpoints return with a 2xx status
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
