//! # consty-client
//!
//! Typed async client for the remote PHP API (`<base>/<resource>.php`).
//!
//! Every call returns an explicit `Result<T, ApiError>` and takes a
//! [`CancellationToken`]: when the owning view is torn down the token is
//! cancelled and the in-flight request resolves to
//! [`ApiError::Cancelled`] instead of updating anything. The session
//! cookie lives in the client's cookie store.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use consty_core::config::ApiConfig;

pub mod error;
mod envelope;

mod documents;
mod employees;
mod expenses;
mod machines;
mod materials;
mod projects;
mod salaries;
mod session;
mod suppliers;
mod tasks;

pub use envelope::MutationResponse;
pub use error::ApiError;
pub use salaries::PaySalaryRequest;

use envelope::ErrorBody;

/// HTTP client for one Consty backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the URL for one PHP endpoint, e.g. `projects` ->
    /// `http://host/consty/api/projects.php`.
    fn endpoint(&self, resource: &str) -> String {
        format!(
            "{}/{}.php",
            self.base_url.as_str().trim_end_matches('/'),
            resource
        )
    }

    // ---- request plumbing ----

    /// Send a request, racing it against the cancellation token.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<reqwest::Response, ApiError> {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("request dropped, owning view cancelled");
                Err(ApiError::Cancelled)
            }
            response = request.send() => Ok(response?),
        }
    }

    /// Send and decode a JSON response body into the expected type.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        let response = self.send(request, cancel).await?;
        Self::parse_response(response).await
    }

    /// Send a write and check the `{success, error?}` envelope.
    pub(crate) async fn mutate(
        &self,
        request: reqwest::RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let outcome: MutationResponse = self.fetch(request, cancel).await?;
        if outcome.success {
            Ok(outcome)
        } else {
            Err(ApiError::Api(
                outcome
                    .error
                    .unwrap_or_else(|| "the server rejected the request".to_string()),
            ))
        }
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "request failed");
            // Some endpoints wrap the failure in `{error}` even on
            // non-2xx; prefer that message when present.
            if let Ok(err) = serde_json::from_str::<ErrorBody>(&body) {
                return Err(ApiError::Api(err.error));
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
