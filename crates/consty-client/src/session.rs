//! Session endpoints
//!
//! The session itself is a cookie held by the client's cookie store; the
//! returned `SessionUser` is mirrored into application state for
//! synchronous role checks.

use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use consty_models::SessionUser;

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    error: Option<String>,
    user: Option<SessionUser>,
}

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    user: Option<SessionUser>,
}

impl ApiClient {
    /// Authenticate and return the session user. The session cookie is
    /// captured by the cookie store as a side effect.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<SessionUser, ApiError> {
        let body = LoginRequest { username, password };
        let request = self.http.post(self.endpoint("login")).json(&body);
        let response: LoginResponse = self.fetch(request, cancel).await?;

        if !response.success {
            return Err(ApiError::Api(
                response.error.unwrap_or_else(|| "login failed".to_string()),
            ));
        }
        response
            .user
            .ok_or_else(|| ApiError::Api("login succeeded but no user returned".to_string()))
    }

    /// Validate the current cookie session; `None` means not logged in.
    pub async fn current_session(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<SessionUser>, ApiError> {
        let request = self.http.get(self.endpoint("session"));
        let envelope: SessionEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.user)
    }

    pub async fn logout(&self, cancel: &CancellationToken) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("logout"));
        self.mutate(request, cancel).await
    }

    /// Register a new account. Sent as multipart because the form can
    /// carry a profile photo.
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        photo: Option<(String, Vec<u8>)>,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let mut form = multipart::Form::new()
            .text("username", username.to_string())
            .text("password", password.to_string());
        if let Some((file_name, bytes)) = photo {
            let mime = mime_guess::from_path(&file_name).first_or_octet_stream();
            let part = multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(mime.as_ref())?;
            form = form.part("photo", part);
        }

        let request = self.http.post(self.endpoint("signup")).multipart(form);
        self.mutate(request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response() {
        let json = r#"{
            "success": true,
            "user": {"id": 1, "username": "site_admin", "role": "admin", "photo": null}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert!(response.user.unwrap().is_admin());
    }

    #[test]
    fn test_anonymous_session() {
        let envelope: SessionEnvelope = serde_json::from_str(r#"{"user": null}"#).unwrap();
        assert!(envelope.user.is_none());
    }
}
