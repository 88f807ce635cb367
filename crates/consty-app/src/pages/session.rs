//! Login and logout flows

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use consty_client::ApiClient;
use consty_core::error::ValidationErrors;
use consty_core::result::SubmitResult;
use consty_models::SessionUser;
use consty_state::Action;

use super::SharedState;

/// Authenticate and mirror the user into the state. The cookie store on
/// the client keeps the session for subsequent calls.
pub async fn sign_in(
    client: &ApiClient,
    state: &SharedState,
    username: &str,
    password: &str,
    cancel: &CancellationToken,
) -> SubmitResult<SessionUser> {
    let mut errors = ValidationErrors::new();
    if username.trim().is_empty() {
        errors.add("username", "is required");
    }
    if password.is_empty() {
        errors.add("password", "is required");
    }
    if let Err(errors) = errors.into_result() {
        return SubmitResult::failure(errors);
    }

    match client.login(username, password, cancel).await {
        Ok(user) => {
            info!(username = %user.username, "signed in");
            state
                .lock()
                .await
                .dispatch(Action::SetSession(Some(user.clone())));
            SubmitResult::success(user)
        }
        Err(err) => SubmitResult::failure_with_message(err.to_string()),
    }
}

/// End the session remotely and clear the mirrored user. The local state
/// is cleared even when the remote call fails; the cookie is gone either
/// way once the process exits.
pub async fn sign_out(client: &ApiClient, state: &SharedState, cancel: &CancellationToken) {
    if let Err(err) = client.logout(cancel).await {
        warn!(error = %err, "logout request failed");
    }
    let mut guard = state.lock().await;
    guard.dispatch(Action::SetSession(None));
    guard.dispatch(Action::CloseAllModals);
}
