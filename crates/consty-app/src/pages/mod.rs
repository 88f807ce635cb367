//! Page view-models
//!
//! Each page owns its fetch/submit flows against the [`ApiClient`] and
//! publishes results into the shared [`AppState`] through actions. Pages
//! with an auto-refresh cycle implement [`Page`] and are driven by
//! [`run_refresh_loop`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use consty_client::ApiError;
use consty_state::{Action, AppState};

mod dashboard;
mod documents;
mod inventory;
mod projects;
mod reports;
mod salary;
mod session;

pub use dashboard::DashboardPage;
pub use documents::DocumentsPage;
pub use inventory::InventoryPage;
pub use projects::ProjectsPage;
pub use reports::{CostReport, ReportsPage};
pub use salary::SalaryPage;
pub use session::{sign_in, sign_out};

/// State handle shared between pages and refresh loops
pub type SharedState = Arc<Mutex<AppState>>;

/// A page that periodically refetches its data
#[async_trait]
pub trait Page: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch fresh data and publish it into the state. Must not touch
    /// the state when the token is cancelled mid-flight.
    async fn refresh(&self, state: &SharedState, cancel: &CancellationToken) -> Result<(), ApiError>;
}

/// Drive a page's refresh cycle until the token is cancelled.
///
/// The first tick fires immediately, so the page loads on startup
/// without waiting a full period.
pub async fn run_refresh_loop(
    page: Arc<dyn Page>,
    period: Duration,
    state: SharedState,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!(page = page.name(), "refresh loop stopped");
                break;
            }
            _ = interval.tick() => {
                match page.refresh(&state, &cancel).await {
                    Ok(()) => {}
                    Err(err) if err.is_cancelled() => {
                        // The fetch may have flagged loading before the
                        // token fired; clear it so teardown state is
                        // consistent.
                        state.lock().await.dispatch(Action::SetLoading(false));
                    }
                    Err(err) => {
                        error!(page = page.name(), error = %err, "refresh failed");
                        let mut guard = state.lock().await;
                        guard.dispatch(Action::SetError(err.to_string()));
                        guard.dispatch(Action::SetLoading(false));
                    }
                }
            }
        }
    }
}
