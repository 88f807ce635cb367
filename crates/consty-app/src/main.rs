//! Consty RS
//!
//! Headless client for the Consty construction-management backend. Loads
//! the session, then drives the dashboard and reports refresh cycles
//! until interrupted.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use consty_client::ApiClient;
use consty_core::config::{clamp_reports_interval, AppConfig};
use consty_state::{Action, AppState};

use consty_app::pages::{self, run_refresh_loop, DashboardPage, ReportsPage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        api = %config.api.base_url,
        "Starting Consty RS"
    );

    let client = Arc::new(ApiClient::new(&config.api)?);
    let state: pages::SharedState = Arc::new(Mutex::new(AppState::new()));
    let cancel = CancellationToken::new();

    // Resume the session if the cookie store still holds a valid one.
    match client.current_session(&cancel).await {
        Ok(Some(user)) => {
            info!(username = %user.username, role = ?user.role, "session resumed");
            state.lock().await.dispatch(Action::SetSession(Some(user)));
        }
        Ok(None) => info!("no active session"),
        Err(e) => tracing::warn!("session check failed: {}", e),
    }

    let dashboard = Arc::new(DashboardPage::new(client.clone()));
    let reports = Arc::new(ReportsPage::new(client.clone()));

    let handles = vec![
        tokio::spawn(run_refresh_loop(
            dashboard as Arc<dyn pages::Page>,
            Duration::from_secs(config.refresh.dashboard_seconds),
            state.clone(),
            cancel.clone(),
        )),
        tokio::spawn(run_refresh_loop(
            reports as Arc<dyn pages::Page>,
            Duration::from_secs(clamp_reports_interval(config.refresh.reports_seconds)),
            state.clone(),
            cancel.clone(),
        )),
    ];

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    cancel.cancel();
    for handle in handles {
        let _ = handle.await;
    }

    info!("Shutdown complete");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,consty_app=debug,consty_client=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}
