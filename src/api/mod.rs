//! JSON API over HTTP
//!
//! Serves the ledger to the browser front end. Every request locks the shared
//! ledger for its whole duration, so mutations are applied one at a time.

pub mod dto;
pub mod errors;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tracing::{error, info};

use crate::ledger::Ledger;

use self::errors::json_error;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Mutex<Ledger>>,
    /// Number of transactions in the dashboard's recent list
    pub recent_limit: usize,
}

impl AppState {
    pub fn new(ledger: Ledger, recent_limit: usize) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            recent_limit,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, Response> {
        self.ledger.lock().map_err(|_| {
            error!("ledger mutex poisoned");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "ledger unavailable")
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/add_transaction", post(handlers::add_transaction))
        .route("/api/set_budget", post(handlers::set_budget))
        .route("/api/delete_transaction", post(handlers::delete_transaction))
        .route(
            "/api/monthly_summary/:year/:month",
            get(handlers::monthly_summary),
        )
        .route("/api/dashboard_data", get(handlers::dashboard_data))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
