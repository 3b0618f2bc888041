//! Finance Tracker is a small app for recording income and expenses.
//!
//! This library provides two HTTP applications:
//! - a JSON REST API backed by SQLite, see [build_api_router],
//! - and a web app that renders HTML pages from the data it gets from the
//!   REST API, see [build_web_router].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod bad_request;
mod categories_page;
pub mod category;
pub mod client;
mod db;
pub mod endpoints;
mod error;
mod home_page;
mod html;
mod logging;
mod navigation;
mod not_found;
mod routing;
pub mod transaction;
mod transactions_page;

#[cfg(test)]
mod test_utils;

pub use app_state::{ApiState, WebState};
pub use error::{Error, ErrorDetail};
pub use logging::{LOG_BODY_LENGTH_LIMIT, add_tracing_layer, logging_middleware, setup_logging};
pub use routing::{Welcome, build_api_router, build_web_router};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate_signal) => {
                terminate_signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
