//! HTTP plumbing shared by the hospital and library services.
//!
//! - [`error`]: `ApiError` and its `{"detail": ...}` response body
//! - [`extract`]: typed query/path/body extractors rejecting with 422
//! - [`types`]: shared response DTOs

pub mod error;
pub mod extract;
pub mod types;

use std::time::Instant;

use anyhow::Context;
use axum::{Router, body::Body, http::Request, middleware::Next, response::Response};
use tokio::net::TcpListener;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use extract::{JsonBody, PathParam, QueryParams};
pub use types::{HealthResponse, MessageResponse};

/// Axum middleware logging one line per request.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_us = started.elapsed().as_micros();
    if status.is_server_error() {
        tracing::error!("{} {} -> {} ({}us)", method, uri, status.as_u16(), elapsed_us);
    } else if status.is_client_error() {
        tracing::info!("{} {} -> {} ({}us)", method, uri, status.as_u16(), elapsed_us);
    } else {
        tracing::debug!("{} {} -> {} ({}us)", method, uri, status.as_u16(), elapsed_us);
    }
    response
}

/// Bind `addr` and serve `app` until ctrl-c.
pub async fn run_server(service: &'static str, addr: &str, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("[{}] failed to bind {}", service, addr))?;

    let local = listener.local_addr()?;
    tracing::info!("[{}] listening on http://{}", service, local);
    tracing::info!("[{}] API docs: http://{}/docs", service, local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(service))
        .await
        .with_context(|| format!("[{}] server error", service))?;

    tracing::info!("[{}] stopped", service);
    Ok(())
}

async fn shutdown_signal(service: &'static str) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("[{}] shutdown requested", service),
        Err(e) => {
            tracing::error!("[{}] failed to listen for ctrl-c: {}", service, e);
            std::future::pending::<()>().await;
        }
    }
}
