// src/api.rs
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};
use tracing::{error, info};

use crate::config::Config;
use crate::feed;
use crate::fetcher;
use crate::models::TransferResource;
use crate::remote::Backend;
use crate::transfer::{self, SubmissionOutcome};

pub fn router(backend: Arc<Backend>, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Payments feed API running" }))
        .route("/v1/payments/", get(get_payments))
        .route("/v1/transfers/", post(create_transfer))
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(backend)
}

pub async fn serve(cfg: Config, backend: Arc<Backend>) -> eyre::Result<()> {
    let app = router(backend, cfg.request_timeout);

    let addr = SocketAddr::from(([127, 0, 0, 1], cfg.port));
    info!("API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// ---------- handlers ----------

/// GET /v1/payments/ — fan out the four fetches, join, serialize.
/// An empty feed serializes as `[]`, never `null`.
async fn get_payments(State(backend): State<Arc<Backend>>) -> Response {
    match fetcher::fetch_snapshot(&backend).await {
        Ok(snapshot) => Json(feed::build_feed(&snapshot)).into_response(),
        Err(e) => {
            error!("feed fetch failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load payments feed",
            )
                .into_response()
        }
    }
}

/// POST /v1/transfers/ — best-effort decode, then the balance-gated flow.
/// Missing fields take zero values; no schema validation happens here.
async fn create_transfer(State(backend): State<Arc<Backend>>, body: Bytes) -> Response {
    let payload: TransferResource = serde_json::from_slice(&body).unwrap_or_default();

    match transfer::submit_transfer(&backend, payload).await {
        SubmissionOutcome::Created(created) => Json(created).into_response(),
        SubmissionOutcome::InsufficientFunds => {
            (StatusCode::BAD_REQUEST, "Not enough funds for transfer").into_response()
        }
        SubmissionOutcome::DependencyFailure(e) => {
            error!("transfer creation failed downstream: {}", e);
            (StatusCode::FAILED_DEPENDENCY, "Failed to create transfer").into_response()
        }
    }
}
