//! Activity Board REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Activities
//! - `GET /activities` - Ordered map of activity name to details
//! - `POST /activities/:activity_name/signup?email=` - Sign up a participant
//! - `DELETE /activities/:activity_name/signup?email=` - Remove a participant
//!
//! ## UI
//! - `GET /` - Redirects to `/static/index.html`
//! - `GET /static/*` - Built board UI
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status with catalogue counts
//!
//! # Example
//!
//! ```rust,ignore
//! use activity_board::api::{serve, ApiConfig, AppState};
//! use activity_board::catalogue::ActivityStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ActivityStore::with_default_catalogue());
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_files = ServeDir::new(&state.config.static_dir);
    let cors_permissive = state.config.cors_permissive;

    let shared_state = Arc::new(state);

    let router = Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup).delete(routes::activities::unregister),
        )
        .nest("/health", health_routes)
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Activity Board listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Activity Board shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
