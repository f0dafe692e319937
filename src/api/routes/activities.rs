//! Activity Routes
//!
//! - GET /activities - Ordered map of all activities
//! - POST /activities/:activity_name/signup?email= - Add a participant
//! - DELETE /activities/:activity_name/signup?email= - Remove a participant
//!
//! Path and query values arrive percent-decoded.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{MessageResponse, SignupParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalogue::Snapshot;

/// GET /activities
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(state.store.snapshot().await)
}

/// POST /activities/:activity_name/signup
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    params: Result<Query<SignupParams>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let email = require_email(params)?;

    state.store.signup(&activity_name, &email).await?;

    tracing::info!(activity = %activity_name, email = %email, "Participant signed up");

    Ok(Json(MessageResponse::signed_up(&email, &activity_name)))
}

/// DELETE /activities/:activity_name/signup
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    params: Result<Query<SignupParams>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let email = require_email(params)?;

    state.store.unregister(&activity_name, &email).await?;

    tracing::info!(activity = %activity_name, email = %email, "Participant removed");

    Ok(Json(MessageResponse::removed(&email, &activity_name)))
}

fn require_email(params: Result<Query<SignupParams>, QueryRejection>) -> ApiResult<String> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;

    // Stored and matched exactly as sent
    if params.email.trim().is_empty() {
        return Err(ApiError::Validation("Email is required".to_string()));
    }

    Ok(params.email)
}
