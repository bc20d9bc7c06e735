use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use campus_auth::{AuthError, UserSummary};

use crate::AppState;
use crate::auth_handlers::auth_error_response;
use crate::middleware::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct ForceLogoutResponse {
    pub ended: bool,
}

/// For the management endpoints an unknown account is a missing resource,
/// not a failed authentication.
fn admin_error_response(error: AuthError) -> Response {
    match error {
        AuthError::UserNotFound => {
            let error = ErrorResponse {
                error: error.to_string(),
            };
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        other => auth_error_response(other),
    }
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserSummary>> {
    Json(state.sessions.users())
}

pub async fn block_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.sessions.block_user(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => admin_error_response(e),
    }
}

pub async fn unblock_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.sessions.unblock_user(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => admin_error_response(e),
    }
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Response {
    match state.sessions.change_password(&id, &payload.new_password) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => admin_error_response(e),
    }
}

pub async fn force_logout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ForceLogoutResponse> {
    let ended = state.sessions.force_logout(&id).await;
    Json(ForceLogoutResponse { ended })
}
