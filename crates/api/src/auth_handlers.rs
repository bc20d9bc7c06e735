use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use campus_auth::{AuthError, Session};

use crate::AppState;
use crate::middleware::{CurrentSession, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: Session,
}

/// Map each auth failure onto a distinct status and message so callers
/// can tell the failure kinds apart.
pub(crate) fn auth_error_response(error: AuthError) -> Response {
    let status = match error {
        AuthError::UserNotFound | AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
        AuthError::AccountDeactivated | AuthError::AccountBlocked => StatusCode::FORBIDDEN,
        AuthError::ProfileNotFound | AuthError::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let error = ErrorResponse {
        error: error.to_string(),
    };
    (status, Json(error)).into_response()
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Response {
    match state.sessions.login(&payload.id, &payload.password).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse { session })).into_response(),
        Err(e) => auth_error_response(e),
    }
}

pub async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    state.sessions.logout().await;
    StatusCode::NO_CONTENT
}

pub async fn me(CurrentSession(session): CurrentSession) -> Json<SessionResponse> {
    Json(SessionResponse { session })
}

/// Re-resolve the signed-in profile from the directory, e.g. after an
/// administrative edit.
pub async fn refresh_profile(State(state): State<Arc<AppState>>) -> Response {
    match state.sessions.refresh_profile().await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse { session })).into_response(),
        Err(e) => auth_error_response(e),
    }
}
