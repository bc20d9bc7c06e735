use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use std::sync::Arc;

use campus_auth::{RouteDecision, RoutePolicy, Session, UserRole, guard};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Evaluate `policy` against the current session state, turning every
/// non-Allow decision into a ready-made response.
///
/// A signed-in user outside the allow-list is redirected to their own
/// dashboard, never shown a forbidden error.
fn apply_policy(state: &AppState, policy: &RoutePolicy) -> Result<Option<Session>, Response> {
    match guard::evaluate(policy, &state.sessions.session_state()) {
        RouteDecision::Allow => Ok(state.sessions.current_session()),
        RouteDecision::RedirectToLogin => Err(Redirect::to(guard::LOGIN_PATH).into_response()),
        RouteDecision::RedirectToDashboard(path) => Err(Redirect::to(path).into_response()),
        RouteDecision::Pending => {
            let error = ErrorResponse {
                error: "session restore in progress".to_string(),
            };
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(error)).into_response())
        }
    }
}

/// Middleware admitting any signed-in user.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let session = apply_policy(&state, &RoutePolicy::authenticated())?;

    if let Some(session) = session {
        request.extensions_mut().insert(session);
    }

    Ok(next.run(request).await)
}

/// Middleware admitting signed-in users holding one of `roles`.
pub fn require_roles(
    roles: &'static [UserRole],
) -> impl Fn(
    State<Arc<AppState>>,
    Request,
    Next,
) -> std::pin::Pin<
    Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>,
> + Clone {
    move |State(state): State<Arc<AppState>>, mut request: Request, next: Next| {
        Box::pin(async move {
            let session = apply_policy(&state, &RoutePolicy::roles(roles))?;

            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }

            Ok(next.run(request).await)
        })
    }
}

/// Extractor for the authenticated session.
/// Use in handlers sitting behind one of the guard middlewares.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: "not signed in".to_string(),
                };
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}
