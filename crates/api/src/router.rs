use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use campus_auth::UserRole;

use crate::{
    AppState, admin_handlers, auth_handlers, catalog_handlers, dashboard_handlers,
    middleware as guard,
};

pub fn router(state: Arc<AppState>) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/", get(|| async { "Campus API running" }))
        .route("/login", get(|| async { "Sign in via POST /auth/login" }))
        .route("/auth/login", post(auth_handlers::login));

    // Any signed-in user
    let session_routes = Router::new()
        .route("/auth/logout", post(auth_handlers::logout))
        .route("/auth/me", get(auth_handlers::me))
        .route("/auth/refresh", post(auth_handlers::refresh_profile))
        .route("/catalog/notices", get(catalog_handlers::notices))
        .route("/catalog/courses", get(catalog_handlers::courses))
        .route("/catalog/departments", get(catalog_handlers::departments))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_auth,
        ));

    // Administration: dashboard plus user management
    let admin_routes = Router::new()
        .route("/admin/dashboard", get(dashboard_handlers::admin_dashboard))
        .route("/admin/users", get(admin_handlers::list_users))
        .route("/admin/users/{id}/block", post(admin_handlers::block_user))
        .route("/admin/users/{id}/unblock", post(admin_handlers::unblock_user))
        .route("/admin/users/{id}/password", put(admin_handlers::change_password))
        .route("/admin/users/{id}/force-logout", post(admin_handlers::force_logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_roles(&[UserRole::Admin]),
        ));

    let faculty_routes = Router::new()
        .route("/faculty/dashboard", get(dashboard_handlers::faculty_dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_roles(&[UserRole::Faculty]),
        ));

    let student_routes = Router::new()
        .route("/student/dashboard", get(dashboard_handlers::student_dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_roles(&[UserRole::Student]),
        ));

    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .merge(admin_routes)
        .merge(faculty_routes)
        .merge(student_routes)
        .with_state(state)
}
