use axum::{Json, extract::State};
use std::sync::Arc;

use campus_auth::Profile;
use campus_catalog::{AcademicDepartment, Course, Notice};

use crate::AppState;
use crate::middleware::CurrentSession;

/// Notices for any signed-in user, newest first.
pub async fn notices(State(state): State<Arc<AppState>>) -> Json<Vec<Notice>> {
    Json(state.catalog.notices().to_vec())
}

pub async fn departments(State(state): State<Arc<AppState>>) -> Json<Vec<AcademicDepartment>> {
    Json(state.catalog.departments().to_vec())
}

/// Courses narrowed by who is asking: students see their department's
/// offerings, faculty see what they teach, admins see everything.
pub async fn courses(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Json<Vec<Course>> {
    let courses: Vec<Course> = match &session.profile {
        Profile::Student(profile) => state
            .catalog
            .courses_for_department(&profile.academic_department)
            .into_iter()
            .cloned()
            .collect(),
        Profile::Faculty(profile) => state
            .catalog
            .courses_taught_by(&profile.id)
            .into_iter()
            .cloned()
            .collect(),
        Profile::Admin(_) => state.catalog.courses().to_vec(),
    };

    Json(courses)
}
