use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use std::sync::Arc;

use campus_auth::Profile;
use campus_catalog::Course;

use crate::AppState;
use crate::middleware::CurrentSession;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_users: usize,
    pub active_users: usize,
    pub blocked_users: usize,
    pub departments: usize,
    pub courses: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyDashboard {
    pub name: String,
    pub designation: String,
    pub department: Option<String>,
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub name: String,
    pub department: Option<String>,
    pub semester: Option<String>,
    pub courses: Vec<Course>,
    pub notices: usize,
}

pub async fn admin_dashboard(State(state): State<Arc<AppState>>) -> Json<AdminDashboard> {
    let users = state.sessions.users();

    Json(AdminDashboard {
        total_users: users.len(),
        active_users: users.iter().filter(|u| u.is_active && !u.is_blocked).count(),
        blocked_users: users.iter().filter(|u| u.is_blocked).count(),
        departments: state.catalog.departments().len(),
        courses: state.catalog.courses().len(),
    })
}

pub async fn faculty_dashboard(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    match &session.profile {
        Profile::Faculty(profile) => {
            let dashboard = FacultyDashboard {
                name: profile.name.full(),
                designation: profile.designation.clone(),
                department: state
                    .catalog
                    .department(&profile.academic_department)
                    .map(|d| d.name.clone()),
                courses: state
                    .catalog
                    .courses_taught_by(&profile.id)
                    .into_iter()
                    .cloned()
                    .collect(),
            };
            Json(dashboard).into_response()
        }
        // The route guard only admits faculty here; anyone else still
        // follows the redirect policy rather than seeing an error.
        other => Redirect::to(other.role().dashboard_path()).into_response(),
    }
}

pub async fn student_dashboard(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    match &session.profile {
        Profile::Student(profile) => {
            let dashboard = StudentDashboard {
                name: profile.name.full(),
                department: state
                    .catalog
                    .department(&profile.academic_department)
                    .map(|d| d.name.clone()),
                semester: state
                    .catalog
                    .semester(&profile.academic_semester)
                    .map(|s| format!("{} {}", s.name, s.year)),
                courses: state
                    .catalog
                    .courses_for_department(&profile.academic_department)
                    .into_iter()
                    .cloned()
                    .collect(),
                notices: state.catalog.notices().len(),
            };
            Json(dashboard).into_response()
        }
        other => Redirect::to(other.role().dashboard_path()).into_response(),
    }
}
