//! End-to-end guard behavior through the router: login flow statuses and
//! the redirect policy for signed-out and wrong-role requests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use tower::ServiceExt;

use campus_api::{AppState, router::router};
use campus_auth::{
    Credential, SessionManager, UserDirectory, UserRole,
    model::{
        AdminProfile, BloodGroup, FacultyProfile, Gender, Guardian, LocalGuardian, PersonName,
        StudentProfile,
    },
    password,
};
use campus_catalog::fixtures;
use campus_storage::MemoryStore;

fn name(first: &str, last: &str) -> PersonName {
    PersonName {
        first_name: first.to_string(),
        middle_name: None,
        last_name: last.to_string(),
    }
}

fn john() -> StudentProfile {
    StudentProfile {
        id: "student-1".to_string(),
        name: name("John", "Doe"),
        gender: Gender::Male,
        date_of_birth: NaiveDate::from_ymd_opt(2000, 5, 15).unwrap(),
        email: "john.doe@student.university.edu".to_string(),
        contact_no: "+1-555-0101".to_string(),
        emergency_contact_no: "+1-555-0102".to_string(),
        present_address: "123 University Ave, College Town".to_string(),
        permanent_address: "456 Main St, Hometown".to_string(),
        blood_group: BloodGroup::APositive,
        guardian: Guardian {
            father_name: "Robert Doe".to_string(),
            father_occupation: "Engineer".to_string(),
            father_contact_no: "+1-555-0103".to_string(),
            mother_name: "Mary Doe".to_string(),
            mother_occupation: "Teacher".to_string(),
            mother_contact_no: "+1-555-0104".to_string(),
            address: "456 Main St, Hometown".to_string(),
        },
        local_guardian: LocalGuardian {
            name: "Uncle Steve".to_string(),
            occupation: "Doctor".to_string(),
            contact_no: "+1-555-0105".to_string(),
            address: "789 Local St, College Town".to_string(),
        },
        academic_semester: "as-1".to_string(),
        academic_department: "ad-1".to_string(),
        academic_faculty: "af-1".to_string(),
    }
}

fn sarah() -> FacultyProfile {
    FacultyProfile {
        id: "faculty-1".to_string(),
        name: name("Dr. Sarah", "Johnson"),
        gender: Gender::Female,
        date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 10).unwrap(),
        email: "sarah.johnson@university.edu".to_string(),
        contact_no: "+1-555-0301".to_string(),
        emergency_contact_no: "+1-555-0302".to_string(),
        present_address: "111 Faculty Lane, College Town".to_string(),
        permanent_address: "222 Professor St, Academic City".to_string(),
        blood_group: BloodGroup::OPositive,
        designation: "Associate Professor".to_string(),
        academic_department: "ad-1".to_string(),
        academic_faculty: "af-1".to_string(),
    }
}

fn emily() -> AdminProfile {
    AdminProfile {
        id: "admin-1".to_string(),
        name: name("Emily", "Davis"),
        gender: Gender::Female,
        date_of_birth: NaiveDate::from_ymd_opt(1980, 7, 14).unwrap(),
        email: "emily.davis@university.edu".to_string(),
        contact_no: "+1-555-0501".to_string(),
        emergency_contact_no: "+1-555-0502".to_string(),
        present_address: "555 Admin Building, College Town".to_string(),
        permanent_address: "666 Management St, Executive City".to_string(),
        blood_group: BloodGroup::ANegative,
        designation: "System Administrator".to_string(),
        management_department: "IT Department".to_string(),
    }
}

fn directory() -> Arc<UserDirectory> {
    let mut deactivated = Credential::new(
        "faculty-1",
        UserRole::Faculty,
        password::hash_password("faculty123").unwrap(),
        "faculty-1",
    );
    deactivated.is_active = false;

    let credentials = vec![
        Credential::new(
            "student-1",
            UserRole::Student,
            password::hash_password("student123").unwrap(),
            "student-1",
        ),
        deactivated,
        Credential::new(
            "admin-1",
            UserRole::Admin,
            password::hash_password("admin123").unwrap(),
            "admin-1",
        ),
    ];

    Arc::new(UserDirectory::new(credentials, vec![john()], vec![sarah()], vec![emily()]).unwrap())
}

/// Router over a fresh state with session restoration already complete.
async fn app() -> Router {
    let sessions = SessionManager::new(directory(), Arc::new(MemoryStore::new()));
    sessions.restore().await;

    router(Arc::new(AppState::new(sessions, fixtures::university())))
}

async fn login(app: &Router, id: &str, password: &str) -> StatusCode {
    let body = format!(r#"{{"id":"{id}","password":"{password}"}}"#);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    response.status()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    (response.status(), location)
}

#[tokio::test]
async fn test_login_statuses_distinguish_failures() {
    let app = app().await;

    assert_eq!(login(&app, "nobody", "whatever").await, StatusCode::UNAUTHORIZED);
    assert_eq!(login(&app, "student-1", "wrong").await, StatusCode::UNAUTHORIZED);
    assert_eq!(login(&app, "faculty-1", "faculty123").await, StatusCode::FORBIDDEN);
    assert_eq!(login(&app, "student-1", "student123").await, StatusCode::OK);
}

#[tokio::test]
async fn test_signed_out_requests_redirect_to_login() {
    let app = app().await;

    for uri in ["/auth/me", "/student/dashboard", "/admin/users"] {
        let (status, location) = get(&app, uri).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location.as_deref(), Some("/login"), "{uri}");
    }

    // Public routes stay reachable.
    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, "/login").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_role_redirects_to_own_dashboard() {
    let app = app().await;
    assert_eq!(login(&app, "student-1", "student123").await, StatusCode::OK);

    // A student hitting admin and faculty routes is sent home, never to
    // the login page and never served the protected content.
    for uri in ["/admin/dashboard", "/admin/users", "/faculty/dashboard"] {
        let (status, location) = get(&app, uri).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location.as_deref(), Some("/student/dashboard"), "{uri}");
    }

    let (status, _) = get(&app, "/student/dashboard").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_session_endpoints_after_login() {
    let app = app().await;
    assert_eq!(login(&app, "admin-1", "admin123").await, StatusCode::OK);

    for uri in [
        "/auth/me",
        "/admin/dashboard",
        "/admin/users",
        "/catalog/notices",
        "/catalog/courses",
        "/catalog/departments",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_logout_drops_access() {
    let app = app().await;
    assert_eq!(login(&app, "student-1", "student123").await, StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, location) = get(&app, "/auth/me").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_admin_can_block_and_unblock() {
    let app = app().await;
    assert_eq!(login(&app, "admin-1", "admin123").await, StatusCode::OK);

    let block = |uri: String| {
        let app = app.clone();
        async move {
            app.oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
        }
    };

    assert_eq!(
        block("/admin/users/student-1/block".to_string()).await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        block("/admin/users/ghost/block".to_string()).await,
        StatusCode::NOT_FOUND
    );

    // The blocked student can no longer sign in.
    assert_eq!(login(&app, "student-1", "student123").await, StatusCode::FORBIDDEN);

    assert_eq!(
        block("/admin/users/student-1/unblock".to_string()).await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(login(&app, "student-1", "student123").await, StatusCode::OK);
}

#[tokio::test]
async fn test_guarded_routes_unavailable_before_restore() {
    // State built without running restore: the guard reports Pending.
    let sessions = SessionManager::new(directory(), Arc::new(MemoryStore::new()));
    let app = router(Arc::new(AppState::new(sessions, fixtures::university())));

    let (status, _) = get(&app, "/auth/me").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
