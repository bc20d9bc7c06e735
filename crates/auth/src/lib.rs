//! Account, session and route-guard subsystem for the campus services.
//!
//! The [`SessionManager`] owns the single authenticated identity, backed
//! by a [`UserDirectory`] of credential and profile fixtures and an
//! injected [`campus_storage::KeyValueStore`] for reload-durable
//! persistence. [`guard`] turns the current session plus a per-route
//! policy into an access decision.

pub mod directory;
pub mod error;
pub mod guard;
pub mod model;
pub mod password;
pub mod service;

pub use directory::{DirectoryError, UserDirectory};
pub use error::{AuthError, Result};
pub use guard::{LOGIN_PATH, RouteDecision, RoutePolicy, SessionState, evaluate};
pub use model::{Credential, Profile, Session, UserRole, UserSummary};
pub use service::{SESSION_KEY, SessionManager};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        AuthError, Profile, Result, RouteDecision, RoutePolicy, Session, SessionManager, UserRole,
    };
}

#[cfg(test)]
pub(crate) mod test_data {
    //! Profile and session fixtures shared by the unit tests, mirroring
    //! the seeded directory.

    use chrono::NaiveDate;

    use crate::model::{
        AdminProfile, BloodGroup, FacultyProfile, Gender, Guardian, LocalGuardian, PersonName,
        Profile, Session, StudentProfile, UserRole,
    };

    pub fn student_profile(id: &str, first_name: &str) -> StudentProfile {
        StudentProfile {
            id: id.to_string(),
            name: PersonName {
                first_name: first_name.to_string(),
                middle_name: None,
                last_name: "Doe".to_string(),
            },
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(2000, 5, 15).unwrap(),
            email: format!("{}@student.university.edu", id),
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

    pub fn student_profile_john() -> StudentProfile {
        let mut profile = student_profile("student-1", "John");
        profile.name.middle_name = Some("Michael".to_string());
        profile
    }

    pub fn faculty_profile_sarah() -> FacultyProfile {
        FacultyProfile {
            id: "faculty-1".to_string(),
            name: PersonName {
                first_name: "Dr. Sarah".to_string(),
                middle_name: None,
                last_name: "Johnson".to_string(),
            },
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

    pub fn admin_profile_emily() -> AdminProfile {
        AdminProfile {
            id: "admin-1".to_string(),
            name: PersonName {
                first_name: "Emily".to_string(),
                middle_name: None,
                last_name: "Davis".to_string(),
            },
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

    pub fn student_session() -> Session {
        Session {
            id: "student-1".to_string(),
            role: UserRole::Student,
            profile: Profile::Student(student_profile_john()),
        }
    }

    pub fn admin_session() -> Session {
        Session {
            id: "admin-1".to_string(),
            role: UserRole::Admin,
            profile: Profile::Admin(admin_profile_emily()),
        }
    }
}
