use std::collections::HashSet;

use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;

use crate::error::{AuthError, Result};
use crate::model::{
    AdminProfile, Credential, FacultyProfile, Profile, StudentProfile, UserRole, UserSummary,
};

/// Fixture-integrity violations caught while building the directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("duplicate user id: {0}")]
    DuplicateUserId(String),

    #[error("duplicate {role} profile id: {id}")]
    DuplicateProfileId { role: UserRole, id: String },
}

/// Credential store plus the three per-role profile catalogs.
///
/// Credentials sit behind a lock because the admin endpoints flip status
/// flags and rotate passwords in place; profiles are read-only fixtures.
pub struct UserDirectory {
    credentials: RwLock<Vec<Credential>>,
    students: Vec<StudentProfile>,
    faculty: Vec<FacultyProfile>,
    admins: Vec<AdminProfile>,
}

fn check_unique<'a>(
    role: UserRole,
    ids: impl Iterator<Item = &'a str>,
) -> std::result::Result<(), DirectoryError> {
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            return Err(DirectoryError::DuplicateProfileId {
                role,
                id: id.to_string(),
            });
        }
    }

    Ok(())
}

impl UserDirectory {
    /// Build the directory, enforcing id uniqueness across credentials and
    /// within each profile catalog.
    pub fn new(
        credentials: Vec<Credential>,
        students: Vec<StudentProfile>,
        faculty: Vec<FacultyProfile>,
        admins: Vec<AdminProfile>,
    ) -> std::result::Result<Self, DirectoryError> {
        {
            let mut seen = HashSet::new();
            for credential in &credentials {
                if !seen.insert(credential.id.as_str()) {
                    return Err(DirectoryError::DuplicateUserId(credential.id.clone()));
                }
            }
        }

        check_unique(UserRole::Student, students.iter().map(|p| p.id.as_str()))?;
        check_unique(UserRole::Faculty, faculty.iter().map(|p| p.id.as_str()))?;
        check_unique(UserRole::Admin, admins.iter().map(|p| p.id.as_str()))?;

        Ok(Self {
            credentials: RwLock::new(credentials),
            students,
            faculty,
            admins,
        })
    }

    /// First credential matching `id`; ids are unique, so also the only one.
    pub fn find_credential(&self, id: &str) -> Option<Credential> {
        self.credentials.read().iter().find(|c| c.id == id).cloned()
    }

    /// Profile resolver: dispatch on role, then equality lookup by id.
    /// Absence is the caller's problem, not an error here.
    pub fn resolve_profile(&self, role: UserRole, profile_id: &str) -> Option<Profile> {
        match role {
            UserRole::Student => self
                .students
                .iter()
                .find(|p| p.id == profile_id)
                .cloned()
                .map(Profile::Student),
            UserRole::Faculty => self
                .faculty
                .iter()
                .find(|p| p.id == profile_id)
                .cloned()
                .map(Profile::Faculty),
            UserRole::Admin => self
                .admins
                .iter()
                .find(|p| p.id == profile_id)
                .cloned()
                .map(Profile::Admin),
        }
    }

    /// All credentials as masked listing entries.
    pub fn users(&self) -> Vec<UserSummary> {
        self.credentials.read().iter().map(UserSummary::from).collect()
    }

    pub fn set_blocked(&self, id: &str, blocked: bool) -> Result<()> {
        self.update_credential(id, |credential| credential.is_blocked = blocked)
    }

    pub fn set_password_hash(&self, id: &str, hash: String) -> Result<()> {
        self.update_credential(id, |credential| credential.password_hash = hash)
    }

    fn update_credential(&self, id: &str, apply: impl FnOnce(&mut Credential)) -> Result<()> {
        let mut credentials = self.credentials.write();
        let credential = credentials
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AuthError::UserNotFound)?;

        apply(credential);
        credential.updated_at = Utc::now();

        Ok(())
    }
}
