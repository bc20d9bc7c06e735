use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of account roles; the discriminant for profiles, route
/// guards and dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Faculty,
    Student,
}

impl UserRole {
    /// Default landing path for the role, used when a signed-in user hits
    /// a route guarded for somebody else.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Admin => "/admin/dashboard",
            UserRole::Faculty => "/faculty/dashboard",
            UserRole::Student => "/student/dashboard",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            UserRole::Admin => "admin",
            UserRole::Faculty => "faculty",
            UserRole::Student => "student",
        };

        write!(f, "{token}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "faculty" => Ok(UserRole::Faculty),
            "student" => Ok(UserRole::Student),
            _ => Err(format!("{s:?} is not a valid role")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl PersonName {
    pub fn full(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub father_name: String,
    pub father_occupation: String,
    pub father_contact_no: String,
    pub mother_name: String,
    pub mother_occupation: String,
    pub mother_contact_no: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalGuardian {
    pub name: String,
    pub occupation: String,
    pub contact_no: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub name: PersonName,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub contact_no: String,
    pub emergency_contact_no: String,
    pub present_address: String,
    pub permanent_address: String,
    pub blood_group: BloodGroup,
    pub guardian: Guardian,
    pub local_guardian: LocalGuardian,
    /// Reference into the academic semester catalog.
    pub academic_semester: String,
    /// Reference into the academic department catalog.
    pub academic_department: String,
    /// Reference into the academic faculty catalog.
    pub academic_faculty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyProfile {
    pub id: String,
    pub name: PersonName,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub contact_no: String,
    pub emergency_contact_no: String,
    pub present_address: String,
    pub permanent_address: String,
    pub blood_group: BloodGroup,
    pub designation: String,
    pub academic_department: String,
    pub academic_faculty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: String,
    pub name: PersonName,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub contact_no: String,
    pub emergency_contact_no: String,
    pub present_address: String,
    pub permanent_address: String,
    pub blood_group: BloodGroup,
    pub designation: String,
    pub management_department: String,
}

/// Role-specific profile record.
///
/// Tagged by role so consumers match exhaustively instead of probing for
/// fields, and so the persisted JSON stays self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Profile {
    Student(StudentProfile),
    Faculty(FacultyProfile),
    Admin(AdminProfile),
}

impl Profile {
    pub fn id(&self) -> &str {
        match self {
            Profile::Student(p) => &p.id,
            Profile::Faculty(p) => &p.id,
            Profile::Admin(p) => &p.id,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Profile::Student(_) => UserRole::Student,
            Profile::Faculty(_) => UserRole::Faculty,
            Profile::Admin(_) => UserRole::Admin,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Profile::Student(p) => &p.email,
            Profile::Faculty(p) => &p.email,
            Profile::Admin(p) => &p.email,
        }
    }

    pub fn name(&self) -> &PersonName {
        match self {
            Profile::Student(p) => &p.name,
            Profile::Faculty(p) => &p.name,
            Profile::Admin(p) => &p.name,
        }
    }
}

/// Login-relevant account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Unique, stable identifier; doubles as the login handle.
    pub id: String,
    pub role: UserRole,
    /// PHC-format argon2 hash of the account password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Foreign key into the profile catalog matching `role`.
    pub profile_id: String,
    /// Deactivated accounts cannot authenticate.
    pub is_active: bool,
    /// Blocked accounts cannot authenticate even while active.
    pub is_blocked: bool,
}

impl Credential {
    /// New active, unblocked credential stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        role: UserRole,
        password_hash: String,
        profile_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: id.into(),
            role,
            password_hash,
            created_at: now,
            updated_at: now,
            profile_id: profile_id.into(),
            is_active: true,
            is_blocked: false,
        }
    }
}

/// The single authenticated identity for a running client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub role: UserRole,
    pub profile: Profile,
}

/// Credential listing entry for the admin view; the stored hash is never
/// exposed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub role: UserRole,
    pub password: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
    pub is_blocked: bool,
}

impl From<&Credential> for UserSummary {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id.clone(),
            role: credential.role,
            password: "***",
            created_at: credential.created_at,
            updated_at: credential.updated_at,
            is_active: credential.is_active,
            is_blocked: credential.is_blocked,
        }
    }
}
