//! Seeded demo accounts.
//!
//! Five accounts covering the three roles. Passwords are hashed at
//! startup rather than shipped as stored hashes, so the demo logins stay
//! readable here: `student123`, `faculty123`, `admin123`.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use campus_auth::model::{
    AdminProfile, BloodGroup, FacultyProfile, Gender, Guardian, LocalGuardian, PersonName,
    StudentProfile,
};
use campus_auth::{Credential, UserDirectory, UserRole, password};

fn credential(id: &str, role: UserRole, plain: &str) -> Result<Credential> {
    Ok(Credential::new(
        id,
        role,
        password::hash_password(plain)?,
        id,
    ))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

fn name(first: &str, middle: Option<&str>, last: &str) -> PersonName {
    PersonName {
        first_name: first.to_string(),
        middle_name: middle.map(str::to_string),
        last_name: last.to_string(),
    }
}

fn students() -> Vec<StudentProfile> {
    vec![
        StudentProfile {
            id: "student-1".to_string(),
            name: name("John", Some("Michael"), "Doe"),
            gender: Gender::Male,
            date_of_birth: date(2000, 5, 15),
            email: "john.doe@student.university.edu".to_string(),
            contact_no: "+1-555-0101".to_string(),
            emergency_contact_no: "+1-555-0102".to_string(),
            present_address: "123 University Ave, College Town, CT 12345".to_string(),
            permanent_address: "456 Main St, Hometown, HT 67890".to_string(),
            blood_group: BloodGroup::APositive,
            guardian: Guardian {
                father_name: "Robert Doe".to_string(),
                father_occupation: "Engineer".to_string(),
                father_contact_no: "+1-555-0103".to_string(),
                mother_name: "Mary Doe".to_string(),
                mother_occupation: "Teacher".to_string(),
                mother_contact_no: "+1-555-0104".to_string(),
                address: "456 Main St, Hometown, HT 67890".to_string(),
            },
            local_guardian: LocalGuardian {
                name: "Uncle Steve".to_string(),
                occupation: "Doctor".to_string(),
                contact_no: "+1-555-0105".to_string(),
                address: "789 Local St, College Town, CT 12345".to_string(),
            },
            academic_semester: "as-1".to_string(),
            academic_department: "ad-1".to_string(),
            academic_faculty: "af-1".to_string(),
        },
        StudentProfile {
            id: "student-2".to_string(),
            name: name("Jane", None, "Smith"),
            gender: Gender::Female,
            date_of_birth: date(2001, 8, 22),
            email: "jane.smith@student.university.edu".to_string(),
            contact_no: "+1-555-0201".to_string(),
            emergency_contact_no: "+1-555-0202".to_string(),
            present_address: "321 Campus Rd, College Town, CT 12345".to_string(),
            permanent_address: "654 Oak St, Springfield, SP 13579".to_string(),
            blood_group: BloodGroup::BPositive,
            guardian: Guardian {
                father_name: "David Smith".to_string(),
                father_occupation: "Manager".to_string(),
                father_contact_no: "+1-555-0203".to_string(),
                mother_name: "Lisa Smith".to_string(),
                mother_occupation: "Nurse".to_string(),
                mother_contact_no: "+1-555-0204".to_string(),
                address: "654 Oak St, Springfield, SP 13579".to_string(),
            },
            local_guardian: LocalGuardian {
                name: "Aunt Carol".to_string(),
                occupation: "Pharmacist".to_string(),
                contact_no: "+1-555-0205".to_string(),
                address: "987 Campus Way, College Town, CT 12345".to_string(),
            },
            academic_semester: "as-1".to_string(),
            academic_department: "ad-3".to_string(),
            academic_faculty: "af-2".to_string(),
        },
    ]
}

fn faculty() -> Vec<FacultyProfile> {
    vec![
        FacultyProfile {
            id: "faculty-1".to_string(),
            name: name("Dr. Sarah", None, "Johnson"),
            gender: Gender::Female,
            date_of_birth: date(1985, 3, 10),
            email: "sarah.johnson@university.edu".to_string(),
            contact_no: "+1-555-0301".to_string(),
            emergency_contact_no: "+1-555-0302".to_string(),
            present_address: "111 Faculty Lane, College Town, CT 12345".to_string(),
            permanent_address: "222 Professor St, Academic City, AC 24680".to_string(),
            blood_group: BloodGroup::OPositive,
            designation: "Associate Professor".to_string(),
            academic_department: "ad-1".to_string(),
            academic_faculty: "af-1".to_string(),
        },
        FacultyProfile {
            id: "faculty-2".to_string(),
            name: name("Prof. Michael", Some("Robert"), "Brown"),
            gender: Gender::Male,
            date_of_birth: date(1978, 11, 28),
            email: "michael.brown@university.edu".to_string(),
            contact_no: "+1-555-0401".to_string(),
            emergency_contact_no: "+1-555-0402".to_string(),
            present_address: "333 Education Blvd, College Town, CT 12345".to_string(),
            permanent_address: "444 Knowledge Ave, Scholar City, SC 97531".to_string(),
            blood_group: BloodGroup::AbPositive,
            designation: "Professor".to_string(),
            academic_department: "ad-3".to_string(),
            academic_faculty: "af-2".to_string(),
        },
    ]
}

fn admins() -> Vec<AdminProfile> {
    vec![AdminProfile {
        id: "admin-1".to_string(),
        name: name("Emily", None, "Davis"),
        gender: Gender::Female,
        date_of_birth: date(1980, 7, 14),
        email: "emily.davis@university.edu".to_string(),
        contact_no: "+1-555-0501".to_string(),
        emergency_contact_no: "+1-555-0502".to_string(),
        present_address: "555 Admin Building, College Town, CT 12345".to_string(),
        permanent_address: "666 Management St, Executive City, EC 86420".to_string(),
        blood_group: BloodGroup::ANegative,
        designation: "System Administrator".to_string(),
        management_department: "IT Department".to_string(),
    }]
}

/// Build the seeded account directory.
pub fn directory() -> Result<UserDirectory> {
    let credentials = vec![
        credential("student-1", UserRole::Student, "student123")?,
        credential("student-2", UserRole::Student, "student123")?,
        credential("faculty-1", UserRole::Faculty, "faculty123")?,
        credential("faculty-2", UserRole::Faculty, "faculty123")?,
        credential("admin-1", UserRole::Admin, "admin123")?,
    ];
    let count = credentials.len();

    let directory = UserDirectory::new(credentials, students(), faculty(), admins())?;
    info!(users = count, "seeded account directory");

    Ok(directory)
}
