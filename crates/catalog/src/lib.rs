//! Read-only university catalogs backing the dashboards.
//!
//! Academic structure, courses and notices are fixture data: loaded once
//! at startup, queried in place, never mutated.

pub mod fixtures;
pub mod model;

pub use model::{
    AcademicDepartment, AcademicFaculty, AcademicSemester, Course, Notice, NoticeKind,
    NoticePriority,
};

pub struct Catalog {
    faculties: Vec<AcademicFaculty>,
    departments: Vec<AcademicDepartment>,
    semesters: Vec<AcademicSemester>,
    courses: Vec<Course>,
    notices: Vec<Notice>,
}

impl Catalog {
    pub fn new(
        faculties: Vec<AcademicFaculty>,
        departments: Vec<AcademicDepartment>,
        semesters: Vec<AcademicSemester>,
        courses: Vec<Course>,
        mut notices: Vec<Notice>,
    ) -> Self {
        // Newest first; ties keep fixture order.
        notices.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            faculties,
            departments,
            semesters,
            courses,
            notices,
        }
    }

    pub fn faculty(&self, id: &str) -> Option<&AcademicFaculty> {
        self.faculties.iter().find(|f| f.id == id)
    }

    pub fn department(&self, id: &str) -> Option<&AcademicDepartment> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn semester(&self, id: &str) -> Option<&AcademicSemester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    pub fn departments(&self) -> &[AcademicDepartment] {
        &self.departments
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses offered by one department, in catalog order.
    pub fn courses_for_department(&self, department_id: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.department == department_id)
            .collect()
    }

    /// Courses taught by the faculty member with this profile id.
    pub fn courses_taught_by(&self, faculty_profile_id: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.faculty == faculty_profile_id)
            .collect()
    }

    /// All notices, newest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}
