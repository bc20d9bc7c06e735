//! The seeded university catalog.

use chrono::NaiveDate;

use crate::Catalog;
use crate::model::{
    AcademicDepartment, AcademicFaculty, AcademicSemester, Course, Notice, NoticeKind,
    NoticePriority,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

/// Build the full fixture catalog.
pub fn university() -> Catalog {
    let faculties = vec![
        AcademicFaculty {
            id: "af-1".to_string(),
            name: "Faculty of Engineering".to_string(),
        },
        AcademicFaculty {
            id: "af-2".to_string(),
            name: "Faculty of Business Administration".to_string(),
        },
        AcademicFaculty {
            id: "af-3".to_string(),
            name: "Faculty of Arts and Sciences".to_string(),
        },
    ];

    let departments = vec![
        AcademicDepartment {
            id: "ad-1".to_string(),
            name: "Computer Science & Engineering".to_string(),
            academic_faculty: "af-1".to_string(),
        },
        AcademicDepartment {
            id: "ad-2".to_string(),
            name: "Electrical & Electronic Engineering".to_string(),
            academic_faculty: "af-1".to_string(),
        },
        AcademicDepartment {
            id: "ad-3".to_string(),
            name: "Business Administration".to_string(),
            academic_faculty: "af-2".to_string(),
        },
        AcademicDepartment {
            id: "ad-4".to_string(),
            name: "English Literature".to_string(),
            academic_faculty: "af-3".to_string(),
        },
    ];

    let semesters = vec![
        AcademicSemester {
            id: "as-1".to_string(),
            name: "Spring".to_string(),
            year: 2024,
            code: "SP24".to_string(),
        },
        AcademicSemester {
            id: "as-2".to_string(),
            name: "Summer".to_string(),
            year: 2024,
            code: "SU24".to_string(),
        },
        AcademicSemester {
            id: "as-3".to_string(),
            name: "Fall".to_string(),
            year: 2024,
            code: "FA24".to_string(),
        },
    ];

    let courses = vec![
        Course {
            id: "course-1".to_string(),
            title: "Programming Fundamentals".to_string(),
            code: "CSE101".to_string(),
            credits: 3,
            department: "ad-1".to_string(),
            faculty: "faculty-1".to_string(),
            semester: "as-1".to_string(),
        },
        Course {
            id: "course-2".to_string(),
            title: "Data Structures and Algorithms".to_string(),
            code: "CSE201".to_string(),
            credits: 3,
            department: "ad-1".to_string(),
            faculty: "faculty-1".to_string(),
            semester: "as-1".to_string(),
        },
        Course {
            id: "course-3".to_string(),
            title: "Database Management Systems".to_string(),
            code: "CSE301".to_string(),
            credits: 3,
            department: "ad-1".to_string(),
            faculty: "faculty-1".to_string(),
            semester: "as-2".to_string(),
        },
        Course {
            id: "course-4".to_string(),
            title: "Business Management Principles".to_string(),
            code: "BBA101".to_string(),
            credits: 3,
            department: "ad-3".to_string(),
            faculty: "faculty-2".to_string(),
            semester: "as-1".to_string(),
        },
    ];

    let notices = vec![
        Notice {
            id: "notice-1".to_string(),
            title: "Spring 2024 Semester Registration Open".to_string(),
            content: "Spring 2024 semester registration is now open. Students must complete \
                      their course enrollment by March 15, 2024. Late registrations will incur \
                      additional fees."
                .to_string(),
            date: date(2024, 2, 1),
            kind: NoticeKind::Academic,
            priority: NoticePriority::High,
            author: "Academic Office".to_string(),
        },
        Notice {
            id: "notice-2".to_string(),
            title: "Library Hours Extended During Exam Period".to_string(),
            content: "The university library will extend its operating hours during the final \
                      examination period. New hours: Monday-Sunday 7:00 AM - 1:00 AM."
                .to_string(),
            date: date(2024, 1, 28),
            kind: NoticeKind::General,
            priority: NoticePriority::Medium,
            author: "Library Administration".to_string(),
        },
        Notice {
            id: "notice-3".to_string(),
            title: "Summer Internship Program Applications".to_string(),
            content: "Applications for the Summer 2024 internship program are now being \
                      accepted. Deadline for submission is March 30, 2024."
                .to_string(),
            date: date(2024, 1, 25),
            kind: NoticeKind::Opportunity,
            priority: NoticePriority::Medium,
            author: "Career Services".to_string(),
        },
        Notice {
            id: "notice-4".to_string(),
            title: "Campus Network Maintenance".to_string(),
            content: "The campus network will undergo scheduled maintenance on February 10, \
                      2024, from 2:00 AM to 6:00 AM. Internet services may be temporarily \
                      unavailable."
                .to_string(),
            date: date(2024, 2, 5),
            kind: NoticeKind::Technical,
            priority: NoticePriority::High,
            author: "IT Department".to_string(),
        },
    ];

    Catalog::new(faculties, departments, semesters, courses, notices)
}
