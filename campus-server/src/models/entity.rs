//! Persisted entities and the joined shapes the store returns
//!
//! Optional references are flat values (one level, no back-pointers). Only the
//! response assembler nests them further.

use std::fmt;

use sqlx::FromRow;

/// The four row-backed entity types, used to label lookups and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Course,
    Teacher,
    Department,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Course => "Course",
            Self::Teacher => "Teacher",
            Self::Department => "Department",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub head_of_department_id: Option<i64>,
}

/// Course left-joined with its assigned teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseWithTeacher {
    pub course: Course,
    pub teacher: Option<Teacher>,
}

/// Teacher left-joined with the department they head, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherWithDepartment {
    pub teacher: Teacher,
    pub department: Option<Department>,
}

/// Department left-joined with its head teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentWithHead {
    pub department: Department,
    pub head: Option<Teacher>,
}
