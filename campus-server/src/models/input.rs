//! Validated write payloads, one per entity

use super::{RequiredText, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: RequiredText,
    pub email: RequiredText,
}

impl NewStudent {
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: RequiredText::new("name", name)?,
            email: RequiredText::new("email", email)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: RequiredText,
}

impl NewCourse {
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: RequiredText::new("title", title)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: RequiredText,
}

impl NewTeacher {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: RequiredText::new("name", name)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: RequiredText,
}

impl NewDepartment {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: RequiredText::new("name", name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_reports_first_bad_field() {
        let err = NewStudent::new("", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });

        let err = NewStudent::new("Alice", " ").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }

    #[test]
    fn fields_are_stored_verbatim() {
        let student = NewStudent::new("  Alice ", "a@x.com").unwrap();
        assert_eq!(student.name.as_str(), "  Alice ");

        let long_title = "a".repeat(300);
        let course = NewCourse::new(&long_title).unwrap();
        assert_eq!(course.title.as_str(), long_title);
    }
}
