//! Store-level error type

use crate::models::EntityKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Anything the driver or the database reports, including constraint violations.
    /// Not inspected or translated.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: i64 },

    #[error("Student is already enrolled in this course")]
    AlreadyEnrolled { student_id: i64, course_id: i64 },
}

impl DbError {
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = DbError::not_found(EntityKind::Course, 42);
        assert_eq!(err.to_string(), "Course with id 42 not found");
    }

    #[test]
    fn sqlx_errors_pass_through() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}
