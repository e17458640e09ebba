//! Enrollment (student <-> course) association management
//!
//! Uniqueness of a (student, course) pair is checked here before insert, inside the
//! caller's unit of work. Two concurrent attaches of the same pair can both pass the
//! check; the composite primary key then rejects the loser as a database error.

use sqlx::PgConnection;

use super::exists_or_fail;
use crate::db::DbError;
use crate::models::EntityKind;

pub struct EnrollmentRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> EnrollmentRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn is_enrolled(&mut self, student_id: i64, course_id: i64) -> Result<bool, DbError> {
        let enrolled: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM course_student
                WHERE student_id = $1 AND course_id = $2
            )
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(enrolled)
    }

    /// Enroll a student in a course.
    ///
    /// # Errors
    ///
    /// - `NotFound` for the student, then the course, whichever is missing first
    /// - `AlreadyEnrolled` if the pair already exists
    pub async fn attach(&mut self, student_id: i64, course_id: i64) -> Result<(), DbError> {
        exists_or_fail(&mut *self.conn, EntityKind::Student, student_id).await?;
        exists_or_fail(&mut *self.conn, EntityKind::Course, course_id).await?;

        if self.is_enrolled(student_id, course_id).await? {
            return Err(DbError::AlreadyEnrolled {
                student_id,
                course_id,
            });
        }

        sqlx::query("INSERT INTO course_student (student_id, course_id) VALUES ($1, $2)")
            .bind(student_id)
            .bind(course_id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }
}
