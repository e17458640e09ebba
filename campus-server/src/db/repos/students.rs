//! Student repository
//!
//! Plain CRUD plus the batched students-by-course lookup used by course reads.

use sqlx::{FromRow, PgConnection};

use super::{exists_or_fail, require_updated};
use crate::db::aggregate::{group_by_parent, ChildrenByParent};
use crate::db::DbError;
use crate::models::{EntityKind, NewStudent, Student};

/// A student joined through `course_student`, tagged with the course it came from.
#[derive(FromRow)]
struct EnrolledStudentRow {
    course_id: i64,
    #[sqlx(flatten)]
    student: Student,
}

pub struct StudentRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> StudentRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a student and return the generated id.
    ///
    /// A duplicate email violates the table's unique constraint and surfaces as
    /// `DbError::Sqlx`.
    pub async fn create(&mut self, student: &NewStudent) -> Result<i64, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(student.name.as_str())
        .bind(student.email.as_str())
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(id)
    }

    pub async fn update(&mut self, id: i64, student: &NewStudent) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE students SET name = $2, email = $3 WHERE id = $1")
            .bind(id)
            .bind(student.name.as_str())
            .bind(student.email.as_str())
            .execute(&mut *self.conn)
            .await?;

        require_updated(result.rows_affected(), EntityKind::Student, id)
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<Student, DbError> {
        sqlx::query_as("SELECT id, name, email FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found(EntityKind::Student, id))
    }

    pub async fn find_all(&mut self) -> Result<Vec<Student>, DbError> {
        let students: Vec<Student> =
            sqlx::query_as("SELECT id, name, email FROM students ORDER BY id")
                .fetch_all(&mut *self.conn)
                .await?;

        Ok(students)
    }

    pub async fn exists_or_fail(&mut self, id: i64) -> Result<(), DbError> {
        exists_or_fail(&mut *self.conn, EntityKind::Student, id).await
    }

    /// Delete a student; enrollments go with it. Absent ids are a no-op.
    pub async fn delete_by_id(&mut self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    /// Students enrolled in each of `course_ids`, in one query.
    ///
    /// Courses with no students are absent from the result.
    pub async fn students_by_course_ids(
        &mut self,
        course_ids: &[i64],
    ) -> Result<ChildrenByParent<Student>, DbError> {
        if course_ids.is_empty() {
            return Ok(ChildrenByParent::new());
        }

        let rows: Vec<EnrolledStudentRow> = sqlx::query_as(
            r#"
            SELECT cs.course_id, s.id, s.name, s.email
            FROM course_student cs
            JOIN students s ON s.id = cs.student_id
            WHERE cs.course_id = ANY($1)
            ORDER BY cs.course_id, s.id
            "#,
        )
        .bind(course_ids)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(group_by_parent(
            rows.into_iter().map(|row| (row.course_id, row.student)),
        ))
    }
}
