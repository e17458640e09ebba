//! Course repository
//!
//! Reads left-join the assigned teacher so the optional reference costs no extra
//! round trip. Also owns the two batched course lookups (by student, by teacher).

use sqlx::{FromRow, PgConnection};

use super::{exists_or_fail, require_updated};
use crate::db::aggregate::{group_by_parent, ChildrenByParent};
use crate::db::DbError;
use crate::models::{Course, CourseWithTeacher, EntityKind, NewCourse, Teacher};

/// Flat row for `courses LEFT JOIN teachers`.
#[derive(FromRow)]
struct CourseTeacherRow {
    id: i64,
    title: String,
    teacher_id: Option<i64>,
    teacher_name: Option<String>,
}

impl From<CourseTeacherRow> for CourseWithTeacher {
    fn from(row: CourseTeacherRow) -> Self {
        let teacher = match (row.teacher_id, row.teacher_name) {
            (Some(id), Some(name)) => Some(Teacher { id, name }),
            _ => None,
        };

        Self {
            course: Course {
                id: row.id,
                title: row.title,
                teacher_id: row.teacher_id,
            },
            teacher,
        }
    }
}

/// A course tagged with the parent (student or teacher) it was fetched for.
#[derive(FromRow)]
struct ParentCourseRow {
    parent_id: i64,
    #[sqlx(flatten)]
    course: Course,
}

const SELECT_WITH_TEACHER: &str = r#"
    SELECT c.id, c.title, c.teacher_id, t.name AS teacher_name
    FROM courses c
    LEFT JOIN teachers t ON t.id = c.teacher_id
"#;

pub struct CourseRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> CourseRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a course with no teacher and return the generated id.
    pub async fn create(&mut self, course: &NewCourse) -> Result<i64, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO courses (title, teacher_id) VALUES ($1, NULL) RETURNING id",
        )
        .bind(course.title.as_str())
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(id)
    }

    /// Overwrite the title. The teacher assignment is left untouched.
    pub async fn update(&mut self, id: i64, course: &NewCourse) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE courses SET title = $2 WHERE id = $1")
            .bind(id)
            .bind(course.title.as_str())
            .execute(&mut *self.conn)
            .await?;

        require_updated(result.rows_affected(), EntityKind::Course, id)
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<CourseWithTeacher, DbError> {
        let sql = format!("{SELECT_WITH_TEACHER} WHERE c.id = $1");
        let row: Option<CourseTeacherRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        row.map(CourseWithTeacher::from)
            .ok_or_else(|| DbError::not_found(EntityKind::Course, id))
    }

    pub async fn find_all(&mut self) -> Result<Vec<CourseWithTeacher>, DbError> {
        let sql = format!("{SELECT_WITH_TEACHER} ORDER BY c.id");
        let rows: Vec<CourseTeacherRow> = sqlx::query_as(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows.into_iter().map(CourseWithTeacher::from).collect())
    }

    pub async fn exists_or_fail(&mut self, id: i64) -> Result<(), DbError> {
        exists_or_fail(&mut *self.conn, EntityKind::Course, id).await
    }

    /// Delete a course; its enrollments go with it. Absent ids are a no-op.
    pub async fn delete_by_id(&mut self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    /// Point the course at `teacher_id`, replacing any previous teacher.
    ///
    /// Callers check that the teacher exists first; a dangling id is rejected by
    /// the foreign key as an internal error.
    pub async fn assign_teacher(&mut self, id: i64, teacher_id: i64) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE courses SET teacher_id = $2 WHERE id = $1")
            .bind(id)
            .bind(teacher_id)
            .execute(&mut *self.conn)
            .await?;

        require_updated(result.rows_affected(), EntityKind::Course, id)
    }

    /// Courses each of `student_ids` is enrolled in, in one query.
    ///
    /// Students with no courses are absent from the result.
    pub async fn courses_by_student_ids(
        &mut self,
        student_ids: &[i64],
    ) -> Result<ChildrenByParent<Course>, DbError> {
        if student_ids.is_empty() {
            return Ok(ChildrenByParent::new());
        }

        let rows: Vec<ParentCourseRow> = sqlx::query_as(
            r#"
            SELECT cs.student_id AS parent_id, c.id, c.title, c.teacher_id
            FROM course_student cs
            JOIN courses c ON c.id = cs.course_id
            WHERE cs.student_id = ANY($1)
            ORDER BY cs.student_id, c.id
            "#,
        )
        .bind(student_ids)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(group_rows(rows))
    }

    /// Courses taught by each of `teacher_ids`, in one query.
    ///
    /// Teachers with no courses are absent from the result.
    pub async fn courses_by_teacher_ids(
        &mut self,
        teacher_ids: &[i64],
    ) -> Result<ChildrenByParent<Course>, DbError> {
        if teacher_ids.is_empty() {
            return Ok(ChildrenByParent::new());
        }

        let rows: Vec<ParentCourseRow> = sqlx::query_as(
            r#"
            SELECT c.teacher_id AS parent_id, c.id, c.title, c.teacher_id
            FROM courses c
            WHERE c.teacher_id = ANY($1)
            ORDER BY c.teacher_id, c.id
            "#,
        )
        .bind(teacher_ids)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(group_rows(rows))
    }
}

fn group_rows(rows: Vec<ParentCourseRow>) -> ChildrenByParent<Course> {
    group_by_parent(rows.into_iter().map(|row| (row.parent_id, row.course)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_row_without_teacher() {
        let joined = CourseWithTeacher::from(CourseTeacherRow {
            id: 2,
            title: "Math".into(),
            teacher_id: None,
            teacher_name: None,
        });

        assert_eq!(joined.course.id, 2);
        assert_eq!(joined.course.teacher_id, None);
        assert!(joined.teacher.is_none());
    }

    #[test]
    fn joined_row_with_teacher() {
        let joined = CourseWithTeacher::from(CourseTeacherRow {
            id: 2,
            title: "Math".into(),
            teacher_id: Some(5),
            teacher_name: Some("Turing".into()),
        });

        assert_eq!(
            joined.teacher,
            Some(Teacher {
                id: 5,
                name: "Turing".into()
            })
        );
        assert_eq!(joined.course.teacher_id, Some(5));
    }
}
