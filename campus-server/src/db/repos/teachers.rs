//! Teacher repository
//!
//! A teacher's department is not a column on `teachers`: it is the department whose
//! `head_of_department_id` points back at the teacher. Reads resolve it with a
//! lateral join that picks the lowest department id when a teacher heads several.

use sqlx::{FromRow, PgConnection};

use super::{exists_or_fail, require_updated};
use crate::db::DbError;
use crate::models::{Department, EntityKind, NewTeacher, Teacher, TeacherWithDepartment};

/// Flat row for `teachers LEFT JOIN LATERAL departments`.
#[derive(FromRow)]
struct TeacherDepartmentRow {
    id: i64,
    name: String,
    department_id: Option<i64>,
    department_name: Option<String>,
}

impl From<TeacherDepartmentRow> for TeacherWithDepartment {
    fn from(row: TeacherDepartmentRow) -> Self {
        let department = match (row.department_id, row.department_name) {
            (Some(id), Some(name)) => Some(Department {
                id,
                name,
                head_of_department_id: Some(row.id),
            }),
            _ => None,
        };

        Self {
            teacher: Teacher {
                id: row.id,
                name: row.name,
            },
            department,
        }
    }
}

const SELECT_WITH_DEPARTMENT: &str = r#"
    SELECT t.id, t.name, d.id AS department_id, d.name AS department_name
    FROM teachers t
    LEFT JOIN LATERAL (
        SELECT id, name
        FROM departments
        WHERE head_of_department_id = t.id
        ORDER BY id
        LIMIT 1
    ) d ON TRUE
"#;

pub struct TeacherRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> TeacherRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&mut self, teacher: &NewTeacher) -> Result<i64, DbError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO teachers (name) VALUES ($1) RETURNING id")
            .bind(teacher.name.as_str())
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(id)
    }

    pub async fn update(&mut self, id: i64, teacher: &NewTeacher) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE teachers SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(teacher.name.as_str())
            .execute(&mut *self.conn)
            .await?;

        require_updated(result.rows_affected(), EntityKind::Teacher, id)
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<TeacherWithDepartment, DbError> {
        let sql = format!("{SELECT_WITH_DEPARTMENT} WHERE t.id = $1");
        let row: Option<TeacherDepartmentRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        row.map(TeacherWithDepartment::from)
            .ok_or_else(|| DbError::not_found(EntityKind::Teacher, id))
    }

    pub async fn find_all(&mut self) -> Result<Vec<TeacherWithDepartment>, DbError> {
        let sql = format!("{SELECT_WITH_DEPARTMENT} ORDER BY t.id");
        let rows: Vec<TeacherDepartmentRow> = sqlx::query_as(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows.into_iter().map(TeacherWithDepartment::from).collect())
    }

    pub async fn exists_or_fail(&mut self, id: i64) -> Result<(), DbError> {
        exists_or_fail(&mut *self.conn, EntityKind::Teacher, id).await
    }

    /// Delete a teacher. Courses and departments pointing at them fall back to no
    /// teacher. Absent ids are a no-op.
    pub async fn delete_by_id(&mut self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headed_department_points_back_at_teacher() {
        let joined = TeacherWithDepartment::from(TeacherDepartmentRow {
            id: 3,
            name: "Hopper".into(),
            department_id: Some(9),
            department_name: Some("Computing".into()),
        });

        let department = joined.department.expect("department");
        assert_eq!(department.id, 9);
        assert_eq!(department.head_of_department_id, Some(3));
    }

    #[test]
    fn teacher_without_department() {
        let joined = TeacherWithDepartment::from(TeacherDepartmentRow {
            id: 3,
            name: "Hopper".into(),
            department_id: None,
            department_name: None,
        });

        assert_eq!(joined.teacher.name, "Hopper");
        assert!(joined.department.is_none());
    }
}
