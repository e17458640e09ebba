//! Department repository

use sqlx::{FromRow, PgConnection};

use super::{exists_or_fail, require_updated};
use crate::db::DbError;
use crate::models::{Department, DepartmentWithHead, EntityKind, NewDepartment, Teacher};

/// Flat row for `departments LEFT JOIN teachers`.
#[derive(FromRow)]
struct DepartmentHeadRow {
    id: i64,
    name: String,
    head_of_department_id: Option<i64>,
    head_name: Option<String>,
}

impl From<DepartmentHeadRow> for DepartmentWithHead {
    fn from(row: DepartmentHeadRow) -> Self {
        let head = match (row.head_of_department_id, row.head_name) {
            (Some(id), Some(name)) => Some(Teacher { id, name }),
            _ => None,
        };

        Self {
            department: Department {
                id: row.id,
                name: row.name,
                head_of_department_id: row.head_of_department_id,
            },
            head,
        }
    }
}

const SELECT_WITH_HEAD: &str = r#"
    SELECT d.id, d.name, d.head_of_department_id, t.name AS head_name
    FROM departments d
    LEFT JOIN teachers t ON t.id = d.head_of_department_id
"#;

pub struct DepartmentRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> DepartmentRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a department with no head and return the generated id.
    pub async fn create(&mut self, department: &NewDepartment) -> Result<i64, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO departments (name, head_of_department_id) VALUES ($1, NULL) RETURNING id",
        )
        .bind(department.name.as_str())
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(id)
    }

    /// Overwrite the name. The head assignment is left untouched.
    pub async fn update(&mut self, id: i64, department: &NewDepartment) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE departments SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(department.name.as_str())
            .execute(&mut *self.conn)
            .await?;

        require_updated(result.rows_affected(), EntityKind::Department, id)
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<DepartmentWithHead, DbError> {
        let sql = format!("{SELECT_WITH_HEAD} WHERE d.id = $1");
        let row: Option<DepartmentHeadRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        row.map(DepartmentWithHead::from)
            .ok_or_else(|| DbError::not_found(EntityKind::Department, id))
    }

    pub async fn find_all(&mut self) -> Result<Vec<DepartmentWithHead>, DbError> {
        let sql = format!("{SELECT_WITH_HEAD} ORDER BY d.id");
        let rows: Vec<DepartmentHeadRow> = sqlx::query_as(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows.into_iter().map(DepartmentWithHead::from).collect())
    }

    pub async fn exists_or_fail(&mut self, id: i64) -> Result<(), DbError> {
        exists_or_fail(&mut *self.conn, EntityKind::Department, id).await
    }

    pub async fn delete_by_id(&mut self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    /// Make `teacher_id` the head of the department, replacing any previous head.
    pub async fn assign_head(&mut self, id: i64, teacher_id: i64) -> Result<(), DbError> {
        let result =
            sqlx::query("UPDATE departments SET head_of_department_id = $2 WHERE id = $1")
                .bind(id)
                .bind(teacher_id)
                .execute(&mut *self.conn)
                .await?;

        require_updated(result.rows_affected(), EntityKind::Department, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_row_with_head() {
        let joined = DepartmentWithHead::from(DepartmentHeadRow {
            id: 1,
            name: "Physics".into(),
            head_of_department_id: Some(4),
            head_name: Some("Curie".into()),
        });

        assert_eq!(joined.department.head_of_department_id, Some(4));
        assert_eq!(joined.head.map(|t| t.name), Some("Curie".to_string()));
    }
}
