//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Built over a `&mut PgConnection` borrowed from a `UnitOfWork`
//! - Optional references resolved by LEFT JOIN in the primary query
//! - Batched child lookups use `= ANY($1)` and skip the query for an empty batch

pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod students;
pub mod teachers;

pub use courses::CourseRepo;
pub use departments::DepartmentRepo;
pub use enrollments::EnrollmentRepo;
pub use students::StudentRepo;
pub use teachers::TeacherRepo;

use sqlx::PgConnection;

use super::DbError;
use crate::models::EntityKind;

/// Cheap existence probe; fails with `NotFound` naming `kind` when the row is absent.
pub(crate) async fn exists_or_fail(
    conn: &mut PgConnection,
    kind: EntityKind,
    id: i64,
) -> Result<(), DbError> {
    let sql = match kind {
        EntityKind::Student => "SELECT EXISTS(SELECT 1 FROM students WHERE id = $1 LIMIT 1)",
        EntityKind::Course => "SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1 LIMIT 1)",
        EntityKind::Teacher => "SELECT EXISTS(SELECT 1 FROM teachers WHERE id = $1 LIMIT 1)",
        EntityKind::Department => {
            "SELECT EXISTS(SELECT 1 FROM departments WHERE id = $1 LIMIT 1)"
        }
    };

    let exists: bool = sqlx::query_scalar(sql).bind(id).fetch_one(conn).await?;

    if exists {
        Ok(())
    } else {
        Err(DbError::not_found(kind, id))
    }
}

/// Map an UPDATE's affected-row count to `NotFound` when nothing matched.
pub(crate) fn require_updated(rows: u64, kind: EntityKind, id: i64) -> Result<(), DbError> {
    if rows == 0 {
        Err(DbError::not_found(kind, id))
    } else {
        Ok(())
    }
}
