//! Schema bootstrap for the four entity tables and the enrollment table

use sqlx::PgPool;

use super::DbError;

const SCHEMA: &[(&str, &str)] = &[
    (
        "teachers",
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "students",
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "courses",
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            teacher_id BIGINT REFERENCES teachers(id) ON DELETE SET NULL
        )
        "#,
    ),
    (
        "departments",
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            head_of_department_id BIGINT REFERENCES teachers(id) ON DELETE SET NULL
        )
        "#,
    ),
    (
        "course_student",
        r#"
        CREATE TABLE IF NOT EXISTS course_student (
            student_id BIGINT NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            course_id BIGINT NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
            PRIMARY KEY (student_id, course_id)
        )
        "#,
    ),
    (
        "idx_courses_title",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_courses_title ON courses(title)",
    ),
    (
        "idx_courses_teacher_id",
        "CREATE INDEX IF NOT EXISTS idx_courses_teacher_id ON courses(teacher_id)",
    ),
    (
        "idx_departments_head",
        "CREATE INDEX IF NOT EXISTS idx_departments_head ON departments(head_of_department_id)",
    ),
    (
        "idx_course_student_course_id",
        "CREATE INDEX IF NOT EXISTS idx_course_student_course_id ON course_student(course_id)",
    ),
];

/// Create all tables and indexes that don't exist yet. Safe to run repeatedly.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    let mut tx = pool.begin().await?;
    for (name, statement) in SCHEMA {
        tracing::debug!(object = name, "ensuring schema object");
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!(objects = SCHEMA.len(), "Schema migrations complete");
    Ok(())
}

/// Table names in dependency order (children first), used to clear data.
pub const TABLES: &[&str] = &["course_student", "departments", "courses", "students", "teachers"];

/// Remove every row and reset id sequences. Used to isolate integration tests.
pub async fn clear(pool: &PgPool) -> Result<(), DbError> {
    let statement = format!("TRUNCATE TABLE {} RESTART IDENTITY CASCADE", TABLES.join(", "));
    sqlx::query(&statement).execute(pool).await?;
    tracing::warn!("all campus tables cleared");
    Ok(())
}
