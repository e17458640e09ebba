//! Teacher operations

use sqlx::PgPool;

use crate::assembler::{assemble_teachers, TeacherResponse};
use crate::db::{take_children, CourseRepo, DbError, TeacherRepo, UnitOfWork};
use crate::models::{NewTeacher, Teacher};

pub struct TeacherService<'a> {
    pool: &'a PgPool,
}

impl<'a> TeacherService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: NewTeacher) -> Result<TeacherResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let id = TeacherRepo::new(uow.conn()).create(&input).await?;
        uow.commit().await?;

        tracing::info!(teacher_id = id, "teacher created");
        Ok(TeacherResponse::from(Teacher {
            id,
            name: input.name.into_string(),
        }))
    }

    pub async fn update(&self, id: i64, input: NewTeacher) -> Result<TeacherResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        TeacherRepo::new(uow.conn()).update(id, &input).await?;
        let response = load(&mut uow, id).await?;
        uow.commit().await?;

        tracing::info!(teacher_id = id, "teacher updated");
        Ok(response)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<TeacherResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let response = load(&mut uow, id).await?;
        uow.commit().await?;
        Ok(response)
    }

    /// All teachers with department and courses, in two queries regardless of count.
    pub async fn find_all(&self) -> Result<Vec<TeacherResponse>, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let teachers = TeacherRepo::new(uow.conn()).find_all().await?;
        let ids: Vec<i64> = teachers.iter().map(|t| t.teacher.id).collect();
        let courses = CourseRepo::new(uow.conn())
            .courses_by_teacher_ids(&ids)
            .await?;
        uow.commit().await?;

        tracing::debug!(count = teachers.len(), "teachers listed");
        Ok(assemble_teachers(teachers, courses))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        TeacherRepo::new(uow.conn()).delete_by_id(id).await?;
        uow.commit().await?;

        tracing::info!(teacher_id = id, "teacher deleted");
        Ok(())
    }
}

async fn load(uow: &mut UnitOfWork, id: i64) -> Result<TeacherResponse, DbError> {
    let teacher = TeacherRepo::new(uow.conn()).find_by_id(id).await?;
    let mut courses = CourseRepo::new(uow.conn())
        .courses_by_teacher_ids(&[id])
        .await?;

    Ok(TeacherResponse::assemble(
        teacher,
        take_children(&mut courses, id),
    ))
}
