//! Course operations, including teacher assignment

use sqlx::PgPool;

use crate::assembler::{assemble_courses, CourseResponse};
use crate::db::{take_children, CourseRepo, DbError, StudentRepo, TeacherRepo, UnitOfWork};
use crate::models::{Course, NewCourse};

pub struct CourseService<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: NewCourse) -> Result<CourseResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let id = CourseRepo::new(uow.conn()).create(&input).await?;
        uow.commit().await?;

        tracing::info!(course_id = id, "course created");
        Ok(CourseResponse::from(Course {
            id,
            title: input.title.into_string(),
            teacher_id: None,
        }))
    }

    pub async fn update(&self, id: i64, input: NewCourse) -> Result<CourseResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        CourseRepo::new(uow.conn()).update(id, &input).await?;
        let response = load(&mut uow, id).await?;
        uow.commit().await?;

        tracing::info!(course_id = id, "course updated");
        Ok(response)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<CourseResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let response = load(&mut uow, id).await?;
        uow.commit().await?;
        Ok(response)
    }

    /// All courses with teacher and students, in two queries regardless of count.
    pub async fn find_all(&self) -> Result<Vec<CourseResponse>, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let courses = CourseRepo::new(uow.conn()).find_all().await?;
        let ids: Vec<i64> = courses.iter().map(|c| c.course.id).collect();
        let students = StudentRepo::new(uow.conn())
            .students_by_course_ids(&ids)
            .await?;
        uow.commit().await?;

        tracing::debug!(count = courses.len(), "courses listed");
        Ok(assemble_courses(courses, students))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        CourseRepo::new(uow.conn()).delete_by_id(id).await?;
        uow.commit().await?;

        tracing::info!(course_id = id, "course deleted");
        Ok(())
    }

    /// Make `teacher_id` the course's teacher, replacing any previous one.
    pub async fn assign_teacher(
        &self,
        course_id: i64,
        teacher_id: i64,
    ) -> Result<CourseResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        CourseRepo::new(uow.conn()).exists_or_fail(course_id).await?;
        TeacherRepo::new(uow.conn()).exists_or_fail(teacher_id).await?;
        CourseRepo::new(uow.conn())
            .assign_teacher(course_id, teacher_id)
            .await?;
        let response = load(&mut uow, course_id).await?;
        uow.commit().await?;

        tracing::info!(course_id, teacher_id, "course teacher assigned");
        Ok(response)
    }
}

async fn load(uow: &mut UnitOfWork, id: i64) -> Result<CourseResponse, DbError> {
    let course = CourseRepo::new(uow.conn()).find_by_id(id).await?;
    let mut students = StudentRepo::new(uow.conn())
        .students_by_course_ids(&[id])
        .await?;

    Ok(CourseResponse::assemble(
        course,
        take_children(&mut students, id),
    ))
}
