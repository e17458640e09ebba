//! Student operations, including enrollment

use sqlx::PgPool;

use crate::assembler::{assemble_students, CourseResponse, StudentResponse};
use crate::db::{take_children, CourseRepo, DbError, EnrollmentRepo, StudentRepo, UnitOfWork};
use crate::models::{NewStudent, Student};

pub struct StudentService<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: NewStudent) -> Result<StudentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let id = StudentRepo::new(uow.conn()).create(&input).await?;
        uow.commit().await?;

        tracing::info!(student_id = id, "student created");
        Ok(StudentResponse::from(Student {
            id,
            name: input.name.into_string(),
            email: input.email.into_string(),
        }))
    }

    pub async fn update(&self, id: i64, input: NewStudent) -> Result<StudentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        StudentRepo::new(uow.conn()).update(id, &input).await?;
        let response = load(&mut uow, id).await?;
        uow.commit().await?;

        tracing::info!(student_id = id, "student updated");
        Ok(response)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<StudentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let response = load(&mut uow, id).await?;
        uow.commit().await?;
        Ok(response)
    }

    /// All students with their courses, in two queries regardless of count.
    pub async fn find_all(&self) -> Result<Vec<StudentResponse>, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let students = StudentRepo::new(uow.conn()).find_all().await?;
        let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        let courses = CourseRepo::new(uow.conn())
            .courses_by_student_ids(&ids)
            .await?;
        uow.commit().await?;

        tracing::debug!(count = students.len(), "students listed");
        Ok(assemble_students(students, courses))
    }

    /// Courses a student is enrolled in, each without nested associations.
    pub async fn courses_of(&self, id: i64) -> Result<Vec<CourseResponse>, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        StudentRepo::new(uow.conn()).exists_or_fail(id).await?;
        let mut courses = CourseRepo::new(uow.conn())
            .courses_by_student_ids(&[id])
            .await?;
        uow.commit().await?;

        Ok(take_children(&mut courses, id)
            .into_iter()
            .map(CourseResponse::from)
            .collect())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        StudentRepo::new(uow.conn()).delete_by_id(id).await?;
        uow.commit().await?;

        tracing::info!(student_id = id, "student deleted");
        Ok(())
    }

    /// Enroll the student in a course and return the refreshed student.
    pub async fn enroll(&self, student_id: i64, course_id: i64) -> Result<StudentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        EnrollmentRepo::new(uow.conn())
            .attach(student_id, course_id)
            .await?;
        let response = load(&mut uow, student_id).await?;
        uow.commit().await?;

        tracing::info!(student_id, course_id, "student enrolled");
        Ok(response)
    }
}

async fn load(uow: &mut UnitOfWork, id: i64) -> Result<StudentResponse, DbError> {
    let student = StudentRepo::new(uow.conn()).find_by_id(id).await?;
    let mut courses = CourseRepo::new(uow.conn())
        .courses_by_student_ids(&[id])
        .await?;

    Ok(StudentResponse::assemble(
        student,
        take_children(&mut courses, id),
    ))
}
