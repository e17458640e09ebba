//! Department operations, including head assignment

use sqlx::PgPool;

use crate::assembler::{assemble_departments, DepartmentResponse};
use crate::db::{DbError, DepartmentRepo, TeacherRepo, UnitOfWork};
use crate::models::{Department, NewDepartment};

pub struct DepartmentService<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: NewDepartment) -> Result<DepartmentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let id = DepartmentRepo::new(uow.conn()).create(&input).await?;
        uow.commit().await?;

        tracing::info!(department_id = id, "department created");
        Ok(DepartmentResponse::from(Department {
            id,
            name: input.name.into_string(),
            head_of_department_id: None,
        }))
    }

    pub async fn update(
        &self,
        id: i64,
        input: NewDepartment,
    ) -> Result<DepartmentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let mut departments = DepartmentRepo::new(uow.conn());
        departments.update(id, &input).await?;
        let department = departments.find_by_id(id).await?;
        uow.commit().await?;

        tracing::info!(department_id = id, "department updated");
        Ok(DepartmentResponse::assemble(department))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<DepartmentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let department = DepartmentRepo::new(uow.conn()).find_by_id(id).await?;
        uow.commit().await?;
        Ok(DepartmentResponse::assemble(department))
    }

    pub async fn find_all(&self) -> Result<Vec<DepartmentResponse>, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        let departments = DepartmentRepo::new(uow.conn()).find_all().await?;
        uow.commit().await?;

        tracing::debug!(count = departments.len(), "departments listed");
        Ok(assemble_departments(departments))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        DepartmentRepo::new(uow.conn()).delete_by_id(id).await?;
        uow.commit().await?;

        tracing::info!(department_id = id, "department deleted");
        Ok(())
    }

    /// Make `teacher_id` head of the department, replacing any previous head.
    pub async fn assign_head(
        &self,
        department_id: i64,
        teacher_id: i64,
    ) -> Result<DepartmentResponse, DbError> {
        let mut uow = UnitOfWork::begin(self.pool).await?;
        DepartmentRepo::new(uow.conn())
            .exists_or_fail(department_id)
            .await?;
        TeacherRepo::new(uow.conn()).exists_or_fail(teacher_id).await?;

        let mut departments = DepartmentRepo::new(uow.conn());
        departments.assign_head(department_id, teacher_id).await?;
        let department = departments.find_by_id(department_id).await?;
        uow.commit().await?;

        tracing::info!(department_id, teacher_id, "department head assigned");
        Ok(DepartmentResponse::assemble(department))
    }
}
