//! Department endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::assembler::DepartmentResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{OwnerId, ValidId, ValidIdPair, ValidJson};
use crate::models::NewDepartment;
use crate::service::DepartmentService;
use crate::state::AppState;

/// Create/update department request
#[derive(Debug, Serialize, Deserialize)]
pub struct DepartmentRequest {
    pub name: String,
}

async fn create_department(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<DepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    let input = NewDepartment::new(&req.name)?;
    let department = DepartmentService::new(state.pool()).create(input).await?;

    Ok((StatusCode::CREATED, Json(department)))
}

async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let departments = DepartmentService::new(state.pool()).find_all().await?;
    Ok(Json(departments))
}

async fn get_department(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let department = DepartmentService::new(state.pool()).find_by_id(id).await?;
    Ok(Json(department))
}

async fn update_department(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<DepartmentRequest>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let input = NewDepartment::new(&req.name)?;
    let department = DepartmentService::new(state.pool())
        .update(id, input)
        .await?;
    Ok(Json(department))
}

async fn delete_department(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    DepartmentService::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reports a bad `{id}` as `departmentId`
pub enum DepartmentHeadPath {}

impl OwnerId for DepartmentHeadPath {
    const NAME: &'static str = "departmentId";
}

/// POST /departments/{id}/teacher/{teacherId} - set head of department
///
/// Responds 201 rather than 200; existing clients depend on it.
async fn assign_head(
    State(state): State<AppState>,
    ValidIdPair(department_id, teacher_id, _): ValidIdPair<DepartmentHeadPath>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    let department = DepartmentService::new(state.pool())
        .assign_head(department_id, teacher_id)
        .await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// Department routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/departments", get(list_departments).post(create_department))
        .route(
            "/departments/{id}",
            get(get_department)
                .patch(update_department)
                .delete(delete_department),
        )
        .route("/departments/{id}/teacher/{teacherId}", post(assign_head))
}
