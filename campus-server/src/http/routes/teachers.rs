//! Teacher endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::assembler::TeacherResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::models::NewTeacher;
use crate::service::TeacherService;
use crate::state::AppState;

/// Create/update teacher request
#[derive(Debug, Serialize, Deserialize)]
pub struct TeacherRequest {
    pub name: String,
}

async fn create_teacher(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<TeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    let input = NewTeacher::new(&req.name)?;
    let teacher = TeacherService::new(state.pool()).create(input).await?;

    Ok((StatusCode::CREATED, Json(teacher)))
}

async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherResponse>>, ApiError> {
    let teachers = TeacherService::new(state.pool()).find_all().await?;
    Ok(Json(teachers))
}

async fn get_teacher(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<TeacherResponse>, ApiError> {
    let teacher = TeacherService::new(state.pool()).find_by_id(id).await?;
    Ok(Json(teacher))
}

async fn update_teacher(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<TeacherRequest>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let input = NewTeacher::new(&req.name)?;
    let teacher = TeacherService::new(state.pool()).update(id, input).await?;
    Ok(Json(teacher))
}

async fn delete_teacher(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    TeacherService::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Teacher routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route(
            "/teachers/{id}",
            get(get_teacher).patch(update_teacher).delete(delete_teacher),
        )
}
