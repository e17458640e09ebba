//! Course endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::assembler::CourseResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{OwnerId, ValidId, ValidIdPair, ValidJson};
use crate::models::NewCourse;
use crate::service::CourseService;
use crate::state::AppState;

/// Create/update course request
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseRequest {
    pub title: String,
}

async fn create_course(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let input = NewCourse::new(&req.title)?;
    let course = CourseService::new(state.pool()).create(input).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = CourseService::new(state.pool()).find_all().await?;
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::new(state.pool()).find_by_id(id).await?;
    Ok(Json(course))
}

async fn update_course(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<CourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let input = NewCourse::new(&req.title)?;
    let course = CourseService::new(state.pool()).update(id, input).await?;
    Ok(Json(course))
}

async fn delete_course(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    CourseService::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reports a bad `{id}` as `courseId`
pub enum CourseTeacherPath {}

impl OwnerId for CourseTeacherPath {
    const NAME: &'static str = "courseId";
}

/// POST /courses/{id}/teacher/{teacherId}
async fn assign_teacher(
    State(state): State<AppState>,
    ValidIdPair(course_id, teacher_id, _): ValidIdPair<CourseTeacherPath>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::new(state.pool())
        .assign_teacher(course_id, teacher_id)
        .await?;
    Ok(Json(course))
}

/// Course routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).patch(update_course).delete(delete_course),
        )
        .route("/courses/{id}/teacher/{teacherId}", post(assign_teacher))
}
