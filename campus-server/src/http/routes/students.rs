//! Student endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::assembler::{CourseResponse, StudentResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{OwnerId, ValidId, ValidIdPair, ValidJson};
use crate::models::NewStudent;
use crate::service::StudentService;
use crate::state::AppState;

/// Create/update student request
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentRequest {
    pub name: String,
    pub email: String,
}

/// POST /students
async fn create_student(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<StudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let input = NewStudent::new(&req.name, &req.email)?;
    let student = StudentService::new(state.pool()).create(input).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /students
async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = StudentService::new(state.pool()).find_all().await?;
    Ok(Json(students))
}

/// GET /students/{id}
async fn get_student(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::new(state.pool()).find_by_id(id).await?;
    Ok(Json(student))
}

/// GET /students/{id}/courses
async fn student_courses(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = StudentService::new(state.pool()).courses_of(id).await?;
    Ok(Json(courses))
}

/// PATCH /students/{id}
async fn update_student(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<StudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let input = NewStudent::new(&req.name, &req.email)?;
    let student = StudentService::new(state.pool()).update(id, input).await?;
    Ok(Json(student))
}

/// DELETE /students/{id}
async fn delete_student(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    StudentService::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reports a bad `{id}` as `studentId`
pub enum EnrollmentPath {}

impl OwnerId for EnrollmentPath {
    const NAME: &'static str = "studentId";
}

/// POST /students/{id}/courses/{courseId} - enroll the student
async fn enroll_student(
    State(state): State<AppState>,
    ValidIdPair(student_id, course_id, _): ValidIdPair<EnrollmentPath>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::new(state.pool())
        .enroll(student_id, course_id)
        .await?;
    Ok(Json(student))
}

/// Student routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).patch(update_student).delete(delete_student),
        )
        .route("/students/{id}/courses", get(student_courses))
        .route("/students/{id}/courses/{courseId}", post(enroll_student))
}
