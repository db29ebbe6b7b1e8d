//! Students service routes

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    models::{Student, StudentCreateRequest},
    validation,
};

/// Base path of the student resource
pub const STUDENTS_PATH: &str = "/api/v1/students";

/// Create the router for the students service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            STUDENTS_PATH,
            get(get_students).post(create_student).put(update_student),
        )
        .route(
            &format!("{}/:id", STUDENTS_PATH),
            get(get_student).delete(delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn student_id(id: Result<Path<i32>, PathRejection>) -> ApiResult<i32> {
    id.map(|Path(id)| id).map_err(|e| {
        warn!("Rejected student id: {}", e);
        ApiError::Validation
    })
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload.map(|Json(body)| body).map_err(|e| {
        warn!("Rejected student payload: {}", e);
        ApiError::Validation
    })
}

fn check(result: Result<(), Vec<String>>) -> ApiResult<()> {
    result.map_err(|errors| {
        warn!("Student payload failed validation: {}", errors.join(", "));
        ApiError::Validation
    })
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if common::database::health_check(&state.database).await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "students-service"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "service": "students-service"
            })),
        )
    }
}

/// Get all students
pub async fn get_students(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let students = state.student_service.get_all().await?;

    Ok(Json(students))
}

/// Get a student by ID
pub async fn get_student(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = student_id(id)?;
    let student = state
        .student_service
        .get(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(student))
}

/// Create a new student
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentCreateRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let payload = json_body(payload)?;
    check(validation::validate_create_request(&payload))?;

    let mut student = Student::from(payload);
    student.id = state.student_service.create(&student).await?;

    let location = format!("{}/{}", STUDENTS_PATH, student.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    ))
}

/// Replace every field of an existing student
pub async fn update_student(
    State(state): State<AppState>,
    payload: Result<Json<Student>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let student = json_body(payload)?;
    check(validation::validate_student(&student))?;

    if !state.student_service.update(&student).await? {
        return Err(ApiError::NotFound(student.id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a student by ID
pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = student_id(id)?;

    if !state.student_service.delete(id).await? {
        return Err(ApiError::NotFound(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
