//! HTTP request handlers

use super::types::{
    AnswerRequest, ErrorResponse, FeedbackRequest, FeedbackResponse, NextResponse, StartRequest,
    StartResponse,
};
use super::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/start", post(start_interview))
        .route("/next", post(process_answer))
        .route("/feedback", post(get_feedback))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Interview
// ============================================================

async fn start_interview(
    State(state): State<AppState>,
    payload: Result<Json<StartRequest>, JsonRejection>,
) -> Result<Json<StartResponse>, AppError> {
    let Json(req) = payload?;
    let question = state.interviewer.start(&req.role).await;
    Ok(Json(StartResponse { question }))
}

async fn process_answer(
    State(state): State<AppState>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<NextResponse>, AppError> {
    let Json(req) = payload?;
    let next = state
        .interviewer
        .next_question(&req.role, &req.user_answer, &req.history)
        .await;
    Ok(Json(NextResponse {
        question: next.question,
        status: next.phase.into(),
    }))
}

async fn get_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(req) = payload?;
    let feedback_report = state.interviewer.feedback(&req.role, &req.history).await;
    Ok(Json(FeedbackResponse { feedback_report }))
}

async fn get_version() -> &'static str {
    concat!("interview-coach ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

/// Only request-shape errors reach the caller; model failures are absorbed
enum AppError {
    InvalidBody(StatusCode, String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidBody(status, msg) => {
                tracing::debug!(status = %status, error = %msg, "Rejected request body");
                (status, msg)
            }
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
