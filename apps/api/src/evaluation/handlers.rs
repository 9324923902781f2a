//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::evaluation::evaluator::{evaluate, Evaluation, Submission};
use crate::state::AppState;

/// POST /analyze
///
/// Accepts an interview session (role, type, answers — all optional) and
/// returns a randomized mock evaluation. A missing or unparseable JSON body
/// is the only failure path; it surfaces as a 400 via `AppError`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Json<Submission>, JsonRejection>,
) -> Result<Json<Evaluation>, AppError> {
    let Json(submission) = body?;

    debug!(
        role = %submission.role,
        interview_type = %submission.interview_type,
        answers = submission.answers.len(),
        "evaluating submission"
    );

    Ok(Json(evaluate(&submission, state.sampler.as_ref())))
}
