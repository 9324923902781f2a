//! Interview question bank, keyed by role.
//!
//! The bank is fixed at compile time; roles not listed here are a 404.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;

const DATA_SCIENTIST_QUESTIONS: &[&str] = &[
    "What are overfitting and underfitting?",
    "What is the difference between supervised and unsupervised learning?",
    "How do you handle missing data?",
];

const SOFTWARE_ENGINEER_QUESTIONS: &[&str] = &[
    "What are OOP principles?",
    "How do you ensure code quality?",
    "Explain Agile methodology briefly.",
];

const AI_ML_ENGINEER_QUESTIONS: &[&str] = &[
    "What is the difference between AI and ML?",
    "How does a neural network learn?",
    "What is backpropagation?",
];

/// Returns the question list for a role, or None for unknown roles.
pub fn questions_for(role: &str) -> Option<&'static [&'static str]> {
    match role {
        "Data Scientist" => Some(DATA_SCIENTIST_QUESTIONS),
        "Software Engineer" => Some(SOFTWARE_ENGINEER_QUESTIONS),
        "AI/ML Engineer" => Some(AI_ML_ENGINEER_QUESTIONS),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub role: String,
    pub questions: Vec<&'static str>,
}

/// GET /questions/:role
///
/// Returns the fixed question list for a known role.
pub async fn handle_get_questions(
    Path(role): Path<String>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let questions = questions_for(&role)
        .ok_or_else(|| AppError::NotFound(format!("No question bank for role '{role}'")))?;

    Ok(Json(QuestionsResponse {
        role,
        questions: questions.to_vec(),
    }))
}
