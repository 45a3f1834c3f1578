// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'answers' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,

    /// The question this answer is a candidate for.
    pub question_id: i64,

    pub text: String,
}

/// DTO for creating a new answer under a question.
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    pub text: String,
}

/// DTO for updating an answer's text.
#[derive(Debug, Deserialize)]
pub struct UpdateAnswerRequest {
    pub text: String,
}
