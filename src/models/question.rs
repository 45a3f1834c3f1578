// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The quiz this question belongs to.
    pub quiz_id: i64,

    pub text: String,

    /// None until a correct answer has been designated. Kept nullable so an
    /// undesignated question can never collide with a real answer id.
    pub correct_answer_id: Option<i64>,
}

/// DTO for creating a new question under a quiz.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
}

/// DTO for updating a question's text and designated correct answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    pub text: String,
    pub correct_answer_id: Option<i64>,
}
