// src/models/quiz.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use super::{answer::Answer, question::Question};

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
}

/// DTO for creating a new quiz.
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub title: String,
}

/// DTO for renaming a quiz.
#[derive(Debug, Deserialize)]
pub struct UpdateQuizRequest {
    pub title: String,
}

/// Nested read model of a quiz: its questions, their answers, plus
/// navigation links. Derived on every read, never persisted.
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub id: i64,
    pub title: String,
    pub questions: Vec<QuestionItem>,
    pub links: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub id: i64,
    pub text: String,
    pub correct_answer_id: Option<i64>,
    pub answers: Vec<AnswerItem>,
}

#[derive(Debug, Serialize)]
pub struct AnswerItem {
    pub id: i64,
    pub text: String,
}

impl QuizView {
    /// Assembles the view from the quiz row, its questions, and the answers
    /// belonging to those questions.
    ///
    /// Questions keep the order they were supplied in; answers keep their
    /// supplied order within each question. A question with no answers gets
    /// an empty `answers` array, never a missing field.
    pub fn assemble(quiz: Quiz, questions: Vec<Question>, answers: Vec<Answer>) -> Self {
        let mut grouped: HashMap<i64, Vec<AnswerItem>> = HashMap::new();
        for answer in answers {
            grouped.entry(answer.question_id).or_default().push(AnswerItem {
                id: answer.id,
                text: answer.text,
            });
        }

        let questions = questions
            .into_iter()
            .map(|question| QuestionItem {
                answers: grouped.remove(&question.id).unwrap_or_default(),
                id: question.id,
                text: question.text,
                correct_answer_id: question.correct_answer_id,
            })
            .collect();

        let links = HashMap::from([
            ("self".to_string(), format!("/api/quizzes/{}", quiz.id)),
            (
                "questions".to_string(),
                format!("/api/quizzes/{}/questions", quiz.id),
            ),
        ]);

        Self {
            id: quiz.id,
            title: quiz.title,
            questions,
            links,
        }
    }
}
