// src/handlers/quiz.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::quiz::{CreateQuizRequest, QuizView, UpdateQuizRequest},
    scoring, store,
};

/// Lists all quizzes as flat {id, title} summaries.
pub async fn list_quizzes(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let quizzes = store::list_quizzes(&pool).await?;
    Ok(Json(quizzes))
}

/// Retrieves one quiz as a nested view of its questions and answers.
pub async fn get_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store::fetch_quiz(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    let questions = store::fetch_questions_by_quiz(&pool, id).await?;
    let answers = store::fetch_answers_by_quiz(&pool, id).await?;

    Ok(Json(QuizView::assemble(quiz, questions, answers)))
}

/// Creates a quiz and answers 201 with its Location.
pub async fn create_quiz(
    State(pool): State<SqlitePool>,
    Json(req): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = store::create_quiz(&pool, &req.title).await?;
    tracing::info!("Created quiz {}", id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/quizzes/{}", id))],
    ))
}

pub async fn update_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store::update_quiz(&pool, id, &req.title).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Quiz not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a quiz. The delete does not cascade: questions and answers of
/// the quiz are left in place.
pub async fn delete_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store::delete_quiz(&pool, id).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Quiz not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Scores a submitted question -> answer mapping against the quiz and
/// answers 200 with the plain-text score, e.g. "2 / 3".
///
/// An unknown quiz id answers 404. The service this replaces signalled that
/// case with an empty success body; the proper not-found outcome is
/// deliberate here.
pub async fn evaluate_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(submission): Json<HashMap<i64, i64>>,
) -> Result<impl IntoResponse, AppError> {
    store::fetch_quiz(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    let questions = store::fetch_questions_by_quiz(&pool, id).await?;
    let score = scoring::evaluate(&questions, &submission);
    tracing::info!("Evaluated quiz {}: {}", id, score);

    Ok(score.to_string())
}
