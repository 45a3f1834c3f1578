// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, UpdateQuestionRequest},
    store,
};

/// Creates a question under a quiz. The quiz must exist at the time of the
/// check; the insert itself is not guarded by a transaction.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    store::fetch_quiz(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    let question_id = store::create_question(&pool, id, &req.text).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/quizzes/{}/questions/{}", id, question_id),
        )],
    ))
}

/// Updates a question's text and designated correct answer.
///
/// A non-null correctAnswerId must reference an answer belonging to this
/// question, otherwise the update is rejected with 400.
pub async fn update_question(
    State(pool): State<SqlitePool>,
    Path((_id, qid)): Path<(i64, i64)>,
    Json(req): Json<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(answer_id) = req.correct_answer_id {
        let owned = store::fetch_answer(&pool, answer_id)
            .await?
            .is_some_and(|answer| answer.question_id == qid);
        if !owned {
            return Err(AppError::BadRequest(
                "correctAnswerId does not reference an answer of this question".to_string(),
            ));
        }
    }

    let rows = store::update_question(&pool, qid, &req.text, req.correct_answer_id).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a question. Its answers are left in place.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path((_id, qid)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store::delete_question(&pool, qid).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
