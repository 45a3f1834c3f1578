// src/handlers/answer.rs

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::answer::{CreateAnswerRequest, UpdateAnswerRequest},
    store,
};

/// Creates a candidate answer under a question. The question must exist at
/// the time of the check; the insert itself is not guarded by a transaction.
pub async fn create_answer(
    State(pool): State<SqlitePool>,
    Path((id, qid)): Path<(i64, i64)>,
    Json(req): Json<CreateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    store::fetch_question(&pool, qid)
        .await?
        .ok_or(AppError::NotFound("Question not found".to_string()))?;

    let answer_id = store::create_answer(&pool, qid, &req.text).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/quizzes/{}/questions/{}/answers/{}", id, qid, answer_id),
        )],
    ))
}

pub async fn update_answer(
    State(pool): State<SqlitePool>,
    Path((_id, _qid, aid)): Path<(i64, i64, i64)>,
    Json(req): Json<UpdateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store::update_answer(&pool, aid, &req.text).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Answer not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_answer(
    State(pool): State<SqlitePool>,
    Path((_id, _qid, aid)): Path<(i64, i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store::delete_answer(&pool, aid).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Answer not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
