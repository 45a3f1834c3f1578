// src/store.rs

use sqlx::SqlitePool;

use crate::models::{answer::Answer, question::Question, quiz::Quiz};

// Every statement here is a single parameterized query. Referential
// integrity is not enforced at this layer: deletes do not cascade and
// inserts do not verify their parent rows.

pub async fn list_quizzes(pool: &SqlitePool) -> Result<Vec<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>("SELECT id, title FROM quizzes ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn fetch_quiz(pool: &SqlitePool, id: i64) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>("SELECT id, title FROM quizzes WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_quiz(pool: &SqlitePool, title: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO quizzes (title) VALUES (?1)")
        .bind(title)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_quiz(pool: &SqlitePool, id: i64, title: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE quizzes SET title = ?1 WHERE id = ?2")
        .bind(title)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_quiz(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM quizzes WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn fetch_questions_by_quiz(
    pool: &SqlitePool,
    quiz_id: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, quiz_id, text, correct_answer_id FROM questions WHERE quiz_id = ?1 ORDER BY id",
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, quiz_id, text, correct_answer_id FROM questions WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_question(
    pool: &SqlitePool,
    quiz_id: i64,
    text: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO questions (quiz_id, text) VALUES (?1, ?2)")
        .bind(quiz_id)
        .bind(text)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_question(
    pool: &SqlitePool,
    id: i64,
    text: &str,
    correct_answer_id: Option<i64>,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE questions SET text = ?1, correct_answer_id = ?2 WHERE id = ?3")
            .bind(text)
            .bind(correct_answer_id)
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Fetches the answers of every question belonging to a quiz, ordered by
/// answer id so insertion order survives the round trip.
pub async fn fetch_answers_by_quiz(
    pool: &SqlitePool,
    quiz_id: i64,
) -> Result<Vec<Answer>, sqlx::Error> {
    sqlx::query_as::<_, Answer>(
        "SELECT a.id, a.question_id, a.text
         FROM answers a
         JOIN questions q ON a.question_id = q.id
         WHERE q.quiz_id = ?1
         ORDER BY a.id",
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_answer(pool: &SqlitePool, id: i64) -> Result<Option<Answer>, sqlx::Error> {
    sqlx::query_as::<_, Answer>("SELECT id, question_id, text FROM answers WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_answer(
    pool: &SqlitePool,
    question_id: i64,
    text: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO answers (question_id, text) VALUES (?1, ?2)")
        .bind(question_id)
        .bind(text)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_answer(pool: &SqlitePool, id: i64, text: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE answers SET text = ?1 WHERE id = ?2")
        .bind(text)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_answer(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM answers WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
