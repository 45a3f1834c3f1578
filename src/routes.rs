// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{answer, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the quiz/question/answer resource tree under /api/quizzes.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/", get(quiz::list_quizzes).post(quiz::create_quiz))
        .route(
            "/{id}",
            get(quiz::get_quiz)
                .put(quiz::update_quiz)
                .delete(quiz::delete_quiz),
        )
        .route("/{id}/evaluate", post(quiz::evaluate_quiz))
        .route("/{id}/questions", post(question::create_question))
        .route(
            "/{id}/questions/{qid}",
            put(question::update_question).delete(question::delete_question),
        )
        .route(
            "/{id}/questions/{qid}/answers",
            post(answer::create_answer),
        )
        .route(
            "/{id}/questions/{qid}/answers/{aid}",
            put(answer::update_answer).delete(answer::delete_answer),
        );

    Router::new()
        .nest("/api/quizzes", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
