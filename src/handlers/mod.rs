pub mod lessons;
pub mod mcqs;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{names, rejections::AppError, utils, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(mcqs::routes())
        .merge(lessons::routes())
        .route(names::HEALTH_URL, get(health))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    lessons: usize,
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: utils::VERSION,
        lessons: state.bank.len(),
    })
}

pub(crate) async fn not_found() -> AppError {
    AppError::NotFound
}
