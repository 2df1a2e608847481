use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    lessons::{self, LessonSummary},
    names, sampler, utils, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::LESSONS_URL, get(list_lessons))
}

#[derive(Deserialize)]
pub(crate) struct LessonsQuery {
    subject: Option<String>,
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LessonsPage {
    lessons: Vec<LessonSummary>,
    total_lessons: usize,
    page: usize,
    page_size: usize,
    total_pages: usize,
}

async fn list_lessons(
    State(state): State<AppState>,
    Query(query): Query<LessonsQuery>,
) -> Json<LessonsPage> {
    let subject = query.subject.as_deref().filter(|s| !s.is_empty());
    let page = utils::positive_or(query.page.as_deref(), names::DEFAULT_PAGE);
    let page_size = utils::positive_or(
        query.page_size.as_deref(),
        names::DEFAULT_LESSONS_PAGE_SIZE,
    );

    let all = lessons::list_lessons(&state.bank, subject);
    let paged = sampler::paginate(all, page, page_size);
    tracing::debug!(
        "lessons subject={subject:?} page={page}: {} of {}",
        paged.items.len(),
        paged.total
    );

    Json(LessonsPage {
        lessons: paged.items,
        total_lessons: paged.total,
        page: paged.page,
        page_size: paged.page_size,
        total_pages: paged.total_pages,
    })
}
