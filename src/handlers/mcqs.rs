use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    bank::Pool,
    extractors::RequestRng,
    finals::{self, RatioTable},
    models::Question,
    names,
    rejections::AppError,
    sampler, utils, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::MCQS_URL, get(paged_mcqs))
        .route(names::RANDOM_MCQS_URL, get(random_mcqs))
        .route(names::FINALS_URL, get(finals_mcqs))
}

#[derive(Deserialize)]
pub(crate) struct PagedQuery {
    lesson: Option<String>,
    subject: Option<String>,
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
    /// Older clients send `count` instead of `pageSize`.
    count: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RandomQuery {
    subject: Option<String>,
    count: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct FinalsQuery {
    count: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RandomSet<'a> {
    items: Pool<'a>,
    total: usize,
    requested: usize,
    delivered: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FinalsSet<'a> {
    items: Pool<'a>,
    requested: usize,
    delivered: usize,
    ratio: RatioTable,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

async fn paged_mcqs(
    State(state): State<AppState>,
    RequestRng(mut rng): RequestRng,
    Query(query): Query<PagedQuery>,
) -> Result<Response, AppError> {
    let page = utils::positive_or(query.page.as_deref(), names::DEFAULT_PAGE);
    let page_size = match (non_empty(&query.page_size), non_empty(&query.count)) {
        (Some(page_size), _) => utils::positive_or(Some(page_size), names::DEFAULT_PAGE_SIZE),
        (None, Some(count)) => utils::positive_or(Some(count), names::DEFAULT_PAGE_SIZE),
        (None, None) => names::DEFAULT_PAGE_SIZE,
    };

    let pool: Pool<'_> = if let Some(lesson) = non_empty(&query.lesson) {
        state.bank.lesson_pool(lesson)?.iter().collect()
    } else if let Some(subject) = non_empty(&query.subject) {
        state.bank.subject_pool(subject)?
    } else {
        return Err(AppError::Input("Must provide lesson or subject".to_string()));
    };

    let paged = sampler::take_page(&pool, page, page_size, &mut rng);
    tracing::debug!(
        "mcqs lesson={:?} subject={:?} page={page} size={page_size}: {} of {}",
        query.lesson,
        query.subject,
        paged.items.len(),
        paged.total
    );

    Ok(Json(paged).into_response())
}

async fn random_mcqs(
    State(state): State<AppState>,
    RequestRng(mut rng): RequestRng,
    Query(query): Query<RandomQuery>,
) -> Result<Response, AppError> {
    let count = utils::positive_or(query.count.as_deref(), names::DEFAULT_RANDOM_COUNT);
    let subject = query.subject.as_deref();

    let pool: Pool<'_> = match subject {
        Some(names::PHARMACOLOGY) => state.bank.collect_subject(names::PHARMACOLOGY),
        Some(names::PATHOLOGY) => state.bank.collect_subject(names::PATHOLOGY),
        Some(names::BOTH_SUBJECTS) => {
            let mut pool = state.bank.collect_subject(names::PHARMACOLOGY);
            pool.extend(state.bank.collect_subject(names::PATHOLOGY));
            pool
        }
        _ => state.bank.all_questions(),
    };

    if pool.is_empty() {
        return Err(AppError::Input(format!(
            "No questions found for subject {}",
            subject.unwrap_or("all")
        )));
    }

    let items: Vec<&Question> = sampler::take_random(&pool, count, &mut rng);
    tracing::debug!(
        "random mcqs subject={subject:?}: {} of {count} requested",
        items.len()
    );

    Ok(Json(RandomSet {
        total: pool.len(),
        requested: count,
        delivered: items.len(),
        items,
    })
    .into_response())
}

async fn finals_mcqs(
    State(state): State<AppState>,
    RequestRng(mut rng): RequestRng,
    Query(query): Query<FinalsQuery>,
) -> Response {
    let count = utils::positive_or(query.count.as_deref(), names::DEFAULT_FINALS_COUNT);
    let finals = finals::compose(&state.bank, names::FINALS_RATIO, count, &mut rng);
    tracing::debug!(
        "finals: delivered {} of {count} requested",
        finals.delivered()
    );

    Json(FinalsSet {
        requested: finals.requested,
        delivered: finals.delivered(),
        items: finals.items,
        ratio: names::FINALS_RATIO,
    })
    .into_response()
}
