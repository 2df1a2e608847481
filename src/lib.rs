pub mod bank;
pub mod extractors;
pub mod finals;
pub mod handlers;
pub mod lessons;
pub mod models;
pub mod names;
pub mod rejections;
pub mod sampler;
pub mod utils;

use std::sync::Arc;

use axum::{middleware, Router};

use crate::bank::QuestionBank;

#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    /// Fixed seed for every request's shuffles; `None` draws a new one each time.
    pub shuffle_seed: Option<u64>,
}

impl AppState {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
            shuffle_seed: None,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(names::API_BASE, handlers::routes())
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(allow_any_origin))
        .with_state(state)
}

/// Open CORS for a read-only API: every response allows any origin, and
/// preflight `OPTIONS` requests are answered here instead of reaching the
/// GET-only routes.
async fn allow_any_origin(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::{
        http::{
            header::{
                ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
                ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
            },
            HeaderValue, Method, StatusCode,
        },
        response::IntoResponse,
    };

    if req.method() == Method::OPTIONS {
        let allow_headers = req
            .headers()
            .get(ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("*"));
        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        );
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
        return resp;
    }

    let mut resp = next.run(req).await;
    resp.headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    resp
}
