#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mcq_bank::{
    bank::{QuestionBank, SourceNode},
    router, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn question(lesson: &str, n: usize) -> Value {
    json!({
        "question": format!("{lesson} question {n}"),
        "options": ["A", "B", "C", "D"],
        "answerIndex": n % 4,
        "lesson": lesson,
    })
}

pub fn questions(lesson: &str, n: usize) -> Value {
    Value::Array((0..n).map(|i| question(lesson, i)).collect())
}

/// Bank with `pharm` pharmacology and `path` pathology questions spread over
/// three lessons each, plus one ungrouped lesson.
pub fn sample_bank(pharm: usize, path: usize) -> QuestionBank {
    let split = |subject: &str, total: usize| {
        let names = ["lesson1", "lesson2", "lesson10"];
        let per = total / names.len();
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let n = if i == names.len() - 1 {
                    total - per * (names.len() - 1)
                } else {
                    per
                };
                SourceNode::leaf(*name, questions(&format!("{subject}-{name}"), n))
            })
            .collect::<Vec<_>>()
    };

    let tree = SourceNode::group(
        "mcqs",
        vec![
            SourceNode::group("pharmacology", split("pharmacology", pharm)),
            SourceNode::group("pathology", split("pathology", path)),
            SourceNode::leaf(
                "intro",
                json!({ "title": "Introduction", "questions": questions("intro", 2) }),
            ),
        ],
    );
    QuestionBank::build(&tree)
}

pub fn app(bank: QuestionBank) -> Router {
    let mut state = AppState::new(bank);
    state.shuffle_seed = Some(7);
    router(state)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Fresh empty directory under the system temp dir.
pub fn temp_dir(label: &str) -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "mcq_bank_{label}_{}_{}",
        std::process::id(),
        id
    ));
    // Clean up leftovers from previous runs
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).expect("failed to create temp dir");
    path
}
