// Question bank - the read-only lesson index every request reads from

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Question, Questions};

mod loader;
mod pool;
mod source;

pub use loader::load_dir;
pub use pool::{Pool, PoolError};
pub use source::{LeafPayload, SourceNode};

#[derive(Debug, Clone, PartialEq)]
pub struct LessonRecord {
    pub key: String,
    pub title: String,
    pub questions: Questions,
}

impl LessonRecord {
    fn empty(key: String) -> Self {
        Self {
            title: key.clone(),
            key,
            questions: Vec::new(),
        }
    }

    /// Decode a leaf payload. Anything that is neither a question list nor a
    /// `{title?, questions}` object yields an empty lesson. Questions are
    /// decoded one by one; a malformed one is skipped, not the whole lesson.
    fn from_payload(key: String, payload: &LeafPayload) -> Self {
        let value = match payload {
            Ok(value) => value,
            Err(reason) => {
                tracing::warn!("failed to parse lesson {key}: {reason}");
                return Self::empty(key);
            }
        };

        let (title, items) = match value {
            Value::Array(_) => (None, value),
            Value::Object(fields) => match fields.get("questions") {
                Some(items @ Value::Array(_)) => {
                    let title = fields
                        .get("title")
                        .and_then(Value::as_str)
                        .filter(|title| !title.is_empty())
                        .map(str::to_owned);
                    (title, items)
                }
                _ => return Self::empty(key),
            },
            _ => return Self::empty(key),
        };

        let questions = items
            .as_array()
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(idx, item)| match Question::deserialize(item) {
                Ok(question) => Some(question),
                Err(e) => {
                    tracing::warn!("skipping question {idx} of lesson {key}: {e}");
                    None
                }
            })
            .collect();

        Self {
            title: title.unwrap_or_else(|| key.clone()),
            key,
            questions,
        }
    }
}

/// Flat index from lesson key to lesson, in first-insertion order.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Default)]
pub struct QuestionBank {
    lessons: Vec<LessonRecord>,
    positions: HashMap<String, usize>,
}

impl QuestionBank {
    /// Flatten a source tree. A leaf under group `subject` is keyed
    /// `subject-leaf`, a leaf at the root just `leaf`. When two leaves flatten
    /// to the same key the later one replaces the earlier in place.
    pub fn build(root: &SourceNode) -> Self {
        let mut bank = Self::default();
        root.visit_leaves(|subject, name, payload| {
            let key = match subject {
                Some(subject) => format!("{subject}-{name}"),
                None => name.to_owned(),
            };
            bank.insert(LessonRecord::from_payload(key, payload));
        });
        bank
    }

    fn insert(&mut self, record: LessonRecord) {
        match self.positions.get(&record.key) {
            Some(&idx) => {
                tracing::debug!("lesson {} overwritten by a later source", record.key);
                self.lessons[idx] = record;
            }
            None => {
                self.positions.insert(record.key.clone(), self.lessons.len());
                self.lessons.push(record);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&LessonRecord> {
        self.positions.get(key).map(|&idx| &self.lessons[idx])
    }

    /// Every lesson in index order.
    pub fn lessons(&self) -> impl Iterator<Item = &LessonRecord> {
        self.lessons.iter()
    }

    /// Lessons whose key starts with `subject-`.
    pub fn subject_lessons<'a>(
        &'a self,
        subject: &str,
    ) -> impl Iterator<Item = &'a LessonRecord> + 'a {
        let prefix = format!("{subject}-");
        self.lessons
            .iter()
            .filter(move |lesson| lesson.key.starts_with(&prefix))
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn question_count(&self) -> usize {
        self.lessons.iter().map(|lesson| lesson.questions.len()).sum()
    }
}

impl FromIterator<LessonRecord> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = LessonRecord>>(iter: I) -> Self {
        let mut bank = Self::default();
        for record in iter {
            bank.insert(record);
        }
        bank
    }
}
