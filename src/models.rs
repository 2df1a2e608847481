use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Questions = Vec<Question>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    #[serde(deserialize_with = "deserialize_index")]
    pub answer_index: usize,
    #[serde(default)]
    pub lesson: String,
    /// Fields the server does not use (explanations, references...), passed
    /// through to clients untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    pub fn new(question: impl Into<String>, options: Vec<String>, answer_index: usize) -> Self {
        Self {
            question: question.into(),
            options,
            answer_index,
            lesson: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_lesson(mut self, lesson: impl Into<String>) -> Self {
        self.lesson = lesson.into();
        self
    }
}

/// Accept the answer index as a JSON number or a numeric string.
/// Hand-written lesson files use both.
fn deserialize_index<'de, D: serde::Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = usize;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("non-negative number or numeric string")
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<usize, E> {
            usize::try_from(v).map_err(E::custom)
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<usize, E> {
            usize::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<usize, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}
