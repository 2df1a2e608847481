use serde_json::Value;

/// Payload of a leaf: the decoded JSON document, or why it could not be read.
pub type LeafPayload = Result<Value, String>;

/// Hierarchical question source handed to [`QuestionBank::build`](super::QuestionBank::build).
///
/// Groups map to directories and leaves to lesson files, but nothing here
/// depends on a filesystem; tests build trees directly.
#[derive(Debug, Clone)]
pub enum SourceNode {
    Group {
        name: String,
        children: Vec<SourceNode>,
    },
    Leaf {
        name: String,
        payload: LeafPayload,
    },
}

impl SourceNode {
    pub fn group(name: impl Into<String>, children: Vec<SourceNode>) -> Self {
        Self::Group {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>, value: Value) -> Self {
        Self::Leaf {
            name: name.into(),
            payload: Ok(value),
        }
    }

    pub fn unreadable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Leaf {
            name: name.into(),
            payload: Err(reason.into()),
        }
    }

    /// Depth-first walk over every leaf, passing the name of the group that
    /// directly contains it. The node this is called on counts as the root, so
    /// its own name is never reported as a subject.
    pub fn visit_leaves<F>(&self, mut visit: F)
    where
        F: FnMut(Option<&str>, &str, &LeafPayload),
    {
        match self {
            Self::Group { children, .. } => {
                for child in children {
                    child.walk(None, &mut visit);
                }
            }
            Self::Leaf { .. } => self.walk(None, &mut visit),
        }
    }

    fn walk<F>(&self, subject: Option<&str>, visit: &mut F)
    where
        F: FnMut(Option<&str>, &str, &LeafPayload),
    {
        match self {
            Self::Group { name, children } => {
                for child in children {
                    child.walk(Some(name.as_str()), visit);
                }
            }
            Self::Leaf { name, payload } => visit(subject, name, payload),
        }
    }
}
