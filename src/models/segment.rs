use serde::Serialize;

/// Kind of a parsed reply segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Text,
    Context,
}

/// One contiguous piece of a parsed reply
///
/// Segments are produced per render and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub content: String,
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Self { kind: SegmentKind::Text, content: content.into() }
    }

    pub fn context(content: impl Into<String>) -> Self {
        Self { kind: SegmentKind::Context, content: content.into() }
    }

    pub fn is_context(&self) -> bool {
        self.kind == SegmentKind::Context
    }
}
