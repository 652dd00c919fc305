use serde::{Deserialize, Serialize};

/// Which side of the timeline a transcript message is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// One message of a pre-recorded transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub sender: String,
    #[serde(alias = "content")]
    pub text: String,
    #[serde(
        rename = "timestampMs",
        alias = "timestamp",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_millis"
    )]
    pub timestamp_ms: Option<i64>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_side")]
    pub side: Side,
}

/// Month and week facets derived from a transcript timestamp
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facets {
    pub month: String,
    pub week: String,
}

/// Transcript entry with its facets computed once at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub entry: TranscriptEntry,
    pub facets: Facets,
}
