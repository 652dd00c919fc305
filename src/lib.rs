//! AskWhy - Question answering over past conversations, plus a transcript timeline browser
//!
//! This library provides:
//!
//! - A persisted question/answer log ([`ConversationStore`]) behind a key-value slot
//! - The ask workflow ([`ConversationSession`]) against an injected [`AnswerService`]
//! - Splitting replies into plain text and `<context>` recalled segments
//! - Month/week facets and filtering for recorded transcripts ([`TimelineFilterEngine`])
//!
//! # Example
//!
//! ```no_run
//! use askwhy::{TimelineFilterEngine, load_transcript};
//! use std::path::Path;
//!
//! let transcript = load_transcript(Path::new("visits.jsonl"))?;
//! let mut engine = TimelineFilterEngine::new(transcript);
//! engine.set_month("January");
//! engine.set_search("cholesterol");
//! println!("{} matching entries", engine.filtered().len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod conversation;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use conversation::{
    AnswerResponse, AnswerService, AskOutcome, ConversationSession, ConversationStore,
    HttpAnswerService, ServiceError,
};
pub use filters::{FilterState, TimelineFilterEngine};
pub use models::{Message, Role, Segment, SegmentKind, TranscriptEntry};
pub use parsers::{load_transcript, parse_segments};
pub use storage::{FileSlot, KeyValueSlot, MemorySlot};
