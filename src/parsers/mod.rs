//! Parsers for reply text and transcript files
//!
//! # Error Handling Strategy
//!
//! - **Reply segmentation** ([`parse_segments`]) is total: malformed or dangling context
//!   markers degrade to plain text and never produce an error.
//!
//! - **Transcript loading** ([`load_transcript`]) follows a graceful degradation approach:
//!   malformed records are logged via `tracing` and skipped, while catastrophic corruption
//!   (>50% of records failing, or >100 consecutive failures) is reported as an error.
//!
//! - **Error propagation**: file plumbing uses `anyhow::Result` with context, since callers
//!   report these errors rather than match on them.

pub mod deserializers;
pub mod segments;
pub mod transcript;

pub use segments::{CONTEXT_CLOSE, CONTEXT_OPEN, parse_segments, render_segments};
pub use transcript::{load_transcript, parse_transcript_str};
