//! Data models for conversations and transcripts.
//!
//! - [`Message`] - One entry of the persisted question/answer log
//! - [`Segment`] - A piece of a reply, either plain text or a recalled context block
//! - [`TranscriptEntry`] - A message of a pre-recorded transcript shown on the timeline
//! - [`TimelineEntry`] - A transcript entry enriched with its month/week [`Facets`]
//!
//! Serde attributes keep the persisted and transcript formats camelCase, with custom
//! deserializers for timestamps and sides in [`crate::parsers::deserializers`].

pub mod message;
pub mod segment;
pub mod transcript;

pub use message::{Message, Role};
pub use segment::{Segment, SegmentKind};
pub use transcript::{Facets, Side, TimelineEntry, TranscriptEntry};
