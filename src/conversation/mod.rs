//! Conversation session engine
//!
//! - [`ConversationStore`] owns the message log and mirrors it into a
//!   [`KeyValueSlot`](crate::storage::KeyValueSlot)
//! - [`ConversationSession`] runs the ask workflow against an [`AnswerService`]
//! - [`HttpAnswerService`] is the production [`AnswerService`]
//!
//! Structured context travels in [`Message::context_items`](crate::models::Message); inline
//! `<context>` markers in reply text are handled at display time by
//! [`parse_segments`](crate::parsers::parse_segments) for replies that predate that field.

pub mod service;
pub mod session;
pub mod store;

pub use service::{AnswerResponse, AnswerService, HttpAnswerService, ServiceError};
pub use session::{AskOutcome, ConversationSession, ERROR_ANSWER_TEXT, NO_ANSWER_TEXT};
pub use store::{CONVERSATION_KEY, ConversationStore};
