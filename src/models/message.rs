use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    /// Older saved logs used "ai" for replies
    #[serde(alias = "ai")]
    Assistant,
}

/// One entry of the conversation log
///
/// Messages are never mutated after they are appended; their identity is their position
/// in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(default)]
    pub context_items: Vec<String>,
    /// Older saved logs have no timestamp; those load stamped with the load time
    #[serde(
        default = "Utc::now",
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            context_items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>, context_items: Vec<String>) -> Self {
        Self { role: Role::Assistant, text: text.into(), context_items, created_at: Utc::now() }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
