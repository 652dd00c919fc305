use tracing::{debug, warn};

use crate::models::Message;
use crate::storage::KeyValueSlot;

/// Slot key holding the serialized conversation log
pub const CONVERSATION_KEY: &str = "askwhy.conversation";

/// Owner of the ordered message log and its persisted mirror
///
/// Every append rewrites the whole log into the slot. Persistence problems never reach
/// the caller: an unreadable or corrupt slot loads as an empty log, and a failed write
/// leaves the in-memory log updated.
pub struct ConversationStore {
    slot: Box<dyn KeyValueSlot>,
    messages: Vec<Message>,
}

impl ConversationStore {
    /// Create a store with an empty in-memory log (the slot is not read)
    pub fn new(slot: impl KeyValueSlot + 'static) -> Self {
        Self { slot: Box::new(slot), messages: Vec::new() }
    }

    /// Create a store and restore the log from the slot
    pub fn open(slot: impl KeyValueSlot + 'static) -> Self {
        let mut store = Self::new(slot);
        store.load();
        store
    }

    /// Restore the log from the slot, replacing the in-memory log
    pub fn load(&mut self) -> &[Message] {
        self.messages = self.read_persisted();
        &self.messages
    }

    fn read_persisted(&self) -> Vec<Message> {
        let raw = match self.slot.get(CONVERSATION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read saved conversation, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Message>>(&raw) {
            Ok(messages) => {
                debug!(count = messages.len(), "Restored conversation");
                messages
            }
            Err(e) => {
                warn!(error = %e, "Saved conversation is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Append a message and mirror the whole log to the slot
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.persist();
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.messages) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(error = %e, "Failed to serialize conversation");
                return;
            }
        };

        if let Err(e) = self.slot.set(CONVERSATION_KEY, &serialized) {
            warn!(error = %e, count = self.messages.len(), "Failed to save conversation");
        }
    }

    /// Empty the log and remove the slot entry entirely
    pub fn clear(&mut self) {
        self.messages.clear();
        if let Err(e) = self.slot.remove(CONVERSATION_KEY) {
            warn!(error = %e, "Failed to remove saved conversation");
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl std::fmt::Debug for ConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationStore")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}
