use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use super::service::AnswerService;
use super::store::ConversationStore;
use crate::models::Message;

/// Reply text used when the service answers without an answer
pub const NO_ANSWER_TEXT: &str = "No answer found.";
/// Reply text appended when the exchange with the service fails
pub const ERROR_ANSWER_TEXT: &str = "⚠️ Error fetching answer.";

/// What a call to [`ConversationSession::ask`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskOutcome {
    /// Blank question: nothing appended, service not called
    Ignored,
    /// The service replied; its answer was appended
    Answered,
    /// The exchange failed; the error reply was appended
    Failed,
}

/// Question/answer workflow over a [`ConversationStore`] and an [`AnswerService`]
///
/// `ask` takes `&self`, so several asks can be in flight at once. The store lock is never
/// held across the service call: each ask appends its question before awaiting and its
/// reply after, and replies from overlapping asks land in the order they resolve.
pub struct ConversationSession<A> {
    store: Mutex<ConversationStore>,
    service: A,
    in_flight: AtomicUsize,
}

/// Decrements the in-flight counter when the ask finishes, however it finishes
struct PendingGuard<'a>(&'a AtomicUsize);

impl<'a> PendingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<A: AnswerService> ConversationSession<A> {
    pub fn new(store: ConversationStore, service: A) -> Self {
        Self { store: Mutex::new(store), service, in_flight: AtomicUsize::new(0) }
    }

    fn store(&self) -> MutexGuard<'_, ConversationStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ask a question and record the exchange
    ///
    /// Blank questions are ignored. Otherwise the question is appended, the service is
    /// called, and exactly one assistant reply is appended: the answer (or
    /// [`NO_ANSWER_TEXT`]) with its context items on success, [`ERROR_ANSWER_TEXT`] on any
    /// failure. Failures are never returned to the caller.
    pub async fn ask(&self, question: &str) -> AskOutcome {
        if question.trim().is_empty() {
            return AskOutcome::Ignored;
        }

        let _pending = PendingGuard::enter(&self.in_flight);
        self.store().append(Message::user(question));
        info!(chars = question.chars().count(), "Question sent");

        match self.service.ask(question).await {
            Ok(response) => {
                let answer = response
                    .answer
                    .filter(|answer| !answer.trim().is_empty())
                    .unwrap_or_else(|| NO_ANSWER_TEXT.to_string());
                let context_items = response.context_items.unwrap_or_default();
                info!(context_items = context_items.len(), "Answer received");

                self.store().append(Message::assistant(answer, context_items));
                AskOutcome::Answered
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch answer");
                self.store().append(Message::assistant(ERROR_ANSWER_TEXT, Vec::new()));
                AskOutcome::Failed
            }
        }
    }

    /// True while at least one ask is waiting on the service
    pub fn is_pending(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Snapshot of the conversation log
    pub fn messages(&self) -> Vec<Message> {
        self.store().messages().to_vec()
    }

    /// Clear the conversation and its saved copy
    pub fn reset(&self) {
        self.store().clear();
    }

    pub fn service(&self) -> &A {
        &self.service
    }
}
