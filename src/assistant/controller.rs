use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::assistant::conversation::{ConversationStore, Message, Sender};
use crate::assistant::service::{AnswerService, AssistantError};

/// Shown in place of an answer whenever the answering service fails.
pub const FALLBACK_MESSAGE: &str = "Sorry, I'm having trouble connecting. Please try again later.";

/// Suggested first questions, offered until the user's first turn.
pub const QUICK_REPLIES: [&str; 4] = [
    "What are your opening hours?",
    "Tell me about the City Sedan X1.",
    "How do I book a service?",
    "Where are you located?",
];

#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    /// Upper bound on a single service call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Answered(Message),
    FellBack(Message),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationSnapshot {
    pub transcript: Vec<Message>,
    pub draft: String,
    pub pending: bool,
}

#[derive(Debug)]
struct ControllerState {
    store: ConversationStore,
    pending: bool,
}

/// Drives request/response cycles for one mounted widget.
///
/// `send` takes `&self`, so a caller can issue another `send` while a
/// request is suspended on the service; the `pending` flag turns that
/// second call into a no-op.
pub struct AssistantController {
    service: Arc<dyn AnswerService>,
    state: Mutex<ControllerState>,
    config: ControllerConfig,
}

impl AssistantController {
    pub fn new(service: Arc<dyn AnswerService>) -> Self {
        Self::with_config(service, ControllerConfig::default())
    }

    pub fn with_config(service: Arc<dyn AnswerService>, config: ControllerConfig) -> Self {
        Self {
            service,
            state: Mutex::new(ControllerState {
                store: ConversationStore::new(),
                pending: false,
            }),
            config,
        }
    }

    /// Runs one cycle for `text`. Never fails: service errors become the
    /// fallback message.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let query = text.trim();

        {
            let mut state = self.state();
            if query.is_empty() {
                debug!("Ignoring empty submission");
                return SendOutcome::Rejected(Rejection::Empty);
            }
            if state.pending {
                debug!("Ignoring submission while a request is in flight");
                return SendOutcome::Rejected(Rejection::Busy);
            }
            state.store.append_message(Sender::User, text);
            state.store.clear_draft();
            state.pending = true;
        }

        let mut cycle = Cycle {
            state: &self.state,
            settled: false,
        };

        info!("Asking assistant: {}", query);
        match self.ask(query).await {
            Ok(answer) if !answer.trim().is_empty() => {
                debug!("Assistant answered with {} characters", answer.len());
                SendOutcome::Answered(cycle.settle(&answer))
            }
            Ok(_) => {
                warn!("Assistant returned a blank answer");
                SendOutcome::FellBack(cycle.settle(FALLBACK_MESSAGE))
            }
            Err(e) => {
                error!("Assistant error: {}", e);
                SendOutcome::FellBack(cycle.settle(FALLBACK_MESSAGE))
            }
        }
    }

    pub async fn send_draft(&self) -> SendOutcome {
        let draft = self.draft();
        self.send(&draft).await
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.state().store.set_draft(text);
    }

    pub fn draft(&self) -> String {
        self.state().store.draft().to_string()
    }

    pub fn is_pending(&self) -> bool {
        self.state().pending
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.state().store.transcript().to_vec()
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        let state = self.state();
        ConversationSnapshot {
            transcript: state.store.transcript().to_vec(),
            draft: state.store.draft().to_string(),
            pending: state.pending,
        }
    }

    /// Quick replies on offer: all of them before the first user turn,
    /// none afterwards.
    pub fn quick_replies(&self) -> &'static [&'static str] {
        if self.state().store.len() <= 1 {
            &QUICK_REPLIES
        } else {
            &[]
        }
    }

    /// Copies the chosen quick reply into the draft. Does not send.
    pub fn select_quick_reply(&self, index: usize) -> bool {
        match self.quick_replies().get(index) {
            Some(question) => {
                self.set_draft(*question);
                true
            }
            None => false,
        }
    }

    async fn ask(&self, query: &str) -> Result<String, AssistantError> {
        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.service.ask(query))
                .await
                .map_err(|_| AssistantError::Timeout(limit))?,
            None => self.service.ask(query).await,
        }
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Closes out an accepted cycle. If the `send` future is dropped before the
/// service resolves, the fallback is appended on drop.
struct Cycle<'a> {
    state: &'a Mutex<ControllerState>,
    settled: bool,
}

impl Cycle<'_> {
    fn settle(&mut self, reply: &str) -> Message {
        self.settled = true;
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let message = state.store.append_reply(reply, FALLBACK_MESSAGE);
        state.pending = false;
        message
    }
}

impl Drop for Cycle<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Assistant request abandoned before it resolved");
            self.settle(FALLBACK_MESSAGE);
        }
    }
}
