//! The assistant widget's conversation state and request lifecycle.

pub mod controller;
pub mod conversation;
pub mod service;

pub use controller::{
    AssistantController, ConversationSnapshot, ControllerConfig, Rejection, SendOutcome,
    FALLBACK_MESSAGE, QUICK_REPLIES,
};
pub use conversation::{ConversationStore, Message, MessageId, Sender, GREETING};
pub use service::{AnswerService, AssistantError};
