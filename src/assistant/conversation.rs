use serde::{Deserialize, Serialize};

/// Greeting seeded into every freshly mounted conversation.
pub const GREETING: &str = "Hello! I'm the Sai Motors assistant. How can I help you today with our car models, services, or policies?";

/// Literal two-character line-break marker the answering service may embed.
const LINE_BREAK_MARKER: &str = "\\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
}

impl Message {
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Display lines of the message, split on the literal `\n` marker
    /// as well as on real newlines.
    pub fn lines(&self) -> Vec<&str> {
        self.text
            .split(LINE_BREAK_MARKER)
            .flat_map(|chunk| chunk.split('\n'))
            .collect()
    }
}

/// Transcript and draft input of one mounted widget.
///
/// Messages are only added through [`ConversationStore::append_message`]
/// (and the controller's reply path); once appended they are never changed
/// or reordered.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    transcript: Vec<Message>,
    draft: String,
    next_id: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        let mut store = Self {
            transcript: Vec::new(),
            draft: String::new(),
            next_id: 0,
        };
        store.append_message(Sender::Assistant, GREETING);
        store
    }

    /// Appends a message and returns a copy of it, or `None` if `text` is
    /// blank.
    pub fn append_message(&mut self, sender: Sender, text: &str) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(sender, text))
    }

    /// Appends an assistant reply, substituting `fallback` when `text` is
    /// blank, so a reply is always recorded.
    pub(crate) fn append_reply(&mut self, text: &str, fallback: &str) -> Message {
        let text = if text.trim().is_empty() { fallback } else { text };
        self.push(Sender::Assistant, text)
    }

    fn push(&mut self, sender: Sender, text: &str) -> Message {
        let message = Message {
            id: MessageId(self.next_id),
            text: text.to_string(),
            sender,
        };
        self.next_id += 1;
        self.transcript.push(message.clone());
        message
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.set_draft("");
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn last(&self) -> Option<&Message> {
        self.transcript.last()
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_single_greeting() {
        let store = ConversationStore::new();
        assert_eq!(store.len(), 1);
        let greeting = &store.transcript()[0];
        assert_eq!(greeting.sender(), Sender::Assistant);
        assert_eq!(greeting.text(), GREETING);
        assert_eq!(store.draft(), "");
    }

    #[test]
    fn blank_text_is_not_appended() {
        let mut store = ConversationStore::new();
        assert!(store.append_message(Sender::User, "").is_none());
        assert!(store.append_message(Sender::User, "  \t\n ").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_follow_append_order() {
        let mut store = ConversationStore::new();
        let first = store.append_message(Sender::User, "hi").unwrap();
        let second = store.append_message(Sender::Assistant, "hello").unwrap();
        assert!(first.id() < second.id());
        assert_eq!(store.transcript()[0].id(), MessageId(0));
        assert_eq!(store.last(), Some(&second));
    }

    #[test]
    fn blank_reply_is_replaced_by_fallback() {
        let mut store = ConversationStore::new();
        let reply = store.append_reply("  \n ", "Try again later.");
        assert_eq!(reply.sender(), Sender::Assistant);
        assert_eq!(reply.text(), "Try again later.");

        let reply = store.append_reply("Open 9 to 7.", "Try again later.");
        assert_eq!(reply.text(), "Open 9 to 7.");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn text_is_kept_verbatim() {
        let mut store = ConversationStore::new();
        let message = store.append_message(Sender::User, "  spaced  ").unwrap();
        assert_eq!(message.text(), "  spaced  ");
    }

    #[test]
    fn draft_is_replaced_and_cleared() {
        let mut store = ConversationStore::new();
        store.set_draft("Where are you located?");
        assert_eq!(store.draft(), "Where are you located?");
        store.set_draft("   ");
        assert_eq!(store.draft(), "   ");
        store.clear_draft();
        assert_eq!(store.draft(), "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lines_split_on_markers() {
        let mut store = ConversationStore::new();
        let message = store
            .append_message(Sender::Assistant, "Mon-Sat: 9am-7pm\\nSunday: closed\nCall us")
            .unwrap();
        assert_eq!(
            message.lines(),
            vec!["Mon-Sat: 9am-7pm", "Sunday: closed", "Call us"]
        );
    }
}
