//! In-memory chat thread shown in the message centre.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub direction: Direction,
    pub time: String,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, direction: Direction, time: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            direction,
            time: time.into(),
        }
    }

    /// Class list of the message bubble, e.g. `message sent`.
    pub fn css_class(&self) -> String {
        format!("message {}", self.direction.as_str())
    }
}

/// Messages of the currently open conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
}

impl ChatThread {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Replace the thread with the conversation's last received message.
    pub fn open(&mut self, snippet: &str, time: &str) {
        self.messages.clear();
        self.messages
            .push(ChatMessage::new(snippet.trim(), Direction::Received, time.trim()));
    }

    /// Append a sent message. Blank input is ignored and returns `None`.
    pub fn send(&mut self, input: &str, time: &str) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages
            .push(ChatMessage::new(text, Direction::Sent, time));
        self.messages.last()
    }
}

/// Whether a conversation of `kind` is listed under the tab `filter`.
pub fn conversation_listed(filter: &str, kind: &str) -> bool {
    filter == "all" || filter == kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_resets_thread() {
        let mut thread = ChatThread::default();
        thread.send("hello", "09:00 AM");
        thread.open("  See you at 3  ", "10:15 AM");
        assert_eq!(thread.messages().len(), 1);
        let first = &thread.messages()[0];
        assert_eq!(first.text, "See you at 3");
        assert_eq!(first.direction, Direction::Received);
        assert_eq!(first.css_class(), "message received");
    }

    #[test]
    fn test_send_trims_and_skips_blank() {
        let mut thread = ChatThread::default();
        assert!(thread.send("   ", "09:00 AM").is_none());
        let sent = thread.send("  Payroll is ready ", "09:01 AM").unwrap();
        assert_eq!(sent.text, "Payroll is ready");
        assert_eq!(sent.direction, Direction::Sent);
        assert_eq!(thread.messages().len(), 1);
    }

    #[test]
    fn test_conversation_listed() {
        assert!(conversation_listed("all", "team"));
        assert!(conversation_listed("team", "team"));
        assert!(!conversation_listed("direct", "team"));
    }
}
