//! Session transcript: the ordered, append-only chat history.
//!
//! Insertion order is significant (hosts render top to bottom) and growth is
//! unbounded within a session. Nothing is persisted; the transcript dies
//! with the session.

use crate::error::AppError;
use crate::models::{Message, Role};

/// Ordered, append-only list of the messages exchanged in one session.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user message.
    ///
    /// The text is trimmed before storage. Blank input is rejected with
    /// [`AppError::EmptyInput`] and produces no turn.
    pub fn push_user(&mut self, text: &str) -> Result<&Message, AppError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyInput);
        }
        self.messages.push(Message::user(trimmed));
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Appends an assistant message. Invoked only as the reaction to a user
    /// message, after classification.
    pub fn push_assistant(&mut self, text: &str) -> &Message {
        self.messages.push(Message::assistant(text));
        &self.messages[self.messages.len() - 1]
    }

    /// True only before the first user message; governs whether the host
    /// shows the quick-start prompt chips.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages in the transcript.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the last message is a user turn still waiting for its reply.
    pub fn awaiting_reply(&self) -> bool {
        matches!(self.messages.last(), Some(m) if m.role == Role::User)
    }

    /// The messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(!transcript.awaiting_reply());
    }

    #[test]
    fn test_push_user_trims_and_stores() {
        let mut transcript = Transcript::new();
        let msg = transcript.push_user("  hello  ").unwrap();
        assert_eq!(msg.content, "hello");
        assert_eq!(msg.role, Role::User);
        assert!(transcript.awaiting_reply());
    }

    #[test]
    fn test_push_user_rejects_blank() {
        let mut transcript = Transcript::new();
        assert!(matches!(transcript.push_user(""), Err(AppError::EmptyInput)));
        assert!(matches!(
            transcript.push_user("   \t"),
            Err(AppError::EmptyInput)
        ));
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_alternation() {
        let mut transcript = Transcript::new();
        transcript.push_user("first").unwrap();
        transcript.push_assistant("reply one");
        transcript.push_user("second").unwrap();
        transcript.push_assistant("reply two");

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert!(!transcript.awaiting_reply());
    }
}
