//! Chat session: ties the classifier, transcript and reply timing together.
//!
//! Each session owns its transcript exclusively; there is no shared state
//! across sessions and nothing survives the session. The assistant reply is
//! appended after a short fixed delay to simulate "thinking"; the
//! classification itself is synchronous. The pending reply is a single-shot
//! timer tied to the session lifetime: dropping the session aborts it, so a
//! teardown during the delay window never applies a stale update.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Message;
use crate::responder::{Classifier, Reply};
use crate::transcript::Transcript;

/// Default delay before the assistant reply is appended.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(400);

/// Locks the transcript, recovering from a poisoned lock. The transcript is
/// append-only, so a panic mid-append cannot leave it half-written.
fn lock(transcript: &Mutex<Transcript>) -> MutexGuard<'_, Transcript> {
    transcript
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One interactive chat session.
///
/// The session accepts one outstanding user message at a time: submitting
/// while a reply is pending returns [`AppError::ReplyPending`], and hosts
/// disable their send control (or retry after [`ChatSession::settled`]).
///
/// Must be used from within a tokio runtime; the delayed reply is scheduled
/// with `tokio::spawn`.
pub struct ChatSession {
    id: Uuid,
    transcript: Arc<Mutex<Transcript>>,
    classifier: Arc<Classifier>,
    reply_delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Arc::new(Classifier::default()))
    }
}

impl ChatSession {
    /// Creates a session over the given classifier with the default reply delay.
    pub fn new(classifier: Arc<Classifier>) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, "Chat session created");
        Self {
            id,
            transcript: Arc::new(Mutex::new(Transcript::new())),
            classifier,
            reply_delay: DEFAULT_REPLY_DELAY,
            pending: None,
        }
    }

    /// Overrides the reply delay. Zero is allowed (the reply is still
    /// appended from the scheduled task, not inline).
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// The session's unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Submits a user message.
    ///
    /// Classifies the input synchronously, appends the user message, and
    /// schedules the assistant reply to be appended after the configured
    /// delay. Returns the classification result immediately.
    ///
    /// # Errors
    ///
    /// * [`AppError::EmptyInput`] for blank input; no turn is produced.
    /// * [`AppError::ReplyPending`] if the previous reply has not landed yet.
    #[instrument(skip(self, text), fields(session_id = %self.id))]
    pub fn submit(&mut self, text: &str) -> Result<Reply, AppError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyInput);
        }
        if self.pending.as_ref().is_some_and(|h| !h.is_finished()) {
            return Err(AppError::ReplyPending);
        }

        let reply = self.classifier.classify(trimmed);
        lock(&self.transcript).push_user(trimmed)?;
        debug!(kind = %reply.kind, matched = ?reply.matched_keyword, "User message classified");

        let transcript = Arc::clone(&self.transcript);
        let delay = self.reply_delay;
        let content = reply.text.clone();
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            lock(&transcript).push_assistant(&content);
        }));

        Ok(reply)
    }

    /// Submits one of the quick-start prompts by index, exactly as if the
    /// user had typed and sent it.
    pub fn submit_prompt(&mut self, index: usize) -> Result<Reply, AppError> {
        let prompt = self
            .classifier
            .knowledge()
            .quick_prompts
            .get(index)
            .cloned()
            .ok_or_else(|| {
                AppError::Validation(format!("No quick-start prompt at index {}", index))
            })?;
        self.submit(&prompt)
    }

    /// Waits until the pending assistant reply (if any) has been appended.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    /// True while an assistant reply is scheduled but not yet appended.
    pub fn reply_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Snapshot of the transcript for rendering, in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        lock(&self.transcript).messages().to_vec()
    }

    /// True only before the first user message.
    pub fn is_empty(&self) -> bool {
        lock(&self.transcript).is_empty()
    }

    /// The quick-start prompts the host renders as chips while the
    /// transcript is empty.
    pub fn quick_prompts(&self) -> &[String] {
        &self.classifier.knowledge().quick_prompts
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        // Session teardown during the delay window must not apply a stale
        // update; the single-shot timer dies with the session.
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::responder::ReplyKind;

    #[tokio::test]
    async fn test_submit_appends_alternating_turns() {
        let mut session = ChatSession::default().with_reply_delay(Duration::from_millis(5));

        session.submit("How does pricing work?").unwrap();
        session.settled().await;

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(messages[1].content.contains("**Individual**"));
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_input() {
        let mut session = ChatSession::default();
        assert!(matches!(session.submit("   "), Err(AppError::EmptyInput)));
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let mut session = ChatSession::default().with_reply_delay(Duration::from_secs(5));

        session.submit("hi").unwrap();
        assert!(session.reply_pending());
        assert!(matches!(
            session.submit("hello again"),
            Err(AppError::ReplyPending)
        ));

        // Only the first user message made it in
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_reply() {
        let session_transcript;
        {
            let mut session = ChatSession::default().with_reply_delay(Duration::from_secs(60));
            session.submit("hi").unwrap();
            session_transcript = Arc::clone(&session.transcript);
        }
        // The session is gone; give the aborted task a chance to run if it
        // was going to.
        sleep(Duration::from_millis(20)).await;
        assert_eq!(lock(&session_transcript).len(), 1);
    }

    #[tokio::test]
    async fn test_quick_prompt_submission() {
        let mut session = ChatSession::default().with_reply_delay(Duration::ZERO);

        assert!(session.is_empty());
        let prompts = session.quick_prompts().to_vec();
        assert_eq!(prompts.len(), 6);

        let reply = session.submit_prompt(3).unwrap();
        assert_eq!(reply.kind, ReplyKind::Knowledge);
        session.settled().await;

        assert!(!session.is_empty());
        assert_eq!(session.messages()[0].content, prompts[3]);
    }

    #[tokio::test]
    async fn test_out_of_range_prompt_index() {
        let mut session = ChatSession::default();
        assert!(matches!(
            session.submit_prompt(99),
            Err(AppError::Validation(_))
        ));
    }
}
