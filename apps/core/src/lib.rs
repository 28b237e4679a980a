//! # Revenue Engine AI Assistant Core
//!
//! The rule-based chat responder behind the Revenue Engine AI FAQ widget.
//! Resolves user input to a canned answer with a keyword knowledge base
//! (no LLM call, no network, no persistence) and manages the per-session
//! transcript and the cosmetic "thinking" delay before each reply.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use revassist_core::ChatSession;
//!
//! let mut session = ChatSession::default();
//! let reply = session.submit("How does pricing work?")?;
//! session.settled().await; // assistant message appended after the delay
//! for message in session.messages() {
//!     println!("{}: {}", message.role.label(), message.content);
//! }
//! ```

pub mod error;
pub mod logging;
pub mod models;
pub mod responder;
pub mod session;
pub mod transcript;

pub use error::AppError;
pub use models::{Message, Role};
pub use responder::{Classifier, KnowledgeBase, KnowledgeEntry, Reply, ReplyKind, Segment};
pub use session::{ChatSession, DEFAULT_REPLY_DELAY};
pub use transcript::Transcript;

#[cfg(test)]
mod tests;
