//! # Responder Module
//!
//! The rule-based FAQ responder for Revenue Engine AI.
//! Resolves user input to a canned reply without any LLM or network call.
//!
//! ## Components
//! - `knowledge`: ordered keyword knowledge base + fixed strings
//! - `classifier`: greeting / first-match keyword / fallback resolution
//! - `markup`: `**bold**` segment parsing for canned responses

pub mod classifier;
pub mod knowledge;
pub mod markup;

pub use classifier::{Classifier, Reply, ReplyKind};
pub use knowledge::{KnowledgeBase, KnowledgeEntry, DEFAULT_GREETING_MAX_LEN};
pub use markup::Segment;
