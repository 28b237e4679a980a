//! Keyword classifier for the FAQ responder.
//!
//! Maps free-text user input to exactly one canned response: a greeting
//! short-circuit for short pleasantries, then a first-match-wins substring
//! search over the knowledge base, then a fixed fallback. Pure and
//! deterministic; no network, no state.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::knowledge::KnowledgeBase;

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// The greeting short-circuit fired.
    Greeting,
    /// A knowledge entry matched.
    Knowledge,
    /// No entry matched; the generic fallback was returned.
    Fallback,
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReplyKind::Greeting => "greeting",
            ReplyKind::Knowledge => "knowledge",
            ReplyKind::Fallback => "fallback",
        };
        write!(f, "{}", label)
    }
}

/// Result of classifying one user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Which rule fired.
    pub kind: ReplyKind,
    /// The canned response text (may contain `**bold**` markup).
    pub text: String,
    /// The keyword that selected the entry, when `kind` is `Knowledge`.
    pub matched_keyword: Option<String>,
}

/// Stateless classifier over a fixed [`KnowledgeBase`].
///
/// The knowledge base is passed in explicitly at construction; there is no
/// process-wide singleton. Classification is a pure function of the input
/// text and the base.
pub struct Classifier {
    knowledge: KnowledgeBase,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(KnowledgeBase::default())
    }
}

impl Classifier {
    /// Creates a classifier over the given knowledge base.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Returns the underlying knowledge base.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Classifies user input into exactly one canned reply.
    ///
    /// Normalization is trim + lowercase. Rules, in order:
    ///
    /// 1. Greeting: the normalized text starts with a greeting prefix and is
    ///    shorter than the configured threshold. Takes priority even when
    ///    the text also contains a knowledge keyword.
    /// 2. Knowledge: entries are scanned in declaration order; the first
    ///    entry with any keyword contained in the normalized text wins.
    ///    Matching is literal substring containment, so e.g. `price` inside
    ///    `pricey` matches too.
    /// 3. Fallback otherwise.
    ///
    /// Total and deterministic: never fails, and empty or whitespace-only
    /// input resolves to the fallback. Callers that want to reject blank
    /// input do so before classifying (see [`crate::session::ChatSession`]).
    pub fn classify(&self, text: &str) -> Reply {
        let normalized = text.trim().to_lowercase();

        if normalized.chars().count() < self.knowledge.greeting_max_len
            && self
                .knowledge
                .greeting_prefixes
                .iter()
                .any(|p| normalized.starts_with(p.as_str()))
        {
            debug!(input_len = normalized.len(), "Greeting rule fired");
            return Reply {
                kind: ReplyKind::Greeting,
                text: self.knowledge.greeting.clone(),
                matched_keyword: None,
            };
        }

        for entry in &self.knowledge.entries {
            if let Some(keyword) = entry
                .keywords
                .iter()
                .find(|kw| normalized.contains(kw.as_str()))
            {
                debug!(keyword = %keyword, "Knowledge entry matched");
                return Reply {
                    kind: ReplyKind::Knowledge,
                    text: entry.response.clone(),
                    matched_keyword: Some(keyword.clone()),
                };
            }
        }

        debug!("No entry matched, returning fallback");
        Reply {
            kind: ReplyKind::Fallback,
            text: self.knowledge.fallback.clone(),
            matched_keyword: None,
        }
    }
}
