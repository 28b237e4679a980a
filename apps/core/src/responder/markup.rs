//! Bold-markup segmentation for canned responses.
//!
//! Responses embed `**bold**` spans. Hosts render them by splitting on the
//! `**` marker: even-index parts are plain text, odd-index parts are bold.
//! This module reproduces that split so every front end renders the same
//! segments, empty parts removed.

use serde::{Deserialize, Serialize};

/// One rendered span of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Plain text.
    Text(String),
    /// Emphasized text (between `**` markers).
    Bold(String),
}

impl Segment {
    /// Returns the span's text regardless of emphasis.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Bold(s) => s,
        }
    }

    /// True for bold spans.
    pub fn is_bold(&self) -> bool {
        matches!(self, Segment::Bold(_))
    }
}

/// Splits a response into plain and bold segments.
///
/// An unbalanced trailing `**` leaves the rest of the string flagged bold,
/// matching the alternating-split rule rather than attempting repair.
pub fn parse(text: &str) -> Vec<Segment> {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            if i % 2 == 1 {
                Segment::Bold(part.to_string())
            } else {
                Segment::Text(part.to_string())
            }
        })
        .collect()
}
