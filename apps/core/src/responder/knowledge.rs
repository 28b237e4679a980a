//! Keyword knowledge base for the FAQ responder.
//!
//! An ordered list of (keywords -> canned response) rules plus the fixed
//! greeting, fallback and quick-start prompt strings. The order of the
//! entries is significant: the classifier returns the first entry whose
//! keywords match, so earlier entries take priority on overlapping input.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use validator::Validate;

use crate::error::AppError;

/// Default maximum length (in characters) for the greeting short-circuit.
/// Inputs at or above this length go through the keyword search even when
/// they start with a greeting word.
pub const DEFAULT_GREETING_MAX_LEN: usize = 20;

/// A single (keywords -> canned response) rule.
///
/// Keywords are matched as literal lowercase substrings of the normalized
/// user input. Responses may contain `**bold**` markup segments, see
/// [`crate::responder::markup`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KnowledgeEntry {
    /// Lowercase keywords; any one of them matching selects this entry.
    #[validate(length(min = 1))]
    pub keywords: Vec<String>,
    /// The canned response returned when this entry matches.
    #[validate(length(min = 1))]
    pub response: String,
}

impl KnowledgeEntry {
    fn new(keywords: &[&str], response: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.to_string(),
        }
    }
}

/// The static configuration driving the classifier.
///
/// Immutable once constructed. `Default` carries the built-in Revenue Engine
/// AI platform knowledge; a custom base can be loaded from JSON with
/// [`KnowledgeBase::from_json_str`] or [`KnowledgeBase::from_json_file`],
/// where omitted fields fall back to the built-in values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct KnowledgeBase {
    /// Ordered knowledge entries. Declaration order is the tie-break priority.
    #[validate(nested)]
    pub entries: Vec<KnowledgeEntry>,
    /// The fixed response for short greetings.
    #[validate(length(min = 1))]
    pub greeting: String,
    /// Lowercase prefixes that trigger the greeting rule.
    #[validate(length(min = 1))]
    pub greeting_prefixes: Vec<String>,
    /// Character-length threshold below which a greeting prefix short-circuits.
    pub greeting_max_len: usize,
    /// The fixed response when no entry matches.
    #[validate(length(min = 1))]
    pub fallback: String,
    /// Suggested prompts for the host UI to render while the transcript is empty.
    pub quick_prompts: Vec<String>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            entries: vec![
                KnowledgeEntry::new(
                    &["what is", "revenue engine", "platform", "product", "overview"],
                    "Revenue Engine AI is an AI-powered platform built for revenue teams who want predictable, scalable growth. We turn your CRM, marketing, and sales data into a single source of truth—so your team can forecast accurately, prioritize the right deals, and close faster. Unlike generic AI assistants, we're purpose-built for the revenue cycle.",
                ),
                KnowledgeEntry::new(
                    &["who", "for whom", "icp", "ideal customer", "built for", "target"],
                    "Revenue Engine AI is designed for B2B SaaS and technology companies (Series A through enterprise, $2M–$200M ARR). Our ideal users are Revenue Ops leaders, VP Sales, and CROs who own the end-to-end revenue funnel. Teams with 5–200+ sellers who need alignment across marketing, sales, and customer success—and want data-driven decisions instead of gut feeling.",
                ),
                KnowledgeEntry::new(
                    &["pain", "problem", "solve", "blindness", "silo", "manual", "reactive"],
                    "We address four major pain points: **Pipeline blindness**—you can't tell which deals will close or stall until it's too late. **Silos**—marketing, sales, and CS operate in separate systems with fuzzy attribution. **Manual work**—SDRs and AEs spend hours on data entry instead of selling. **Reactive mode**—you find out deals are at risk when they churn. We turn this around with unified intelligence and proactive signals.",
                ),
                KnowledgeEntry::new(
                    &["price", "pricing", "plan", "cost", "trial", "free"],
                    "We offer three tiers: **Individual** ($49/mo or $39/mo yearly) for solo pros and small teams—1 CRM, basic forecasting, up to 500 leads/month. **Team** ($99/mo or $79/mo yearly) is our most popular—up to 3 CRMs, advanced forecasting, 5,000 leads, next-best-action recommendations. **Enterprise** is custom—unlimited connections, SSO, dedicated success manager. All paid plans include a 14-day free trial with no credit card required.",
                ),
                KnowledgeEntry::new(
                    &["result", "roi", "improvement", "forecast", "conversion", "churn"],
                    "Typical outcomes: **20–40%** better forecast accuracy (60–90 days), **10–25%** lift in conversion (90–120 days), **15–30%** reduction in admin tasks (30–60 days), **10–20%** faster time-to-close (90–120 days), **5–15%** fewer preventable churns (90–180 days). For a $10M ARR company, this can translate to $1.5M–$2.5M+ incremental revenue annually—often 10–20x the platform cost in year one.",
                ),
                KnowledgeEntry::new(
                    &["start", "get started", "sign up", "demo", "trial"],
                    "Getting started is easy! Head to our Pricing page to start your free trial—no credit card required. Individual and Team plans include a 14-day trial. You can also request a demo or explore our Case Studies to see how companies like TechFlow and ScaleUp achieved 40%+ forecast improvement. I can help you find the right plan for your team.",
                ),
                KnowledgeEntry::new(
                    &["integrat", "crm", "hubspot", "salesforce", "tools"],
                    "We integrate with the tools you already use—Salesforce, HubSpot, Outreach, and most major CRMs and marketing automation platforms. Connect once and Revenue Engine AI unifies and cleans your data. No rip-and-replace required. Enterprise plans support unlimited connections and custom integrations.",
                ),
                KnowledgeEntry::new(
                    &["how it works", "solution", "feature"],
                    "Three core pillars: **1) Unified revenue intelligence**—connect CRM and marketing tools once; we unify and clean data so you see pipeline, conversion, and risk in one place. **2) AI that augments**—ML-powered lead scoring, opportunity risk, and next-best-action recommendations. **3) Actionable answers**—every insight comes with a suggested action, not just charts.",
                ),
            ],
            greeting: "Hi! I'm here to answer questions about Revenue Engine AI and guide you around the platform. What would you like to know?".to_string(),
            greeting_prefixes: vec![
                "hi".to_string(),
                "hello".to_string(),
                "hey".to_string(),
                "help".to_string(),
                "support".to_string(),
            ],
            greeting_max_len: DEFAULT_GREETING_MAX_LEN,
            fallback: "That's a great question! Revenue Engine AI helps revenue teams turn fragmented data into predictable growth. Could you tell me more—for example, are you curious about pricing, who it's for, or the results teams typically see? I'm here to guide you.".to_string(),
            quick_prompts: vec![
                "What is Revenue Engine AI?".to_string(),
                "Who is this platform for?".to_string(),
                "What pain points do you solve?".to_string(),
                "How does pricing work?".to_string(),
                "What results can I expect?".to_string(),
                "How do I get started?".to_string(),
            ],
        }
    }
}

impl KnowledgeBase {
    /// Loads a knowledge base from a JSON string.
    ///
    /// Omitted fields fall back to the built-in defaults. Keywords and
    /// greeting prefixes are lowercased on load, then the whole base is
    /// validated.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let mut base: KnowledgeBase = serde_json::from_str(json)?;
        base.normalize();
        base.check()?;
        Ok(base)
    }

    /// Loads a knowledge base from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let json = fs::read_to_string(path.as_ref()).map_err(|e| {
            AppError::Config(format!(
                "Cannot read knowledge base {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Lowercases keywords and greeting prefixes so matching against the
    /// normalized input stays case-insensitive.
    fn normalize(&mut self) {
        for entry in &mut self.entries {
            for keyword in &mut entry.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        for prefix in &mut self.greeting_prefixes {
            *prefix = prefix.to_lowercase();
        }
    }

    /// Validates structural constraints beyond what the derive covers.
    fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        if self.greeting_max_len == 0 {
            return Err(AppError::Validation(
                "greeting_max_len must be greater than zero".to_string(),
            ));
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(AppError::Validation(format!(
                    "Knowledge entry {} contains an empty keyword",
                    i
                )));
            }
        }
        if self.greeting_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err(AppError::Validation(
                "Greeting prefixes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
