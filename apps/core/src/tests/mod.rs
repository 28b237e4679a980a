//! Test Module
//!
//! Cross-module test suite for the assistant core.
//!
//! ## Test Categories
//! - `classifier_tests`: greeting/keyword/fallback resolution properties
//! - `knowledge_tests`: knowledge base defaults, JSON loading, validation
//! - `session_tests`: full turn flow, reply timing, quick-start prompts
