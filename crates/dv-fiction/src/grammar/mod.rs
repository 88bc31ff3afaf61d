//! Flavor-text grammar.
//!
//! A [`Grammar`] is a validated context-free rule table. The
//! [`GrammarGenerator`] samples sentences from it and decorates state
//! descriptions with a contextual hint from the [`HintTable`] plus a fresh
//! sample.

/// Sentence generation and description enhancement.
pub mod generator;
/// Per-state atmospheric hints.
pub mod hints;
/// Rule table validation.
pub mod rules;
/// Built-in tables for the "Sector Omega-7" story.
pub mod tables;

pub use generator::GrammarGenerator;
pub use hints::HintTable;
pub use rules::Grammar;
