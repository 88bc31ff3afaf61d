//! Narrative layer for Devorador.
//!
//! Combines the story graph from `dv-core` with a randomized flavor-text
//! grammar and a tiered natural-language resolver that maps free-form player
//! input onto the canonical transition labels of the current state. The
//! [`Engine`] runs one turn at a time against a session snapshot and keeps no
//! session state of its own.

/// Engine configuration.
pub mod config;
/// Turn engine and boundary response types.
pub mod engine;
/// Error types for the narrative layer.
pub mod error;
/// Grammar tables and the flavor-text generator.
pub mod grammar;
/// Player input resolution.
pub mod resolver;

pub use config::EngineConfig;
pub use engine::{Engine, Rejection, TurnOutcome, TurnResponse, TurnView};
pub use error::{FictionError, FictionResult};
pub use grammar::{Grammar, GrammarGenerator, HintTable};
pub use resolver::{
    ActionResolver, EquivalenceTable, MatchTier, Resolution, TieredResolver, suggest_actions,
};
