//! Error types for the narrative layer.

use thiserror::Error;

/// Result type for narrative-layer construction.
pub type FictionResult<T> = Result<T, FictionError>;

/// Configuration errors found while assembling the engine at startup.
///
/// Nothing a player types can produce one of these; per-turn failures are
/// reported as [`crate::Rejection`] values instead.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The start symbol has no rule.
    #[error("start symbol has no rule: {0}")]
    MissingStart(String),

    /// A nonterminal has no productions.
    #[error("nonterminal {0} has no productions")]
    NoProductions(String),

    /// A production contains no symbols.
    #[error("nonterminal {0} has an empty production")]
    EmptyProduction(String),

    /// A production references a nonterminal that has no rule.
    #[error("nonterminal {symbol} used by {rule} is not defined")]
    UndefinedSymbol {
        /// The rule whose production references it.
        rule: String,
        /// The undefined symbol.
        symbol: String,
    },

    /// A nonterminal can never expand to terminals only.
    #[error("nonterminal {0} never derives a terminal sentence")]
    Unproductive(String),

    /// The story graph could not be built.
    #[error("{0}")]
    Story(#[from] dv_core::StoryError),
}
