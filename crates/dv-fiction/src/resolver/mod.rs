//! Player input resolution.
//!
//! Maps free-form text onto one of the labels the current state offers. The
//! engine only talks to the [`ActionResolver`] trait; [`TieredResolver`] is
//! the default pipeline of exact, equivalence and keyword matching.

/// Built-in phrasing table.
pub mod equivalents;
/// Autocomplete-style suggestions.
pub mod suggest;
/// Exact, equivalence and keyword matching.
pub mod tiered;

use serde::Serialize;

pub use equivalents::EquivalenceTable;
pub use suggest::suggest_actions;
pub use tiered::TieredResolver;

/// Which stage of the pipeline produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// The input is the label itself.
    Exact,
    /// The input contains a known phrasing of the label.
    Equivalent,
    /// The input mentions each word of the label in order.
    Keywords,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Equivalent => write!(f, "equivalent"),
            Self::Keywords => write!(f, "keywords"),
        }
    }
}

/// Result of resolving one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The input names `label`.
    Matched {
        /// The canonical label.
        label: String,
        /// How it was matched.
        tier: MatchTier,
    },
    /// Nothing available matches.
    NoMatch,
}

impl Resolution {
    /// The matched label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Matched { label, .. } => Some(label),
            Self::NoMatch => None,
        }
    }
}

/// Turns player text into a canonical label.
pub trait ActionResolver: Send + Sync {
    /// Resolve `input` against the labels in `available`, in their order.
    fn resolve(&self, input: &str, available: &[&str]) -> Resolution;
}

/// Trim and lowercase player input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
