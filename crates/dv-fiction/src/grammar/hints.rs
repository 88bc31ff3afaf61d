use std::collections::HashMap;

use crate::grammar::tables;

/// Atmospheric hints keyed by state id.
#[derive(Debug, Clone, Default)]
pub struct HintTable {
    hints: HashMap<String, Vec<String>>,
}

impl HintTable {
    /// Build a table from `(state id, hints)` pairs. States with no hints are
    /// skipped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let hints = entries
            .into_iter()
            .filter(|(_, hints)| !hints.is_empty())
            .map(|(id, hints)| (id.into(), hints))
            .collect();
        Self { hints }
    }

    /// The built-in hints.
    pub fn builtin() -> Self {
        Self::new(
            tables::HINTS
                .iter()
                .map(|(id, hints)| (*id, hints.iter().map(|h| h.to_string()).collect())),
        )
    }

    /// The hint shown for `state_id`, if any.
    pub fn first_hint(&self, state_id: &str) -> Option<&str> {
        self.hints
            .get(state_id)
            .and_then(|hints| hints.first())
            .map(String::as_str)
    }

    /// Number of states with hints.
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Whether no state has a hint.
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}
