use serde::{Deserialize, Serialize};

/// Where one session stands in the story.
///
/// This is the snapshot the boundary layer persists between turns. Visited
/// states are unique and kept in first-visit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPosition")]
pub struct Position {
    current_state_id: String,
    visited_states: Vec<String>,
}

/// Wire form, de-duplicated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPosition {
    current_state_id: String,
    #[serde(default)]
    visited_states: Vec<String>,
}

impl From<RawPosition> for Position {
    fn from(raw: RawPosition) -> Self {
        Self::from_parts(raw.current_state_id, raw.visited_states)
    }
}

impl Position {
    /// A fresh position standing at `initial`.
    pub fn fresh(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            visited_states: vec![initial.clone()],
            current_state_id: initial,
        }
    }

    /// Rebuild a position from persisted parts, dropping repeated visits.
    /// The current state is appended to the history when it is missing.
    pub fn from_parts(current: impl Into<String>, visited: Vec<String>) -> Self {
        let mut position = Self {
            current_state_id: current.into(),
            visited_states: Vec::with_capacity(visited.len()),
        };
        for id in visited {
            position.record_visit(id);
        }
        let current = position.current_state_id.clone();
        position.record_visit(current);
        position
    }

    /// The current state id. May be stale until resumed against a graph.
    pub fn current_state_id(&self) -> &str {
        &self.current_state_id
    }

    /// Visited state ids in first-visit order.
    pub fn visited_states(&self) -> &[String] {
        &self.visited_states
    }

    /// Whether the session has been in `state_id`.
    pub fn has_visited(&self, state_id: &str) -> bool {
        self.visited_states.iter().any(|s| s == state_id)
    }

    pub(crate) fn move_to(&mut self, state_id: &str) {
        self.current_state_id = state_id.to_string();
        self.record_visit(state_id.to_string());
    }

    fn record_visit(&mut self, state_id: String) {
        if !self.has_visited(&state_id) {
            self.visited_states.push(state_id);
        }
    }
}
