use serde::Serialize;

use crate::graph::StoryGraph;
use crate::position::Position;
use crate::state::Transition;

/// Projection of one state for visualization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateInfo {
    /// State id.
    pub id: String,
    /// Whether the state ends the story.
    pub is_final: bool,
    /// Outgoing transitions in table order.
    pub transitions: Vec<Transition>,
    /// Narrative description.
    pub description: String,
    /// Ending classification, empty for non-final states.
    pub final_type: String,
}

/// Read-only summary of a whole story graph.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInfo {
    /// Every state in insertion order.
    pub states: Vec<StateInfo>,
    /// Number of states.
    pub total_states: usize,
    /// Number of transitions across all states.
    pub total_transitions: usize,
    /// Number of final states.
    pub final_states_count: usize,
    /// The requesting session's current state, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state_id: Option<String>,
}

impl GraphInfo {
    pub(crate) fn from_graph(graph: &StoryGraph) -> Self {
        let states: Vec<StateInfo> = graph
            .all_states()
            .map(|s| StateInfo {
                id: s.id.clone(),
                is_final: s.is_final,
                transitions: s.transitions.clone(),
                description: s.description.clone(),
                final_type: s.final_type.clone().unwrap_or_default(),
            })
            .collect();

        Self {
            total_states: states.len(),
            total_transitions: graph.transition_count(),
            final_states_count: graph.final_count(),
            states,
            current_state_id: None,
        }
    }

    /// Mark the state a session is standing in.
    pub fn with_position(mut self, position: &Position) -> Self {
        self.current_state_id = Some(position.current_state_id().to_string());
        self
    }
}

/// Turn a canonical label into display text: `tomar_traje` → `Tomar Traje`.
pub fn humanize_label(label: &str) -> String {
    label
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
