use serde::{Deserialize, Serialize};

/// A labeled edge from one story state to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Canonical, underscore-separated label (e.g. `investigar_nave`).
    pub label: String,
    /// Id of the state this transition leads to.
    pub target: String,
}

impl Transition {
    /// Create a transition.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// One narrative state of the story automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryState {
    /// Unique state id.
    pub id: String,
    /// Narrative text shown when the player arrives.
    pub description: String,
    /// Outgoing transitions, in the order they are offered to the player.
    #[serde(default)]
    pub transitions: Vec<Transition>,
    /// Whether this state ends the story.
    #[serde(default)]
    pub is_final: bool,
    /// Ending classification for final states (e.g. `derrota_cobarde`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_type: Option<String>,
}

impl StoryState {
    /// Create a non-final state with no transitions.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            transitions: Vec::new(),
            is_final: false,
            final_type: None,
        }
    }

    /// Add an outgoing transition.
    pub fn with_transition(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push(Transition::new(label, target));
        self
    }

    /// Mark the state as an ending of the given type.
    pub fn ending(mut self, final_type: impl Into<String>) -> Self {
        self.is_final = true;
        self.final_type = Some(final_type.into());
        self
    }

    /// Look up the target of a label offered by this state.
    pub fn target_of(&self, label: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.target.as_str())
    }

    /// Labels offered by this state, in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.transitions.iter().map(|t| t.label.as_str())
    }
}
