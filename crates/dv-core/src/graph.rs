use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{StoryError, StoryResult};
use crate::info::GraphInfo;
use crate::journey::Journey;
use crate::position::Position;
use crate::state::{StoryState, Transition};

/// On-disk layout of a story file.
#[derive(Debug, Serialize, Deserialize)]
struct StoryFile {
    initial: String,
    states: Vec<StoryState>,
}

/// A transition whose target is not a state of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingTransition {
    /// The state offering the transition.
    pub state: String,
    /// The transition label.
    pub label: String,
    /// The missing target id.
    pub target: String,
}

/// The static story automaton. Immutable once built.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    initial: String,
    states: Vec<StoryState>,

    // Index
    by_id: HashMap<String, usize>,
}

impl StoryGraph {
    /// Build a graph from its states, in the order they should be listed.
    ///
    /// Transitions pointing at unknown states are accepted; sessions that
    /// follow them are reset when they arrive.
    pub fn new(initial: impl Into<String>, states: Vec<StoryState>) -> StoryResult<Self> {
        let initial = initial.into();
        if states.is_empty() {
            return Err(StoryError::Empty);
        }

        let mut by_id = HashMap::with_capacity(states.len());
        for (idx, state) in states.iter().enumerate() {
            if by_id.insert(state.id.clone(), idx).is_some() {
                return Err(StoryError::DuplicateState(state.id.clone()));
            }
            if state.is_final && !state.transitions.is_empty() {
                return Err(StoryError::FinalWithTransitions(state.id.clone()));
            }
            let mut labels = HashSet::new();
            for t in &state.transitions {
                if !labels.insert(t.label.as_str()) {
                    return Err(StoryError::DuplicateLabel {
                        state: state.id.clone(),
                        label: t.label.clone(),
                    });
                }
            }
        }

        if !by_id.contains_key(&initial) {
            return Err(StoryError::MissingInitial(initial));
        }

        Ok(Self {
            initial,
            states,
            by_id,
        })
    }

    /// Parse a story file (`{"initial": ..., "states": [...]}`).
    pub fn from_json(text: &str) -> StoryResult<Self> {
        let file: StoryFile = serde_json::from_str(text)?;
        let graph = Self::new(file.initial, file.states)?;
        for dangling in graph.dangling_transitions() {
            warn!(
                state = %dangling.state,
                label = %dangling.label,
                target = %dangling.target,
                "transition points at an undefined state"
            );
        }
        Ok(graph)
    }

    /// Serialize the graph in story file format.
    pub fn to_json(&self) -> StoryResult<String> {
        let file = StoryFile {
            initial: self.initial.clone(),
            states: self.states.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Id of the state every fresh session starts in.
    pub fn initial_id(&self) -> &str {
        &self.initial
    }

    /// Look up a state by id.
    pub fn state(&self, id: &str) -> Option<&StoryState> {
        self.by_id.get(id).map(|&idx| &self.states[idx])
    }

    /// Whether `id` names a state of this graph.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// The initial state.
    pub fn initial_state(&self) -> &StoryState {
        // `new` guarantees the initial id is indexed.
        &self.states[self.by_id[&self.initial]]
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: construction rejects empty graphs.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states in insertion order.
    pub fn all_states(&self) -> impl Iterator<Item = &StoryState> {
        self.states.iter()
    }

    /// Transitions leaving `state_id`; empty for unknown ids.
    pub fn transitions_from(&self, state_id: &str) -> &[Transition] {
        self.state(state_id)
            .map(|s| s.transitions.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    /// Number of final states.
    pub fn final_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_final).count()
    }

    /// Every transition whose target is missing from the graph.
    pub fn dangling_transitions(&self) -> Vec<DanglingTransition> {
        self.states
            .iter()
            .flat_map(|s| {
                s.transitions
                    .iter()
                    .filter(|t| !self.contains(&t.target))
                    .map(|t| DanglingTransition {
                        state: s.id.clone(),
                        label: t.label.clone(),
                        target: t.target.clone(),
                    })
            })
            .collect()
    }

    /// Read-only projection for visualization.
    pub fn info(&self) -> GraphInfo {
        GraphInfo::from_graph(self)
    }

    /// Start a fresh journey at the initial state.
    pub fn start(&self) -> Journey<'_> {
        Journey::new(self, Position::fresh(&self.initial))
    }

    /// Resume a journey from a session snapshot.
    ///
    /// A missing snapshot starts fresh; a snapshot whose current state is
    /// not in this graph is reset.
    pub fn resume(&self, snapshot: Option<Position>) -> Journey<'_> {
        match snapshot {
            Some(position) => Journey::new(self, position),
            None => self.start(),
        }
    }
}
