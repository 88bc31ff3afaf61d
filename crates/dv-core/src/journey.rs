use tracing::{debug, warn};

use crate::graph::StoryGraph;
use crate::position::Position;
use crate::state::StoryState;

/// Outcome of [`Journey::attempt_transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionResult {
    /// The session moved to the target state.
    Moved {
        /// State the session left.
        from: String,
        /// State the session is now in.
        to: String,
    },
    /// The label was valid but its target is not in the graph, so the
    /// session was reset to the initial state.
    Recovered {
        /// The missing target id.
        missing: String,
    },
    /// The label is not offered by the current state. Nothing changed.
    Rejected,
}

impl TransitionResult {
    /// Whether the label was accepted.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// One session's walk through a shared [`StoryGraph`].
///
/// The journey owns the session's [`Position`] for the duration of a turn.
/// Its current state is always a state of the graph: unknown ids are
/// replaced by a reset as soon as they appear.
#[derive(Debug, Clone)]
pub struct Journey<'g> {
    graph: &'g StoryGraph,
    position: Position,
}

impl<'g> Journey<'g> {
    pub(crate) fn new(graph: &'g StoryGraph, position: Position) -> Self {
        let mut journey = Self { graph, position };
        journey.heal();
        journey
    }

    /// The graph being walked.
    pub fn graph(&self) -> &'g StoryGraph {
        self.graph
    }

    /// The current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Hand the position back for persistence.
    pub fn into_position(self) -> Position {
        self.position
    }

    /// The record of the current state.
    pub fn current_state(&self) -> &'g StoryState {
        self.graph
            .state(self.position.current_state_id())
            .unwrap_or_else(|| self.graph.initial_state())
    }

    /// Labels available from the current state, in table order.
    pub fn available_transitions(&self) -> Vec<&'g str> {
        self.current_state().labels().collect()
    }

    /// Follow `label` if the current state offers it.
    pub fn attempt_transition(&mut self, label: &str) -> TransitionResult {
        let state = self.current_state();
        let Some(target) = state.target_of(label) else {
            return TransitionResult::Rejected;
        };

        self.position.move_to(target);
        if self.graph.contains(target) {
            debug!(from = %state.id, to = %target, label, "transition applied");
            TransitionResult::Moved {
                from: state.id.clone(),
                to: target.to_string(),
            }
        } else {
            self.heal();
            TransitionResult::Recovered {
                missing: target.to_string(),
            }
        }
    }

    /// Return to the initial state with a fresh history.
    pub fn reset(&mut self) {
        self.position = Position::fresh(self.graph.initial_id());
    }

    /// Whether the current state ends the story.
    pub fn is_terminal(&self) -> bool {
        self.current_state().is_final
    }

    fn heal(&mut self) {
        if !self.graph.contains(self.position.current_state_id()) {
            warn!(
                state = %self.position.current_state_id(),
                initial = %self.graph.initial_id(),
                "unknown state in session, resetting"
            );
            self.reset();
        }
    }
}
