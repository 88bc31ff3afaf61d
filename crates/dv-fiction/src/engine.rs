//! The turn engine.
//!
//! An [`Engine`] holds the story graph, the flavor-text generator and the
//! input resolver. It is shared read-only between sessions: every call takes
//! the session's [`Position`] snapshot in and hands the updated one back.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use dv_core::omega::omega_seven;
use dv_core::{GraphInfo, Journey, Position, StoryGraph, TransitionResult};

use crate::config::EngineConfig;
use crate::error::FictionResult;
use crate::grammar::GrammarGenerator;
use crate::resolver::{ActionResolver, MatchTier, Resolution, TieredResolver, suggest_actions};

/// What the player sees after a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnView {
    /// The state description with its hint and a flavor sentence.
    pub story_text: String,
    /// The state the session is in.
    pub current_state_id: String,
    /// States seen so far, in first-visit order.
    pub visited_states: Vec<String>,
    /// Labels the player can use next.
    pub possible_transitions: Vec<String>,
    /// Whether the story has ended.
    pub is_final: bool,
    /// Ending classification, empty until the story ends.
    pub final_type: String,
    /// An extra flavor sentence, sampled independently of `story_text`.
    pub grammar_sample: String,
}

/// Why a turn did not advance. The session is left where it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The input was blank.
    #[error("Action cannot be empty.")]
    EmptyInput,

    /// The input matched none of the available actions.
    #[error("\"{input}\" is not a valid action. Try one of the available options.")]
    Unrecognized {
        /// The input as typed, trimmed.
        input: String,
    },

    /// The resolver picked a label the current state refused.
    #[error("\"{label}\" is not available from here.")]
    TransitionRejected {
        /// The resolved label.
        label: String,
    },
}

/// Result of [`Engine::play_turn`].
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// The session moved.
    Advanced {
        /// The new view.
        view: TurnView,
        /// The snapshot to persist.
        position: Position,
        /// The canonical label that was applied.
        action: String,
        /// How the input was matched.
        tier: MatchTier,
    },
    /// The input was refused.
    Rejected {
        /// Why.
        rejection: Rejection,
        /// The restored snapshot, unchanged by the turn.
        position: Position,
    },
}

impl TurnOutcome {
    /// Whether the turn advanced.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }

    /// The snapshot to persist after this turn.
    pub fn position(&self) -> &Position {
        match self {
            Self::Advanced { position, .. } | Self::Rejected { position, .. } => position,
        }
    }

    /// Consume the outcome, keeping only the snapshot.
    pub fn into_position(self) -> Position {
        match self {
            Self::Advanced { position, .. } | Self::Rejected { position, .. } => position,
        }
    }

    /// The boundary response for this outcome.
    pub fn response(&self) -> TurnResponse {
        match self {
            Self::Advanced { view, .. } => TurnResponse::Success {
                success: true,
                view: view.clone(),
            },
            Self::Rejected { rejection, .. } => TurnResponse::Failure {
                success: false,
                message: rejection.to_string(),
            },
        }
    }
}

/// JSON shape returned to clients for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TurnResponse {
    /// `{"success": true, "storyText": ..., ...}`
    Success {
        /// Always `true`.
        success: bool,
        /// The new view, flattened into the response.
        #[serde(flatten)]
        view: TurnView,
    },
    /// `{"success": false, "message": ...}`
    Failure {
        /// Always `false`.
        success: bool,
        /// Human-readable reason.
        message: String,
    },
}

/// Story graph, generator and resolver, shared by every session.
pub struct Engine {
    graph: StoryGraph,
    generator: GrammarGenerator,
    resolver: Box<dyn ActionResolver>,
    config: EngineConfig,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("initial", &self.graph.initial_id())
            .field("states", &self.graph.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Assemble an engine from its parts.
    pub fn new(
        graph: StoryGraph,
        generator: GrammarGenerator,
        resolver: impl ActionResolver + 'static,
        config: EngineConfig,
    ) -> Self {
        Self {
            graph,
            generator,
            resolver: Box::new(resolver),
            config,
        }
    }

    /// Run `graph` with the built-in grammar, hints and phrasings.
    pub fn with_story(graph: StoryGraph, config: EngineConfig) -> FictionResult<Self> {
        let generator = GrammarGenerator::builtin(&config)?;
        Ok(Self::new(graph, generator, TieredResolver::builtin(), config))
    }

    /// The built-in "Sector Omega-7" adventure.
    pub fn omega_seven(config: EngineConfig) -> FictionResult<Self> {
        Self::with_story(omega_seven()?, config)
    }

    /// The story graph.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// The flavor-text generator.
    pub fn generator(&self) -> &GrammarGenerator {
        &self.generator
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Play one turn.
    ///
    /// A missing snapshot starts a fresh session and a snapshot naming an
    /// unknown state is reset. When the input is refused, the restored
    /// snapshot comes back untouched.
    pub fn play_turn<R: Rng + ?Sized>(
        &self,
        snapshot: Option<Position>,
        input: &str,
        rng: &mut R,
    ) -> TurnOutcome {
        let mut journey = self.graph.resume(snapshot);

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return TurnOutcome::Rejected {
                rejection: Rejection::EmptyInput,
                position: journey.into_position(),
            };
        }

        let available = journey.available_transitions();
        let (label, tier) = match self.resolver.resolve(trimmed, &available) {
            Resolution::Matched { label, tier } => (label, tier),
            Resolution::NoMatch => {
                return TurnOutcome::Rejected {
                    rejection: Rejection::Unrecognized {
                        input: trimmed.to_string(),
                    },
                    position: journey.into_position(),
                };
            }
        };

        let before = journey.position().clone();
        match journey.attempt_transition(&label) {
            TransitionResult::Rejected => {
                warn!(
                    %label,
                    state = %before.current_state_id(),
                    "resolver picked an unavailable label"
                );
                TurnOutcome::Rejected {
                    rejection: Rejection::TransitionRejected { label },
                    position: before,
                }
            }
            result => {
                if let TransitionResult::Recovered { missing } = &result {
                    warn!(%label, %missing, "transition target missing, session reset");
                }
                debug!(%label, %tier, state = %journey.current_state().id, "turn advanced");
                let view = self.view(&journey, rng);
                TurnOutcome::Advanced {
                    view,
                    position: journey.into_position(),
                    action: label,
                    tier,
                }
            }
        }
    }

    /// The current view of a session without taking a turn.
    pub fn look<R: Rng + ?Sized>(&self, snapshot: Option<Position>, rng: &mut R) -> TurnView {
        let journey = self.graph.resume(snapshot);
        self.view(&journey, rng)
    }

    /// A fresh snapshot at the start of the story.
    pub fn reset(&self) -> Position {
        Position::fresh(self.graph.initial_id())
    }

    /// Summary of the graph, marking the session's state when one is given.
    pub fn graph_info(&self, snapshot: Option<&Position>) -> GraphInfo {
        let info = self.graph.info();
        match snapshot {
            Some(position) => {
                let journey = self.graph.resume(Some(position.clone()));
                info.with_position(journey.position())
            }
            None => info,
        }
    }

    /// Up to `limit` actions from the session's current state that resemble
    /// `partial`.
    pub fn suggest(&self, snapshot: Option<Position>, partial: &str, limit: usize) -> Vec<String> {
        let journey = self.graph.resume(snapshot);
        suggest_actions(partial, &journey.available_transitions(), limit)
    }

    fn view<R: Rng + ?Sized>(&self, journey: &Journey<'_>, rng: &mut R) -> TurnView {
        let state = journey.current_state();
        let position = journey.position();
        TurnView {
            story_text: self
                .generator
                .enhance_description(&state.description, &state.id, rng),
            current_state_id: state.id.clone(),
            visited_states: position.visited_states().to_vec(),
            possible_transitions: journey
                .available_transitions()
                .into_iter()
                .map(String::from)
                .collect(),
            is_final: state.is_final,
            final_type: state.final_type.clone().unwrap_or_default(),
            grammar_sample: self.generator.generate_text(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::StoryState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::resolver::EquivalenceTable;

    fn engine() -> Engine {
        Engine::omega_seven(EngineConfig::default().with_seed(1)).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    struct AlwaysPicks(&'static str);

    impl ActionResolver for AlwaysPicks {
        fn resolve(&self, _input: &str, _available: &[&str]) -> Resolution {
            Resolution::Matched {
                label: self.0.to_string(),
                tier: MatchTier::Exact,
            }
        }
    }

    #[test]
    fn fresh_turn_advances() {
        let engine = engine();
        let outcome = engine.play_turn(None, "investigar nave", &mut rng());
        match outcome {
            TurnOutcome::Advanced {
                view,
                position,
                action,
                tier,
            } => {
                assert_eq!(action, "investigar_nave");
                assert_eq!(tier, MatchTier::Equivalent);
                assert_eq!(view.current_state_id, "sala_control");
                assert_eq!(view.visited_states, ["inicio", "sala_control"]);
                assert!(!view.is_final);
                assert_eq!(view.final_type, "");
                assert!(!view.possible_transitions.is_empty());
                assert!(view.story_text.contains("\n\n💭 "));
                assert_eq!(position.current_state_id(), "sala_control");
            }
            other => panic!("expected advance, got {other:?}"),
        }
    }

    #[test]
    fn blank_input_is_rejected() {
        let engine = engine();
        let snapshot =
            Position::from_parts("sala_control", vec!["inicio".into(), "sala_control".into()]);
        let outcome = engine.play_turn(Some(snapshot.clone()), "   ", &mut rng());
        assert!(!outcome.is_success());
        assert_eq!(outcome.position(), &snapshot);
        assert!(matches!(
            outcome,
            TurnOutcome::Rejected {
                rejection: Rejection::EmptyInput,
                ..
            }
        ));
    }

    #[test]
    fn unrecognized_input_echoes_text() {
        let engine = engine();
        let outcome = engine.play_turn(None, "  xyzzy ", &mut rng());
        assert_eq!(outcome.position(), &Position::fresh("inicio"));
        match outcome.response() {
            TurnResponse::Failure { success, message } => {
                assert!(!success);
                assert!(message.contains("\"xyzzy\""));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn refused_label_keeps_position() {
        let graph = omega_seven().unwrap();
        let config = EngineConfig::default();
        let generator = GrammarGenerator::builtin(&config).unwrap();
        let engine = Engine::new(graph, generator, AlwaysPicks("volar"), config);

        let outcome = engine.play_turn(None, "lo que sea", &mut rng());
        assert_eq!(outcome.position(), &Position::fresh("inicio"));
        assert!(matches!(
            outcome,
            TurnOutcome::Rejected {
                rejection: Rejection::TransitionRejected { ref label },
                ..
            } if label == "volar"
        ));
    }

    #[test]
    fn missing_target_lands_at_start() {
        let graph = StoryGraph::new(
            "a",
            vec![StoryState::new("a", "Inicio.").with_transition("saltar", "nowhere")],
        )
        .unwrap();
        let engine = Engine::with_story(graph, EngineConfig::default()).unwrap();
        let outcome = engine.play_turn(None, "saltar", &mut rng());
        assert!(outcome.is_success());
        assert_eq!(outcome.position(), &Position::fresh("a"));
    }

    #[test]
    fn stale_snapshot_is_healed() {
        let engine = engine();
        let stale = Position::from_parts("borrado", vec!["inicio".into(), "borrado".into()]);
        let view = engine.look(Some(stale), &mut rng());
        assert_eq!(view.current_state_id, "inicio");
        assert_eq!(view.visited_states, ["inicio"]);
    }

    #[test]
    fn response_json_shape() {
        let engine = engine();
        let outcome = engine.play_turn(None, "buscar_salida", &mut rng());
        let json = serde_json::to_value(outcome.response()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["currentStateId"], "final_escape_prematuro");
        assert_eq!(json["isFinal"], true);
        assert_eq!(json["finalType"], "derrota_cobarde");
        assert!(json["possibleTransitions"].as_array().unwrap().is_empty());
        assert!(json["storyText"].is_string());
        assert!(json["grammarSample"].is_string());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn failure_json_shape() {
        let outcome = engine().play_turn(None, "", &mut rng());
        let json = serde_json::to_value(outcome.response()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Action cannot be empty.");
    }

    #[test]
    fn reset_is_fresh() {
        assert_eq!(engine().reset(), Position::fresh("inicio"));
    }

    #[test]
    fn graph_info_marks_session() {
        let engine = engine();
        assert!(engine.graph_info(None).current_state_id.is_none());

        let snapshot = Position::from_parts("bodega_carga", vec!["inicio".into()]);
        let info = engine.graph_info(Some(&snapshot));
        assert_eq!(info.current_state_id.as_deref(), Some("bodega_carga"));
        assert_eq!(info.total_states, engine.graph().len());
    }

    #[test]
    fn suggestions_come_from_current_state() {
        let engine = engine();
        assert_eq!(engine.suggest(None, "busc", 5), ["buscar_salida"]);
        assert!(engine.suggest(None, "", 5).is_empty());
    }

    #[test]
    fn custom_phrasings() {
        let graph = omega_seven().unwrap();
        let config = EngineConfig::default();
        let generator = GrammarGenerator::builtin(&config).unwrap();
        let table = EquivalenceTable::new(vec![("buscar_salida", vec!["correr"])]);
        let engine = Engine::new(graph, generator, TieredResolver::new(table), config);

        let outcome = engine.play_turn(None, "correr", &mut rng());
        assert_eq!(outcome.position().current_state_id(), "final_escape_prematuro");
    }
}
