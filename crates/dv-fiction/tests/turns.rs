//! End-to-end turns through the engine.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dv_core::Position;
use dv_fiction::{
    ActionResolver, Engine, EngineConfig, EquivalenceTable, GrammarGenerator, MatchTier,
    Rejection, Resolution, TieredResolver, TurnOutcome,
};

fn engine() -> Engine {
    Engine::omega_seven(EngineConfig::default().with_seed(7)).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// ---------------------------------------------------------------------------
// End-to-end turns
// ---------------------------------------------------------------------------

#[test]
fn escape_from_a_fresh_session() {
    let engine = engine();
    let outcome = engine.play_turn(None, "buscar salida", &mut rng());
    let TurnOutcome::Advanced { view, position, .. } = outcome else {
        panic!("expected the escape to advance");
    };

    assert_eq!(view.current_state_id, "final_escape_prematuro");
    assert!(view.is_final);
    assert_eq!(view.final_type, "derrota_cobarde");
    assert!(view.possible_transitions.is_empty());
    assert_eq!(position.visited_states(), ["inicio", "final_escape_prematuro"]);
}

#[test]
fn snapshot_carries_between_turns() {
    let engine = engine();
    let mut rng = rng();

    let first = engine.play_turn(None, "quiero examinar nave ahora", &mut rng);
    match &first {
        TurnOutcome::Advanced { action, tier, .. } => {
            assert_eq!(action, "investigar_nave");
            assert_eq!(*tier, MatchTier::Equivalent);
        }
        other => panic!("expected advance, got {other:?}"),
    }

    let second = engine.play_turn(Some(first.into_position()), "bodega", &mut rng);
    let third = engine.play_turn(Some(second.into_position()), "retroceder", &mut rng);
    let position = third.into_position();
    assert_eq!(position.current_state_id(), "sala_control");
    assert_eq!(
        position.visited_states(),
        ["inicio", "sala_control", "bodega_carga"]
    );
}

#[test]
fn snapshot_survives_json() {
    let engine = engine();
    let outcome = engine.play_turn(None, "investigar_nave", &mut rng());
    let json = serde_json::to_string(outcome.position()).unwrap();
    let restored: Position = serde_json::from_str(&json).unwrap();

    let view = engine.look(Some(restored), &mut rng());
    assert_eq!(view.current_state_id, "sala_control");
}

#[test]
fn snapshot_history_includes_current_state() {
    let engine = engine();
    let restored: Position =
        serde_json::from_str(r#"{"currentStateId":"sala_control","visitedStates":[]}"#).unwrap();

    let view = engine.look(Some(restored), &mut rng());
    assert_eq!(view.current_state_id, "sala_control");
    assert_eq!(view.visited_states, ["sala_control"]);
}

#[test]
fn keyword_tier_without_phrasings() {
    let graph = dv_core::omega::omega_seven().unwrap();
    let config = EngineConfig::default();
    let generator = GrammarGenerator::builtin(&config).unwrap();
    let engine = Engine::new(
        graph,
        generator,
        TieredResolver::new(EquivalenceTable::default()),
        config,
    );

    let outcome = engine.play_turn(None, "voy a investigar la nave", &mut rng());
    match outcome {
        TurnOutcome::Advanced { action, tier, .. } => {
            assert_eq!(action, "investigar_nave");
            assert_eq!(tier, MatchTier::Keywords);
        }
        other => panic!("expected keyword match, got {other:?}"),
    }
}

#[test]
fn nonsense_fails_everywhere() {
    let engine = engine();
    let resolver = TieredResolver::builtin();
    for state in engine.graph().all_states() {
        let labels: Vec<&str> = state.labels().collect();
        assert_eq!(resolver.resolve("xyzzy", &labels), Resolution::NoMatch);

        let snapshot = Position::from_parts(state.id.clone(), vec!["inicio".into()]);
        let outcome = engine.play_turn(Some(snapshot.clone()), "xyzzy", &mut rng());
        let expected = Rejection::Unrecognized {
            input: "xyzzy".to_string(),
        };
        assert!(matches!(
            &outcome,
            TurnOutcome::Rejected { rejection, .. } if *rejection == expected
        ));
        assert_eq!(outcome.position(), &snapshot);
    }
}

#[test]
fn exact_labels_work_everywhere() {
    let engine = engine();
    for state in engine.graph().all_states() {
        for label in state.labels() {
            let snapshot = Position::from_parts(state.id.clone(), vec!["inicio".into()]);
            let outcome = engine.play_turn(Some(snapshot), label, &mut rng());
            assert!(outcome.is_success(), "{} / {label}", state.id);
        }
    }
}

// ---------------------------------------------------------------------------
// Flavor text
// ---------------------------------------------------------------------------

#[test]
fn thousand_samples_terminate() {
    let engine = engine();
    let mut rng = rng();
    for _ in 0..1000 {
        let text = engine.generator().generate_text(&mut rng);
        assert!(!text.trim().is_empty());
    }
}

#[test]
fn views_carry_fresh_flavor() {
    let engine = engine();
    let view = engine.look(None, &mut rng());
    assert!(view.story_text.starts_with("Te despiertas"));
    assert!(view.story_text.contains("💭 "));
    assert!(!view.grammar_sample.is_empty());
}

proptest! {
    #[test]
    fn every_label_resolves_exactly(choice in any::<usize>()) {
        let engine = engine();
        let states: Vec<_> = engine.graph().all_states().collect();
        let state = states[choice % states.len()];
        let labels: Vec<&str> = state.labels().collect();
        for label in &labels {
            let resolution = TieredResolver::builtin().resolve(label, &labels);
            prop_assert_eq!(
                resolution,
                Resolution::Matched {
                    label: label.to_string(),
                    tier: MatchTier::Exact,
                }
            );
        }
    }

    #[test]
    fn samples_are_single_spaced(seed in any::<u64>()) {
        let engine = engine();
        let text = engine.generator().generate_text(&mut StdRng::seed_from_u64(seed));
        prop_assert!(!text.trim().is_empty());
        prop_assert!(!text.contains("  "), "double space in {:?}", text);
    }
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn engine_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
}

#[test]
fn concurrent_sessions_do_not_interfere() {
    let engine = engine();
    let inputs = ["buscar salida", "investigar nave", "xyzzy", ""];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let engine = &engine;
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(i as u64);
                    let mut position = None;
                    for _ in 0..25 {
                        let outcome = engine.play_turn(position.take(), input, &mut rng);
                        position = Some(outcome.into_position());
                        let moved = position
                            .as_ref()
                            .is_some_and(|p| p.current_state_id() != "inicio");
                        if moved {
                            position = Some(engine.reset());
                        }
                    }
                    position
                })
            })
            .collect();

        for handle in handles {
            let position = handle.join().unwrap().unwrap();
            assert_eq!(position, engine.reset());
        }
    });
}
