use tracing::info;

use dv_fiction::TurnOutcome;

use super::Paths;

pub fn run(paths: &Paths, input: &str, seed: Option<u64>) -> Result<(), String> {
    let engine = super::load_engine(paths.story.as_deref(), seed)?;
    let snapshot = super::load_session(paths.session.as_deref());
    let mut rng = engine.config().rng();

    let outcome = engine.play_turn(snapshot, input, &mut rng);
    if let TurnOutcome::Advanced { action, tier, .. } = &outcome {
        info!(%action, %tier, "turn played");
    }

    let json = serde_json::to_string_pretty(&outcome.response())
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");

    super::save_session(paths.session.as_deref(), outcome.position())
}
