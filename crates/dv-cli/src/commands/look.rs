use super::Paths;

pub fn run(paths: &Paths, json: bool, seed: Option<u64>) -> Result<(), String> {
    let engine = super::load_engine(paths.story.as_deref(), seed)?;
    let snapshot = super::load_session(paths.session.as_deref());
    let view = engine.look(snapshot, &mut engine.config().rng());

    if json {
        let out = serde_json::to_string_pretty(&view)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        super::print_view(&view);
    }

    Ok(())
}
