use super::Paths;

pub fn run(paths: &Paths) -> Result<(), String> {
    let engine = super::load_engine(paths.story.as_deref(), None)?;
    let fresh = engine.reset();

    match paths.session.as_deref() {
        Some(path) => {
            super::save_session(Some(path), &fresh)?;
            println!("  Session reset to '{}'.", fresh.current_state_id());
        }
        None => println!("  No session file given; nothing to reset."),
    }

    Ok(())
}
