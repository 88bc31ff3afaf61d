use colored::Colorize;

use dv_core::humanize_label;

use super::Paths;

pub fn run(paths: &Paths, partial: &str, limit: Option<usize>) -> Result<(), String> {
    let engine = super::load_engine(paths.story.as_deref(), None)?;
    let snapshot = super::load_session(paths.session.as_deref());
    let limit = limit.unwrap_or(engine.config().suggestion_limit);

    let suggestions = engine.suggest(snapshot, partial, limit);
    if suggestions.is_empty() {
        println!("  No matching actions.");
        return Ok(());
    }

    for label in &suggestions {
        println!("  {}  {}", label.cyan(), humanize_label(label).dimmed());
    }

    Ok(())
}
