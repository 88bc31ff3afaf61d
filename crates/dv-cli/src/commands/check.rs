use std::path::Path;

use colored::Colorize;

pub fn run(story: Option<&Path>) -> Result<(), String> {
    let graph = super::load_story(story)?;
    let dangling = graph.dangling_transitions();

    for d in &dangling {
        eprintln!(
            "  {} {} --{}--> {} (no such state)",
            "warning:".yellow().bold(),
            d.state,
            d.label,
            d.target
        );
    }

    let name = story.map_or_else(|| "built-in story".to_string(), |p| p.display().to_string());
    println!("  All checks passed for '{name}'.");
    println!(
        "  {} states, {} transitions, {} endings",
        graph.len(),
        graph.transition_count(),
        graph.final_count()
    );
    if !dangling.is_empty() {
        println!(
            "  {} dangling transition{}",
            dangling.len(),
            if dangling.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
