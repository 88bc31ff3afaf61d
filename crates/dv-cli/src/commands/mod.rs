pub mod check;
pub mod export;
pub mod graph;
pub mod look;
pub mod play;
pub mod reset;
pub mod sample;
pub mod suggest;
pub mod turn;

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{debug, warn};

use dv_core::{Position, StoryGraph, humanize_label};
use dv_fiction::{Engine, EngineConfig, TurnView};

/// Files a command reads and writes.
#[derive(Debug, Clone, Default)]
pub struct Paths {
    pub session: Option<PathBuf>,
    pub story: Option<PathBuf>,
}

/// Load a story file, or the built-in story when none is given.
fn load_story(story: Option<&Path>) -> Result<StoryGraph, String> {
    match story {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            StoryGraph::from_json(&text)
                .map_err(|e| format!("invalid story {}: {e}", path.display()))
        }
        None => dv_core::omega::omega_seven().map_err(|e| format!("built-in story: {e}")),
    }
}

/// Build the engine for a command.
fn load_engine(story: Option<&Path>, seed: Option<u64>) -> Result<Engine, String> {
    let graph = load_story(story)?;
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Engine::with_story(graph, config).map_err(|e| format!("failed to start engine: {e}"))
}

/// Read the session snapshot. A missing or unreadable file means a fresh
/// session.
fn load_session(path: Option<&Path>) -> Option<Position> {
    let path = path?;
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no session file, starting fresh");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(position) => Some(position),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt session file, starting fresh");
            None
        }
    }
}

/// Persist the session snapshot, if a session file was given.
fn save_session(path: Option<&Path>, position: &Position) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(position)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))
}

/// Print a scene for a human reader.
fn print_view(view: &TurnView) {
    println!();
    for paragraph in view.story_text.split("\n\n") {
        println!("  {paragraph}");
        println!();
    }

    if view.is_final {
        let ending = humanize_label(&view.final_type);
        if view.final_type.starts_with("victoria") {
            println!("  {} {}", "THE END:".bold(), ending.green().bold());
        } else {
            println!("  {} {}", "THE END:".bold(), ending.red().bold());
        }
        println!("  Type 'reset' to play again.");
    } else {
        println!("  {}", "What do you do?".bold());
        for label in &view.possible_transitions {
            println!("    {} {}", "-".dimmed(), humanize_label(label).cyan());
        }
    }
    println!();
}
