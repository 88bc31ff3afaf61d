use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::Paths;

pub fn run(paths: &Paths, json: bool) -> Result<(), String> {
    let engine = super::load_engine(paths.story.as_deref(), None)?;
    let snapshot = super::load_session(paths.session.as_deref());
    let info = engine.graph_info(snapshot.as_ref());

    if json {
        let out = serde_json::to_string_pretty(&info)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "State", "Ending", "Transitions"]);

    for state in &info.states {
        let here = if info.current_state_id.as_deref() == Some(state.id.as_str()) {
            "*"
        } else {
            ""
        };
        let ending = if state.is_final {
            state.final_type.clone()
        } else {
            "-".to_string()
        };
        let transitions = state
            .transitions
            .iter()
            .map(|t| {
                let marker = if engine.graph().contains(&t.target) { "" } else { " (missing)" };
                format!("{} -> {}{marker}", t.label, t.target)
            })
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![here, state.id.as_str(), ending.as_str(), transitions.as_str()]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} states, {} transitions, {} endings",
        info.total_states,
        info.total_transitions,
        info.final_states_count
    );
    if let Some(current) = &info.current_state_id {
        println!("  You are at {}", current.cyan());
    }

    Ok(())
}
