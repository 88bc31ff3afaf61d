use std::io::{self, BufRead, Write};

use colored::Colorize;

use dv_fiction::TurnOutcome;

use super::Paths;

const HELP: &str = "\
  Type what you want to do, in your own words.
  Meta commands:
    look   show the scene again
    reset  start the story over
    help   show this help
    quit   leave (progress is saved with --session)";

pub fn run(paths: &Paths, seed: Option<u64>) -> Result<(), String> {
    let engine = super::load_engine(paths.story.as_deref(), seed)?;
    let session = paths.session.as_deref();
    let mut rng = engine.config().rng();
    let mut position = super::load_session(session);

    println!("  {} Sector Omega-7", "Entering".bold());
    println!("  Type 'help' for commands, 'quit' to exit.");

    let view = engine.look(position.clone(), &mut rng);
    super::print_view(&view);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "?" => {
                println!("{HELP}\n");
                continue;
            }
            "look" => {
                super::print_view(&engine.look(position.clone(), &mut rng));
                continue;
            }
            "reset" | "restart" => {
                let fresh = engine.reset();
                super::save_session(session, &fresh)?;
                super::print_view(&engine.look(Some(fresh.clone()), &mut rng));
                position = Some(fresh);
                continue;
            }
            _ => {}
        }

        let outcome = engine.play_turn(position.take(), input, &mut rng);
        match &outcome {
            TurnOutcome::Advanced { view, .. } => super::print_view(view),
            TurnOutcome::Rejected { rejection, .. } => {
                println!("  {}\n", rejection.to_string().yellow());
            }
        }
        let next = outcome.into_position();
        super::save_session(session, &next)?;
        position = Some(next);
    }

    Ok(())
}
