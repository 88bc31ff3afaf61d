//! CLI frontend for Devorador, a text adventure aboard a derelict starship.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dv",
    about = "Devorador: a branching text adventure in Sector Omega-7",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the session lives and which story it plays.
#[derive(Args, Clone, Debug, Default)]
struct SessionArgs {
    /// Session snapshot file (created on first save)
    #[arg(long)]
    session: Option<PathBuf>,

    /// Story file in JSON (default: the built-in story)
    #[arg(long)]
    story: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play {
        #[command(flatten)]
        session: SessionArgs,

        /// RNG seed for reproducible flavor text
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a single turn and print the JSON response
    Turn {
        /// What the player does, in free text
        input: String,

        #[command(flatten)]
        session: SessionArgs,

        /// RNG seed for reproducible flavor text
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the current scene without acting
    Look {
        #[command(flatten)]
        session: SessionArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// RNG seed for reproducible flavor text
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the session over
    Reset {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Display every state and transition
    Graph {
        #[command(flatten)]
        session: SessionArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a story file
    Check {
        /// Story file in JSON (default: the built-in story)
        #[arg(long)]
        story: Option<PathBuf>,
    },

    /// Write a story as JSON
    Export {
        /// Story file in JSON (default: the built-in story)
        #[arg(long)]
        story: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print flavor-text samples
    Sample {
        /// Number of sentences
        #[arg(short, long, default_value = "5")]
        count: usize,

        /// RNG seed for reproducible samples
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Suggest actions for a partially typed command
    Suggest {
        /// The partial command
        partial: String,

        #[command(flatten)]
        session: SessionArgs,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { session, seed } => commands::play::run(&session.into(), seed),
        Commands::Turn {
            input,
            session,
            seed,
        } => commands::turn::run(&session.into(), &input, seed),
        Commands::Look {
            session,
            json,
            seed,
        } => commands::look::run(&session.into(), json, seed),
        Commands::Reset { session } => commands::reset::run(&session.into()),
        Commands::Graph { session, json } => commands::graph::run(&session.into(), json),
        Commands::Check { story } => commands::check::run(story.as_deref()),
        Commands::Export { story, output } => {
            commands::export::run(story.as_deref(), output.as_deref())
        }
        Commands::Sample { count, seed } => commands::sample::run(count, seed),
        Commands::Suggest {
            partial,
            session,
            limit,
        } => commands::suggest::run(&session.into(), &partial, limit),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<SessionArgs> for commands::Paths {
    fn from(args: SessionArgs) -> Self {
        Self {
            session: args.session,
            story: args.story,
        }
    }
}
