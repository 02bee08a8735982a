//! CLI frontend for the Beastwatch game session engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "bw",
    about = "Beastwatch: hunt the Eleventh Beast through 1746 London",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the map of London: locations and their connections
    Locations {
        /// Print the graph as JSON
        #[arg(long)]
        json: bool,
    },

    /// List wards, weapons, combat actions, and beast lore
    Catalog,

    /// Roll a name for a beast
    Name {
        /// RNG seed for a reproducible name
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Start a session and play a sequence of actions
    Play {
        /// Name of the inquisitor
        #[arg(short, long)]
        inquisitor: String,

        /// Name of the beast (rolled from the seed if omitted)
        #[arg(short, long)]
        beast: Option<String>,

        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,

        /// File with one action per line, run before ACTIONS
        #[arg(long)]
        script: Option<PathBuf>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Actions such as move:II, stage:<note>, investigate, verify,
        /// hunt, complete, combat:<id>, acquire-weapon:wep1, discover:3
        actions: Vec<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Locations { json } => commands::locations::run(json),
        Commands::Catalog => commands::catalog::run(),
        Commands::Name { seed } => commands::name::run(seed),
        Commands::Play {
            inquisitor,
            beast,
            seed,
            script,
            json,
            actions,
        } => commands::play::run(
            &inquisitor,
            beast.as_deref(),
            seed,
            script.as_deref(),
            &actions,
            json,
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
