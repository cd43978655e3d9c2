//! Word Guessing Game - CLI
//!
//! Serves the game over HTTP, plays it in the terminal, or runs concurrent
//! simulations against the session manager.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;
use wordle_service::{
    commands::{SimulationConfig, evaluate_pair, run_play, run_server, run_simulation},
    config::{GameConfig, ServerConfig},
    game::PlayerId,
    output::{print_evaluation_result, print_simulation_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_service",
    about = "Word-guessing game: HTTP service, terminal game and simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP game service
    Serve {
        #[command(flatten)]
        server: ServerConfig,
    },

    /// Play in the terminal (default)
    Play {
        /// Player identity for statistics
        #[arg(long, default_value = "local")]
        player: String,
    },

    /// Show the feedback a guess receives against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Play many games concurrently and check the statistics invariants
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Number of concurrent players
        #[arg(short, long, default_value = "8")]
        players: usize,

        /// Seed for the simulated players' guesses
        #[arg(long, default_value = "0")]
        guess_seed: u64,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        player: "local".to_string(),
    });

    match command {
        Commands::Serve { server } => {
            init_tracing("wordle_service=info,tower_http=info");
            let service = cli.game.build_service()?;
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(run_server(server, service))
        }
        Commands::Play { player } => {
            init_tracing("warn");
            let service = cli.game.build_service()?;
            let stdin = io::stdin();
            run_play(&service, &PlayerId::new(player), stdin.lock(), &mut io::stdout())
        }
        Commands::Evaluate { guess, target } => {
            init_tracing("warn");
            let result = evaluate_pair(&guess, &target, cli.game.character_policy())?;
            print_evaluation_result(&result);
            Ok(())
        }
        Commands::Simulate {
            games,
            players,
            guess_seed,
        } => {
            init_tracing("warn");
            let service = cli.game.build_service()?;
            println!("Simulating {games} games across {players} players...");
            let result = run_simulation(
                &service,
                SimulationConfig {
                    games,
                    players,
                    seed: guess_seed,
                    show_progress: true,
                },
            );
            print_simulation_result(&result);
            if result.violations.is_empty() {
                Ok(())
            } else {
                anyhow::bail!(
                    "{} players have statistics that disagree with their sessions",
                    result.violations.len()
                )
            }
        }
    }
}
