//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fantacalcio_sim::{
    cli::{Commands, Fanta},
    commands::{
        check::handle_check,
        lineup::handle_lineup,
        matchday::handle_matchday,
        simulate::{handle_simulate, SimulateParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so piped output stays machine-readable; default level
/// is warn unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> Result<()> {
    init_tracing();

    let app = Fanta::parse();

    match app.command {
        Commands::Simulate {
            input,
            rounds,
            season_name,
            match_log,
            json,
        } => handle_simulate(SimulateParams {
            input,
            rounds,
            season_name,
            match_log,
            json,
        })?,

        Commands::Matchday {
            input,
            matchday,
            rounds,
            json,
        } => handle_matchday(input, matchday, rounds, json)?,

        Commands::Lineup {
            input,
            team,
            matchday,
            json,
        } => handle_lineup(input, team, matchday, json)?,

        Commands::Check { input } => handle_check(input)?,
    }

    Ok(())
}
