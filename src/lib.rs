//! Fantacalcio Season Simulator Library
//!
//! A Rust library for replaying an Italian fantasy football (fantacalcio)
//! season from per-matchday statistics: fantavoto scoring, automatic 4-3-3
//! lineup selection, round-robin scheduling, and deterministic league
//! standings.
//!
//! ## Features
//!
//! - **Matchday Ingestion**: Load per-matchday player statistics from the
//!   classic fantacalcio CSV columns
//! - **Fantavoto Scoring**: Base rating plus fixed bonuses and maluses, with
//!   goalkeeper-only terms
//! - **Lineup Selection**: The best 4-3-3 eleven per team and matchday, with
//!   unrated fill-ins when votes are missing
//! - **Defense Modifier**: Banded bonus from the back line's average fantavoto
//! - **Round-Robin Scheduling**: Circle-method fixtures over a configurable
//!   number of cycles
//! - **League Standings**: 3/1/0 points with a fully deterministic tie-break
//!   chain, head-to-head included
//!
//! ## Quick Start
//!
//! ```rust
//! use fantacalcio_sim::engine::{run_season, SeasonConfig};
//! use fantacalcio_sim::league::{MatchdayStats, Player, Team};
//! use fantacalcio_sim::{Matchday, PlayerCode, Role};
//!
//! /// An 11-man squad with every player rated `rating` on matchday 1.
//! fn squad(base: u32, rating: f64) -> Vec<Player> {
//!     let mut players = Vec::new();
//!     let mut code = base;
//!     for (role, count) in [
//!         (Role::Goalkeeper, 1),
//!         (Role::Defender, 4),
//!         (Role::Midfielder, 3),
//!         (Role::Forward, 3),
//!     ] {
//!         for _ in 0..count {
//!             let mut player =
//!                 Player::new(PlayerCode::new(code), role, format!("Player {code}"), "CLUB");
//!             player.record_matchday(
//!                 Matchday::new(1),
//!                 MatchdayStats {
//!                     rating: Some(rating),
//!                     ..MatchdayStats::default()
//!                 },
//!             );
//!             players.push(player);
//!             code += 1;
//!         }
//!     }
//!     players
//! }
//!
//! # fn main() -> fantacalcio_sim::Result<()> {
//! let teams = vec![
//!     Team::new("Gli Invincibili", squad(1, 7.0)),
//!     Team::new("La Banda", squad(101, 6.0)),
//! ];
//!
//! let config = SeasonConfig {
//!     rounds: 2,
//!     ..SeasonConfig::default()
//! };
//! let report = run_season(&teams, &config)?;
//! assert_eq!(report.champion().unwrap().team, "Gli Invincibili");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the data directory to avoid passing it in every command:
//! ```bash
//! export FANTA_DATA_DIR=./data/2016-17
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod league;
pub mod loader;

// Re-export commonly used types
pub use cli::types::{Matchday, PlayerCode, Role};
pub use error::{FantaError, Result};
pub use league::{MatchdayStats, Player, RoleCounts, Team};

pub const DATA_DIR_ENV_VAR: &str = "FANTA_DATA_DIR";
