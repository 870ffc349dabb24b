//! Input validation command: load everything, simulate nothing.

use crate::cli::InputArgs;
use crate::engine::generate_fixtures;
use crate::error::Result;
use crate::league::RoleCounts;

use super::load_from_args;

/// Handle the check command.
///
/// Loading already applies every fatal roster rule, so getting past it means
/// the inputs can be simulated; this just reports what was found.
pub fn handle_check(input: InputArgs) -> Result<()> {
    let (store, teams) = load_from_args(&input)?;

    println!(
        "✓ {} players across {} matchday(s) of data",
        store.player_count(),
        store.matchday_count()
    );

    println!("✓ {} team(s), all able to field a 4-3-3:", teams.len());
    for team in &teams {
        let counts = team.role_counts();
        let note = if counts == RoleCounts::CLASSIC_ROSTER {
            ""
        } else {
            "  [non-standard shape]"
        };
        println!(
            "    {:<20} {:>2} players ({counts}){note}",
            team.name(),
            team.players().len()
        );
    }

    // A classic double round-robin must be buildable from this many teams.
    let fixtures = generate_fixtures(teams.len(), 2)?;
    println!(
        "✓ Schedule: {} matchdays over 2 rounds",
        fixtures.matchday_count()
    );

    println!("✓ All checks passed");
    Ok(())
}
