use super::*;
use crate::league::{MatchdayStats, Player};

const DAY: Matchday = Matchday(1);

fn rated_player(code: u32, role: Role, rating: f64) -> Player {
    let mut player = Player::new(PlayerCode::new(code), role, format!("Player {code}"), "CLUB");
    player.record_matchday(
        DAY,
        MatchdayStats {
            rating: Some(rating),
            ..MatchdayStats::default()
        },
    );
    player
}

fn unrated_player(code: u32, role: Role) -> Player {
    let mut player = Player::new(PlayerCode::new(code), role, format!("Player {code}"), "CLUB");
    player.record_matchday(DAY, MatchdayStats::unrated());
    player
}

/// 2 keepers, 5 defenders, 4 midfielders, 4 forwards, all rated; ratings
/// descend with ascending code inside each role.
fn full_squad() -> Vec<Player> {
    let mut players = Vec::new();
    let mut code = 1;
    for (role, count) in [
        (Role::Goalkeeper, 2),
        (Role::Defender, 5),
        (Role::Midfielder, 4),
        (Role::Forward, 4),
    ] {
        for i in 0..count {
            players.push(rated_player(code, role, 8.0 - i as f64 * 0.5));
            code += 1;
        }
    }
    players
}

mod select_lineup_tests {
    use super::*;

    #[test]
    fn test_selects_eleven_in_role_order() {
        let team = Team::new("Test", full_squad());
        let lineup = select_lineup(&team, DAY).unwrap();

        assert_eq!(lineup.starters.len(), 11);
        let roles: Vec<Role> = lineup.starters.iter().map(|s| s.role).collect();
        let expected: Vec<Role> = Role::ALL
            .iter()
            .flat_map(|&role| {
                std::iter::repeat(role).take(RoleCounts::FORMATION_433.get(role))
            })
            .collect();
        assert_eq!(roles, expected);
    }

    #[test]
    fn test_picks_best_rated_per_role() {
        let team = Team::new("Test", full_squad());
        let lineup = select_lineup(&team, DAY).unwrap();

        // Defenders are codes 3..=7 rated 8.0 down to 6.0; the worst one
        // (code 7) stays on the bench.
        let defenders: Vec<u32> = lineup
            .by_role(Role::Defender)
            .map(|s| s.code.as_u32())
            .collect();
        assert_eq!(defenders, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_tie_on_fantavoto_prefers_lower_code() {
        let players = vec![
            unrated_player(1, Role::Goalkeeper),
            rated_player(40, Role::Defender, 6.0),
            rated_player(10, Role::Defender, 6.0),
            rated_player(20, Role::Defender, 6.0),
            rated_player(30, Role::Defender, 6.0),
            rated_player(50, Role::Defender, 6.0),
            rated_player(60, Role::Midfielder, 6.0),
            rated_player(61, Role::Midfielder, 6.0),
            rated_player(62, Role::Midfielder, 6.0),
            rated_player(70, Role::Forward, 6.0),
            rated_player(71, Role::Forward, 6.0),
            rated_player(72, Role::Forward, 6.0),
        ];
        let team = Team::new("Test", players);
        let lineup = select_lineup(&team, DAY).unwrap();

        let defenders: Vec<u32> = lineup
            .by_role(Role::Defender)
            .map(|s| s.code.as_u32())
            .collect();
        assert_eq!(defenders, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_unrated_fillers_complete_short_roles() {
        let players = vec![
            rated_player(1, Role::Goalkeeper, 6.0),
            // Only two rated defenders; codes 13 and 14 are unrated.
            rated_player(11, Role::Defender, 7.0),
            rated_player(12, Role::Defender, 6.5),
            unrated_player(14, Role::Defender),
            unrated_player(13, Role::Defender),
            rated_player(21, Role::Midfielder, 6.0),
            rated_player(22, Role::Midfielder, 6.0),
            rated_player(23, Role::Midfielder, 6.0),
            rated_player(31, Role::Forward, 6.0),
            rated_player(32, Role::Forward, 6.0),
            rated_player(33, Role::Forward, 6.0),
        ];
        let team = Team::new("Test", players);
        let lineup = select_lineup(&team, DAY).unwrap();

        let defenders: Vec<(u32, bool)> = lineup
            .by_role(Role::Defender)
            .map(|s| (s.code.as_u32(), s.rated))
            .collect();
        assert_eq!(
            defenders,
            vec![(11, true), (12, true), (13, false), (14, false)]
        );
        assert_eq!(lineup.unrated_count(), 2);
    }

    #[test]
    fn test_rated_negative_fantavoto_still_beats_unrated() {
        // 4.0 - 4.0 - 1.0 = -1.0
        let bad_day = MatchdayStats {
            rating: Some(4.0),
            own_goals: 2,
            red_card: true,
            ..MatchdayStats::default()
        };
        let mut disaster = Player::new(PlayerCode::new(99), Role::Goalkeeper, "Keeper", "CLUB");
        disaster.record_matchday(DAY, bad_day);

        let players = vec![
            disaster,
            unrated_player(1, Role::Goalkeeper),
            rated_player(11, Role::Defender, 6.0),
            rated_player(12, Role::Defender, 6.0),
            rated_player(13, Role::Defender, 6.0),
            rated_player(14, Role::Defender, 6.0),
            rated_player(21, Role::Midfielder, 6.0),
            rated_player(22, Role::Midfielder, 6.0),
            rated_player(23, Role::Midfielder, 6.0),
            rated_player(31, Role::Forward, 6.0),
            rated_player(32, Role::Forward, 6.0),
            rated_player(33, Role::Forward, 6.0),
        ];
        let team = Team::new("Test", players);
        let lineup = select_lineup(&team, DAY).unwrap();

        let keeper = lineup.by_role(Role::Goalkeeper).next().unwrap();
        assert_eq!(keeper.code.as_u32(), 99);
        assert_eq!(keeper.fantavoto, -1.0);
    }

    #[test]
    fn test_role_with_too_few_players_errors() {
        let mut players = full_squad();
        players.retain(|p| p.role != Role::Goalkeeper);
        let team = Team::new("No Keepers", players);

        let err = select_lineup(&team, DAY).unwrap_err();
        assert!(matches!(err, FantaError::Roster { .. }));
        assert!(err.to_string().contains("No Keepers"));
    }

    #[test]
    fn test_future_matchday_fields_all_unrated_eleven() {
        let team = Team::new("Test", full_squad());
        let lineup = select_lineup(&team, Matchday::new(30)).unwrap();

        assert_eq!(lineup.starters.len(), 11);
        assert_eq!(lineup.unrated_count(), 11);
        assert_eq!(lineup.total_fantavoto(), 0.0);
    }
}

mod lineup_tests {
    use super::*;

    #[test]
    fn test_total_fantavoto_sums_starters() {
        let team = Team::new("Test", full_squad());
        let lineup = select_lineup(&team, DAY).unwrap();

        let by_hand: f64 = lineup.starters.iter().map(|s| s.fantavoto).sum();
        assert_eq!(lineup.total_fantavoto(), by_hand);
        // 8.0 + (8.0+7.5+7.0+6.5) + (8.0+7.5+7.0) + (8.0+7.5+7.0)
        assert_eq!(lineup.total_fantavoto(), 82.0);
    }
}
