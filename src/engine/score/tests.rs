use super::*;
use crate::cli::types::{Matchday, PlayerCode};
use crate::engine::lineup::Selection;

/// Build a lineup from per-role fantavoti, one selection per value.
fn lineup_with(goalkeeper: f64, defenders: &[f64], midfielders: &[f64], forwards: &[f64]) -> Lineup {
    let mut starters = Vec::new();
    let mut code = 1;
    let mut push = |role: Role, fantavoto: f64| {
        starters.push(Selection {
            code: PlayerCode::new(code),
            name: format!("Player {code}"),
            role,
            fantavoto,
            rated: true,
        });
        code += 1;
    };

    push(Role::Goalkeeper, goalkeeper);
    for &fv in defenders {
        push(Role::Defender, fv);
    }
    for &fv in midfielders {
        push(Role::Midfielder, fv);
    }
    for &fv in forwards {
        push(Role::Forward, fv);
    }
    Lineup {
        matchday: Matchday::new(1),
        starters,
    }
}

mod defense_modifier_tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_closed_below() {
        assert_eq!(defense_modifier(5.99), 1.0);
        assert_eq!(defense_modifier(6.0), 2.0);
        assert_eq!(defense_modifier(6.24), 2.0);
        assert_eq!(defense_modifier(6.25), 3.0);
        assert_eq!(defense_modifier(6.5), 4.0);
        assert_eq!(defense_modifier(6.75), 5.0);
        assert_eq!(defense_modifier(7.0), 6.0);
        assert_eq!(defense_modifier(7.25), 7.0);
        assert_eq!(defense_modifier(9.0), 7.0);
    }

    #[test]
    fn test_low_average_still_earns_one() {
        assert_eq!(defense_modifier(0.0), 1.0);
        assert_eq!(defense_modifier(-2.0), 1.0);
    }
}

mod goals_for_score_tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_goalless() {
        assert_eq!(goals_for_score(0.0), 0);
        assert_eq!(goals_for_score(65.99), 0);
    }

    #[test]
    fn test_threshold_steps() {
        assert_eq!(goals_for_score(66.0), 1);
        assert_eq!(goals_for_score(71.99), 1);
        assert_eq!(goals_for_score(72.0), 2);
        assert_eq!(goals_for_score(78.0), 3);
        assert_eq!(goals_for_score(90.0), 5);
    }

    #[test]
    fn test_absurd_totals_saturate() {
        assert_eq!(goals_for_score(10_000.0), u8::MAX);
    }
}

mod score_lineup_tests {
    use super::*;

    #[test]
    fn test_modifier_uses_defender_average() {
        // Defender average 6.5 lands in the +4 band.
        let lineup = lineup_with(
            6.0,
            &[6.5, 6.5, 6.5, 6.5],
            &[6.0, 6.0, 6.0],
            &[6.0, 6.0, 6.0],
        );
        let score = score_lineup(&lineup);

        assert_eq!(score.base, 68.0);
        assert_eq!(score.defense_modifier, 4.0);
        assert_eq!(score.total, 72.0);
        assert_eq!(score.goals, 2);
    }

    #[test]
    fn test_exact_threshold_scores_one_goal() {
        // Base 65.0 plus the +1 floor modifier lands exactly on 66.
        let lineup = lineup_with(
            6.0,
            &[5.0, 5.0, 5.0, 5.0],
            &[6.5, 6.5, 6.0],
            &[6.0, 6.0, 8.0],
        );
        let score = score_lineup(&lineup);

        assert_eq!(score.base, 65.0);
        assert_eq!(score.defense_modifier, 1.0);
        assert_eq!(score.total, 66.0);
        assert_eq!(score.goals, 1);
    }

    #[test]
    fn test_all_unrated_lineup_scores_floor_modifier_only() {
        let lineup = lineup_with(
            0.0,
            &[0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0],
        );
        let score = score_lineup(&lineup);

        assert_eq!(score.base, 0.0);
        assert_eq!(score.defense_modifier, 1.0);
        assert_eq!(score.total, 1.0);
        assert_eq!(score.goals, 0);
    }

    #[test]
    fn test_modifier_skipped_without_a_four_man_back_line() {
        // Hand-built three-defender lineup: the table does not apply.
        let mut lineup = lineup_with(
            6.0,
            &[7.0, 7.0, 7.0, 7.0],
            &[6.0, 6.0, 6.0],
            &[6.0, 6.0, 6.0],
        );
        lineup.starters.retain(|s| s.code.as_u32() != 2);
        let score = score_lineup(&lineup);

        assert_eq!(score.defense_modifier, 0.0);
        assert_eq!(score.total, score.base);
    }
}
