use super::*;

fn goal_stats(rating: f64, goals: u8) -> MatchdayStats {
    MatchdayStats {
        rating: Some(rating),
        goals_scored: goals,
        ..MatchdayStats::default()
    }
}

mod matchday_stats_tests {
    use super::*;

    #[test]
    fn test_unrated_has_no_rating_and_no_events() {
        let stats = MatchdayStats::unrated();
        assert!(!stats.is_rated());
        assert_eq!(stats.goals_scored, 0);
        assert_eq!(stats.assists, 0);
        assert!(!stats.yellow_card);
        assert!(!stats.clean_sheet);
    }

    #[test]
    fn test_is_rated_follows_rating_presence() {
        assert!(goal_stats(6.5, 0).is_rated());
        assert!(!MatchdayStats::unrated().is_rated());
    }

    #[test]
    fn test_serde_round_trip() {
        let stats = MatchdayStats {
            rating: Some(7.5),
            goals_scored: 2,
            assists: 1,
            yellow_card: true,
            ..MatchdayStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: MatchdayStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}

mod player_tests {
    use super::*;

    #[test]
    fn test_record_and_fetch_matchday() {
        let mut player = Player::new(PlayerCode::new(2170), Role::Forward, "Rossi", "ROMA");
        player.record_matchday(Matchday::new(1), goal_stats(6.0, 1));

        let stats = player.stats_for(Matchday::new(1)).unwrap();
        assert_eq!(stats.rating, Some(6.0));
        assert_eq!(stats.goals_scored, 1);
        assert!(player.stats_for(Matchday::new(2)).is_none());
    }

    #[test]
    fn test_first_record_wins_on_duplicate_matchday() {
        let mut player = Player::new(PlayerCode::new(101), Role::Midfielder, "Verdi", "NAPOLI");
        player.record_matchday(Matchday::new(3), goal_stats(7.0, 0));
        player.record_matchday(Matchday::new(3), goal_stats(4.0, 0));

        assert_eq!(player.matchdays_recorded(), 1);
        let stats = player.stats_for(Matchday::new(3)).unwrap();
        assert_eq!(stats.rating, Some(7.0));
    }

    #[test]
    fn test_is_rated_treats_missing_matchday_as_unrated() {
        let mut player = Player::new(PlayerCode::new(55), Role::Goalkeeper, "Bianchi", "MILAN");
        player.record_matchday(Matchday::new(1), goal_stats(6.5, 0));
        player.record_matchday(Matchday::new(2), MatchdayStats::unrated());

        assert!(player.is_rated(Matchday::new(1)));
        assert!(!player.is_rated(Matchday::new(2)));
        assert!(!player.is_rated(Matchday::new(9)));
    }

    #[test]
    fn test_matchdays_recorded_counts_distinct_matchdays() {
        let mut player = Player::new(PlayerCode::new(7), Role::Defender, "Neri", "INTER");
        for day in 1..=4 {
            player.record_matchday(Matchday::new(day), MatchdayStats::unrated());
        }
        assert_eq!(player.matchdays_recorded(), 4);
    }
}
