use super::*;
use crate::cli::types::Role;
use crate::league::types::MatchdayStats;

fn record(code: u32, role: Role, rating: Option<f64>) -> StatRecord {
    StatRecord {
        code: PlayerCode::new(code),
        role,
        name: format!("Player {code}"),
        club: "CLUB".to_string(),
        stats: MatchdayStats {
            rating,
            ..MatchdayStats::default()
        },
    }
}

mod record_store_tests {
    use super::*;

    #[test]
    fn test_ingest_creates_players_on_first_sight() {
        let mut store = RecordStore::new();
        store
            .ingest_matchday(
                Matchday::new(1),
                vec![
                    record(10, Role::Goalkeeper, Some(6.0)),
                    record(20, Role::Forward, None),
                ],
            )
            .unwrap();

        assert_eq!(store.player_count(), 2);
        assert_eq!(store.matchday_count(), 1);

        let keeper = store.get(PlayerCode::new(10)).unwrap();
        assert_eq!(keeper.role, Role::Goalkeeper);
        assert!(keeper.is_rated(Matchday::new(1)));

        let forward = store.get(PlayerCode::new(20)).unwrap();
        assert!(!forward.is_rated(Matchday::new(1)));
    }

    #[test]
    fn test_ingest_accumulates_across_matchdays() {
        let mut store = RecordStore::new();
        store
            .ingest_matchday(Matchday::new(1), vec![record(10, Role::Midfielder, Some(6.5))])
            .unwrap();
        store
            .ingest_matchday(Matchday::new(2), vec![record(10, Role::Midfielder, Some(7.0))])
            .unwrap();

        let player = store.get(PlayerCode::new(10)).unwrap();
        assert_eq!(player.matchdays_recorded(), 2);
        assert_eq!(store.matchday_count(), 2);
        assert_eq!(store.last_matchday(), Some(Matchday::new(2)));
        assert!(store.has_matchday(Matchday::new(1)));
        assert!(!store.has_matchday(Matchday::new(3)));
    }

    #[test]
    fn test_role_conflict_is_rejected() {
        let mut store = RecordStore::new();
        store
            .ingest_matchday(Matchday::new(1), vec![record(10, Role::Defender, Some(6.0))])
            .unwrap();

        let err = store
            .ingest_matchday(Matchday::new(2), vec![record(10, Role::Forward, Some(6.0))])
            .unwrap_err();
        assert!(matches!(err, FantaError::RoleConflict { code: 10, .. }));
    }

    #[test]
    fn test_duplicate_row_in_same_matchday_keeps_first() {
        let mut store = RecordStore::new();
        store
            .ingest_matchday(
                Matchday::new(1),
                vec![
                    record(10, Role::Forward, Some(7.5)),
                    record(10, Role::Forward, Some(5.0)),
                ],
            )
            .unwrap();

        let player = store.get(PlayerCode::new(10)).unwrap();
        assert_eq!(player.stats_for(Matchday::new(1)).unwrap().rating, Some(7.5));
    }

    #[test]
    fn test_players_iterate_in_code_order() {
        let mut store = RecordStore::new();
        store
            .ingest_matchday(
                Matchday::new(1),
                vec![
                    record(30, Role::Forward, None),
                    record(10, Role::Goalkeeper, None),
                    record(20, Role::Defender, None),
                ],
            )
            .unwrap();

        let codes: Vec<u32> = store.players().map(|p| p.code.as_u32()).collect();
        assert_eq!(codes, vec![10, 20, 30]);
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert_eq!(store.player_count(), 0);
        assert_eq!(store.matchday_count(), 0);
        assert!(store.last_matchday().is_none());
        assert!(store.get(PlayerCode::new(1)).is_none());
    }
}
