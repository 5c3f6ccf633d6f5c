//! Integration tests for the player ledger.
//!
//! These tests run the ledger operations against real files in a temporary
//! directory and check the on-disk bytes where layout matters.

use std::fs;

use chance_core::ledger::codec;
use chance_core::{HighScore, Ledger, PlayerRecord, UpdateOutcome};
use tempfile::TempDir;

fn seeded_ledger(dir: &TempDir, records: &[PlayerRecord]) -> Ledger {
    let ledger = Ledger::new(dir.path().join("chance.data"));
    for record in records {
        ledger.register(record).unwrap();
    }
    ledger
}

fn three_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord::new(1, 100, 100, "one"),
        PlayerRecord::new(2, 200, 250, "two"),
        PlayerRecord::new(3, 300, 300, "three"),
    ]
}

mod lookup_tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players());

        assert_eq!(ledger.lookup(2).unwrap(), Some(three_players()[1].clone()));
        assert_eq!(ledger.lookup(9).unwrap(), None);
    }

    #[test]
    fn test_lookup_missing_file() {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::new(dir.path().join("nothing-here.data"));

        assert_eq!(ledger.lookup(1).unwrap(), None);
    }

    #[test]
    fn test_lookup_returns_first_duplicate() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(
            &dir,
            &[
                PlayerRecord::new(5, 1, 1, "first"),
                PlayerRecord::new(5, 2, 2, "second"),
            ],
        );

        assert_eq!(ledger.lookup(5).unwrap().unwrap().name.as_str(), "first");
    }

    #[test]
    fn test_register_truncates_long_name() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &[PlayerRecord::new_account(8, "maximilian")]);

        let stored = ledger.lookup(8).unwrap().unwrap();
        assert_eq!(stored.name.as_str(), "maximil");
        assert_eq!(fs::read(ledger.path()).unwrap()[19], 0);
    }
}

mod update_tests {
    use super::*;

    #[test]
    fn test_update_isolation() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players());
        let before = fs::read(ledger.path()).unwrap();

        let changed = PlayerRecord::new(2, -10, 999, "renamed");
        let outcome = ledger.update(&changed).unwrap();
        let after = fs::read(ledger.path()).unwrap();

        assert_eq!(outcome, UpdateOutcome::Written { index: 1 });
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0..20], before[0..20]);
        assert_eq!(after[40..60], before[40..60]);
        assert_eq!(after[20..24], before[20..24]);
        assert_eq!(after[20..40], codec::encode(&changed));
        assert_eq!(ledger.lookup(2).unwrap(), Some(changed));
    }

    #[test]
    fn test_update_keeps_uid_order() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players());

        ledger.update(&PlayerRecord::new(3, 0, 0, "")).unwrap();

        let records = ledger.records().unwrap();
        let uids: Vec<u32> = records.iter().map(|r| r.uid).collect();
        assert_eq!(uids, vec![1, 2, 3]);
        assert_eq!(records[2], PlayerRecord::new(3, 0, 0, ""));
    }

    #[test]
    fn test_update_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players());
        let changed = PlayerRecord::new(1, 55, 155, "again");

        ledger.update(&changed).unwrap();
        let once = fs::read(ledger.path()).unwrap();
        ledger.update(&changed).unwrap();
        let twice = fs::read(ledger.path()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_with_truncated_tail() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players()[..2]);
        let mut bytes = fs::read(ledger.path()).unwrap();
        bytes.extend_from_slice(&codec::encode(&three_players()[2])[..12]);
        fs::write(ledger.path(), &bytes).unwrap();

        // uid 3 only exists in the partial tail, so it is not found
        assert_eq!(
            ledger.update(&PlayerRecord::new(3, 1, 1, "x")).unwrap(),
            UpdateOutcome::Unregistered
        );
        assert_eq!(fs::read(ledger.path()).unwrap(), bytes);
    }
}

mod scan_tests {
    use super::*;

    #[test]
    fn test_truncated_trailing_record_is_ignored() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players()[..2]);
        let mut bytes = fs::read(ledger.path()).unwrap();
        bytes.extend_from_slice(&[0xAB; 12]);
        fs::write(ledger.path(), &bytes).unwrap();

        let records = ledger.records().unwrap();
        assert_eq!(records, three_players()[..2].to_vec());
        assert_eq!(ledger.lookup(3).unwrap(), None);
    }

    #[test]
    fn test_register_after_truncated_tail_realigns() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players()[..1]);
        let mut bytes = fs::read(ledger.path()).unwrap();
        bytes.extend_from_slice(&[0xAB; 12]);
        fs::write(ledger.path(), &bytes).unwrap();

        let player = PlayerRecord::new_account(7, "seven");
        ledger.register(&player).unwrap();

        assert_eq!(fs::metadata(ledger.path()).unwrap().len(), 40);
        assert_eq!(ledger.lookup(7).unwrap(), Some(player));
        assert_eq!(ledger.lookup(1).unwrap(), Some(three_players()[0].clone()));
    }

    #[test]
    fn test_sessions_after_truncated_tail_register_once() {
        use chance_core::{FixedIdentity, Session, SessionStart};

        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players()[..1]);
        let mut bytes = fs::read(ledger.path()).unwrap();
        bytes.extend_from_slice(&[0xAB; 12]);
        fs::write(ledger.path(), &bytes).unwrap();

        let starts: Vec<SessionStart> = (0..3)
            .map(|_| {
                Session::open(ledger.clone(), &FixedIdentity(7), || "seven".into())
                    .unwrap()
                    .1
            })
            .collect();

        assert_eq!(
            starts,
            vec![
                SessionStart::Registered,
                SessionStart::Returning,
                SessionStart::Returning
            ]
        );
        assert_eq!(fs::metadata(ledger.path()).unwrap().len(), 40);
    }

    #[test]
    fn test_scanner_stops_after_last_record() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &three_players()[..1]);

        let mut scanner = ledger.scan().unwrap();
        assert_eq!(scanner.next().unwrap().unwrap().uid, 1);
        assert!(scanner.next().is_none());
        assert_eq!(scanner.records_read(), 1);
    }
}

mod high_score_tests {
    use super::*;

    fn with_scores(scores: &[i32]) -> Vec<PlayerRecord> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| PlayerRecord::new(i as u32 + 1, 0, score, format!("p{}", i)))
            .collect()
    }

    #[test]
    fn test_highest_in_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &with_scores(&[100, 150, 100]));
        let current = PlayerRecord::new(42, 0, 0, "me");

        assert_eq!(
            ledger.high_score(&current).unwrap(),
            HighScore::Ledger {
                name: "p1".into(),
                score: 150
            }
        );
    }

    #[test]
    fn test_tie_keeps_first() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &with_scores(&[150, 150]));
        let current = PlayerRecord::new(42, 0, 0, "me");

        assert_eq!(
            ledger.high_score(&current).unwrap(),
            HighScore::Ledger {
                name: "p0".into(),
                score: 150
            }
        );
    }

    #[test]
    fn test_empty_ledger_reports_current_player() {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::new(dir.path().join("chance.data"));
        let current = PlayerRecord::new(42, 0, 75, "me");

        assert_eq!(
            ledger.high_score(&current).unwrap(),
            HighScore::CurrentPlayer { score: 75 }
        );
    }

    #[test]
    fn test_current_player_beats_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = seeded_ledger(&dir, &with_scores(&[100, 150]));
        let current = PlayerRecord::new(42, 0, 151, "me");

        assert_eq!(
            ledger.high_score(&current).unwrap(),
            HighScore::CurrentPlayer { score: 151 }
        );
    }
}
