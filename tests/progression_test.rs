//! Daily progression persistence through the file-backed store.

use chrono::NaiveDate;
use lakeside::progression::{DailyProgressionState, DailyProgressionStore, PROGRESSION_KEY};
use lakeside::utils::persistence::{FileStore, KeyValueStore};
use std::fs;
use std::path::PathBuf;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
}

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("lakeside-progression-{}", uuid::Uuid::new_v4()))
}

#[test]
fn test_record_uses_camel_case_fields() {
    let dir = scratch_dir();
    let store = FileStore::new(&dir).unwrap();
    let mut progression = DailyProgressionStore::load(store.clone(), day(10));
    progression.save().unwrap();

    let raw = fs::read_to_string(store.path_for(PROGRESSION_KEY)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["date"], "2025-04-10");
    assert_eq!(json["castsToday"], 0);
    assert_eq!(json["cotdCaught"], false);
    assert_eq!(json["catchBonusRemaining"], 0);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_reads_records_written_elsewhere() {
    let dir = scratch_dir();
    let mut store = FileStore::new(&dir).unwrap();
    store
        .set(
            PROGRESSION_KEY,
            r#"{"date":"2025-04-10","castsToday":7,"cotdCaught":true,"catchBonusRemaining":2}"#,
        )
        .unwrap();

    let progression = DailyProgressionStore::load(store, day(10));
    assert_eq!(
        progression.state(),
        &DailyProgressionState {
            date: "2025-04-10".to_string(),
            casts_today: 7,
            cotd_caught: true,
            catch_bonus_remaining: 2,
        }
    );

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_stale_record_is_discarded() {
    let dir = scratch_dir();
    let mut store = FileStore::new(&dir).unwrap();
    store
        .set(
            PROGRESSION_KEY,
            r#"{"date":"2025-04-09","castsToday":30,"cotdCaught":true,"catchBonusRemaining":4}"#,
        )
        .unwrap();

    let progression = DailyProgressionStore::load(store, day(10));
    assert_eq!(
        progression.state(),
        &DailyProgressionState::fresh("2025-04-10")
    );

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_corrupt_record_falls_back_to_fresh() {
    let dir = scratch_dir();
    let store = FileStore::new(&dir).unwrap();
    fs::write(store.path_for(PROGRESSION_KEY), "{\"date\": 12").unwrap();

    let mut progression = DailyProgressionStore::load(store, day(10));
    assert_eq!(progression.state().casts_today, 0);

    // The next save replaces the corrupt record
    progression.save().unwrap();
    let reloaded = DailyProgressionStore::load(FileStore::new(&dir).unwrap(), day(10));
    assert_eq!(reloaded.state(), &DailyProgressionState::fresh("2025-04-10"));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_partial_record_fills_defaults() {
    let dir = scratch_dir();
    let mut store = FileStore::new(&dir).unwrap();
    store
        .set(PROGRESSION_KEY, r#"{"date":"2025-04-10","castsToday":3}"#)
        .unwrap();

    let progression = DailyProgressionStore::load(store, day(10));
    assert_eq!(progression.state().casts_today, 3);
    assert!(!progression.state().cotd_caught);
    assert_eq!(progression.state().catch_bonus_remaining, 0);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_roll_over_keeps_record_until_saved() {
    let dir = scratch_dir();
    let mut store = FileStore::new(&dir).unwrap();
    store
        .set(
            PROGRESSION_KEY,
            r#"{"date":"2025-04-10","castsToday":5,"cotdCaught":false,"catchBonusRemaining":0}"#,
        )
        .unwrap();

    let mut progression = DailyProgressionStore::load(store.clone(), day(10));
    assert!(progression.roll_over(day(11)));
    assert!(!progression.roll_over(day(11)));
    assert_eq!(progression.date(), "2025-04-11");

    let on_disk = store.get(PROGRESSION_KEY).unwrap().unwrap();
    assert!(on_disk.contains("2025-04-10"));

    progression.save().unwrap();
    let on_disk = store.get(PROGRESSION_KEY).unwrap().unwrap();
    assert!(on_disk.contains("2025-04-11"));

    fs::remove_dir_all(dir).ok();
}
