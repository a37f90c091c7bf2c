//! Journal: ledger persistence and the discovered/undiscovered view.

use lakeside::fishing::catalog::{all_species, roster};
use lakeside::fishing::RarityTier;
use lakeside::journal::{CollectionLedger, LedgerSaveManager};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lakeside-journal-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn random_ledger(seed: u64, catches: usize) -> CollectionLedger {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let species: Vec<_> = all_species().collect();
    let mut ledger = CollectionLedger::new();
    for _ in 0..catches {
        let fish = species.choose(&mut rng).unwrap();
        ledger.record(fish.name, fish.tier);
    }
    ledger
}

#[test]
fn test_ledger_survives_save_and_reload() {
    let dir = scratch_dir();
    let manager = LedgerSaveManager::with_path(dir.join("collection.dat"));
    let ledger = random_ledger(11, 200);

    manager.save(&ledger).unwrap();
    let loaded = manager.load().unwrap();
    assert_eq!(loaded, ledger);
    assert_eq!(loaded.summarize(), ledger.summarize());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_appends_after_reload_keep_history() {
    let dir = scratch_dir();
    let manager = LedgerSaveManager::with_path(dir.join("collection.dat"));

    let mut ledger = CollectionLedger::new();
    ledger.record("Mossfin", RarityTier::Common);
    manager.save(&ledger).unwrap();

    let mut ledger = manager.load_or_default();
    ledger.record("Voidtail", RarityTier::Epic);
    manager.save(&ledger).unwrap();

    let names: Vec<String> = manager
        .load()
        .unwrap()
        .entries()
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names, vec!["Mossfin", "Voidtail"]);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_summary_totals_match_ledger() {
    let ledger = random_ledger(12, 500);
    let summary = ledger.summarize();

    let recorded: u32 = summary.sections.iter().map(|s| s.caught_total).sum();
    assert_eq!(recorded as usize, ledger.len());

    for section in &summary.sections {
        let per_species: u32 = section.entries.iter().map(|e| e.count).sum();
        assert_eq!(per_species, section.caught_total);
        let names: Vec<&str> = section.entries.iter().map(|e| e.species.name).collect();
        let catalog: Vec<&str> = roster(section.tier).iter().map(|s| s.name).collect();
        assert_eq!(names, catalog);
    }
}

#[test]
fn test_every_species_discovered_eventually() {
    let mut ledger = CollectionLedger::new();
    for fish in all_species() {
        ledger.record(fish.name, fish.tier);
    }
    let summary = ledger.summarize();
    assert_eq!(summary.discovered, summary.total_species);
    assert!(summary
        .sections
        .iter()
        .flat_map(|s| &s.entries)
        .all(|e| e.display_name() == e.species.name && e.display_lore() == e.species.lore()));
}
