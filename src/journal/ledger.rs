//! Append-only record of every fish caught, and the journal summary.

use crate::fishing::catalog::roster;
use crate::fishing::types::{FishSpecies, RarityTier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One caught fish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub name: String,
    pub rarity: RarityTier,
}

/// Every catch ever made, in order. Entries are never removed or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLedger {
    entries: Vec<LedgerEntry>,
}

impl CollectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one catch.
    pub fn record(&mut self, species: &str, tier: RarityTier) {
        self.entries.push(LedgerEntry {
            name: species.to_string(),
            rarity: tier,
        });
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, species: &str) -> u32 {
        self.entries.iter().filter(|e| e.name == species).count() as u32
    }

    pub fn has_caught(&self, species: &str) -> bool {
        self.entries.iter().any(|e| e.name == species)
    }

    /// Builds the journal view over the whole catalog.
    pub fn summarize(&self) -> JournalSummary {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let mut tier_totals = [0u32; 5];
        for entry in &self.entries {
            *counts.entry(entry.name.as_str()).or_insert(0) += 1;
            tier_totals[entry.rarity as usize] += 1;
        }

        let sections: Vec<JournalSection> = RarityTier::ALL
            .into_iter()
            .map(|tier| JournalSection {
                tier,
                caught_total: tier_totals[tier as usize],
                entries: roster(tier)
                    .iter()
                    .map(|species| JournalEntry {
                        species,
                        count: counts.get(species.name).copied().unwrap_or(0),
                    })
                    .collect(),
            })
            .collect();

        let total_species = sections.iter().map(|s| s.entries.len()).sum();
        let discovered = sections
            .iter()
            .flat_map(|s| &s.entries)
            .filter(|e| e.discovered())
            .count();

        JournalSummary {
            sections,
            discovered,
            total_species,
        }
    }
}

/// One catalog species as the journal shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalEntry {
    pub species: &'static FishSpecies,
    pub count: u32,
}

impl JournalEntry {
    pub fn discovered(&self) -> bool {
        self.count > 0
    }

    /// Name, or "?????" while undiscovered.
    pub fn display_name(&self) -> &'static str {
        if self.discovered() {
            self.species.name
        } else {
            "?????"
        }
    }

    /// Lore, or "Undiscovered" while undiscovered.
    pub fn display_lore(&self) -> &'static str {
        if self.discovered() {
            self.species.lore()
        } else {
            "Undiscovered"
        }
    }
}

/// All species of one tier, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalSection {
    pub tier: RarityTier,
    /// Catches recorded in this tier
    pub caught_total: u32,
    pub entries: Vec<JournalEntry>,
}

/// The journal: one section per tier in rarity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalSummary {
    pub sections: Vec<JournalSection>,
    pub discovered: usize,
    pub total_species: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends() {
        let mut ledger = CollectionLedger::new();
        assert!(ledger.is_empty());
        ledger.record("Mossfin", RarityTier::Common);
        ledger.record("Glowfin", RarityTier::Rare);
        ledger.record("Mossfin", RarityTier::Common);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.count_of("Mossfin"), 2);
        assert!(ledger.has_caught("Glowfin"));
        assert!(!ledger.has_caught("Worldfin"));
        assert_eq!(ledger.entries()[1].name, "Glowfin");
    }

    #[test]
    fn test_summary_covers_whole_catalog() {
        let summary = CollectionLedger::new().summarize();
        assert_eq!(summary.total_species, 43);
        assert_eq!(summary.discovered, 0);
        let tiers: Vec<RarityTier> = summary.sections.iter().map(|s| s.tier).collect();
        assert_eq!(tiers, RarityTier::ALL.to_vec());
        assert!(summary
            .sections
            .iter()
            .flat_map(|s| &s.entries)
            .all(|e| e.display_name() == "?????" && e.display_lore() == "Undiscovered"));
    }

    #[test]
    fn test_summary_counts_and_order() {
        let mut ledger = CollectionLedger::new();
        ledger.record("Puddlepoke", RarityTier::Common);
        ledger.record("Bubblebelly", RarityTier::Common);
        ledger.record("Bubblebelly", RarityTier::Common);
        ledger.record("Worldfin", RarityTier::Legendary);

        let summary = ledger.summarize();
        assert_eq!(summary.discovered, 3);

        let common = &summary.sections[0];
        assert_eq!(common.tier, RarityTier::Common);
        assert_eq!(common.caught_total, 3);
        assert_eq!(common.entries[0].species.name, "Bubblebelly");
        assert_eq!(common.entries[0].count, 2);
        assert_eq!(common.entries[0].display_lore(), "A puffy fish full of hot air.");
        assert_eq!(common.entries[9].species.name, "Puddlepoke");
        assert_eq!(common.entries[9].count, 1);
        assert!(!common.entries[1].discovered());

        let legendary = &summary.sections[4];
        assert_eq!(legendary.caught_total, 1);
        assert_eq!(legendary.entries[3].display_name(), "Worldfin");
    }

    #[test]
    fn test_summarize_does_not_mutate() {
        let mut ledger = CollectionLedger::new();
        ledger.record("Lavacod", RarityTier::Rare);
        let before = ledger.clone();
        let first = ledger.summarize();
        let second = ledger.summarize();
        assert_eq!(first, second);
        assert_eq!(ledger, before);
    }
}
