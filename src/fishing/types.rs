//! Fishing data structures: rarity tiers, species, and resolved catches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tiers for caught fish.
///
/// Declared from most to least common, which is also the journal order.
/// Roll brackets run the other way: Legendary owns the lowest rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RarityTier {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl RarityTier {
    /// All tiers in journal order.
    pub const ALL: [RarityTier; 5] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::Epic,
        RarityTier::Legendary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::Epic => "Epic",
            RarityTier::Legendary => "Legendary",
        }
    }

    /// Color of the fish model for this tier (0xRRGGBB).
    pub fn fish_color(self) -> u32 {
        match self {
            RarityTier::Common => 0x808080,
            RarityTier::Uncommon => 0x00ff00,
            RarityTier::Rare => 0x0000ff,
            RarityTier::Epic => 0x800080,
            RarityTier::Legendary => 0xffd700,
        }
    }

    /// Color of the tier heading in the journal (0xRRGGBB).
    pub fn journal_color(self) -> u32 {
        match self {
            RarityTier::Common => 0xaaaaaa,
            RarityTier::Uncommon => 0x00ff00,
            RarityTier::Rare => 0x3399ff,
            RarityTier::Epic => 0xb266ff,
            RarityTier::Legendary => 0xffd700,
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catchable species. The catalog of these is static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishSpecies {
    pub name: &'static str,
    pub tier: RarityTier,
    /// Model color (0xRRGGBB)
    pub color: u32,
    pub lore: Option<&'static str>,
}

/// Shown in the journal for species without their own lore line.
pub const DEFAULT_LORE: &str = "A mysterious catch with untold origins...";

impl FishSpecies {
    pub fn lore(&self) -> &'static str {
        self.lore.unwrap_or(DEFAULT_LORE)
    }
}

/// A resolved catch. Produced once per successful cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchResult {
    pub tier: RarityTier,
    pub species: &'static str,
    pub color: u32,
}

impl CatchResult {
    pub fn of(species: &FishSpecies) -> Self {
        Self {
            tier: species.tier,
            species: species.name,
            color: species.color,
        }
    }

    /// Popup text for this catch.
    pub fn catch_text(&self) -> String {
        format!("🎣 You caught a {} {}!", self.tier, self.species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(RarityTier::Common < RarityTier::Uncommon);
        assert!(RarityTier::Uncommon < RarityTier::Rare);
        assert!(RarityTier::Rare < RarityTier::Epic);
        assert!(RarityTier::Epic < RarityTier::Legendary);
    }

    #[test]
    fn test_all_is_in_journal_order() {
        let mut sorted = RarityTier::ALL;
        sorted.sort();
        assert_eq!(sorted, RarityTier::ALL);
    }

    #[test]
    fn test_catch_text() {
        let result = CatchResult {
            tier: RarityTier::Rare,
            species: "Glowfin",
            color: 0x0000ff,
        };
        assert_eq!(result.catch_text(), "🎣 You caught a Rare Glowfin!");
    }

    #[test]
    fn test_default_lore() {
        let species = FishSpecies {
            name: "Twigjaw",
            tier: RarityTier::Common,
            color: 0x808080,
            lore: None,
        };
        assert_eq!(species.lore(), DEFAULT_LORE);
    }
}
