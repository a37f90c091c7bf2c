//! Static species catalog, one roster per rarity tier.

use super::types::{FishSpecies, RarityTier};

const fn common(name: &'static str, lore: Option<&'static str>) -> FishSpecies {
    FishSpecies {
        name,
        tier: RarityTier::Common,
        color: 0x808080,
        lore,
    }
}

const fn uncommon(name: &'static str, lore: Option<&'static str>) -> FishSpecies {
    FishSpecies {
        name,
        tier: RarityTier::Uncommon,
        color: 0x00ff00,
        lore,
    }
}

const fn rare(name: &'static str, lore: Option<&'static str>) -> FishSpecies {
    FishSpecies {
        name,
        tier: RarityTier::Rare,
        color: 0x0000ff,
        lore,
    }
}

const fn epic(name: &'static str, lore: Option<&'static str>) -> FishSpecies {
    FishSpecies {
        name,
        tier: RarityTier::Epic,
        color: 0x800080,
        lore,
    }
}

const fn legendary(name: &'static str, lore: Option<&'static str>) -> FishSpecies {
    FishSpecies {
        name,
        tier: RarityTier::Legendary,
        color: 0xffd700,
        lore,
    }
}

/// Common roster. Its order also fixes the Catch of the Day rotation.
pub const COMMON_FISH: [FishSpecies; 10] = [
    common("Bubblebelly", Some("A puffy fish full of hot air.")),
    common("Mossfin", Some("Camouflages perfectly in lake algae.")),
    common("Pebbletail", None),
    common("Mudgleam", None),
    common("Snagglefish", None),
    common("Swampskipper", None),
    common("Drizzlefin", None),
    common("Slimescale", None),
    common("Twigjaw", None),
    common("Puddlepoke", None),
];

pub const UNCOMMON_FISH: [FishSpecies; 10] = [
    uncommon("Glimmerscale", None),
    uncommon("Flickerfin", None),
    uncommon("Bogshadow", None),
    uncommon("Twilight Carp", None),
    uncommon("Blazegill", None),
    uncommon("Splashmancer", None),
    uncommon("Needlenose", None),
    uncommon("Fae Trout", None),
    uncommon("Barkbass", Some("Barks like a dog when spooked.")),
    uncommon("Frostmuck", Some("Freezes everything it touches.")),
];

pub const RARE_FISH: [FishSpecies; 10] = [
    rare("Stormjaw", Some("Rumbles with static electricity.")),
    rare("Voltarra", None),
    rare("Icewhisker", None),
    rare("Glowfin", Some("Emits faint bioluminescence in deep waters.")),
    rare("Duskscale", None),
    rare("Lavacod", None),
    rare("Crysteel", None),
    rare("Shadowlurker", None),
    rare("Ember Pike", None),
    rare("Phantomfin", Some("Only appears in reflections.")),
];

pub const EPIC_FISH: [FishSpecies; 8] = [
    epic("Spectralfin", None),
    epic("Tempest Ray", None),
    epic("Voidtail", None),
    epic("Nether Trout", None),
    epic("Solarflare Eel", None),
    epic("Shimmercrab", None),
    epic("Aetherfin", Some("Swims slightly above the water's surface.")),
    epic("Ancient Chest", Some("Contains whispers from deep time.")),
];

pub const LEGENDARY_FISH: [FishSpecies; 5] = [
    legendary("Leviathan of Light", Some("Said to illuminate the darkest oceans.")),
    legendary("Abyssal Doomscale", None),
    legendary("Celestial Serpent", None),
    legendary("Worldfin", None),
    legendary("Eternal Chest", Some("Shimmers with cosmic energy.")),
];

/// Returns the roster for a tier, in catalog order.
pub fn roster(tier: RarityTier) -> &'static [FishSpecies] {
    match tier {
        RarityTier::Common => &COMMON_FISH,
        RarityTier::Uncommon => &UNCOMMON_FISH,
        RarityTier::Rare => &RARE_FISH,
        RarityTier::Epic => &EPIC_FISH,
        RarityTier::Legendary => &LEGENDARY_FISH,
    }
}

/// Every species, grouped by tier in journal order.
pub fn all_species() -> impl Iterator<Item = &'static FishSpecies> {
    RarityTier::ALL.into_iter().flat_map(roster)
}

/// Looks a species up by its display name.
pub fn find_species(name: &str) -> Option<&'static FishSpecies> {
    all_species().find(|s| s.name == name)
}
