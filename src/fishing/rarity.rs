//! Weighted rarity roll.
//!
//! A draw is taken uniformly from `[0, 100)` and mapped onto fixed brackets:
//!
//! | Roll      | Tier      |
//! |-----------|-----------|
//! | [0, 2)    | Legendary |
//! | [2, 10)   | Epic      |
//! | [10, 25)  | Rare      |
//! | [25, 50)  | Uncommon  |
//! | [50, 100) | Common    |
//!
//! While a catch bonus is active the draw is halved before mapping, which
//! doubles the cumulative chance of every non-Common bracket.

use super::catalog::roster;
use super::types::{CatchResult, FishSpecies, RarityTier};
use rand::Rng;

/// Exclusive upper bound of a draw.
pub const ROLL_MAX: f64 = 100.0;

/// Exclusive upper bound of each rare bracket, rarest first.
/// Anything at or above the last bound is Common.
const TIER_BRACKETS: [(f64, RarityTier); 4] = [
    (2.0, RarityTier::Legendary),
    (10.0, RarityTier::Epic),
    (25.0, RarityTier::Rare),
    (50.0, RarityTier::Uncommon),
];

/// What one roll produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollOutcome {
    pub catch: CatchResult,
    /// The draw after any bonus halving
    pub effective_roll: f64,
    /// True if this roll consumed a bonus cast
    pub boosted: bool,
}

/// Maps an effective roll onto its tier.
pub fn tier_for_roll(roll: f64) -> RarityTier {
    TIER_BRACKETS
        .iter()
        .find(|(upper, _)| roll < *upper)
        .map(|(_, tier)| *tier)
        .unwrap_or(RarityTier::Common)
}

/// Halves the draw and spends one bonus cast if any remain.
///
/// Returns the effective roll.
pub fn apply_bonus(draw: f64, bonus_remaining: &mut u32) -> f64 {
    if *bonus_remaining > 0 {
        *bonus_remaining -= 1;
        draw / 2.0
    } else {
        draw
    }
}

/// Uniform pick from a tier's roster.
pub fn pick_species(tier: RarityTier, rng: &mut impl Rng) -> &'static FishSpecies {
    let names = roster(tier);
    &names[rng.gen_range(0..names.len())]
}

/// Rolls a catch, consuming a bonus cast when one is active.
pub fn roll_catch(bonus_remaining: &mut u32, rng: &mut impl Rng) -> RollOutcome {
    let draw: f64 = rng.gen_range(0.0..ROLL_MAX);
    roll_catch_with_draw(draw, bonus_remaining, rng)
}

/// Same as [`roll_catch`] with the tier draw supplied by the caller.
/// The species pick still uses `rng`.
pub fn roll_catch_with_draw(
    draw: f64,
    bonus_remaining: &mut u32,
    rng: &mut impl Rng,
) -> RollOutcome {
    let boosted = *bonus_remaining > 0;
    let effective_roll = apply_bonus(draw, bonus_remaining);
    let tier = tier_for_roll(effective_roll);
    let species = pick_species(tier, rng);

    if boosted {
        log::debug!(
            "bonus roll {:.2} -> {:.2} ({}), {} bonus casts left",
            draw,
            effective_roll,
            tier,
            bonus_remaining
        );
    }

    RollOutcome {
        catch: CatchResult::of(species),
        effective_roll,
        boosted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(tier_for_roll(0.0), RarityTier::Legendary);
        assert_eq!(tier_for_roll(1.999), RarityTier::Legendary);
        assert_eq!(tier_for_roll(2.0), RarityTier::Epic);
        assert_eq!(tier_for_roll(9.999), RarityTier::Epic);
        assert_eq!(tier_for_roll(10.0), RarityTier::Rare);
        assert_eq!(tier_for_roll(24.999), RarityTier::Rare);
        assert_eq!(tier_for_roll(25.0), RarityTier::Uncommon);
        assert_eq!(tier_for_roll(49.999), RarityTier::Uncommon);
        assert_eq!(tier_for_roll(50.0), RarityTier::Common);
        assert_eq!(tier_for_roll(99.999), RarityTier::Common);
    }

    #[test]
    fn test_bonus_halves_roll_and_decrements() {
        let mut rng = create_test_rng();
        let mut bonus = 1;
        let outcome = roll_catch_with_draw(40.0, &mut bonus, &mut rng);
        assert_eq!(outcome.effective_roll, 20.0);
        assert_eq!(outcome.catch.tier, RarityTier::Rare);
        assert!(outcome.boosted);
        assert_eq!(bonus, 0);
    }

    #[test]
    fn test_no_bonus_keeps_roll() {
        let mut rng = create_test_rng();
        let mut bonus = 0;
        let outcome = roll_catch_with_draw(40.0, &mut bonus, &mut rng);
        assert_eq!(outcome.effective_roll, 40.0);
        assert_eq!(outcome.catch.tier, RarityTier::Uncommon);
        assert!(!outcome.boosted);
        assert_eq!(bonus, 0);
    }

    #[test]
    fn test_species_belongs_to_rolled_tier() {
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let mut bonus = 0;
            let outcome = roll_catch(&mut bonus, &mut rng);
            let species = crate::fishing::catalog::find_species(outcome.catch.species)
                .expect("rolled species is in the catalog");
            assert_eq!(species.tier, outcome.catch.tier);
            assert_eq!(outcome.catch.color, outcome.catch.tier.fish_color());
        }
    }

    #[test]
    fn test_distribution_roughly_matches_brackets() {
        let mut rng = create_test_rng();
        let mut counts = [0u32; 5];
        let trials = 20_000;
        for _ in 0..trials {
            let mut bonus = 0;
            counts[roll_catch(&mut bonus, &mut rng).catch.tier as usize] += 1;
        }
        let pct = |tier: RarityTier| counts[tier as usize] as f64 / trials as f64 * 100.0;
        assert!((pct(RarityTier::Common) - 50.0).abs() < 2.0);
        assert!((pct(RarityTier::Uncommon) - 25.0).abs() < 2.0);
        assert!((pct(RarityTier::Rare) - 15.0).abs() < 2.0);
        assert!((pct(RarityTier::Epic) - 8.0).abs() < 1.5);
        assert!((pct(RarityTier::Legendary) - 2.0).abs() < 1.0);
    }

    #[test]
    fn test_bonus_never_lands_common() {
        let mut rng = create_test_rng();
        let trials = 20_000;
        let mut non_common = 0u32;
        for _ in 0..trials {
            let mut bonus = 1;
            if roll_catch(&mut bonus, &mut rng).catch.tier != RarityTier::Common {
                non_common += 1;
            }
        }
        // Halving maps every draw below 100 into [0, 50): nothing is Common
        assert_eq!(non_common, trials);
    }
}
