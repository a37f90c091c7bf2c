//! Cast validation: the line has to land in the lake and the player has to
//! be facing it.

use crate::core::constants::{CAST_DISTANCE, FACING_THRESHOLD};
use crate::scene::{Actor, CatchArea};

/// Cast geometry settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastRules {
    /// How far ahead of the actor the line lands
    pub cast_distance: f32,
    /// Minimum dot product between forward and the direction to the center
    pub facing_threshold: f32,
}

impl Default for CastRules {
    fn default() -> Self {
        Self {
            cast_distance: CAST_DISTANCE,
            facing_threshold: FACING_THRESHOLD,
        }
    }
}

/// Outcome of checking one cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastCheck {
    pub lands_in_area: bool,
    pub facing_score: f32,
    pub passed: bool,
}

/// Checks whether a cast from `actor` lands inside `area` while facing it.
///
/// An actor standing exactly on the center has no direction to face and
/// scores zero.
pub fn validate_cast(actor: &Actor, area: &CatchArea, rules: &CastRules) -> CastCheck {
    let landing = actor.point_ahead(rules.cast_distance);
    let lands_in_area = area.contains(landing);

    let to_center = (area.center - actor.ground()).normalize_or_zero();
    let facing_score = to_center.dot(actor.forward());

    CastCheck {
        lands_in_area,
        facing_score,
        passed: lands_in_area && facing_score >= rules.facing_threshold,
    }
}
