//! Fishing: species, rarity rolls, cast validation, and catch resolution.

pub mod cast;
pub mod catalog;
pub mod cotd;
pub mod effects;
pub mod rarity;
pub mod resolver;
pub mod types;

pub use cast::{validate_cast, CastCheck, CastRules};
pub use cotd::{catch_of_the_day, catch_of_the_day_for, date_key};
pub use effects::{FishRise, LineSegment};
pub use resolver::{day_of, CastAttempt, CastPhase, CatchResolver, FishingEvent, FishingRules};
pub use types::*;
