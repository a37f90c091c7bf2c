//! Catch resolution: the cast/catch state machine.
//!
//! # Phases
//! 1. **Idle** - waiting for a cast. A cast that fails validation leaves the
//!    resolver here and emits [`FishingEvent::CannotCastHere`].
//! 2. **Casting** - the line is out. Releasing before the wait elapses
//!    cancels with no reward; otherwise the tick that sees the wait elapse
//!    resolves the catch.
//! 3. **Resolving** - the catch has been rolled, recorded and persisted; the
//!    fish rises out of the water. Returns to Idle once it reaches its target.
//!
//! Only one cast exists at a time. Cast requests outside Idle are ignored.

use super::cast::{validate_cast, CastRules};
use super::cotd::catch_of_the_day;
use super::effects::{FishRise, LineSegment};
use super::rarity::roll_catch;
use super::types::{CatchResult, FishSpecies};
use crate::core::constants::{
    CATCH_WEIGHT, COTD_BONUS_CASTS, DEFAULT_WAIT_SECS, FISH_RISE_PER_TICK, FISH_RISE_TARGET,
    FORCED_COTD_CAST, LINE_LENGTH,
};
use crate::input::CastInput;
use crate::journal::CollectionLedger;
use crate::leaderboard::{CatchReporter, RecordCatch};
use crate::progression::{DailyProgressionState, DailyProgressionStore};
use crate::scene::{Actor, CatchArea};
use crate::utils::persistence::KeyValueStore;
use chrono::{DateTime, NaiveDate};
use glam::Vec3;
use rand::Rng;

/// Tunables for the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishingRules {
    /// Time the line has to stay out before a fish bites
    pub wait_ms: i64,
    /// Cast number on which the Catch of the Day is guaranteed
    pub forced_cotd_cast: u32,
    /// Bonus casts granted for landing the Catch of the Day
    pub cotd_bonus_casts: u32,
    pub line_length: f32,
    pub fish_rise_per_tick: f32,
    pub fish_rise_target: f32,
    /// Leaderboard increment per catch
    pub catch_weight: u32,
    pub cast: CastRules,
}

impl Default for FishingRules {
    fn default() -> Self {
        Self {
            wait_ms: (DEFAULT_WAIT_SECS * 1000.0) as i64,
            forced_cotd_cast: FORCED_COTD_CAST,
            cotd_bonus_casts: COTD_BONUS_CASTS,
            line_length: LINE_LENGTH,
            fish_rise_per_tick: FISH_RISE_PER_TICK,
            fish_rise_target: FISH_RISE_TARGET,
            catch_weight: CATCH_WEIGHT,
            cast: CastRules::default(),
        }
    }
}

/// Something the presentation layer should show or remove.
#[derive(Debug, Clone, PartialEq)]
pub enum FishingEvent {
    /// Cast rejected: not facing the water
    CannotCastHere,
    LineShown(LineSegment),
    LineMoved(LineSegment),
    LineRemoved,
    /// Released before a bite; nothing was caught
    CastCancelled,
    FishCaught {
        catch: CatchResult,
        message: String,
    },
    /// The day's featured species was landed for the first time
    CatchOfTheDay {
        species: &'static str,
        bonus_casts: u32,
    },
    BonusChanged {
        remaining: u32,
    },
    FishSpawned {
        position: Vec3,
        color: u32,
    },
    FishMoved {
        position: Vec3,
    },
    FishRemoved,
    NewDay {
        catch_of_the_day: &'static str,
    },
}

/// A single cast, from the moment the line goes out until its fish is landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastAttempt {
    pub started_at_ms: i64,
    pub resolved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CastPhase {
    Idle,
    Casting(CastAttempt),
    Resolving { attempt: CastAttempt, fish: FishRise },
}

/// Drives casts for one player session.
pub struct CatchResolver<S: KeyValueStore, R: CatchReporter> {
    rules: FishingRules,
    area: CatchArea,
    progression: DailyProgressionStore<S>,
    ledger: CollectionLedger,
    reporter: R,
    player_id: String,
    catch_of_the_day: &'static FishSpecies,
    phase: CastPhase,
}

/// UTC calendar day of a millisecond timestamp.
pub fn day_of(now_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(now_ms).map(|dt| dt.date_naive())
}

impl<S: KeyValueStore, R: CatchReporter> CatchResolver<S, R> {
    pub fn new(
        rules: FishingRules,
        area: CatchArea,
        progression: DailyProgressionStore<S>,
        ledger: CollectionLedger,
        reporter: R,
        player_id: impl Into<String>,
    ) -> Self {
        let catch_of_the_day = catch_of_the_day(progression.date());
        Self {
            rules,
            area,
            progression,
            ledger,
            reporter,
            player_id: player_id.into(),
            catch_of_the_day,
            phase: CastPhase::Idle,
        }
    }

    pub fn phase(&self) -> &CastPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, CastPhase::Idle)
    }

    /// True while a cast can still be cancelled.
    pub fn is_casting(&self) -> bool {
        matches!(self.phase, CastPhase::Casting(_))
    }

    pub fn progression(&self) -> &DailyProgressionState {
        self.progression.state()
    }

    pub fn progression_store(&self) -> &DailyProgressionStore<S> {
        &self.progression
    }

    pub fn ledger(&self) -> &CollectionLedger {
        &self.ledger
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn catch_of_the_day(&self) -> &'static FishSpecies {
        self.catch_of_the_day
    }

    pub fn area(&self) -> &CatchArea {
        &self.area
    }

    pub fn rules(&self) -> &FishingRules {
        &self.rules
    }

    /// Routes an input edge.
    pub fn handle_input(
        &mut self,
        input: CastInput,
        actor: &Actor,
        now_ms: i64,
    ) -> Vec<FishingEvent> {
        match input {
            CastInput::Start => self.start_cast(actor, now_ms),
            CastInput::Release => self.release_cast(now_ms),
        }
    }

    /// Idle -> Casting if the cast is valid.
    pub fn start_cast(&mut self, actor: &Actor, now_ms: i64) -> Vec<FishingEvent> {
        if !self.is_idle() {
            log::debug!("cast ignored, already {:?}", self.phase);
            return Vec::new();
        }

        let check = validate_cast(actor, &self.area, &self.rules.cast);
        if !check.passed {
            log::debug!(
                "cast rejected (in area: {}, facing {:.2})",
                check.lands_in_area,
                check.facing_score
            );
            return vec![FishingEvent::CannotCastHere];
        }

        self.phase = CastPhase::Casting(CastAttempt {
            started_at_ms: now_ms,
            resolved: false,
        });
        log::debug!("line cast at {}", now_ms);
        vec![FishingEvent::LineShown(LineSegment::from_actor(
            actor,
            self.rules.line_length,
        ))]
    }

    /// Casting -> Idle if the wait hasn't elapsed yet.
    ///
    /// Once the wait is over the fish is earned and the next tick resolves it.
    pub fn release_cast(&mut self, now_ms: i64) -> Vec<FishingEvent> {
        match self.phase {
            CastPhase::Casting(attempt) if now_ms - attempt.started_at_ms < self.rules.wait_ms => {
                self.phase = CastPhase::Idle;
                log::debug!("cast cancelled after {}ms", now_ms - attempt.started_at_ms);
                vec![FishingEvent::LineRemoved, FishingEvent::CastCancelled]
            }
            _ => Vec::new(),
        }
    }

    /// Per-frame update.
    pub fn tick(&mut self, actor: &Actor, now_ms: i64, rng: &mut impl Rng) -> Vec<FishingEvent> {
        match self.phase {
            CastPhase::Idle => Vec::new(),
            CastPhase::Casting(attempt) => {
                if now_ms - attempt.started_at_ms >= self.rules.wait_ms {
                    self.resolve(attempt, actor, now_ms, rng)
                } else {
                    vec![FishingEvent::LineMoved(LineSegment::from_actor(
                        actor,
                        self.rules.line_length,
                    ))]
                }
            }
            CastPhase::Resolving { attempt, mut fish } => {
                if fish.advance() {
                    self.phase = CastPhase::Idle;
                    vec![FishingEvent::FishRemoved]
                } else {
                    self.phase = CastPhase::Resolving { attempt, fish };
                    vec![FishingEvent::FishMoved {
                        position: fish.position,
                    }]
                }
            }
        }
    }

    /// Casting -> Resolving. Rolls, records, persists and reports one catch.
    fn resolve(
        &mut self,
        mut attempt: CastAttempt,
        actor: &Actor,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> Vec<FishingEvent> {
        debug_assert!(!attempt.resolved, "cast attempt resolved twice");
        if attempt.resolved {
            log::error!("cast attempt resolved twice, ignoring");
            return Vec::new();
        }
        attempt.resolved = true;

        let mut events = vec![FishingEvent::LineRemoved];

        if let Some(today) = day_of(now_ms) {
            if self.progression.roll_over(today) {
                self.catch_of_the_day = catch_of_the_day(self.progression.date());
                events.push(FishingEvent::NewDay {
                    catch_of_the_day: self.catch_of_the_day.name,
                });
            }
        }

        let cotd = self.catch_of_the_day;
        let rules = self.rules;
        let state = self.progression.state_mut();

        state.casts_today = state.casts_today.saturating_add(1);

        let catch = if state.casts_today >= rules.forced_cotd_cast && !state.cotd_caught {
            log::info!(
                "cast {} without the Catch of the Day, guaranteeing {}",
                state.casts_today,
                cotd.name
            );
            CatchResult::of(cotd)
        } else {
            let outcome = roll_catch(&mut state.catch_bonus_remaining, rng);
            if outcome.boosted {
                events.push(FishingEvent::BonusChanged {
                    remaining: state.catch_bonus_remaining,
                });
            }
            outcome.catch
        };

        self.ledger.record(catch.species, catch.tier);

        let mut message = catch.catch_text();
        let mut cotd_landed = false;
        if catch.species == cotd.name && !state.cotd_caught {
            state.cotd_caught = true;
            state.catch_bonus_remaining = rules.cotd_bonus_casts;
            cotd_landed = true;
            message.push_str(&format!(
                " 🌟 It's the Catch of the Day! 2x odds for {} casts!",
                rules.cotd_bonus_casts
            ));
        }

        if let Err(e) = self.progression.save() {
            log::warn!("could not save daily progression: {}", e);
        }

        log::info!("caught {} {}", catch.tier, catch.species);
        events.push(FishingEvent::FishCaught { catch, message });
        if cotd_landed {
            events.push(FishingEvent::CatchOfTheDay {
                species: cotd.name,
                bonus_casts: rules.cotd_bonus_casts,
            });
            events.push(FishingEvent::BonusChanged {
                remaining: rules.cotd_bonus_casts,
            });
        }

        self.reporter.record_catch(RecordCatch {
            user_id: self.player_id.clone(),
            weight: rules.catch_weight,
        });

        let fish = FishRise::spawn(
            actor,
            rules.line_length,
            catch.color,
            rules.fish_rise_per_tick,
            rules.fish_rise_target,
        );
        events.push(FishingEvent::FishSpawned {
            position: fish.position,
            color: fish.color,
        });
        self.phase = CastPhase::Resolving { attempt, fish };

        events
    }
}
