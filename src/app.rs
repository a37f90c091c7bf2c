//! Session state for the terminal front end.
//!
//! Translates key events into movement and cast edges, feeds the resolver,
//! and keeps what the renderer needs (line, rising fish, popup, journal) from the
//! events it returns.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use glam::Vec3;
use lakeside::core::constants::POPUP_DURATION_MS;
use lakeside::core::GameConfig;
use lakeside::fishing::{CatchResolver, FishingEvent, LineSegment};
use lakeside::input::{CastKey, CastKeyMode, KeyAction};
use lakeside::journal::{JournalSummary, LedgerSaveManager};
use lakeside::leaderboard::CatchReporter;
use lakeside::scene::{Actor, MoveDirection};
use lakeside::utils::persistence::KeyValueStore;
use rand::Rng;

pub type SessionResolver = CatchResolver<Box<dyn KeyValueStore>, Box<dyn CatchReporter>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lake,
    Journal,
}

/// A transient message over the lake view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub text: String,
    pub color: u32,
    pub expires_at_ms: i64,
}

/// The rising fish marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishMarker {
    pub position: Vec3,
    pub color: u32,
}

const NOTICE_COLOR: u32 = 0xffffff;

pub struct App {
    pub config: GameConfig,
    pub actor: Actor,
    pub resolver: SessionResolver,
    pub screen: Screen,
    pub line: Option<LineSegment>,
    pub fish: Option<FishMarker>,
    pub popup: Option<Popup>,
    /// Ledger summary, refreshed on each catch
    pub journal: JournalSummary,
    /// First visible journal line
    pub journal_scroll: u16,
    pub quit: bool,
    cast_key: CastKey,
    ledger_saver: Option<LedgerSaveManager>,
}

impl App {
    pub fn new(
        config: GameConfig,
        resolver: SessionResolver,
        cast_mode: CastKeyMode,
        ledger_saver: Option<LedgerSaveManager>,
    ) -> Self {
        let actor = config.start_actor();
        let journal = resolver.ledger().summarize();
        Self {
            config,
            actor,
            resolver,
            screen: Screen::Lake,
            line: None,
            fish: None,
            popup: None,
            journal,
            journal_scroll: 0,
            quit: false,
            cast_key: CastKey::new(cast_mode),
            ledger_saver,
        }
    }

    pub fn cast_mode(&self) -> CastKeyMode {
        self.cast_key.mode()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now_ms: i64) {
        let action = match key.kind {
            KeyEventKind::Press => KeyAction::Press,
            KeyEventKind::Repeat => KeyAction::Repeat,
            KeyEventKind::Release => KeyAction::Release,
        };

        // The cast key is handled on every screen so a hold released while
        // the journal is open still cancels.
        if let KeyCode::Char('f') | KeyCode::Char('F') = key.code {
            let casting = self.resolver.is_casting();
            if let Some(input) = self.cast_key.edge(action, casting) {
                let events = self.resolver.handle_input(input, &self.actor, now_ms);
                self.apply(events, now_ms);
            }
            return;
        }

        if action == KeyAction::Release {
            return;
        }

        match key.code {
            KeyCode::Esc if action == KeyAction::Press => match self.screen {
                Screen::Journal => self.screen = Screen::Lake,
                Screen::Lake => self.quit = true,
            },
            KeyCode::Char('j') | KeyCode::Char('J') if action == KeyAction::Press => {
                self.screen = match self.screen {
                    Screen::Lake => Screen::Journal,
                    Screen::Journal => Screen::Lake,
                };
            }
            KeyCode::Up if self.screen == Screen::Journal => {
                self.journal_scroll = self.journal_scroll.saturating_sub(1)
            }
            KeyCode::Down if self.screen == Screen::Journal => {
                self.journal_scroll = self.journal_scroll.saturating_add(1)
            }
            _ if self.screen == Screen::Journal => {}
            KeyCode::Char('w') | KeyCode::Char('W') => self.step(MoveDirection::North),
            KeyCode::Char('s') | KeyCode::Char('S') => self.step(MoveDirection::South),
            KeyCode::Char('a') | KeyCode::Char('A') => self.step(MoveDirection::West),
            KeyCode::Char('d') | KeyCode::Char('D') => self.step(MoveDirection::East),
            KeyCode::Left | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.actor.turn(self.config.turn_step)
            }
            KeyCode::Right | KeyCode::Char('e') | KeyCode::Char('E') => {
                self.actor.turn(-self.config.turn_step)
            }
            _ => {}
        }
    }

    fn step(&mut self, direction: MoveDirection) {
        self.actor.step(direction, self.config.player_speed);
    }

    pub fn tick(&mut self, now_ms: i64, rng: &mut impl Rng) {
        let events = self.resolver.tick(&self.actor, now_ms, rng);
        self.apply(events, now_ms);

        if self
            .popup
            .as_ref()
            .is_some_and(|popup| now_ms >= popup.expires_at_ms)
        {
            self.popup = None;
        }
    }

    fn show_popup(&mut self, text: impl Into<String>, color: u32, now_ms: i64) {
        self.popup = Some(Popup {
            text: text.into(),
            color,
            expires_at_ms: now_ms + POPUP_DURATION_MS,
        });
    }

    /// Updates the view state from resolver events.
    pub fn apply(&mut self, events: Vec<FishingEvent>, now_ms: i64) {
        for event in events {
            match event {
                FishingEvent::CannotCastHere => {
                    self.show_popup("You must be facing the water to fish!", NOTICE_COLOR, now_ms)
                }
                FishingEvent::LineShown(line) | FishingEvent::LineMoved(line) => {
                    self.line = Some(line)
                }
                FishingEvent::LineRemoved => self.line = None,
                FishingEvent::CastCancelled => {
                    self.show_popup("Reeled in too early.", NOTICE_COLOR, now_ms)
                }
                FishingEvent::FishCaught { catch, message } => {
                    self.show_popup(message, catch.color, now_ms);
                    self.journal = self.resolver.ledger().summarize();
                    self.save_ledger();
                }
                FishingEvent::CatchOfTheDay { .. } | FishingEvent::BonusChanged { .. } => {}
                FishingEvent::FishSpawned { position, color } => {
                    self.fish = Some(FishMarker { position, color })
                }
                FishingEvent::FishMoved { position } => {
                    if let Some(fish) = self.fish.as_mut() {
                        fish.position = position;
                    }
                }
                FishingEvent::FishRemoved => self.fish = None,
                FishingEvent::NewDay { catch_of_the_day } => self.show_popup(
                    format!("A new day at the lake! Catch of the Day: {}", catch_of_the_day),
                    NOTICE_COLOR,
                    now_ms,
                ),
            }
        }
    }

    /// Writes the ledger file. Failures are logged.
    pub fn save_ledger(&self) {
        let Some(saver) = &self.ledger_saver else {
            return;
        };
        if let Err(e) = saver.save(self.resolver.ledger()) {
            log::error!("could not save {}: {}", saver.path().display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use glam::Vec2;
    use lakeside::journal::CollectionLedger;
    use lakeside::leaderboard::LogOnlyReporter;
    use lakeside::progression::DailyProgressionStore;
    use lakeside::utils::persistence::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NOON_MS: i64 = 1_744_286_400_000; // 2025-04-10T12:00:00Z

    fn app(mode: CastKeyMode) -> App {
        let config = GameConfig::default();
        let today = lakeside::fishing::day_of(NOON_MS).unwrap();
        let backend: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let reporter: Box<dyn CatchReporter> = Box::new(LogOnlyReporter);
        let resolver = CatchResolver::new(
            config.fishing_rules(),
            config.catch_area(),
            DailyProgressionStore::load(backend, today),
            CollectionLedger::new(),
            reporter,
            "angler-1",
        );
        App::new(config, resolver, mode, None)
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_hold_and_release_cancels() {
        let mut app = app(CastKeyMode::Hold);
        app.handle_key(key(KeyCode::Char('f'), KeyEventKind::Press), NOON_MS);
        assert!(app.line.is_some());
        app.handle_key(key(KeyCode::Char('f'), KeyEventKind::Release), NOON_MS + 1000);
        assert!(app.line.is_none());
        assert!(app.resolver.is_idle());
        assert!(app.resolver.ledger().is_empty());
    }

    #[test]
    fn test_toggle_catch_shows_popup() {
        let mut app = app(CastKeyMode::Toggle);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        app.handle_key(key(KeyCode::Char('f'), KeyEventKind::Press), NOON_MS);
        app.tick(NOON_MS + 5000, &mut rng);

        let popup = app.popup.clone().expect("catch popup");
        assert!(popup.text.starts_with("🎣 You caught a"));
        assert_eq!(popup.expires_at_ms, NOON_MS + 5000 + POPUP_DURATION_MS);
        assert!(app.fish.is_some());
        assert_eq!(app.resolver.ledger().len(), 1);

        app.tick(NOON_MS + 5000 + POPUP_DURATION_MS, &mut rng);
        assert!(app.popup.is_none());
    }

    #[test]
    fn test_journal_summary_follows_catches() {
        let mut app = app(CastKeyMode::Toggle);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(app.journal.discovered, 0);
        assert_eq!(app.journal.total_species, 43);

        app.handle_key(key(KeyCode::Char('f'), KeyEventKind::Press), NOON_MS);
        app.tick(NOON_MS + 1000, &mut rng);
        assert_eq!(app.journal.discovered, 0);

        app.tick(NOON_MS + 5000, &mut rng);
        assert_eq!(app.journal.discovered, 1);
        let caught: u32 = app.journal.sections.iter().map(|s| s.caught_total).sum();
        assert_eq!(caught, 1);
        assert_eq!(app.journal, app.resolver.ledger().summarize());
    }

    #[test]
    fn test_turning_away_blocks_cast() {
        let mut app = app(CastKeyMode::Toggle);
        for _ in 0..16 {
            app.handle_key(key(KeyCode::Left, KeyEventKind::Press), NOON_MS);
        }
        app.handle_key(key(KeyCode::Char('f'), KeyEventKind::Press), NOON_MS);
        assert!(app.resolver.is_idle());
        assert_eq!(
            app.popup.as_ref().map(|p| p.text.as_str()),
            Some("You must be facing the water to fish!")
        );
    }

    #[test]
    fn test_movement_and_screens() {
        let mut app = app(CastKeyMode::Hold);
        let start = app.actor.ground();
        app.handle_key(key(KeyCode::Char('w'), KeyEventKind::Press), NOON_MS);
        assert_eq!(app.actor.ground(), start + Vec2::new(0.0, -0.5));

        app.handle_key(key(KeyCode::Char('j'), KeyEventKind::Press), NOON_MS);
        assert_eq!(app.screen, Screen::Journal);
        app.handle_key(key(KeyCode::Char('w'), KeyEventKind::Press), NOON_MS);
        assert_eq!(app.actor.ground(), start + Vec2::new(0.0, -0.5));

        app.handle_key(key(KeyCode::Esc, KeyEventKind::Press), NOON_MS);
        assert_eq!(app.screen, Screen::Lake);
        assert!(!app.quit);
        app.handle_key(key(KeyCode::Esc, KeyEventKind::Press), NOON_MS);
        assert!(app.quit);
    }
}
