mod app;
mod ui;

use app::{App, SessionResolver};
use chrono::Utc;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lakeside::core::constants::TICK_INTERVAL_MS;
use lakeside::core::{logging, GameConfig};
use lakeside::fishing::{day_of, CatchResolver};
use lakeside::input::CastKeyMode;
use lakeside::journal::LedgerSaveManager;
use lakeside::leaderboard::{CatchReporter, HttpLeaderboard, LogOnlyReporter};
use lakeside::progression::DailyProgressionStore;
use lakeside::utils::build_info;
use lakeside::utils::persistence::{FileStore, KeyValueStore, MemoryStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "journal" => {
                logging::init_stderr_logger();
                match print_journal() {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("Could not read the journal: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Lakeside - Terminal Fishing\n");
                println!("Usage: lakeside [command]\n");
                println!("Commands:");
                println!("  journal    Print your fishing journal");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nIn game: WASD move, Left/Right or Q/E turn, F fish, J journal, Esc quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'lakeside --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    match logging::init_file_logger() {
        Ok(path) => log::info!("{}, logging to {}", build_info::version_line(), path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let config = GameConfig::load().unwrap_or_else(|e| {
        log::warn!("could not load config, using defaults: {}", e);
        let mut config = GameConfig::default();
        config.ensure_player_id();
        config
    });

    let today = day_of(Utc::now().timestamp_millis()).unwrap_or_else(|| Utc::now().date_naive());

    let store: Box<dyn KeyValueStore> = match FileStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("no data directory, progression won't persist: {}", e);
            Box::new(MemoryStore::new())
        }
    };

    let ledger_saver = match LedgerSaveManager::new() {
        Ok(saver) => Some(saver),
        Err(e) => {
            log::warn!("no data directory, journal won't persist: {}", e);
            None
        }
    };
    let ledger = ledger_saver
        .as_ref()
        .map(LedgerSaveManager::load_or_default)
        .unwrap_or_default();

    let reporter: Box<dyn CatchReporter> = match &config.leaderboard_url {
        Some(url) => Box::new(HttpLeaderboard::new(url.clone(), config.leaderboard_timeout())),
        None => Box::new(LogOnlyReporter),
    };

    let resolver: SessionResolver = CatchResolver::new(
        config.fishing_rules(),
        config.catch_area(),
        DailyProgressionStore::load(store, today),
        ledger,
        reporter,
        config.player_id(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    // Key releases are only reported with the enhancement protocol; without it
    // the cast key toggles.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let cast_mode = if enhanced {
        CastKeyMode::Hold
    } else {
        CastKeyMode::Toggle
    };
    log::debug!("cast key mode {:?}", cast_mode);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, resolver, cast_mode, ledger_saver);
    let result = run(&mut terminal, &mut app);

    app.save_ledger();

    // Restore terminal
    if enhanced {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    while !app.quit {
        terminal.draw(|frame| ui::draw_ui(frame, app))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                app.handle_key(key_event, Utc::now().timestamp_millis());
            }
        }

        if last_tick.elapsed() >= tick_interval {
            app.tick(Utc::now().timestamp_millis(), &mut rng);
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn print_journal() -> io::Result<()> {
    let ledger = LedgerSaveManager::new()?.load_or_default();
    for line in ui::journal_scene::plain_lines(&ledger.summarize()) {
        println!("{}", line);
    }
    Ok(())
}
