//! Terminal rendering for the lake session.

mod hud;
pub mod journal_scene;
mod lake_scene;

use crate::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};

/// Converts a `0xRRGGBB` color.
pub fn rgb(color: u32) -> Color {
    Color::Rgb(
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Catch of the Day, bonus, casts
            Constraint::Min(8),    // Lake or journal
            Constraint::Length(1), // Key help
        ])
        .split(frame.size());

    hud::draw_status(frame, chunks[0], app);

    match app.screen {
        Screen::Lake => {
            lake_scene::draw_lake(frame, chunks[1], app);
            if let Some(popup) = &app.popup {
                hud::draw_popup(frame, chunks[1], popup);
            }
        }
        Screen::Journal => {
            journal_scene::draw_journal(frame, chunks[1], &app.journal, app.journal_scroll)
        }
    }

    hud::draw_footer(frame, chunks[2], app);
}
