use super::rgb;
use crate::app::{App, Popup};
use lakeside::input::CastKeyMode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Catch of the Day banner, bonus tracker and today's cast count.
pub fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let progress = app.resolver.progression();
    let cotd = app.resolver.catch_of_the_day();

    let mut banner = vec![
        Span::raw("🎯 Catch of the Day: "),
        Span::styled(
            cotd.name,
            Style::default()
                .fg(rgb(cotd.color))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if progress.cotd_caught {
        banner.push(Span::raw(" ✅"));
    }

    let bonus = match progress.bonus_tracker_text() {
        Some(text) => Span::styled(text, Style::default().fg(Color::LightRed)),
        None => Span::styled("No bonus active", Style::default().fg(Color::DarkGray)),
    };

    let counts = Line::from(vec![
        Span::raw(format!("Casts today: {}", progress.casts_today)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "Journal: {}/{} species",
            app.journal.discovered, app.journal.total_species
        )),
    ]);

    let status = Paragraph::new(vec![Line::from(banner), Line::from(bonus), counts]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .title(format!(" Lakeside - {} ", progress.date)),
    );
    frame.render_widget(status, area);
}

/// Catch popup, centered near the top of `area`.
pub fn draw_popup(frame: &mut Frame, area: Rect, popup: &Popup) {
    let width = (popup.text.chars().count() as u16 + 4)
        .min(area.width.saturating_sub(2))
        .max(10);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + 1,
        width: width.min(area.width),
        height: 3.min(area.height),
    };

    frame.render_widget(Clear, popup_area);
    let paragraph = Paragraph::new(Span::styled(
        popup.text.as_str(),
        Style::default()
            .fg(rgb(popup.color))
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let cast_help = match app.cast_mode() {
        CastKeyMode::Hold => "[F] hold to fish",
        CastKeyMode::Toggle => "[F] cast / reel in",
    };
    let help = format!(
        "[WASD] move  [←/→ Q/E] turn  {}  [J] journal  [Esc] quit",
        cast_help
    );
    let footer = Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
