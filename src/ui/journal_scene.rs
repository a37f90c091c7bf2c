//! Fishing journal: every species by tier, undiscovered ones hidden.

use super::rgb;
use lakeside::journal::{JournalEntry, JournalSummary};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn entry_line(entry: &JournalEntry) -> Line<'static> {
    let name_style = if entry.discovered() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(entry.display_name(), name_style),
    ];
    if entry.discovered() {
        spans.push(Span::styled(
            format!(" x{}", entry.count),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(Span::styled(
        format!(" - {}", entry.display_lore()),
        Style::default().fg(Color::Gray),
    ));
    Line::from(spans)
}

fn journal_lines(summary: &JournalSummary) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in &summary.sections {
        lines.push(Line::from(vec![
            Span::styled(
                section.tier.name(),
                Style::default()
                    .fg(rgb(section.tier.journal_color()))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({} caught)", section.caught_total),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.extend(section.entries.iter().map(entry_line));
        lines.push(Line::from(""));
    }
    lines
}

pub fn draw_journal(frame: &mut Frame, area: Rect, summary: &JournalSummary, scroll: u16) {
    let lines = journal_lines(summary);
    let visible = area.height.saturating_sub(2);
    let max_scroll = (lines.len() as u16).saturating_sub(visible);

    let journal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(format!(
                    " 📘 Fishing Journal ({}/{} discovered) [↑/↓] scroll ",
                    summary.discovered, summary.total_species
                )),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));
    frame.render_widget(journal, area);
}

/// Plain-text journal for `lakeside journal`.
pub fn plain_lines(summary: &JournalSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Fishing Journal: {}/{} species discovered",
        summary.discovered, summary.total_species
    )];
    for section in &summary.sections {
        lines.push(String::new());
        lines.push(format!("{} ({} caught)", section.tier, section.caught_total));
        for entry in &section.entries {
            if entry.discovered() {
                lines.push(format!(
                    "  {} x{} - {}",
                    entry.display_name(),
                    entry.count,
                    entry.display_lore()
                ));
            } else {
                lines.push(format!("  {} - {}", entry.display_name(), entry.display_lore()));
            }
        }
    }
    lines
}
