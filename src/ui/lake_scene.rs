//! Top-down view of the lake.
//!
//! World `(x, z)` maps to canvas `(x, -z)` so north (`-z`) is up.

use super::rgb;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    Frame,
};

/// Length of the facing indicator, world units
const FACING_MARKER: f64 = 3.0;
/// Margin around the lake in the view, world units
const VIEW_MARGIN: f64 = 10.0;

/// Canvas bounds that keep circles round on ~1:2 terminal cells.
fn view_bounds(area: Rect, center: (f64, f64), extent: f64) -> ([f64; 2], [f64; 2]) {
    let cols = f64::from(area.width.max(1));
    let rows = f64::from(area.height.max(1)) * 2.0;
    let (half_x, half_y) = if cols >= rows {
        (extent * cols / rows, extent)
    } else {
        (extent, extent * rows / cols)
    };
    (
        [center.0 - half_x, center.0 + half_x],
        [center.1 - half_y, center.1 + half_y],
    )
}

pub fn draw_lake(frame: &mut Frame, area: Rect, app: &App) {
    let lake = app.resolver.area();
    let center = (f64::from(lake.center.x), -f64::from(lake.center.y));
    let radius = f64::from(lake.radius);

    let player = app.actor.ground();
    let player = (f64::from(player.x), -f64::from(player.y));
    let extent = (radius + VIEW_MARGIN).max(
        (player.0 - center.0)
            .abs()
            .max((player.1 - center.1).abs())
            + VIEW_MARGIN,
    );

    let (x_bounds, y_bounds) = view_bounds(area, center, extent);

    let facing = app.actor.point_ahead(FACING_MARKER as f32);
    let line = app.line;
    let fish = app.fish;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: center.0,
                y: center.1,
                radius,
                color: Color::Blue,
            });
            for ring in [0.66, 0.33] {
                ctx.draw(&Circle {
                    x: center.0,
                    y: center.1,
                    radius: radius * ring,
                    color: Color::Rgb(20, 40, 90),
                });
            }
            ctx.layer();

            if let Some(line) = line {
                ctx.draw(&CanvasLine {
                    x1: f64::from(line.start.x),
                    y1: -f64::from(line.start.z),
                    x2: f64::from(line.end.x),
                    y2: -f64::from(line.end.z),
                    color: Color::White,
                });
            }

            ctx.draw(&CanvasLine {
                x1: player.0,
                y1: player.1,
                x2: f64::from(facing.x),
                y2: -f64::from(facing.y),
                color: Color::Yellow,
            });

            if let Some(fish) = fish {
                // The splash grows as the fish rises
                ctx.draw(&Circle {
                    x: f64::from(fish.position.x),
                    y: -f64::from(fish.position.z),
                    radius: 0.5 + f64::from(fish.position.y) * 0.4,
                    color: rgb(fish.color),
                });
                ctx.print(
                    f64::from(fish.position.x),
                    -f64::from(fish.position.z),
                    Span::styled(
                        "><>",
                        Style::default()
                            .fg(rgb(fish.color))
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }

            ctx.print(
                player.0,
                player.1,
                Span::styled(
                    "@",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        });

    frame.render_widget(canvas, area);
}
