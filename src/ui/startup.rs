//! Boot scene: four markers orbiting a filled center orb
//!
//! Drawn on a Braille canvas in scene units, with the two label lines
//! rendered as ordinary centered text below the orb.

use crate::core::startup::{RotationState, MARKER_RADIUS, ORB_RADIUS};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Paragraph, Widget,
    },
};

/// Vertical extent of the scene in canvas units; horizontal extent is
/// scaled so a circle stays round despite 1:2 terminal cells.
const SCENE_HALF_HEIGHT: f64 = 200.0;

pub fn render(rotation: &RotationState, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    Block::default()
        .style(Style::default().bg(theme.scene_background))
        .render(area, buf);

    let aspect = f64::from(area.width) / (f64::from(area.height) * 2.0);
    let half_width = SCENE_HALF_HEIGHT * aspect.max(1.0);

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-half_width, half_width])
        .y_bounds([-SCENE_HALF_HEIGHT, SCENE_HALF_HEIGHT])
        .paint(|ctx| {
            for (x, y) in rotation.marker_positions() {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: MARKER_RADIUS,
                    color: theme.marker,
                });
            }

            // Concentric circles give the orb a filled look on Braille dots
            let mut r = 2.0;
            while r < ORB_RADIUS {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: r,
                    color: theme.orb_fill,
                });
                r += 2.0;
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: ORB_RADIUS,
                color: theme.orb_outline,
            });
        })
        .render(area, buf);

    // Labels sit below the orb, like the original scene
    let title_row = area.y + area.height / 2 + area.height / 6;
    if title_row < area.y + area.height {
        let row = Rect::new(area.x, title_row, area.width, 1);
        Paragraph::new("Orbdeck")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.title_text))
            .render(row, buf);
    }
    let subtitle_row = title_row + 2;
    if subtitle_row < area.y + area.height {
        let row = Rect::new(area.x, subtitle_row, area.width, 1);
        Paragraph::new("Welcome")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.subtitle_text))
            .render(row, buf);
    }
}
