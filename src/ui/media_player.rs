//! Simulated media player overlay
//!
//! Toggled from the bottom bar. Display only: it never takes keyboard
//! focus, and clicks inside it are swallowed.

use crate::theme::AppTheme;
use crate::ui::rect_contains;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub struct MediaPlayerWindow {
    window_rect: Option<Rect>,
}

impl MediaPlayerWindow {
    pub fn new() -> Self {
        Self { window_rect: None }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.window_rect
            .is_some_and(|rect| rect_contains(rect, x, y))
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        self.window_rect = None;

        let width = 40u16.min(area.width.saturating_sub(2));
        let height = 6u16;
        if width < 24 || area.height < height + 2 {
            return;
        }

        // Lower-left corner, clear of the centered media button
        let rect = Rect::new(area.x + 2, area.y + area.height - height - 1, width, height);

        Clear.render(rect, buf);
        Block::default()
            .borders(Borders::ALL)
            .style(
                Style::default()
                    .fg(theme.window_text)
                    .bg(theme.window_background),
            )
            .border_style(Style::default().fg(theme.window_border))
            .render(rect, buf);

        let title_row = Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, 1);
        Paragraph::new("Media Player")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.window_title))
            .render(title_row, buf);

        let info_row = Rect::new(rect.x + 1, rect.y + 3, rect.width - 2, 1);
        Paragraph::new("(Simulated Player)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.accent_text))
            .render(info_row, buf);

        self.window_rect = Some(rect);
    }
}

impl Default for MediaPlayerWindow {
    fn default() -> Self {
        Self::new()
    }
}
