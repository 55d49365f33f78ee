//! Full-screen shutdown notice

use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph, Widget},
};

pub fn render(area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    Block::default()
        .style(Style::default().bg(theme.scene_background))
        .render(area, buf);

    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    Paragraph::new("Shutting down...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.title_text))
        .render(row, buf);
}
