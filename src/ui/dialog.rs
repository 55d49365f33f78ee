//! Blocking informational popup
//!
//! Centered over the dashboard with the area behind it cleared, the way
//! every popup in this codebase is drawn. Dismissed with Enter, Esc, or a
//! click on the OK button.

use crate::theme::AppTheme;
use crate::ui::rect_contains;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub struct InfoDialog {
    title: &'static str,
    message: &'static str,
    ok_rect: Option<Rect>,
}

impl InfoDialog {
    pub fn new(title: &'static str, message: &'static str) -> Self {
        Self {
            title,
            message,
            ok_rect: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title
    }

    /// True when the pointer is over the OK button
    pub fn ok_at(&self, x: u16, y: u16) -> bool {
        self.ok_rect.is_some_and(|rect| rect_contains(rect, x, y))
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        self.ok_rect = None;

        let width = (self.message.len().max(self.title.len()) as u16 + 6)
            .max(24)
            .min(area.width);
        let height = 7u16.min(area.height);
        if width < 10 || height < 7 {
            return;
        }

        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        Clear.render(rect, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(self.title)
            .style(
                Style::default()
                    .fg(theme.window_text)
                    .bg(theme.window_background),
            )
            .border_style(Style::default().fg(theme.window_border))
            .render(rect, buf);

        let message_row = Rect::new(rect.x + 2, rect.y + 2, rect.width - 4, 1);
        Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.window_text))
            .render(message_row, buf);

        const OK_LABEL: &str = "[ OK ]";
        let ok = Rect::new(
            rect.x + (rect.width - OK_LABEL.len() as u16) / 2,
            rect.y + rect.height - 3,
            OK_LABEL.len() as u16,
            1,
        );
        Paragraph::new(OK_LABEL)
            .style(
                Style::default()
                    .fg(theme.button_text)
                    .bg(theme.button),
            )
            .render(ok, buf);
        self.ok_rect = Some(ok);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_button_is_clickable_after_render() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let mut dialog = InfoDialog::new("Shop", "Welcome to the store!");
        assert!(!dialog.ok_at(40, 12), "no rect before first render");

        dialog.render(area, &mut buf, &AppTheme::default());
        let ok = dialog.ok_rect.expect("button rendered");
        assert!(dialog.ok_at(ok.x, ok.y));
        assert!(!dialog.ok_at(0, 0));
    }

    #[test]
    fn render_into_a_too_small_area_is_a_no_op() {
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        let mut dialog = InfoDialog::new("Games", "Launching games...");
        dialog.render(area, &mut buf, &AppTheme::default());
        assert!(dialog.ok_rect.is_none());
    }
}
