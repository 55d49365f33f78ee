//! Coding-app overlay: title label, editable text region, inert Run button
//!
//! The Run button is a stub with no execution semantics. The overlay owns
//! keyboard focus while open (it contains the text area); pointer clicks
//! outside it still reach the dashboard.

use crate::theme::AppTheme;
use crate::ui::rect_contains;
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tui_textarea::TextArea;

pub struct EditorWindow {
    textarea: TextArea<'static>,
    window_rect: Option<Rect>,
    run_rect: Option<Rect>,
}

impl EditorWindow {
    pub fn new(theme: &AppTheme) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_style(
            Style::default()
                .fg(theme.editor_text)
                .bg(theme.editor_background),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.window_border)),
        );
        Self {
            textarea,
            window_rect: None,
            run_rect: None,
        }
    }

    /// Forward a key press to the text area
    pub fn input(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    /// Current editor content, one string per line
    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.window_rect
            .is_some_and(|rect| rect_contains(rect, x, y))
    }

    /// True when the pointer is over the (inert) Run button
    pub fn run_button_at(&self, x: u16, y: u16) -> bool {
        self.run_rect.is_some_and(|rect| rect_contains(rect, x, y))
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        self.window_rect = None;
        self.run_rect = None;

        let width = (area.width * 7 / 10).max(30).min(area.width);
        let height = (area.height * 7 / 10).max(12).min(area.height);
        if width < 30 || height < 12 {
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
            .title("Coding App")
            .style(
                Style::default()
                    .fg(theme.window_title)
                    .bg(theme.window_background),
            )
            .border_style(Style::default().fg(theme.window_border))
            .render(rect, buf);

        let label_row = Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, 1);
        Paragraph::new("Code Editor")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.window_title))
            .render(label_row, buf);

        let text_rect = Rect::new(
            rect.x + 2,
            rect.y + 2,
            rect.width - 4,
            rect.height.saturating_sub(6),
        );
        (&self.textarea).render(text_rect, buf);

        const RUN_LABEL: &str = "[ Run ]";
        let run = Rect::new(
            rect.x + (rect.width - RUN_LABEL.len() as u16) / 2,
            rect.y + rect.height - 2,
            RUN_LABEL.len() as u16,
            1,
        );
        Paragraph::new(RUN_LABEL)
            .style(Style::default().fg(theme.button_text).bg(theme.button))
            .render(run, buf);

        self.window_rect = Some(rect);
        self.run_rect = Some(run);
    }
}
