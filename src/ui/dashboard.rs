//! Dashboard layout: navigation bar, tile row, media toggle button
//!
//! The view records the rect of every tile and of the bottom button while
//! rendering, and the click handlers test pointer positions against those
//! recorded rects.

use crate::core::dashboard::{TileSelection, NAV_ITEMS, TILES};
use crate::theme::AppTheme;
use crate::ui::rect_contains;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const TILE_WIDTH: u16 = 14;
const TILE_HEIGHT: u16 = 5;
const TILE_SPACING: u16 = 2;

pub struct DashboardView {
    tile_rects: Vec<Rect>,
    media_button_rect: Option<Rect>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            tile_rects: Vec::new(),
            media_button_rect: None,
        }
    }

    /// Index of the tile under the pointer, if any
    pub fn tile_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tile_rects
            .iter()
            .position(|rect| rect_contains(*rect, x, y))
    }

    /// True when the pointer is over the bottom media toggle button
    pub fn media_button_at(&self, x: u16, y: u16) -> bool {
        self.media_button_rect
            .is_some_and(|rect| rect_contains(rect, x, y))
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        selection: &TileSelection,
        theme: &AppTheme,
    ) {
        self.tile_rects.clear();
        self.media_button_rect = None;

        if area.width == 0 || area.height == 0 {
            return;
        }

        Block::default()
            .style(Style::default().bg(theme.wallpaper))
            .render(area, buf);

        self.render_nav_bar(area, buf, theme);
        self.render_tiles(area, buf, selection, theme);
        self.render_media_button(area, buf, theme);
    }

    fn render_nav_bar(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        if area.height < 2 {
            return;
        }
        let style = Style::default().fg(theme.nav_text).bg(theme.wallpaper);
        let mut spans = Vec::new();
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("    ", style));
            }
            spans.push(Span::styled(*item, style));
        }
        let row = Rect::new(area.x, area.y + 1, area.width, 1);
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(row, buf);
    }

    fn render_tiles(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        selection: &TileSelection,
        theme: &AppTheme,
    ) {
        let count = TILES.len() as u16;
        // Shrink tiles rather than overflow on narrow terminals
        let max_width = area
            .width
            .saturating_sub(TILE_SPACING * (count - 1))
            .checked_div(count)
            .unwrap_or(0);
        let tile_width = TILE_WIDTH.min(max_width);
        if tile_width < 3 || area.height < TILE_HEIGHT + 4 {
            return;
        }

        let row_width = tile_width * count + TILE_SPACING * (count - 1);
        let x0 = area.x + (area.width - row_width) / 2;
        let y0 = area.y + area.height / 2 - TILE_HEIGHT / 2;

        for (i, tile) in TILES.iter().enumerate() {
            let rect = Rect::new(
                x0 + (tile_width + TILE_SPACING) * i as u16,
                y0,
                tile_width,
                TILE_HEIGHT,
            );
            let background = if i == selection.index() {
                theme.tile_selected
            } else {
                theme.tile_normal
            };
            let style = Style::default().fg(theme.tile_text).bg(background);
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(style)
                .render(rect, buf);

            let label_row = Rect::new(rect.x + 1, rect.y + rect.height / 2, rect.width - 2, 1);
            Paragraph::new(tile.label)
                .alignment(Alignment::Center)
                .style(style)
                .render(label_row, buf);

            self.tile_rects.push(rect);
        }
    }

    fn render_media_button(&mut self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        const LABEL: &str = "Toggle Media Player";
        let width = LABEL.len() as u16 + 4;
        if area.height < 5 || area.width < width {
            return;
        }

        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + area.height - 4,
            width,
            3,
        );
        let style = Style::default()
            .fg(theme.media_button_text)
            .bg(theme.media_button);
        Block::default()
            .borders(Borders::ALL)
            .style(style)
            .render(rect, buf);
        let label_row = Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, 1);
        Paragraph::new(LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .render(label_row, buf);

        self.media_button_rect = Some(rect);
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_into(width: u16, height: u16) -> DashboardView {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let mut view = DashboardView::new();
        view.render(area, &mut buf, &TileSelection::new(), &AppTheme::default());
        view
    }

    #[test]
    fn every_tile_gets_a_hit_rect() {
        let view = render_into(120, 40);
        assert_eq!(view.tile_rects.len(), TILES.len());
    }

    #[test]
    fn clicking_inside_a_tile_resolves_its_index() {
        let view = render_into(120, 40);
        for (i, rect) in view.tile_rects.iter().enumerate() {
            let x = rect.x + rect.width / 2;
            let y = rect.y + rect.height / 2;
            assert_eq!(view.tile_at(x, y), Some(i));
        }
        assert_eq!(view.tile_at(0, 0), None);
    }

    #[test]
    fn media_button_hit_test() {
        let view = render_into(120, 40);
        let rect = view.media_button_rect.expect("button rendered");
        assert!(view.media_button_at(rect.x + 1, rect.y + 1));
        assert!(!view.media_button_at(rect.x, rect.y.saturating_sub(1)));
    }

    #[test]
    fn tiny_terminal_renders_without_rects() {
        let view = render_into(10, 3);
        assert!(view.tile_rects.is_empty());
        assert!(view.media_button_rect.is_none());
    }
}
