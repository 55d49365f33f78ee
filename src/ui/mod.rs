//! UI widgets
//!
//! Each widget renders into `(Rect, &mut Buffer)` and, where it is
//! clickable, records its hit rects during render so the input handlers
//! can test pointer positions against the frame actually on screen.

pub mod dashboard;
pub mod dialog;
pub mod editor;
pub mod media_player;
pub mod shutdown;
pub mod startup;

pub use dashboard::DashboardView;
pub use dialog::InfoDialog;
pub use editor::EditorWindow;
pub use media_player::MediaPlayerWindow;

use ratatui::layout::Rect;

/// Hit test helper shared by the clickable widgets
pub(crate) fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
