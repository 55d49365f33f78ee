//! Frontend abstraction layer
//!
//! The `Frontend` trait separates rendering and input collection from the
//! core logic, so `AppCore` can be driven headlessly in tests and the
//! terminal backend stays swappable.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

pub trait Frontend {
    /// Drain pending input, converted to frontend-agnostic events.
    /// Blocks up to the configured poll timeout, which doubles as the
    /// frame interval.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state. Takes the core mutably
    /// because clickable widgets record their hit rects during render.
    fn render(&mut self, core: &mut AppCore) -> Result<()>;

    /// Restore the terminal before the process exits
    fn cleanup(&mut self) -> Result<()>;
}
