//! TUI frontend (ratatui-based)
//!
//! Implements the `Frontend` trait using ratatui for rendering and
//! crossterm for terminal management and events.

pub mod app;

pub use app::TuiFrontend;
