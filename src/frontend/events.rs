//! Frontend-agnostic input events
//!
//! The frontend translates its native event stream (crossterm) into this
//! enum so the core logic only handles one event shape.

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

/// Events emitted by the frontend, in a frontend-agnostic shape
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
}

impl FrontendEvent {
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    pub fn mouse(kind: MouseEventKind, x: u16, y: u16, modifiers: KeyModifiers) -> Self {
        Self::Mouse {
            kind,
            x,
            y,
            modifiers,
        }
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }
}
