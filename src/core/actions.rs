//! Semantic action vocabulary for input routing
//!
//! Raw `KeyEvent`s are resolved to `UiAction`s based on what currently has
//! focus, so the handlers in `AppCore` never match on key codes directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means in the current context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Move the tile selection one step left
    MoveLeft,
    /// Move the tile selection one step right
    MoveRight,
    /// Activate the selected tile's command
    Activate,
    /// Close the topmost overlay (dialog or editor)
    Dismiss,
    /// Forward the key to the editor text area
    EditorInput(KeyEvent),
    /// Emergency quit (Ctrl+C), honored in every context
    Quit,
    /// Key not bound in this context
    None,
}

/// Which part of the UI owns keyboard input right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteContext {
    /// Boot animation; no widgets exist yet
    Startup,
    /// Tile menu has focus
    Dashboard,
    /// A blocking informational dialog is open
    Dialog,
    /// The coding-app overlay has focus
    Editor,
    /// Terminal state; input is no longer processed
    ShuttingDown,
}

/// Resolve a key event to an action for the given context
pub fn route_key(key: KeyEvent, context: RouteContext) -> UiAction {
    // Ctrl+C restores the terminal and exits no matter what is focused
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return UiAction::Quit;
    }

    match context {
        RouteContext::Startup | RouteContext::ShuttingDown => UiAction::None,
        RouteContext::Dashboard => match key.code {
            KeyCode::Left => UiAction::MoveLeft,
            KeyCode::Right => UiAction::MoveRight,
            KeyCode::Enter => UiAction::Activate,
            _ => UiAction::None,
        },
        // Dialogs are modal: everything except dismissal is swallowed
        RouteContext::Dialog => match key.code {
            KeyCode::Enter | KeyCode::Esc => UiAction::Dismiss,
            _ => UiAction::None,
        },
        RouteContext::Editor => match key.code {
            KeyCode::Esc => UiAction::Dismiss,
            _ => UiAction::EditorInput(key),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn dashboard_arrow_and_enter_bindings() {
        assert_eq!(
            route_key(key(KeyCode::Left), RouteContext::Dashboard),
            UiAction::MoveLeft
        );
        assert_eq!(
            route_key(key(KeyCode::Right), RouteContext::Dashboard),
            UiAction::MoveRight
        );
        assert_eq!(
            route_key(key(KeyCode::Enter), RouteContext::Dashboard),
            UiAction::Activate
        );
        assert_eq!(
            route_key(key(KeyCode::Char('x')), RouteContext::Dashboard),
            UiAction::None
        );
    }

    #[test]
    fn dialogs_swallow_everything_but_dismissal() {
        assert_eq!(
            route_key(key(KeyCode::Enter), RouteContext::Dialog),
            UiAction::Dismiss
        );
        assert_eq!(
            route_key(key(KeyCode::Esc), RouteContext::Dialog),
            UiAction::Dismiss
        );
        assert_eq!(
            route_key(key(KeyCode::Left), RouteContext::Dialog),
            UiAction::None
        );
    }

    #[test]
    fn editor_takes_raw_keys_until_escape() {
        let typed = key(KeyCode::Char('f'));
        assert_eq!(
            route_key(typed, RouteContext::Editor),
            UiAction::EditorInput(typed)
        );
        assert_eq!(
            route_key(key(KeyCode::Esc), RouteContext::Editor),
            UiAction::Dismiss
        );
    }

    #[test]
    fn startup_and_shutdown_ignore_input() {
        assert_eq!(
            route_key(key(KeyCode::Enter), RouteContext::Startup),
            UiAction::None
        );
        assert_eq!(
            route_key(key(KeyCode::Enter), RouteContext::ShuttingDown),
            UiAction::None
        );
    }

    #[test]
    fn ctrl_c_quits_in_every_context() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for ctx in [
            RouteContext::Startup,
            RouteContext::Dashboard,
            RouteContext::Dialog,
            RouteContext::Editor,
            RouteContext::ShuttingDown,
        ] {
            assert_eq!(route_key(ctrl_c, ctx), UiAction::Quit);
        }
    }
}
