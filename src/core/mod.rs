//! Core application state (frontend-agnostic)
//!
//! `AppCore` owns everything the UI displays: the phase machine
//! (`Startup -> Dashboard -> ShuttingDown`), the tile selection, and the
//! optional overlay windows. It consumes `FrontendEvent`s and a
//! deadline-driven `update(now)`, so the whole program can be driven
//! headlessly in tests without a terminal.

pub mod actions;
pub mod dashboard;
pub mod startup;

use crate::frontend::FrontendEvent;
use crate::theme::AppTheme;
use crate::ui::{DashboardView, EditorWindow, InfoDialog, MediaPlayerWindow};
use actions::{route_key, RouteContext, UiAction};
use crossterm::event::{KeyEvent, MouseButton, MouseEventKind};
use dashboard::{TileCommand, TileSelection};
use startup::{RotationState, HANDOFF_DELAY};
use std::time::{Duration, Instant};

/// Pause between the shutdown screen appearing and the process ending
pub const SHUTDOWN_DELAY: Duration = Duration::from_millis(2000);

/// Whole-program phase. The transition out of `Startup` happens exactly
/// once; `ShuttingDown` is terminal.
pub enum Phase {
    Startup {
        rotation: RotationState,
        next_tick: Instant,
        /// Set once the rotation completes; the dashboard appears when
        /// this deadline passes
        handoff_at: Option<Instant>,
    },
    Dashboard,
    ShuttingDown {
        exit_at: Instant,
    },
}

pub struct AppCore {
    pub phase: Phase,
    pub selection: TileSelection,
    pub dashboard: DashboardView,
    /// Blocking informational popup, topmost overlay
    pub dialog: Option<InfoDialog>,
    /// Coding-app overlay; at most one, re-activation refocuses it
    pub editor: Option<EditorWindow>,
    /// Media player handle; the toggle is the only mutator
    pub media_player: Option<MediaPlayerWindow>,
    pub theme: AppTheme,
    /// Cleared to end the event loop
    pub running: bool,
    tick_interval: Duration,
}

impl AppCore {
    pub fn new(tick_interval: Duration, skip_animation: bool, now: Instant) -> Self {
        let phase = if skip_animation {
            Phase::Dashboard
        } else {
            Phase::Startup {
                rotation: RotationState::new(),
                next_tick: now + tick_interval,
                handoff_at: None,
            }
        };
        Self {
            phase,
            selection: TileSelection::new(),
            dashboard: DashboardView::new(),
            dialog: None,
            editor: None,
            media_player: None,
            theme: AppTheme::default(),
            running: true,
            tick_interval,
        }
    }

    /// Advance timer-driven state: animation ticks, the dashboard handoff,
    /// and the shutdown deadline. Called once per event-loop pass.
    pub fn update(&mut self, now: Instant) {
        let handoff_due = matches!(
            &self.phase,
            Phase::Startup { handoff_at: Some(at), .. } if now >= *at
        );
        if handoff_due {
            self.show_dashboard();
            return;
        }

        match &mut self.phase {
            Phase::Startup {
                rotation,
                next_tick,
                handoff_at,
            } => {
                if handoff_at.is_none() && now >= *next_tick {
                    rotation.tick();
                    *next_tick = now + self.tick_interval;
                    if rotation.done {
                        *handoff_at = Some(now + HANDOFF_DELAY);
                        tracing::info!("startup animation complete");
                    }
                }
            }
            Phase::Dashboard => {}
            Phase::ShuttingDown { exit_at } => {
                if now >= *exit_at {
                    tracing::info!("shutdown deadline reached, ending event loop");
                    self.running = false;
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: FrontendEvent, now: Instant) {
        match event {
            FrontendEvent::Key { code, modifiers } => {
                self.handle_key(KeyEvent::new(code, modifiers), now);
            }
            FrontendEvent::Mouse {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
                ..
            } => self.handle_click(x, y, now),
            FrontendEvent::Mouse { .. } | FrontendEvent::Resize { .. } => {}
        }
    }

    /// The single place the animator's surface is replaced by the menu
    fn show_dashboard(&mut self) {
        tracing::info!("entering dashboard");
        self.selection = TileSelection::new();
        self.phase = Phase::Dashboard;
    }

    fn route_context(&self) -> RouteContext {
        match self.phase {
            Phase::Startup { .. } => RouteContext::Startup,
            Phase::ShuttingDown { .. } => RouteContext::ShuttingDown,
            Phase::Dashboard => {
                if self.dialog.is_some() {
                    RouteContext::Dialog
                } else if self.editor.is_some() {
                    RouteContext::Editor
                } else {
                    RouteContext::Dashboard
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match route_key(key, self.route_context()) {
            UiAction::Quit => {
                tracing::info!("quit requested");
                self.running = false;
            }
            UiAction::MoveLeft => self.selection.move_left(),
            UiAction::MoveRight => self.selection.move_right(),
            UiAction::Activate => self.activate(self.selection.command(), now),
            UiAction::Dismiss => self.dismiss_overlay(),
            UiAction::EditorInput(key) => {
                if let Some(editor) = &mut self.editor {
                    editor.input(key);
                }
            }
            UiAction::None => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16, now: Instant) {
        // Widgets only exist during the dashboard phase
        if !matches!(self.phase, Phase::Dashboard) {
            return;
        }

        // Dialogs are modal: only their OK button reacts
        if let Some(dialog) = &self.dialog {
            if dialog.ok_at(x, y) {
                self.dismiss_overlay();
            }
            return;
        }

        // The editor is non-modal: clicks outside it fall through
        if let Some(editor) = &self.editor {
            if editor.contains(x, y) {
                if editor.run_button_at(x, y) {
                    tracing::debug!("run button pressed (stub, no execution)");
                }
                return;
            }
        }

        // The player takes no input; swallow clicks so they cannot reach
        // widgets beneath it
        if let Some(player) = &self.media_player {
            if player.contains(x, y) {
                return;
            }
        }

        if let Some(index) = self.dashboard.tile_at(x, y) {
            self.selection.set(index);
            self.activate(self.selection.command(), now);
            return;
        }
        if self.dashboard.media_button_at(x, y) {
            self.toggle_media_player();
        }
    }

    fn activate(&mut self, command: TileCommand, now: Instant) {
        tracing::info!(?command, "tile activated");
        match command {
            TileCommand::Games
            | TileCommand::Music
            | TileCommand::Shop
            | TileCommand::Settings => {
                if let Some((title, message)) = command.dialog_content() {
                    self.dialog = Some(InfoDialog::new(title, message));
                }
            }
            TileCommand::CodingApp => {
                // Single editor overlay: re-activation refocuses it
                if self.editor.is_none() {
                    self.editor = Some(EditorWindow::new(&self.theme));
                }
            }
            TileCommand::Shutdown => self.begin_shutdown(now),
        }
    }

    /// Open the player if closed, close it if open. The only mutator of
    /// the handle, which keeps the single-instance invariant.
    pub fn toggle_media_player(&mut self) {
        if self.media_player.take().is_some() {
            tracing::info!("media player closed");
        } else {
            tracing::info!("media player opened");
            self.media_player = Some(MediaPlayerWindow::new());
        }
    }

    fn dismiss_overlay(&mut self) {
        if self.dialog.take().is_some() {
            tracing::debug!("dialog dismissed");
        } else if self.editor.take().is_some() {
            tracing::debug!("editor closed");
        }
    }

    fn begin_shutdown(&mut self, now: Instant) {
        tracing::info!("shutdown requested");
        self.dialog = None;
        self.editor = None;
        self.media_player = None;
        self.phase = Phase::ShuttingDown {
            exit_at: now + SHUTDOWN_DELAY,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{buffer::Buffer, layout::Rect};

    const TICK: Duration = Duration::from_millis(50);

    fn press(core: &mut AppCore, code: KeyCode, now: Instant) {
        core.handle_event(
            FrontendEvent::Key {
                code,
                modifiers: KeyModifiers::NONE,
            },
            now,
        );
    }

    fn click(core: &mut AppCore, x: u16, y: u16, now: Instant) {
        core.handle_event(
            FrontendEvent::Mouse {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
                modifiers: KeyModifiers::NONE,
            },
            now,
        );
    }

    fn dashboard_core(now: Instant) -> AppCore {
        AppCore::new(TICK, true, now)
    }

    /// Drive the boot animation to completion, one update per tick
    fn boot(core: &mut AppCore, mut now: Instant) -> Instant {
        for _ in 0..180 {
            now += TICK;
            core.update(now);
        }
        assert!(matches!(
            core.phase,
            Phase::Startup {
                handoff_at: Some(_),
                ..
            }
        ));
        now += HANDOFF_DELAY;
        core.update(now);
        now
    }

    #[test]
    fn boot_then_right_right_enter_opens_the_shop() {
        let t0 = Instant::now();
        let mut core = AppCore::new(TICK, false, t0);

        let now = boot(&mut core, t0);
        assert!(matches!(core.phase, Phase::Dashboard));

        press(&mut core, KeyCode::Right, now);
        press(&mut core, KeyCode::Right, now);
        press(&mut core, KeyCode::Enter, now);

        let dialog = core.dialog.as_ref().expect("shop dialog open");
        assert_eq!(dialog.title(), "Shop");
    }

    #[test]
    fn startup_ignores_keyboard_input() {
        let t0 = Instant::now();
        let mut core = AppCore::new(TICK, false, t0);
        press(&mut core, KeyCode::Enter, t0);
        press(&mut core, KeyCode::Right, t0);
        assert!(matches!(core.phase, Phase::Startup { .. }));
        assert!(core.dialog.is_none());
    }

    #[test]
    fn handoff_waits_for_the_full_delay() {
        let t0 = Instant::now();
        let mut core = AppCore::new(TICK, false, t0);
        let mut now = t0;
        for _ in 0..180 {
            now += TICK;
            core.update(now);
        }
        core.update(now + HANDOFF_DELAY - Duration::from_millis(1));
        assert!(matches!(core.phase, Phase::Startup { .. }));
        core.update(now + HANDOFF_DELAY);
        assert!(matches!(core.phase, Phase::Dashboard));
    }

    #[test]
    fn media_player_toggle_is_an_idempotent_pair() {
        let t0 = Instant::now();
        let mut core = dashboard_core(t0);
        assert!(core.media_player.is_none());

        core.toggle_media_player();
        assert!(core.media_player.is_some());

        core.toggle_media_player();
        assert!(core.media_player.is_none());
    }

    #[test]
    fn dialog_blocks_navigation_until_dismissed() {
        let t0 = Instant::now();
        let mut core = dashboard_core(t0);

        press(&mut core, KeyCode::Enter, t0);
        assert_eq!(core.dialog.as_ref().map(InfoDialog::title), Some("Games"));

        press(&mut core, KeyCode::Right, t0);
        assert_eq!(core.selection.index(), 0, "selection frozen behind dialog");

        press(&mut core, KeyCode::Esc, t0);
        assert!(core.dialog.is_none());
        press(&mut core, KeyCode::Right, t0);
        assert_eq!(core.selection.index(), 1);
    }

    #[test]
    fn editor_opens_once_and_takes_keys_until_escape() {
        let t0 = Instant::now();
        let mut core = dashboard_core(t0);

        for _ in 0..4 {
            press(&mut core, KeyCode::Right, t0);
        }
        press(&mut core, KeyCode::Enter, t0);
        assert!(core.editor.is_some());

        // Keys now land in the text area, not the tile row
        press(&mut core, KeyCode::Char('h'), t0);
        press(&mut core, KeyCode::Char('i'), t0);
        assert_eq!(core.editor.as_ref().unwrap().lines(), ["hi"]);
        assert_eq!(core.selection.index(), 4);

        // Re-activating the command must not spawn a fresh editor
        core.activate(TileCommand::CodingApp, t0);
        assert_eq!(core.editor.as_ref().unwrap().lines(), ["hi"]);

        press(&mut core, KeyCode::Esc, t0);
        assert!(core.editor.is_none());
    }

    #[test]
    fn shutdown_is_terminal_and_ends_the_loop_after_the_delay() {
        let t0 = Instant::now();
        let mut core = dashboard_core(t0);
        core.toggle_media_player();

        for _ in 0..5 {
            press(&mut core, KeyCode::Right, t0);
        }
        press(&mut core, KeyCode::Enter, t0);

        assert!(matches!(core.phase, Phase::ShuttingDown { .. }));
        assert!(core.media_player.is_none(), "overlays discarded");

        // No further input is processed
        press(&mut core, KeyCode::Enter, t0);
        press(&mut core, KeyCode::Left, t0);
        click(&mut core, 10, 10, t0);
        assert!(core.dialog.is_none());
        assert!(matches!(core.phase, Phase::ShuttingDown { .. }));

        core.update(t0 + SHUTDOWN_DELAY - Duration::from_millis(1));
        assert!(core.running);
        core.update(t0 + SHUTDOWN_DELAY);
        assert!(!core.running);
    }

    #[test]
    fn clicking_a_tile_selects_and_activates_it() {
        let t0 = Instant::now();
        let mut core = dashboard_core(t0);

        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        core.dashboard
            .render(area, &mut buf, &core.selection, &core.theme);

        assert!(core.dashboard.tile_at(0, 0).is_none(), "origin is not a tile");

        // Third tile: the shop
        let (x, y) = {
            let idx = 2;
            let mut target = None;
            for tx in 0..area.width {
                for ty in 0..area.height {
                    if core.dashboard.tile_at(tx, ty) == Some(idx) {
                        target = Some((tx, ty));
                    }
                }
            }
            target.expect("shop tile rendered")
        };
        click(&mut core, x, y, t0);

        assert_eq!(core.selection.index(), 2);
        assert_eq!(core.dialog.as_ref().map(InfoDialog::title), Some("Shop"));
    }

    #[test]
    fn ctrl_c_ends_the_loop_immediately() {
        let t0 = Instant::now();
        let mut core = AppCore::new(TICK, false, t0);
        core.handle_event(
            FrontendEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            },
            t0,
        );
        assert!(!core.running);
    }
}
