//! Terminal lifecycle, event conversion, and per-phase drawing

use crate::core::{AppCore, Phase};
use crate::frontend::{Frontend, FrontendEvent};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
}

impl TuiFrontend {
    /// Initialize the terminal: raw mode, alternate screen, mouse capture,
    /// hidden cursor.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(16),
        })
    }

    /// Set poll timeout (doubles as the frame interval)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only key presses; repeats and releases are ignored
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::mouse(
                mouse_event.kind,
                mouse_event.column,
                mouse_event.row,
                mouse_event.modifiers,
            )),
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn render(&mut self, core: &mut AppCore) -> Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();

            match &core.phase {
                Phase::Startup { rotation, .. } => {
                    ui::startup::render(rotation, area, buf, &core.theme);
                }
                Phase::Dashboard => {
                    core.dashboard
                        .render(area, buf, &core.selection, &core.theme);
                    // Overlay order: player lowest, then editor, dialog on top
                    if let Some(player) = &mut core.media_player {
                        player.render(area, buf, &core.theme);
                    }
                    if let Some(editor) = &mut core.editor {
                        editor.render(area, buf, &core.theme);
                    }
                    if let Some(dialog) = &mut core.dialog {
                        dialog.render(area, buf, &core.theme);
                    }
                }
                Phase::ShuttingDown { .. } => {
                    ui::shutdown::render(area, buf, &core.theme);
                }
            }
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
