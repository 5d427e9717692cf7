//! Key-event dispatch: one key in, one state mutation out.
//!
//! Extension bindings are consulted before the built-in table, so an
//! extension can shadow any built-in key. Every branch that may have moved
//! the cursor or changed the line count ends with a viewport reconciliation
//! pass. Nothing here propagates an error past the loop except genuine
//! terminal I/O failure: file and extension problems degrade to a status
//! message and the editor keeps running.

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use crate::app::App;
use crate::buffer::CursorMovement;
use crate::extensions::EditorOps;
use crate::input::EventSource;
use crate::prompt;

/// Whether the main loop keeps going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl App {
    /// Handle a single key event. Returns [`Flow::Stop`] only when the
    /// session should end.
    pub fn handle_key<B: Backend, E: EventSource>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<Flow> {
        // Extension bindings win over every built-in.
        if let Some(action) = self.registry.lookup(&(key.code, key.modifiers)) {
            let mut ops = EditorOps {
                app: &mut *self,
                terminal: &mut *terminal,
                events: &mut *events,
                registration: false,
            };
            if let Err(e) = (*action)(&mut ops) {
                self.set_status_message(format!("Extension error: {}", e));
            }
            self.reconcile_viewport();
            return Ok(Flow::Continue);
        }

        match (key.code, key.modifiers) {
            // Ctrl+C is the interrupt analog and takes the same quit path.
            (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return self.confirm_quit(terminal, events);
            }
            (KeyCode::Up, _) => self.buffer.move_cursor(CursorMovement::Up),
            (KeyCode::Down, _) => self.buffer.move_cursor(CursorMovement::Down),
            (KeyCode::Left, _) => self.buffer.move_cursor(CursorMovement::Left),
            (KeyCode::Right, _) => self.buffer.move_cursor(CursorMovement::Right),
            (KeyCode::Home, _) => self.buffer.move_cursor(CursorMovement::LineStart),
            (KeyCode::End, _) => self.buffer.move_cursor(CursorMovement::LineEnd),
            (KeyCode::PageUp, _) => self.page_up(),
            (KeyCode::PageDown, _) => self.page_down(),
            (KeyCode::Backspace, _) => self.buffer.backspace(),
            (KeyCode::Delete, _) => self.buffer.delete_forward(),
            (KeyCode::Enter, _) => self.buffer.insert_newline(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT)
                if (' '..='~').contains(&c) =>
            {
                self.buffer.insert_char(c);
            }
            _ => {} // Unrecognized keys are a no-op
        }

        self.reconcile_viewport();
        Ok(Flow::Continue)
    }

    /// The quit path. A dirty buffer demands a blocking y/N confirmation;
    /// anything but an affirmative answer cancels.
    fn confirm_quit<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<Flow> {
        if !self.buffer.is_dirty() {
            self.running = false;
            return Ok(Flow::Stop);
        }

        let answer = prompt::read_line(
            terminal,
            events,
            self,
            "Unsaved changes! Quit anyway? (y/N): ",
        )?;
        let confirmed = answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y"));

        if confirmed {
            self.running = false;
            Ok(Flow::Stop)
        } else {
            self.set_status_message("Quit cancelled.");
            Ok(Flow::Continue)
        }
    }

    /// Move the cursor and the window up one display page.
    fn page_up(&mut self) {
        let page = self.display_height();
        if page == 0 {
            return;
        }
        let (row, col) = self.buffer.cursor;
        let row = row.saturating_sub(page);
        self.viewport.top_line = self.viewport.top_line.saturating_sub(page);
        let col = col.min(self.buffer.lines[row].len());
        self.buffer.cursor = (row, col);
    }

    /// Move the cursor and the window down one display page.
    fn page_down(&mut self) {
        let page = self.display_height();
        if page == 0 {
            return;
        }
        let (row, col) = self.buffer.cursor;
        let last = self.buffer.line_count() - 1;
        let row = (row + page).min(last);
        let max_top = self.buffer.line_count().saturating_sub(page);
        self.viewport.top_line = (self.viewport.top_line + page).min(max_top);
        let col = col.min(self.buffer.lines[row].len());
        self.buffer.cursor = (row, col);
    }
}
