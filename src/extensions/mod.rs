//! Extension system for the editor
//!
//! Extensions add key-triggered actions without touching the engine. Each
//! one implements [`Extension`] and is handed a [`Capabilities`] surface at
//! registration time; bound actions later run against the same surface when
//! their key fires. A binding for a key the engine also handles takes
//! priority over the built-in handling; that shadowing is the intended
//! override point, so an extension can claim any key it wants.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use ratatui::backend::Backend;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Terminal;

use crate::app::App;
use crate::input::EventSource;
use crate::prompt;

mod save;
pub use save::{SaveExtension, SAVE_KEY};

/// A key plus its modifiers, the unit the registry binds actions to.
pub type KeyChord = (KeyCode, KeyModifiers);

/// An action an extension bound to a key.
pub type Action = Arc<dyn Fn(&mut dyn Capabilities) -> Result<()>>;

/// The fixed set of operations the editor exposes to extensions, both
/// during registration and when a bound key fires.
pub trait Capabilities {
    /// Block for a line of input in the status row. `None` means cancelled.
    fn ask_user(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Replace the status message.
    fn show_message(&mut self, message: &str);

    /// The buffer's lines.
    fn lines(&self) -> &[String];

    /// The file path, if the buffer has one.
    fn file_path(&self) -> Option<PathBuf>;

    /// Set or clear the file path (and the display name derived from it).
    fn set_file_path(&mut self, path: Option<PathBuf>);

    /// Mark the buffer as having unsaved changes.
    fn mark_changed(&mut self);

    /// Mark the buffer as saved.
    fn mark_saved(&mut self);

    /// Current cursor position as (row, col).
    fn cursor(&self) -> (usize, usize);

    /// Bind a key to an action. Only available while extensions register;
    /// during dispatch this returns an error.
    fn bind_key(&mut self, chord: KeyChord, action: Action) -> Result<()>;
}

/// An installable unit of editor behavior.
pub trait Extension {
    fn name(&self) -> &str;

    /// Called once at startup, before the first draw. An error here is
    /// fatal to the whole editor.
    fn register(&self, ops: &mut dyn Capabilities) -> Result<()>;
}

/// The statically known extension set. The config file can disable entries
/// by name.
pub fn builtin_extensions() -> Vec<Box<dyn Extension>> {
    vec![Box::new(SaveExtension)]
}

/// Key-to-action bindings contributed by extensions.
#[derive(Default)]
pub struct Registry {
    bindings: HashMap<KeyChord, Action>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite a binding. The last registration for a chord wins
    /// silently.
    pub fn bind(&mut self, chord: KeyChord, action: Action) {
        self.bindings.insert(chord, action);
    }

    /// Look up the action for a chord, if any.
    pub fn lookup(&self, chord: &KeyChord) -> Option<Action> {
        self.bindings.get(chord).cloned()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The concrete capability surface: the session plus the terminal pieces
/// the ask-user prompt needs.
pub struct EditorOps<'a, B: Backend, E: EventSource> {
    pub(crate) app: &'a mut App,
    pub(crate) terminal: &'a mut Terminal<B>,
    pub(crate) events: &'a mut E,
    pub(crate) registration: bool,
}

impl<B: Backend, E: EventSource> Capabilities for EditorOps<'_, B, E> {
    fn ask_user(&mut self, message: &str) -> Result<Option<String>> {
        prompt::read_line(self.terminal, self.events, self.app, message)
    }

    fn show_message(&mut self, message: &str) {
        self.app.set_status_message(message);
    }

    fn lines(&self) -> &[String] {
        &self.app.buffer.lines
    }

    fn file_path(&self) -> Option<PathBuf> {
        self.app.buffer.path.clone()
    }

    fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.app.buffer.set_path(path);
    }

    fn mark_changed(&mut self) {
        self.app.buffer.dirty = true;
    }

    fn mark_saved(&mut self) {
        self.app.buffer.dirty = false;
    }

    fn cursor(&self) -> (usize, usize) {
        self.app.buffer.cursor
    }

    fn bind_key(&mut self, chord: KeyChord, action: Action) -> Result<()> {
        if !self.registration {
            bail!("key bindings can only be registered at startup");
        }
        self.app.registry.bind(chord, action);
        Ok(())
    }
}
