//! Built-in save extension.
//!
//! Binds Ctrl+S to a save action: asks for a file name when the buffer has
//! none, writes the buffer out, and reports the outcome in the status row.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use super::{Capabilities, Extension, KeyChord};
use crate::buffer::write_lines;

/// The Ctrl+S chord the extension claims.
pub const SAVE_KEY: KeyChord = (KeyCode::Char('s'), KeyModifiers::CONTROL);

pub struct SaveExtension;

impl Extension for SaveExtension {
    fn name(&self) -> &str {
        "save"
    }

    fn register(&self, ops: &mut dyn Capabilities) -> Result<()> {
        ops.bind_key(SAVE_KEY, Arc::new(save_buffer))
    }
}

/// Write the buffer to its file, prompting for a name when it has none.
/// Failures leave the buffer state alone and surface in the status row.
fn save_buffer(ops: &mut dyn Capabilities) -> Result<()> {
    let path = match ops.file_path() {
        Some(path) => path,
        None => {
            let name = match ops.ask_user("Save As: ")? {
                Some(name) if !name.trim().is_empty() => name.trim().to_string(),
                _ => {
                    ops.show_message("Save cancelled.");
                    return Ok(());
                }
            };
            let path = PathBuf::from(name);
            if path.is_dir() {
                ops.show_message(&format!("Error: '{}' is a directory.", path.display()));
                return Ok(());
            }
            ops.set_file_path(Some(path.clone()));
            path
        }
    };

    let lines = ops.lines().to_vec();
    match write_lines(&path, &lines) {
        Ok(()) => {
            ops.show_message(&format!(
                "Saved {} lines to {}",
                lines.len(),
                path.display()
            ));
            ops.mark_saved();
        }
        Err(e) => {
            ops.show_message(&format!("Error saving {}: {}", path.display(), e));
        }
    }

    Ok(())
}
