//! # Text Buffer Management
//!
//! Core text buffer that represents the single open document.
//!
//! ## What it does
//!
//! - Stores text as lines in memory (always at least one line)
//! - Tracks cursor position and the dirty flag
//! - Handles file loading/saving
//!
//! ## File format
//!
//! Loading decodes UTF-8 with replacement characters and strips `\n` and
//! `\r\n` terminators; saving writes one line per record with a single `\n`
//! terminator. The normalization is lossy for files with CRLF endings.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Read a file into lines. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD rather than failing the whole load.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(str::to_owned).collect())
}

/// Write lines to a file, one per record, each terminated with `\n`.
pub fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("untitled")
        .to_string()
}

#[derive(Clone)]
pub struct Buffer {
    pub lines: Vec<String>,
    pub path: Option<PathBuf>,
    pub name: String,
    pub dirty: bool,
    pub cursor: (usize, usize), // (row, column)
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            path: None,
            name: String::from("untitled"),
            dirty: false,
            cursor: (0, 0),
        }
    }

    /// Open `path`, falling back to an empty buffer when it cannot be read.
    /// Never fails: the outcome is reported through the returned status
    /// string so the editor keeps running either way. A missing file is a
    /// new file, not an error.
    pub fn open(path: PathBuf) -> (Self, String) {
        if path.is_dir() {
            return (
                Self::new(),
                format!("Error: '{}' is a directory.", path.display()),
            );
        }

        if !path.exists() {
            let mut buffer = Self::new();
            buffer.name = display_name(&path);
            let status = format!("New file: {}", path.display());
            buffer.path = Some(path);
            return (buffer, status);
        }

        match read_lines(&path) {
            Ok(mut lines) => {
                if lines.is_empty() {
                    lines.push(String::new());
                }
                let name = display_name(&path);
                let status = format!("Opened: {}", path.display());
                (
                    Self {
                        lines,
                        path: Some(path),
                        name,
                        dirty: false,
                        cursor: (0, 0),
                    },
                    status,
                )
            }
            Err(e) => (
                Self::new(),
                format!("Error loading {}: {}", path.display(), e),
            ),
        }
    }

    /// Save to the buffer's current path.
    pub fn save(&mut self) -> io::Result<()> {
        let path = self.path.clone().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "no file path associated with buffer",
            )
        })?;
        self.save_to(path)
    }

    /// Save to a specific path, adopting it as the buffer's path and
    /// clearing the dirty flag on success. On failure the buffer, including
    /// the dirty flag, is left untouched.
    pub fn save_to(&mut self, path: PathBuf) -> io::Result<()> {
        write_lines(&path, &self.lines)?;
        self.dirty = false;
        self.name = display_name(&path);
        self.path = Some(path);
        Ok(())
    }

    /// Point the buffer at a different path (or none), refreshing the
    /// display name. Does not touch the content or the dirty flag.
    pub fn set_path(&mut self, path: Option<PathBuf>) {
        self.name = match &path {
            Some(p) => display_name(p),
            None => String::from("untitled"),
        };
        self.path = path;
    }

    /// Check if the buffer has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn insert_char(&mut self, c: char) {
        let (row, col) = self.cursor;
        let line = &mut self.lines[row];
        let col = col.min(line.len());
        line.insert(col, c);
        self.cursor.1 = col + 1;
        self.dirty = true;
    }

    /// Split the current line at the cursor; the cursor lands at the start
    /// of the new line.
    pub fn insert_newline(&mut self) {
        let (row, col) = self.cursor;
        let at = col.min(self.lines[row].len());
        let rest = self.lines[row].split_off(at);
        self.lines.insert(row + 1, rest);
        self.cursor = (row + 1, 0);
        self.dirty = true;
    }

    /// Delete the character before the cursor, joining with the previous
    /// line when at column 0. At the very start of the buffer this is a
    /// no-op and the dirty flag is left alone.
    pub fn backspace(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            self.lines[row].remove(col - 1);
            self.cursor.1 -= 1;
            self.dirty = true;
        } else if row > 0 {
            // Join with previous line; cursor lands at the join point.
            let tail = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            self.cursor = (row - 1, prev.len());
            prev.push_str(&tail);
            self.dirty = true;
        }
    }

    /// Delete the character under the cursor, joining the next line up when
    /// at end of line. A no-op at the very end of the buffer.
    pub fn delete_forward(&mut self) {
        let (row, col) = self.cursor;
        if col < self.lines[row].len() {
            self.lines[row].remove(col);
            self.dirty = true;
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
            self.dirty = true;
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMovement) {
        let (mut row, mut col) = self.cursor;

        match movement {
            CursorMovement::Up => {
                if row > 0 {
                    row -= 1;
                    // Snap cursor to end of a shorter line
                    col = col.min(self.lines[row].len());
                }
            }
            CursorMovement::Down => {
                if row + 1 < self.lines.len() {
                    row += 1;
                    col = col.min(self.lines[row].len());
                }
            }
            CursorMovement::Left => {
                if col > 0 {
                    col -= 1;
                } else if row > 0 {
                    // Wrap to end of previous line
                    row -= 1;
                    col = self.lines[row].len();
                }
            }
            CursorMovement::Right => {
                if col < self.lines[row].len() {
                    col += 1;
                } else if row + 1 < self.lines.len() {
                    // Wrap to start of next line
                    row += 1;
                    col = 0;
                }
            }
            CursorMovement::LineStart => {
                col = 0;
            }
            CursorMovement::LineEnd => {
                col = self.lines[row].len();
            }
        }

        self.cursor = (row, col);
    }
}

pub enum CursorMovement {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
}
