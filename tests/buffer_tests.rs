//! Integration tests for buffer functionality
//!
//! Tests the core text buffer operations that are fundamental to the editor

use std::fs;
use tempfile::TempDir;

use editor::buffer::{read_lines, Buffer, CursorMovement};

#[test]
fn test_buffer_creation() {
    let buffer = Buffer::new();

    assert_eq!(buffer.name, "untitled");
    assert_eq!(buffer.lines, vec![String::new()]); // Should have one empty line
    assert_eq!(buffer.cursor, (0, 0));
    assert!(!buffer.dirty);
    assert!(buffer.path.is_none());
}

#[test]
fn test_buffer_text_insertion() {
    let mut buffer = Buffer::new();

    for ch in "Hello".chars() {
        buffer.insert_char(ch);
    }

    assert_eq!(buffer.lines[0], "Hello");
    assert_eq!(buffer.cursor, (0, 5));
    assert!(buffer.dirty);
}

#[test]
fn test_newline_at_end_of_line() {
    let mut buffer = Buffer::new();
    for ch in "hello".chars() {
        buffer.insert_char(ch);
    }

    buffer.insert_newline();

    assert_eq!(buffer.lines, vec!["hello".to_string(), String::new()]);
    assert_eq!(buffer.cursor, (1, 0));
    assert!(buffer.dirty);
}

#[test]
fn test_newline_splits_line_in_middle() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["hello".to_string()];
    buffer.cursor = (0, 2);

    buffer.insert_newline();

    assert_eq!(buffer.lines, vec!["he".to_string(), "llo".to_string()]);
    assert_eq!(buffer.cursor, (1, 0));
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let mut buffer = Buffer::new();
    for ch in "Hello".chars() {
        buffer.insert_char(ch);
    }

    buffer.backspace();
    buffer.backspace();

    assert_eq!(buffer.lines[0], "Hel");
    assert_eq!(buffer.cursor, (0, 3));
}

#[test]
fn test_backspace_joins_previous_line() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["ab".to_string(), "cd".to_string()];
    buffer.cursor = (1, 0);

    buffer.backspace();

    assert_eq!(buffer.lines, vec!["abcd".to_string()]);
    assert_eq!(buffer.cursor, (0, 2));
    assert!(buffer.dirty);
}

#[test]
fn test_backspace_at_buffer_start_is_noop() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["x".to_string()];

    buffer.backspace();

    assert_eq!(buffer.lines, vec!["x".to_string()]);
    assert_eq!(buffer.cursor, (0, 0));
    // A deletion that changed nothing must not mark the buffer dirty
    assert!(!buffer.dirty);
}

#[test]
fn test_delete_forward_removes_under_cursor() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["abc".to_string()];
    buffer.cursor = (0, 1);

    buffer.delete_forward();

    assert_eq!(buffer.lines, vec!["ac".to_string()]);
    assert_eq!(buffer.cursor, (0, 1));
    assert!(buffer.dirty);
}

#[test]
fn test_delete_forward_joins_next_line() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["ab".to_string(), "cd".to_string()];
    buffer.cursor = (0, 2);

    buffer.delete_forward();

    assert_eq!(buffer.lines, vec!["abcd".to_string()]);
    assert_eq!(buffer.cursor, (0, 2));
    assert!(buffer.dirty);
}

#[test]
fn test_delete_forward_at_buffer_end_is_noop() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["ab".to_string()];
    buffer.cursor = (0, 2);

    buffer.delete_forward();

    assert_eq!(buffer.lines, vec!["ab".to_string()]);
    assert!(!buffer.dirty);
}

#[test]
fn test_vertical_movement_clamps_column() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["hello".to_string(), "hi".to_string()];
    buffer.cursor = (0, 5);

    buffer.move_cursor(CursorMovement::Down);
    assert_eq!(buffer.cursor, (1, 2));

    buffer.move_cursor(CursorMovement::Up);
    assert_eq!(buffer.cursor, (0, 2));
}

#[test]
fn test_horizontal_movement_wraps_lines() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["ab".to_string(), "cd".to_string()];
    buffer.cursor = (1, 0);

    buffer.move_cursor(CursorMovement::Left);
    assert_eq!(buffer.cursor, (0, 2));

    buffer.move_cursor(CursorMovement::Right);
    assert_eq!(buffer.cursor, (1, 0));
}

#[test]
fn test_movement_is_noop_at_buffer_boundaries() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["ab".to_string()];

    buffer.move_cursor(CursorMovement::Left);
    assert_eq!(buffer.cursor, (0, 0));
    buffer.move_cursor(CursorMovement::Up);
    assert_eq!(buffer.cursor, (0, 0));

    buffer.cursor = (0, 2);
    buffer.move_cursor(CursorMovement::Right);
    assert_eq!(buffer.cursor, (0, 2));
    buffer.move_cursor(CursorMovement::Down);
    assert_eq!(buffer.cursor, (0, 2));
    assert!(!buffer.dirty);
}

#[test]
fn test_line_start_and_end() {
    let mut buffer = Buffer::new();
    buffer.lines = vec!["hello".to_string()];
    buffer.cursor = (0, 3);

    buffer.move_cursor(CursorMovement::LineEnd);
    assert_eq!(buffer.cursor, (0, 5));

    buffer.move_cursor(CursorMovement::LineStart);
    assert_eq!(buffer.cursor, (0, 0));
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.txt");

    let mut buffer = Buffer::new();
    buffer.lines = vec!["abc".to_string(), "de".to_string()];
    buffer.dirty = true;

    buffer.save_to(path.clone()).unwrap();
    assert!(!buffer.dirty);
    assert_eq!(buffer.name, "out.txt");

    let (loaded, status) = Buffer::open(path);
    assert_eq!(loaded.lines, vec!["abc".to_string(), "de".to_string()]);
    assert!(!loaded.dirty);
    assert!(status.starts_with("Opened:"));
}

#[test]
fn test_open_missing_file_starts_new() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let (buffer, status) = Buffer::open(path.clone());

    assert_eq!(buffer.lines, vec![String::new()]);
    assert!(!buffer.dirty);
    assert_eq!(buffer.path, Some(path));
    assert_eq!(buffer.name, "missing.txt");
    assert!(status.starts_with("New file:"));
}

#[test]
fn test_open_directory_fails_gracefully() {
    let temp_dir = TempDir::new().unwrap();

    let (buffer, status) = Buffer::open(temp_dir.path().to_path_buf());

    assert_eq!(buffer.lines, vec![String::new()]);
    assert!(buffer.path.is_none());
    assert!(!buffer.dirty);
    assert!(status.contains("is a directory"));
}

#[test]
fn test_open_empty_file_keeps_one_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let (buffer, _) = Buffer::open(path);

    assert_eq!(buffer.lines, vec![String::new()]);
}

#[test]
fn test_crlf_input_is_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("crlf.txt");
    fs::write(&path, "a\r\nb\r\n").unwrap();

    let lines = read_lines(&path).unwrap();

    assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("binary.txt");
    fs::write(&path, b"ab\xffcd\n").unwrap();

    let lines = read_lines(&path).unwrap();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains('\u{FFFD}'));
}

#[test]
fn test_save_failure_leaves_buffer_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("out.txt");

    let mut buffer = Buffer::new();
    buffer.lines = vec!["abc".to_string()];
    buffer.dirty = true;

    assert!(buffer.save_to(path).is_err());
    assert!(buffer.dirty);
    assert!(buffer.path.is_none());
    assert_eq!(buffer.name, "untitled");
}

#[test]
fn test_save_without_path_is_an_error() {
    let mut buffer = Buffer::new();
    buffer.dirty = true;

    assert!(buffer.save().is_err());
    assert!(buffer.dirty);
}

#[test]
fn test_set_path_refreshes_name() {
    let mut buffer = Buffer::new();

    buffer.set_path(Some("notes/todo.txt".into()));
    assert_eq!(buffer.name, "todo.txt");

    buffer.set_path(None);
    assert_eq!(buffer.name, "untitled");
    assert!(buffer.path.is_none());
}
