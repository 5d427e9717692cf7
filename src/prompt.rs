//! Blocking line input in the status row.
//!
//! Used by the quit confirmation and exposed to extensions as the ask-user
//! capability. The editor is unresponsive to everything but keys while a
//! prompt is open; that is the one nested suspension point in the loop.

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::Terminal;

use crate::app::App;
use crate::input::EventSource;

/// Ask the user for a line of text, blocking until they answer. Enter
/// accepts; Esc or Ctrl+C cancels (`None`). The status row shows the
/// message and echoes the input; the caller's next draw restores it.
pub fn read_line<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    app: &mut App,
    message: &str,
) -> Result<Option<String>> {
    let mut input = String::new();

    let answer = loop {
        app.prompt_line = Some(format!("{}{}", message, input));
        terminal.draw(|f| app.render(f))?;

        match events.next()? {
            Event::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Enter, _) => break Some(input),
                (KeyCode::Esc, _) => break None,
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => break None,
                (KeyCode::Backspace, _) => {
                    input.pop();
                }
                (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                    input.push(c);
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                app.screen_size = (width, height);
            }
            _ => {}
        }
    };

    app.prompt_line = None;
    Ok(answer)
}
