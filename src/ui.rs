use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::widgets::{EditorView, StatusBar};

impl App {
    /// Main render function: the text area, the status row, and the
    /// hardware cursor. Screen dimensions are re-read from the frame on
    /// every draw rather than cached between frames.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.screen_size = (area.width, area.height);

        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Text area
                Constraint::Length(1), // Status row
            ])
            .split(area);

        let view = EditorView {
            buffer: &self.buffer,
            viewport: self.viewport,
        };
        f.render_widget(view, chunks[0]);

        if let Some(prompt) = &self.prompt_line {
            // An open prompt takes over the status row, cursor included.
            let status_area = chunks[1];
            let shown: String = prompt.chars().take(status_area.width as usize).collect();
            let at_end = shown.chars().count() as u16;
            f.render_widget(
                Paragraph::new(shown).style(Style::default().add_modifier(Modifier::REVERSED)),
                status_area,
            );
            let x = status_area.x + at_end.min(status_area.width.saturating_sub(1));
            f.set_cursor_position(Position::new(x, status_area.y));
        } else {
            let status = StatusBar {
                message: &self.status_message,
                dirty: self.buffer.dirty,
                cursor: self.buffer.cursor,
            };
            f.render_widget(status, chunks[1]);

            let text_area = chunks[0];
            let (row, col) = self.buffer.cursor;
            let x = text_area.x
                + (col.saturating_sub(self.viewport.left_col) as u16)
                    .min(text_area.width.saturating_sub(1));
            let y = text_area.y
                + (row.saturating_sub(self.viewport.top_line) as u16)
                    .min(text_area.height.saturating_sub(1));
            f.set_cursor_position(Position::new(x, y));
        }
    }
}
