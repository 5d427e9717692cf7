use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// The single status row: message on the left, with a `*` marker appended
/// when the buffer is dirty, and the cursor position on the right. The
/// whole row is truncated to the grid width.
pub struct StatusBar<'a> {
    pub message: &'a str,
    pub dirty: bool,
    pub cursor: (usize, usize),
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        let mut text = self.message.to_string();
        if self.dirty {
            text.push_str(" *");
        }

        let (row, col) = self.cursor;
        let position = format!("Ln {}, Col {}", row + 1, col + 1);

        // Message left, position right; the position yields when space is
        // tight, the message is truncated as a last resort.
        let mut line: String = text.chars().take(width).collect();
        let used = line.chars().count();
        let remaining = width - used;
        if position.chars().count() + 1 <= remaining {
            line.push_str(&" ".repeat(remaining - position.chars().count()));
            line.push_str(&position);
        } else {
            line.push_str(&" ".repeat(remaining));
        }

        buf.set_string(
            area.x,
            area.y,
            line,
            Style::default().add_modifier(Modifier::REVERSED),
        );
    }
}
