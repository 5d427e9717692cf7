use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::buffer::Buffer;
use crate::viewport::Viewport;

/// Paints the visible window of the buffer.
pub struct EditorView<'a> {
    pub buffer: &'a Buffer,
    pub viewport: Viewport,
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let start_row = self.viewport.top_line;
        let end_row = (start_row + area.height as usize).min(self.buffer.lines.len());
        let h_offset = self.viewport.left_col;

        let mut lines = Vec::with_capacity(end_row.saturating_sub(start_row));
        for i in start_row..end_row {
            let line = &self.buffer.lines[i];
            // Slice off the scrolled-out prefix without cloning
            let visible = if h_offset < line.len() {
                &line[h_offset..]
            } else {
                ""
            };
            lines.push(Line::raw(visible));
        }

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .render(area, buf);
    }
}
