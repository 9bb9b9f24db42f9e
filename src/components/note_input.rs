use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::wrap_text;
use crate::theme;

const CURSOR: char = '_';

pub struct NoteInput;

impl NoteInput {
    /// Rows the draft takes inside a box of outer width `width`.
    pub fn line_count(draft: &str, focused: bool, width: u16) -> usize {
        wrap_text(&with_cursor(draft, focused), width.saturating_sub(2)).len()
    }

    /// Multi-line text box; shows only the tail when the draft outgrows it.
    pub fn render(frame: &mut Frame, area: Rect, draft: &str, focused: bool) {
        let t = theme::current();
        let border_style = if focused { t.focused } else { t.border };

        let block = Block::default()
            .title(" Reminder ")
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut rows = wrap_text(&with_cursor(draft, focused), inner.width);
        let skip = rows.len().saturating_sub(inner.height as usize);
        let tail = rows.split_off(skip);
        let last = tail.len().saturating_sub(1);

        let lines: Vec<Line> = tail
            .into_iter()
            .enumerate()
            .map(|(i, mut text)| {
                if focused && i == last {
                    text.pop();
                    Line::from(vec![Span::raw(text), Span::styled(CURSOR.to_string(), t.dim)])
                } else {
                    Line::from(text)
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn with_cursor(draft: &str, focused: bool) -> String {
    if focused {
        format!("{draft}{CURSOR}")
    } else {
        draft.to_string()
    }
}
