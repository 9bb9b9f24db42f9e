use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use crate::reminder::Notice;
use crate::theme;

pub struct NoticeLine;

impl NoticeLine {
    pub fn render(frame: &mut Frame, area: Rect, notice: Option<Notice>) {
        let Some(notice) = notice else {
            return;
        };
        let line = Line::styled(format!(" {} ", notice.message()), theme::current().notice);
        frame.render_widget(Paragraph::new(line).centered(), area);
    }
}
