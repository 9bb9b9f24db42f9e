use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Field};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let status = theme::current().status;

        let left = if app.form.is_set() { " [set] " } else { " " };

        let hints = if app.form.show_date_picker() || app.form.show_time_picker() {
            if w >= 50 {
                " \u{2190}\u{2192}:Field \u{2191}\u{2193}:Change Enter:OK Esc:Cancel "
            } else {
                " Enter:OK Esc:Cancel "
            }
        } else if app.focus == Field::Note {
            if w >= 60 {
                " Tab:Next ^S:Set ^X:Clear Esc:Leave note ^C:Quit "
            } else {
                " Tab:Next ^C:Quit "
            }
        } else if w >= 60 {
            " Tab/\u{2191}\u{2193}:Move Enter:Press ^S:Set ^X:Clear q:Quit "
        } else {
            " Enter:Press q:Quit "
        };

        let padding = " ".repeat(w.saturating_sub(left.len() + hints.chars().count()));

        let line = Line::from(vec![
            Span::styled(left, status),
            Span::styled(padding, status),
            Span::styled(hints, status),
        ]);

        frame.render_widget(Paragraph::new(line).style(status), area);
    }
}
