use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::Field;
use crate::theme;

pub const SET_LABEL: &str = "Set the reminder!";
pub const CLEAR_LABEL: &str = "Clear the reminder!";

pub struct Buttons;

impl Buttons {
    /// Full-width button, used for the date and time selectors.
    pub fn render_wide(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
        render_button(frame, area, label, focused);
    }

    /// Set and clear side by side.
    pub fn render_actions(frame: &mut Frame, area: Rect, focus: Field) {
        let cols = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Percentage(50),
        ])
        .split(area);

        render_button(frame, cols[0], SET_LABEL, focus == Field::Set);
        render_button(frame, cols[2], CLEAR_LABEL, focus == Field::Clear);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let t = theme::current();
    let style = if focused { t.focused } else { t.button };
    let para = Paragraph::new(Line::from(label.to_string()))
        .style(style)
        .centered();
    frame.render_widget(para, area);
}
