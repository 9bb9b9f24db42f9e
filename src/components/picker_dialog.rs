use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::picker::date::DateSegment;
use crate::picker::time::TimeSegment;
use crate::picker::{DatePicker, TimePicker};
use crate::theme;

pub struct PickerDialog;

impl PickerDialog {
    pub fn render_date(frame: &mut Frame, area: Rect, picker: &DatePicker) {
        let t = theme::current();
        let seg = |s: DateSegment| if picker.active == s { t.focused } else { Style::default() };

        let value = Line::from(vec![
            Span::styled(format!("{:02}", picker.month()), seg(DateSegment::Month)),
            Span::styled(" / ", t.dim),
            Span::styled(format!("{:02}", picker.day()), seg(DateSegment::Day)),
            Span::styled(" / ", t.dim),
            Span::styled(format!("{:04}", picker.year()), seg(DateSegment::Year)),
        ]);
        let caption = picker
            .date()
            .map(|d| d.format("%A, %B %-d").to_string())
            .unwrap_or_default();

        render_dialog(frame, area, " Select date ", value, caption);
    }

    pub fn render_time(frame: &mut Frame, area: Rect, picker: &TimePicker) {
        let t = theme::current();
        let seg = |s: TimeSegment| if picker.active == s { t.focused } else { Style::default() };

        let value = Line::from(vec![
            Span::styled(format!("{:02}", picker.hour()), seg(TimeSegment::Hour)),
            Span::styled(" : ", t.dim),
            Span::styled(format!("{:02}", picker.minute()), seg(TimeSegment::Minute)),
        ]);

        render_dialog(frame, area, " Select time ", value, "24-hour".to_string());
    }
}

fn render_dialog(frame: &mut Frame, area: Rect, title: &str, value: Line, caption: String) {
    let t = theme::current();

    // Center the dialog popup
    let popup_w = area.width.min(34).max(24);
    let popup_h = area.height.min(7).max(6);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(title.to_string())
        .title_style(t.header)
        .borders(Borders::ALL)
        .border_style(t.border);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let rows = Layout::vertical([
        Constraint::Length(1), // value
        Constraint::Length(1), // caption
        Constraint::Length(1), // spacer
        Constraint::Length(1), // help
        Constraint::Min(0),
    ])
    .split(inner);

    frame.render_widget(Paragraph::new(value).centered(), rows[0]);
    frame.render_widget(
        Paragraph::new(Line::styled(caption, t.dim)).centered(),
        rows[1],
    );

    let key = t.header;
    let help = Line::from(vec![
        Span::styled("Enter", key),
        Span::styled(":OK ", t.dim),
        Span::styled("Esc", key),
        Span::styled(":Cancel", t.dim),
    ]);
    frame.render_widget(Paragraph::new(help).centered(), rows[3]);
}
