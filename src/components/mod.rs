pub mod buttons;
pub mod note_input;
pub mod notice_line;
pub mod picker_dialog;
pub mod status_bar;

pub use buttons::Buttons;
pub use note_input::NoteInput;
pub use notice_line::NoticeLine;
pub use picker_dialog::PickerDialog;
pub use status_bar::StatusBar;

use ratatui::{
    layout::{Constraint, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Field};
use crate::theme;

const NOTE_MIN_LINES: usize = 1;
const NOTE_MAX_LINES: usize = 6;
const SUMMARY_MAX_LINES: usize = 3;

/// Draw the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let note_focused = app.focus == Field::Note;

    let input_lines = NoteInput::line_count(app.form.draft(), note_focused, area.width)
        .clamp(NOTE_MIN_LINES, NOTE_MAX_LINES);
    let summary = wrap_text(app.form.summary(), area.width);
    let summary_lines = summary.len().clamp(1, SUMMARY_MAX_LINES);
    let note = wrap_text(&app.note_line(), area.width);
    let note_lines = note.len().clamp(NOTE_MIN_LINES, NOTE_MAX_LINES);

    let rows = Layout::vertical([
        Constraint::Length(input_lines as u16 + 2), // note input
        Constraint::Length(1),                      // date button
        Constraint::Length(1),                      // spacer
        Constraint::Length(1),                      // time button
        Constraint::Length(1),                      // spacer
        Constraint::Length(1),                      // set / clear
        Constraint::Length(1),                      // spacer
        Constraint::Length(summary_lines as u16),   // summary
        Constraint::Length(note_lines as u16),      // committed note
        Constraint::Min(0),
        Constraint::Length(1), // notice
        Constraint::Length(1), // status bar
    ])
    .split(area);

    NoteInput::render(frame, rows[0], app.form.draft(), note_focused);
    Buttons::render_wide(frame, rows[1], app.form.selected_date(), app.focus == Field::Date);
    Buttons::render_wide(frame, rows[3], app.form.selected_time(), app.focus == Field::Time);
    Buttons::render_actions(frame, rows[5], app.focus);

    let t = theme::current();
    let summary: Vec<Line> = summary
        .into_iter()
        .map(|line| Line::styled(line, t.summary))
        .collect();
    frame.render_widget(Paragraph::new(summary), rows[7]);
    let note: Vec<Line> = note.into_iter().map(Line::from).collect();
    frame.render_widget(Paragraph::new(note), rows[8]);

    NoticeLine::render(frame, rows[10], app.toaster.current().map(|toast| toast.notice));
    StatusBar::render(frame, rows[11], app);

    if let Some(ref picker) = app.date_picker {
        PickerDialog::render_date(frame, area, picker);
    } else if let Some(ref picker) = app.time_picker {
        PickerDialog::render_time(frame, area, picker);
    }
}

/// Split on newlines, then break each line every `width` characters.
pub(crate) fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}
