use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use crate::config::Config;
use crate::event::AppEvent;
use crate::picker::{DatePicker, PickedDate, PickedTime, PickerAction, Segmented, TimePicker};
use crate::reminder::{Notice, ReminderForm};
use crate::toast::Toaster;

/// Focusable rows of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Note,
    Date,
    Time,
    Set,
    Clear,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Note => Field::Date,
            Field::Date => Field::Time,
            Field::Time => Field::Set,
            Field::Set => Field::Clear,
            Field::Clear => Field::Note,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Field::Note => Field::Clear,
            Field::Date => Field::Note,
            Field::Time => Field::Date,
            Field::Set => Field::Time,
            Field::Clear => Field::Set,
        }
    }
}

pub struct App {
    pub running: bool,
    pub form: ReminderForm,
    pub focus: Field,
    pub date_picker: Option<DatePicker>,
    pub time_picker: Option<TimePicker>,
    pub toaster: Toaster,
    pub note_indent: usize,
}

impl App {
    pub fn new(config: &Config, tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            running: true,
            form: ReminderForm::new(),
            focus: Field::Note,
            date_picker: None,
            time_picker: None,
            toaster: Toaster::new(tx, config.notice_duration()),
            note_indent: config.note_indent,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::NoticeExpired(id) => self.toaster.expire(id),
            AppEvent::Resize => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        // Open dialogs are modal
        if let Some(picker) = self.date_picker.as_mut() {
            match picker.handle_key(key.code) {
                PickerAction::Confirm(PickedDate { year, month0, day }) => {
                    self.form.confirm_date(year, month0, day);
                    self.date_picker = None;
                }
                PickerAction::Cancel => {
                    self.form.cancel_date_picker();
                    self.date_picker = None;
                }
                PickerAction::Pending => {}
            }
            return;
        }
        if let Some(picker) = self.time_picker.as_mut() {
            match picker.handle_key(key.code) {
                PickerAction::Confirm(PickedTime { hour, minute }) => {
                    self.form.confirm_time(hour, minute);
                    self.time_picker = None;
                }
                PickerAction::Cancel => {
                    self.form.cancel_time_picker();
                    self.time_picker = None;
                }
                PickerAction::Pending => {}
            }
            return;
        }

        match (key.code, ctrl) {
            (KeyCode::Char('s'), true) => self.set_reminder(),
            (KeyCode::Char('x'), true) => self.clear_reminder(),
            (KeyCode::Tab, _) => self.focus = self.focus.next(),
            (KeyCode::BackTab, _) => self.focus = self.focus.prev(),
            (code, ctrl) if self.focus == Field::Note => self.handle_note_input(code, ctrl),
            (code, _) => self.handle_button_input(code),
        }
    }

    fn handle_note_input(&mut self, code: KeyCode, ctrl: bool) {
        let mut draft = self.form.draft().to_string();
        match code {
            KeyCode::Char(c) if !ctrl => draft.push(c),
            KeyCode::Enter => draft.push('\n'),
            KeyCode::Backspace => {
                draft.pop();
            }
            KeyCode::Esc | KeyCode::Down => {
                self.focus = Field::Date;
                return;
            }
            _ => return,
        }
        self.form.update_draft(draft);
    }

    fn handle_button_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.prev(),
            KeyCode::Left | KeyCode::Char('h') if self.focus == Field::Clear => {
                self.focus = Field::Set
            }
            KeyCode::Right | KeyCode::Char('l') if self.focus == Field::Set => {
                self.focus = Field::Clear
            }
            _ => {}
        }
    }

    /// Press the focused button.
    pub fn activate(&mut self) {
        match self.focus {
            Field::Note => {}
            Field::Date => self.open_date_picker(),
            Field::Time => self.open_time_picker(),
            Field::Set => self.set_reminder(),
            Field::Clear => self.clear_reminder(),
        }
    }

    pub fn open_date_picker(&mut self) {
        self.form.open_date_picker();
        self.date_picker = Some(DatePicker::new(Local::now().date_naive()));
    }

    pub fn open_time_picker(&mut self) {
        self.form.open_time_picker();
        self.time_picker = Some(TimePicker::new(Local::now().time()));
    }

    pub fn set_reminder(&mut self) {
        let notice = self.form.set_reminder();
        self.notify(notice);
    }

    pub fn clear_reminder(&mut self) {
        let notice = self.form.clear_reminder();
        self.date_picker = None;
        self.time_picker = None;
        self.notify(notice);
    }

    fn notify(&mut self, notice: Notice) {
        self.toaster.show(notice);
    }

    pub fn note_line(&self) -> String {
        self.form.note_line(self.note_indent)
    }

    pub fn quit(&mut self) {
        info!("quitting");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    fn app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(&Config::default(), tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_edits_draft() {
        let (mut app, _rx) = app();
        type_text(&mut app, "Buy milkk");
        app.handle_key(press(KeyCode::Backspace));
        app.handle_key(press(KeyCode::Enter));
        type_text(&mut app, "and eggs");
        assert_eq!(app.form.draft(), "Buy milk\nand eggs");
    }

    #[test]
    fn q_types_into_note_but_quits_from_buttons() {
        let (mut app, _rx) = app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.form.draft(), "q");

        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let (mut app, _rx) = app();
        app.handle_key(ctrl('c'));
        assert!(!app.running);
    }

    #[test]
    fn focus_ring_wraps() {
        let (mut app, _rx) = app();
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focus, Field::Clear);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Field::Note);
    }

    #[test]
    fn date_picker_confirm_stores_selection() {
        let (mut app, _rx) = app();
        app.focus = Field::Date;
        app.handle_key(press(KeyCode::Enter));
        assert!(app.form.show_date_picker());
        let expected = app.date_picker.as_ref().map(|p| p.confirm());

        app.handle_key(press(KeyCode::Enter));
        assert!(!app.form.show_date_picker());
        assert!(app.date_picker.is_none());
        let d = expected.unwrap();
        assert_eq!(
            app.form.selected_date(),
            format!("{}/{}/{}", d.month0 + 1, d.day, d.year)
        );
    }

    #[test]
    fn time_picker_confirm_stores_adjusted_selection() {
        let (mut app, _rx) = app();
        app.focus = Field::Time;
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Up));
        let expected = app.time_picker.as_ref().map(|p| p.confirm()).unwrap();

        app.handle_key(press(KeyCode::Enter));
        assert!(app.time_picker.is_none());
        assert_eq!(
            app.form.selected_time(),
            format!("{:02}:{:02}", expected.hour, expected.minute)
        );
    }

    #[test]
    fn picker_is_modal_and_esc_cancels() {
        let (mut app, _rx) = app();
        app.focus = Field::Time;
        app.handle_key(press(KeyCode::Char(' ')));
        assert!(app.time_picker.is_some());

        // Tab moves between picker segments, not screen fields
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Field::Time);

        app.handle_key(press(KeyCode::Esc));
        assert!(app.running);
        assert!(app.time_picker.is_none());
        assert!(!app.form.show_time_picker());
        assert_eq!(app.form.selected_time(), "Select a time");
    }

    #[tokio::test]
    async fn set_button_commits_and_shows_notice() {
        let (mut app, _rx) = app();
        type_text(&mut app, "Buy milk");
        app.form.confirm_date(2024, 3, 15);
        app.form.confirm_time(9, 5);
        app.focus = Field::Set;
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.form.summary(), "Reminder set for 09:05 @ 4/15/2024");
        assert_eq!(app.note_line(), "    Buy milk");
        assert_eq!(app.form.draft(), "");
        assert_eq!(
            app.toaster.current().map(|t| t.notice),
            Some(Notice::ReminderSet)
        );
    }

    #[tokio::test]
    async fn ctrl_x_clears_from_note_field() {
        let (mut app, _rx) = app();
        type_text(&mut app, "walk dog");
        app.handle_key(ctrl('s'));
        type_text(&mut app, "draft");
        app.handle_key(ctrl('x'));

        assert_eq!(app.form, ReminderForm::new());
        assert_eq!(
            app.toaster.current().map(|t| t.notice),
            Some(Notice::ReminderCleared)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn expired_notice_is_hidden() {
        let (mut app, mut rx) = app();
        app.set_reminder();
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::NoticeExpired(_)));
        app.handle_event(event);
        assert!(app.toaster.current().is_none());
    }
}
