pub mod date;
pub mod time;

pub use date::{DatePicker, PickedDate};
pub use time::{PickedTime, TimePicker};

use crossterm::event::KeyCode;

/// Outcome of feeding a key to an open picker dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction<T> {
    Pending,
    Confirm(T),
    Cancel,
}

/// Key handling shared by both dialogs: arrows or hjkl adjust, Enter confirms,
/// Esc dismisses.
pub trait Segmented {
    type Output;

    fn next_segment(&mut self);
    fn prev_segment(&mut self);
    fn increment(&mut self);
    fn decrement(&mut self);
    fn confirm(&self) -> Self::Output;

    fn handle_key(&mut self, code: KeyCode) -> PickerAction<Self::Output> {
        match code {
            KeyCode::Enter => return PickerAction::Confirm(self.confirm()),
            KeyCode::Esc => return PickerAction::Cancel,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.next_segment(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.prev_segment(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => self.increment(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => self.decrement(),
            _ => {}
        }
        PickerAction::Pending
    }
}
