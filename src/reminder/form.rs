use tracing::{debug, info};

use super::notice::Notice;

pub const DATE_SENTINEL: &str = "Select a date";
pub const TIME_SENTINEL: &str = "Select a time";

const SUMMARY_PREFIX: &str = "Reminder set for ";

/// Transient state behind the reminder screen.
///
/// Every field lives only as long as the screen does. Transitions never fail;
/// the ones the user should hear about return a [`Notice`] for the host to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderForm {
    draft: String,
    selected_date: String,
    selected_time: String,
    show_date_picker: bool,
    show_time_picker: bool,
    summary: String,
    last_note: String,
}

impl Default for ReminderForm {
    fn default() -> Self {
        Self {
            draft: String::new(),
            selected_date: DATE_SENTINEL.to_string(),
            selected_time: TIME_SENTINEL.to_string(),
            show_date_picker: false,
            show_time_picker: false,
            summary: String::new(),
            last_note: String::new(),
        }
    }
}

impl ReminderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn selected_time(&self) -> &str {
        &self.selected_time
    }

    pub fn show_date_picker(&self) -> bool {
        self.show_date_picker
    }

    pub fn show_time_picker(&self) -> bool {
        self.show_time_picker
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn last_note(&self) -> &str {
        &self.last_note
    }

    /// True while a committed reminder is on screen.
    pub fn is_set(&self) -> bool {
        !self.summary.is_empty()
    }

    /// The last committed note as displayed, behind `indent` spaces.
    pub fn note_line(&self, indent: usize) -> String {
        format!("{}{}", " ".repeat(indent), self.last_note)
    }

    pub fn update_draft(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Commits the draft against whatever date and time are selected.
    ///
    /// Sentinels are not rejected: setting without picking anything yields
    /// "Reminder set for Select a time @ Select a date".
    pub fn set_reminder(&mut self) -> Notice {
        self.summary = format!(
            "{}{} @ {}",
            SUMMARY_PREFIX, self.selected_time, self.selected_date
        );
        self.last_note = std::mem::take(&mut self.draft);
        info!(summary = %self.summary, note_len = self.last_note.len(), "reminder set");
        Notice::ReminderSet
    }

    pub fn clear_reminder(&mut self) -> Notice {
        *self = Self::default();
        info!("reminder cleared");
        Notice::ReminderCleared
    }

    pub fn open_date_picker(&mut self) {
        debug!("date picker opened");
        self.show_date_picker = true;
    }

    pub fn open_time_picker(&mut self) {
        debug!("time picker opened");
        self.show_time_picker = true;
    }

    /// `month0` is zero-based; the stored text is `month/day/year` with a
    /// one-based month and no padding.
    pub fn confirm_date(&mut self, year: i32, month0: u32, day: u32) {
        self.selected_date = format_date(year, month0, day);
        self.show_date_picker = false;
        debug!(date = %self.selected_date, "date confirmed");
    }

    pub fn confirm_time(&mut self, hour: u32, minute: u32) {
        self.selected_time = format_time(hour, minute);
        self.show_time_picker = false;
        debug!(time = %self.selected_time, "time confirmed");
    }

    /// Dismissing a picker closes it and keeps the previous selection.
    pub fn cancel_date_picker(&mut self) {
        debug!("date picker dismissed");
        self.show_date_picker = false;
    }

    pub fn cancel_time_picker(&mut self) {
        debug!("time picker dismissed");
        self.show_time_picker = false;
    }
}

pub fn format_date(year: i32, month0: u32, day: u32) -> String {
    format!("{}/{}/{}", month0 + 1, day, year)
}

pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}
