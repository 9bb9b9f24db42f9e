/// Transient confirmation surfaced after a form action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ReminderSet,
    ReminderCleared,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ReminderSet => "New reminder set successfully!",
            Notice::ReminderCleared => "Reminder cleared successfully!",
        }
    }
}
