pub mod form;
pub mod notice;

pub use form::ReminderForm;
pub use notice::Notice;
