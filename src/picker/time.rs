use chrono::{NaiveTime, Timelike};

use super::Segmented;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSegment {
    Hour,
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedTime {
    pub hour: u32,
    pub minute: u32,
}

/// 24-hour clock picker.
#[derive(Debug, Clone)]
pub struct TimePicker {
    hour: u32,
    minute: u32,
    pub active: TimeSegment,
}

impl TimePicker {
    pub fn new(now: NaiveTime) -> Self {
        Self {
            hour: now.hour(),
            minute: now.minute(),
            active: TimeSegment::Hour,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    fn toggle_segment(&mut self) {
        self.active = match self.active {
            TimeSegment::Hour => TimeSegment::Minute,
            TimeSegment::Minute => TimeSegment::Hour,
        };
    }
}

impl Segmented for TimePicker {
    type Output = PickedTime;

    fn next_segment(&mut self) {
        self.toggle_segment();
    }

    fn prev_segment(&mut self) {
        self.toggle_segment();
    }

    fn increment(&mut self) {
        match self.active {
            TimeSegment::Hour => self.hour = (self.hour + 1) % 24,
            TimeSegment::Minute => self.minute = (self.minute + 1) % 60,
        }
    }

    fn decrement(&mut self) {
        match self.active {
            TimeSegment::Hour => self.hour = (self.hour + 23) % 24,
            TimeSegment::Minute => self.minute = (self.minute + 59) % 60,
        }
    }

    fn confirm(&self) -> PickedTime {
        PickedTime {
            hour: self.hour,
            minute: self.minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::*;
    use crate::picker::PickerAction;

    fn picker(h: u32, m: u32) -> TimePicker {
        TimePicker::new(NaiveTime::from_hms_opt(h, m, 42).unwrap())
    }

    #[test]
    fn defaults_to_given_time_without_seconds() {
        assert_eq!(picker(9, 5).confirm(), PickedTime { hour: 9, minute: 5 });
    }

    #[test]
    fn hour_wraps_on_24_hour_clock() {
        let mut p = picker(23, 0);
        p.handle_key(KeyCode::Up);
        assert_eq!(p.hour(), 0);
        p.handle_key(KeyCode::Down);
        assert_eq!(p.hour(), 23);
    }

    #[test]
    fn minute_wraps() {
        let mut p = picker(12, 59);
        p.handle_key(KeyCode::Right);
        assert_eq!(p.active, TimeSegment::Minute);
        p.handle_key(KeyCode::Char('k'));
        assert_eq!((p.hour(), p.minute()), (12, 0));
        p.handle_key(KeyCode::Char('j'));
        assert_eq!(p.minute(), 59);
    }

    #[test]
    fn enter_confirms() {
        let mut p = picker(7, 30);
        assert_eq!(
            p.handle_key(KeyCode::Enter),
            PickerAction::Confirm(PickedTime { hour: 7, minute: 30 })
        );
    }
}
