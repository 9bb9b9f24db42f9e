use chrono::{Datelike, NaiveDate};

use super::Segmented;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSegment {
    Month,
    Day,
    Year,
}

impl DateSegment {
    pub fn next(&self) -> Self {
        match self {
            DateSegment::Month => DateSegment::Day,
            DateSegment::Day => DateSegment::Year,
            DateSegment::Year => DateSegment::Month,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            DateSegment::Month => DateSegment::Year,
            DateSegment::Day => DateSegment::Month,
            DateSegment::Year => DateSegment::Day,
        }
    }
}

/// A confirmed date. `month0` is zero-based like the platform pickers report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedDate {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

#[derive(Debug, Clone)]
pub struct DatePicker {
    year: i32,
    month: u32,
    day: u32,
    pub active: DateSegment,
}

impl DatePicker {
    /// Opens on `today`, month segment focused.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            day: today.day(),
            active: DateSegment::Month,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    fn clamp_day(&mut self) {
        self.day = self.day.min(days_in_month(self.year, self.month));
    }

    fn step(&mut self, forward: bool) {
        match self.active {
            DateSegment::Month => {
                self.month = wrap(self.month, 1, 12, forward);
                self.clamp_day();
            }
            DateSegment::Day => {
                self.day = wrap(self.day, 1, days_in_month(self.year, self.month), forward);
            }
            DateSegment::Year => {
                self.year = if forward {
                    (self.year + 1).min(MAX_YEAR)
                } else {
                    (self.year - 1).max(MIN_YEAR)
                };
                self.clamp_day();
            }
        }
    }
}

impl Segmented for DatePicker {
    type Output = PickedDate;

    fn next_segment(&mut self) {
        self.active = self.active.next();
    }

    fn prev_segment(&mut self) {
        self.active = self.active.prev();
    }

    fn increment(&mut self) {
        self.step(true);
    }

    fn decrement(&mut self) {
        self.step(false);
    }

    fn confirm(&self) -> PickedDate {
        PickedDate {
            year: self.year,
            month0: self.month - 1,
            day: self.day,
        }
    }
}

fn wrap(value: u32, min: u32, max: u32, forward: bool) -> u32 {
    if forward {
        if value >= max { min } else { value + 1 }
    } else if value <= min {
        max
    } else {
        value - 1
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}
