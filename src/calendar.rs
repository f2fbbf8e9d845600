//! Date strip and greeting for the home screen.
//!
//! The strip shows a fifteen-day window centered on today; one day is
//! selected at a time and drives the "Workout for ..." headline. Dates are
//! plain `NaiveDate`s - the strip never reads the clock after construction,
//! which keeps it testable.

use chrono::{Datelike, Duration, Local, NaiveDate, Timelike};

/// Days shown on either side of today.
const DAY_RADIUS: i64 = 7;

/// Time-of-day greeting, split at noon and 6 pm.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Greeting for the local wall clock.
pub fn greeting_now() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

/// Fifteen-day selectable window centered on today.
#[derive(Debug, Clone)]
pub struct CalendarStrip {
    days: Vec<NaiveDate>,
    selected: usize,
    today: NaiveDate,
}

impl CalendarStrip {
    /// Build the strip around the current local date, with today selected.
    pub fn around_today() -> Self {
        Self::around(Local::now().date_naive())
    }

    fn around(today: NaiveDate) -> Self {
        let days = (-DAY_RADIUS..=DAY_RADIUS)
            .map(|offset| today + Duration::days(offset))
            .collect();
        Self {
            days,
            selected: DAY_RADIUS as usize,
            today,
        }
    }

    /// All days in the window, oldest first.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.days[self.selected]
    }

    /// Move the selection one day back; stops at the window edge.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection one day forward; stops at the window edge.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.days.len() {
            self.selected += 1;
        }
    }

    /// Select a specific day. Returns `false` when the day is outside the
    /// window (the selection is left as it was).
    pub fn select(&mut self, day: NaiveDate) -> bool {
        match self.days.iter().position(|d| *d == day) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Headline over the card grid: "Workout for Today" when today is
    /// selected, otherwise the month name and day number.
    pub fn workout_title(&self) -> String {
        let day = self.selected_day();
        if day == self.today {
            "Workout for Today".to_string()
        } else {
            format!("Workout for {} {}", day.format("%B"), day.day())
        }
    }
}

/// Label parts for one strip entry: upper-cased short weekday and the day
/// number, e.g. `("SAT", 1)`.
pub fn day_label(day: NaiveDate) -> (String, u32) {
    (day.format("%a").to_string().to_uppercase(), day.day())
}
