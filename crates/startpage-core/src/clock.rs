//! Wall clock -- centered time and long-form date display.
//!
//! Updated once at startup and then on a one-second cadence for the page
//! lifetime. Formatting never fails; a missing time sample simply leaves the
//! previous strings in place.

use crate::display::DisplayRegistry;
use crate::display::helpers::ensure_text;
use crate::platform::SystemTime;
use crate::theme::{self, Theme};

/// Month names for the date line.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Sunday first.
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Runtime state for the page clock.
#[derive(Debug)]
pub struct WallClock {
    /// Cached `HH:MM` string.
    time_text: String,
    /// Cached long-form date string.
    date_text: String,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            time_text: "00:00".to_string(),
            date_text: String::new(),
        }
    }

    /// Update cached strings from a time sample.
    pub fn update(&mut self, t: &SystemTime) {
        self.time_text = format!("{:02}:{:02}", t.hour, t.minute);
        let weekday = WEEKDAYS[(t.weekday % 7) as usize];
        let month = if (1..=12).contains(&t.month) {
            MONTHS[(t.month - 1) as usize]
        } else {
            "???"
        };
        self.date_text = format!("{weekday}, {month} {}, {}", t.day, t.year);
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    /// Synchronize the two clock display regions, centered on the page.
    pub fn update_display(&self, reg: &mut DisplayRegistry, th: &Theme) {
        let time_x = (theme::SCREEN_W - self.time_text.len() as i32) / 2;
        ensure_text(
            reg,
            "clock_time",
            time_x,
            theme::CLOCK_TIME_Y,
            th.text,
            theme::Z_CONTENT,
        );
        if let Ok(obj) = reg.get_mut("clock_time") {
            obj.text = Some(self.time_text.clone());
        }

        let date_x = (theme::SCREEN_W - self.date_text.len() as i32) / 2;
        ensure_text(
            reg,
            "clock_date",
            date_x,
            theme::CLOCK_DATE_Y,
            th.dim_text,
            theme::Z_CONTENT,
        );
        if let Ok(obj) = reg.get_mut("clock_date") {
            if self.date_text.is_empty() {
                obj.visible = false;
            } else {
                obj.text = Some(self.date_text.clone());
            }
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SystemTime {
        SystemTime {
            year: 2026,
            month: 8,
            day: 25,
            weekday: 2,
            hour: 14,
            minute: 5,
            second: 0,
        }
    }

    #[test]
    fn time_is_zero_padded() {
        let mut clock = WallClock::new();
        let mut t = sample();
        t.hour = 9;
        t.minute = 3;
        clock.update(&t);
        assert_eq!(clock.time_text(), "09:03");
    }

    #[test]
    fn time_is_24_hour() {
        let mut clock = WallClock::new();
        clock.update(&sample());
        assert_eq!(clock.time_text(), "14:05");
    }

    #[test]
    fn date_long_form() {
        let mut clock = WallClock::new();
        clock.update(&sample());
        assert_eq!(clock.date_text(), "Tuesday, August 25, 2026");
    }

    #[test]
    fn out_of_range_month_is_marked() {
        let mut clock = WallClock::new();
        let mut t = sample();
        t.month = 13;
        clock.update(&t);
        assert!(clock.date_text().contains("???"));
    }

    #[test]
    fn update_display_creates_regions() {
        let mut clock = WallClock::new();
        clock.update(&sample());
        let mut reg = DisplayRegistry::new();
        clock.update_display(&mut reg, &Theme::default());
        assert!(reg.contains("clock_time"));
        assert!(reg.contains("clock_date"));
        assert_eq!(
            reg.get("clock_time").unwrap().text.as_deref(),
            Some("14:05")
        );
    }

    #[test]
    fn empty_date_region_is_hidden() {
        let clock = WallClock::new();
        let mut reg = DisplayRegistry::new();
        clock.update_display(&mut reg, &Theme::default());
        assert!(!reg.get("clock_date").unwrap().visible);
    }

    #[test]
    fn successive_updates_overwrite() {
        let mut clock = WallClock::new();
        clock.update(&sample());
        let mut t = sample();
        t.hour = 15;
        t.minute = 6;
        clock.update(&t);
        assert_eq!(clock.time_text(), "15:06");
    }
}
