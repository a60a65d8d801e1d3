//! Platform time service.
//!
//! The clock component formats whatever a `TimeService` hands it, so tests
//! can drive it with fixed times and the binary plugs in the system clock.

use startpage_types::error::Result;

/// A wall-clock timestamp with a precomputed weekday.
#[derive(Debug, Clone, Copy)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Abstraction over wall-clock time.
pub trait TimeService {
    /// Current local wall-clock time.
    fn now(&self) -> Result<SystemTime>;
}

/// System clock backed by `std::time`.
///
/// Applies a fixed UTC offset taken from the `TZ_OFFSET_HOURS` environment
/// variable at construction; full timezone databases are out of scope.
pub struct SystemClock {
    offset_hours: i64,
}

impl SystemClock {
    pub fn new() -> Self {
        let offset_hours = std::env::var("TZ_OFFSET_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| (-12..=14).contains(v))
            .unwrap_or(0);
        Self { offset_hours }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for SystemClock {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = (dur.as_secs() as i64 + self.offset_hours * 3600).max(0) as u64;

        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;

        let (year, month, day) = days_to_ymd(days);
        let weekday = weekday_from_days(days);

        Ok(SystemTime {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            second,
        })
    }
}

/// Convert days since the Unix epoch to (year, month, day).
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 0u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    if month == 0 {
        month = 12;
    }
    (year, month, (days + 1) as u8)
}

/// Weekday (0 = Sunday) for a day count since the epoch. 1970-01-01 was a
/// Thursday.
pub(crate) fn weekday_from_days(days: u64) -> u8 {
    ((days + 4) % 7) as u8
}

pub(crate) fn is_leap(y: u16) -> bool {
    (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_to_ymd_zero() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
    }

    #[test]
    fn days_to_ymd_first_of_february() {
        assert_eq!(days_to_ymd(31), (1970, 2, 1));
    }

    #[test]
    fn days_to_ymd_leap_year_feb_29() {
        // 2024-02-29 is day 19782.
        assert_eq!(days_to_ymd(19782), (2024, 2, 29));
    }

    #[test]
    fn days_to_ymd_december_31() {
        // 1970-12-31 is day 364.
        assert_eq!(days_to_ymd(364), (1970, 12, 31));
    }

    #[test]
    fn weekday_epoch_is_thursday() {
        assert_eq!(weekday_from_days(0), 4);
    }

    #[test]
    fn weekday_wraps_to_sunday() {
        // 1970-01-04 was a Sunday.
        assert_eq!(weekday_from_days(3), 0);
    }

    #[test]
    fn weekday_known_date() {
        // 2024-02-29 (day 19782) was a Thursday.
        assert_eq!(weekday_from_days(19782), 4);
    }

    #[test]
    fn is_leap_rules() {
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
        assert!(!is_leap(1900));
        assert!(is_leap(2000));
    }

    #[test]
    fn system_clock_now_is_plausible() {
        let clock = SystemClock::new();
        let t = clock.now().unwrap();
        assert!(t.year >= 2024);
        assert!((1..=12).contains(&t.month));
        assert!((1..=31).contains(&t.day));
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.weekday < 7);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ymd_always_in_range(days in 0u64..60000) {
                let (y, m, d) = days_to_ymd(days);
                prop_assert!(y >= 1970);
                prop_assert!((1..=12).contains(&m));
                prop_assert!((1..=31).contains(&d));
            }

            #[test]
            fn weekday_always_in_range(days in any::<u64>()) {
                prop_assert!(weekday_from_days(days) < 7);
            }

            #[test]
            fn consecutive_days_advance_weekday(days in 0u64..100000) {
                let a = weekday_from_days(days);
                let b = weekday_from_days(days + 1);
                prop_assert_eq!((a + 1) % 7, b);
            }
        }
    }
}
