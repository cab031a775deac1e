//! Calendar and clock utilities for solar geometry.
//!
//! This module provides day-of-year indexing, local standard meridian rounding and a
//! wrapping [`ClockTime`] used for solar time, sunrise and sunset.

use crate::error::check_finite;
use crate::math::{floor, round, wrap_positive};
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// Seconds per day (86,400)
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per hour (3,600)
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Degrees of hour angle per hour of time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Width of a standard time zone in degrees of longitude.
const MERIDIAN_SPACING: f64 = 15.0;

/// Day-of-year index with January 1 = 1.
///
/// # Arguments
/// * `year` - Gregorian year, used only to decide whether February has 29 days
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
///
/// # Errors
/// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in that month.
///
/// # Example
/// ```
/// # use solar_irradiance::time::day_of_year;
/// assert_eq!(day_of_year(2025, 2, 1).unwrap(), 32);
/// assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(Error::invalid_date("day is out of range for month"));
    }

    let preceding: u32 = (1..month).map(|m| days_in_month(year, m)).sum();
    Ok(preceding + day)
}

/// Day-of-year index for month-name text such as `"Feb 1"`.
///
/// # Errors
/// Returns `InvalidDate` if the text is not an abbreviated month name followed by a day
/// that exists in the given year.
///
/// # Example
/// ```
/// # use solar_irradiance::time::day_of_year_from_str;
/// assert_eq!(day_of_year_from_str("Feb 1", 2025).unwrap(), 32);
/// assert_eq!(day_of_year_from_str("Mar 21", 2025).unwrap(), 80);
/// ```
#[cfg(feature = "chrono")]
pub fn day_of_year_from_str(text: &str, year: i32) -> Result<u32> {
    use chrono::format::{Parsed, StrftimeItems, parse};

    let mut parsed = Parsed::new();
    parse(&mut parsed, text.trim(), StrftimeItems::new("%b %d"))
        .map_err(|_| Error::invalid_date("expected abbreviated month name and day, e.g. \"Feb 1\""))?;
    parsed
        .set_year(i64::from(year))
        .map_err(|_| Error::invalid_date("year out of range"))?;
    let date = parsed
        .to_naive_date()
        .map_err(|_| Error::invalid_date("day is out of range for month"))?;
    Ok(date.ordinal())
}

/// Local standard meridian nearest to a longitude.
///
/// Rounds `longitude / 15` to the nearest integer, half-way cases away from zero, and
/// scales back to degrees. The sign convention of the input is preserved.
///
/// # Example
/// ```
/// # use solar_irradiance::time::local_standard_meridian;
/// assert_eq!(local_standard_meridian(-82.27), -75.0);
/// assert_eq!(local_standard_meridian(115.16), 120.0);
/// ```
#[must_use]
pub fn local_standard_meridian(longitude: f64) -> f64 {
    round(longitude / MERIDIAN_SPACING) * MERIDIAN_SPACING
}

/// Converts `HH:MM:SS` clock text to an hour angle in degrees.
///
/// Computes `((H - 12) * 3600 + M * 60 + S) / 86400 * 360`, so noon maps to 0°,
/// midnight to -180° and 18:00 to +90°.
///
/// # Errors
/// Returns `InvalidFormat` if the text is not a well-formed 24-hour clock time.
///
/// # Example
/// ```
/// # use solar_irradiance::time::hour_angle_from_clock_time;
/// assert_eq!(hour_angle_from_clock_time("18:00:00").unwrap(), 90.0);
/// ```
pub fn hour_angle_from_clock_time(text: &str) -> Result<f64> {
    let time = text.parse::<ClockTime>()?;
    Ok(time.hour_angle())
}

/// Parses a local standard time stamp in `YYYY-MM-DD HH:MM:SS` form.
///
/// # Errors
/// Returns `InvalidFormat` if the text does not match the format.
#[cfg(feature = "chrono")]
pub fn parse_local_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%d %H:%M:%S")
        .map_err(|_| Error::invalid_format("expected timestamp as YYYY-MM-DD HH:MM:SS"))
}

/// Time of day with sub-second resolution, wrapping at midnight.
///
/// Solar time and sunrise/sunset are expressed as clock times. Arithmetic that crosses
/// midnight wraps into the adjacent day, matching how a wall clock reads.
///
/// # Example
/// ```
/// # use solar_irradiance::time::ClockTime;
/// let noon = ClockTime::from_hms(12, 0, 0).unwrap();
/// let later = noon.add_minutes(-43.5);
/// assert_eq!(later.to_string(), "11:16:30");
/// assert_eq!(ClockTime::from_hms(23, 50, 0).unwrap().add_minutes(20.0).to_string(), "00:10:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime {
    /// Seconds since midnight, in [0, 86400)
    seconds: f64,
}

impl ClockTime {
    /// Solar noon, 12:00:00.
    pub const NOON: Self = Self {
        seconds: 12.0 * SECONDS_PER_HOUR,
    };

    /// Creates a clock time from seconds since midnight, wrapping into one day.
    ///
    /// # Errors
    /// Returns `DomainError` if `seconds` is not finite.
    pub fn from_seconds(seconds: f64) -> Result<Self> {
        let seconds = check_finite(seconds, "clock time must be finite")?;
        Ok(Self {
            seconds: wrap_positive(seconds, SECONDS_PER_DAY),
        })
    }

    /// Creates a clock time from hour, minute and second components.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if hour is not below 24 or minute/second not below 60.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 {
            return Err(Error::invalid_format("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_format("minute must be between 0 and 59"));
        }
        if second > 59 {
            return Err(Error::invalid_format("second must be between 0 and 59"));
        }
        Ok(Self {
            seconds: f64::from(hour) * SECONDS_PER_HOUR + f64::from(minute) * 60.0 + f64::from(second),
        })
    }

    /// Clock time of a chrono `NaiveTime`, including fractional seconds.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            seconds: f64::from(time.num_seconds_from_midnight())
                + f64::from(time.nanosecond()) / 1e9,
        }
    }

    /// Seconds since midnight.
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Hours since midnight.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Signed hours from noon, negative in the morning. Range is [-12, 12).
    #[must_use]
    pub fn hours_from_noon(&self) -> f64 {
        self.hours() - 12.0
    }

    /// Hour angle in degrees, 15° per hour from noon.
    #[must_use]
    pub fn hour_angle(&self) -> f64 {
        DEGREES_PER_HOUR * self.hours_from_noon()
    }

    /// Shifts the clock by a signed number of minutes, wrapping at midnight.
    ///
    /// A non-finite shift leaves the time unchanged.
    #[must_use]
    pub fn add_minutes(self, minutes: f64) -> Self {
        if !minutes.is_finite() {
            return self;
        }
        Self {
            seconds: wrap_positive(self.seconds + minutes * 60.0, SECONDS_PER_DAY),
        }
    }

    /// Signed difference `self - other` in minutes, taken the short way around the clock.
    #[must_use]
    pub fn minutes_since(&self, other: Self) -> f64 {
        let diff = wrap_positive(self.seconds - other.seconds, SECONDS_PER_DAY);
        let diff = if diff >= SECONDS_PER_DAY / 2.0 {
            diff - SECONDS_PER_DAY
        } else {
            diff
        };
        diff / 60.0
    }

    /// Whole hour, minute and second components, with the seconds truncated.
    #[must_use]
    pub fn hms(&self) -> (u32, u32, u32) {
        let total = floor(self.seconds) as u32 % 86_400;
        (total / 3_600, total % 3_600 / 60, total % 60)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split(':');
        let mut next = || -> Result<u32> {
            parts
                .next()
                .and_then(|p| p.trim().parse::<u32>().ok())
                .ok_or(Error::invalid_format("expected clock time as HH:MM:SS"))
        };
        let (hour, minute, second) = (next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(Error::invalid_format("expected clock time as HH:MM:SS"));
        }
        Self::from_hms(hour, minute, second)
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDateTime> for ClockTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_naive_time(datetime.time())
    }
}

/// Day index within the year for a chrono date.
#[cfg(feature = "chrono")]
pub fn day_of_year_from_date<D: Datelike>(date: &D) -> u32 {
    date.ordinal()
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2025, 1, 1).unwrap(), 1);
        assert_eq!(day_of_year(2025, 2, 1).unwrap(), 32);
        assert_eq!(day_of_year(2025, 3, 21).unwrap(), 80);
        assert_eq!(day_of_year(2025, 6, 21).unwrap(), 172);
        assert_eq!(day_of_year(2025, 12, 31).unwrap(), 365);
        assert_eq!(day_of_year(2024, 3, 1).unwrap(), 61);
        assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
    }

    #[test]
    fn test_day_of_year_invalid() {
        assert!(matches!(
            day_of_year(2025, 13, 1),
            Err(Error::InvalidDate { .. })
        ));
        assert!(day_of_year(2025, 2, 29).is_err());
        assert!(day_of_year(2024, 2, 29).is_ok());
        assert!(day_of_year(2025, 4, 31).is_err());
        assert!(day_of_year(2025, 1, 0).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_day_of_year_from_str() {
        assert_eq!(day_of_year_from_str("Jan 1", 2025).unwrap(), 1);
        assert_eq!(day_of_year_from_str("Jan 16", 2025).unwrap(), 16);
        assert_eq!(day_of_year_from_str("Feb 1", 2025).unwrap(), 32);
        assert_eq!(day_of_year_from_str("Dec 31", 2024).unwrap(), 366);

        assert!(matches!(
            day_of_year_from_str("Foo 1", 2025),
            Err(Error::InvalidDate { .. })
        ));
        assert!(day_of_year_from_str("Feb 30", 2025).is_err());
        assert!(day_of_year_from_str("", 2025).is_err());
    }

    #[test]
    fn test_local_standard_meridian() {
        assert_eq!(local_standard_meridian(-82.27), -75.0);
        assert_eq!(local_standard_meridian(80.0), 75.0);
        assert_eq!(local_standard_meridian(82.54), 90.0);
        assert_eq!(local_standard_meridian(115.16), 120.0);
        assert_eq!(local_standard_meridian(0.0), 0.0);
        assert_eq!(local_standard_meridian(7.5), 15.0);
        assert_eq!(local_standard_meridian(-7.5), -15.0);
    }

    #[test]
    fn test_hour_angle_from_clock_time() {
        assert_eq!(hour_angle_from_clock_time("12:00:00").unwrap(), 0.0);
        assert_eq!(hour_angle_from_clock_time("00:00:00").unwrap(), -180.0);
        assert_eq!(hour_angle_from_clock_time("18:00:00").unwrap(), 90.0);
        assert!((hour_angle_from_clock_time("06:38:02").unwrap() - -80.491_666_666_666_67).abs() < EPSILON);
        assert!((hour_angle_from_clock_time("5:00:00").unwrap() - -105.0).abs() < EPSILON);
    }

    #[test]
    fn test_hour_angle_from_clock_time_invalid() {
        for text in ["", "12", "12:00", "12:00:00:00", "24:00:00", "12:60:00", "ab:cd:ef", "-1:00:00"] {
            assert!(
                matches!(hour_angle_from_clock_time(text), Err(Error::InvalidFormat { .. })),
                "expected InvalidFormat for {text:?}"
            );
        }
    }

    #[test]
    fn test_clock_time_wrapping() {
        let late = ClockTime::from_hms(23, 30, 0).unwrap();
        assert_eq!(late.add_minutes(45.0).to_string(), "00:15:00");

        let early = ClockTime::from_hms(0, 10, 0).unwrap();
        assert_eq!(early.add_minutes(-20.0).to_string(), "23:50:00");

        assert_eq!(ClockTime::from_seconds(-60.0).unwrap().to_string(), "23:59:00");
        assert!(ClockTime::from_seconds(f64::NAN).is_err());
    }

    #[test]
    fn test_clock_time_display_truncates_seconds() {
        let t = ClockTime::from_seconds(12.0 * 3_600.0 + 59.999).unwrap();
        assert_eq!(t.to_string(), "12:00:59");
        assert_eq!(t.hms(), (12, 0, 59));
    }

    #[test]
    fn test_minutes_since() {
        let a = ClockTime::from_hms(0, 5, 0).unwrap();
        let b = ClockTime::from_hms(23, 55, 0).unwrap();
        assert!((a.minutes_since(b) - 10.0).abs() < EPSILON);
        assert!((b.minutes_since(a) + 10.0).abs() < EPSILON);
        assert!((ClockTime::NOON.minutes_since(ClockTime::NOON)).abs() < EPSILON);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_parse_local_timestamp() {
        let ts = parse_local_timestamp("2025-02-01 12:00:00").unwrap();
        assert_eq!(day_of_year_from_date(&ts), 32);
        assert_eq!(ClockTime::from(ts), ClockTime::NOON);

        assert!(matches!(
            parse_local_timestamp("2025-02-01T12:00:00"),
            Err(Error::InvalidFormat { .. })
        ));
        assert!(parse_local_timestamp("yesterday").is_err());
    }
}
