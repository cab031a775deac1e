//! Core data types shared by the position and radiation models.

use crate::error::{Error, check_coordinates, check_day_of_year, check_longitude};
use crate::time::ClockTime;
use crate::time::local_standard_meridian;
use crate::Result;

/// Location and local clock reading for one evaluation.
///
/// Longitudes follow the west-positive convention of the standard-meridian correction:
/// a site west of its time zone meridian has `meridian - longitude < 0`, which moves solar
/// time earlier than clock time.
///
/// # Example
/// ```
/// # use solar_irradiance::{GeoTimeContext, time::ClockTime};
/// let ctx = GeoTimeContext::new(27.96, 82.54, 32, 75.0, ClockTime::NOON).unwrap();
/// assert_eq!(ctx.day_of_year(), 32);
/// assert_eq!(ctx.meridian(), 75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoTimeContext {
    latitude: f64,
    longitude: f64,
    day_of_year: u32,
    meridian: f64,
    clock: ClockTime,
}

impl GeoTimeContext {
    /// Creates a context from explicit components.
    ///
    /// # Arguments
    /// * `latitude` - Observer latitude in degrees (-90 to +90)
    /// * `longitude` - Observer longitude in degrees (-180 to +180)
    /// * `day_of_year` - Day index, January 1 = 1
    /// * `meridian` - Local standard meridian in degrees, same sign convention as `longitude`
    /// * `clock` - Local standard clock time
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidDayOfYear` for out-of-range input.
    pub fn new(
        latitude: f64,
        longitude: f64,
        day_of_year: u32,
        meridian: f64,
        clock: ClockTime,
    ) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_longitude(meridian)?;
        check_day_of_year(day_of_year)?;
        Ok(Self {
            latitude,
            longitude,
            day_of_year,
            meridian,
            clock,
        })
    }

    /// Creates a context using the standard meridian nearest to `longitude`.
    ///
    /// # Errors
    /// Same as [`GeoTimeContext::new`].
    pub fn with_nearest_meridian(
        latitude: f64,
        longitude: f64,
        day_of_year: u32,
        clock: ClockTime,
    ) -> Result<Self> {
        Self::new(
            latitude,
            longitude,
            day_of_year,
            local_standard_meridian(longitude),
            clock,
        )
    }

    /// Creates a context from a `YYYY-MM-DD HH:MM:SS` local standard time stamp.
    ///
    /// The day-of-year index is derived from the time stamp's date.
    ///
    /// # Errors
    /// Returns `InvalidFormat` for malformed text, or a coordinate error.
    ///
    /// # Example
    /// ```
    /// # use solar_irradiance::GeoTimeContext;
    /// let ctx = GeoTimeContext::from_timestamp(27.96, 82.54, "2025-02-01 12:00:00", 75.0).unwrap();
    /// assert_eq!(ctx.day_of_year(), 32);
    /// assert_eq!(ctx.clock().to_string(), "12:00:00");
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_timestamp(
        latitude: f64,
        longitude: f64,
        timestamp: &str,
        meridian: f64,
    ) -> Result<Self> {
        let datetime = crate::time::parse_local_timestamp(timestamp)?;
        Self::from_naive_datetime(latitude, longitude, datetime, meridian)
    }

    /// Creates a context from a chrono local date and time.
    ///
    /// # Errors
    /// Returns a coordinate error for out-of-range input.
    #[cfg(feature = "chrono")]
    pub fn from_naive_datetime(
        latitude: f64,
        longitude: f64,
        datetime: chrono::NaiveDateTime,
        meridian: f64,
    ) -> Result<Self> {
        Self::new(
            latitude,
            longitude,
            crate::time::day_of_year_from_date(&datetime),
            meridian,
            ClockTime::from(datetime),
        )
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Day of year, January 1 = 1.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Local standard meridian in degrees.
    #[must_use]
    pub const fn meridian(&self) -> f64 {
        self.meridian
    }

    /// Local standard clock time.
    #[must_use]
    pub const fn clock(&self) -> ClockTime {
        self.clock
    }

    /// Minutes added to clock time by the standard-meridian correction, 4 min per degree.
    #[must_use]
    pub fn meridian_offset_minutes(&self) -> f64 {
        4.0 * (self.meridian - self.longitude)
    }
}

/// A sunrise, transit or sunset instant read on both clocks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunEvent {
    /// Apparent solar time of the event.
    pub solar: ClockTime,
    /// Local standard time of the event.
    pub local: ClockTime,
}

/// Result of sunrise/sunset calculations for a given day.
///
/// At high latitudes the sunset hour angle is undefined for part of the year: the sun
/// either stays above the horizon (polar day) or below it (polar night).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SunriseResult<T = ()> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar transit
        transit: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar transit
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

/// Sun position and day geometry for one [`GeoTimeContext`].
///
/// Angles are in degrees. Azimuth is measured from south, positive toward west, so the
/// morning sun has a negative azimuth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPosition {
    pub(crate) declination: f64,
    pub(crate) equation_of_time: f64,
    pub(crate) solar_time: ClockTime,
    pub(crate) hour_angle: f64,
    pub(crate) altitude: f64,
    pub(crate) azimuth: f64,
    pub(crate) sunset_hour_angle: Option<f64>,
    pub(crate) sunrise_sunset: SunriseResult<SunEvent>,
}

impl SolarPosition {
    /// Solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Apparent solar time.
    #[must_use]
    pub const fn solar_time(&self) -> ClockTime {
        self.solar_time
    }

    /// Hour angle in degrees, negative before solar noon.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Solar altitude above the horizon in degrees.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Solar zenith angle in degrees (90° - altitude).
    #[must_use]
    pub fn zenith(&self) -> f64 {
        90.0 - self.altitude
    }

    /// Solar azimuth in degrees from south, positive toward west.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Checks if the sun is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }

    /// Sunrise, transit and sunset on solar and local clocks.
    #[must_use]
    pub const fn sunrise_sunset(&self) -> &SunriseResult<SunEvent> {
        &self.sunrise_sunset
    }

    /// Sunset hour angle in degrees.
    ///
    /// # Errors
    /// Returns `DomainError` during polar day or polar night.
    pub fn sunset_hour_angle(&self) -> Result<f64> {
        self.sunset_hour_angle
            .ok_or(Error::domain("sunset hour angle undefined during polar day or night"))
    }

    /// Sunrise hour angle in degrees, the negative of the sunset hour angle.
    ///
    /// # Errors
    /// Returns `DomainError` during polar day or polar night.
    pub fn sunrise_hour_angle(&self) -> Result<f64> {
        self.sunset_hour_angle().map(|h| -h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(h: u32) -> SunEvent {
        let t = ClockTime::from_hms(h, 0, 0).unwrap();
        SunEvent { solar: t, local: t }
    }

    #[test]
    fn test_context_validation() {
        assert!(GeoTimeContext::new(27.96, 82.54, 32, 75.0, ClockTime::NOON).is_ok());
        assert_eq!(
            GeoTimeContext::new(95.0, 0.0, 1, 0.0, ClockTime::NOON),
            Err(Error::invalid_latitude(95.0))
        );
        assert!(GeoTimeContext::new(0.0, 200.0, 1, 0.0, ClockTime::NOON).is_err());
        assert!(GeoTimeContext::new(0.0, 0.0, 1, 195.0, ClockTime::NOON).is_err());
        assert_eq!(
            GeoTimeContext::new(0.0, 0.0, 0, 0.0, ClockTime::NOON),
            Err(Error::invalid_day_of_year(0))
        );
    }

    #[test]
    fn test_context_nearest_meridian() {
        let ctx = GeoTimeContext::with_nearest_meridian(36.08, 115.16, 80, ClockTime::NOON).unwrap();
        assert_eq!(ctx.meridian(), 120.0);
        assert!((ctx.meridian_offset_minutes() - 19.36).abs() < 1e-9);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_context_from_timestamp() {
        let ctx = GeoTimeContext::from_timestamp(25.0, 82.54, "2025-01-16 12:00:00", 90.0).unwrap();
        assert_eq!(ctx.day_of_year(), 16);
        assert_eq!(ctx.clock(), ClockTime::NOON);
        assert!(matches!(
            GeoTimeContext::from_timestamp(25.0, 82.54, "2025-01-16", 90.0),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_sunrise_result_regular_day() {
        let result = SunriseResult::RegularDay {
            sunrise: event(6),
            transit: event(12),
            sunset: event(18),
        };
        assert!(result.is_regular_day());
        assert!(!result.is_polar_day());
        assert_eq!(result.transit(), &event(12));
        assert_eq!(result.sunrise(), Some(&event(6)));
        assert_eq!(result.sunset(), Some(&event(18)));
    }

    #[test]
    fn test_sunrise_result_polar() {
        let day = SunriseResult::AllDay { transit: event(12) };
        assert!(day.is_polar_day());
        assert_eq!(day.sunrise(), None);

        let night = SunriseResult::AllNight { transit: event(12) };
        assert!(night.is_polar_night());
        assert_eq!(night.sunset(), None);
        assert_eq!(night.transit(), &event(12));
    }
}
