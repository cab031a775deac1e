//! Solar position engine.
//!
//! Computes declination, equation of time, solar time, hour angle, altitude, azimuth and
//! sunrise/sunset from a [`GeoTimeContext`] using the classical empirical formulas found in
//! solar engineering texts (Cooper declination, Spencer-style equation of time).
//!
//! Every function is pure; [`solar_position`] chains them into a single immutable
//! [`SolarPosition`] record.

#![allow(clippy::unreadable_literal)]

use crate::error::check_unit_interval;
use crate::math::{acos, asin, atan2, cos_deg, radians_to_degrees, sin_deg, tan_deg};
use crate::time::{ClockTime, DEGREES_PER_HOUR};
use crate::types::{SunEvent, SunriseResult};
use crate::{GeoTimeContext, Result, SolarPosition};
use tracing::debug;

/// Obliquity used by the declination formula, in degrees.
const OBLIQUITY: f64 = 23.45;

/// Solar declination in degrees for a day of year.
///
/// δ = asin(sin 23.45° · sin(360° (284 + n) / 365))
///
/// # Example
/// ```
/// # use solar_irradiance::position::declination;
/// assert!((declination(172) - 23.45).abs() < 0.01);
/// ```
#[must_use]
pub fn declination(day_of_year: u32) -> f64 {
    let n = f64::from(day_of_year);
    radians_to_degrees(asin(
        sin_deg(OBLIQUITY) * sin_deg(360.0 * (284.0 + n) / 365.0),
    ))
}

/// Equation of time in minutes.
///
/// B = 360° (n - 81) / 364; ET = 9.87 sin 2B - 7.53 cos B - 1.5 sin B
#[must_use]
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = 360.0 * (f64::from(day_of_year) - 81.0) / 364.0;
    9.87 * sin_deg(2.0 * b) - 7.53 * cos_deg(b) - 1.5 * sin_deg(b)
}

/// Total minutes added to local standard time to obtain apparent solar time.
fn solar_offset_minutes(ctx: &GeoTimeContext, equation_of_time: f64) -> f64 {
    equation_of_time + ctx.meridian_offset_minutes()
}

/// Apparent solar time for the context's clock reading.
///
/// Adds the equation of time and 4 minutes per degree between the standard meridian and
/// the site longitude, wrapping at midnight.
#[must_use]
pub fn solar_time(ctx: &GeoTimeContext, equation_of_time: f64) -> ClockTime {
    ctx.clock()
        .add_minutes(solar_offset_minutes(ctx, equation_of_time))
}

/// Converts an apparent solar clock time back to local standard time.
///
/// This is the exact inverse of [`local_to_solar`].
#[must_use]
pub fn solar_to_local(ctx: &GeoTimeContext, equation_of_time: f64, solar: ClockTime) -> ClockTime {
    solar.add_minutes(-solar_offset_minutes(ctx, equation_of_time))
}

/// Converts a local standard clock time to apparent solar time.
#[must_use]
pub fn local_to_solar(ctx: &GeoTimeContext, equation_of_time: f64, local: ClockTime) -> ClockTime {
    local.add_minutes(solar_offset_minutes(ctx, equation_of_time))
}

/// Hour angle in degrees for an apparent solar time, 15° per hour from noon.
#[must_use]
pub fn hour_angle(solar_time: ClockTime) -> f64 {
    solar_time.hour_angle()
}

/// Solar altitude in degrees.
///
/// α = asin(sin φ sin δ + cos φ cos δ cos h)
#[must_use]
pub fn altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let sin_alpha = sin_deg(latitude) * sin_deg(declination)
        + cos_deg(latitude) * cos_deg(declination) * cos_deg(hour_angle);
    radians_to_degrees(asin(sin_alpha.clamp(-1.0, 1.0)))
}

/// Solar azimuth in degrees, measured from south and positive toward west.
#[must_use]
pub fn azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let y = sin_deg(hour_angle) * cos_deg(declination);
    let x = cos_deg(hour_angle) * cos_deg(declination) * sin_deg(latitude)
        - sin_deg(declination) * cos_deg(latitude);
    radians_to_degrees(atan2(y, x))
}

/// Sunset hour angle in degrees, acos(-tan φ tan δ).
///
/// The sunrise hour angle is its negative.
///
/// # Errors
/// Returns `DomainError` when |tan φ tan δ| > 1: the sun does not rise or does not set on
/// that day.
///
/// # Example
/// ```
/// # use solar_irradiance::position::sunset_hour_angle;
/// let h_ss = sunset_hour_angle(27.96, -17.2929).unwrap();
/// assert!((h_ss - 80.4878).abs() < 1e-3);
/// assert!(sunset_hour_angle(80.0, 20.0).is_err());
/// ```
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> Result<f64> {
    let arg = check_unit_interval(
        -tan_deg(latitude) * tan_deg(declination),
        "sunset hour angle undefined: the sun does not rise or set on this day",
    )?;
    Ok(radians_to_degrees(acos(arg)))
}

/// Minutes from solar noon corresponding to an hour angle (15° = 60 min).
#[must_use]
pub fn hour_angle_to_minutes(hour_angle: f64) -> f64 {
    hour_angle / DEGREES_PER_HOUR * 60.0
}

fn sun_event(ctx: &GeoTimeContext, equation_of_time: f64, hour_angle: f64) -> SunEvent {
    let solar = ClockTime::NOON.add_minutes(hour_angle_to_minutes(hour_angle));
    SunEvent {
        solar,
        local: solar_to_local(ctx, equation_of_time, solar),
    }
}

/// Sunrise, transit and sunset for the context's day.
///
/// Polar day and night are reported as [`SunriseResult::AllDay`] and
/// [`SunriseResult::AllNight`] instead of producing undefined times.
#[must_use]
pub fn sunrise_sunset(
    ctx: &GeoTimeContext,
    declination: f64,
    equation_of_time: f64,
) -> SunriseResult<SunEvent> {
    let transit = sun_event(ctx, equation_of_time, 0.0);
    match sunset_hour_angle(ctx.latitude(), declination) {
        Ok(h_ss) => SunriseResult::RegularDay {
            sunrise: sun_event(ctx, equation_of_time, -h_ss),
            transit,
            sunset: sun_event(ctx, equation_of_time, h_ss),
        },
        // Sun above the horizon at midnight means it never sets.
        Err(_) if altitude(ctx.latitude(), declination, 180.0) > 0.0 => {
            SunriseResult::AllDay { transit }
        }
        Err(_) => SunriseResult::AllNight { transit },
    }
}

/// Computes the full solar position record for a context.
///
/// # Example
/// ```
/// # use solar_irradiance::{GeoTimeContext, position::solar_position, time::ClockTime};
/// let ctx = GeoTimeContext::new(27.96, 82.54, 32, 75.0, ClockTime::NOON).unwrap();
/// let pos = solar_position(&ctx);
/// assert!((pos.declination() - -17.2929).abs() < 1e-4);
/// assert!((pos.altitude() - 43.5197).abs() < 1e-4);
/// assert_eq!(pos.solar_time().to_string(), "11:16:10");
/// ```
#[must_use]
pub fn solar_position(ctx: &GeoTimeContext) -> SolarPosition {
    let declination = declination(ctx.day_of_year());
    let equation_of_time = equation_of_time(ctx.day_of_year());
    let solar_time = solar_time(ctx, equation_of_time);
    let hour_angle = hour_angle(solar_time);
    let altitude = altitude(ctx.latitude(), declination, hour_angle);
    let azimuth = azimuth(ctx.latitude(), declination, hour_angle);
    let sunset_hour_angle = sunset_hour_angle(ctx.latitude(), declination).ok();
    let sunrise_sunset = sunrise_sunset(ctx, declination, equation_of_time);

    debug!(
        day_of_year = ctx.day_of_year(),
        declination,
        equation_of_time,
        solar_time = solar_time.seconds(),
        hour_angle,
        altitude,
        azimuth,
        ?sunset_hour_angle,
        "solar position"
    );

    SolarPosition {
        declination,
        equation_of_time,
        solar_time,
        hour_angle,
        altitude,
        azimuth,
        sunset_hour_angle,
        sunrise_sunset,
    }
}
