//! Error types for the solar irradiance library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar geometry and irradiance calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Day-of-year index outside 1..=366.
    InvalidDayOfYear {
        /// The invalid day index provided.
        value: u32,
    },
    /// Calendar date that cannot be interpreted as a month/day pair.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Malformed clock time or timestamp text.
    InvalidFormat {
        /// Description of the expected format.
        message: &'static str,
    },
    /// Trigonometric or arithmetic argument outside the domain of a formula.
    DomainError {
        /// Description of the violated domain.
        message: &'static str,
    },
    /// Unrecognized configuration value (ground type, sky type, ratio method).
    ConfigError {
        /// Description of the accepted values.
        message: &'static str,
    },
    /// Unrecognized model name.
    UnsupportedModel {
        /// The family of models the name was looked up in.
        kind: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 366)")
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidFormat { message } => write!(f, "invalid format: {message}"),
            Self::DomainError { message } => write!(f, "domain error: {message}"),
            Self::ConfigError { message } => write!(f, "configuration error: {message}"),
            Self::UnsupportedModel { kind } => write!(f, "unsupported {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid day-of-year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: u32) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid format error.
    #[must_use]
    pub const fn invalid_format(message: &'static str) -> Self {
        Self::InvalidFormat { message }
    }

    /// Creates a domain error.
    #[must_use]
    pub const fn domain(message: &'static str) -> Self {
        Self::DomainError { message }
    }

    /// Creates a configuration error.
    #[must_use]
    pub const fn config(message: &'static str) -> Self {
        Self::ConfigError { message }
    }

    /// Creates an unsupported model error.
    #[must_use]
    pub const fn unsupported_model(kind: &'static str) -> Self {
        Self::UnsupportedModel { kind }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a day-of-year index.
///
/// # Errors
/// Returns `InvalidDayOfYear` if the index is outside 1..=366.
pub fn check_day_of_year(day: u32) -> Result<()> {
    if !(1..=366).contains(&day) {
        return Err(Error::invalid_day_of_year(day));
    }
    Ok(())
}

/// Validates the argument of an inverse sine or cosine.
///
/// # Errors
/// Returns `DomainError` with the given message if `value` is not within [-1, 1].
pub fn check_unit_interval(value: f64, message: &'static str) -> Result<f64> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(Error::domain(message));
    }
    Ok(value)
}

/// Validates that a computed quantity is finite.
///
/// # Errors
/// Returns `DomainError` with the given message for NaN or infinite values.
pub fn check_finite(value: f64, message: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::domain(message));
    }
    Ok(value)
}
