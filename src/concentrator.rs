//! Geometry of a conical (truncated cone) concentrator.

use crate::error::Error;
use crate::math::{atan, radians_to_degrees};
use crate::Result;

/// Conical concentrator with aperture radius R, receiver radius r and length L.
///
/// All derived angles are in degrees, measured from the concentrator axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcentratorGeometry {
    aperture_radius: f64,
    receiver_radius: f64,
    length: f64,
    limit_angle: f64,
    opening_angle: f64,
    slope_angle: f64,
}

impl ConcentratorGeometry {
    /// Creates a concentrator and derives its characteristic angles.
    ///
    /// # Errors
    /// Returns `ConfigError` if the length is not positive, a radius is negative or not
    /// finite, or the receiver is wider than the aperture.
    ///
    /// # Example
    /// ```
    /// # use solar_irradiance::concentrator::ConcentratorGeometry;
    /// let cone = ConcentratorGeometry::new(1.0, 0.0, 1.0).unwrap();
    /// assert!((cone.opening_angle() - 45.0).abs() < 1e-9);
    /// ```
    pub fn new(aperture_radius: f64, receiver_radius: f64, length: f64) -> Result<Self> {
        if !length.is_finite() || length <= 0.0 {
            return Err(Error::config("concentrator length must be positive"));
        }
        if !aperture_radius.is_finite()
            || !receiver_radius.is_finite()
            || aperture_radius < 0.0
            || receiver_radius < 0.0
        {
            return Err(Error::config("concentrator radii must be non-negative"));
        }
        if receiver_radius > aperture_radius {
            return Err(Error::config(
                "receiver radius must not exceed the aperture radius",
            ));
        }

        let angle = |opposite: f64| radians_to_degrees(atan(opposite / length));
        Ok(Self {
            aperture_radius,
            receiver_radius,
            length,
            limit_angle: angle(aperture_radius + receiver_radius),
            opening_angle: angle(aperture_radius),
            slope_angle: angle(aperture_radius - receiver_radius),
        })
    }

    /// Aperture radius R.
    #[must_use]
    pub const fn aperture_radius(&self) -> f64 {
        self.aperture_radius
    }

    /// Receiver radius r.
    #[must_use]
    pub const fn receiver_radius(&self) -> f64 {
        self.receiver_radius
    }

    /// Length L.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Widest acceptance angle, atan((R + r) / L).
    #[must_use]
    pub const fn limit_angle(&self) -> f64 {
        self.limit_angle
    }

    /// Angle subtended by the aperture rim, atan(R / L).
    #[must_use]
    pub const fn opening_angle(&self) -> f64 {
        self.opening_angle
    }

    /// Inclination of the cone wall, atan((R - r) / L).
    #[must_use]
    pub const fn slope_angle(&self) -> f64 {
        self.slope_angle
    }

    /// Whether a ray at `incidence_angle` from the axis still reaches the receiver.
    #[must_use]
    pub fn accepts(&self, incidence_angle: f64) -> bool {
        incidence_angle.abs() <= self.limit_angle
    }
}
