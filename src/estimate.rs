//! Instantaneous irradiance on a tilted surface from monthly-average daily totals.
//!
//! A [`DiffuseModel`] converts the daily totals into hourly ratios, which are then
//! distributed over the beam, diffuse and ground-reflected components of the surface.

use crate::diffuse::{DiffuseContext, DiffuseFraction, DiffuseModel};
use crate::error::Error;
use crate::math::{cos_deg, powi, sin_deg};
use crate::radiation::SurfaceGeometry;
use crate::types::SolarPosition;
use crate::Result;
use tracing::{debug, warn};

/// Smallest sin(α) accepted before the beam back-out divides by it.
const MIN_SIN_ALTITUDE: f64 = 1e-9;

/// Inputs of the composite estimate. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimationInput {
    /// Hour angle h_s
    pub hour_angle: f64,
    /// Sunset hour angle h_ss
    pub sunset_hour_angle: f64,
    /// Solar altitude α
    pub altitude: f64,
    /// Incidence angle i on the surface
    pub incidence_angle: f64,
    /// Surface tilt β
    pub tilt: f64,
    /// Monthly-average daily total horizontal radiation H̄_h
    pub monthly_horizontal: f64,
    /// Monthly-average daily diffuse horizontal radiation H̄_d
    pub monthly_diffuse: f64,
    /// Ground reflectivity ρ
    pub reflectivity: f64,
}

impl EstimationInput {
    /// Builds the input from a computed solar position and a surface.
    ///
    /// # Errors
    /// Returns `DomainError` on polar day or night, where the sunset hour angle is undefined.
    pub fn from_position(
        position: &SolarPosition,
        surface: &SurfaceGeometry,
        monthly_horizontal: f64,
        monthly_diffuse: f64,
        reflectivity: f64,
    ) -> Result<Self> {
        Ok(Self {
            hour_angle: position.hour_angle(),
            sunset_hour_angle: position.sunset_hour_angle()?,
            altitude: position.altitude(),
            incidence_angle: surface.incidence_angle(position.altitude()),
            tilt: surface.tilt,
            monthly_horizontal,
            monthly_diffuse,
            reflectivity,
        })
    }
}

/// Result of the composite estimate, in W/m².
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrradianceEstimate {
    /// Model that produced the hourly ratios
    pub model: DiffuseModel,
    /// Hourly ratios
    pub fraction: DiffuseFraction,
    /// Beam on the surface I_b_c
    pub beam: f64,
    /// Sky diffuse on the surface I_d_c
    pub diffuse: f64,
    /// Ground-reflected on the surface I_r_c
    pub reflected: f64,
    /// Total on the surface I_c
    pub total: f64,
}

/// Estimates the irradiance on a tilted surface with the given model.
///
/// # Errors
/// Returns `DomainError` if the sun is at or below the horizon (sin α ≤ 1e-9) or the
/// diffuse-fraction model fails.
///
/// # Example
/// ```
/// # use solar_irradiance::diffuse::{DiffuseContext, DiffuseModel};
/// # use solar_irradiance::estimate::{EstimationInput, estimate};
/// let input = EstimationInput {
///     hour_angle: 2.879,
///     sunset_hour_angle: 89.714,
///     altitude: 53.429,
///     incidence_angle: 2.906,
///     tilt: 36.08,
///     monthly_horizontal: 5240.0,
///     monthly_diffuse: 1260.0,
///     reflectivity: 0.2,
/// };
/// let result = estimate(DiffuseModel::Cpr, &input, &DiffuseContext::default()).unwrap();
/// assert!((result.total - 1291.86).abs() < 0.5);
/// ```
pub fn estimate(
    model: DiffuseModel,
    input: &EstimationInput,
    ctx: &DiffuseContext,
) -> Result<IrradianceEstimate> {
    let sin_altitude = sin_deg(input.altitude);
    if sin_altitude.is_nan() || sin_altitude <= MIN_SIN_ALTITUDE {
        return Err(Error::domain("sun is at or below the horizon"));
    }

    let fraction = model.compute(input.hour_angle, input.sunset_hour_angle, ctx)?;
    let hourly_total = fraction.r_t * input.monthly_horizontal;
    let hourly_diffuse = fraction.r_d * input.monthly_diffuse;
    let half_tilt = input.tilt / 2.0;

    let beam = (hourly_total - hourly_diffuse) * cos_deg(input.incidence_angle) / sin_altitude;
    let diffuse = hourly_diffuse * powi(cos_deg(half_tilt), 2);
    let reflected = input.reflectivity * hourly_total * powi(sin_deg(half_tilt), 2);
    let total = beam + diffuse + reflected;

    if hourly_total < hourly_diffuse {
        warn!(
            model = model.name(),
            hourly_total, hourly_diffuse, "hourly diffuse exceeds hourly total"
        );
    }
    debug!(model = model.name(), beam, diffuse, reflected, total, "irradiance estimate");

    Ok(IrradianceEstimate {
        model,
        fraction,
        beam,
        diffuse,
        reflected,
        total,
    })
}

/// Estimates with a model given by name.
///
/// # Errors
/// Returns `UnsupportedModel` for names other than "daily_integration", "cpr" and "cprg",
/// otherwise the errors of [`estimate`].
pub fn estimate_by_name(
    name: &str,
    input: &EstimationInput,
    ctx: &DiffuseContext,
) -> Result<IrradianceEstimate> {
    estimate(name.parse()?, input, ctx)
}

/// Runs every model on the same input, in [`DiffuseModel::ALL`] order.
///
/// Each model fails or succeeds on its own.
#[must_use]
pub fn estimate_all(input: &EstimationInput, ctx: &DiffuseContext) -> [Result<IrradianceEstimate>; 3] {
    DiffuseModel::ALL.map(|model| estimate(model, input, ctx))
}
