//! Clear-sky radiation model.
//!
//! Extraterrestrial irradiance from a five-term Fourier series in the day angle, Kasten-style
//! air mass, and beam/diffuse attenuation through bilinear optical-depth exponents
//! (ASHRAE 2009 clear-sky model). The horizontal components are projected onto a tilted
//! surface as beam, isotropic sky diffuse and ground-reflected parts.

#![allow(clippy::unreadable_literal)]

use crate::error::{Error, check_day_of_year};
use crate::math::{acos, cos_deg, exp, powf, radians_to_degrees, sin_deg};
use crate::{Result, SolarPosition};
use core::fmt;
use core::str::FromStr;
use tracing::{debug, trace};

/// Default solar constant in W/m².
pub const SOLAR_CONSTANT: f64 = 1367.0;

/// Fourier coefficients a₀..a₄ of the extraterrestrial radiation factor.
const EXTRATERRESTRIAL_COEFFS: [f64; 5] = [1.00011, 0.034221, 0.00128, 0.000719, 0.000077];

/// Beam exponent coefficients b₀..b₃ (constant, τ_b, τ_d, τ_b·τ_d).
const BEAM_EXPONENT_COEFFS: [f64; 4] = [1.219, -0.043, -0.151, -0.204];

/// Diffuse exponent coefficients d₀..d₃ (constant, τ_b, τ_d, τ_b·τ_d).
const DIFFUSE_EXPONENT_COEFFS: [f64; 4] = [0.202, 0.852, -0.007, -0.357];

/// Ground cover in front of the surface, which sets its reflectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroundType {
    /// Grass, soil or pavement, ρ = 0.2
    #[default]
    Ordinary,
    /// Fresh snow cover, ρ = 0.8
    Snow,
}

impl GroundType {
    /// Ground reflectivity ρ.
    #[must_use]
    pub const fn reflectivity(self) -> f64 {
        match self {
            Self::Ordinary => 0.2,
            Self::Snow => 0.8,
        }
    }

    /// Name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::Snow => "snow",
        }
    }
}

impl FromStr for GroundType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ordinary" => Ok(Self::Ordinary),
            "snow" => Ok(Self::Snow),
            _ => Err(Error::config(
                "ground type must be \"ordinary\" or \"snow\"",
            )),
        }
    }
}

impl fmt::Display for GroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clear-sky pseudo optical depths for beam and diffuse radiation.
///
/// Site- and month-specific values are tabulated in the ASHRAE climatic design data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphericTurbidity {
    /// Beam optical depth τ_b
    pub beam: f64,
    /// Diffuse optical depth τ_d
    pub diffuse: f64,
}

impl AtmosphericTurbidity {
    /// Creates turbidity from beam and diffuse optical depths.
    #[must_use]
    pub const fn new(beam: f64, diffuse: f64) -> Self {
        Self { beam, diffuse }
    }

    /// Air-mass exponents (b, d) for the beam and diffuse attenuation.
    #[must_use]
    pub fn exponents(&self) -> (f64, f64) {
        let bilinear = |c: &[f64; 4]| {
            c[0] + c[1] * self.beam + c[2] * self.diffuse + c[3] * self.beam * self.diffuse
        };
        (
            bilinear(&BEAM_EXPONENT_COEFFS),
            bilinear(&DIFFUSE_EXPONENT_COEFFS),
        )
    }
}

/// Orientation of the receiving surface relative to the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceGeometry {
    /// Tilt angle β from horizontal in degrees
    pub tilt: f64,
    /// Solar azimuth a_s in degrees
    pub solar_azimuth: f64,
    /// Azimuth a_w of the surface normal in degrees, same reference as `solar_azimuth`
    pub wall_azimuth: f64,
}

impl SurfaceGeometry {
    /// Creates a surface geometry from explicit angles.
    #[must_use]
    pub const fn new(tilt: f64, solar_azimuth: f64, wall_azimuth: f64) -> Self {
        Self {
            tilt,
            solar_azimuth,
            wall_azimuth,
        }
    }

    /// Surface with the given tilt and wall azimuth, facing the sun of `position`.
    #[must_use]
    pub const fn facing(position: &SolarPosition, tilt: f64, wall_azimuth: f64) -> Self {
        Self::new(tilt, position.azimuth(), wall_azimuth)
    }

    /// Cosine of the incidence angle for a sun at `altitude` degrees.
    #[must_use]
    pub fn cos_incidence(&self, altitude: f64) -> f64 {
        cos_deg(altitude) * cos_deg(self.solar_azimuth - self.wall_azimuth) * sin_deg(self.tilt)
            + sin_deg(altitude) * cos_deg(self.tilt)
    }

    /// Incidence angle i in degrees between the sun's rays and the surface normal.
    #[must_use]
    pub fn incidence_angle(&self, altitude: f64) -> f64 {
        radians_to_degrees(acos(self.cos_incidence(altitude).clamp(-1.0, 1.0)))
    }
}

/// Tunable constants of the clear-sky model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiationConfig {
    /// Solar constant I₀ in W/m²
    pub solar_constant: f64,
}

impl RadiationConfig {
    /// Configuration with the given solar constant.
    #[must_use]
    pub const fn with_solar_constant(solar_constant: f64) -> Self {
        Self { solar_constant }
    }
}

impl Default for RadiationConfig {
    fn default() -> Self {
        Self::with_solar_constant(SOLAR_CONSTANT)
    }
}

/// All intermediate and final quantities of one clear-sky evaluation.
///
/// Irradiances are in W/m², angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiationComponents {
    /// Extraterrestrial radiation factor (Earth-Sun distance correction)
    pub extraterrestrial_factor: f64,
    /// Extraterrestrial irradiance I
    pub extraterrestrial: f64,
    /// Relative air mass m
    pub air_mass: f64,
    /// Beam air-mass exponent b
    pub beam_exponent: f64,
    /// Diffuse air-mass exponent d
    pub diffuse_exponent: f64,
    /// Beam normal irradiance I_b_N
    pub beam_normal: f64,
    /// Diffuse horizontal irradiance I_d_h
    pub diffuse_horizontal: f64,
    /// Global horizontal irradiance I_h
    pub total_horizontal: f64,
    /// Incidence angle i on the tilted surface
    pub incidence_angle: f64,
    /// Beam irradiance on the tilted surface I_b_c
    pub beam_tilted: f64,
    /// Sky diffuse irradiance on the tilted surface I_d_c
    pub diffuse_tilted: f64,
    /// Ground-reflected irradiance on the tilted surface I_r_c
    pub reflected_tilted: f64,
    /// Total irradiance on the tilted surface I_c
    pub total_tilted: f64,
}

/// Extraterrestrial radiation factor for a day of year.
///
/// f = a₀ + a₁ cos x + a₂ sin x + a₃ cos 2x + a₄ sin 2x, with x = 360° (n - 1) / 365.
#[must_use]
pub fn extraterrestrial_factor(day_of_year: u32) -> f64 {
    let x = 360.0 * (f64::from(day_of_year) - 1.0) / 365.0;
    let [a0, a1, a2, a3, a4] = EXTRATERRESTRIAL_COEFFS;
    a0 + a1 * cos_deg(x) + a2 * sin_deg(x) + a3 * cos_deg(2.0 * x) + a4 * sin_deg(2.0 * x)
}

/// Relative air mass for a solar altitude in degrees.
///
/// m = 1 / (sin α + (6.07995 + α)^-1.6364), with α in degrees inside the power term.
///
/// # Errors
/// Returns `DomainError` if the sun is at or below the horizon.
pub fn air_mass(altitude: f64) -> Result<f64> {
    if altitude <= 0.0 || altitude.is_nan() {
        return Err(Error::domain("air mass undefined for a sun at or below the horizon"));
    }
    Ok(1.0 / (sin_deg(altitude) + powf(6.07995 + altitude, -1.6364)))
}

/// Clear-sky irradiance on a tilted surface.
///
/// # Arguments
/// * `day_of_year` - Day index, January 1 = 1
/// * `altitude` - Solar altitude in degrees
/// * `turbidity` - Beam and diffuse optical depths
/// * `surface` - Surface tilt and azimuths
/// * `ground` - Ground cover in front of the surface
/// * `config` - Model constants
///
/// # Errors
/// Returns `InvalidDayOfYear` for an out-of-range day, or `DomainError` if the sun is at or
/// below the horizon.
///
/// # Example
/// ```
/// # use solar_irradiance::radiation::*;
/// let surface = SurfaceGeometry::new(30.0, -14.4937, 10.0);
/// let turbidity = AtmosphericTurbidity::new(0.35109, 2.48558);
/// let r = clear_sky_radiation(32, 43.5197, &turbidity, &surface, GroundType::Ordinary,
///     &RadiationConfig::default()).unwrap();
/// assert!((r.total_tilted - 937.35).abs() < 0.1);
/// ```
pub fn clear_sky_radiation(
    day_of_year: u32,
    altitude: f64,
    turbidity: &AtmosphericTurbidity,
    surface: &SurfaceGeometry,
    ground: GroundType,
    config: &RadiationConfig,
) -> Result<RadiationComponents> {
    check_day_of_year(day_of_year)?;
    let rho = ground.reflectivity();

    let extraterrestrial_factor = extraterrestrial_factor(day_of_year);
    let extraterrestrial = config.solar_constant * extraterrestrial_factor;
    let air_mass = air_mass(altitude)?;
    let (beam_exponent, diffuse_exponent) = turbidity.exponents();
    trace!(
        extraterrestrial_factor,
        extraterrestrial, air_mass, beam_exponent, diffuse_exponent, "clear-sky terms"
    );

    let beam_normal = extraterrestrial * exp(-turbidity.beam * powf(air_mass, beam_exponent));
    let diffuse_horizontal =
        extraterrestrial * exp(-turbidity.diffuse * powf(air_mass, diffuse_exponent));
    let total_horizontal = beam_normal * sin_deg(altitude) + diffuse_horizontal;

    let cos_tilt = cos_deg(surface.tilt);
    let reflected_tilted = total_horizontal * rho * (1.0 - cos_tilt) / 2.0;
    let diffuse_tilted = diffuse_horizontal * (1.0 + cos_tilt) / 2.0;
    let beam_tilted = beam_normal * surface.cos_incidence(altitude);
    let total_tilted = beam_tilted + diffuse_tilted + reflected_tilted;

    debug!(
        day_of_year,
        altitude,
        ground = ground.name(),
        beam_normal,
        diffuse_horizontal,
        beam_tilted,
        diffuse_tilted,
        reflected_tilted,
        total_tilted,
        "clear-sky radiation"
    );

    Ok(RadiationComponents {
        extraterrestrial_factor,
        extraterrestrial,
        air_mass,
        beam_exponent,
        diffuse_exponent,
        beam_normal,
        diffuse_horizontal,
        total_horizontal,
        incidence_angle: surface.incidence_angle(altitude),
        beam_tilted,
        diffuse_tilted,
        reflected_tilted,
        total_tilted,
    })
}
