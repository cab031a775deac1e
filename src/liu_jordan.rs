//! Monthly-average daily radiation on tilted surfaces.
//!
//! Liu & Jordan (1962) transposition of monthly-mean daily horizontal radiation onto a
//! surface of tilt β. The daily total is split into beam and diffuse parts through the
//! diffuse-to-total ratio (DTR), then each part is scaled by its own tilt factor:
//!
//! H̄_c = (BRTF + RRTF)·B̄_h + (DRTF + RRTF)·DTR·H̄_h
//!
//! Two DTR correlations are offered through [`DiffuseRatioMethod`]. Anisotropic skies apply
//! Klucher's modulating terms to the diffuse tilt factor.
//!
//! ## References
//!
//! - Liu, B. Y. H.; Jordan, R. C. (1962). Daily insolation on surfaces tilted towards the
//!   equator. ASHRAE Journal, 3(10), 53-59.
//! - Klucher, T. M. (1979). Evaluation of models to predict insolation on tilted surfaces.
//!   Solar Energy, 23(2), 111-114.

#![allow(clippy::unreadable_literal)]

use crate::error::{Error, check_unit_interval};
use crate::math::{
    PI, acos, cos, cos_deg, degrees_to_radians, polynomial, powi, radians_to_degrees, sin,
    sin_deg, tan_deg,
};
use crate::Result;
use core::fmt;
use core::str::FromStr;
use tracing::debug;

/// Empirical DTR polynomial in the monthly clearness index, lowest order first.
const EMPIRICAL_DTR_COEFFS: [f64; 4] = [1.390, -4.027, 5.531, -3.108];

/// Sky radiance distribution used for the diffuse tilt factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SkyType {
    /// Uniform sky radiance
    #[default]
    Isotropic,
    /// Horizon and circumsolar brightening (Klucher)
    Anisotropic,
    /// Treated like [`SkyType::Anisotropic`]
    Circumsolar,
}

impl SkyType {
    /// Name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Isotropic => "isotropic",
            Self::Anisotropic => "anisotropic",
            Self::Circumsolar => "circumsolar",
        }
    }

    const fn is_anisotropic(self) -> bool {
        matches!(self, Self::Anisotropic | Self::Circumsolar)
    }
}

impl FromStr for SkyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "isotropic" => Ok(Self::Isotropic),
            "anisotropic" => Ok(Self::Anisotropic),
            "circumsolar" => Ok(Self::Circumsolar),
            _ => Err(Error::config(
                "sky type must be isotropic, anisotropic or circumsolar",
            )),
        }
    }
}

impl fmt::Display for SkyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Correlation used for the diffuse-to-total ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffuseRatioMethod {
    /// Cubic polynomial in the monthly clearness index
    Empirical,
    /// Collares-Pereira & Rabl correlation, which also depends on day length
    #[default]
    Cpr,
}

impl DiffuseRatioMethod {
    /// Name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empirical => "empirical",
            Self::Cpr => "cpr",
        }
    }

    /// Diffuse-to-total ratio for clearness index `mci` and sunset hour angle `h_ss` (°).
    #[must_use]
    pub fn diffuse_to_total(self, mci: f64, sunset_hour_angle: f64) -> f64 {
        match self {
            Self::Empirical => polynomial(&EMPIRICAL_DTR_COEFFS, mci),
            Self::Cpr => {
                let x = degrees_to_radians(sunset_hour_angle) - PI / 2.0;
                0.775 + 0.347 * x - (0.505 + 0.0261 * x) * cos(2.0 * mci - PI / 2.0)
            }
        }
    }
}

impl FromStr for DiffuseRatioMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "empirical" => Ok(Self::Empirical),
            "cpr" => Ok(Self::Cpr),
            _ => Err(Error::config("diffuse ratio method must be empirical or cpr")),
        }
    }
}

impl fmt::Display for DiffuseRatioMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs of [`monthly_tilt`]. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyTiltInput {
    /// Latitude L
    pub latitude: f64,
    /// Declination δ
    pub declination: f64,
    /// Sunrise hour angle on the tilted surface h_sr (negative)
    pub sunrise_hour_angle: f64,
    /// Sunset hour angle h_ss on the horizontal
    pub sunset_hour_angle: f64,
    /// Surface tilt β
    pub tilt: f64,
    /// Monthly-average daily horizontal radiation H̄_h
    pub monthly_horizontal: f64,
    /// Monthly-average daily extraterrestrial horizontal radiation H̄_o,h
    pub monthly_extraterrestrial: f64,
    /// Incidence angle i on the surface
    pub incidence_angle: f64,
    /// Solar zenith z
    pub zenith: f64,
    /// Ground reflectivity ρ
    pub reflectivity: f64,
    /// Sky model of the diffuse tilt factor
    pub sky: SkyType,
    /// DTR correlation
    pub method: DiffuseRatioMethod,
}

impl Default for MonthlyTiltInput {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            declination: 0.0,
            sunrise_hour_angle: -90.0,
            sunset_hour_angle: 90.0,
            tilt: 0.0,
            monthly_horizontal: 0.0,
            monthly_extraterrestrial: 1.0,
            incidence_angle: 0.0,
            zenith: 0.0,
            reflectivity: 0.2,
            sky: SkyType::Isotropic,
            method: DiffuseRatioMethod::Cpr,
        }
    }
}

/// Outputs of [`monthly_tilt`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyTiltResult {
    /// Monthly clearness index H̄_h / H̄_o,h
    pub clearness_index: f64,
    /// Diffuse-to-total ratio
    pub diffuse_to_total: f64,
    /// Monthly beam on the horizontal B̄_h
    pub beam_horizontal: f64,
    /// Monthly diffuse on the horizontal D̄_h
    pub diffuse_horizontal: f64,
    /// Horizontal sunrise hour angle h_sr_0 (degrees, negative)
    pub horizontal_sunrise_hour_angle: f64,
    /// Beam radiation tilt factor
    pub beam_tilt_factor: f64,
    /// Diffuse radiation tilt factor
    pub diffuse_tilt_factor: f64,
    /// Reflected radiation tilt factor
    pub reflected_tilt_factor: f64,
    /// Monthly beam on the tilted surface B̄_c = BRTF·B̄_h
    pub beam_tilted: f64,
    /// Monthly total on the tilted surface H̄_c
    pub total_tilted: f64,
}

/// Sunrise hour angle of the horizontal, `-acos(-tan L tan δ)`.
fn horizontal_sunrise(latitude: f64, declination: f64) -> Result<f64> {
    let cos_h = check_unit_interval(
        -tan_deg(latitude) * tan_deg(declination),
        "sun does not rise or set on this day",
    )?;
    Ok(-radians_to_degrees(acos(cos_h)))
}

/// Sunrise hour angle seen by an equator-facing surface of tilt β, in degrees.
///
/// The later of the horizontal sunrise and the instant the sun crosses the plane of the
/// surface, which behaves like a horizontal at latitude L − β.
///
/// # Errors
/// Returns `DomainError` on polar day or night at either latitude.
pub fn tilted_sunrise_hour_angle(latitude: f64, tilt: f64, declination: f64) -> Result<f64> {
    let horizontal = horizontal_sunrise(latitude, declination)?;
    let plane = horizontal_sunrise(latitude - tilt, declination)?;
    Ok(horizontal.max(plane))
}

/// Monthly-average daily radiation on a tilted surface.
///
/// # Errors
/// Returns `DomainError` if H̄_o,h or H̄_h is not positive, the horizontal sunrise is
/// undefined at this latitude, or the BRTF denominator vanishes.
///
/// # Example
/// ```
/// # use solar_irradiance::liu_jordan::{MonthlyTiltInput, monthly_tilt};
/// let input = MonthlyTiltInput {
///     latitude: 25.0,
///     declination: -20.9778,
///     sunrise_hour_angle: -79.7006,
///     sunset_hour_angle: 79.7006,
///     tilt: 30.0,
///     monthly_horizontal: 16215.0,
///     monthly_extraterrestrial: 24199.0,
///     incidence_angle: 16.37,
///     zenith: 46.24,
///     ..MonthlyTiltInput::default()
/// };
/// let result = monthly_tilt(&input).unwrap();
/// assert!((result.total_tilted - 22978.2).abs() < 1.0);
/// ```
pub fn monthly_tilt(input: &MonthlyTiltInput) -> Result<MonthlyTiltResult> {
    if input.monthly_extraterrestrial.is_nan() || input.monthly_extraterrestrial <= 0.0 {
        return Err(Error::domain(
            "monthly extraterrestrial radiation must be positive",
        ));
    }
    if input.monthly_horizontal.is_nan() || input.monthly_horizontal <= 0.0 {
        return Err(Error::domain("monthly horizontal radiation must be positive"));
    }

    let mci = input.monthly_horizontal / input.monthly_extraterrestrial;
    let dtr = input.method.diffuse_to_total(mci, input.sunset_hour_angle);
    let beam_horizontal = input.monthly_horizontal * (1.0 - dtr);
    let diffuse_horizontal = input.monthly_horizontal - beam_horizontal;

    let h_sr0 = horizontal_sunrise(input.latitude, input.declination)?;
    let h_sr0_rad = degrees_to_radians(h_sr0);
    let h_sr_rad = degrees_to_radians(input.sunrise_hour_angle);
    let tilted_latitude = input.latitude - input.tilt;

    let numerator = cos_deg(tilted_latitude) * cos_deg(input.declination) * sin(h_sr_rad)
        + h_sr_rad * sin_deg(tilted_latitude) * sin_deg(input.declination);
    let denominator = cos_deg(input.latitude) * cos_deg(input.declination) * sin(h_sr0_rad)
        + h_sr0_rad * sin_deg(input.latitude) * sin_deg(input.declination);
    if denominator == 0.0 {
        return Err(Error::domain("beam tilt factor denominator is zero"));
    }
    let brtf = numerator / denominator;

    let half_tilt = input.tilt / 2.0;
    let mut drtf = powi(cos_deg(half_tilt), 2);
    if input.sky.is_anisotropic() {
        let modulation = 1.0 - powi(diffuse_horizontal / input.monthly_horizontal, 2);
        let m1 = 1.0 + modulation * powi(sin_deg(half_tilt), 2);
        let m2 = 1.0
            + modulation * powi(cos_deg(input.incidence_angle), 2) * powi(sin_deg(input.zenith), 3);
        drtf *= m1 * m2;
    }
    let rrtf = input.reflectivity * powi(sin_deg(half_tilt), 2);

    let beam_tilted = brtf * beam_horizontal;
    let total_tilted = (brtf + rrtf) * beam_horizontal + (drtf + rrtf) * dtr * input.monthly_horizontal;

    debug!(
        sky = input.sky.name(),
        method = input.method.name(),
        mci,
        dtr,
        brtf,
        drtf,
        rrtf,
        total_tilted,
        "monthly tilt"
    );

    Ok(MonthlyTiltResult {
        clearness_index: mci,
        diffuse_to_total: dtr,
        beam_horizontal,
        diffuse_horizontal,
        horizontal_sunrise_hour_angle: h_sr0,
        beam_tilt_factor: brtf,
        diffuse_tilt_factor: drtf,
        reflected_tilt_factor: rrtf,
        beam_tilted,
        total_tilted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const H_SS: f64 = 79.70060309769231;

    fn january_input(sky: SkyType, method: DiffuseRatioMethod) -> MonthlyTiltInput {
        MonthlyTiltInput {
            latitude: 25.0,
            declination: -20.977841638876658,
            sunrise_hour_angle: -H_SS,
            sunset_hour_angle: H_SS,
            tilt: 30.0,
            monthly_horizontal: 16215.0,
            monthly_extraterrestrial: 24199.0,
            incidence_angle: 16.37376700926904,
            zenith: 46.2392034725813,
            reflectivity: 0.2,
            sky,
            method,
        }
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_isotropic_cpr() {
        let r = monthly_tilt(&january_input(SkyType::Isotropic, DiffuseRatioMethod::Cpr)).unwrap();
        assert_close(r.clearness_index, 0.6700690111161618, 1e-12);
        assert_close(r.diffuse_to_total, 0.22556564608733504, 1e-12);
        assert_close(r.beam_horizontal, 12557.453048693864, 1e-7);
        assert_close(r.horizontal_sunrise_hour_angle, -H_SS, 1e-9);
        assert_close(r.beam_tilt_factor, 1.540789003444421, 1e-9);
        assert_close(r.diffuse_tilt_factor, 0.9330127018922194, 1e-12);
        assert_close(r.reflected_tilt_factor, 0.013397459621556133, 1e-12);
        assert_close(r.beam_tilted, 1.540789003444421 * 12557.453048693864, 1e-5);
        assert_close(r.total_tilted, 22978.163139796445, 1e-5);
        assert_close(r.beam_horizontal + r.diffuse_horizontal, 16215.0, 1e-9);
    }

    #[test]
    fn test_isotropic_empirical() {
        let r = monthly_tilt(&january_input(SkyType::Isotropic, DiffuseRatioMethod::Empirical))
            .unwrap();
        assert_close(r.diffuse_to_total, 0.23994921443613704, 1e-12);
        assert_close(r.total_tilted, 22836.41173993547, 1e-5);
    }

    #[test]
    fn test_anisotropic() {
        let r = monthly_tilt(&january_input(SkyType::Anisotropic, DiffuseRatioMethod::Cpr)).unwrap();
        assert_close(r.diffuse_tilt_factor, 1.3189582429560693, 1e-9);
        assert_close(r.total_tilted, 24389.777076884726, 1e-5);

        let r = monthly_tilt(&january_input(SkyType::Anisotropic, DiffuseRatioMethod::Empirical))
            .unwrap();
        assert_close(r.diffuse_tilt_factor, 1.3160987377507676, 1e-9);
        assert_close(r.total_tilted, 24326.913890360498, 1e-5);
    }

    #[test]
    fn test_circumsolar_matches_anisotropic() {
        let a = monthly_tilt(&january_input(SkyType::Anisotropic, DiffuseRatioMethod::Cpr)).unwrap();
        let c = monthly_tilt(&january_input(SkyType::Circumsolar, DiffuseRatioMethod::Cpr)).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_horizontal_surface() {
        let mut input = january_input(SkyType::Isotropic, DiffuseRatioMethod::Cpr);
        input.tilt = 0.0;
        let r = monthly_tilt(&input).unwrap();
        assert_close(r.beam_tilt_factor, 1.0, 1e-12);
        assert_close(r.diffuse_tilt_factor, 1.0, 1e-12);
        assert_close(r.reflected_tilt_factor, 0.0, 1e-12);
        assert_close(r.total_tilted, 16215.0, 1e-7);
    }

    #[test]
    fn test_domain_errors() {
        let mut input = january_input(SkyType::Isotropic, DiffuseRatioMethod::Cpr);
        input.monthly_extraterrestrial = 0.0;
        assert!(matches!(monthly_tilt(&input), Err(Error::DomainError { .. })));

        let mut input = january_input(SkyType::Isotropic, DiffuseRatioMethod::Cpr);
        input.latitude = 80.0;
        assert!(matches!(monthly_tilt(&input), Err(Error::DomainError { .. })));
    }

    #[test]
    fn test_tilted_sunrise_hour_angle() {
        // Winter: the horizontal sunrise comes last.
        let h = tilted_sunrise_hour_angle(25.0, 30.0, -20.977841638876658).unwrap();
        assert_close(h, -H_SS, 1e-9);

        // Summer: the sun reaches a steep south-facing plane after it rises.
        let h = tilted_sunrise_hour_angle(40.0, 40.0, 23.0).unwrap();
        assert_close(h, -90.0, 1e-9);
        let horizontal = horizontal_sunrise(40.0, 23.0).unwrap();
        assert!(horizontal < h);

        assert!(tilted_sunrise_hour_angle(80.0, 10.0, 23.0).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("circumsolar".parse::<SkyType>(), Ok(SkyType::Circumsolar));
        assert_eq!("empirical".parse(), Ok(DiffuseRatioMethod::Empirical));
        assert_eq!(DiffuseRatioMethod::default(), DiffuseRatioMethod::Cpr);
        assert!(matches!(
            "cloudy".parse::<SkyType>(),
            Err(Error::ConfigError { .. })
        ));
        assert!(matches!(
            "linear".parse::<DiffuseRatioMethod>(),
            Err(Error::ConfigError { .. })
        ));
        assert_eq!(SkyType::Anisotropic.to_string(), "anisotropic");
    }
}
