//! Diffuse-fraction models.
//!
//! Each model converts a pair of hour angles (evaluation time and sunset) into the ratios
//! of hourly to daily radiation:
//!
//! - `r_d`: hourly diffuse / daily diffuse (Liu & Jordan)
//! - `r_t`: hourly total / daily total
//!
//! Three models are available through [`DiffuseModel`]:
//!
//! - **CPR**: Collares-Pereira & Rabl (1979) regression for `r_t`
//! - **CPR-G**: the CPR regression normalized after Gueymard (1986), so that the hourly
//!   ratios integrate to exactly one daily total
//! - **Daily integration**: `r_t` derived from a daily integration of a clear-sky
//!   extinction model, driven by the monthly clearness index
//!
//! ## References
//!
//! - Collares-Pereira, M.; Rabl, A. (1979). The average distribution of solar radiation.
//!   Solar Energy, 22(2), 155-164.
//! - Gueymard, C. (1986). Mean daily averages of beam radiation received by tilted surfaces
//!   as affected by the atmosphere. Solar Energy, 37(4), 261-267.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::error::{Error, check_finite, check_unit_interval};
use crate::math::{PI, asin, cos, cos_deg, degrees_to_radians, powi, sin, sin_deg};
use crate::radiation::SOLAR_CONSTANT;
use crate::Result;
use core::fmt;
use core::str::FromStr;
use tracing::{debug, trace};

/// Default ω_s of the daily integration model: 1.06° expressed in radians.
pub const DEFAULT_OMEGA_S: f64 = 1.06 * PI / 180.0;

/// Lower bound applied to the a₂ regression of the daily integration model.
const MIN_A2: f64 = 0.054;

/// Hourly-to-daily radiation ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffuseFraction {
    /// Hourly diffuse to daily diffuse ratio r_d (1/h)
    pub r_d: f64,
    /// Hourly total to daily total ratio r_t (1/h)
    pub r_t: f64,
}

/// Selectable diffuse-fraction model.
///
/// # Example
/// ```
/// # use solar_irradiance::diffuse::{DiffuseContext, DiffuseModel};
/// let model: DiffuseModel = "cpr".parse().unwrap();
/// let fraction = model.compute(30.0, 60.0, &DiffuseContext::default()).unwrap();
/// assert!((fraction.r_d - 0.13992).abs() < 1e-5);
/// assert!("cprx".parse::<DiffuseModel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiffuseModel {
    /// Collares-Pereira & Rabl
    Cpr,
    /// Collares-Pereira & Rabl with Gueymard's normalization
    #[cfg_attr(feature = "serde", serde(rename = "cprg"))]
    CprG,
    /// Daily integration of a clear-sky extinction model
    DailyIntegration,
}

impl DiffuseModel {
    /// All models, in a stable order.
    pub const ALL: [Self; 3] = [Self::DailyIntegration, Self::Cpr, Self::CprG];

    /// Name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cpr => "cpr",
            Self::CprG => "cprg",
            Self::DailyIntegration => "daily_integration",
        }
    }

    /// Computes `(r_d, r_t)` for hour angle `h_s` and sunset hour angle `h_ss`, in degrees.
    ///
    /// Only [`DiffuseModel::DailyIntegration`] reads the context.
    ///
    /// # Errors
    /// Returns `DomainError` if `h_ss` is outside (0°, 180°), `|h_s| > h_ss`, or a model
    /// term leaves its domain.
    pub fn compute(self, h_s: f64, h_ss: f64, ctx: &DiffuseContext) -> Result<DiffuseFraction> {
        let fraction = match self {
            Self::Cpr => cpr(h_s, h_ss)?,
            Self::CprG => cpr_g(h_s, h_ss)?,
            Self::DailyIntegration => daily_integration(h_s, h_ss, ctx)?.fraction,
        };
        debug!(
            model = self.name(),
            h_s,
            h_ss,
            r_d = fraction.r_d,
            r_t = fraction.r_t,
            "diffuse fraction"
        );
        Ok(fraction)
    }
}

impl FromStr for DiffuseModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or(Error::unsupported_model("diffuse-fraction model"))
    }
}

impl fmt::Display for DiffuseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Site and climate inputs of the daily integration model.
///
/// The CPR variants ignore the context, so [`DiffuseContext::default`] is enough for them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffuseContext {
    /// Latitude L in degrees
    pub latitude: f64,
    /// Solar declination δ_s in degrees
    pub declination: f64,
    /// Monthly-average daily horizontal radiation H̄_h
    pub monthly_horizontal: f64,
    /// Extraterrestrial radiation factor of the day
    pub extraterrestrial_factor: f64,
    /// Solar constant E_sc in W/m²
    pub solar_constant: f64,
    /// Model constant ω_s in radians
    pub omega_s: f64,
}

impl DiffuseContext {
    /// Creates a context with the default solar constant and ω_s.
    #[must_use]
    pub const fn new(
        latitude: f64,
        declination: f64,
        monthly_horizontal: f64,
        extraterrestrial_factor: f64,
    ) -> Self {
        Self {
            latitude,
            declination,
            monthly_horizontal,
            extraterrestrial_factor,
            solar_constant: SOLAR_CONSTANT,
            omega_s: DEFAULT_OMEGA_S,
        }
    }

    /// Replaces the solar constant.
    #[must_use]
    pub const fn with_solar_constant(mut self, solar_constant: f64) -> Self {
        self.solar_constant = solar_constant;
        self
    }

    /// Replaces ω_s (radians).
    #[must_use]
    pub const fn with_omega_s(mut self, omega_s: f64) -> Self {
        self.omega_s = omega_s;
        self
    }
}

impl Default for DiffuseContext {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Intermediate terms of the daily integration model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyIntegrationTerms {
    /// Resulting ratios
    pub fraction: DiffuseFraction,
    /// q = cos L cos δ
    pub q: f64,
    /// A = sin h_ss - h_ss cos h_ss
    pub a: f64,
    /// Effective daily solar elevation h₀ in radians
    pub h0: f64,
    /// Daily clear-sky extraterrestrial reference H₀
    pub daily_extraterrestrial: f64,
    /// Clearness index K_t = H̄_h / H₀
    pub clearness_index: f64,
    /// Astronomical day length S₀ in hours
    pub day_length: f64,
    /// Regression term a₁
    pub a1: f64,
    /// Regression term a₂, floored at 0.054
    pub a2: f64,
    /// Atmospheric extinction coefficient κ = a₂ / a₁
    pub extinction_coefficient: f64,
    /// Angular correction term B
    pub b: f64,
}

/// Validated sunset hour angle in radians, plus the shared `r_d` ratio.
fn liu_jordan_ratio(h_s: f64, h_ss: f64) -> Result<(f64, f64)> {
    if h_ss.is_nan() || h_ss <= 0.0 || h_ss >= 180.0 {
        return Err(Error::domain(
            "sunset hour angle must lie strictly between 0° and 180°",
        ));
    }
    if !h_s.is_finite() || h_s.abs() > h_ss {
        return Err(Error::domain(
            "hour angle lies outside the sunrise-sunset interval",
        ));
    }
    let h_ss_rad = degrees_to_radians(h_ss);
    let numerator = cos_deg(h_s) - cos(h_ss_rad);
    let denominator = sin(h_ss_rad) - h_ss_rad * cos(h_ss_rad);
    let r_d = (PI / 24.0) * numerator / denominator;
    trace!(numerator, denominator, r_d, "hourly diffuse ratio");
    Ok((h_ss_rad, r_d.max(0.0)))
}

/// Collares-Pereira & Rabl regression coefficients (a, b).
fn cpr_coefficients(h_ss: f64) -> (f64, f64) {
    let s = sin_deg(h_ss - 60.0);
    (0.409 + 0.5019 * s, 0.6609 + 0.4767 * s)
}

/// Collares-Pereira & Rabl model.
///
/// r_d = (π/24)(cos h_s - cos h_ss) / (sin h_ss - h_ss cos h_ss) and
/// r_t = (a + b cos h_s) r_d. Both ratios are floored at zero.
///
/// # Errors
/// Returns `DomainError` for hour angles outside the daylight interval.
pub fn cpr(h_s: f64, h_ss: f64) -> Result<DiffuseFraction> {
    let (_, r_d) = liu_jordan_ratio(h_s, h_ss)?;
    let (a, b) = cpr_coefficients(h_ss);
    let r_t = ((a + b * cos_deg(h_s)) * r_d).max(0.0);
    trace!(a, b, r_t, "cpr");
    Ok(DiffuseFraction { r_d, r_t })
}

/// Collares-Pereira & Rabl model with Gueymard's normalization factor.
///
/// f_c = a + 0.5 b (h_ss - sin h_ss cos h_ss) / (sin h_ss - h_ss cos h_ss) and
/// r_t = (a + b cos h_s) r_d / f_c.
///
/// # Errors
/// Returns `DomainError` for hour angles outside the daylight interval.
pub fn cpr_g(h_s: f64, h_ss: f64) -> Result<DiffuseFraction> {
    let (h_ss_rad, r_d) = liu_jordan_ratio(h_s, h_ss)?;
    let (a, b) = cpr_coefficients(h_ss);
    let f_c = a
        + 0.5 * b * (h_ss_rad - sin(h_ss_rad) * cos(h_ss_rad))
            / (sin(h_ss_rad) - h_ss_rad * cos(h_ss_rad));
    if f_c <= 0.0 {
        return Err(Error::domain("CPR-G normalization factor is not positive"));
    }
    let r_t = ((a + b * cos_deg(h_s)) * r_d / f_c).max(0.0);
    trace!(a, b, f_c, r_t, "cpr-g");
    Ok(DiffuseFraction { r_d, r_t })
}

/// Daily integration model.
///
/// # Errors
/// Returns `DomainError` for hour angles outside the daylight interval, an effective
/// elevation whose sine leaves [-1, 1], or a vanishing H₀ or a₁.
///
/// # Example
/// ```
/// # use solar_irradiance::diffuse::{DiffuseContext, daily_integration};
/// let ctx = DiffuseContext::new(36.08, -0.3925, 5240.0, 1.0079);
/// let terms = daily_integration(2.879, 89.714, &ctx).unwrap();
/// assert!((terms.clearness_index - 0.6209).abs() < 1e-3);
/// assert!((terms.fraction.r_t - 0.2453).abs() < 1e-3);
/// ```
pub fn daily_integration(h_s: f64, h_ss: f64, ctx: &DiffuseContext) -> Result<DailyIntegrationTerms> {
    let (h_ss_rad, r_d) = liu_jordan_ratio(h_s, h_ss)?;
    let day_length = 24.0 / PI * h_ss_rad;

    let q = cos_deg(ctx.latitude) * cos_deg(ctx.declination);
    let a = sin(h_ss_rad) - h_ss_rad * cos(h_ss_rad);
    let h0 = asin(check_unit_interval(
        q * a / h_ss_rad,
        "effective daily solar elevation is undefined",
    )?);
    let sin_h0 = sin(h0);

    let daily_extraterrestrial =
        24.0 / PI * h_ss_rad * ctx.extraterrestrial_factor * ctx.solar_constant * sin_h0;
    if daily_extraterrestrial <= 0.0 {
        return Err(Error::domain("daily extraterrestrial radiation is not positive"));
    }
    let k_t = ctx.monthly_horizontal / daily_extraterrestrial;

    let a1 = 0.41341 * k_t + 0.61197 * powi(k_t, 2) - 0.01886 * k_t * day_length
        + 0.00759 * day_length;
    let a2 = (0.28116 + 2.2475 * k_t - 1.7611 * powi(k_t, 2) - 1.84535 * sin_h0
        + 1.681 * powi(sin_h0, 2))
    .max(MIN_A2);
    if a1 == 0.0 {
        return Err(Error::domain("extinction regression term a1 is zero"));
    }
    let kappa = a2 / a1;
    let b = (0.5 + powi(cos(h_ss_rad), 2)) * ctx.omega_s - 0.75 * sin(2.0 * h_ss_rad);

    let scale = 24.0 / PI;
    let r_t = r_d * (1.0 + q * a * kappa * r_d * scale) / (1.0 + q * kappa * b / a * scale);
    let r_t = check_finite(r_t, "daily integration ratio is not finite")?.max(0.0);

    debug!(
        q,
        a,
        h0,
        daily_extraterrestrial,
        k_t,
        a1,
        a2,
        kappa,
        b,
        r_d,
        r_t,
        "daily integration"
    );

    Ok(DailyIntegrationTerms {
        fraction: DiffuseFraction { r_d, r_t },
        q,
        a,
        h0,
        daily_extraterrestrial,
        clearness_index: k_t,
        day_length,
        a1,
        a2,
        extinction_coefficient: kappa,
        b,
    })
}
