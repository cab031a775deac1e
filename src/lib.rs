//! # Solar Irradiance Library
//!
//! Solar geometry and clear-sky irradiance estimation for fixed and tilted surfaces.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library is a pipeline of pure functions:
//! - **Position**: declination, equation of time, solar time, hour angle, altitude, azimuth
//!   and sunrise/sunset from a location and a local clock reading
//! - **Clear-sky radiation**: extraterrestrial, beam-normal and diffuse irradiance through
//!   optical depths (ASHRAE clear-sky model), projected onto a tilted surface
//! - **Diffuse fractions**: hourly-to-daily radiation ratios (Collares-Pereira & Rabl,
//!   Gueymard-normalized CPR, daily integration)
//! - **Monthly tilt**: Liu & Jordan transposition of monthly-mean daily radiation
//! - **Composite estimate**: instantaneous tilted irradiance from monthly totals
//!
//! Every stage returns an immutable value record. Stages emit `tracing` events with their
//! intermediate values; install any subscriber to see them.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Parse calendar dates and local time stamps
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize and deserialize the value records
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-irradiance = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-irradiance = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Clear-sky irradiance on a tilted surface
//! ```rust
//! use solar_irradiance::radiation::{
//!     AtmosphericTurbidity, GroundType, RadiationConfig, SurfaceGeometry, clear_sky_radiation,
//! };
//! use solar_irradiance::{GeoTimeContext, position::solar_position, time::ClockTime};
//!
//! // February 1, noon, 27.96° N 82.54° (west-positive), standard meridian 75°
//! let ctx = GeoTimeContext::new(27.96, 82.54, 32, 75.0, ClockTime::NOON).unwrap();
//! let position = solar_position(&ctx);
//!
//! let surface = SurfaceGeometry::facing(&position, 30.0, 10.0);
//! let radiation = clear_sky_radiation(
//!     ctx.day_of_year(),
//!     position.altitude(),
//!     &AtmosphericTurbidity::new(0.35109, 2.48558),
//!     &surface,
//!     GroundType::Ordinary,
//!     &RadiationConfig::default(),
//! )
//! .unwrap();
//!
//! println!("Altitude: {:.3}°", position.altitude());
//! println!("I_c: {:.1} W/m^2", radiation.total_tilted);
//! ```
//!
//! ### Estimate from monthly totals
//! ```rust
//! use solar_irradiance::diffuse::{DiffuseContext, DiffuseModel};
//! use solar_irradiance::estimate::{EstimationInput, estimate};
//! use solar_irradiance::radiation::{SurfaceGeometry, extraterrestrial_factor};
//! use solar_irradiance::{GeoTimeContext, position::solar_position, time::ClockTime};
//!
//! let ctx = GeoTimeContext::with_nearest_meridian(36.08, 115.16, 80, ClockTime::NOON).unwrap();
//! let position = solar_position(&ctx);
//! let surface = SurfaceGeometry::facing(&position, 36.08, 0.0);
//! let input = EstimationInput::from_position(&position, &surface, 5240.0, 1260.0, 0.2).unwrap();
//! let diffuse = DiffuseContext::new(
//!     ctx.latitude(),
//!     position.declination(),
//!     5240.0,
//!     extraterrestrial_factor(ctx.day_of_year()),
//! );
//!
//! for model in DiffuseModel::ALL {
//!     let result = estimate(model, &input, &diffuse).unwrap();
//!     println!("Model: {model} I_c: {:.2} W/m^2", result.total);
//! }
//! ```
//!
//! ## Conventions
//!
//! - **Longitude**: positive west of Greenwich, the same as the local standard meridian
//! - **Hour angle**: 0° at solar noon, negative in the morning, 15° per hour
//! - **Azimuth**: 0° = South, positive towards West (-180° to +180°)
//! - **Altitude**: 0° = horizon, 90° = directly overhead

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{GeoTimeContext, SolarPosition, SunEvent, SunriseResult};

// Model modules
pub mod concentrator;
pub mod diffuse;
pub mod estimate;
pub mod liu_jordan;
pub mod position;
pub mod radiation;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffuse::{DiffuseContext, DiffuseModel};
    use crate::estimate::{EstimationInput, estimate_all};
    use crate::radiation::{
        AtmosphericTurbidity, GroundType, RadiationConfig, SurfaceGeometry, clear_sky_radiation,
        extraterrestrial_factor,
    };
    use crate::time::ClockTime;

    #[test]
    fn test_pipeline_chain() {
        let ctx = GeoTimeContext::new(27.96, 82.54, 32, 75.0, ClockTime::NOON).unwrap();
        let position = position::solar_position(&ctx);
        let surface = SurfaceGeometry::facing(&position, 30.0, 10.0);
        let radiation = clear_sky_radiation(
            ctx.day_of_year(),
            position.altitude(),
            &AtmosphericTurbidity::new(0.35109, 2.48558),
            &surface,
            GroundType::Ordinary,
            &RadiationConfig::default(),
        )
        .unwrap();

        assert!((radiation.total_tilted - 937.3463642710477).abs() < 1e-6);
        assert!((radiation.incidence_angle - 22.13650956951573).abs() < 1e-9);
    }

    #[test]
    fn test_estimates_from_position() {
        let ctx =
            GeoTimeContext::with_nearest_meridian(36.08, 115.16, 80, ClockTime::NOON).unwrap();
        assert_eq!(ctx.meridian(), 120.0);
        let position = position::solar_position(&ctx);
        let surface = SurfaceGeometry::facing(&position, 36.08, 0.0);
        let input =
            EstimationInput::from_position(&position, &surface, 5240.0, 1260.0, 0.2).unwrap();
        let diffuse = DiffuseContext::new(
            ctx.latitude(),
            position.declination(),
            5240.0,
            extraterrestrial_factor(ctx.day_of_year()),
        );

        let expected = [1567.2565484805198, 1291.8621865467112, 932.5318140090079];
        for (result, total) in estimate_all(&input, &diffuse).iter().zip(expected) {
            let result = result.as_ref().unwrap();
            assert!(
                (result.total - total).abs() < 1e-6,
                "{}: {}",
                result.model,
                result.total
            );
        }
        assert_eq!(DiffuseModel::ALL[0], DiffuseModel::DailyIntegration);
    }

    #[test]
    fn test_polar_night_has_no_estimate_input() {
        let ctx = GeoTimeContext::new(80.0, 0.0, 355, 0.0, ClockTime::NOON).unwrap();
        let position = position::solar_position(&ctx);
        assert!(position.sunrise_sunset().is_polar_night());
        let surface = SurfaceGeometry::facing(&position, 30.0, 0.0);
        assert!(matches!(
            EstimationInput::from_position(&position, &surface, 1.0, 1.0, 0.2),
            Err(Error::DomainError { .. })
        ));
    }
}
