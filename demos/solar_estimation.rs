//! Estimates the irradiance on a tilted surface with a chosen diffuse-fraction model.
//!
//! ```text
//! cargo run --example solar_estimation -- cprg
//! cargo run --example solar_estimation -- daily_integration --verbose
//! ```

use solar_irradiance::diffuse::DiffuseContext;
use solar_irradiance::estimate::{EstimationInput, estimate_by_name};
use solar_irradiance::position::solar_position;
use solar_irradiance::radiation::{
    AtmosphericTurbidity, GroundType, RadiationConfig, SurfaceGeometry, clear_sky_radiation,
    extraterrestrial_factor,
};
use solar_irradiance::time::local_standard_meridian;
use solar_irradiance::GeoTimeContext;
use std::error::Error;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

const LATITUDE: f64 = 36.08;
const LONGITUDE: f64 = 115.16;
const TIMESTAMP: &str = "2025-03-21 12:00:00";
const MONTHLY_HORIZONTAL: f64 = 5240.0;
const MONTHLY_DIFFUSE: f64 = 1260.0;
const TILT: f64 = 36.08;
const WALL_AZIMUTH: f64 = 0.0;

fn setup_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");
    let model = args
        .iter()
        .find(|arg| !arg.starts_with('-'))
        .map_or("daily_integration", String::as_str);
    setup_logging(verbose)?;

    let meridian = local_standard_meridian(LONGITUDE);
    let ctx = GeoTimeContext::from_timestamp(LATITUDE, LONGITUDE, TIMESTAMP, meridian)?;

    let position = solar_position(&ctx);
    info!(
        day_of_year = ctx.day_of_year(),
        declination = position.declination(),
        altitude = position.altitude(),
        azimuth = position.azimuth(),
        "solar position at {}",
        position.solar_time()
    );

    let surface = SurfaceGeometry::facing(&position, TILT, WALL_AZIMUTH);
    let clear_sky = clear_sky_radiation(
        ctx.day_of_year(),
        position.altitude(),
        &AtmosphericTurbidity::new(0.355, 2.211),
        &surface,
        GroundType::Ordinary,
        &RadiationConfig::default(),
    )?;
    info!(total = clear_sky.total_tilted, "clear-sky irradiance on the surface");

    let input = EstimationInput::from_position(
        &position,
        &surface,
        MONTHLY_HORIZONTAL,
        MONTHLY_DIFFUSE,
        GroundType::Ordinary.reflectivity(),
    )?;
    let diffuse = DiffuseContext::new(
        LATITUDE,
        position.declination(),
        MONTHLY_HORIZONTAL,
        extraterrestrial_factor(ctx.day_of_year()),
    );

    let result = estimate_by_name(model, &input, &diffuse)?;
    println!("Model: {} I_c: {:.2} W/m^2", result.model, result.total);
    Ok(())
}
