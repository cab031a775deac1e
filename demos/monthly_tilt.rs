//! Monthly-average daily radiation on a south-facing surface for a range of tilts.
//!
//! ```text
//! cargo run --example monthly_tilt -- anisotropic empirical
//! ```

use solar_irradiance::liu_jordan::{
    DiffuseRatioMethod, MonthlyTiltInput, SkyType, monthly_tilt, tilted_sunrise_hour_angle,
};
use solar_irradiance::position::solar_position;
use solar_irradiance::radiation::{GroundType, SurfaceGeometry};
use solar_irradiance::time::{ClockTime, day_of_year_from_str};
use solar_irradiance::GeoTimeContext;
use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const LATITUDE: f64 = 25.0;
const LONGITUDE: f64 = 82.54;
const DATE: &str = "Jan 16";
const MONTHLY_HORIZONTAL: f64 = 16215.0;
const MONTHLY_EXTRATERRESTRIAL: f64 = 24199.0;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let sky: SkyType = args.next().as_deref().unwrap_or("isotropic").parse()?;
    let method: DiffuseRatioMethod = match args.next() {
        Some(name) => name.parse()?,
        None => DiffuseRatioMethod::default(),
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let day = day_of_year_from_str(DATE, 2025)?;
    let ctx = GeoTimeContext::with_nearest_meridian(LATITUDE, LONGITUDE, day, ClockTime::NOON)?;
    let position = solar_position(&ctx);
    let sunset = position.sunset_hour_angle()?;

    println!("{DATE} at {LATITUDE}°, sky {sky}, DTR {method}");
    println!("{:>6} {:>10} {:>10} {:>12}", "tilt", "BRTF", "DRTF", "H_c");
    for tilt in (0..=60).step_by(10).map(f64::from) {
        let surface = SurfaceGeometry::facing(&position, tilt, 0.0);
        let input = MonthlyTiltInput {
            latitude: LATITUDE,
            declination: position.declination(),
            sunrise_hour_angle: tilted_sunrise_hour_angle(LATITUDE, tilt, position.declination())?,
            sunset_hour_angle: sunset,
            tilt,
            monthly_horizontal: MONTHLY_HORIZONTAL,
            monthly_extraterrestrial: MONTHLY_EXTRATERRESTRIAL,
            incidence_angle: surface.incidence_angle(position.altitude()),
            zenith: position.zenith(),
            reflectivity: GroundType::Ordinary.reflectivity(),
            sky,
            method,
        };
        let result = monthly_tilt(&input)?;
        println!(
            "{tilt:>6.0} {:>10.4} {:>10.4} {:>12.1}",
            result.beam_tilt_factor, result.diffuse_tilt_factor, result.total_tilted
        );
    }
    Ok(())
}
