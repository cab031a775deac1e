//! Diagnostic events must not change any computed value.

use solar_irradiance::diffuse::{DiffuseContext, DiffuseModel};
use solar_irradiance::estimate::{EstimationInput, estimate_all};
use solar_irradiance::position::solar_position;
use solar_irradiance::radiation::SurfaceGeometry;
use solar_irradiance::time::ClockTime;
use solar_irradiance::GeoTimeContext;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn run_pipeline() -> Vec<f64> {
    let ctx = GeoTimeContext::with_nearest_meridian(36.08, 115.16, 80, ClockTime::NOON).unwrap();
    let position = solar_position(&ctx);
    let surface = SurfaceGeometry::facing(&position, 36.08, 0.0);
    let input = EstimationInput::from_position(&position, &surface, 5240.0, 1260.0, 0.2).unwrap();
    let diffuse = DiffuseContext::new(36.08, position.declination(), 5240.0, 1.0079);
    estimate_all(&input, &diffuse)
        .into_iter()
        .map(|r| r.unwrap().total)
        .collect()
}

#[test]
fn test_results_independent_of_subscriber() {
    let silent = run_pipeline();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();
    let traced = tracing::subscriber::with_default(subscriber, run_pipeline);

    assert_eq!(silent, traced);
    assert_eq!(traced.len(), DiffuseModel::ALL.len());
}
