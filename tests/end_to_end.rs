//! End-to-end scenarios from calendar text to tilted irradiance.

#![cfg(feature = "chrono")]

use solar_irradiance::diffuse::{DiffuseContext, DiffuseModel};
use solar_irradiance::estimate::{EstimationInput, estimate_by_name};
use solar_irradiance::liu_jordan::{
    DiffuseRatioMethod, MonthlyTiltInput, SkyType, monthly_tilt, tilted_sunrise_hour_angle,
};
use solar_irradiance::position::{local_to_solar, solar_position, solar_to_local};
use solar_irradiance::radiation::{
    AtmosphericTurbidity, GroundType, RadiationConfig, SurfaceGeometry, clear_sky_radiation,
    extraterrestrial_factor,
};
use solar_irradiance::time::{ClockTime, day_of_year_from_str, hour_angle_from_clock_time};
use solar_irradiance::{Error, GeoTimeContext, SunriseResult};

fn assert_close(label: &str, actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{label}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_february_first_worked_example() {
    let n = day_of_year_from_str("Feb 1", 2025).unwrap();
    assert_eq!(n, 32);

    let ctx = GeoTimeContext::from_timestamp(27.96, 82.54, "2025-02-01 12:00:00", 75.0).unwrap();
    assert_eq!(ctx.day_of_year(), n);

    let position = solar_position(&ctx);
    assert_close("declination", position.declination(), -17.2928976, 1e-6);
    assert_close("altitude", position.altitude(), 43.5197234, 1e-6);
    assert_close("zenith", position.zenith(), 46.4802766, 1e-6);
    assert_close("equation of time", position.equation_of_time(), -13.668584081644328, 1e-9);
    assert_close("hour angle", position.hour_angle(), -10.957146020411095, 1e-9);
    assert_eq!(position.solar_time().to_string(), "11:16:10");

    match position.sunrise_sunset() {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            assert_eq!(sunrise.solar.to_string(), "06:38:02");
            assert_eq!(sunrise.local.to_string(), "07:21:52");
            assert_eq!(transit.local.to_string(), "12:43:49");
            assert_eq!(sunset.solar.to_string(), "17:21:57");
            assert_eq!(sunset.local.to_string(), "18:05:46");
        }
        other => panic!("expected a regular day, got {other:?}"),
    }

    let surface = SurfaceGeometry::facing(&position, 30.0, 10.0);
    let radiation = clear_sky_radiation(
        n,
        position.altitude(),
        &AtmosphericTurbidity::new(0.35109, 2.48558),
        &surface,
        "ordinary".parse::<GroundType>().unwrap(),
        &RadiationConfig::default(),
    )
    .unwrap();
    assert_close("I_b_N", radiation.beam_normal, 901.1979867708259, 1e-6);
    assert_close("I_d_h", radiation.diffuse_horizontal, 99.60036821875522, 1e-6);
    assert_close("I_c", radiation.total_tilted, 937.3463642710477, 1e-6);
}

#[test]
fn test_sunrise_symmetry_and_round_trip() {
    let ctx = GeoTimeContext::from_timestamp(29.68, -82.27, "2025-07-04 08:30:00", -75.0).unwrap();
    let position = solar_position(&ctx);
    let h_ss = position.sunset_hour_angle().unwrap();
    assert_eq!(position.sunrise_hour_angle().unwrap(), -h_ss);

    let eot = position.equation_of_time();
    for text in ["00:00:30", "06:15:00", "12:00:00", "17:45:12", "23:59:00"] {
        let local: ClockTime = text.parse().unwrap();
        let back = solar_to_local(&ctx, eot, local_to_solar(&ctx, eot, local));
        assert!(back.minutes_since(local).abs() <= 1e-6, "{text} -> {back}");
    }
}

#[test]
fn test_clock_hour_angles() {
    assert_eq!(hour_angle_from_clock_time("12:00:00").unwrap(), 0.0);
    assert_eq!(hour_angle_from_clock_time("00:00:00").unwrap(), -180.0);
    assert_eq!(hour_angle_from_clock_time("18:00:00").unwrap(), 90.0);
    assert!(matches!(
        hour_angle_from_clock_time("noon"),
        Err(Error::InvalidFormat { .. })
    ));
}

#[test]
fn test_march_equinox_models() {
    let n = day_of_year_from_str("Mar 21", 2025).unwrap();
    let ctx = GeoTimeContext::with_nearest_meridian(36.08, 115.16, n, ClockTime::NOON).unwrap();
    let position = solar_position(&ctx);
    let surface = SurfaceGeometry::facing(&position, 36.08, 0.0);
    let input = EstimationInput::from_position(&position, &surface, 5240.0, 1260.0, 0.2).unwrap();
    let diffuse = DiffuseContext::new(
        ctx.latitude(),
        position.declination(),
        5240.0,
        extraterrestrial_factor(n),
    );

    for (name, total) in [
        ("cpr", 1291.8621865467112),
        ("cprg", 932.5318140090079),
        ("daily_integration", 1567.2565484805198),
    ] {
        let result = estimate_by_name(name, &input, &diffuse).unwrap();
        assert_eq!(result.model, name.parse::<DiffuseModel>().unwrap());
        assert_close(name, result.total, total, 1e-6);
    }

    assert!(matches!(
        estimate_by_name("unknown", &input, &diffuse),
        Err(Error::UnsupportedModel { .. })
    ));
}

#[test]
fn test_january_monthly_tilt() {
    let n = day_of_year_from_str("Jan 16", 2025).unwrap();
    let ctx = GeoTimeContext::with_nearest_meridian(25.0, 82.54, n, ClockTime::NOON).unwrap();
    let position = solar_position(&ctx);
    let surface = SurfaceGeometry::facing(&position, 30.0, 10.0);
    let h_ss = position.sunset_hour_angle().unwrap();

    let input = MonthlyTiltInput {
        latitude: ctx.latitude(),
        declination: position.declination(),
        sunrise_hour_angle: tilted_sunrise_hour_angle(ctx.latitude(), 30.0, position.declination())
            .unwrap(),
        sunset_hour_angle: h_ss,
        tilt: 30.0,
        monthly_horizontal: 16215.0,
        monthly_extraterrestrial: 24199.0,
        incidence_angle: surface.incidence_angle(position.altitude()),
        zenith: position.zenith(),
        reflectivity: GroundType::Ordinary.reflectivity(),
        sky: "anisotropic".parse::<SkyType>().unwrap(),
        method: DiffuseRatioMethod::Empirical,
    };
    let anisotropic = monthly_tilt(&input).unwrap();
    assert_close("anisotropic", anisotropic.total_tilted, 24326.913890360498, 1e-5);

    let isotropic = monthly_tilt(&MonthlyTiltInput {
        sky: SkyType::Isotropic,
        method: DiffuseRatioMethod::Cpr,
        ..input
    })
    .unwrap();
    assert_close("isotropic", isotropic.total_tilted, 22978.163139796445, 1e-5);
    assert!(anisotropic.total_tilted > isotropic.total_tilted);
}
