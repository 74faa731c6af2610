mod common;

use std::cell::Cell;

use common::{assert_close, eclipse_2009, golden_2003};
use solar_eclipse_calculator::sampa::{
    Atmosphere, BirdError, BirdInput, BirdOutput, CalculationMode, ClearSkyModel, NrelSpa,
    SampaConfig, SampaError, SpaError, SpaInput, SpaOutput, SunPositionProvider,
    apply_eclipse_obscuration, calculate, calculate_with,
};

fn config(input: SpaInput, mode: CalculationMode) -> SampaConfig {
    SampaConfig {
        input,
        atmosphere: Some(Atmosphere::default()),
        mode,
    }
}

struct FailingSun;

impl SunPositionProvider for FailingSun {
    fn zenith_azimuth(&self, _input: &SpaInput) -> Result<SpaOutput, SpaError> {
        Err(SpaError::YearOutOfRange(9999))
    }
}

#[derive(Default)]
struct RecordingSky {
    modifier: Cell<Option<f64>>,
}

impl ClearSkyModel for RecordingSky {
    fn irradiance(&self, input: &BirdInput) -> Result<BirdOutput, BirdError> {
        self.modifier.set(Some(input.dni_modifier));
        Ok(BirdOutput {
            extraterrestrial: 1367.0,
            air_mass: 1.0,
            direct_normal: 1000.0,
            global_horizontal: 800.0,
            diffuse_horizontal: 100.0,
            direct_normal_modified: 1000.0 * input.dni_modifier,
            global_horizontal_modified: 800.0 * input.dni_modifier,
            diffuse_horizontal_modified: 100.0 * input.dni_modifier,
        })
    }
}

struct PanickingSky;

impl ClearSkyModel for PanickingSky {
    fn irradiance(&self, _input: &BirdInput) -> Result<BirdOutput, BirdError> {
        panic!("clear-sky model must not run in geometry-only mode");
    }
}

#[test]
fn eclipse_2009_full_pipeline() {
    let out = calculate(&config(eclipse_2009(), CalculationMode::WithIrradiance))
        .expect("pipeline succeeds");

    assert_close(out.sun.zenith_deg, 14.512686, 1e-6, "sun zenith");
    assert_close(out.sun.azimuth_deg, 104.387917, 1e-6, "sun azimuth");
    assert_close(out.moon.zenith_deg, 14.141038, 1e-6, "moon zenith");
    assert_close(out.moon.azimuth_deg, 104.193140, 1e-6, "moon azimuth");
    assert_close(out.geometry.angular_separation_deg, 0.374760, 1e-4, "separation");
    assert_close(out.geometry.sun_radius_deg, 0.262360, 1e-4, "sun radius");
    assert_close(out.geometry.moon_radius_deg, 0.283341, 1e-4, "moon radius");
    assert_close(out.geometry.unshaded_area_percent(), 78.363514, 1e-4, "unshaded percent");

    let irradiance = out.irradiance.expect("irradiance requested");
    assert_close(irradiance.direct_normal_eclipse, 719.139383, 1e-4, "dni under eclipse");
    assert_close(irradiance.direct_normal, 917.697, 0.01, "dni");
    assert_close(irradiance.global_horizontal_eclipse, 788.940, 0.01, "ghi under eclipse");
    assert_close(irradiance.diffuse_horizontal_eclipse, 92.747, 0.01, "dhi under eclipse");
}

#[test]
fn geometry_only_skips_clear_sky_model() {
    let cfg = SampaConfig {
        atmosphere: None,
        ..config(eclipse_2009(), CalculationMode::GeometryOnly)
    };
    let out = calculate_with(&cfg, &NrelSpa, &PanickingSky).expect("pipeline succeeds");
    assert_eq!(out.mode, CalculationMode::GeometryOnly);
    assert!(out.irradiance.is_none());

    let zero = out.irradiance_or_zero();
    assert_eq!(zero.direct_normal, 0.0);
    assert_eq!(zero.global_horizontal_eclipse, 0.0);

    let full = calculate(&config(eclipse_2009(), CalculationMode::WithIrradiance))
        .expect("pipeline succeeds");
    assert_eq!(out.sun, full.sun);
    assert_eq!(out.moon, full.moon);
    assert_eq!(out.geometry, full.geometry);
}

#[test]
fn sun_position_failure_is_propagated_unmodified() {
    let cfg = config(eclipse_2009(), CalculationMode::WithIrradiance);
    let err = calculate_with(&cfg, &FailingSun, &RecordingSky::default())
        .expect_err("sun failure aborts the pipeline");
    assert!(matches!(err, SampaError::SunPosition(SpaError::YearOutOfRange(9999))));
    assert_eq!(err.to_string(), SpaError::YearOutOfRange(9999).to_string());
}

#[test]
fn invalid_observer_is_rejected_before_moon_stage() {
    let mut input = eclipse_2009();
    input.observer.longitude_deg = 200.0;
    let err = calculate(&config(input, CalculationMode::GeometryOnly))
        .expect_err("longitude out of range");
    assert!(matches!(err, SampaError::SunPosition(SpaError::OutOfRange { parameter: "longitude", .. })));
}

#[test]
fn clear_sky_receives_unshaded_fraction() {
    let sky = RecordingSky::default();
    let out = calculate_with(
        &config(eclipse_2009(), CalculationMode::WithIrradiance),
        &NrelSpa,
        &sky,
    )
    .expect("pipeline succeeds");

    let modifier = sky.modifier.get().expect("clear-sky model invoked");
    assert_close(
        modifier,
        out.geometry.unshaded_area_percent() / 100.0,
        1e-15,
        "modifier",
    );
    let irradiance = out.irradiance_or_zero();
    assert_eq!(irradiance.direct_normal, 1000.0);
    assert_close(irradiance.direct_normal_eclipse, 1000.0 * modifier, 1e-9, "pass-through");
}

#[test]
fn sun_below_horizon_surfaces_clear_sky_error() {
    let mut input = golden_2003();
    input.datetime = common::utc(2003, 10, 18, 6, 0, 0);
    let err = calculate(&config(input, CalculationMode::WithIrradiance))
        .expect_err("night-time irradiance is undefined");
    assert!(matches!(err, SampaError::ClearSky(BirdError::SunBelowHorizon(_))));

    let geometry = calculate(&config(input, CalculationMode::GeometryOnly))
        .expect("geometry is defined at night");
    assert_eq!(geometry.geometry.unshaded_area_percent(), 100.0);
}

#[test]
fn irradiance_requires_atmosphere() {
    let cfg = SampaConfig {
        atmosphere: None,
        ..config(eclipse_2009(), CalculationMode::WithIrradiance)
    };
    assert!(matches!(calculate(&cfg), Err(SampaError::MissingAtmosphere)));
}

#[test]
fn obscuration_adapter_uses_percent_as_fraction() {
    let sky = RecordingSky::default();
    let result = apply_eclipse_obscuration(&sky, 25.0, 30.0, 1.0, 1013.25, &Atmosphere::default())
        .expect("recording sky never fails");
    assert_eq!(sky.modifier.get(), Some(0.25));
    assert_eq!(result.diffuse_horizontal_eclipse, 25.0);
}

#[test]
fn calculate_is_idempotent() {
    let cfg = config(eclipse_2009(), CalculationMode::WithIrradiance);
    let first = calculate(&cfg).expect("pipeline succeeds");
    let second = calculate(&cfg).expect("pipeline succeeds");
    assert_eq!(first, second);
}
