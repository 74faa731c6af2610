//! Eclipse-adjusted irradiance.

use eclipse_bird::{Atmosphere, BirdError, BirdInput};
use log::debug;
use serde::Serialize;

use crate::collaborators::ClearSkyModel;

/// Clear-sky irradiance with and without the Moon's obscuration (W/m²).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct IrradianceResult {
    pub direct_normal: f64,
    pub direct_normal_eclipse: f64,
    pub global_horizontal: f64,
    pub global_horizontal_eclipse: f64,
    pub diffuse_horizontal: f64,
    pub diffuse_horizontal_eclipse: f64,
}

/// Run the clear-sky model once with `unshaded_area_percent / 100` as its modifier.
///
/// Model failures, such as a Sun below the horizon, are returned to the caller.
pub fn apply_eclipse_obscuration<C: ClearSkyModel + ?Sized>(
    model: &C,
    unshaded_area_percent: f64,
    sun_zenith_deg: f64,
    sun_distance_au: f64,
    pressure_mbar: f64,
    atmosphere: &Atmosphere,
) -> Result<IrradianceResult, BirdError> {
    let output = model.irradiance(&BirdInput {
        zenith_deg: sun_zenith_deg,
        sun_distance_au,
        pressure_mbar,
        atmosphere: *atmosphere,
        dni_modifier: unshaded_area_percent / 100.0,
    })?;
    debug!(
        "irradiance: modifier={} dni_sul={}",
        unshaded_area_percent / 100.0,
        output.direct_normal_modified
    );

    Ok(IrradianceResult {
        direct_normal: output.direct_normal,
        direct_normal_eclipse: output.direct_normal_modified,
        global_horizontal: output.global_horizontal,
        global_horizontal_eclipse: output.global_horizontal_modified,
        diffuse_horizontal: output.diffuse_horizontal,
        diffuse_horizontal_eclipse: output.diffuse_horizontal_modified,
    })
}
