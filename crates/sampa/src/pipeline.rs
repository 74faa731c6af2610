//! Orchestrator sequencing the Sun position, Moon position, disk geometry and irradiance stages.

use eclipse_bird::{Atmosphere, BirdError};
use eclipse_geometry::{EclipseGeometry, compute_eclipse_geometry};
use eclipse_mpa::{MoonPosition, SolarInputs, compute_moon_position};
use eclipse_spa::{SpaError, SpaInput, SpaOutput};
use log::{debug, info};
use serde::Serialize;

use crate::collaborators::{BirdClearSky, ClearSkyModel, NrelSpa, SunPositionProvider};
use crate::irradiance::{IrradianceResult, apply_eclipse_obscuration};

/// Whether irradiance is computed after the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    GeometryOnly,
    #[default]
    WithIrradiance,
}

/// Inputs for one evaluation of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampaConfig {
    pub input: SpaInput,
    /// Required for [`CalculationMode::WithIrradiance`].
    pub atmosphere: Option<Atmosphere>,
    pub mode: CalculationMode,
}

/// Results of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampaOutput {
    pub mode: CalculationMode,
    pub sun: SpaOutput,
    pub moon: MoonPosition,
    pub geometry: EclipseGeometry,
    /// `None` when the mode did not request irradiance.
    pub irradiance: Option<IrradianceResult>,
}

impl SampaOutput {
    /// Irradiance, or the all-zero record when it was not requested.
    pub fn irradiance_or_zero(&self) -> IrradianceResult {
        self.irradiance.unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SampaError {
    #[error(transparent)]
    SunPosition(#[from] SpaError),
    #[error(transparent)]
    ClearSky(#[from] BirdError),
    #[error("irradiance requested but no atmospheric inputs were supplied")]
    MissingAtmosphere,
}

/// Scalars of a solar position result that the Moon engine reuses.
pub fn solar_inputs(sun: &SpaOutput) -> SolarInputs {
    SolarInputs {
        jce: sun.julian_ephemeris_century,
        nu_deg: sun.nu_deg,
        delta_psi_deg: sun.delta_psi_deg,
        epsilon_deg: sun.epsilon_deg,
    }
}

/// Run the pipeline with the NREL SPA and the Bird clear-sky model.
pub fn calculate(config: &SampaConfig) -> Result<SampaOutput, SampaError> {
    calculate_with(config, &NrelSpa, &BirdClearSky)
}

/// Run the pipeline with the given collaborators.
pub fn calculate_with<S, C>(
    config: &SampaConfig,
    sun_provider: &S,
    clear_sky: &C,
) -> Result<SampaOutput, SampaError>
where
    S: SunPositionProvider + ?Sized,
    C: ClearSkyModel + ?Sized,
{
    let atmosphere = match config.mode {
        CalculationMode::WithIrradiance => {
            Some(config.atmosphere.ok_or(SampaError::MissingAtmosphere)?)
        }
        CalculationMode::GeometryOnly => None,
    };

    let sun = sun_provider.zenith_azimuth(&config.input)?;
    let observer = &config.input.observer;
    let moon = compute_moon_position(&solar_inputs(&sun), observer);
    let geometry = compute_eclipse_geometry(sun.zenith_deg, sun.azimuth_deg, &moon, sun.r_au);

    let irradiance = match atmosphere {
        Some(atmosphere) => Some(apply_eclipse_obscuration(
            clear_sky,
            geometry.unshaded_area_percent(),
            sun.zenith_deg,
            sun.r_au,
            observer.pressure_mbar,
            &atmosphere,
        )?),
        None => {
            debug!("pipeline: irradiance not requested");
            None
        }
    };

    info!(
        "{}: sun z={:.4} moon z={:.4} separation={:.5} unshaded={:.4}%",
        config.input.datetime,
        sun.zenith_deg,
        moon.zenith_deg,
        geometry.angular_separation_deg,
        geometry.unshaded_area_percent()
    );

    Ok(SampaOutput {
        mode: config.mode,
        sun,
        moon,
        geometry,
        irradiance,
    })
}
