//! Seams to the two external models the pipeline consumes.

use eclipse_bird::{BirdError, BirdInput, BirdOutput};
use eclipse_spa::{SpaError, SpaInput, SpaOutput};

/// Source of the Sun's position and the time/nutation scalars the Moon engine reuses.
pub trait SunPositionProvider {
    /// Compute zenith and azimuth only; surface-incidence outputs are not needed.
    fn zenith_azimuth(&self, input: &SpaInput) -> Result<SpaOutput, SpaError>;
}

/// Clear-sky irradiance model accepting an obscuration modifier.
pub trait ClearSkyModel {
    fn irradiance(&self, input: &BirdInput) -> Result<BirdOutput, BirdError>;
}

/// The NREL Solar Position Algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct NrelSpa;

impl SunPositionProvider for NrelSpa {
    fn zenith_azimuth(&self, input: &SpaInput) -> Result<SpaOutput, SpaError> {
        eclipse_spa::compute_zenith_azimuth(input)
    }
}

/// The SERI/NREL Bird clear-sky model.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirdClearSky;

impl ClearSkyModel for BirdClearSky {
    fn irradiance(&self, input: &BirdInput) -> Result<BirdOutput, BirdError> {
        eclipse_bird::estimate(input)
    }
}
