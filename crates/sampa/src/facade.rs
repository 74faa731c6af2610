//! Re-exported APIs for consumers of the orchestrator crate.

pub use crate::collaborators::{BirdClearSky, ClearSkyModel, NrelSpa, SunPositionProvider};
pub use crate::irradiance::{IrradianceResult, apply_eclipse_obscuration};
pub use crate::pipeline::{
    CalculationMode, SampaConfig, SampaError, SampaOutput, calculate, calculate_with,
    solar_inputs,
};
pub use eclipse_bird::{Atmosphere, BirdError, BirdInput, BirdOutput};
pub use eclipse_core::Observer;
pub use eclipse_geometry::{EclipseGeometry, EclipseKind};
pub use eclipse_mpa::{MoonPosition, SolarInputs};
pub use eclipse_spa::{SpaError, SpaInput, SpaMode, SpaOutput};
