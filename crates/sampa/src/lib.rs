//! Sun and Moon position pipeline for solar eclipses: runs the solar position collaborator, the
//! Moon position engine and the disk geometry, then optionally scales clear-sky irradiance by the
//! unshaded fraction of the Sun.

pub mod collaborators;
pub mod irradiance;
pub mod pipeline;

pub use eclipse_bird as bird;
pub use eclipse_geometry as geometry;
pub use eclipse_mpa as mpa;
pub use eclipse_spa as spa;
pub use facade::*;

mod facade;
