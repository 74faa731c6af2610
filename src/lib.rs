//! Solar eclipse calculator: Sun and Moon topocentric positions, the Sun's unshaded lune and
//! eclipse-adjusted clear-sky irradiance.
//!
//! The computation lives in the `crates/` members; this crate gathers them behind one path so
//! front-ends (the `sampa` CLI, integration tests) share a single import root.

pub use eclipse_bird as bird;
pub use eclipse_config as config;
pub use eclipse_core as common;
pub use eclipse_export as export;
pub use eclipse_geometry as geometry;
pub use eclipse_mpa as mpa;
pub use eclipse_sampa as sampa;
pub use eclipse_spa as spa;

/// Package version, as reported by `sampa --version`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
