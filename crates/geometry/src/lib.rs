//! Sun/Moon disk geometry as seen by the observer: centre separation, apparent radii and the
//! area of the Sun's unshaded lune (SUL).
//!
//! Areas are in square degrees of sky. The unshaded percentage is always defined, so an
//! instant with no eclipse reports 100 rather than nothing.

use std::f64::consts::PI;

use eclipse_core::angles::{deg2rad, rad2deg};
use eclipse_mpa::MoonPosition;
use log::{debug, warn};
use serde::Serialize;

/// Apparent solar radius at 1 AU (arc seconds).
const SUN_RADIUS_ARCSEC_AT_1AU: f64 = 959.63;
/// Moon radius term for the apparent lunar radius (arc seconds · km).
const MOON_RADIUS_ARCSEC_KM: f64 = 358_473_400.0;

/// How the Moon's disk meets the Sun's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EclipseKind {
    /// Disks do not overlap.
    None,
    Partial,
    /// Moon disk lies wholly inside a larger Sun disk.
    Annular,
    /// Moon disk covers the whole Sun disk.
    Total,
}

impl EclipseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EclipseKind::None => "none",
            EclipseKind::Partial => "partial",
            EclipseKind::Annular => "annular",
            EclipseKind::Total => "total",
        }
    }
}

/// Separation, radii and unshaded area for one instant (degrees and square degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipseGeometry {
    /// Topocentric separation of the Sun and Moon centres.
    pub angular_separation_deg: f64,
    pub sun_radius_deg: f64,
    pub moon_radius_deg: f64,
    /// Unshaded Sun disk area, never negative.
    pub unshaded_area: f64,
}

impl EclipseGeometry {
    /// Build the record for two disks, deriving the unshaded area from them.
    pub fn from_disks(angular_separation_deg: f64, sun_radius_deg: f64, moon_radius_deg: f64) -> Self {
        Self {
            angular_separation_deg,
            sun_radius_deg,
            moon_radius_deg,
            unshaded_area: unshaded_area(angular_separation_deg, sun_radius_deg, moon_radius_deg),
        }
    }

    /// Area of the full Sun disk.
    pub fn sun_disk_area(&self) -> f64 {
        PI * self.sun_radius_deg * self.sun_radius_deg
    }

    /// Unshaded area as a percentage of the Sun disk, in [0, 100].
    pub fn unshaded_area_percent(&self) -> f64 {
        (100.0 * (self.unshaded_area / self.sun_disk_area())).clamp(0.0, 100.0)
    }

    /// Fraction of the Sun disk area hidden by the Moon.
    pub fn obscuration(&self) -> f64 {
        1.0 - self.unshaded_area_percent() / 100.0
    }

    /// Fraction of the Sun's diameter covered by the Moon.
    pub fn magnitude(&self) -> f64 {
        ((self.sun_radius_deg + self.moon_radius_deg - self.angular_separation_deg)
            / (2.0 * self.sun_radius_deg))
            .max(0.0)
    }

    pub fn kind(&self) -> EclipseKind {
        let (ems, rs, rm) = (
            self.angular_separation_deg,
            self.sun_radius_deg,
            self.moon_radius_deg,
        );
        if ems >= rs + rm {
            EclipseKind::None
        } else if ems <= (rs - rm).abs() {
            if rm >= rs {
                EclipseKind::Total
            } else {
                EclipseKind::Annular
            }
        } else {
            EclipseKind::Partial
        }
    }
}

/// Spherical law of cosines between two zenith/azimuth directions (degrees).
pub fn angular_separation(
    sun_zenith_deg: f64,
    sun_azimuth_deg: f64,
    moon_zenith_deg: f64,
    moon_azimuth_deg: f64,
) -> f64 {
    let zs = deg2rad(sun_zenith_deg);
    let zm = deg2rad(moon_zenith_deg);
    let cos_ems = zs.cos() * zm.cos()
        + zs.sin() * zm.sin() * deg2rad(sun_azimuth_deg - moon_azimuth_deg).cos();
    rad2deg(clamped_acos(cos_ems, "angular separation"))
}

/// Apparent radius of the Sun disk for a Sun–Earth distance in AU.
#[inline]
pub fn sun_disk_radius(sun_distance_au: f64) -> f64 {
    SUN_RADIUS_ARCSEC_AT_1AU / (3600.0 * sun_distance_au)
}

/// Apparent radius of the Moon disk, enlarged by the observer's elevation toward the Moon.
pub fn moon_disk_radius(moon: &MoonPosition) -> f64 {
    MOON_RADIUS_ARCSEC_KM
        * (1.0 + deg2rad(moon.e_deg).sin() * deg2rad(moon.parallax_deg).sin())
        / (3600.0 * moon.distance_km)
}

/// Overlap area of the Sun and Moon disks.
///
/// When one disk lies inside the other the Moon's full area is used, which is exact for a
/// total eclipse and an approximation for an annular one.
pub fn intersection_area(ems: f64, rs: f64, rm: f64) -> f64 {
    if ems >= rs + rm {
        return 0.0;
    }
    let (ems2, rs2, rm2) = (ems * ems, rs * rs, rm * rm);
    if ems <= (rs - rm).abs() {
        return PI * rm2;
    }

    let sn = ems2 + rs2 - rm2;
    let m = (ems2 - rs2 + rm2) / (2.0 * ems);
    let sa = sn / (2.0 * ems);
    let h = (4.0 * ems2 * rs2 - sn * sn).max(0.0).sqrt() / (2.0 * ems);
    rs2 * clamped_acos(sa / rs, "sun lens angle") - h * sa
        + rm2 * clamped_acos(m / rm, "moon lens angle")
        - h * m
}

/// Sun disk area left uncovered by the Moon, clamped at zero.
pub fn unshaded_area(ems: f64, rs: f64, rm: f64) -> f64 {
    let raw = PI * rs * rs - intersection_area(ems, rs, rm);
    if raw < 0.0 {
        debug!("geometry: unshaded area {raw} clamped to 0");
        0.0
    } else {
        raw
    }
}

/// Derive the eclipse geometry from the Sun's direction and distance and the Moon position.
pub fn compute_eclipse_geometry(
    sun_zenith_deg: f64,
    sun_azimuth_deg: f64,
    moon: &MoonPosition,
    sun_distance_au: f64,
) -> EclipseGeometry {
    let ems = angular_separation(
        sun_zenith_deg,
        sun_azimuth_deg,
        moon.zenith_deg,
        moon.azimuth_deg,
    );
    let rs = sun_disk_radius(sun_distance_au);
    let rm = moon_disk_radius(moon);
    let geometry = EclipseGeometry::from_disks(ems, rs, rm);
    debug!(
        "geometry: ems={ems} rs={rs} rm={rm} sul={}%",
        geometry.unshaded_area_percent()
    );
    geometry
}

fn clamped_acos(cosine: f64, what: &str) -> f64 {
    if cosine.abs() > 1.0 {
        warn!("{what}: cosine {cosine} outside [-1, 1], clamped");
    }
    cosine.clamp(-1.0, 1.0).acos()
}
