//! SERI/NREL Bird clear-sky model.
//!
//! Estimates direct normal, global horizontal and diffuse horizontal irradiance for a cloudless
//! sky from the solar zenith angle and a handful of atmospheric parameters. A modifier in
//! [0, 1] scales the radiation leaving the Sun's disk, which is how eclipse obscuration enters.
//!
//! This is an independent implementation of Bird and Hulstrom's published equations, not a
//! port of NREL's `bird.c`. On the 2009-07-22 SAMPA validation case it gives a direct normal
//! irradiance 5.6e-5 (relative) above NREL's 719.099358 W/m².

use eclipse_core::angles::deg2rad;
use log::debug;
use serde::Serialize;

/// Solar constant used by the model (W/m²).
pub const SOLAR_CONSTANT: f64 = 1367.0;

/// Atmospheric parameters of the Bird model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Atmosphere {
    /// Total column ozone thickness (cm).
    pub ozone_cm: f64,
    /// Total column precipitable water (cm).
    pub water_cm: f64,
    /// Broadband aerosol optical depth.
    pub aerosol_optical_depth: f64,
    /// Forward-scattering ratio of the aerosol (typically 0.85).
    pub forward_scattering: f64,
    /// Ground reflectance.
    pub albedo: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            ozone_cm: 0.3,
            water_cm: 1.5,
            aerosol_optical_depth: 0.07637,
            forward_scattering: 0.85,
            albedo: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdInput {
    pub zenith_deg: f64,
    pub sun_distance_au: f64,
    pub pressure_mbar: f64,
    pub atmosphere: Atmosphere,
    /// Fraction of the Sun's disk radiation that is let through.
    pub dni_modifier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BirdError {
    #[error("solar zenith {0}° is at or below the horizon; clear-sky irradiance is undefined")]
    SunBelowHorizon(f64),
    #[error("{parameter} {value} outside valid range {range}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        range: &'static str,
    },
}

/// Clear-sky irradiance (W/m²), plain and scaled by the modifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirdOutput {
    /// Extraterrestrial irradiance at the Sun–Earth distance.
    pub extraterrestrial: f64,
    /// Relative optical air mass.
    pub air_mass: f64,
    pub direct_normal: f64,
    pub global_horizontal: f64,
    pub diffuse_horizontal: f64,
    pub direct_normal_modified: f64,
    pub global_horizontal_modified: f64,
    pub diffuse_horizontal_modified: f64,
}

fn check(
    parameter: &'static str,
    value: f64,
    range: &'static str,
    valid: impl Fn(f64) -> bool,
) -> Result<(), BirdError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(BirdError::OutOfRange {
            parameter,
            value,
            range,
        })
    }
}

impl BirdInput {
    pub fn validate(&self) -> Result<(), BirdError> {
        if !self.zenith_deg.is_finite() || self.zenith_deg >= 90.0 {
            return Err(BirdError::SunBelowHorizon(self.zenith_deg));
        }
        check("zenith", self.zenith_deg, "[0, 90) deg", |v| v >= 0.0)?;
        check("sun distance", self.sun_distance_au, "> 0 AU", |v| v > 0.0)?;
        check("pressure", self.pressure_mbar, "> 0 mbar", |v| v > 0.0)?;
        let atmosphere = &self.atmosphere;
        check("ozone", atmosphere.ozone_cm, ">= 0 cm", |v| v >= 0.0)?;
        check("water", atmosphere.water_cm, ">= 0 cm", |v| v >= 0.0)?;
        check(
            "aerosol optical depth",
            atmosphere.aerosol_optical_depth,
            ">= 0",
            |v| v >= 0.0,
        )?;
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        check("forward scattering", atmosphere.forward_scattering, "[0, 1]", unit)?;
        check("albedo", atmosphere.albedo, "[0, 1]", unit)?;
        check("modifier", self.dni_modifier, "[0, 1]", unit)?;
        Ok(())
    }
}

/// Evaluate the clear-sky model.
pub fn estimate(input: &BirdInput) -> Result<BirdOutput, BirdError> {
    input.validate()?;
    let zenith = input.zenith_deg;
    let Atmosphere {
        ozone_cm,
        water_cm,
        aerosol_optical_depth: taua,
        forward_scattering: ba,
        albedo,
    } = input.atmosphere;

    let etr = SOLAR_CONSTANT / (input.sun_distance_au * input.sun_distance_au);
    let cos_z = deg2rad(zenith).cos();

    let am = 1.0 / (cos_z + 0.15 * (93.885 - zenith).powf(-1.25));
    let amp = am * input.pressure_mbar / 1013.0;

    let t_rayleigh = (-0.0903 * amp.powf(0.84) * (1.0 + amp - amp.powf(1.01))).exp();
    let ozm = ozone_cm * am;
    let t_ozone = 1.0 - 0.1611 * ozm * (1.0 + 139.48 * ozm).powf(-0.3034)
        - 0.002715 * ozm / (1.0 + 0.044 * ozm + 0.0003 * ozm * ozm);
    let t_gases = (-0.0127 * amp.powf(0.26)).exp();
    let wm = water_cm * am;
    let t_water = 1.0 - 2.4959 * wm / ((1.0 + 79.034 * wm).powf(0.6828) + 6.385 * wm);
    let t_aerosol =
        (-taua.powf(0.873) * (1.0 + taua - taua.powf(0.7088)) * am.powf(0.9108)).exp();
    let t_aerosol_absorb = 1.0 - 0.1 * (1.0 - am + am.powf(1.06)) * (1.0 - t_aerosol);
    let sky_albedo = 0.0685 + (1.0 - ba) * (1.0 - t_aerosol / t_aerosol_absorb);

    let direct_normal = 0.9662 * etr * t_rayleigh * t_ozone * t_gases * t_water * t_aerosol;
    let scattered = etr * cos_z * 0.79 * t_ozone * t_water * t_gases * t_aerosol_absorb
        * (0.5 * (1.0 - t_rayleigh) + ba * (1.0 - t_aerosol / t_aerosol_absorb))
        / (1.0 - am + am.powf(1.02));
    let global_horizontal = (direct_normal * cos_z + scattered) / (1.0 - albedo * sky_albedo);
    let diffuse_horizontal = global_horizontal - direct_normal * cos_z;
    debug!("bird: am={am} dni={direct_normal} ghi={global_horizontal} dhi={diffuse_horizontal}");

    let modifier = input.dni_modifier;
    Ok(BirdOutput {
        extraterrestrial: etr,
        air_mass: am,
        direct_normal,
        global_horizontal,
        diffuse_horizontal,
        direct_normal_modified: direct_normal * modifier,
        global_horizontal_modified: global_horizontal * modifier,
        diffuse_horizontal_modified: diffuse_horizontal * modifier,
    })
}
