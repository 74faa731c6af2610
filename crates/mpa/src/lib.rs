//! Moon Position Algorithm.
//!
//! Takes the time and nutation scalars produced by the solar position pipeline and carries the
//! Moon through mean, apparent, geocentric and topocentric coordinates to a zenith/azimuth
//! pair.
//!
//! Callers must stay inside the algorithm's physical domain: inputs that push an `asin`
//! argument outside [-1, 1] (e.g. an elevation so large it breaks the parallax approximation)
//! produce NaN rather than an error.

pub mod series;
pub mod terms;

use eclipse_core::Observer;
use eclipse_core::angles::{deg2rad, limit_degrees, rad2deg};
use eclipse_core::constants::EARTH_RADIUS_KM;
use eclipse_core::topocentric;
use log::debug;
use serde::Serialize;

pub use crate::series::{FundamentalArguments, HarmonicSum, eccentricity_factor, sum_periodic_terms};
use crate::terms::{LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS};

/// Scalars reused from the solar position calculation at the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarInputs {
    /// Julian ephemeris century.
    pub jce: f64,
    /// Greenwich apparent sidereal time (degrees).
    pub nu_deg: f64,
    /// Nutation in longitude (degrees).
    pub delta_psi_deg: f64,
    /// True obliquity of the ecliptic (degrees).
    pub epsilon_deg: f64,
}

/// Complete Moon position for one instant and observer, degrees unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPosition {
    #[serde(flatten)]
    pub arguments: FundamentalArguments,
    /// Σl, longitude series (10⁻⁶ degrees).
    pub l: f64,
    /// Σr, distance series (metres).
    pub r: f64,
    /// Σb, latitude series (10⁻⁶ degrees).
    pub b: f64,
    /// Geocentric longitude.
    pub lambda_prime_deg: f64,
    /// Geocentric latitude.
    pub beta_deg: f64,
    /// Earth–Moon distance (km).
    pub distance_km: f64,
    /// Equatorial horizontal parallax.
    pub parallax_deg: f64,
    /// Apparent longitude.
    pub lambda_deg: f64,
    pub alpha_deg: f64,
    pub delta_deg: f64,
    /// Observer hour angle.
    pub h_deg: f64,
    pub delta_alpha_deg: f64,
    pub delta_prime_deg: f64,
    pub alpha_prime_deg: f64,
    pub h_prime_deg: f64,
    /// Topocentric elevation without refraction.
    pub e0_deg: f64,
    pub delta_e_deg: f64,
    /// Topocentric elevation with refraction.
    pub e_deg: f64,
    pub zenith_deg: f64,
    /// Westward from south.
    pub azimuth_astro_deg: f64,
    /// Eastward from north.
    pub azimuth_deg: f64,
}

/// Longitude and latitude perturbations from Venus, Jupiter and the Earth's flattening,
/// `(ΔL, ΔB)` in the series' units.
fn perturbations(args: &FundamentalArguments, jce: f64) -> (f64, f64) {
    let a1 = 119.75 + 131.849 * jce;
    let a2 = 53.09 + 479_264.290 * jce;
    let a3 = 313.45 + 481_266.484 * jce;
    let sin = |deg: f64| deg2rad(deg).sin();

    let delta_l = 3958.0 * sin(a1) + 318.0 * sin(a2) + 1962.0 * sin(args.l_prime - args.f);
    let delta_b = -2235.0 * sin(args.l_prime)
        + 175.0 * sin(a1 - args.f)
        + 127.0 * sin(args.l_prime - args.m_prime)
        + 382.0 * sin(a3)
        + 175.0 * sin(a1 + args.f)
        - 115.0 * sin(args.l_prime + args.m_prime);
    (delta_l, delta_b)
}

/// Compute the topocentric position of the Moon.
pub fn compute_moon_position(solar: &SolarInputs, observer: &Observer) -> MoonPosition {
    let jce = solar.jce;
    let arguments = FundamentalArguments::at(jce);

    let longitude_distance = sum_periodic_terms(&arguments, jce, &LONGITUDE_DISTANCE_TERMS);
    let latitude = sum_periodic_terms(&arguments, jce, &LATITUDE_TERMS);
    let (l, r) = (longitude_distance.sin_sum, longitude_distance.cos_sum);
    let b = latitude.sin_sum;

    let (delta_l, delta_b) = perturbations(&arguments, jce);
    let lambda_prime_deg = limit_degrees(arguments.l_prime + (l + delta_l) / 1e6);
    let beta_deg = limit_degrees((b + delta_b) / 1e6);

    let distance_km = 385_000.56 + r / 1000.0;
    let parallax_deg = rad2deg((EARTH_RADIUS_KM / distance_km).asin());
    let lambda_deg = lambda_prime_deg + solar.delta_psi_deg;
    debug!("mpa: λ′={lambda_prime_deg} β={beta_deg} Δ={distance_km} km π={parallax_deg}");

    let alpha_deg = topocentric::right_ascension(lambda_deg, solar.epsilon_deg, beta_deg);
    let delta_deg = topocentric::declination(beta_deg, solar.epsilon_deg, lambda_deg);
    let h_deg = topocentric::observer_hour_angle(solar.nu_deg, observer.longitude_deg, alpha_deg);

    let (delta_alpha_deg, delta_prime_deg) =
        topocentric::parallax_and_topocentric_declination(observer, parallax_deg, h_deg, delta_deg);
    let alpha_prime_deg = alpha_deg + delta_alpha_deg;
    let h_prime_deg = h_deg - delta_alpha_deg;

    let e0_deg = topocentric::elevation_angle(observer.latitude_deg, delta_prime_deg, h_prime_deg);
    let delta_e_deg = topocentric::refraction_correction(observer, e0_deg);
    let e_deg = e0_deg + delta_e_deg;

    let zenith_deg = 90.0 - e_deg;
    let azimuth_astro_deg =
        topocentric::azimuth_astro(h_prime_deg, observer.latitude_deg, delta_prime_deg);
    let azimuth_deg = topocentric::azimuth(azimuth_astro_deg);
    debug!("mpa: zenith={zenith_deg} azimuth={azimuth_deg}");

    MoonPosition {
        arguments,
        l,
        r,
        b,
        lambda_prime_deg,
        beta_deg,
        distance_km,
        parallax_deg,
        lambda_deg,
        alpha_deg,
        delta_deg,
        h_deg,
        delta_alpha_deg,
        delta_prime_deg,
        alpha_prime_deg,
        h_prime_deg,
        e0_deg,
        delta_e_deg,
        e_deg,
        zenith_deg,
        azimuth_astro_deg,
        azimuth_deg,
    }
}
