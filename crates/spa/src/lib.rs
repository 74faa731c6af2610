//! NREL Solar Position Algorithm.
//!
//! Computes the topocentric zenith and azimuth of the Sun (and optionally the incidence angle
//! on a tilted surface) together with the time, nutation and sidereal-time intermediates the
//! Moon pipeline reuses.

pub mod terms;

use chrono::{DateTime, Datelike, Timelike, Utc};
use eclipse_core::Observer;
use eclipse_core::angles::{deg2rad, limit_degrees, rad2deg};
use eclipse_core::polynomial::{ascending, third_order};
use eclipse_core::time::{julian_century, julian_ephemeris_day};
use eclipse_core::topocentric;
use log::debug;
use serde::Serialize;

use crate::terms::{B_TERMS, EarthTerm, L_TERMS, NUTATION, R_TERMS};

/// Selects which outputs beyond zenith/azimuth are produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpaMode {
    #[default]
    ZenithAzimuth,
    /// Also compute the incidence angle on a surface tilted `slope_deg` from horizontal
    /// whose normal is rotated `azimuth_rotation_deg` from south (negative east).
    Incidence {
        slope_deg: f64,
        azimuth_rotation_deg: f64,
    },
}

/// Instant and site for one solar position evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaInput {
    pub datetime: DateTime<Utc>,
    /// UT1 − UTC (seconds).
    pub delta_ut1_s: f64,
    /// TT − UT1 (seconds).
    pub delta_t_s: f64,
    pub observer: Observer,
}

impl SpaInput {
    pub fn new(datetime: DateTime<Utc>, delta_t_s: f64, observer: Observer) -> Self {
        Self {
            datetime,
            delta_ut1_s: 0.0,
            delta_t_s,
            observer,
        }
    }

    /// Check every field against the algorithm's valid range.
    pub fn validate(&self) -> Result<(), SpaError> {
        let year = self.datetime.year();
        if !(-2000..=6000).contains(&year) {
            return Err(SpaError::YearOutOfRange(year));
        }
        let observer = &self.observer;
        check("ΔUT1", self.delta_ut1_s, "(-1, 1) s", |v| v > -1.0 && v < 1.0)?;
        check("ΔT", self.delta_t_s, "[-8000, 8000] s", |v| v.abs() <= 8000.0)?;
        check("latitude", observer.latitude_deg, "[-90, 90] deg", |v| {
            v.abs() <= 90.0
        })?;
        check("longitude", observer.longitude_deg, "[-180, 180] deg", |v| {
            v.abs() <= 180.0
        })?;
        check("elevation", observer.elevation_m, ">= -6500000 m", |v| {
            v >= -6_500_000.0
        })?;
        check("pressure", observer.pressure_mbar, "[0, 5000] mbar", |v| {
            (0.0..=5000.0).contains(&v)
        })?;
        check("temperature", observer.temperature_c, "(-273, 6000] °C", |v| {
            v > -273.0 && v <= 6000.0
        })?;
        check(
            "atmospheric refraction",
            observer.atmospheric_refraction_deg,
            "[-5, 5] deg",
            |v| v.abs() <= 5.0,
        )?;
        Ok(())
    }
}

fn check(
    parameter: &'static str,
    value: f64,
    range: &'static str,
    valid: impl Fn(f64) -> bool,
) -> Result<(), SpaError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(SpaError::OutOfRange {
            parameter,
            value,
            range,
        })
    }
}

/// Errors raised when an input falls outside the algorithm's valid domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpaError {
    #[error("year {0} outside supported range [-2000, 6000]")]
    YearOutOfRange(i32),
    #[error("{parameter} {value} outside valid range {range}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        range: &'static str,
    },
}

/// Every quantity the solar pipeline derives, in degrees unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpaOutput {
    pub julian_day: f64,
    pub julian_century: f64,
    pub julian_ephemeris_day: f64,
    pub julian_ephemeris_century: f64,
    pub julian_ephemeris_millennium: f64,

    /// Earth heliocentric longitude.
    pub l_deg: f64,
    /// Earth heliocentric latitude.
    pub b_deg: f64,
    /// Sun–Earth distance (AU).
    pub r_au: f64,
    /// Geocentric longitude.
    pub theta_deg: f64,
    /// Geocentric latitude.
    pub beta_deg: f64,

    /// Nutation in longitude.
    pub delta_psi_deg: f64,
    /// Nutation in obliquity.
    pub delta_epsilon_deg: f64,
    /// Mean obliquity of the ecliptic (arc seconds).
    pub epsilon0_arcsec: f64,
    /// True obliquity of the ecliptic.
    pub epsilon_deg: f64,

    pub delta_tau_deg: f64,
    /// Apparent sun longitude.
    pub lambda_deg: f64,
    /// Greenwich mean sidereal time.
    pub nu0_deg: f64,
    /// Greenwich apparent sidereal time.
    pub nu_deg: f64,

    pub alpha_deg: f64,
    pub delta_deg: f64,
    /// Observer hour angle.
    pub h_deg: f64,
    /// Sun equatorial horizontal parallax.
    pub xi_deg: f64,
    pub delta_alpha_deg: f64,
    pub delta_prime_deg: f64,
    pub alpha_prime_deg: f64,
    pub h_prime_deg: f64,

    pub e0_deg: f64,
    pub delta_e_deg: f64,
    pub e_deg: f64,

    pub zenith_deg: f64,
    /// Westward from south.
    pub azimuth_astro_deg: f64,
    /// Eastward from north.
    pub azimuth_deg: f64,
    /// Surface incidence angle, present in [`SpaMode::Incidence`].
    pub incidence_deg: Option<f64>,
}

/// Zenith and azimuth only; the reduced mode the eclipse pipeline runs in.
pub fn compute_zenith_azimuth(input: &SpaInput) -> Result<SpaOutput, SpaError> {
    compute(input, SpaMode::ZenithAzimuth)
}

/// Run the full solar position calculation in the requested mode.
pub fn compute(input: &SpaInput, mode: SpaMode) -> Result<SpaOutput, SpaError> {
    input.validate()?;
    if let SpaMode::Incidence {
        slope_deg,
        azimuth_rotation_deg,
    } = mode
    {
        check("slope", slope_deg, "[-360, 360] deg", |v| v.abs() <= 360.0)?;
        check(
            "azimuth rotation",
            azimuth_rotation_deg,
            "[-360, 360] deg",
            |v| v.abs() <= 360.0,
        )?;
    }

    let observer = &input.observer;
    let jd = julian_day(&input.datetime, input.delta_ut1_s);
    let jc = julian_century(jd);
    let jde = julian_ephemeris_day(jd, input.delta_t_s);
    let jce = julian_century(jde);
    let jme = jce / 10.0;

    let l_deg = limit_degrees(rad2deg(earth_series(&L_TERMS, jme)));
    let b_deg = rad2deg(earth_series(&B_TERMS, jme));
    let r_au = earth_series(&R_TERMS, jme);
    let theta_deg = limit_degrees(l_deg + 180.0);
    let beta_deg = -b_deg;
    debug!("spa: jd={jd} jce={jce} L={l_deg} B={b_deg} R={r_au}");

    let (delta_psi_deg, delta_epsilon_deg) = nutation(jce);
    let epsilon0_arcsec = mean_obliquity_arcsec(jme);
    let epsilon_deg = delta_epsilon_deg + epsilon0_arcsec / 3600.0;

    let delta_tau_deg = -20.4898 / (3600.0 * r_au);
    let lambda_deg = theta_deg + delta_psi_deg + delta_tau_deg;
    let nu0_deg = greenwich_mean_sidereal_time(jd, jc);
    let nu_deg = nu0_deg + delta_psi_deg * deg2rad(epsilon_deg).cos();
    debug!("spa: Δψ={delta_psi_deg} ε={epsilon_deg} ν={nu_deg}");

    let alpha_deg = topocentric::right_ascension(lambda_deg, epsilon_deg, beta_deg);
    let delta_deg = topocentric::declination(beta_deg, epsilon_deg, lambda_deg);
    let h_deg = topocentric::observer_hour_angle(nu_deg, observer.longitude_deg, alpha_deg);
    let xi_deg = 8.794 / (3600.0 * r_au);
    let (delta_alpha_deg, delta_prime_deg) =
        topocentric::parallax_and_topocentric_declination(observer, xi_deg, h_deg, delta_deg);
    let alpha_prime_deg = alpha_deg + delta_alpha_deg;
    let h_prime_deg = h_deg - delta_alpha_deg;

    let e0_deg = topocentric::elevation_angle(observer.latitude_deg, delta_prime_deg, h_prime_deg);
    let delta_e_deg = topocentric::refraction_correction(observer, e0_deg);
    let e_deg = e0_deg + delta_e_deg;
    let zenith_deg = 90.0 - e_deg;
    let azimuth_astro_deg =
        topocentric::azimuth_astro(h_prime_deg, observer.latitude_deg, delta_prime_deg);
    let azimuth_deg = topocentric::azimuth(azimuth_astro_deg);

    let incidence_deg = match mode {
        SpaMode::ZenithAzimuth => None,
        SpaMode::Incidence {
            slope_deg,
            azimuth_rotation_deg,
        } => Some(surface_incidence_angle(
            zenith_deg,
            azimuth_astro_deg,
            azimuth_rotation_deg,
            slope_deg,
        )),
    };
    debug!("spa: zenith={zenith_deg} azimuth={azimuth_deg} incidence={incidence_deg:?}");

    Ok(SpaOutput {
        julian_day: jd,
        julian_century: jc,
        julian_ephemeris_day: jde,
        julian_ephemeris_century: jce,
        julian_ephemeris_millennium: jme,
        l_deg,
        b_deg,
        r_au,
        theta_deg,
        beta_deg,
        delta_psi_deg,
        delta_epsilon_deg,
        epsilon0_arcsec,
        epsilon_deg,
        delta_tau_deg,
        lambda_deg,
        nu0_deg,
        nu_deg,
        alpha_deg,
        delta_deg,
        h_deg,
        xi_deg,
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
        incidence_deg,
    })
}

/// Julian day for a UTC instant, with ΔUT1 folded into the seconds.
pub fn julian_day(datetime: &DateTime<Utc>, delta_ut1_s: f64) -> f64 {
    let mut year = f64::from(datetime.year());
    let mut month = f64::from(datetime.month());
    let seconds = f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;
    let minutes = f64::from(datetime.minute()) + (seconds + delta_ut1_s) / 60.0;
    let day_decimal = f64::from(datetime.day()) + (f64::from(datetime.hour()) + minutes / 60.0) / 24.0;

    if month < 3.0 {
        month += 12.0;
        year -= 1.0;
    }

    let mut jd = (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor()
        + day_decimal
        - 1524.5;

    if jd > 2_299_160.0 {
        let a = (year / 100.0).floor();
        jd += 2.0 - a + (a / 4.0).floor();
    }
    jd
}

/// Evaluate one heliocentric quantity: `Σ_i (Σ_terms A·cos(B + C·τ))·τ^i / 10^8` (radians or AU).
fn earth_series(series: &[&[EarthTerm]], jme: f64) -> f64 {
    let sums: Vec<f64> = series
        .iter()
        .map(|terms| {
            terms
                .iter()
                .map(|term| term.a * (term.b + term.c * jme).cos())
                .sum()
        })
        .collect();
    ascending(&sums, jme) / 1e8
}

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in degrees.
fn nutation(jce: f64) -> (f64, f64) {
    let x = [
        third_order(1.0 / 189_474.0, -0.0019142, 445_267.11148, 297.85036, jce),
        third_order(-1.0 / 300_000.0, -0.0001603, 35_999.05034, 357.52772, jce),
        third_order(1.0 / 56_250.0, 0.0086972, 477_198.867398, 134.96298, jce),
        third_order(1.0 / 327_270.0, -0.0036825, 483_202.017538, 93.27191, jce),
        third_order(1.0 / 450_000.0, 0.0020708, -1_934.136261, 125.04452, jce),
    ];

    let (sum_psi, sum_epsilon) = NUTATION.iter().fold((0.0, 0.0), |(psi, eps), term| {
        let argument = deg2rad(
            term.y
                .iter()
                .zip(x.iter())
                .map(|(&multiplier, &argument)| f64::from(multiplier) * argument)
                .sum::<f64>(),
        );
        (
            psi + (term.a + term.b * jce) * argument.sin(),
            eps + (term.c + term.d * jce) * argument.cos(),
        )
    });

    (sum_psi / 36_000_000.0, sum_epsilon / 36_000_000.0)
}

fn mean_obliquity_arcsec(jme: f64) -> f64 {
    let u = jme / 10.0;
    84381.448
        + u * (-4680.93
            + u * (-1.55
                + u * (1999.25
                    + u * (-51.38
                        + u * (-249.67
                            + u * (-39.05 + u * (7.12 + u * (27.87 + u * (5.79 + u * 2.45)))))))))
}

fn greenwich_mean_sidereal_time(jd: f64, jc: f64) -> f64 {
    limit_degrees(
        280.46061837
            + 360.98564736629 * (jd - eclipse_core::constants::J2000_JD)
            + jc * jc * (0.000387933 - jc / 38_710_000.0),
    )
}

/// Incidence angle on a tilted surface (degrees).
pub fn surface_incidence_angle(
    zenith_deg: f64,
    azimuth_astro_deg: f64,
    azimuth_rotation_deg: f64,
    slope_deg: f64,
) -> f64 {
    let zenith = deg2rad(zenith_deg);
    let slope = deg2rad(slope_deg);
    rad2deg(
        (zenith.cos() * slope.cos()
            + slope.sin() * zenith.sin() * deg2rad(azimuth_astro_deg - azimuth_rotation_deg).cos())
        .acos(),
    )
}
