//! Core constants, angle helpers, and shared observer type for the solar eclipse workspace.

/// Physical and algorithmic constants shared by the Sun and Moon pipelines.
pub mod constants {
    /// Earth equatorial radius used by the lunar parallax (km).
    pub const EARTH_RADIUS_KM: f64 = 6378.14;
    /// Earth equatorial radius used by the topocentric parallax terms (m).
    pub const EARTH_RADIUS_M: f64 = 6_378_140.0;
    /// Polar/equatorial axis ratio of the reference ellipsoid.
    pub const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;
    /// Apparent solar radius the refraction rule compares against (degrees).
    pub const SUN_RADIUS_DEG: f64 = 0.26667;
    /// Julian day of the J2000.0 epoch.
    pub const J2000_JD: f64 = 2_451_545.0;
    /// Days per Julian century.
    pub const DAYS_PER_CENTURY: f64 = 36_525.0;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Degree/radian conversions and angle normalisation.
pub mod angles {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg2rad(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad2deg(radians: f64) -> f64 {
        radians.to_degrees()
    }

    /// Wrap an angle into [0, 360).
    ///
    /// Uses the floor-of-revolutions form so that every finite input maps into the
    /// half-open interval, including tiny negatives that `rem_euclid` rounds up to 360.
    #[inline]
    pub fn limit_degrees(degrees: f64) -> f64 {
        let revolutions = degrees / 360.0;
        let mut limited = 360.0 * (revolutions - revolutions.floor());
        if limited < 0.0 {
            limited += 360.0;
        }
        if limited >= 360.0 {
            limited -= 360.0;
        }
        limited
    }
}

/// Horner-form polynomial evaluation used by the fundamental-argument series.
pub mod polynomial {
    /// `((a·x + b)·x + c)·x + d`
    #[inline]
    pub fn third_order(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
        ((a * x + b) * x + c) * x + d
    }

    /// `(((a·x + b)·x + c)·x + d)·x + e`
    #[inline]
    pub fn fourth_order(a: f64, b: f64, c: f64, d: f64, e: f64, x: f64) -> f64 {
        (((a * x + b) * x + c) * x + d) * x + e
    }

    /// Evaluate `Σ coeffs[i]·x^i` with the lowest-order coefficient first.
    pub fn ascending(coeffs: &[f64], x: f64) -> f64 {
        coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }
}

/// Julian date helpers.
pub mod time {
    use super::constants::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY};

    /// Julian century relative to J2000.0 for a Julian (ephemeris) day.
    #[inline]
    pub fn julian_century(jd: f64) -> f64 {
        (jd - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Julian ephemeris day from a Julian day and ΔT in seconds.
    #[inline]
    pub fn julian_ephemeris_day(jd: f64, delta_t_s: f64) -> f64 {
        jd + delta_t_s / SECONDS_PER_DAY
    }
}

/// Observer site. Read-only input to every stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geographic latitude, positive north (degrees).
    pub latitude_deg: f64,
    /// Geographic longitude, positive east (degrees).
    pub longitude_deg: f64,
    /// Elevation above mean sea level (metres).
    pub elevation_m: f64,
    /// Annual average local pressure (millibars).
    pub pressure_mbar: f64,
    /// Annual average local temperature (°C).
    pub temperature_c: f64,
    /// Atmospheric refraction at sunrise and sunset (degrees).
    pub atmospheric_refraction_deg: f64,
}

impl Observer {
    pub const DEFAULT_PRESSURE_MBAR: f64 = 1013.25;
    pub const DEFAULT_TEMPERATURE_C: f64 = 15.0;
    pub const DEFAULT_REFRACTION_DEG: f64 = 0.5667;

    /// Sea-level observer with standard atmosphere at the given coordinates.
    pub fn at(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m: 0.0,
            pressure_mbar: Self::DEFAULT_PRESSURE_MBAR,
            temperature_c: Self::DEFAULT_TEMPERATURE_C,
            atmospheric_refraction_deg: Self::DEFAULT_REFRACTION_DEG,
        }
    }
}

/// Spherical transforms shared by the Sun and Moon pipelines: ecliptic to equatorial,
/// observer parallax, refraction and horizon azimuth.
pub mod topocentric {
    use super::Observer;
    use super::angles::{deg2rad, limit_degrees, rad2deg};
    use super::constants::{EARTH_FLATTENING_FACTOR, EARTH_RADIUS_M, SUN_RADIUS_DEG};

    /// Geocentric right ascension from apparent longitude, obliquity and latitude (degrees).
    pub fn right_ascension(lambda_deg: f64, epsilon_deg: f64, beta_deg: f64) -> f64 {
        let lambda = deg2rad(lambda_deg);
        let epsilon = deg2rad(epsilon_deg);
        limit_degrees(rad2deg(
            (lambda.sin() * epsilon.cos() - deg2rad(beta_deg).tan() * epsilon.sin())
                .atan2(lambda.cos()),
        ))
    }

    /// Geocentric declination from latitude, obliquity and apparent longitude (degrees).
    pub fn declination(beta_deg: f64, epsilon_deg: f64, lambda_deg: f64) -> f64 {
        let beta = deg2rad(beta_deg);
        let epsilon = deg2rad(epsilon_deg);
        rad2deg(
            (beta.sin() * epsilon.cos() + beta.cos() * epsilon.sin() * deg2rad(lambda_deg).sin())
                .asin(),
        )
    }

    #[inline]
    pub fn observer_hour_angle(nu_deg: f64, longitude_deg: f64, alpha_deg: f64) -> f64 {
        limit_degrees(nu_deg + longitude_deg - alpha_deg)
    }

    /// Right-ascension parallax and topocentric declination, `(Δα, δ′)` in degrees,
    /// for a body with equatorial horizontal parallax `parallax_deg`.
    pub fn parallax_and_topocentric_declination(
        observer: &Observer,
        parallax_deg: f64,
        hour_angle_deg: f64,
        declination_deg: f64,
    ) -> (f64, f64) {
        let lat = deg2rad(observer.latitude_deg);
        let parallax = deg2rad(parallax_deg);
        let hour_angle = deg2rad(hour_angle_deg);
        let delta = deg2rad(declination_deg);

        let u = (EARTH_FLATTENING_FACTOR * lat.tan()).atan();
        let y = EARTH_FLATTENING_FACTOR * u.sin() + observer.elevation_m * lat.sin() / EARTH_RADIUS_M;
        let x = u.cos() + observer.elevation_m * lat.cos() / EARTH_RADIUS_M;

        let denominator = delta.cos() - x * parallax.sin() * hour_angle.cos();
        let delta_alpha = (-x * parallax.sin() * hour_angle.sin()).atan2(denominator);
        let delta_prime =
            ((delta.sin() - y * parallax.sin()) * delta_alpha.cos()).atan2(denominator);

        (rad2deg(delta_alpha), rad2deg(delta_prime))
    }

    /// Topocentric elevation before refraction.
    pub fn elevation_angle(latitude_deg: f64, delta_prime_deg: f64, h_prime_deg: f64) -> f64 {
        let lat = deg2rad(latitude_deg);
        let delta_prime = deg2rad(delta_prime_deg);
        rad2deg(
            (lat.sin() * delta_prime.sin()
                + lat.cos() * delta_prime.cos() * deg2rad(h_prime_deg).cos())
            .asin(),
        )
    }

    /// Refraction correction for an uncorrected elevation `e0_deg`.
    ///
    /// Zero once the body is further below the horizon than the solar radius
    /// plus the observer's sunrise/sunset refraction.
    pub fn refraction_correction(observer: &Observer, e0_deg: f64) -> f64 {
        if e0_deg >= -(SUN_RADIUS_DEG + observer.atmospheric_refraction_deg) {
            (observer.pressure_mbar / 1010.0) * (283.0 / (273.0 + observer.temperature_c)) * 1.02
                / (60.0 * deg2rad(e0_deg + 10.3 / (e0_deg + 5.11)).tan())
        } else {
            0.0
        }
    }

    /// Azimuth measured westward from south.
    pub fn azimuth_astro(h_prime_deg: f64, latitude_deg: f64, delta_prime_deg: f64) -> f64 {
        let h_prime = deg2rad(h_prime_deg);
        let lat = deg2rad(latitude_deg);
        limit_degrees(rad2deg(h_prime.sin().atan2(
            h_prime.cos() * lat.sin() - deg2rad(delta_prime_deg).tan() * lat.cos(),
        )))
    }

    /// Azimuth measured eastward from north.
    #[inline]
    pub fn azimuth(azimuth_astro_deg: f64) -> f64 {
        limit_degrees(azimuth_astro_deg + 180.0)
    }
}
