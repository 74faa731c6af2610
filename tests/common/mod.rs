#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use solar_eclipse_calculator::common::Observer;
use solar_eclipse_calculator::spa::SpaInput;

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid calendar instant")
}

/// 2009-07-22 total solar eclipse validation instant.
pub fn eclipse_2009() -> SpaInput {
    SpaInput {
        datetime: utc(2009, 7, 22, 1, 33, 0),
        delta_ut1_s: 0.0,
        delta_t_s: 66.4,
        observer: Observer {
            latitude_deg: 24.61167,
            longitude_deg: 143.36167,
            elevation_m: 0.0,
            pressure_mbar: 1000.0,
            temperature_c: 11.0,
            atmospheric_refraction_deg: 0.5667,
        },
    }
}

/// 2003-10-17 Golden, Colorado validation instant.
pub fn golden_2003() -> SpaInput {
    SpaInput {
        datetime: utc(2003, 10, 17, 19, 30, 30),
        delta_ut1_s: 0.0,
        delta_t_s: 67.0,
        observer: Observer {
            latitude_deg: 39.742476,
            longitude_deg: -105.1786,
            elevation_m: 1830.14,
            pressure_mbar: 820.0,
            temperature_c: 11.0,
            atmospheric_refraction_deg: 0.5667,
        },
    }
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual} (tol {tol})"
    );
}
