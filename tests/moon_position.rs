mod common;

use chrono::Duration;
use common::{assert_close, eclipse_2009, golden_2003};
use solar_eclipse_calculator::mpa::{SolarInputs, compute_moon_position};
use solar_eclipse_calculator::sampa::solar_inputs;
use solar_eclipse_calculator::spa;

fn moon_for(input: &spa::SpaInput) -> solar_eclipse_calculator::mpa::MoonPosition {
    let sun = spa::compute_zenith_azimuth(input).expect("valid inputs");
    compute_moon_position(&solar_inputs(&sun), &input.observer)
}

#[test]
fn eclipse_2009_reference_moon_position() {
    let moon = moon_for(&eclipse_2009());

    assert_close(moon.arguments.l_prime, 118.213033, 1e-6, "moon mean longitude");
    assert_close(moon.arguments.d, 358.265898, 1e-6, "mean elongation");
    assert_close(moon.arguments.m, 196.845702, 1e-6, "sun mean anomaly");
    assert_close(moon.arguments.m_prime, 6.110197, 1e-6, "moon mean anomaly");
    assert_close(moon.arguments.f, 177.954287, 1e-6, "argument of latitude");
    assert_close(moon.l, 574_471.73, 1e-2, "longitude series");
    assert_close(moon.r, -27_486_437.83, 1e-1, "distance series");
    assert_close(moon.b, 133_987.11, 1e-2, "latitude series");
    assert_close(moon.lambda_prime_deg, 118.789007, 1e-6, "geocentric longitude");
    assert_close(moon.beta_deg, 0.131573, 1e-6, "geocentric latitude");
    assert_close(moon.distance_km, 357_514.122, 1e-3, "earth-moon distance");
    assert_close(moon.parallax_deg, 1.022225, 1e-6, "horizontal parallax");
    assert_close(moon.lambda_deg, 118.793448, 1e-6, "apparent longitude");
    assert_close(moon.alpha_deg, 120.951882, 1e-6, "right ascension");
    assert_close(moon.delta_deg, 20.530265, 1e-6, "declination");
    assert_close(moon.h_deg, 345.604625, 1e-6, "hour angle");
    assert_close(moon.delta_alpha_deg, 0.251062, 1e-6, "ra parallax");
    assert_close(moon.delta_prime_deg, 20.448307, 1e-6, "topocentric declination");
    assert_close(moon.alpha_prime_deg, 121.202944, 1e-6, "topocentric right ascension");
    assert_close(moon.h_prime_deg, 345.353564, 1e-6, "topocentric hour angle");
    assert_close(moon.e0_deg, 75.854775, 1e-6, "uncorrected elevation");
    assert_close(moon.delta_e_deg, 0.004187, 1e-6, "refraction");
    assert_close(moon.e_deg, 75.858962, 1e-6, "elevation");
    assert_close(moon.zenith_deg, 14.141038, 1e-6, "zenith");
    assert_close(moon.azimuth_astro_deg, 284.193140, 1e-6, "azimuth astro");
    assert_close(moon.azimuth_deg, 104.193140, 1e-6, "azimuth");
}

#[test]
fn golden_2003_moon_direction() {
    let moon = moon_for(&golden_2003());
    assert_close(moon.zenith_deg, 84.730056, 1e-5, "zenith");
    assert_close(moon.azimuth_deg, 300.059607, 1e-5, "azimuth");
}

#[test]
fn repeated_calls_are_bit_identical() {
    let input = eclipse_2009();
    let sun = spa::compute_zenith_azimuth(&input).expect("valid inputs");
    let solar = solar_inputs(&sun);
    let first = compute_moon_position(&solar, &input.observer);
    let second = compute_moon_position(&solar, &input.observer);
    assert_eq!(first, second);
    assert_eq!(first.zenith_deg.to_bits(), second.zenith_deg.to_bits());
}

#[test]
fn normalised_angles_stay_in_range_over_a_month() {
    let base = eclipse_2009();
    for hours in (0..(30 * 24)).step_by(7) {
        let mut input = base;
        input.datetime = base.datetime + Duration::hours(hours);
        let moon = moon_for(&input);
        let normalised = [
            moon.arguments.l_prime,
            moon.arguments.d,
            moon.arguments.m,
            moon.arguments.m_prime,
            moon.arguments.f,
            moon.lambda_prime_deg,
            moon.beta_deg,
            moon.alpha_deg,
            moon.h_deg,
            moon.azimuth_astro_deg,
            moon.azimuth_deg,
        ];
        for angle in normalised {
            assert!(
                (0.0..360.0).contains(&angle),
                "angle {angle} out of range at +{hours}h"
            );
        }
        let expected = (moon.azimuth_astro_deg + 180.0).rem_euclid(360.0);
        assert_close(moon.azimuth_deg, expected, 1e-9, "azimuth convention");
        assert_close(moon.zenith_deg, 90.0 - moon.e_deg, 1e-12, "zenith from elevation");
    }
}

#[test]
fn refraction_vanishes_well_below_horizon() {
    let base = eclipse_2009();
    let limit = -(0.26667 + base.observer.atmospheric_refraction_deg);
    let mut saw_below = false;
    for hours in 0..48 {
        let mut input = base;
        input.datetime = base.datetime + Duration::hours(hours);
        let moon = moon_for(&input);
        if moon.e0_deg < limit {
            saw_below = true;
            assert_eq!(moon.delta_e_deg, 0.0);
            assert_eq!(moon.e_deg, moon.e0_deg);
        } else {
            assert!(moon.delta_e_deg > 0.0);
        }
    }
    assert!(saw_below, "moon should set within two days");
}

#[test]
fn solar_inputs_are_passed_through_unchanged() {
    let input = eclipse_2009();
    let sun = spa::compute_zenith_azimuth(&input).expect("valid inputs");
    let solar = solar_inputs(&sun);
    assert_eq!(
        solar,
        SolarInputs {
            jce: sun.julian_ephemeris_century,
            nu_deg: sun.nu_deg,
            delta_psi_deg: sun.delta_psi_deg,
            epsilon_deg: sun.epsilon_deg,
        }
    );
    let shifted = SolarInputs {
        delta_psi_deg: solar.delta_psi_deg + 0.01,
        ..solar
    };
    let moon = compute_moon_position(&solar, &input.observer);
    let moved = compute_moon_position(&shifted, &input.observer);
    assert_close(
        moved.lambda_deg - moon.lambda_deg,
        0.01,
        1e-9,
        "apparent longitude follows nutation",
    );
}
