mod common;

use std::f64::consts::PI;

use common::{assert_close, eclipse_2009, golden_2003};
use solar_eclipse_calculator::geometry::{
    EclipseGeometry, EclipseKind, angular_separation, compute_eclipse_geometry, intersection_area,
    moon_disk_radius, sun_disk_radius, unshaded_area,
};
use solar_eclipse_calculator::mpa::compute_moon_position;
use solar_eclipse_calculator::sampa::solar_inputs;
use solar_eclipse_calculator::spa;

fn geometry_for(input: &spa::SpaInput) -> EclipseGeometry {
    let sun = spa::compute_zenith_azimuth(input).expect("valid inputs");
    let moon = compute_moon_position(&solar_inputs(&sun), &input.observer);
    compute_eclipse_geometry(sun.zenith_deg, sun.azimuth_deg, &moon, sun.r_au)
}

#[test]
fn eclipse_2009_reference_geometry() {
    let geometry = geometry_for(&eclipse_2009());

    assert_close(geometry.angular_separation_deg, 0.374760, 1e-4, "separation");
    assert_close(geometry.sun_radius_deg, 0.262360, 1e-4, "sun radius");
    assert_close(geometry.moon_radius_deg, 0.283341, 1e-4, "moon radius");
    assert_close(geometry.unshaded_area, 0.169457, 1e-5, "unshaded area");
    assert_close(geometry.unshaded_area_percent(), 78.363514, 1e-4, "unshaded percent");
    assert_eq!(geometry.kind(), EclipseKind::Partial);
    assert_close(geometry.obscuration(), 0.216365, 1e-5, "obscuration");
    assert_close(
        geometry.magnitude(),
        (0.262360 + 0.283341 - 0.374760) / (2.0 * 0.262360),
        1e-4,
        "magnitude",
    );
}

#[test]
fn no_eclipse_reports_full_disk() {
    let geometry = geometry_for(&golden_2003());
    assert!(geometry.angular_separation_deg > 90.0);
    assert_eq!(geometry.unshaded_area_percent(), 100.0);
    assert_eq!(geometry.kind(), EclipseKind::None);
    assert_eq!(geometry.magnitude(), 0.0);
    assert_eq!(geometry.obscuration(), 0.0);
}

#[test]
fn disjoint_disks_never_intersect() {
    let (rs, rm) = (0.2666, 0.2500);
    for ems in [rs + rm, rs + rm + 1e-9, 1.0, 45.0, 179.0] {
        assert_eq!(intersection_area(ems, rs, rm), 0.0);
        let geometry = EclipseGeometry::from_disks(ems, rs, rm);
        assert_eq!(geometry.unshaded_area_percent(), 100.0);
    }
}

#[test]
fn total_eclipse_leaves_no_unshaded_area() {
    let (rs, rm) = (0.2600, 0.2800);
    for ems in [0.0, 0.005, rm - rs] {
        assert_eq!(unshaded_area(ems, rs, rm), 0.0);
        let geometry = EclipseGeometry::from_disks(ems, rs, rm);
        assert_eq!(geometry.kind(), EclipseKind::Total);
        assert_eq!(geometry.unshaded_area_percent(), 0.0);
    }
}

#[test]
fn annular_eclipse_uses_moon_disk_area() {
    let (rs, rm) = (0.2700, 0.2450);
    let geometry = EclipseGeometry::from_disks(0.01, rs, rm);
    assert_eq!(geometry.kind(), EclipseKind::Annular);
    assert_close(intersection_area(0.01, rs, rm), PI * rm * rm, 1e-15, "inner disk area");
    assert_close(
        geometry.unshaded_area_percent(),
        100.0 * (1.0 - (rm * rm) / (rs * rs)),
        1e-9,
        "annulus percent",
    );
}

#[test]
fn unshaded_percent_grows_with_separation() {
    let (rs, rm) = (0.262360, 0.283341);
    let start = (rm - rs) + 1e-6;
    let end = rs + rm - 1e-6;
    let mut previous = -1.0;
    for step in 0..=100 {
        let ems = start + (end - start) * step as f64 / 100.0;
        let geometry = EclipseGeometry::from_disks(ems, rs, rm);
        let percent = geometry.unshaded_area_percent();
        assert!((0.0..=100.0).contains(&percent));
        assert!(geometry.unshaded_area >= 0.0);
        assert!(percent > previous, "percent must increase at ems {ems}");
        previous = percent;
    }
}

#[test]
fn lens_matches_half_overlap_of_equal_disks() {
    // Two unit disks one radius apart overlap by 2π/3 − √3/2.
    let area = intersection_area(1.0, 1.0, 1.0);
    assert_close(area, 2.0 * PI / 3.0 - 3.0_f64.sqrt() / 2.0, 1e-12, "lens area");
}

#[test]
fn coincident_directions_give_zero_separation() {
    let ems = angular_separation(30.0, 120.0, 30.0, 120.0);
    assert!(ems.is_finite());
    assert!(ems.abs() < 1e-5);
    let ems = angular_separation(0.0, 10.0, 0.0, 250.0);
    assert!(ems.abs() < 1e-5);
}

#[test]
fn disk_radii_follow_distance() {
    assert_close(sun_disk_radius(1.0), 959.63 / 3600.0, 1e-15, "sun radius at 1 AU");
    assert!(sun_disk_radius(0.983) > sun_disk_radius(1.017));

    let input = eclipse_2009();
    let sun = spa::compute_zenith_azimuth(&input).expect("valid inputs");
    let moon = compute_moon_position(&solar_inputs(&sun), &input.observer);
    let mut farther = moon;
    farther.distance_km += 20_000.0;
    assert!(moon_disk_radius(&farther) < moon_disk_radius(&moon));
}
