use std::fs;

use chrono::{TimeZone, Utc};
use solar_eclipse_calculator::common::Observer;
use solar_eclipse_calculator::config::{ConfigError, load_sites, select_site};
use solar_eclipse_calculator::sampa::CalculationMode;

const MINIMAL_TOML: &str = r#"
name = "minimal"

[observer]
latitude_deg = 10.0
longitude_deg = -20.0

[time]
utc = "2024-04-08T18:00:00Z"
delta_t_s = 69.2
"#;

#[test]
fn bundled_site_directory_loads_in_file_order() {
    let sites = load_sites("configs/sites").expect("bundled sites parse");
    let names: Vec<&str> = sites.iter().map(|site| site.name.as_str()).collect();
    assert_eq!(names, ["golden-2003", "reference-2009"]);

    let reference = select_site(&sites, Some("REFERENCE-2009")).expect("case-insensitive lookup");
    assert_eq!(reference.observer.pressure_mbar, 1000.0);
    assert_eq!(reference.time.delta_t_s, 66.4);
    assert_eq!(
        reference.time.utc,
        Utc.with_ymd_and_hms(2009, 7, 22, 1, 33, 0).unwrap()
    );
}

#[test]
fn yaml_catalog_matches_toml_directory() {
    let yaml = load_sites("configs/sites.yaml").expect("yaml catalog parses");
    let toml = load_sites("configs/sites").expect("toml catalog parses");
    for site in &toml {
        let twin = select_site(&yaml, Some(&site.name)).expect("site present in both");
        let a = site.to_sampa_config(CalculationMode::WithIrradiance);
        let b = twin.to_sampa_config(CalculationMode::WithIrradiance);
        assert_eq!(a, b, "site {}", site.name);
    }
}

#[test]
fn omitted_fields_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minimal.toml");
    fs::write(&path, MINIMAL_TOML).unwrap();

    let sites = load_sites(&path).unwrap();
    assert_eq!(sites.len(), 1);
    let cfg = sites[0].to_sampa_config(CalculationMode::GeometryOnly);
    let observer = cfg.input.observer;
    assert_eq!(observer, Observer::at(10.0, -20.0));
    assert_eq!(observer.elevation_m, 0.0);
    assert_eq!(observer.pressure_mbar, 1013.25);
    assert_eq!(cfg.input.delta_ut1_s, 0.0);
    assert_eq!(cfg.mode, CalculationMode::GeometryOnly);

    let atmosphere = cfg.atmosphere.unwrap();
    assert_eq!(atmosphere.ozone_cm, 0.3);
    assert_eq!(atmosphere.aerosol_optical_depth, 0.07637);
}

#[test]
fn retargeting_keeps_site_and_changes_instant() {
    let sites = load_sites("configs/sites").unwrap();
    let site = select_site(&sites, Some("reference-2009")).unwrap();
    let later = Utc.with_ymd_and_hms(2009, 7, 22, 2, 0, 0).unwrap();
    let cfg = site.sampa_config_at(later, CalculationMode::WithIrradiance);
    assert_eq!(cfg.input.datetime, later);
    assert_eq!(cfg.input.observer.latitude_deg, 24.61167);
    assert_eq!(cfg.input.delta_t_s, 66.4);
}

#[test]
fn selection_errors() {
    let sites = load_sites("configs/sites").unwrap();
    assert!(matches!(
        select_site(&sites, Some("atlantis")),
        Err(ConfigError::SiteNotFound(name)) if name == "atlantis"
    ));
    assert!(matches!(select_site(&[], None), Err(ConfigError::EmptyCatalog)));
    assert_eq!(select_site(&sites, None).unwrap().name, "golden-2003");
}

#[test]
fn malformed_files_report_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("broken.toml");
    fs::write(&toml_path, "name = \"broken\"\n[observer]\nlatitude_deg = \"north\"\n").unwrap();
    assert!(matches!(load_sites(&toml_path), Err(ConfigError::Toml(_))));

    let yaml_path = dir.path().join("broken.yaml");
    fs::write(&yaml_path, "- name: broken\n  observer: [1, 2]\n").unwrap();
    assert!(matches!(load_sites(&yaml_path), Err(ConfigError::Parse(_))));

    assert!(matches!(
        load_sites(dir.path().join("missing.yaml")),
        Err(ConfigError::Io(_))
    ));
}
