//! Site catalogs for the solar eclipse calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use eclipse_bird::Atmosphere;
use eclipse_core::Observer;
use eclipse_sampa::{CalculationMode, SampaConfig};
use eclipse_spa::SpaInput;
use serde::Deserialize;
use thiserror::Error;

/// One observing site and the instant to evaluate it at.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub observer: ObserverConfig,
    pub time: TimeConfig,
    #[serde(default)]
    pub atmosphere: Option<AtmosphereConfig>,
}

/// Observer location and local climate.
#[derive(Debug, Deserialize, Clone)]
pub struct ObserverConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub elevation_m: f64,
    #[serde(default = "default_pressure")]
    pub pressure_mbar: f64,
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
    #[serde(default = "default_refraction")]
    pub atmospheric_refraction_deg: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimeConfig {
    pub utc: DateTime<Utc>,
    pub delta_t_s: f64,
    #[serde(default)]
    pub delta_ut1_s: f64,
}

/// Bird clear-sky parameters; omitted fields take the model's defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct AtmosphereConfig {
    #[serde(default)]
    pub ozone_cm: Option<f64>,
    #[serde(default)]
    pub water_cm: Option<f64>,
    #[serde(default)]
    pub aerosol_optical_depth: Option<f64>,
    #[serde(default)]
    pub forward_scattering: Option<f64>,
    #[serde(default)]
    pub albedo: Option<f64>,
}

fn default_pressure() -> f64 {
    Observer::DEFAULT_PRESSURE_MBAR
}

fn default_temperature() -> f64 {
    Observer::DEFAULT_TEMPERATURE_C
}

fn default_refraction() -> f64 {
    Observer::DEFAULT_REFRACTION_DEG
}

impl ObserverConfig {
    pub fn to_observer(&self) -> Observer {
        Observer {
            latitude_deg: self.latitude_deg,
            longitude_deg: self.longitude_deg,
            elevation_m: self.elevation_m,
            pressure_mbar: self.pressure_mbar,
            temperature_c: self.temperature_c,
            atmospheric_refraction_deg: self.atmospheric_refraction_deg,
        }
    }
}

impl AtmosphereConfig {
    pub fn to_atmosphere(&self) -> Atmosphere {
        let defaults = Atmosphere::default();
        Atmosphere {
            ozone_cm: self.ozone_cm.unwrap_or(defaults.ozone_cm),
            water_cm: self.water_cm.unwrap_or(defaults.water_cm),
            aerosol_optical_depth: self
                .aerosol_optical_depth
                .unwrap_or(defaults.aerosol_optical_depth),
            forward_scattering: self
                .forward_scattering
                .unwrap_or(defaults.forward_scattering),
            albedo: self.albedo.unwrap_or(defaults.albedo),
        }
    }
}

impl SiteConfig {
    /// Orchestrator configuration for the site's configured instant.
    pub fn to_sampa_config(&self, mode: CalculationMode) -> SampaConfig {
        self.sampa_config_at(self.time.utc, mode)
    }

    /// Orchestrator configuration for the same site at another instant.
    ///
    /// Sites without an `atmosphere` table fall back to the default Bird parameters.
    pub fn sampa_config_at(&self, utc: DateTime<Utc>, mode: CalculationMode) -> SampaConfig {
        let atmosphere = self
            .atmosphere
            .as_ref()
            .map(AtmosphereConfig::to_atmosphere)
            .unwrap_or_default();
        SampaConfig {
            input: SpaInput {
                datetime: utc,
                delta_ut1_s: self.time.delta_ut1_s,
                delta_t_s: self.time.delta_t_s,
                observer: self.observer.to_observer(),
            },
            atmosphere: Some(atmosphere),
            mode,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read site catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("site '{0}' not found in catalog")]
    SiteNotFound(String),
    #[error("site catalog is empty")]
    EmptyCatalog,
}

/// Load site configurations from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>, ConfigError> {
    load_records(path)
}

/// Pick a site by name (case-insensitive), or the first site when no name is given.
pub fn select_site<'a>(
    sites: &'a [SiteConfig],
    name: Option<&str>,
) -> Result<&'a SiteConfig, ConfigError> {
    match name {
        Some(name) => sites
            .iter()
            .find(|site| site.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::SiteNotFound(name.to_string())),
        None => sites.first().ok_or(ConfigError::EmptyCatalog),
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
