//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod rows {
    use std::io::Write;

    use eclipse_sampa::SampaOutput;
    use serde::Serialize;

    use crate::ExportError;

    pub const HEADER: [&str; 19] = [
        "site",
        "utc",
        "sun_zenith_deg",
        "sun_azimuth_deg",
        "moon_zenith_deg",
        "moon_azimuth_deg",
        "separation_deg",
        "sun_radius_deg",
        "moon_radius_deg",
        "unshaded_area",
        "unshaded_percent",
        "eclipse",
        "magnitude",
        "dni",
        "dni_eclipse",
        "ghi",
        "ghi_eclipse",
        "dhi",
        "dhi_eclipse",
    ];

    /// CSV row for one evaluated instant. Irradiance columns are empty in geometry-only runs.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub site: &'a str,
        pub utc: &'a str,
        pub sun_zenith_deg: f64,
        pub sun_azimuth_deg: f64,
        pub moon_zenith_deg: f64,
        pub moon_azimuth_deg: f64,
        pub separation_deg: f64,
        pub sun_radius_deg: f64,
        pub moon_radius_deg: f64,
        pub unshaded_area: f64,
        pub unshaded_percent: f64,
        pub eclipse: &'static str,
        pub magnitude: f64,
        pub dni: Option<f64>,
        pub dni_eclipse: Option<f64>,
        pub ghi: Option<f64>,
        pub ghi_eclipse: Option<f64>,
        pub dhi: Option<f64>,
        pub dhi_eclipse: Option<f64>,
    }

    impl<'a> Record<'a> {
        pub fn from_output(site: &'a str, utc: &'a str, output: &SampaOutput) -> Self {
            let geometry = &output.geometry;
            let irradiance = output.irradiance.as_ref();
            Self {
                site,
                utc,
                sun_zenith_deg: output.sun.zenith_deg,
                sun_azimuth_deg: output.sun.azimuth_deg,
                moon_zenith_deg: output.moon.zenith_deg,
                moon_azimuth_deg: output.moon.azimuth_deg,
                separation_deg: geometry.angular_separation_deg,
                sun_radius_deg: geometry.sun_radius_deg,
                moon_radius_deg: geometry.moon_radius_deg,
                unshaded_area: geometry.unshaded_area,
                unshaded_percent: geometry.unshaded_area_percent(),
                eclipse: geometry.kind().as_str(),
                magnitude: geometry.magnitude(),
                dni: irradiance.map(|i| i.direct_normal),
                dni_eclipse: irradiance.map(|i| i.direct_normal_eclipse),
                ghi: irradiance.map(|i| i.global_horizontal),
                ghi_eclipse: irradiance.map(|i| i.global_horizontal_eclipse),
                dhi: irradiance.map(|i| i.diffuse_horizontal),
                dhi_eclipse: irradiance.map(|i| i.diffuse_horizontal_eclipse),
            }
        }
    }

    /// Write the header and every record.
    pub fn write_records<W: Write>(writer: W, records: &[Record<'_>]) -> Result<(), ExportError> {
        let mut out = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        out.write_record(HEADER)?;
        for record in records {
            out.serialize(record)?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod report {
    use std::io::Write;

    use eclipse_geometry::EclipseKind;
    use eclipse_sampa::{CalculationMode, IrradianceResult, MoonPosition, SampaOutput, SpaOutput};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use crate::ExportError;

    #[derive(Debug, Serialize)]
    pub struct GeometrySummary {
        pub angular_separation_deg: f64,
        pub sun_radius_deg: f64,
        pub moon_radius_deg: f64,
        pub unshaded_area: f64,
        pub unshaded_area_percent: f64,
        pub kind: EclipseKind,
        pub magnitude: f64,
        pub obscuration: f64,
    }

    /// JSON envelope for one evaluated instant.
    #[derive(Debug, Serialize)]
    pub struct Report<'a> {
        pub site: &'a str,
        pub utc: &'a str,
        pub mode: CalculationMode,
        pub sun: &'a SpaOutput,
        pub moon: &'a MoonPosition,
        pub geometry: GeometrySummary,
        pub irradiance: Option<&'a IrradianceResult>,
    }

    impl<'a> Report<'a> {
        pub fn from_output(site: &'a str, utc: &'a str, output: &'a SampaOutput) -> Self {
            let geometry = &output.geometry;
            Self {
                site,
                utc,
                mode: output.mode,
                sun: &output.sun,
                moon: &output.moon,
                geometry: GeometrySummary {
                    angular_separation_deg: geometry.angular_separation_deg,
                    sun_radius_deg: geometry.sun_radius_deg,
                    moon_radius_deg: geometry.moon_radius_deg,
                    unshaded_area: geometry.unshaded_area,
                    unshaded_area_percent: geometry.unshaded_area_percent(),
                    kind: geometry.kind(),
                    magnitude: geometry.magnitude(),
                    obscuration: geometry.obscuration(),
                },
                irradiance: output.irradiance.as_ref(),
            }
        }
    }

    /// Write the reports as a pretty-printed JSON array.
    pub fn write_reports<W: Write>(mut writer: W, reports: &[Report<'_>]) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, reports)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
