use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, ValueEnum};
use log::{info, trace};
use solar_eclipse_calculator::config::{SiteConfig, load_sites, select_site};
use solar_eclipse_calculator::export::report::{Report, write_reports};
use solar_eclipse_calculator::export::rows::{Record, write_records};
use solar_eclipse_calculator::export::writer_for_path;
use solar_eclipse_calculator::sampa::{CalculationMode, SampaOutput, calculate};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sun/Moon positions, eclipse unshaded area and clear-sky irradiance"
)]
struct Cli {
    /// Site catalog: YAML list, TOML file, or directory of TOML files
    #[arg(long, default_value = "configs/sites")]
    config: PathBuf,

    /// Site name (case-insensitive; defaults to the first site in the catalog)
    #[arg(long)]
    site: Option<String>,

    /// Evaluate at this UTC instant instead of the site's configured one (RFC 3339)
    #[arg(long)]
    at: Option<DateTime<Utc>>,

    /// Sweep from the start instant up to and including this UTC instant
    #[arg(long)]
    until: Option<DateTime<Utc>>,

    /// Sweep step in minutes
    #[arg(long, default_value_t = 10)]
    step_minutes: i64,

    /// Skip the clear-sky irradiance estimate
    #[arg(long, default_value_t = false)]
    geometry_only: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sites = load_sites(&cli.config)
        .with_context(|| format!("loading site catalog {}", cli.config.display()))?;
    let site = select_site(&sites, cli.site.as_deref())?;
    let mode = if cli.geometry_only {
        CalculationMode::GeometryOnly
    } else {
        CalculationMode::WithIrradiance
    };

    let instants = sweep_instants(
        cli.at.unwrap_or(site.time.utc),
        cli.until,
        cli.step_minutes,
    )?;
    info!(
        "evaluating site '{}' at {} instant(s)",
        site.name,
        instants.len()
    );

    let mut results = Vec::with_capacity(instants.len());
    for utc in instants {
        trace!("evaluating {utc}");
        let output = calculate(&site.sampa_config_at(utc, mode))
            .with_context(|| format!("calculation failed for {utc}"))?;
        results.push((utc.to_rfc3339(), output));
    }

    let mut writer = writer_for_path(&cli.output)?;
    match cli.format {
        OutputFormat::Table => print_table(&mut writer, site, &results)?,
        OutputFormat::Csv => {
            let records: Vec<Record<'_>> = results
                .iter()
                .map(|(utc, output)| Record::from_output(&site.name, utc, output))
                .collect();
            write_records(writer, &records)?;
        }
        OutputFormat::Json => {
            let reports: Vec<Report<'_>> = results
                .iter()
                .map(|(utc, output)| Report::from_output(&site.name, utc, output))
                .collect();
            write_reports(writer, &reports)?;
        }
    }

    Ok(())
}

fn sweep_instants(
    start: DateTime<Utc>,
    until: Option<DateTime<Utc>>,
    step_minutes: i64,
) -> anyhow::Result<Vec<DateTime<Utc>>> {
    let Some(end) = until else {
        return Ok(vec![start]);
    };
    if step_minutes <= 0 {
        bail!("--step-minutes must be positive, got {step_minutes}");
    }
    if end < start {
        bail!("--until {end} is before the start instant {start}");
    }
    let step = Duration::try_minutes(step_minutes)
        .with_context(|| format!("--step-minutes {step_minutes} is out of range"))?;
    let mut instants = Vec::new();
    let mut utc = start;
    while utc <= end {
        instants.push(utc);
        utc += step;
    }
    Ok(instants)
}

fn print_table(
    writer: &mut dyn std::io::Write,
    site: &SiteConfig,
    results: &[(String, SampaOutput)],
) -> std::io::Result<()> {
    for (utc, output) in results {
        let geometry = &output.geometry;
        writeln!(writer, "=== {} @ {} ===", site.name, utc)?;
        writeln!(
            writer,
            "Sun            : zenith = {:.6}°, azimuth = {:.6}°",
            output.sun.zenith_deg, output.sun.azimuth_deg
        )?;
        writeln!(
            writer,
            "Moon           : zenith = {:.6}°, azimuth = {:.6}°",
            output.moon.zenith_deg, output.moon.azimuth_deg
        )?;
        writeln!(
            writer,
            "Separation     : {:.6}° (sun radius {:.6}°, moon radius {:.6}°)",
            geometry.angular_separation_deg, geometry.sun_radius_deg, geometry.moon_radius_deg
        )?;
        writeln!(
            writer,
            "Unshaded lune  : {:.6} deg² ({:.6}%), eclipse = {}, magnitude = {:.4}",
            geometry.unshaded_area,
            geometry.unshaded_area_percent(),
            geometry.kind().as_str(),
            geometry.magnitude()
        )?;
        match &output.irradiance {
            Some(irradiance) => {
                writeln!(
                    writer,
                    "DNI            : {:.2} W/m² (eclipse {:.2})",
                    irradiance.direct_normal, irradiance.direct_normal_eclipse
                )?;
                writeln!(
                    writer,
                    "GHI            : {:.2} W/m² (eclipse {:.2})",
                    irradiance.global_horizontal, irradiance.global_horizontal_eclipse
                )?;
                writeln!(
                    writer,
                    "DHI            : {:.2} W/m² (eclipse {:.2})",
                    irradiance.diffuse_horizontal, irradiance.diffuse_horizontal_eclipse
                )?;
            }
            None => writeln!(writer, "Irradiance     : not requested")?,
        }
    }
    writer.flush()
}
