//! Command-line front end for thermal/layout alignment and hotspot queries.
//!
//! All reports go to stdout as JSON; diagnostics go to stderr.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
#[cfg(feature = "image")]
use clap::ValueEnum;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use thermal_align::core::{init_with_level, match_points, CalibrationPoints, RegionSpec};
use thermal_align::{BoardTransform, TemperatureField, TemperatureMatrix};

#[derive(Parser)]
#[command(name = "thermal-align", version, about = "Align thermal and layout board captures and query temperature hotspots")]
struct Cli {
    /// Print debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the A<->B transform from three calibration point pairs.
    Calibrate {
        /// JSON file with `image_a` and `image_b`, three `[x, y]` points each.
        #[arg(long)]
        points: PathBuf,
        /// Physical scale between the two coordinate spaces.
        #[arg(long, default_value_t = thermal_align::core::DEFAULT_PHYSICAL_SCALE)]
        scale: f64,
        /// Re-pair the point lists by distance before solving.
        #[arg(long)]
        auto_match: bool,
        /// Optional `x,y` thermal-space point to map into layout space.
        #[arg(long)]
        probe: Option<String>,
    },
    /// Query the hottest reading of a region against a temperature field.
    Query {
        /// JSON file holding the field as an array of row arrays.
        #[arg(long)]
        field: PathBuf,
        /// JSON file holding the region of interest.
        #[arg(long)]
        region: PathBuf,
        /// Ratio between region coordinates and field cells.
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
    },
    /// Detect circular markers in a capture image.
    #[cfg(feature = "image")]
    DetectCircles {
        /// Path to the capture image.
        #[arg(long)]
        image: PathBuf,
        /// Marker size class.
        #[arg(long, value_enum, default_value = "small")]
        class: MarkerArg,
    },
}

#[cfg(feature = "image")]
#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkerArg {
    Small,
    Large,
}

#[cfg(feature = "image")]
impl From<MarkerArg> for thermal_align::MarkerClass {
    fn from(value: MarkerArg) -> Self {
        match value {
            MarkerArg::Small => thermal_align::MarkerClass::Small,
            MarkerArg::Large => thermal_align::MarkerClass::Large,
        }
    }
}

#[derive(Deserialize)]
struct PointsFile {
    image_a: Vec<[f64; 2]>,
    image_b: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct CalibrateReport {
    b_to_a: [[f64; 3]; 3],
    physical_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    probe: Option<ProbeReport>,
}

#[derive(Serialize)]
struct ProbeReport {
    thermal: [f64; 2],
    layout: [f64; 2],
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = init_with_level(level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Calibrate {
            points,
            scale,
            auto_match,
            probe,
        } => calibrate(&points, scale, auto_match, probe.as_deref()),
        Command::Query {
            field,
            region,
            scale,
        } => query(&field, &region, scale),
        #[cfg(feature = "image")]
        Command::DetectCircles { image, class } => detect_circles(&image, class.into()),
    }
}

fn calibrate(
    points_path: &PathBuf,
    scale: f64,
    auto_match: bool,
    probe: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw: PointsFile = serde_json::from_str(&fs::read_to_string(points_path)?)?;
    let to_points = |v: &[[f64; 2]]| -> Vec<Point2<f64>> {
        v.iter().map(|p| Point2::new(p[0], p[1])).collect()
    };
    let a = to_points(&raw.image_a);
    let b = to_points(&raw.image_b);

    let calibration = if auto_match {
        match_points(&a, &b)?
    } else {
        CalibrationPoints::from_slices(&a, &b)?
    };
    let transform = BoardTransform::from_points(&calibration, scale)?;

    let probe = probe
        .map(|spec| -> Result<ProbeReport, Box<dyn std::error::Error>> {
            let (x, y) = parse_probe(spec)?;
            let (bx, by) = transform.a_to_b(x, y);
            Ok(ProbeReport {
                thermal: [x, y],
                layout: [bx, by],
            })
        })
        .transpose()?;

    let report = CalibrateReport {
        b_to_a: transform.to_array(),
        physical_scale: transform.physical_scale(),
        probe,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_probe(spec: &str) -> Result<(f64, f64), String> {
    let (x, y) = spec
        .split_once(',')
        .ok_or_else(|| format!("probe must be `x,y`, got `{spec}`"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad probe coordinate `{s}`: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn query(
    field_path: &PathBuf,
    region_path: &PathBuf,
    scale: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(&fs::read_to_string(field_path)?)?;
    let field = TemperatureField::new(TemperatureMatrix::from_rows(&rows)?);
    let region: RegionSpec = serde_json::from_str(&fs::read_to_string(region_path)?)?;

    let spot = thermal_align::query_region(&field, &region, scale);
    println!("{}", serde_json::to_string_pretty(&spot)?);
    Ok(())
}

#[cfg(feature = "image")]
fn detect_circles(
    image_path: &PathBuf,
    class: thermal_align::MarkerClass,
) -> Result<(), Box<dyn std::error::Error>> {
    let circles = thermal_align::capture::detect_circles_in_file(image_path, class)?;
    println!("{}", serde_json::to_string_pretty(&circles)?);
    Ok(())
}
