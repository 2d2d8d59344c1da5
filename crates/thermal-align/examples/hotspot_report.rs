//! End-to-end hotspot report on synthetic data: calibrate, crop the field to
//! a fake board outline, then query a few regions and print JSON.
//!
//! Run with `cargo run --example hotspot_report`.

use serde::Serialize;

use thermal_align::core::{BoolMask, CalibrationPoints, RegionSpec};
use thermal_align::{
    crop_field_to_board, query_region, BoardTransform, Hotspot, TemperatureField,
    TemperatureMatrix,
};

#[derive(Serialize)]
struct RegionReport {
    label: String,
    hotspot: Hotspot,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Identity calibration at unit scale keeps the synthetic data readable.
    let calibration = CalibrationPoints::from_pairs(
        [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
        [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
    );
    let transform = BoardTransform::from_points(&calibration, 1.0)?;

    // A 64x48 field that warms toward its center, with a hot component at
    // (40, 20) and edge noise the boundary crop should discard.
    let width = 64usize;
    let height = 48usize;
    let rows: Vec<Vec<f64>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let dx = x as f64 - 32.0;
                    let dy = y as f64 - 24.0;
                    25.0 + 40.0 * (-(dx * dx + dy * dy) / 800.0).exp()
                })
                .collect()
        })
        .collect();
    let mut matrix = TemperatureMatrix::from_rows(&rows)?;
    matrix.set(40, 20, 91.5);
    matrix.set(0, 0, 120.0); // off-board reflection
    let mut field = TemperatureField::new(matrix);

    // The board occupies the central block of the layout capture.
    let mut outline = BoolMask::new(width, height);
    for y in 8..40 {
        for x in 8..56 {
            outline.set(x, y, true);
        }
    }
    let kept = crop_field_to_board(&outline, &transform, &mut field);
    eprintln!("kept board rectangle: {kept:?}");

    let regions = [
        RegionSpec {
            label: Some("U1".to_string()),
            ..RegionSpec::new(40.0, 20.0, 6.0, 4.0, 0.0)
        },
        RegionSpec {
            label: Some("Q3".to_string()),
            ..RegionSpec::new(20.0, 30.0, 5.0, 5.0, 30.0)
        },
    ];

    let reports: Vec<RegionReport> = regions
        .iter()
        .map(|region| RegionReport {
            label: region.label.clone().unwrap_or_default(),
            hotspot: query_region(&field, region, 1.0),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
