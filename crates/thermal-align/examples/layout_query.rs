//! Map component positions given in board millimetres into layout pixels,
//! then into thermal-field cells, and read each component's temperature.
//!
//! Run with `cargo run --example layout_query`.

use thermal_align::core::{
    CalibrationPoints, OriginCorner, OriginFrame, PhysicalFrame, PhysicalFrameParams,
};
use thermal_align::{BoardTransform, TemperatureField, TemperatureMatrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Layout renders with a bottom-left millimetre origin by default.
    let frame = PhysicalFrame::new(&PhysicalFrameParams::default());

    // Component centers from the board design, in millimetres.
    let components = [("U1", 25.0, 40.0), ("Q7", 72.5, 12.0), ("R33", 5.0, 75.0)];

    let calibration = CalibrationPoints::from_pairs(
        [(588.0, 135.0), (220.0, 387.0), (1175.0, 782.0)],
        [(563.0, 160.0), (234.0, 396.0), (1105.0, 735.0)],
    );
    let transform = BoardTransform::with_default_scale(&calibration)?;

    // A flat synthetic field; real callers load camera rows here.
    let rows = vec![vec![25.0; 1280]; 960];
    let field = TemperatureField::new(TemperatureMatrix::from_rows(&rows)?);

    for (label, x_mm, y_mm) in components {
        // The frame already folds the bottom-left origin into screen pixels.
        let (sx, sy) = frame.mm_to_px(x_mm, y_mm);
        let reading = field.max_in_box(sx - 8.0, sy - 8.0, sx + 8.0, sy + 8.0, 1.0);
        let (tx, ty) = transform.b_to_a(sx, sy);
        println!(
            "{label}: {x_mm:.1}mm,{y_mm:.1}mm -> layout px ({sx:.1}, {sy:.1}) \
             -> thermal ({tx:.1}, {ty:.1}), {reading:.1} C"
        );
    }

    // Annotations saved against a bottom-right origin re-anchor the same way.
    let origin = OriginFrame::new(1280.0, 960.0);
    let (ax, ay) = origin.convert(200.0, 150.0, OriginCorner::BottomRight, OriginCorner::TopLeft);
    println!("annotation (200, 150) from bottom-right -> ({ax:.0}, {ay:.0}) top-left");
    Ok(())
}
