//! Loading captured frames from disk and running marker detection on them.

use std::path::Path;

use image::GrayImage;

use thermal_align_detect::{detect_marker_circles, Circle, MarkerClass};

use crate::PipelineError;

/// Load an image file and convert it to 8-bit grayscale.
pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayImage, PipelineError> {
    let image = image::open(path.as_ref())?;
    Ok(image.into_luma8())
}

/// Detect circular markers of one class in an image file.
pub fn detect_circles_in_file(
    path: impl AsRef<Path>,
    class: MarkerClass,
) -> Result<Vec<Circle>, PipelineError> {
    let gray = load_gray(path.as_ref())?;
    let circles = detect_marker_circles(&gray, class);
    log::info!(
        "found {} {:?} marker circle(s) in {}",
        circles.len(),
        class,
        path.as_ref().display()
    );
    Ok(circles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::drawing::draw_filled_circle_mut;

    #[test]
    fn circles_survive_an_encode_and_reload() {
        let mut img = GrayImage::new(160, 120);
        draw_filled_circle_mut(&mut img, (80, 60), 20, Luma([255u8]));

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("markers.png");
        img.save(&path).expect("save");

        let circles = detect_circles_in_file(&path, MarkerClass::Small).expect("detect");
        assert!(!circles.is_empty());
        let best = circles[0];
        assert!((best.x - 80).abs() <= 3 && (best.y - 60).abs() <= 3);
    }

    #[test]
    fn owned_paths_are_accepted_and_left_usable() {
        let mut img = GrayImage::new(64, 48);
        draw_filled_circle_mut(&mut img, (32, 24), 10, Luma([255u8]));

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("owned.png");
        img.save(&path).expect("save");

        // Both owned and borrowed call forms run the same detection.
        let from_owned =
            detect_circles_in_file(path.clone(), MarkerClass::Small).expect("owned path");
        let from_borrowed = detect_circles_in_file(&path, MarkerClass::Small).expect("borrowed");
        assert_eq!(from_owned, from_borrowed);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_gray("definitely/not/a/real/file.png");
        assert!(err.is_err());
    }
}
