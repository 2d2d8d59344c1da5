//! Gradient Hough circle detection.
//!
//! Single-resolution variant of the classic gradient method: blur, Sobel
//! gradients, center votes cast along both gradient directions over the
//! radius range, local-maximum peaks separated by a minimum distance, then a
//! modal radius estimate per accepted center.

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};
use serde::{Deserialize, Serialize};

use crate::circles::{Circle, MarkerClass};

/// Tuning for the gradient Hough circle detector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughCircleParams {
    /// Gaussian pre-blur kernel size (odd).
    pub blur_kernel: u32,
    pub min_radius: u32,
    pub max_radius: u32,
    /// Minimum separation between accepted centers.
    pub min_center_dist: u32,
    /// Gradient magnitudes below this do not count as edges.
    pub gradient_threshold: f32,
    /// Votes a center needs before it counts as a circle.
    pub accumulator_threshold: u32,
}

impl Default for HoughCircleParams {
    /// The small-marker preset.
    fn default() -> Self {
        Self {
            blur_kernel: 15,
            min_radius: 4,
            max_radius: 30,
            min_center_dist: 10,
            gradient_threshold: 50.0,
            accumulator_threshold: 30,
        }
    }
}

/// Kernel-to-sigma rule for Gaussian blur when only a kernel size is given.
fn blur_sigma(kernel: u32) -> f32 {
    0.3 * ((kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Detect circles in a grayscale capture.
///
/// Centers and radii come back rounded to integers, ordered by vote count.
pub fn detect_circles(image: &GrayImage, params: &HoughCircleParams) -> Vec<Circle> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || params.min_radius > params.max_radius {
        return Vec::new();
    }

    let blurred = gaussian_blur_f32(image, blur_sigma(params.blur_kernel));
    let gx = horizontal_sobel(&blurred);
    let gy = vertical_sobel(&blurred);

    // Vote for candidate centers along both gradient directions.
    let mut acc = vec![0u32; (width * height) as usize];
    let mut edges: Vec<(u32, u32)> = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let dx = gx.get_pixel(x, y)[0] as f32;
            let dy = gy.get_pixel(x, y)[0] as f32;
            let mag = (dx * dx + dy * dy).sqrt();
            if mag < params.gradient_threshold {
                continue;
            }
            edges.push((x, y));
            let ux = dx / mag;
            let uy = dy / mag;
            for r in params.min_radius..=params.max_radius {
                for dir in [-1.0f32, 1.0] {
                    let cx = (x as f32 + dir * ux * r as f32).round() as i64;
                    let cy = (y as f32 + dir * uy * r as f32).round() as i64;
                    if cx < 0 || cy < 0 || cx >= width as i64 || cy >= height as i64 {
                        continue;
                    }
                    acc[(cy as u32 * width + cx as u32) as usize] += 1;
                }
            }
        }
    }

    // Local-maximum peaks above the vote threshold.
    let vote = |x: i64, y: i64| -> u32 {
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
            0
        } else {
            acc[(y as u32 * width + x as u32) as usize]
        }
    };
    let mut peaks: Vec<(u32, u32, u32)> = Vec::new();
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let v = vote(x, y);
            if v < params.accumulator_threshold {
                continue;
            }
            let is_peak = (-1..=1).all(|dy| (-1..=1).all(|dx| vote(x + dx, y + dy) <= v));
            if is_peak {
                peaks.push((v, x as u32, y as u32));
            }
        }
    }
    peaks.sort_by(|a, b| b.0.cmp(&a.0));

    // Greedy min-distance suppression, strongest peaks first.
    let min_d2 = (params.min_center_dist as i64).pow(2);
    let mut centers: Vec<(u32, u32)> = Vec::new();
    for &(_, x, y) in &peaks {
        let far_enough = centers.iter().all(|&(cx, cy)| {
            let dx = x as i64 - cx as i64;
            let dy = y as i64 - cy as i64;
            dx * dx + dy * dy >= min_d2
        });
        if far_enough {
            centers.push((x, y));
        }
    }

    // Modal radius over edge-pixel distances per accepted center.
    let mut circles = Vec::with_capacity(centers.len());
    for (cx, cy) in centers {
        let mut histogram = vec![0u32; params.max_radius as usize + 1];
        for &(ex, ey) in &edges {
            let dx = ex as f64 - cx as f64;
            let dy = ey as f64 - cy as f64;
            let r = (dx * dx + dy * dy).sqrt().round() as u32;
            if r >= params.min_radius && r <= params.max_radius {
                histogram[r as usize] += 1;
            }
        }
        let (radius, support) = histogram
            .iter()
            .enumerate()
            .max_by_key(|&(_, count)| *count)
            .map(|(r, count)| (r as u32, *count))
            .unwrap_or((0, 0));
        if support == 0 {
            continue;
        }
        circles.push(Circle {
            x: cx as i32,
            y: cy as i32,
            r: radius as i32,
        });
    }

    log::debug!(
        "hough: {} edge pixels, {} peaks, {} circles",
        edges.len(),
        peaks.len(),
        circles.len()
    );
    circles
}

/// Detect circles using one of the two marker-size presets.
pub fn detect_marker_circles(image: &GrayImage, class: MarkerClass) -> Vec<Circle> {
    detect_circles(image, &class.params())
}
