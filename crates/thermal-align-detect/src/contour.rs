use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::point::Point;

use thermal_align_core::BoolMask;

/// Axis-aligned bounding rectangle of a detected boundary, in the mask's own
/// pixel space. `x2`/`y2` are one past the last covered pixel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoundaryRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

fn mask_to_image(mask: &BoolMask) -> GrayImage {
    let (height, width) = mask.shape();
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([if mask.get(x as usize, y as usize) {
            255
        } else {
            0
        }])
    })
}

/// Shoelace area of a traced contour.
fn contour_area(points: &[Point<u32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        twice_area += p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
    }
    twice_area.abs() / 2.0
}

/// Find the largest external contour of a segmented binary mask and reduce
/// it to its bounding rectangle.
///
/// Returns `None` when the mask has no foreground, leaving the caller's data
/// untouched.
pub fn largest_contour(mask: &BoolMask) -> Option<BoundaryRect> {
    if mask.width() == 0 || mask.height() == 0 {
        return None;
    }
    let contours: Vec<Contour<u32>> = find_contours(&mask_to_image(mask));
    let best = contours
        .iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .max_by(|a, b| contour_area(&a.points).total_cmp(&contour_area(&b.points)))?;

    let x1 = best.points.iter().map(|p| p.x).min()?;
    let y1 = best.points.iter().map(|p| p.y).min()?;
    let x2 = best.points.iter().map(|p| p.x).max()? + 1;
    let y2 = best.points.iter().map(|p| p.y).max()? + 1;
    log::debug!(
        "board boundary: area {:.0}px^2, rect ({x1}, {y1})-({x2}, {y2})",
        contour_area(&best.points)
    );
    Some(BoundaryRect { x1, y1, x2, y2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_mask(width: usize, height: usize, x: usize, y: usize, w: usize, h: usize) -> BoolMask {
        let mut mask = BoolMask::new(width, height);
        for yy in y..y + h {
            for xx in x..x + w {
                mask.set(xx, yy, true);
            }
        }
        mask
    }

    #[test]
    fn empty_mask_has_no_boundary() {
        assert_eq!(largest_contour(&BoolMask::new(20, 20)), None);
    }

    #[test]
    fn single_block_bounds_are_recovered() {
        let mask = block_mask(40, 30, 5, 8, 12, 10);
        let rect = largest_contour(&mask).expect("boundary");
        assert_eq!(
            rect,
            BoundaryRect {
                x1: 5,
                y1: 8,
                x2: 17,
                y2: 18
            }
        );
    }

    #[test]
    fn largest_of_two_blocks_wins() {
        let mut mask = block_mask(60, 60, 2, 2, 4, 4);
        for y in 20..50 {
            for x in 20..55 {
                mask.set(x, y, true);
            }
        }
        let rect = largest_contour(&mask).expect("boundary");
        assert_eq!(
            rect,
            BoundaryRect {
                x1: 20,
                y1: 20,
                x2: 55,
                y2: 50
            }
        );
    }
}
