// Rendering: turns an interpreted result into something visible. The
// terminal gets the labels; boxes and overlays are written to disk as
// PNG. This is the only place coordinates are clamped to the image
// bounds, and the only place display formatting (title-casing etc.)
// would belong.

use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::info;

use crate::error::ClientError;
use crate::interpret::BoundingBox;

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const BOX_THICKNESS: u32 = 2;

/// Draw a rectangle outline onto `image`. Coordinates outside the
/// image are clamped; a degenerate box still draws its visible edges.
pub fn draw_box(image: &mut RgbImage, bbox: &BoundingBox) {
    let (w, h) = (image.width() as i64, image.height() as i64);
    if w == 0 || h == 0 {
        return;
    }
    let clamp_x = |v: i32| (v as i64).clamp(0, w - 1) as u32;
    let clamp_y = |v: i32| (v as i64).clamp(0, h - 1) as u32;
    let (x1, x2) = (clamp_x(bbox.x1.min(bbox.x2)), clamp_x(bbox.x1.max(bbox.x2)));
    let (y1, y2) = (clamp_y(bbox.y1.min(bbox.y2)), clamp_y(bbox.y1.max(bbox.y2)));

    for t in 0..BOX_THICKNESS {
        for x in x1..=x2 {
            put(image, x, y1.saturating_add(t).min(y2));
            put(image, x, y2.saturating_sub(t).max(y1));
        }
        for y in y1..=y2 {
            put(image, x1.saturating_add(t).min(x2), y);
            put(image, x2.saturating_sub(t).max(x1), y);
        }
    }
}

fn put(image: &mut RgbImage, x: u32, y: u32) {
    image.put_pixel(x, y, BOX_COLOR);
}

/// Write `image` to `path` as PNG.
pub fn save(image: &RgbImage, path: &Path) -> Result<(), ClientError> {
    image
        .save(path)
        .map_err(|e| ClientError::InvalidInput(format!("cannot write {}: {e}", path.display())))?;
    info!(path = %path.display(), "wrote rendered image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([0, 0, 0]))
    }

    #[test]
    fn draws_green_edges() {
        let mut img = blank(40, 40);
        draw_box(&mut img, &BoundingBox { x1: 5, y1: 5, x2: 30, y2: 30 });
        assert_eq!(*img.get_pixel(5, 5), BOX_COLOR);
        assert_eq!(*img.get_pixel(30, 30), BOX_COLOR);
        assert_eq!(*img.get_pixel(17, 5), BOX_COLOR);
        assert_eq!(*img.get_pixel(5, 17), BOX_COLOR);
        // interior untouched
        assert_eq!(*img.get_pixel(17, 17), Rgb([0, 0, 0]));
    }

    #[test]
    fn out_of_range_coordinates_are_clamped() {
        let mut img = blank(20, 20);
        draw_box(&mut img, &BoundingBox { x1: -50, y1: -50, x2: 500, y2: 500 });
        assert_eq!(*img.get_pixel(0, 0), BOX_COLOR);
        assert_eq!(*img.get_pixel(19, 19), BOX_COLOR);
    }

    #[test]
    fn inverted_corners_still_draw() {
        let mut img = blank(20, 20);
        draw_box(&mut img, &BoundingBox { x1: 15, y1: 15, x2: 3, y2: 3 });
        assert_eq!(*img.get_pixel(3, 3), BOX_COLOR);
        assert_eq!(*img.get_pixel(15, 15), BOX_COLOR);
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        save(&blank(4, 4), &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.width(), 4);
        assert_eq!(loaded.height(), 4);
    }
}
