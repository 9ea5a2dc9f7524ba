// Turns a finished field into an image. The field itself owns no file
// format; everything on disk goes through the image crate.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::Result;
use crate::field::Field;

/// Grayscale rendering of a field: bounded cells bright, escaped cells
/// black. Field row 0 holds the lowest imaginary sample, so rows are
/// flipped to draw the imaginary axis increasing upward.
pub fn to_image(field: &Field) -> GrayImage {
    let width = field.width() as u32;
    let height = field.height() as u32;
    GrayImage::from_fn(width, height, |x, y| {
        let row = field.height() - 1 - y as usize;
        let v = field.get(row, x as usize);
        Luma([(v * 255.0) as u8])
    })
}

pub fn save_png<P: AsRef<Path>>(field: &Field, path: P) -> Result<()> {
    to_image(field).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn image_matches_field_dimensions() {
        let field = generate(7, 5, -2.0, 2.0, -2.0, 2.0, 16, 2.5).unwrap();
        let img = to_image(&field);
        assert_eq!(img.dimensions(), (7, 5));
    }

    #[test]
    fn rows_are_flipped_so_imag_high_is_on_top() {
        // One column spanning imag 0..2: c = 2i escapes, c = 0 does not,
        // so the bright bounded cell must land on the bottom image row.
        let field = generate(1, 2, 0.0, 0.0, 0.0, 2.0, 32, 2.5).unwrap();
        let img = to_image(&field);
        assert_eq!(img.get_pixel(0, 1).0, [255]);
        assert_eq!(img.get_pixel(0, 0).0, [0]);
    }
}
