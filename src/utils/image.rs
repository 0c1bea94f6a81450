//! Image loading helpers.

use crate::core::{ScanViewError, ScanViewResult};
use image::RgbImage;
use std::path::Path;

/// Loads an image from disk as RGB.
pub fn load_image(path: &Path) -> ScanViewResult<RgbImage> {
    let img = image::open(path).map_err(ScanViewError::ImageLoad)?;
    Ok(img.to_rgb8())
}

/// Returns the `(width, height)` of an image on disk without decoding the
/// pixel data.
pub fn image_dimensions(path: &Path) -> ScanViewResult<(u32, u32)> {
    image::image_dimensions(path).map_err(ScanViewError::ImageLoad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_load_image_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.tiff");
        RgbImage::from_pixel(12, 8, Rgb([1, 2, 3])).save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (12, 8));
        assert_eq!(loaded.get_pixel(0, 0), &Rgb([1, 2, 3]));
    }

    #[test]
    fn test_image_dimensions_without_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.tiff");
        RgbImage::new(33, 21).save(&path).unwrap();

        assert_eq!(image_dimensions(&path).unwrap(), (33, 21));
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image(Path::new("/no/such/image.tiff")).unwrap_err();
        assert!(matches!(err, ScanViewError::ImageLoad(_)));
    }
}
