use crate::error::PiiError;
use image::DynamicImage;

/// Convert a decoded scan to single-channel luma
pub fn apply(image: DynamicImage) -> Result<DynamicImage, PiiError> {
    Ok(DynamicImage::ImageLuma8(image.to_luma8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_grayscale_converts_color_scan() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        img.put_pixel(0, 0, Rgb([0, 0, 0])); // ink
        img.put_pixel(1, 0, Rgb([0, 0, 200])); // blue pen

        let result = apply(DynamicImage::ImageRgb8(img)).unwrap();
        assert!(matches!(result, DynamicImage::ImageLuma8(_)));

        let gray = result.to_luma8();
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert!(gray.get_pixel(1, 0).0[0] < gray.get_pixel(5, 5).0[0]);
        assert_eq!(gray.get_pixel(5, 5).0[0], 255);
    }

    #[test]
    fn test_grayscale_drops_alpha_and_keeps_dimensions() {
        let img = RgbaImage::from_pixel(64, 32, Rgba([120, 120, 120, 10]));
        let result = apply(DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(result.width(), 64);
        assert_eq!(result.height(), 32);
        assert!(matches!(result, DynamicImage::ImageLuma8(_)));
    }
}
