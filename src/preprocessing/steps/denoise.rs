use crate::error::PiiError;
use image::DynamicImage;
use imageproc::filter::median_filter;

/// Median filter over a (2r+1)x(2r+1) window.
/// Removes speckle from scanner noise while keeping stroke edges.
pub fn apply(image: DynamicImage, radius: u32) -> Result<DynamicImage, PiiError> {
    let gray = image.to_luma8();
    if radius == 0 {
        return Ok(DynamicImage::ImageLuma8(gray));
    }
    let denoised = median_filter(&gray, radius, radius);
    Ok(DynamicImage::ImageLuma8(denoised))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_denoise_removes_isolated_specks() {
        let mut img = GrayImage::from_pixel(10, 10, Luma([230]));
        img.put_pixel(5, 5, Luma([0])); // dust
        img.put_pixel(2, 7, Luma([255])); // glare

        let result = apply(DynamicImage::ImageLuma8(img), 1).unwrap();
        let result_gray = result.to_luma8();

        assert_eq!(result_gray.get_pixel(5, 5).0[0], 230);
        assert_eq!(result_gray.get_pixel(2, 7).0[0], 230);
    }

    #[test]
    fn test_denoise_reduces_variance() {
        let img = GrayImage::from_fn(20, 20, |x, y| {
            if (x * 7 + y * 3) % 11 == 0 {
                Luma([0])
            } else {
                Luma([200])
            }
        });

        let result = apply(DynamicImage::ImageLuma8(img.clone()), 1).unwrap();
        assert!(variance(&result.to_luma8()) <= variance(&img));
    }

    #[test]
    fn test_zero_radius_is_passthrough() {
        let mut img = GrayImage::from_pixel(5, 5, Luma([100]));
        img.put_pixel(2, 2, Luma([0]));

        let result = apply(DynamicImage::ImageLuma8(img.clone()), 0).unwrap();
        assert_eq!(result.to_luma8(), img);
    }

    fn variance(img: &GrayImage) -> f64 {
        let pixels: Vec<f64> = img.pixels().map(|p| p.0[0] as f64).collect();
        let mean = pixels.iter().sum::<f64>() / pixels.len() as f64;
        pixels.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / pixels.len() as f64
    }
}
