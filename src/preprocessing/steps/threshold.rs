use crate::error::PiiError;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::filter::separable_filter_equal;

/// Gaussian-weighted adaptive threshold parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdParams {
    /// Odd side length of the local neighbourhood
    pub block_size: u32,
    /// Subtracted from the local mean; positive values favour white
    pub offset: i32,
}

/// Binarize with a locally computed threshold
pub fn apply(image: DynamicImage, params: ThresholdParams) -> Result<DynamicImage, PiiError> {
    if params.block_size < 3 || params.block_size % 2 == 0 {
        return Err(PiiError::PreprocessingError(format!(
            "threshold block size must be odd and >= 3, got {}",
            params.block_size
        )));
    }

    let gray = image.to_luma8();
    let binarized = gaussian_adaptive_threshold(&gray, params);
    Ok(DynamicImage::ImageLuma8(binarized))
}

/// A pixel turns white when it is brighter than its Gaussian-weighted
/// neighbourhood mean minus `offset`, black otherwise.
fn gaussian_adaptive_threshold(img: &GrayImage, params: ThresholdParams) -> GrayImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }

    let kernel = gaussian_kernel(params.block_size);
    // Edges are clamped, so border pixels see a replicated neighbourhood
    let local_mean: GrayImage = separable_filter_equal(img, &kernel);

    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let pixel = img.get_pixel(x, y).0[0] as i32;
        let mean = local_mean.get_pixel(x, y).0[0] as i32;
        if pixel - mean > -params.offset {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// Normalized 1-D Gaussian taps for a window of `size` pixels.
///
/// sigma = 0.3 * ((size - 1) / 2 - 1) + 0.8, the usual choice when only the
/// window is given (sigma 2.0 for an 11-pixel window).
fn gaussian_kernel(size: u32) -> Vec<f32> {
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size as f32 - 1.0) / 2.0;
    let denom = 2.0 * sigma * sigma;

    let taps: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / denom).exp()
        })
        .collect();

    let sum: f32 = taps.iter().sum();
    taps.into_iter().map(|t| t / sum).collect()
}
