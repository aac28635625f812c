use crate::config::PreprocessConfig;
use crate::error::PiiError;
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use super::steps;
use super::steps::threshold::ThresholdParams;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Binarized image ready for recognition, with timing stats
#[derive(Debug, Clone)]
pub struct PreprocessedImage {
    pub image: GrayImage,
    pub total_time_ms: u64,
    pub steps: Vec<StepTiming>,
}

/// Runs the fixed grayscale -> denoise -> threshold sequence
#[derive(Debug, Clone)]
pub struct Preprocessor {
    config: PreprocessConfig,
}

impl Preprocessor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Decode the image at `path` and preprocess it.
    ///
    /// A path that is missing or not a decodable image is reported as
    /// [`PiiError::ImageLoadFailure`].
    pub fn load_and_process(&self, path: &Path) -> Result<PreprocessedImage, PiiError> {
        let image = image::open(path).map_err(|e| {
            tracing::error!("Could not load {}: {}", path.display(), e);
            PiiError::ImageLoadFailure {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(
            "Decoded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        self.process(image)
    }

    /// Process an already decoded image
    pub fn process(&self, image: DynamicImage) -> Result<PreprocessedImage, PiiError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();

        let mut img = image;
        img = self.run_step("grayscale", img, &mut steps_timing, steps::grayscale::apply)?;

        let radius = self.config.denoise_radius;
        img = self.run_step("denoise", img, &mut steps_timing, |img| {
            steps::denoise::apply(img, radius)
        })?;

        let params = ThresholdParams {
            block_size: self.config.block_size,
            offset: self.config.threshold_offset,
        };
        img = self.run_step("threshold", img, &mut steps_timing, |img| {
            steps::threshold::apply(img, params)
        })?;

        let total_time_ms = start.elapsed().as_millis() as u64;
        tracing::debug!("Preprocessing finished in {}ms", total_time_ms);

        Ok(PreprocessedImage {
            image: img.into_luma8(),
            total_time_ms,
            steps: steps_timing,
        })
    }

    fn run_step<F>(
        &self,
        name: &str,
        img: DynamicImage,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<DynamicImage, PiiError>
    where
        F: FnOnce(DynamicImage) -> Result<DynamicImage, PiiError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        let time_ms = step_start.elapsed().as_millis() as u64;
        tracing::debug!("Step {} took {}ms", name, time_ms);
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms,
        });
        Ok(result)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(PreprocessConfig::default())
    }
}
