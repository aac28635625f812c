use crate::error::PiiError;

/// Window size of the Gaussian neighbourhood used for adaptive thresholding
pub const DEFAULT_BLOCK_SIZE: u32 = 11;
/// Constant subtracted from the local mean before comparing
pub const DEFAULT_THRESHOLD_OFFSET: i32 = 2;
/// 3x3 median window
pub const DEFAULT_DENOISE_RADIUS: u32 = 1;
/// Characters of OCR text kept in the result preview
pub const DEFAULT_SNIPPET_CHARS: usize = 100;

/// Image preprocessing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub denoise_radius: u32,
    pub block_size: u32,
    pub threshold_offset: i32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            denoise_radius: DEFAULT_DENOISE_RADIUS,
            block_size: DEFAULT_BLOCK_SIZE,
            threshold_offset: DEFAULT_THRESHOLD_OFFSET,
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub preprocess: PreprocessConfig,
    pub snippet_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preprocess: PreprocessConfig::default(),
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), PiiError> {
        let block_size = self.preprocess.block_size;
        if block_size < 3 || block_size % 2 == 0 {
            return Err(PiiError::InvalidConfig(format!(
                "block size must be an odd number >= 3, got {}",
                block_size
            )));
        }

        if self.snippet_chars == 0 {
            return Err(PiiError::InvalidConfig(
                "snippet length must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
