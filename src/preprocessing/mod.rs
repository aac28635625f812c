//! Image preprocessing ahead of OCR
//!
//! Turns a decoded scan into a clean two-tone image: grayscale, median
//! denoise, then Gaussian adaptive threshold.

pub mod preprocessor;
pub mod steps;

pub use preprocessor::{PreprocessedImage, Preprocessor, StepTiming};
