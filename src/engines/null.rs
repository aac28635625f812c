use crate::document::RawDocumentText;
use crate::engine::{ensure_page, OcrEngine};
use crate::error::PiiError;
use image::GrayImage;

/// Recognizes nothing. Every page yields empty text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEngine;

impl OcrEngine for NullEngine {
    fn name(&self) -> &'static str {
        "none"
    }

    fn description(&self) -> &'static str {
        "No OCR backend; returns empty text"
    }

    fn recognize(&self, image: &GrayImage) -> Result<RawDocumentText, PiiError> {
        ensure_page(image)?;
        tracing::debug!(
            "No OCR backend configured, skipping {}x{} page",
            image.width(),
            image.height()
        );
        Ok(RawDocumentText::default())
    }
}
