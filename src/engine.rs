use crate::document::RawDocumentText;
use crate::error::PiiError;
use image::GrayImage;

/// Trait that all text sources must implement.
///
/// A text source turns a preprocessed page into raw text. It reports no
/// confidence; whatever text it returns is handed to extraction as-is.
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "none", "fixed")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize text in a preprocessed, binarized page
    fn recognize(&self, image: &GrayImage) -> Result<RawDocumentText, PiiError>;
}

/// Reject pages with no pixels before an engine looks at them
pub fn ensure_page(image: &GrayImage) -> Result<(), PiiError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PiiError::RecognitionError(format!(
            "page has no pixels ({}x{})",
            image.width(),
            image.height()
        )));
    }
    Ok(())
}
