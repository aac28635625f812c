//! Raw OCR output text

use crate::error::PiiError;

/// Marker appended to every text preview
pub const ELLIPSIS: &str = "...";

/// Text produced by the OCR stage for a single document.
///
/// Holds no structure beyond being valid UTF-8; each extraction rule scans it
/// from start to end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocumentText(String);

impl RawDocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Validate raw bytes as text before they reach the extractor
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PiiError> {
        String::from_utf8(bytes)
            .map(Self)
            .map_err(|e| PiiError::InvalidTextInput(e.utf8_error().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First `max_chars` characters of the trimmed text, always followed by
    /// the ellipsis marker
    pub fn preview(&self, max_chars: usize) -> String {
        let mut snippet: String = self.0.trim().chars().take(max_chars).collect();
        snippet.push_str(ELLIPSIS);
        snippet
    }
}

impl From<String> for RawDocumentText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RawDocumentText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
