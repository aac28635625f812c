use crate::config::Config;
use crate::document::RawDocumentText;
use crate::engine::OcrEngine;
use crate::engines;
use crate::error::PiiError;
use crate::extraction::{self, ExtractionResult};
use crate::preprocessing::Preprocessor;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Outcome of one document run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub file: String,
    pub pii_detected: ExtractionResult,
    pub raw_text_snippet: String,
}

impl PipelineResult {
    /// Render with four-space indentation; non-ASCII characters are
    /// written as `\uXXXX` escapes
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = AsciiPrettyFormatter(PrettyFormatter::with_indent(b"    "));
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Pretty layout with every string escaped down to ASCII
struct AsciiPrettyFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                // Astral characters become a surrogate pair
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}

/// Preprocess -> recognize -> extract, one document at a time.
///
/// Holds no per-run state, so a single pipeline can be shared across threads
/// processing different documents.
pub struct MedicalOcrPipeline {
    preprocessor: Preprocessor,
    engine: Arc<dyn OcrEngine>,
    snippet_chars: usize,
}

impl MedicalOcrPipeline {
    /// Pipeline with the default (empty-text) engine
    pub fn new(config: &Config) -> Result<Self, PiiError> {
        Self::with_engine(config, engines::default_engine())
    }

    pub fn with_engine(config: &Config, engine: Arc<dyn OcrEngine>) -> Result<Self, PiiError> {
        config.validate()?;
        tracing::debug!(
            "Pipeline using text source {} ({})",
            engine.name(),
            engine.description()
        );

        Ok(Self {
            preprocessor: Preprocessor::new(config.preprocess.clone()),
            engine,
            snippet_chars: config.snippet_chars,
        })
    }

    /// Process one document.
    ///
    /// When `text_override` is given, the image is never opened and the text
    /// goes straight to extraction. Otherwise the image must decode.
    pub fn run(
        &self,
        path: impl AsRef<Path>,
        text_override: Option<&str>,
    ) -> Result<PipelineResult, PiiError> {
        let path = path.as_ref();
        let start = Instant::now();

        let raw_text = match text_override {
            Some(text) => {
                tracing::info!("Using supplied text for {}", path.display());
                RawDocumentText::from(text)
            }
            None => self.recognize(path)?,
        };

        if raw_text.is_empty() {
            tracing::warn!("No text available for {}", path.display());
        }

        let pii_detected = extraction::extract(raw_text.as_str());
        let result = self.assemble(path, pii_detected, &raw_text);

        tracing::info!(
            "Processed {} in {}ms: {} field(s) detected",
            result.file,
            start.elapsed().as_millis(),
            result.pii_detected.len()
        );

        Ok(result)
    }

    fn recognize(&self, path: &Path) -> Result<RawDocumentText, PiiError> {
        let processed = self.preprocessor.load_and_process(path)?;
        tracing::debug!(
            "Preprocessed {} in {}ms",
            path.display(),
            processed.total_time_ms
        );
        self.engine.recognize(&processed.image)
    }

    fn assemble(
        &self,
        path: &Path,
        pii_detected: ExtractionResult,
        raw_text: &RawDocumentText,
    ) -> PipelineResult {
        PipelineResult {
            file: path.to_string_lossy().into_owned(),
            pii_detected,
            raw_text_snippet: raw_text.preview(self.snippet_chars),
        }
    }
}
