//! Patient identifier extraction for scanned medical documents.
//!
//! A document runs through three stages: the scan is binarized
//! ([`preprocessing`]), a text source turns it into raw text ([`engine`]),
//! and a fixed table of case-insensitive patterns pulls out hospital IDs,
//! dates, age/sex and the patient name ([`extraction`]).
//!
//! ```
//! use medical_pii_ocr::{Config, Field, MedicalOcrPipeline};
//!
//! let pipeline = MedicalOcrPipeline::new(&Config::default()).unwrap();
//! let result = pipeline
//!     .run("page_35.jpg", Some("IPD No: 2236927833\nDATE: 16/04/25"))
//!     .unwrap();
//! assert!(result.pii_detected.contains(Field::Ipd));
//! assert!(!result.pii_detected.contains(Field::Uhid));
//! ```

pub mod config;
pub mod document;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extraction;
pub mod pipeline;
pub mod preprocessing;

pub use config::{Config, PreprocessConfig};
pub use document::RawDocumentText;
pub use engine::OcrEngine;
pub use error::{ErrorResponse, PiiError};
pub use extraction::{extract, ExtractionResult, Field, FieldValue, PiiExtractor};
pub use pipeline::{MedicalOcrPipeline, PipelineResult};
