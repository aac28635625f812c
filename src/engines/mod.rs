//! Text source implementations
//!
//! No recognition model ships with this crate. [`NullEngine`] stands in for
//! one and yields empty text; [`FixedTextEngine`] replays known text for
//! demos and tests.

pub mod fixed;
pub mod null;

pub use fixed::FixedTextEngine;
pub use null::NullEngine;

use crate::engine::OcrEngine;
use std::sync::Arc;

/// Engine used when the caller does not provide one
pub fn default_engine() -> Arc<dyn OcrEngine> {
    Arc::new(NullEngine)
}
