//! Pattern-based PII extraction from OCR text
//!
//! Each rule in the table scans the whole text on its own. Matches are
//! cleaned, deduplicated in order of first appearance, and stored under the
//! rule's field. Rules that find nothing leave no entry.

pub mod patterns;
pub mod result;

pub use patterns::{Arity, Field, PatternRule, RuleMatch, PII_RULES};
pub use result::{ExtractionResult, FieldValue};

use crate::error::PiiError;
use std::collections::HashSet;

/// Extract PII using the built-in rule table
pub fn extract(text: &str) -> ExtractionResult {
    PiiExtractor::default().extract(text)
}

/// Applies a rule table to document text
#[derive(Debug, Clone, Copy)]
pub struct PiiExtractor<'r> {
    rules: &'r [PatternRule],
}

impl Default for PiiExtractor<'static> {
    fn default() -> Self {
        Self {
            rules: PII_RULES.as_slice(),
        }
    }
}

impl<'r> PiiExtractor<'r> {
    pub fn new(rules: &'r [PatternRule]) -> Self {
        Self { rules }
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::default();

        for rule in self.rules {
            let matches = rule.find_all(text);
            tracing::debug!("{}: {} match(es)", rule.field, matches.len());

            let distinct = dedup_in_order(matches.into_iter().map(RuleMatch::cleaned));
            let value = match rule.arity {
                Arity::List => FieldValue::from_matches(distinct),
                Arity::Single => distinct.into_iter().next().map(FieldValue::from),
            };

            if let Some(value) = value {
                result.insert(rule.field, value);
            }
        }

        result
    }

    /// Validate raw bytes as UTF-8 text before running any rule
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractionResult, PiiError> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| PiiError::InvalidTextInput(e.to_string()))?;
        Ok(self.extract(text))
    }
}

fn dedup_in_order(matches: impl Iterator<Item = RuleMatch>) -> Vec<RuleMatch> {
    let mut seen = HashSet::new();
    matches.filter(|m| seen.insert(m.clone())).collect()
}
