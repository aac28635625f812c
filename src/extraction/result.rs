use super::patterns::{Field, RuleMatch};
use serde::{Serialize, Serializer};

/// Value stored for a detected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Pairs(Vec<(String, String)>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_pairs(&self) -> Option<&[(String, String)]> {
        match self {
            Self::Pairs(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Collect a rule's cleaned matches. Returns `None` for no matches.
    pub(crate) fn from_matches(matches: Vec<RuleMatch>) -> Option<Self> {
        let first = matches.first()?;
        let value = match first {
            RuleMatch::Text(_) => Self::List(
                matches
                    .into_iter()
                    .filter_map(|m| match m {
                        RuleMatch::Text(text) => Some(text),
                        RuleMatch::Pair(..) => None,
                    })
                    .collect(),
            ),
            RuleMatch::Pair(..) => Self::Pairs(
                matches
                    .into_iter()
                    .filter_map(|m| match m {
                        RuleMatch::Pair(a, b) => Some((a, b)),
                        RuleMatch::Text(_) => None,
                    })
                    .collect(),
            ),
        };
        Some(value)
    }
}

impl From<RuleMatch> for FieldValue {
    fn from(m: RuleMatch) -> Self {
        match m {
            RuleMatch::Text(text) => Self::Text(text),
            RuleMatch::Pair(a, b) => Self::Pairs(vec![(a, b)]),
        }
    }
}

/// Detected fields in rule-table order.
///
/// A field that was not found has no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    fields: Vec<(Field, FieldValue)>,
}

impl ExtractionResult {
    pub fn insert(&mut self, field: Field, value: FieldValue) {
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().map(|(field, value)| (field, value)))
    }
}
