//! The fixed table of PII matching rules

use fancy_regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Field identifiers reported in `pii_detected`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Uhid,
    Ipd,
    Date,
    AgeSex,
    PatientName,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uhid => "UHID",
            Self::Ipd => "IPD",
            Self::Date => "Date",
            Self::AgeSex => "Age_Sex",
            Self::PatientName => "Patient_Name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// How many values a field keeps once its matches are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Every distinct match, in order of appearance
    List,
    /// Only the first distinct match
    Single,
}

/// One value found by a rule.
///
/// The shape follows the rule's capture groups: no group yields the whole
/// match, one group yields that group, two groups yield a pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleMatch {
    Text(String),
    Pair(String, String),
}

impl RuleMatch {
    /// Trim single values; pairs are kept exactly as captured
    pub fn cleaned(self) -> Self {
        match self {
            Self::Text(text) => Self::Text(text.trim().to_string()),
            pair @ Self::Pair(..) => pair,
        }
    }
}

/// A named field paired with a case-insensitive matching expression
#[derive(Debug)]
pub struct PatternRule {
    pub field: Field,
    pub arity: Arity,
    regex: Regex,
}

impl PatternRule {
    pub fn new(field: Field, pattern: &str, arity: Arity) -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            field,
            arity,
            regex: Regex::new(&format!("(?i){}", pattern))?,
        })
    }

    /// All non-overlapping matches in `text`, left to right
    pub fn find_all(&self, text: &str) -> Vec<RuleMatch> {
        let mut found = Vec::new();
        for caps in self.regex.captures_iter(text) {
            match caps {
                Ok(caps) => found.push(self.shape(&caps)),
                Err(e) => {
                    tracing::warn!("{} scan stopped early: {}", self.field, e);
                    break;
                }
            }
        }
        found
    }

    fn shape(&self, caps: &fancy_regex::Captures<'_>) -> RuleMatch {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        match self.regex.captures_len() - 1 {
            0 => RuleMatch::Text(group(0)),
            1 => RuleMatch::Text(group(1)),
            _ => RuleMatch::Pair(group(1), group(2)),
        }
    }
}

/// Process-wide rule table, in reporting order
pub static PII_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule::new(
            Field::Uhid,
            r"UHID\s*(?:No|:)?\s*[:\-\.]?\s*(\d{10,14})",
            Arity::List,
        )
        .expect("UHID pattern compiles"),
        PatternRule::new(
            Field::Ipd,
            r"IPD\s*(?:No|:)?\s*[:\-\.]?\s*(\d+)",
            Arity::List,
        )
        .expect("IPD pattern compiles"),
        PatternRule::new(Field::Date, r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}", Arity::List)
            .expect("Date pattern compiles"),
        PatternRule::new(
            Field::AgeSex,
            r"Age\s*[:\-\.]?\s*(\d+\s*[Yy]?)\s*(?:[/,]|\s+)\s*Sex\s*[:\-\.]?\s*([MF])",
            Arity::List,
        )
        .expect("Age/Sex pattern compiles"),
        PatternRule::new(
            Field::PatientName,
            r"Patient\s*Name\s*[:\-\.]?\s*([A-Za-z\s]+)(?=\s+Age|\s+Sex|\n)",
            Arity::Single,
        )
        .expect("Patient name pattern compiles"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: Field) -> &'static PatternRule {
        PII_RULES
            .iter()
            .find(|r| r.field == field)
            .expect("rule present")
    }

    #[test]
    fn test_table_order() {
        let fields: Vec<&str> = PII_RULES.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, vec!["UHID", "IPD", "Date", "Age_Sex", "Patient_Name"]);
    }

    #[test]
    fn test_uhid_separators() {
        let uhid = rule(Field::Uhid);
        for text in [
            "UHID: 1234567890",
            "UHID No: 1234567890",
            "uhid no.1234567890",
            "UHID-1234567890",
            "UHID No - 1234567890",
            "UHID1234567890",
        ] {
            assert_eq!(
                uhid.find_all(text),
                vec![RuleMatch::Text("1234567890".to_string())],
                "failed on {:?}",
                text
            );
        }
    }

    #[test]
    fn test_uhid_requires_ten_digits() {
        assert!(rule(Field::Uhid).find_all("UHID No: 123456789").is_empty());
    }

    #[test]
    fn test_uhid_caps_at_fourteen_digits() {
        let found = rule(Field::Uhid).find_all("UHID: 1234567890123456");
        assert_eq!(found, vec![RuleMatch::Text("12345678901234".to_string())]);
    }

    #[test]
    fn test_date_takes_whole_match() {
        let found = rule(Field::Date).find_all("Admitted 16/04/25, discharged 20-04-2025");
        assert_eq!(
            found,
            vec![
                RuleMatch::Text("16/04/25".to_string()),
                RuleMatch::Text("20-04-2025".to_string()),
            ]
        );
    }

    #[test]
    fn test_age_sex_yields_pair() {
        let found = rule(Field::AgeSex).find_all("Age: 45Y, Sex: F");
        assert_eq!(
            found,
            vec![RuleMatch::Pair("45Y".to_string(), "F".to_string())]
        );
    }

    #[test]
    fn test_age_sex_keeps_case_of_capture() {
        let found = rule(Field::AgeSex).find_all("age - 7y / sex - m");
        assert_eq!(found, vec![RuleMatch::Pair("7y".to_string(), "m".to_string())]);
    }

    #[test]
    fn test_name_shortened_to_follow_condition() {
        let found = rule(Field::PatientName).find_all("Patient Name: Santosh Pradhan   Age: 36Y");
        assert_eq!(
            found,
            vec![RuleMatch::Text("Santosh Pradhan  ".to_string())]
        );
    }

    #[test]
    fn test_name_ends_at_newline() {
        let found = rule(Field::PatientName).find_all("Patient Name: John Doe\nIPD No: 12");
        assert_eq!(found, vec![RuleMatch::Text("John Doe".to_string())]);
    }

    #[test]
    fn test_name_ends_before_sex() {
        let found = rule(Field::PatientName).find_all("Patient Name: Asha Rani Sex: F");
        assert_eq!(found, vec![RuleMatch::Text("Asha Rani".to_string())]);
    }

    #[test]
    fn test_name_without_terminator_is_not_found() {
        assert!(rule(Field::PatientName)
            .find_all("Patient Name: Nobody")
            .is_empty());
    }

    #[test]
    fn test_blank_name_before_age_captures_whitespace() {
        let found = rule(Field::PatientName).find_all("Patient Name:   Age: 36Y   Sex: M\n");
        assert_eq!(found, vec![RuleMatch::Text(" ".to_string())]);
    }

    #[test]
    fn test_blank_name_before_newline_captures_whitespace() {
        let found = rule(Field::PatientName).find_all("Patient Name: \nIPD No: 22");
        assert_eq!(found, vec![RuleMatch::Text(" ".to_string())]);
    }

    #[test]
    fn test_name_scan_continues_after_failed_candidate() {
        let text = "Patient Name: Nobody, Patient Name: Meera Nair\n";
        let found = rule(Field::PatientName).find_all(text);
        assert_eq!(found, vec![RuleMatch::Text("Meera Nair".to_string())]);
    }

    #[test]
    fn test_cleaned_trims_text_but_not_pairs() {
        assert_eq!(
            RuleMatch::Text("  Ravi  ".to_string()).cleaned(),
            RuleMatch::Text("Ravi".to_string())
        );
        let pair = RuleMatch::Pair("45 ".to_string(), "F".to_string());
        assert_eq!(pair.clone().cleaned(), pair);
    }

    #[test]
    fn test_custom_rule_without_groups() {
        let rule = PatternRule::new(Field::Ipd, r"bed\s*\d+", Arity::List).unwrap();
        assert_eq!(
            rule.find_all("BED 10 and bed12"),
            vec![
                RuleMatch::Text("BED 10".to_string()),
                RuleMatch::Text("bed12".to_string()),
            ]
        );
    }
}
