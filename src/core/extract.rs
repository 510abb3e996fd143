use crate::domain::catalog::{Catalog, LabelSpec};
use crate::domain::model::{Extraction, PopulationValues};
use crate::utils::error::Result;
use regex::Regex;

/// Finds `<label> <number>` fragments anywhere in free text.
///
/// Labels match case-insensitively and any whitespace run may separate their
/// words. The number may carry comma thousands separators and must end at a
/// word boundary. Only the first occurrence of each label is considered.
#[derive(Debug, Clone)]
pub struct ValueLabelExtractor {
    patterns: Vec<(&'static LabelSpec, Regex)>,
}

impl ValueLabelExtractor {
    pub fn new(catalog: &Catalog) -> Result<Self> {
        let patterns = catalog
            .iter()
            .map(|spec| -> Result<_> { Ok((spec, Regex::new(&label_value_pattern(spec.label))?)) })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn extract(&self, text: &str) -> Extraction<PopulationValues> {
        let mut values = PopulationValues::new();
        let mut missing = Vec::new();

        for (spec, pattern) in &self.patterns {
            let parsed = pattern
                .captures(text)
                .and_then(|caps| parse_grouped_integer(&caps[1]));

            match parsed {
                Some(value) => {
                    values.insert(spec.code, value);
                }
                None => missing.push(spec.code),
            }
        }

        Extraction { values, missing }
    }
}

fn label_value_pattern(label: &str) -> String {
    let words: Vec<String> = label.split_whitespace().map(regex::escape).collect();
    format!(r"(?i){}\s+([0-9,]+)\b", words.join(r"\s+"))
}

/// Parses `6,822` and `6822` alike. Anything else after comma removal is rejected.
pub fn parse_grouped_integer(token: &str) -> Option<u64> {
    let digits: String = token.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
