use serde::Serialize;
use std::collections::BTreeMap;

/// Population figures keyed by population code. Only the first value per code is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PopulationValues {
    values: BTreeMap<&'static str, u64>,
}

impl PopulationValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and keeps the earlier value when `code` is already present.
    pub fn insert(&mut self, code: &'static str, value: u64) -> bool {
        match self.values.entry(code) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, code: &str) -> Option<u64> {
        self.values.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.values.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The five mutually exclusive block counts for one accessibility indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccessibilityRow {
    pub en_todas: u64,
    pub en_alguna: u64,
    pub en_ninguna: u64,
    pub no_especificado: u64,
    pub no_aplica: u64,
}

impl AccessibilityRow {
    pub fn new(counts: [u64; 5]) -> Self {
        let [en_todas, en_alguna, en_ninguna, no_especificado, no_aplica] = counts;
        Self {
            en_todas,
            en_alguna,
            en_ninguna,
            no_especificado,
            no_aplica,
        }
    }

    /// Sum of the five counts, `None` when it does not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        [self.en_alguna, self.en_ninguna, self.no_especificado, self.no_aplica]
            .into_iter()
            .try_fold(self.en_todas, u64::checked_add)
    }

    /// Full credit for "in all blocks", 0.8 for "in some".
    pub fn base_score(&self) -> f64 {
        self.en_todas as f64 + 0.8 * self.en_alguna as f64
    }
}

/// Complete rows keyed by accessibility code. Only the first row per code is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessibilityValues {
    rows: BTreeMap<&'static str, AccessibilityRow>,
}

impl AccessibilityValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &'static str, row: AccessibilityRow) -> bool {
        match self.rows.entry(code) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(row);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, code: &str) -> Option<&AccessibilityRow> {
        self.rows.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rows.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Values found in a text block together with the catalog codes that were not.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub values: T,
    pub missing: Vec<&'static str>,
}

impl<T> Extraction<T> {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationShare {
    pub code: &'static str,
    pub label: &'static str,
    pub absolute_value: u64,
    pub percent_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityResult {
    pub mnnapam: f64,
    pub breakdown: Vec<PopulationShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorScore {
    pub code: &'static str,
    pub label: &'static str,
    pub normalized_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityResult {
    pub total_units: u64,
    pub policy: &'static str,
    pub scores: BTreeMap<&'static str, f64>,
    pub accessibility_index: f64,
    pub connectivity_index: f64,
    pub breakdown: Vec<IndicatorScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Diversity,
    Accessibility,
}

impl Mode {
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Diversity => "Diversity percentage (MNNAPAM)",
            Mode::Accessibility => "Accessibility and connection points",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Diversity => f.write_str("diversity"),
            Mode::Accessibility => f.write_str("accessibility"),
        }
    }
}

/// Output of either pipeline, tagged with the mode that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "result", rename_all = "snake_case")]
pub enum ModeResult {
    Diversity(DiversityResult),
    Accessibility(AccessibilityResult),
}

impl ModeResult {
    pub fn mode(&self) -> Mode {
        match self {
            ModeResult::Diversity(_) => Mode::Diversity,
            ModeResult::Accessibility(_) => Mode::Accessibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_values_keep_first_insert() {
        let mut values = PopulationValues::new();
        assert!(values.insert("PT", 6822));
        assert!(!values.insert("PT", 1));
        assert_eq!(values.get("PT"), Some(6822));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_row_total_and_base_score() {
        let row = AccessibilityRow::new([29, 18, 0, 0, 0]);
        assert_eq!(row.total(), Some(47));
        assert!((row.base_score() - 43.4).abs() < 1e-9);
    }

    #[test]
    fn test_row_total_overflow_is_none() {
        let row = AccessibilityRow::new([u64::MAX, 1, 0, 0, 0]);
        assert_eq!(row.total(), None);
        assert_eq!(AccessibilityRow::new([u64::MAX, 0, 0, 0, 0]).total(), Some(u64::MAX));
    }

    #[test]
    fn test_mode_titles() {
        assert_eq!(Mode::Diversity.title(), "Diversity percentage (MNNAPAM)");
        assert_eq!(Mode::Accessibility.title(), "Accessibility and connection points");
    }

    #[test]
    fn test_mode_result_reports_its_mode() {
        let result = ModeResult::Diversity(DiversityResult {
            mnnapam: 1.0,
            breakdown: vec![],
        });
        assert_eq!(result.mode(), Mode::Diversity);
    }
}
