use crate::core::normalization::ScoringOptions;
use crate::core::table::AccessibilityRowParser;
use crate::domain::catalog::{Catalog, ACCESSIBILITY};
use crate::domain::model::{
    AccessibilityResult, AccessibilityRow, AccessibilityValues, IndicatorScore, Mode,
};
use crate::domain::ports::{IndicatorPipeline, NormalizationPolicy, ScoreClass};
use crate::utils::error::{IndicatorError, Result};
use std::collections::BTreeMap;

/// Published weights of the pedestrian accessibility index (PA).
pub const ACCESSIBILITY_WEIGHTS: [(&str, f64); 8] = [
    ("RDC", 0.5),
    ("RSR", 2.0),
    ("PP", 2.0),
    ("BQ", 1.0),
    ("GN", 0.5),
    ("SA", 1.0),
    ("PTP", 1.0),
    ("SRPP", 2.0),
];

/// Published weights of the connectivity index (PC).
pub const CONNECTIVITY_WEIGHTS: [(&str, f64); 10] = [
    ("RDC", 1.0),
    ("BQ", 1.0),
    ("GN", 1.0),
    ("CV", 1.5),
    ("CC", 0.5),
    ("LNC", 1.0),
    ("SP", 1.0),
    ("PTP", 1.0),
    ("EBC", 1.0),
    ("TC", 1.0),
];

/// Scores a complete accessibility table.
///
/// TM is the RDC row total. Every indicator gets `enTodas + 0.8 * enAlguna`
/// normalized against TM by the configured policy, and PA/PC are fixed linear
/// combinations of those scores. SRPA is scored and reported but carries no
/// weight in either index.
pub struct AccessibilityScorer {
    catalog: &'static Catalog,
    policy: Box<dyn NormalizationPolicy>,
    enforce_transit_total: bool,
}

impl AccessibilityScorer {
    pub fn new(policy: Box<dyn NormalizationPolicy>, enforce_transit_total: bool) -> Self {
        Self {
            catalog: &ACCESSIBILITY,
            policy,
            enforce_transit_total,
        }
    }

    pub fn from_options(options: &ScoringOptions) -> Self {
        Self::new(options.policy.build(), options.enforce_transit_total)
    }

    /// Total surveyed blocks, taken from the street-surface row.
    pub fn total_units(&self, values: &AccessibilityValues) -> Result<u64> {
        let rdc = values
            .get("RDC")
            .ok_or_else(|| IndicatorError::IncompleteExtraction {
                catalog: self.catalog.kind(),
                missing: vec!["RDC".to_string()],
            })?;

        let total_units = row_total("RDC", rdc)?;
        if total_units == 0 {
            return Err(IndicatorError::ZeroTotalUnits);
        }

        if self.enforce_transit_total {
            let tc_total = match values.get("TC") {
                Some(row) => row_total("TC", row)?,
                None => 0,
            };
            if tc_total != total_units {
                return Err(IndicatorError::InconsistentTotals {
                    rdc_total: total_units,
                    tc_total,
                });
            }
        }

        Ok(total_units)
    }

    pub fn score(&self, values: &AccessibilityValues) -> Result<AccessibilityResult> {
        let missing: Vec<String> = self
            .catalog
            .codes()
            .filter(|code| !values.contains(code))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(IndicatorError::IncompleteExtraction {
                catalog: self.catalog.kind(),
                missing,
            });
        }

        let total_units = self.total_units(values)?;

        let mut scores = BTreeMap::new();
        let mut breakdown = Vec::with_capacity(self.catalog.len());
        for spec in self.catalog.iter() {
            let base = values.get(spec.code).map(|row| row.base_score()).unwrap_or_default();
            let normalized_score =
                self.policy
                    .normalize(ScoreClass::of(spec.code), base, total_units);

            scores.insert(spec.code, normalized_score);
            breakdown.push(IndicatorScore {
                code: spec.code,
                label: spec.label,
                normalized_score,
            });
        }

        let accessibility_index = weighted_sum(&scores, &ACCESSIBILITY_WEIGHTS);
        let connectivity_index = weighted_sum(&scores, &CONNECTIVITY_WEIGHTS);

        tracing::debug!(
            "TM={} PA={:.4} PC={:.4} policy={}",
            total_units,
            accessibility_index,
            connectivity_index,
            self.policy.name()
        );

        Ok(AccessibilityResult {
            total_units,
            policy: self.policy.name(),
            scores,
            accessibility_index,
            connectivity_index,
            breakdown,
        })
    }
}

impl Default for AccessibilityScorer {
    fn default() -> Self {
        Self::from_options(&ScoringOptions::default())
    }
}

impl std::fmt::Debug for AccessibilityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessibilityScorer")
            .field("policy", &self.policy.name())
            .field("enforce_transit_total", &self.enforce_transit_total)
            .finish()
    }
}

fn row_total(code: &str, row: &AccessibilityRow) -> Result<u64> {
    row.total().ok_or_else(|| IndicatorError::RowTotalOverflow {
        code: code.to_string(),
    })
}

// Terms are added in published order; `scores` holds every catalog code.
fn weighted_sum(scores: &BTreeMap<&'static str, f64>, weights: &[(&str, f64)]) -> f64 {
    weights
        .iter()
        .fold(0.0, |acc, (code, weight)| acc + scores[*code] * weight)
}

/// Pasted accessibility table in, [`AccessibilityResult`] out.
#[derive(Debug)]
pub struct AccessibilityPipeline {
    parser: AccessibilityRowParser,
    scorer: AccessibilityScorer,
}

impl AccessibilityPipeline {
    pub fn new(options: &ScoringOptions) -> Result<Self> {
        Ok(Self {
            parser: AccessibilityRowParser::new(&ACCESSIBILITY)?,
            scorer: AccessibilityScorer::from_options(options),
        })
    }
}

impl IndicatorPipeline for AccessibilityPipeline {
    type Values = AccessibilityValues;
    type Output = AccessibilityResult;

    fn mode(&self) -> Mode {
        Mode::Accessibility
    }

    fn extract(&self, text: &str) -> Result<AccessibilityValues> {
        if text.trim().is_empty() {
            return Err(IndicatorError::EmptyInput {
                mode: self.mode().to_string(),
            });
        }

        let extraction = self.parser.parse(text);
        if !extraction.is_complete() {
            return Err(IndicatorError::IncompleteExtraction {
                catalog: ACCESSIBILITY.kind(),
                missing: extraction.missing.iter().map(|c| c.to_string()).collect(),
            });
        }

        tracing::debug!("Parsed {} accessibility rows", extraction.values.len());
        Ok(extraction.values)
    }

    fn compute(&self, values: AccessibilityValues) -> Result<AccessibilityResult> {
        self.scorer.score(&values)
    }
}
