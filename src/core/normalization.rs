use crate::domain::ports::NormalizationPolicy;
use serde::{Deserialize, Serialize};

/// `base / TM` for every indicator. Used by most published revisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPolicy;

impl NormalizationPolicy for UniformPolicy {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn standard(&self, base: f64, total_units: u64) -> f64 {
        base / total_units as f64
    }

    fn transit(&self, base: f64, total_units: u64) -> f64 {
        self.standard(base, total_units)
    }

    fn bike_station(&self, base: f64, total_units: u64) -> f64 {
        self.standard(base, total_units)
    }

    fn unobstructed(&self, base: f64, total_units: u64) -> f64 {
        self.standard(base, total_units)
    }
}

/// Revision that rescales transit (`TM/3`) and bike stations (`TM/4`), and
/// inverts the unrestricted-passage rows to `(TM - base) / TM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaledPolicy;

impl NormalizationPolicy for ScaledPolicy {
    fn name(&self) -> &'static str {
        "scaled"
    }

    fn standard(&self, base: f64, total_units: u64) -> f64 {
        base / total_units as f64
    }

    fn transit(&self, base: f64, total_units: u64) -> f64 {
        base / (total_units as f64 / 3.0)
    }

    fn bike_station(&self, base: f64, total_units: u64) -> f64 {
        base / (total_units as f64 / 4.0)
    }

    fn unobstructed(&self, base: f64, total_units: u64) -> f64 {
        let tm = total_units as f64;
        (tm - base) / tm
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Uniform,
    Scaled,
}

impl PolicyKind {
    pub fn build(self) -> Box<dyn NormalizationPolicy> {
        match self {
            PolicyKind::Uniform => Box::new(UniformPolicy),
            PolicyKind::Scaled => Box::new(ScaledPolicy),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uniform" => Some(PolicyKind::Uniform),
            "scaled" => Some(PolicyKind::Scaled),
            _ => None,
        }
    }
}

/// Knobs for the accessibility engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOptions {
    #[serde(default)]
    pub policy: PolicyKind,
    /// Require the TC row to count the same blocks as RDC.
    #[serde(default)]
    pub enforce_transit_total: bool,
}
