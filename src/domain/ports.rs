use crate::domain::model::Mode;
use crate::utils::error::Result;

/// Two-step conversion of pasted text into an indicator result.
pub trait IndicatorPipeline: Send + Sync {
    type Values;
    type Output;

    fn mode(&self) -> Mode;
    fn extract(&self, text: &str) -> Result<Self::Values>;
    fn compute(&self, values: Self::Values) -> Result<Self::Output>;
}

/// How an accessibility indicator's base score is normalized against the block total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreClass {
    Standard,
    Transit,
    BikeStation,
    Unobstructed,
}

impl ScoreClass {
    pub fn of(code: &str) -> Self {
        match code {
            "PTP" | "TC" => ScoreClass::Transit,
            "EBC" => ScoreClass::BikeStation,
            "SRPP" | "SRPA" => ScoreClass::Unobstructed,
            _ => ScoreClass::Standard,
        }
    }
}

/// Turns `base(row)` and the block total `TM` into a normalized score.
///
/// Callers guarantee `total_units > 0`.
pub trait NormalizationPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    fn standard(&self, base: f64, total_units: u64) -> f64;
    fn transit(&self, base: f64, total_units: u64) -> f64;
    fn bike_station(&self, base: f64, total_units: u64) -> f64;
    fn unobstructed(&self, base: f64, total_units: u64) -> f64;

    fn normalize(&self, class: ScoreClass, base: f64, total_units: u64) -> f64 {
        match class {
            ScoreClass::Standard => self.standard(base, total_units),
            ScoreClass::Transit => self.transit(base, total_units),
            ScoreClass::BikeStation => self.bike_station(base, total_units),
            ScoreClass::Unobstructed => self.unobstructed(base, total_units),
        }
    }
}
