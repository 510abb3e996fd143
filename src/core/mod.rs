pub mod accessibility;
pub mod diversity;
pub mod engine;
pub mod extract;
pub mod normalization;
pub mod table;

pub use crate::domain::model::{
    AccessibilityResult, AccessibilityRow, AccessibilityValues, DiversityResult, Mode, ModeResult,
    PopulationValues,
};
pub use crate::domain::ports::{IndicatorPipeline, NormalizationPolicy, ScoreClass};
pub use crate::utils::error::Result;
