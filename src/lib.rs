pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::report::{render, render_failure, OutputFormat};
pub use crate::app::session::{ResultCache, Session};
pub use crate::config::{cli::TextSource, CliConfig, Settings};
pub use crate::core::accessibility::{AccessibilityPipeline, AccessibilityScorer};
pub use crate::core::diversity::{DiversityCalculator, DiversityPipeline};
pub use crate::core::engine::{run_mode, IndicatorEngine};
pub use crate::core::extract::ValueLabelExtractor;
pub use crate::core::normalization::{PolicyKind, ScaledPolicy, ScoringOptions, UniformPolicy};
pub use crate::core::table::AccessibilityRowParser;
pub use crate::domain::catalog::{Catalog, CatalogKind, LabelSpec, ACCESSIBILITY, POPULATION};
pub use crate::domain::model::{
    AccessibilityResult, AccessibilityRow, AccessibilityValues, DiversityResult, Mode, ModeResult,
    PopulationValues,
};
pub use crate::utils::error::{ErrorKind, IndicatorError, Result};
