use crate::core::accessibility::AccessibilityPipeline;
use crate::core::diversity::DiversityPipeline;
use crate::core::normalization::ScoringOptions;
use crate::core::IndicatorPipeline;
use crate::domain::model::{Mode, ModeResult};
use crate::utils::error::Result;

pub struct IndicatorEngine<P: IndicatorPipeline> {
    pipeline: P,
}

impl<P: IndicatorPipeline> IndicatorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self, text: &str) -> Result<P::Output> {
        let mode = self.pipeline.mode();
        tracing::info!("Computing {} indicators", mode);

        tracing::debug!("Extracting values from {} bytes of text", text.len());
        let values = self.pipeline.extract(text).map_err(|e| {
            tracing::warn!("Extraction failed for {}: {}", mode, e);
            e
        })?;

        let output = self.pipeline.compute(values).map_err(|e| {
            tracing::warn!("Computation failed for {}: {}", mode, e);
            e
        })?;

        tracing::info!("{} indicators computed", mode);
        Ok(output)
    }
}

/// Runs the pipeline for `mode` on `text`. Scoring options only affect accessibility.
pub fn run_mode(mode: Mode, text: &str, options: &ScoringOptions) -> Result<ModeResult> {
    match mode {
        Mode::Diversity => {
            let engine = IndicatorEngine::new(DiversityPipeline::new()?);
            engine.run(text).map(ModeResult::Diversity)
        }
        Mode::Accessibility => {
            let engine = IndicatorEngine::new(AccessibilityPipeline::new(options)?);
            engine.run(text).map(ModeResult::Accessibility)
        }
    }
}
