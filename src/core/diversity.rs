use crate::core::extract::ValueLabelExtractor;
use crate::domain::catalog::{Catalog, POPULATION};
use crate::domain::model::{DiversityResult, Mode, PopulationShare, PopulationValues};
use crate::domain::ports::IndicatorPipeline;
use crate::utils::error::{IndicatorError, Result};

/// Computes the MNNAPAM proxy index from complete population figures.
///
/// ```text
/// MNNAPAM = (PF + NNA * PM/PT + PAM * PM/PT) / PT * 10
/// ```
///
/// Children (NNA) and older adults (PAM) are not broken down by sex in the
/// source data, so both are weighted by the overall male share PM/PT. The
/// result is an approximation, not a count.
#[derive(Debug, Clone, Copy)]
pub struct DiversityCalculator {
    catalog: &'static Catalog,
}

impl Default for DiversityCalculator {
    fn default() -> Self {
        Self {
            catalog: &POPULATION,
        }
    }
}

impl DiversityCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute(&self, values: &PopulationValues) -> Result<DiversityResult> {
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

        let value = |code: &str| values.get(code).unwrap_or_default();
        let pt = value("PT");
        if pt == 0 {
            return Err(IndicatorError::ZeroTotalPopulation);
        }

        let pt = pt as f64;
        let male_share = value("PM") as f64 / pt;
        let mnnapam = (value("PF") as f64
            + value("NNA") as f64 * male_share
            + value("PAM") as f64 * male_share)
            / pt
            * 10.0;

        let breakdown = self
            .catalog
            .iter()
            .map(|spec| {
                let absolute_value = value(spec.code);
                PopulationShare {
                    code: spec.code,
                    label: spec.label,
                    absolute_value,
                    percent_of_total: absolute_value as f64 / pt * 100.0,
                }
            })
            .collect();

        Ok(DiversityResult { mnnapam, breakdown })
    }
}

/// Pasted population block in, [`DiversityResult`] out.
#[derive(Debug, Clone)]
pub struct DiversityPipeline {
    extractor: ValueLabelExtractor,
    calculator: DiversityCalculator,
}

impl DiversityPipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: ValueLabelExtractor::new(&POPULATION)?,
            calculator: DiversityCalculator::new(),
        })
    }
}

impl IndicatorPipeline for DiversityPipeline {
    type Values = PopulationValues;
    type Output = DiversityResult;

    fn mode(&self) -> Mode {
        Mode::Diversity
    }

    fn extract(&self, text: &str) -> Result<PopulationValues> {
        if text.trim().is_empty() {
            return Err(IndicatorError::EmptyInput {
                mode: self.mode().to_string(),
            });
        }

        let extraction = self.extractor.extract(text);
        if !extraction.is_complete() {
            return Err(IndicatorError::IncompleteExtraction {
                catalog: POPULATION.kind(),
                missing: extraction.missing.iter().map(|c| c.to_string()).collect(),
            });
        }

        tracing::debug!("Extracted {} population values", extraction.values.len());
        Ok(extraction.values)
    }

    fn compute(&self, values: PopulationValues) -> Result<DiversityResult> {
        self.calculator.compute(&values)
    }
}
