use crate::domain::model::{AccessibilityResult, DiversityResult, Mode, ModeResult};
use crate::utils::error::{IndicatorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const MNNAPAM_FORMULA: &str = "MNNAPAM = (PF + NNA * PM/PT + PAM * PM/PT) / PT * 10";
pub const PA_FORMULA: &str =
    "PA = 0.5*RDC + 2.0*RSR + 2.0*PP + 1.0*BQ + 0.5*GN + 1.0*SA + 1.0*PTP + 2.0*SRPP";
pub const PC_FORMULA: &str = "PC = 1.0*RDC + 1.0*BQ + 1.0*GN + 1.5*CV + 0.5*CC + 1.0*LNC \
                              + 1.0*SP + 1.0*PTP + 1.0*EBC + 1.0*TC";
pub const APPROXIMATION_NOTE: &str = "NNA and PAM are not broken down by sex; both are weighted \
                                      by the overall male share PM/PT, so MNNAPAM is an approximation.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    result: &'a ModeResult,
}

pub fn render(result: &ModeResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match result {
            ModeResult::Diversity(diversity) => render_diversity_text(diversity),
            ModeResult::Accessibility(accessibility) => render_accessibility_text(accessibility),
        }),
        OutputFormat::Json => {
            let envelope = Envelope {
                generated_at: Utc::now(),
                result,
            };
            Ok(serde_json::to_string_pretty(&envelope)?)
        }
        OutputFormat::Csv => render_csv(result),
    }
}

/// Message for the person who pasted the text, including what to paste again.
pub fn render_failure(error: &IndicatorError) -> String {
    let mut out = format!("{}\n", error.user_friendly_message());
    if !error.missing_codes().is_empty() {
        let _ = writeln!(out, "Missing: {}", error.missing_codes().join(", "));
    }
    let _ = writeln!(out, "Suggestion: {}", error.recovery_suggestion());
    out
}

fn render_diversity_text(result: &DiversityResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", Mode::Diversity.title());
    let _ = writeln!(
        out,
        "The share of women, children and older adults relative to the total population is {:.2}.",
        result.mnnapam
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "MNNAPAM: {:.2}", result.mnnapam);
    let _ = writeln!(out, "{}", MNNAPAM_FORMULA);
    let _ = writeln!(out, "Note: {}", APPROXIMATION_NOTE);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<6} {:<28} {:>14} {:>10}", "Code", "Variable", "Value", "% of PT");
    for row in &result.breakdown {
        let _ = writeln!(
            out,
            "{:<6} {:<28} {:>14} {:>8.2} %",
            row.code, row.label, row.absolute_value, row.percent_of_total
        );
    }
    out
}

fn render_accessibility_text(result: &AccessibilityResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", Mode::Accessibility.title());
    let _ = writeln!(out, "Total blocks (TM): {}", result.total_units);
    let _ = writeln!(out, "Accessibility score (PA): {:.2}", result.accessibility_index);
    let _ = writeln!(out, "Connection score (PC): {:.2}", result.connectivity_index);
    let _ = writeln!(out, "Normalization: {}", result.policy);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", PA_FORMULA);
    let _ = writeln!(out, "{}", PC_FORMULA);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<6} {:<40} {:>8}", "Code", "Indicator", "Score");
    for row in &result.breakdown {
        let _ = writeln!(
            out,
            "{:<6} {:<40} {:>8.4}",
            row.code, row.label, row.normalized_score
        );
    }
    out
}

#[derive(Serialize)]
struct ShareCsvRow<'a> {
    code: &'a str,
    label: &'a str,
    value: u64,
    percent: f64,
}

#[derive(Serialize)]
struct ScoreCsvRow<'a> {
    code: &'a str,
    label: &'a str,
    score: f64,
}

fn render_csv(result: &ModeResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    match result {
        ModeResult::Diversity(diversity) => {
            for row in &diversity.breakdown {
                writer.serialize(ShareCsvRow {
                    code: row.code,
                    label: row.label,
                    value: row.absolute_value,
                    percent: row.percent_of_total,
                })?;
            }
        }
        ModeResult::Accessibility(accessibility) => {
            for row in &accessibility.breakdown {
                writer.serialize(ScoreCsvRow {
                    code: row.code,
                    label: row.label,
                    score: row.normalized_score,
                })?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| IndicatorError::IoError(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| IndicatorError::IoError(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::run_mode;
    use crate::core::normalization::ScoringOptions;
    use crate::domain::catalog::CatalogKind;
    use crate::domain::model::Mode;

    const POPULATION_TEXT: &str = include_str!("../../tests/fixtures/population_block.txt");
    const ACCESSIBILITY_TEXT: &str = include_str!("../../tests/fixtures/accessibility_table.txt");

    fn diversity() -> ModeResult {
        run_mode(Mode::Diversity, POPULATION_TEXT, &ScoringOptions::default()).unwrap()
    }

    fn accessibility() -> ModeResult {
        run_mode(Mode::Accessibility, ACCESSIBILITY_TEXT, &ScoringOptions::default()).unwrap()
    }

    #[test]
    fn test_diversity_text_rounds_for_display() {
        let text = render(&diversity(), OutputFormat::Text).unwrap();

        assert!(text.starts_with("Diversity percentage (MNNAPAM)"));
        assert!(text.contains("MNNAPAM: 6.87"));
        assert!(text.contains("100.00 %"));
        assert!(text.contains("52.73 %"));
        assert!(text.contains("approximation"));
    }

    #[test]
    fn test_accessibility_text_shows_headlines() {
        let text = render(&accessibility(), OutputFormat::Text).unwrap();

        assert!(text.contains("Total blocks (TM): 47"));
        assert!(text.contains("(PA): 5.13"));
        assert!(text.contains("(PC): 4.28"));
        assert!(text.contains("0.9234"));
    }

    #[test]
    fn test_json_envelope_is_tagged_by_mode() {
        let json = render(&accessibility(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "accessibility");
        assert_eq!(value["result"]["total_units"], 47);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_csv_has_one_row_per_catalog_entry() {
        let csv = render(&accessibility(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "code,label,score");
        assert_eq!(lines.len(), 22);
        assert!(lines[1].starts_with("RDC,Recubrimiento de la calle,"));
    }

    #[test]
    fn test_diversity_csv_header_and_rows() {
        let csv = render(&diversity(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "code,label,value,percent");
        assert_eq!(lines.len(), 9);
        assert!(lines[1].starts_with("PT,Población total,6822,100"));
    }

    #[test]
    fn test_failure_lists_missing_codes() {
        let err = IndicatorError::IncompleteExtraction {
            catalog: CatalogKind::Accessibility,
            missing: vec!["TC".to_string(), "PTP".to_string()],
        };
        let message = render_failure(&err);

        assert!(message.contains("Missing: TC, PTP"));
        assert!(message.contains("Suggestion:"));
    }
}
