use anyhow::Result;
use place_indicators::{
    run_mode, DiversityPipeline, ErrorKind, IndicatorEngine, Mode, ModeResult, ScoringOptions,
    ValueLabelExtractor, POPULATION,
};

const POPULATION_TEXT: &str = include_str!("fixtures/population_block.txt");

#[test]
fn test_end_to_end_diversity_from_pasted_block() -> Result<()> {
    let engine = IndicatorEngine::new(DiversityPipeline::new()?);
    let result = engine.run(POPULATION_TEXT)?;

    assert!((result.mnnapam - 6.88).abs() < 0.01);
    assert_eq!(result.breakdown.len(), 8);
    assert_eq!(result.breakdown[0].code, "PT");
    assert_eq!(result.breakdown[0].absolute_value, 6822);
    assert_eq!(result.breakdown[7].code, "PD");
    assert!((result.breakdown[7].percent_of_total - 264.0 / 6822.0 * 100.0).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_thousands_separators_do_not_change_result() -> Result<()> {
    let plain = POPULATION_TEXT.replace(',', "");
    let options = ScoringOptions::default();

    let with_commas = run_mode(Mode::Diversity, POPULATION_TEXT, &options)?;
    let without_commas = run_mode(Mode::Diversity, &plain, &options)?;

    assert_eq!(with_commas, without_commas);
    Ok(())
}

#[test]
fn test_missing_label_reports_exact_codes() {
    let text = POPULATION_TEXT
        .lines()
        .filter(|line| !line.starts_with("Población femenina") && !line.starts_with("Población con"))
        .collect::<Vec<_>>()
        .join("\n");

    let err = run_mode(Mode::Diversity, &text, &ScoringOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IncompleteExtraction);
    assert_eq!(err.missing_codes(), ["PF".to_string(), "PD".to_string()]);
}

#[test]
fn test_zero_population_is_distinct_from_incomplete() {
    let text = POPULATION_TEXT.replace("Población total 6,822", "Población total 0");

    let err = run_mode(Mode::Diversity, &text, &ScoringOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ZeroTotalPopulation);
    assert!(err.missing_codes().is_empty());
}

#[test]
fn test_malformed_number_counts_as_missing() {
    let text = POPULATION_TEXT.replace("Población masculina 3,224", "Población masculina ,");

    let err = run_mode(Mode::Diversity, &text, &ScoringOptions::default()).unwrap_err();

    assert_eq!(err.missing_codes(), ["PM".to_string()]);
}

#[test]
fn test_extractor_returns_partial_values_with_missing_list() -> Result<()> {
    let extractor = ValueLabelExtractor::new(&POPULATION)?;
    let extraction = extractor.extract("Población total 6,822 y Población femenina 3,597");

    assert_eq!(extraction.values.len(), 2);
    assert_eq!(extraction.missing, vec!["PM", "NNA", "PJ", "PA", "PAM", "PD"]);
    Ok(())
}

#[test]
fn test_result_is_tagged_with_mode() -> Result<()> {
    let result = run_mode(Mode::Diversity, POPULATION_TEXT, &ScoringOptions::default())?;
    assert!(matches!(result, ModeResult::Diversity(_)));
    Ok(())
}
