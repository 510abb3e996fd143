use crate::domain::catalog::{Catalog, LabelSpec};
use crate::domain::model::{AccessibilityRow, AccessibilityValues, Extraction};
use crate::utils::error::Result;
use regex::Regex;

/// Reads `<indicator name> <int> <int> <int> <int> <int>` rows out of a pasted table.
///
/// Each line is trimmed and stripped of thousands separators, then has to match
/// a label and exactly five integers from start to end. Anchoring on the whole
/// line keeps "Transporte colectivo" from claiming the
/// "Parada de transporte colectivo" row. Headers, footers and blank lines fall
/// through silently.
#[derive(Debug, Clone)]
pub struct AccessibilityRowParser {
    grammars: Vec<(&'static LabelSpec, Regex)>,
}

impl AccessibilityRowParser {
    pub fn new(catalog: &Catalog) -> Result<Self> {
        let grammars = catalog
            .iter()
            .map(|spec| -> Result<_> { Ok((spec, Regex::new(&row_pattern(spec.label))?)) })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { grammars })
    }

    pub fn parse(&self, text: &str) -> Extraction<AccessibilityValues> {
        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.replace(',', ""))
            .collect();

        let mut values = AccessibilityValues::new();
        let mut missing = Vec::new();

        for (spec, grammar) in &self.grammars {
            let row = lines.iter().find_map(|line| match_row(grammar, line));

            match row {
                Some(row) => {
                    values.insert(spec.code, row);
                }
                None => missing.push(spec.code),
            }
        }

        Extraction { values, missing }
    }
}

fn row_pattern(label: &str) -> String {
    format!(
        r"^{}\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)$",
        regex::escape(label)
    )
}

fn match_row(grammar: &Regex, line: &str) -> Option<AccessibilityRow> {
    let caps = grammar.captures(line)?;
    let mut counts = [0u64; 5];
    for (slot, group) in counts.iter_mut().zip(1..=5) {
        *slot = caps[group].parse().ok()?;
    }
    let row = AccessibilityRow::new(counts);
    row.total()?;
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ACCESSIBILITY;

    fn parser() -> AccessibilityRowParser {
        AccessibilityRowParser::new(&ACCESSIBILITY).unwrap()
    }

    #[test]
    fn test_parses_row_with_header_and_thousands() {
        let text = "Nombre del indicador En todas En alguna En ninguna No especificado No aplica\n\
                    Recubrimiento de la calle 1,029 18 0 0 0\n";
        let extraction = parser().parse(text);

        assert_eq!(
            extraction.values.get("RDC"),
            Some(&AccessibilityRow::new([1029, 18, 0, 0, 0]))
        );
        assert!(extraction.missing.contains(&"RSR"));
    }

    #[test]
    fn test_full_line_anchoring_separates_transit_rows() {
        let text = "Parada de transporte colectivo 0 6 41 0 0\n\
                    Transporte colectivo 12 15 20 0 0";
        let extraction = parser().parse(text);

        assert_eq!(
            extraction.values.get("PTP"),
            Some(&AccessibilityRow::new([0, 6, 41, 0, 0]))
        );
        assert_eq!(
            extraction.values.get("TC"),
            Some(&AccessibilityRow::new([12, 15, 20, 0, 0]))
        );
    }

    #[test]
    fn test_stop_row_alone_does_not_populate_transit() {
        let extraction = parser().parse("Parada de transporte colectivo 0 6 41 0 0");

        assert!(extraction.values.contains("PTP"));
        assert!(!extraction.values.contains("TC"));
    }

    #[test]
    fn test_rows_with_wrong_arity_are_ignored() {
        let text = "Banqueta 35 12 0 0\nBanqueta 35 12 0 0 0 1\nGuarnición 33 14 0 0 0";
        let extraction = parser().parse(text);

        assert!(!extraction.values.contains("BQ"));
        assert!(extraction.values.contains("GN"));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "Banqueta 35 12 0 0 0\nBanqueta 1 1 1 1 1";
        let extraction = parser().parse(text);

        assert_eq!(
            extraction.values.get("BQ"),
            Some(&AccessibilityRow::new([35, 12, 0, 0, 0]))
        );
    }

    #[test]
    fn test_overflowing_row_falls_through_to_next_line() {
        let text = "Banqueta 99999999999999999999999 0 0 0 0\nBanqueta 3 4 0 0 0";
        let extraction = parser().parse(text);

        assert_eq!(
            extraction.values.get("BQ"),
            Some(&AccessibilityRow::new([3, 4, 0, 0, 0]))
        );
    }

    #[test]
    fn test_row_whose_total_overflows_falls_through() {
        let text = "Recubrimiento de la calle 18446744073709551615 1 0 0 0\n\
                    Recubrimiento de la calle 29 18 0 0 0";
        let extraction = parser().parse(text);

        assert_eq!(
            extraction.values.get("RDC"),
            Some(&AccessibilityRow::new([29, 18, 0, 0, 0]))
        );
    }

    #[test]
    fn test_tabs_and_padding_are_tolerated() {
        let extraction = parser().parse("   Ciclovía\t0\t0\t47\t0\t0   ");
        assert_eq!(
            extraction.values.get("CV"),
            Some(&AccessibilityRow::new([0, 0, 47, 0, 0]))
        );
    }

    #[test]
    fn test_each_catalog_line_matches_only_its_own_code() {
        let p = parser();
        for spec in ACCESSIBILITY.iter() {
            let line = format!("{} 1 2 3 4 5", spec.label);
            let extraction = p.parse(&line);
            assert_eq!(extraction.values.len(), 1, "line for {} matched twice", spec.code);
            assert!(extraction.values.contains(spec.code));
        }
    }
}
