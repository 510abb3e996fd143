use serde::Serialize;
use std::fmt;

/// A human-visible label as it appears in the pasted text, paired with its short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelSpec {
    pub label: &'static str,
    pub code: &'static str,
}

impl LabelSpec {
    pub const fn new(label: &'static str, code: &'static str) -> Self {
        Self { label, code }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Population,
    Accessibility,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Population => f.write_str("population"),
            CatalogKind::Accessibility => f.write_str("accessibility"),
        }
    }
}

/// Ordered, fixed set of labels. Codes are only unique within one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    kind: CatalogKind,
    entries: &'static [LabelSpec],
}

impl Catalog {
    pub const fn new(kind: CatalogKind, entries: &'static [LabelSpec]) -> Self {
        Self { kind, entries }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static LabelSpec> {
        self.entries.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|spec| spec.code)
    }

    pub fn label_for(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|spec| spec.code == code)
            .map(|spec| spec.label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static POPULATION_LABELS: [LabelSpec; 8] = [
    LabelSpec::new("Población total", "PT"),
    LabelSpec::new("Población femenina", "PF"),
    LabelSpec::new("Población masculina", "PM"),
    LabelSpec::new("Población de 0 a 14 años", "NNA"),
    LabelSpec::new("Población de 15 a 29 años", "PJ"),
    LabelSpec::new("Población de 30 a 59 años", "PA"),
    LabelSpec::new("Población de 60 años y más", "PAM"),
    LabelSpec::new("Población con discapacidad", "PD"),
];

static ACCESSIBILITY_LABELS: [LabelSpec; 21] = [
    LabelSpec::new("Recubrimiento de la calle", "RDC"),
    LabelSpec::new("Rampa para silla de ruedas", "RSR"),
    LabelSpec::new("Paso peatonal", "PP"),
    LabelSpec::new("Banqueta", "BQ"),
    LabelSpec::new("Guarnición", "GN"),
    LabelSpec::new("Ciclovía", "CV"),
    LabelSpec::new("Ciclocarril", "CC"),
    LabelSpec::new("Alumbrado público", "AP"),
    LabelSpec::new("Letrero con nombre de la calle", "LNC"),
    LabelSpec::new("Teléfono público", "TP"),
    LabelSpec::new("Árboles y palmeras", "ARB"),
    LabelSpec::new("Semáforo para peatón", "SP"),
    LabelSpec::new("Semáforo auditivo", "SA"),
    LabelSpec::new("Parada de transporte colectivo", "PTP"),
    LabelSpec::new("Estación para bicicleta", "EBC"),
    LabelSpec::new("Alcantarilla de drenaje pluvial", "ADP"),
    LabelSpec::new("Transporte colectivo", "TC"),
    LabelSpec::new("Sin restricción del paso a peatones", "SRPP"),
    LabelSpec::new("Sin restricción del paso a automóviles", "SRPA"),
    LabelSpec::new("Puesto semifijo", "PS"),
    LabelSpec::new("Puesto ambulante", "PA"),
];

/// Census population figures, in report order.
pub static POPULATION: Catalog = Catalog::new(CatalogKind::Population, &POPULATION_LABELS);

/// Street-block accessibility indicators, in report order.
pub static ACCESSIBILITY: Catalog =
    Catalog::new(CatalogKind::Accessibility, &ACCESSIBILITY_LABELS);
