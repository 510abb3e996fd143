use crate::domain::catalog::CatalogKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Incomplete {catalog} extraction, missing: {}", .missing.join(", "))]
    IncompleteExtraction {
        catalog: CatalogKind,
        missing: Vec<String>,
    },

    #[error("Total population (PT) cannot be 0")]
    ZeroTotalPopulation,

    #[error("Total units (TM) cannot be 0")]
    ZeroTotalUnits,

    #[error("Inconsistent totals: RDC sums to {rdc_total} but TC sums to {tc_total}")]
    InconsistentTotals { rdc_total: u64, tc_total: u64 },

    #[error("Counts of row {code} overflow the block total")]
    RowTotalOverflow { code: String },

    #[error("No text supplied for {mode} input")]
    EmptyInput { mode: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Label pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Machine-checkable error kind, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    IncompleteExtraction,
    ZeroTotalPopulation,
    ZeroTotalUnits,
    InconsistentTotals,
    RowTotalOverflow,
    EmptyInput,
    Io,
    Serialization,
    Csv,
    Pattern,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Computation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl IndicatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IncompleteExtraction { .. } => ErrorKind::IncompleteExtraction,
            Self::ZeroTotalPopulation => ErrorKind::ZeroTotalPopulation,
            Self::ZeroTotalUnits => ErrorKind::ZeroTotalUnits,
            Self::InconsistentTotals { .. } => ErrorKind::InconsistentTotals,
            Self::RowTotalOverflow { .. } => ErrorKind::RowTotalOverflow,
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::IoError(_) => ErrorKind::Io,
            Self::SerializationError(_) => ErrorKind::Serialization,
            Self::CsvError(_) => ErrorKind::Csv,
            Self::PatternError(_) => ErrorKind::Pattern,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorKind::Config
            }
        }
    }

    /// Codes the caller has to supply again; empty for every other kind.
    pub fn missing_codes(&self) -> &[String] {
        match self {
            Self::IncompleteExtraction { missing, .. } => missing.as_slice(),
            _ => &[],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncompleteExtraction { .. } | Self::EmptyInput { .. } => ErrorCategory::Input,
            Self::ZeroTotalPopulation
            | Self::ZeroTotalUnits
            | Self::InconsistentTotals { .. }
            | Self::RowTotalOverflow { .. } => ErrorCategory::Computation,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::PatternError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Computation => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IncompleteExtraction { catalog, missing } => format!(
                "Paste the full {} block again; it must contain: {}",
                catalog,
                missing.join(", ")
            ),
            Self::EmptyInput { .. } => {
                "Copy the query result from the mapping tool and paste it verbatim".to_string()
            }
            Self::ZeroTotalPopulation => {
                "Select an area with a non-zero total population".to_string()
            }
            Self::ZeroTotalUnits => {
                "The street-surface row (RDC) must count at least one block".to_string()
            }
            Self::InconsistentTotals { .. } => {
                "Check that the RDC and TC rows come from the same query, or disable --strict-totals"
                    .to_string()
            }
            Self::RowTotalOverflow { code } => {
                format!("Check the counts of the {} row for pasting errors", code)
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the configuration file", field)
            }
            Self::IoError(_) => "Check that the input file exists and is readable".to_string(),
            Self::PatternError(_) => "Catalog labels must compile into valid patterns".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different --format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IncompleteExtraction { catalog, missing } => format!(
                "Missing {} values or the format is wrong. Missing codes: {}",
                catalog,
                missing.join(", ")
            ),
            other => other.to_string(),
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Computation => 1,
            ErrorCategory::Configuration | ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
