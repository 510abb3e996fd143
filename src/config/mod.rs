pub mod cli;
pub mod toml_config;

use crate::app::report::OutputFormat;
use crate::core::normalization::{PolicyKind, ScoringOptions};
use crate::domain::model::Mode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "place-indicators"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Diversity and accessibility indicators from pasted census text")
)]
pub struct CliConfig {
    /// Indicator to compute
    #[cfg_attr(feature = "cli", arg(value_enum))]
    pub mode: Mode,

    /// File with the pasted text; reads stdin when absent or "-"
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub input: Option<String>,

    /// Path to a TOML settings file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Accessibility normalization policy (overrides the config file)
    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub policy: Option<PolicyKind>,

    /// Require the TC row total to match the RDC row total
    #[cfg_attr(feature = "cli", arg(long))]
    pub strict_totals: bool,

    /// Report format (overrides the config file)
    #[cfg_attr(feature = "cli", arg(short, long, value_enum))]
    pub format: Option<OutputFormat>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub scoring: ScoringOptions,
    pub format: OutputFormat,
    pub verbose: bool,
    pub log_json: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    pub fn resolve(&self, file: &TomlConfig) -> Result<Settings> {
        let file_scoring = file.scoring_options()?;

        Ok(Settings {
            scoring: ScoringOptions {
                policy: self.policy.unwrap_or(file_scoring.policy),
                enforce_transit_total: self.strict_totals || file_scoring.enforce_transit_total,
            },
            format: self.format.or(file.output_format()?).unwrap_or_default(),
            verbose: self.verbose || file.verbose(),
            log_json: self.log_json || file.log_json(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = self.input.as_deref().filter(|path| *path != "-") {
            validate_path("input", input)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
