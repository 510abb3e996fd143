use crate::app::report::OutputFormat;
use crate::core::normalization::{PolicyKind, ScoringOptions};
use crate::utils::error::{IndicatorError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scoring: Option<ScoringSection>,
    pub output: Option<OutputSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringSection {
    pub policy: Option<String>,
    pub enforce_transit_total: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IndicatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IndicatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INDICATOR_POLICY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.policy()?;
        self.output_format()?;
        Ok(())
    }

    pub fn policy(&self) -> Result<Option<PolicyKind>> {
        let Some(raw) = self.scoring.as_ref().and_then(|s| s.policy.as_deref()) else {
            return Ok(None);
        };
        PolicyKind::parse(raw)
            .map(Some)
            .ok_or_else(|| IndicatorError::InvalidConfigValueError {
                field: "scoring.policy".to_string(),
                value: raw.to_string(),
                reason: "Valid policies: uniform, scaled".to_string(),
            })
    }

    pub fn enforce_transit_total(&self) -> Option<bool> {
        self.scoring.as_ref().and_then(|s| s.enforce_transit_total)
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        let Some(raw) = self.output.as_ref().and_then(|o| o.format.as_deref()) else {
            return Ok(None);
        };
        OutputFormat::parse(raw)
            .map(Some)
            .ok_or_else(|| IndicatorError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: raw.to_string(),
                reason: "Valid formats: text, json, csv".to_string(),
            })
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn scoring_options(&self) -> Result<ScoringOptions> {
        Ok(ScoringOptions {
            policy: self.policy()?.unwrap_or_default(),
            enforce_transit_total: self.enforce_transit_total().unwrap_or(false),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
