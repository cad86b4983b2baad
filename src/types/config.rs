use crate::catalog::{Catalog, WeightTables};
use crate::error::{Result, ScoreError};
use crate::types::category::Category;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
    /// Per-category criterion weight overrides, keyed by category key.
    #[serde(default)]
    pub weights: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Md,
    Json,
    Csv,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
    pub decimals: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ScoreConfig {
    pub const DEFAULT_DECIMALS: usize = 2;
    pub const MAX_DECIMALS: usize = 6;

    pub fn report_format(&self) -> ReportFormatSetting {
        self.report
            .as_ref()
            .and_then(|report| report.format)
            .unwrap_or(ReportFormatSetting::Md)
    }

    pub fn decimals(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.decimals)
            .unwrap_or(Self::DEFAULT_DECIMALS)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or("warn")
    }

    pub fn weight_overrides(&self) -> Result<BTreeMap<Category, BTreeMap<String, f64>>> {
        self.weights
            .iter()
            .map(|(key, table)| {
                let category = key.parse::<Category>().map_err(|_| {
                    ScoreError::ConfigParse(format!("weights.{key} is not a known category"))
                })?;
                Ok((category, table.clone()))
            })
            .collect()
    }

    /// Built-in tables with this config's overrides merged in.
    pub fn weight_tables(&self, catalog: &Catalog) -> Result<WeightTables> {
        WeightTables::builtin().with_overrides(&self.weight_overrides()?, catalog)
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.decimals() > Self::MAX_DECIMALS {
            return Err(ScoreError::ConfigParse(format!(
                "report.decimals must be between 0 and {} (found {})",
                Self::MAX_DECIMALS,
                self.decimals()
            )));
        }
        if self.log_level().trim().is_empty() {
            return Err(ScoreError::ConfigParse(
                "logging.level cannot be empty".to_string(),
            ));
        }
        self.weight_tables(catalog).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ScoreConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.report_format(), ReportFormatSetting::Md);
        assert_eq!(cfg.decimals(), 2);
        assert_eq!(cfg.log_level(), "warn");
        assert!(cfg.validate(catalog()).is_ok());
        assert_eq!(
            cfg.weight_tables(catalog()).expect("defaults should build"),
            WeightTables::builtin()
        );
    }

    #[test]
    fn parse_full_config() {
        let cfg: ScoreConfig = toml::from_str(
            r#"
[report]
format = "json"
decimals = 3

[logging]
level = "debug"

[weights.portal_blog]
cpm = 0.15
"#,
        )
        .expect("full config should parse");
        assert_eq!(cfg.report_format(), ReportFormatSetting::Json);
        assert_eq!(cfg.decimals(), 3);
        assert_eq!(cfg.log_level(), "debug");
        let tables = cfg.weight_tables(catalog()).expect("override should apply");
        assert_eq!(
            tables
                .table(Category::PortalBlog)
                .expect("table should exist")
                .get("cpm"),
            Some(&0.15)
        );
    }

    #[test]
    fn validate_rejects_unknown_category_key() {
        let cfg: ScoreConfig = toml::from_str(
            r#"
[weights.radio]
cpm = 0.1
"#,
        )
        .expect("config should parse");
        let err = cfg.validate(catalog()).expect_err("validation should fail");
        assert!(err.to_string().contains("weights.radio is not a known category"));
    }

    #[test]
    fn validate_rejects_out_of_range_weight() {
        let cfg: ScoreConfig = toml::from_str(
            r#"
[weights.tv_bundle]
tv_daypart = 0.0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate(catalog()).expect_err("validation should fail");
        assert!(err.to_string().contains("must be in (0.0, 1.0]"));
    }

    #[test]
    fn validate_rejects_excessive_decimals() {
        let cfg: ScoreConfig = toml::from_str(
            r#"
[report]
decimals = 9
"#,
        )
        .expect("config should parse");
        let err = cfg.validate(catalog()).expect_err("validation should fail");
        assert!(err.to_string().contains("report.decimals"));
    }

    #[test]
    fn unknown_format_fails_to_parse() {
        let result = toml::from_str::<ScoreConfig>(
            r#"
[report]
format = "pdf"
"#,
        );
        assert!(result.is_err());
    }
}
