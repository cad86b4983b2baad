pub mod csv;
pub mod json;
pub mod md;
pub mod narrative;

use crate::error::ScoreError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Csv,
    Brief,
}

pub fn render(
    report: &ScoreReport,
    format: OutputFormat,
    decimals: usize,
) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, decimals)),
        OutputFormat::Csv => csv::to_csv(report, decimals),
        OutputFormat::Brief => Ok(narrative::to_brief(report)),
    }
}
