use crate::error::ScoreError;
use crate::types::report::ScoreReport;
use ::csv::Writer;

const HEADER: [&str; 8] = [
    "id",
    "label",
    "indicator",
    "score",
    "matched_label",
    "weight",
    "weighted_score",
    "active",
];

/// One row per criterion followed by a `total` row.
pub fn to_csv(report: &ScoreReport, decimals: usize) -> Result<String, ScoreError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for line in &report.criteria {
        let score = format!("{:.*}", decimals, line.score);
        let weight = format!("{:.*}", decimals.max(4), line.weight);
        let weighted = format!("{:.*}", decimals, line.weighted_score);
        writer.write_record([
            line.id.as_str(),
            line.label.as_str(),
            line.indicator.as_str(),
            score.as_str(),
            line.matched_label.as_str(),
            weight.as_str(),
            weighted.as_str(),
            if line.active { "true" } else { "false" },
        ])?;
    }
    let total = format!("{:.*}", decimals, report.total_score);
    writer.write_record(["total", "", "", "", "", "", total.as_str(), ""])?;

    let bytes = writer
        .into_inner()
        .map_err(|err| ScoreError::Io(err.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|err| ScoreError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}
