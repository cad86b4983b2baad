use crate::types::report::ScoreReport;

/// Plain-text brief of the active criteria, suitable as input for a
/// written analysis of the proposal.
pub fn to_brief(report: &ScoreReport) -> String {
    let mut output = format!(
        "{} ({}), version {}\n",
        report.proposal_name,
        report.category.title(),
        report.version_number
    );
    for line in report.criteria.iter().filter(|line| line.active) {
        output.push_str(&format!(
            "- {} [{}]: {:.2}/{:.0} ({})\n",
            line.label, line.indicator, line.score, report.max_score, line.matched_label
        ));
    }
    output.push_str(&format!(
        "Total: {:.2}/{:.0}\n",
        report.total_score, report.max_score
    ));
    output
}
