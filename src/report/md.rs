use crate::types::report::ScoreReport;

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn to_markdown(report: &ScoreReport, decimals: usize) -> String {
    let mut output = String::new();
    output.push_str("# Proposal Score Report\n\n");
    output.push_str(&format!(
        "Proposal: {} ({})\n",
        report.proposal_name, report.proposal_id
    ));
    output.push_str(&format!(
        "Category: {} ({})\n",
        report.category.title(),
        report.category
    ));
    output.push_str(&format!(
        "Version: {} ({})\n",
        report.version_number,
        report.created_at.to_rfc3339()
    ));
    output.push_str(&format!(
        "Total score: {:.*} / {:.*}\n",
        decimals, report.total_score, decimals, report.max_score
    ));
    if let Some(cost) = report.cost_per_point {
        output.push_str(&format!("Cost per point: {:.2}\n", cost));
    }
    output.push('\n');

    output.push_str("## Criteria\n\n");
    output.push_str("| Criterion | Answer | Score | Weight | Weighted |\n");
    output.push_str("|---|---|---|---|---|\n");
    for line in &report.criteria {
        let weight = if line.active {
            format!("{:.1}%", line.weight * 100.0)
        } else {
            "-".to_string()
        };
        output.push_str(&format!(
            "| {} | {} | {:.*} | {} | {:.*} |\n",
            cell(&line.label),
            cell(&line.matched_label),
            decimals,
            line.score,
            weight,
            decimals,
            line.weighted_score
        ));
    }
    output.push('\n');

    if let Some(social) = &report.social {
        output.push_str("## Social Channels\n\n");
        let channels = social
            .channels
            .iter()
            .map(|channel| channel.slug())
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("- channels: {channels}\n"));
        output.push_str(&format!("- total followers: {:.0}\n", social.total_followers));
        output.push_str(&format!("- average reach: {:.2}%\n", social.average_reach));
        output.push_str(&format!(
            "- average regional audience: {:.2}%\n",
            social.average_regional_audience
        ));
        match social.average_video_views {
            Some(views) => output.push_str(&format!("- average video views: {:.0}\n", views)),
            None => output.push_str("- average video views: no video channel selected\n"),
        }
        output.push_str(&format!("- total insertions: {:.0}\n\n", social.total_insertions));
    }

    if let Some(delivery) = &report.tv_delivery {
        output.push_str("## TV Delivery\n\n");
        output.push_str(&format!("- spots: {:.0}\n", delivery.total_spots));
        output.push_str(&format!("- seconds on air: {:.0}\n", delivery.total_seconds));
        output.push_str(&format!("- hours on air: {:.2}\n\n", delivery.total_hours));
    }

    output.push_str(&format!("Answers digest: `{}`\n", report.answers_digest));
    output
}
