use crate::engine::numbers::parse_decimal;
use crate::proposal::Proposal;
use crate::types::answers::RawValue;
use crate::types::category::Category;
use crate::types::scoring::ScoredVersion;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchmarkStats {
    pub avg_score: f64,
    pub avg_investment: f64,
    pub avg_cpm: f64,
    pub avg_cpc: f64,
    pub avg_regional_reach: f64,
    pub avg_cost_per_point: f64,
    pub proposal_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Benchmarks {
    pub overall: BenchmarkStats,
    pub by_region: BTreeMap<String, BenchmarkStats>,
    pub by_category: BTreeMap<Category, BenchmarkStats>,
}

fn positive_answer(version: &ScoredVersion, key: &str) -> Option<f64> {
    version
        .answers
        .get(key)
        .and_then(|raw| match raw {
            RawValue::Number(number) => Some(*number),
            RawValue::Text(text) => parse_decimal(text),
            _ => None,
        })
        .filter(|value| *value > 0.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn stats_for(proposals: &[&Proposal]) -> BenchmarkStats {
    let scored = proposals
        .iter()
        .filter_map(|proposal| proposal.active_version().map(|version| (*proposal, version)))
        .collect::<Vec<_>>();
    // a set without any scored version reports nothing, not even its size
    if scored.is_empty() {
        return BenchmarkStats::default();
    }

    let scores = scored
        .iter()
        .map(|(_, version)| version.total_score)
        .filter(|score| *score > 0.0)
        .collect::<Vec<_>>();
    let investments = proposals
        .iter()
        .map(|proposal| proposal.investment)
        .collect::<Vec<_>>();
    let cpms = scored
        .iter()
        .filter_map(|(_, version)| positive_answer(version, "cpm"))
        .collect::<Vec<_>>();
    let cpcs = scored
        .iter()
        .filter_map(|(_, version)| positive_answer(version, "cpc"))
        .collect::<Vec<_>>();
    let regional = scored
        .iter()
        .filter_map(|(_, version)| {
            positive_answer(version, "demographic_rs_portal")
                .or_else(|| positive_answer(version, "demographic_rs_social"))
        })
        .collect::<Vec<_>>();
    let costs = scored
        .iter()
        .filter(|(proposal, version)| proposal.investment > 0.0 && version.total_score > 0.0)
        .map(|(proposal, version)| proposal.investment / version.total_score)
        .collect::<Vec<_>>();

    BenchmarkStats {
        avg_score: mean(&scores),
        avg_investment: mean(&investments),
        avg_cpm: mean(&cpms),
        avg_cpc: mean(&cpcs),
        avg_regional_reach: mean(&regional),
        avg_cost_per_point: mean(&costs),
        proposal_count: proposals.len(),
    }
}

/// Reference averages overall, per region and per category, computed over
/// each proposal's active version.
pub fn calculate_benchmarks(proposals: &[Proposal]) -> Benchmarks {
    let mut by_region: BTreeMap<String, Vec<&Proposal>> = BTreeMap::new();
    let mut by_category: BTreeMap<Category, Vec<&Proposal>> = BTreeMap::new();
    for proposal in proposals {
        if let Some(region) = proposal.region.as_ref().filter(|region| !region.is_empty()) {
            by_region.entry(region.clone()).or_default().push(proposal);
        }
        if let Some(category) = proposal.category() {
            by_category.entry(category).or_default().push(proposal);
        }
    }

    Benchmarks {
        overall: stats_for(&proposals.iter().collect::<Vec<_>>()),
        by_region: by_region
            .into_iter()
            .map(|(region, group)| (region, stats_for(&group)))
            .collect(),
        by_category: by_category
            .into_iter()
            .map(|(category, group)| (category, stats_for(&group)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, WeightTables};
    use crate::engine::Engine;
    use crate::types::answers::AnswerSet;
    use chrono::{TimeZone, Utc};

    fn scored(id: &str, region: &str, investment: f64, cpm: &str) -> Proposal {
        let tables = WeightTables::builtin();
        let engine = Engine::new(catalog(), &tables);
        let mut proposal = Proposal::new(id, id);
        proposal.region = Some(region.to_string());
        proposal.investment = investment;
        proposal
            .assign_category(Category::PortalBlog)
            .expect("assignment should succeed");
        let mut answers = AnswerSet::new().with("cpm", cpm);
        for criterion in catalog().applicable_criteria(Category::PortalBlog) {
            if criterion.id != "cpm" {
                answers.exclude(criterion.id);
            }
        }
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("valid date");
        proposal
            .submit(&engine, &answers, created_at)
            .expect("submit should succeed");
        proposal
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let benchmarks = calculate_benchmarks(&[]);
        assert_eq!(benchmarks.overall, BenchmarkStats::default());
        assert!(benchmarks.by_region.is_empty());
    }

    #[test]
    fn sets_without_scored_versions_are_all_zero() {
        let mut draft = Proposal::new("draft", "Draft");
        draft.investment = 2_500.0;
        draft.region = Some("Serra".to_string());
        let benchmarks = calculate_benchmarks(&[draft]);
        assert_eq!(benchmarks.overall, BenchmarkStats::default());
        assert_eq!(benchmarks.by_region["Serra"], BenchmarkStats::default());
    }

    #[test]
    fn drafts_still_count_toward_investment_beside_scored_proposals() {
        let mut draft = Proposal::new("draft", "Draft");
        draft.investment = 1_000.0;
        draft.region = Some("Serra".to_string());
        let proposals = vec![scored("a", "Serra", 3_000.0, "10"), draft];
        let serra = &calculate_benchmarks(&proposals).by_region["Serra"];
        assert_eq!(serra.proposal_count, 2);
        assert!((serra.avg_investment - 2_000.0).abs() < 1e-9);
        assert!((serra.avg_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn averages_group_by_region_and_category() {
        let proposals = vec![
            scored("a", "Serra", 3_000.0, "10"),
            scored("b", "Serra", 6_000.0, "30"),
            scored("c", "Litoral", 1_000.0, "70"),
        ];
        let benchmarks = calculate_benchmarks(&proposals);

        assert_eq!(benchmarks.overall.proposal_count, 3);
        // "c" scores zero and drops out of the score average
        assert!((benchmarks.overall.avg_score - 2.5).abs() < 1e-9);
        assert!((benchmarks.overall.avg_investment - 10_000.0 / 3.0).abs() < 1e-9);
        assert!((benchmarks.overall.avg_cpm - 110.0 / 3.0).abs() < 1e-9);

        let serra = &benchmarks.by_region["Serra"];
        assert_eq!(serra.proposal_count, 2);
        assert!((serra.avg_cost_per_point - 2_000.0).abs() < 1e-9);
        assert_eq!(benchmarks.by_region["Litoral"].avg_score, 0.0);
        assert_eq!(benchmarks.by_category[&Category::PortalBlog].proposal_count, 3);
    }
}
