use crate::catalog::WeightTables;
use crate::engine::weights::{resolve_weights, WeightMap};
use crate::error::Result;
use crate::types::category::Category;
use crate::types::criterion::Criterion;
use crate::types::scoring::{CriterionLine, Score, ScoreEntry};
use std::collections::{BTreeMap, BTreeSet};

/// Weighted sum of active scores. Inactive criteria contribute nothing;
/// their budget was already redistributed by the resolver.
pub fn weighted_total(
    scores: &BTreeMap<String, ScoreEntry>,
    weights: &WeightMap,
    active: &BTreeSet<String>,
) -> Score {
    active
        .iter()
        .map(|id| {
            let score = scores.get(id).map_or(0.0, |entry| entry.score);
            score * weights.get(id).copied().unwrap_or(0.0)
        })
        .sum()
}

/// Resolved weights and the total they produce for one active set.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTotal {
    pub weights: WeightMap,
    pub total_score: Score,
}

/// Resolves weights for `active` and sums the weighted scores. An empty
/// active set totals 0 without consulting the weight table.
pub fn compute_total(
    tables: &WeightTables,
    category: Category,
    scores: &BTreeMap<String, ScoreEntry>,
    active: &BTreeSet<String>,
) -> Result<WeightedTotal> {
    if active.is_empty() {
        return Ok(WeightedTotal {
            weights: WeightMap::new(),
            total_score: 0.0,
        });
    }
    let weights = resolve_weights(tables, category, active)?;
    let total_score = weighted_total(scores, &weights, active);
    Ok(WeightedTotal {
        weights,
        total_score,
    })
}

/// Export rows in the given criterion order.
pub fn breakdown<'a>(
    criteria: impl IntoIterator<Item = &'a Criterion>,
    scores: &BTreeMap<String, ScoreEntry>,
    weights: &WeightMap,
    active: &BTreeSet<String>,
) -> Vec<CriterionLine> {
    criteria
        .into_iter()
        .filter_map(|criterion| {
            let entry = scores.get(criterion.id)?;
            let is_active = active.contains(criterion.id);
            let weight = if is_active {
                weights.get(criterion.id).copied().unwrap_or(0.0)
            } else {
                0.0
            };
            Some(CriterionLine {
                id: criterion.id.to_string(),
                label: criterion.label.to_string(),
                indicator: criterion.indicator.to_string(),
                score: entry.score,
                matched_label: entry.matched_label.clone(),
                weight,
                weighted_score: entry.score * weight,
                active: is_active,
            })
        })
        .collect()
}
