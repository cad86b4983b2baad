use crate::catalog::WeightTables;
use crate::error::Result;
use crate::types::category::Category;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Specified weights at or above this sum are treated as owning the whole
/// budget; float rounding in authored tables stays below it.
pub const FULL_BUDGET_THRESHOLD: f64 = 0.99;

pub type WeightMap = BTreeMap<String, f64>;

/// Normalized weights for the active criteria of a category.
///
/// Criteria listed in the category table keep their authored proportions;
/// unlisted ones split whatever budget the listed ones leave. The result
/// always sums to 1 unless every weight is zero. Fails only when the
/// category has no table.
pub fn resolve_weights(
    tables: &WeightTables,
    category: Category,
    active: &BTreeSet<String>,
) -> Result<WeightMap> {
    let table = tables.table(category)?;
    let mut weights = WeightMap::new();
    if active.is_empty() {
        return Ok(weights);
    }

    let mut specified_sum = 0.0;
    let mut unspecified = Vec::new();
    for id in active {
        match table.get(id) {
            Some(weight) => {
                weights.insert(id.clone(), *weight);
                specified_sum += weight;
            }
            None => unspecified.push(id.clone()),
        }
    }

    if specified_sum >= FULL_BUDGET_THRESHOLD {
        let scale = 1.0 / specified_sum;
        for weight in weights.values_mut() {
            *weight *= scale;
        }
        for id in unspecified {
            weights.insert(id, 0.0);
        }
        debug!(%category, specified_sum, "specified weights own the budget");
        return Ok(weights);
    }

    if !unspecified.is_empty() {
        let share = (1.0 - specified_sum) / unspecified.len() as f64;
        for id in unspecified {
            weights.insert(id, share);
        }
    }

    let total: f64 = weights.values().sum();
    if total > 0.0 && total != 1.0 {
        let scale = 1.0 / total;
        for weight in weights.values_mut() {
            *weight *= scale;
        }
    }
    debug!(%category, specified_sum, total, active = active.len(), "resolved weights");
    Ok(weights)
}
