mod criteria;
mod weights;

use crate::error::{Result, ScoreError};
use crate::types::category::Category;
use crate::types::criterion::Criterion;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(criteria::evaluation_matrix()));

/// Process-wide criterion catalog, built on first use and never mutated.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Clone)]
pub struct Catalog {
    criteria: Vec<Criterion>,
}

impl Catalog {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn all_criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn applicable_criteria(&self, category: Category) -> Vec<&Criterion> {
        self.criteria
            .iter()
            .filter(|criterion| criterion.applies_to(category))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Criterion> {
        self.get(id)
            .ok_or_else(|| ScoreError::UnknownCriterion(id.to_string()))
    }
}

pub type WeightTable = BTreeMap<String, f64>;

/// Base weight tables per category. Built once at startup (built-ins plus
/// any configured overrides) and passed by reference afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTables {
    tables: BTreeMap<Category, WeightTable>,
}

impl WeightTables {
    pub fn builtin() -> Self {
        let tables = Category::ALL
            .into_iter()
            .map(|category| {
                let table = weights::base_table(category)
                    .iter()
                    .map(|(id, weight)| (id.to_string(), *weight))
                    .collect();
                (category, table)
            })
            .collect();
        Self { tables }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn insert(&mut self, category: Category, table: WeightTable) {
        self.tables.insert(category, table);
    }

    pub fn table(&self, category: Category) -> Result<&WeightTable> {
        self.tables
            .get(&category)
            .ok_or_else(|| ScoreError::UnknownCategory(category.to_string()))
    }

    /// Merges per-criterion overrides over the current tables.
    ///
    /// Every overridden criterion must exist and apply to the category, each
    /// weight must lie in (0, 1], and the merged table may not exceed 1.
    pub fn with_overrides(
        mut self,
        overrides: &BTreeMap<Category, BTreeMap<String, f64>>,
        catalog: &Catalog,
    ) -> Result<Self> {
        for (category, entries) in overrides {
            for (id, weight) in entries {
                let criterion = catalog.get(id).ok_or_else(|| {
                    ScoreError::ConfigParse(format!(
                        "weights.{category} references unknown criterion: {id}"
                    ))
                })?;
                if !criterion.applies_to(*category) {
                    return Err(ScoreError::ConfigParse(format!(
                        "weights.{category}.{id} is not applicable to {category}"
                    )));
                }
                if !(*weight > 0.0 && *weight <= 1.0) {
                    return Err(ScoreError::ConfigParse(format!(
                        "weights.{category}.{id} must be in (0.0, 1.0] (found {weight})"
                    )));
                }
            }

            let table = self.tables.entry(*category).or_default();
            for (id, weight) in entries {
                table.insert(id.clone(), *weight);
            }
            let sum: f64 = table.values().sum();
            if sum > 1.0 + 0.001 {
                return Err(ScoreError::ConfigParse(format!(
                    "weights.{category} sums to {sum:.3}, above 1.0"
                )));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::criterion::{InputKind, OptionMatch, Unit, MAX_SCORE};
    use std::collections::HashSet;

    fn range_bounds(matcher: &OptionMatch) -> Option<(f64, f64)> {
        match matcher {
            OptionMatch::Range { min, max } => Some((
                min.unwrap_or(f64::NEG_INFINITY),
                max.unwrap_or(f64::INFINITY),
            )),
            OptionMatch::Value { .. } => None,
        }
    }

    #[test]
    fn criterion_ids_are_unique() {
        let mut seen = HashSet::new();
        for criterion in catalog().all_criteria() {
            assert!(seen.insert(criterion.id), "duplicate id {}", criterion.id);
        }
    }

    #[test]
    fn option_scores_stay_within_bounds() {
        for criterion in catalog().all_criteria() {
            assert!(!criterion.options.is_empty(), "{} has no options", criterion.id);
            for option in &criterion.options {
                assert!(
                    (0.0..=MAX_SCORE).contains(&option.score),
                    "{} option {} scores {}",
                    criterion.id,
                    option.label,
                    option.score
                );
            }
        }
    }

    #[test]
    fn select_criteria_have_unique_values_and_no_ranges() {
        for criterion in catalog()
            .all_criteria()
            .iter()
            .filter(|criterion| criterion.input_kind == InputKind::Select)
        {
            let mut values = HashSet::new();
            for option in &criterion.options {
                match option.matcher {
                    OptionMatch::Value { value } => {
                        assert!(values.insert(value), "{} repeats {value}", criterion.id)
                    }
                    OptionMatch::Range { .. } => panic!("{} mixes ranges in a select", criterion.id),
                }
            }
        }
    }

    #[test]
    fn numeric_ranges_cover_the_line_without_overlaps() {
        for criterion in catalog()
            .all_criteria()
            .iter()
            .filter(|criterion| criterion.input_kind == InputKind::Numeric)
        {
            let resolution = match criterion.unit {
                Some(Unit::Count) => 1.0,
                _ => 0.01,
            };
            let mut bounds = criterion
                .options
                .iter()
                .map(|option| range_bounds(&option.matcher).expect("numeric options use ranges"))
                .collect::<Vec<_>>();
            bounds.sort_by(|a, b| a.0.total_cmp(&b.0));

            assert!(bounds[0].0 <= 0.0, "{} does not start at zero", criterion.id);
            assert!(
                bounds[bounds.len() - 1].1.is_infinite(),
                "{} has no open upper band",
                criterion.id
            );
            for pair in bounds.windows(2) {
                let (previous, next) = (pair[0], pair[1]);
                assert!(previous.0 <= previous.1, "{} has an inverted band", criterion.id);
                assert!(next.0 >= previous.1, "{} has overlapping bands", criterion.id);
                assert!(
                    next.0 - previous.1 <= resolution + 1e-9,
                    "{} leaves a gap between {} and {}",
                    criterion.id,
                    previous.1,
                    next.0
                );
            }
        }
    }

    #[test]
    fn builtin_tables_reference_applicable_criteria_and_sum_to_one() {
        let tables = WeightTables::builtin();
        for category in Category::ALL {
            let table = tables.table(category).expect("builtin table should exist");
            for id in table.keys() {
                let criterion = catalog().require(id).expect("weighted criterion should exist");
                assert!(criterion.applies_to(category), "{id} not applicable to {category}");
            }
            let sum: f64 = table.values().sum();
            assert!((sum - 1.0).abs() < 0.001, "{category} sums to {sum}");
        }
    }

    #[test]
    fn builtin_tables_cover_every_applicable_criterion() {
        let tables = WeightTables::builtin();
        for category in Category::ALL {
            let table = tables.table(category).expect("builtin table should exist");
            for criterion in catalog().applicable_criteria(category) {
                assert!(
                    table.contains_key(criterion.id),
                    "{} has no weight in {category}",
                    criterion.id
                );
            }
        }
    }

    #[test]
    fn applicable_criteria_filters_by_category() {
        let blog = catalog().applicable_criteria(Category::PortalBlog);
        assert!(blog.iter().any(|criterion| criterion.id == "cpm"));
        assert!(blog.iter().all(|criterion| !criterion.id.starts_with("tv_")));
        assert!(blog.iter().all(|criterion| criterion.id != "video_views"));

        let tv = catalog().applicable_criteria(Category::TvBundle);
        assert!(tv.iter().any(|criterion| criterion.id == "tv_daypart"));
        assert!(tv.iter().all(|criterion| criterion.id != "branded_content_text"));
    }

    #[test]
    fn require_reports_unknown_criterion() {
        let err = catalog().require("reach_of_god").expect_err("lookup should fail");
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_table_is_unknown_category() {
        let err = WeightTables::empty()
            .table(Category::PortalBlog)
            .expect_err("empty tables have no category");
        assert!(matches!(err, ScoreError::UnknownCategory(_)));
    }

    #[test]
    fn overrides_merge_and_validate() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            Category::PortalBlog,
            BTreeMap::from([("cpm".to_string(), 0.10)]),
        );
        let tables = WeightTables::builtin()
            .with_overrides(&overrides, catalog())
            .expect("lowering a weight should validate");
        let table = tables.table(Category::PortalBlog).expect("table should exist");
        assert_eq!(table.get("cpm"), Some(&0.10));

        overrides.insert(
            Category::PortalBlog,
            BTreeMap::from([("tv_daypart".to_string(), 0.10)]),
        );
        let err = WeightTables::builtin()
            .with_overrides(&overrides, catalog())
            .expect_err("tv criterion is not applicable to portal_blog");
        assert!(err.to_string().contains("not applicable"));

        overrides.insert(
            Category::PortalBlog,
            BTreeMap::from([("cpm".to_string(), 0.90)]),
        );
        let err = WeightTables::builtin()
            .with_overrides(&overrides, catalog())
            .expect_err("table above 1.0 should fail");
        assert!(err.to_string().contains("above 1.0"));
    }
}
