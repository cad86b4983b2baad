pub mod aggregate;
pub mod applicability;
pub mod consolidate;
pub mod derive;
pub mod numbers;
pub mod scorer;
pub mod weights;

use crate::catalog::{Catalog, WeightTables};
use crate::error::Result;
use crate::types::answers::{AnswerSet, ChannelMetric, SocialChannel, NOT_CONSIDERED_SUFFIX, SOCIAL_CHANNELS_KEY};
use crate::types::category::Category;
use crate::types::scoring::{CriterionLine, Score, ScoreEntry, ScoredVersion, LABEL_NO_VIDEO_CHANNEL};
use applicability::{active_criteria, is_applicable, ApplicabilityContext};
use chrono::{DateTime, Utc};
use consolidate::SocialAggregate;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};
use weights::WeightMap;

/// Result of running the full pipeline over one answer set.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub category: Category,
    pub answers: AnswerSet,
    pub social: SocialAggregate,
    pub scores: BTreeMap<String, ScoreEntry>,
    pub weights: WeightMap,
    pub active: BTreeSet<String>,
    pub lines: Vec<CriterionLine>,
    pub total_score: Score,
}

impl Evaluation {
    pub fn into_version(
        self,
        version_number: usize,
        created_at: DateTime<Utc>,
    ) -> Result<ScoredVersion> {
        Ok(ScoredVersion {
            version_number,
            created_at,
            category: self.category,
            answers_digest: answers_digest(&self.answers)?,
            answers: self.answers,
            scores: self.scores,
            weights: self.weights,
            social: self.social,
            total_score: self.total_score,
        })
    }
}

/// Scoring pipeline over injected, read-only configuration.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    catalog: &'a Catalog,
    tables: &'a WeightTables,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a Catalog, tables: &'a WeightTables) -> Self {
        Self { catalog, tables }
    }

    /// Consolidate, score, weight and total. Only a missing weight table
    /// for `category` can fail.
    pub fn evaluate(&self, category: Category, answers: &AnswerSet) -> Result<Evaluation> {
        self.warn_unknown_keys(answers);

        let social = consolidate::consolidate(answers);
        let answers = consolidate::apply(answers, &social);
        let context = ApplicabilityContext::new(category, &social);
        let applicable = self.catalog.applicable_criteria(category);

        let mut scores = BTreeMap::new();
        for criterion in &applicable {
            let entry = if is_applicable(criterion, &context) {
                scorer::score_criterion(
                    criterion,
                    answers.get(criterion.id),
                    answers.is_excluded(criterion.id),
                )
            } else {
                ScoreEntry::new(0.0, LABEL_NO_VIDEO_CHANNEL)
            };
            scores.insert(criterion.id.to_string(), entry);
        }

        let active = active_criteria(applicable.iter().copied(), &context, &answers);
        let aggregate::WeightedTotal {
            weights,
            total_score,
        } = aggregate::compute_total(self.tables, category, &scores, &active)?;
        let lines = aggregate::breakdown(applicable.iter().copied(), &scores, &weights, &active);
        debug!(%category, active = active.len(), total_score, "evaluated answers");

        Ok(Evaluation {
            category,
            answers,
            social,
            scores,
            weights,
            active,
            lines,
            total_score,
        })
    }

    /// Weights for the category's applicable criteria minus `excluded`.
    pub fn weights_for(&self, category: Category, excluded: &[String]) -> Result<WeightMap> {
        for id in excluded {
            self.catalog.require(id)?;
        }
        let active = self
            .catalog
            .applicable_criteria(category)
            .into_iter()
            .map(|criterion| criterion.id.to_string())
            .filter(|id| !excluded.contains(id))
            .collect();
        weights::resolve_weights(self.tables, category, &active)
    }

    /// Re-runs the engine over a stored version's answers.
    pub fn recompute(&self, version: &ScoredVersion) -> Result<Evaluation> {
        self.evaluate(version.category, &version.answers)
    }

    fn warn_unknown_keys(&self, answers: &AnswerSet) {
        for key in answers.keys() {
            if !self.is_known_key(key) {
                warn!(key, "ignoring unknown answer key");
            }
        }
    }

    fn is_known_key(&self, key: &str) -> bool {
        let criterion_id = key.strip_suffix(NOT_CONSIDERED_SUFFIX).unwrap_or(key);
        if self.catalog.get(criterion_id).is_some() || key == SOCIAL_CHANNELS_KEY {
            return true;
        }
        ChannelMetric::ALL.iter().any(|metric| {
            key.strip_prefix(metric.prefix())
                .and_then(|rest| rest.strip_prefix('_'))
                .and_then(SocialChannel::from_slug)
                .is_some()
        })
    }
}

/// SHA-256 over the canonical JSON of the answers.
pub fn answers_digest(answers: &AnswerSet) -> Result<String> {
    let canonical = serde_json::to_vec(answers)?;
    let digest = Sha256::digest(&canonical);
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}
