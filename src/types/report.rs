use crate::catalog::Catalog;
use crate::engine::aggregate::breakdown;
use crate::engine::consolidate::SocialAggregate;
use crate::engine::derive::{tv_delivery, TvDelivery};
use crate::proposal::Proposal;
use crate::types::category::Category;
use crate::types::criterion::MAX_SCORE;
use crate::types::scoring::{CriterionLine, Score, ScoredVersion};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything a renderer needs for one scored version.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub proposal_id: String,
    pub proposal_name: String,
    pub category: Category,
    pub version_number: usize,
    pub created_at: DateTime<Utc>,
    pub answers_digest: String,
    pub total_score: Score,
    pub max_score: Score,
    pub cost_per_point: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialAggregate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tv_delivery: Option<TvDelivery>,
    pub criteria: Vec<CriterionLine>,
}

impl ScoreReport {
    /// Builds the report from the proposal's active version using the weights
    /// stored with it, so nothing is rescored.
    pub fn from_active_version(proposal: &Proposal, catalog: &Catalog) -> Option<Self> {
        let version = proposal.active_version()?;
        Some(Self::from_version(proposal, version, catalog))
    }

    pub fn from_version(proposal: &Proposal, version: &ScoredVersion, catalog: &Catalog) -> Self {
        // the resolver emits a weight for every active criterion
        let active = version.weights.keys().cloned().collect::<BTreeSet<_>>();
        let criteria = breakdown(
            catalog.applicable_criteria(version.category),
            &version.scores,
            &version.weights,
            &active,
        );
        let social = (!version.social.channels.is_empty()).then(|| version.social.clone());
        let tv_delivery = (version.category == Category::TvBundle)
            .then(|| tv_delivery(&version.answers));

        Self {
            proposal_id: proposal.id.clone(),
            proposal_name: proposal.name.clone(),
            category: version.category,
            version_number: version.version_number,
            created_at: version.created_at,
            answers_digest: version.answers_digest.clone(),
            total_score: version.total_score,
            max_score: MAX_SCORE,
            cost_per_point: proposal.cost_per_point(),
            social,
            tv_delivery,
            criteria,
        }
    }
}
