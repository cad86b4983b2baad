use crate::engine::consolidate::SocialAggregate;
use crate::types::answers::AnswerSet;
use crate::types::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Score = f64;

pub const LABEL_NOT_CONSIDERED: &str = "not considered";
pub const LABEL_NOT_AVAILABLE: &str = "N/A";
pub const LABEL_NO_VIDEO_CHANNEL: &str = "N/A (no video channel selected)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: Score,
    pub matched_label: String,
}

impl ScoreEntry {
    pub fn new(score: Score, matched_label: impl Into<String>) -> Self {
        Self {
            score,
            matched_label: matched_label.into(),
        }
    }

    pub fn not_considered() -> Self {
        Self::new(0.0, LABEL_NOT_CONSIDERED)
    }

    pub fn not_available() -> Self {
        Self::new(0.0, LABEL_NOT_AVAILABLE)
    }
}

/// One export row: enough to rebuild the total without re-running scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionLine {
    pub id: String,
    pub label: String,
    pub indicator: String,
    pub score: Score,
    pub matched_label: String,
    pub weight: f64,
    pub weighted_score: f64,
    pub active: bool,
}

/// Immutable snapshot of one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVersion {
    pub version_number: usize,
    pub created_at: DateTime<Utc>,
    pub category: Category,
    pub answers: AnswerSet,
    pub answers_digest: String,
    pub scores: BTreeMap<String, ScoreEntry>,
    pub weights: BTreeMap<String, f64>,
    pub social: SocialAggregate,
    pub total_score: Score,
}
