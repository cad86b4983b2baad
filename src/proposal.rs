use crate::engine::Engine;
use crate::error::{Result, ScoreError};
use crate::types::answers::AnswerSet;
use crate::types::category::Category;
use crate::types::scoring::ScoredVersion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A media-buy proposal and its append-only history of scored versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub vehicle: Option<String>,
    #[serde(default)]
    pub investment: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub proposal_date: Option<String>,
    #[serde(default)]
    pub campaign_period: Option<String>,
    #[serde(default)]
    category: Option<Category>,
    #[serde(default)]
    versions: Vec<ScoredVersion>,
    /// 1-based; 0 while no version exists.
    #[serde(default)]
    current_version: usize,
}

impl Proposal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// The category may change freely until the first version is scored.
    pub fn assign_category(&mut self, category: Category) -> Result<()> {
        match self.category {
            Some(current) if current != category && !self.versions.is_empty() => {
                Err(ScoreError::CategoryLocked {
                    current: current.to_string(),
                    requested: category.to_string(),
                })
            }
            _ => {
                self.category = Some(category);
                Ok(())
            }
        }
    }

    /// Scores the answers and appends them as the new current version.
    /// Earlier versions are never rescored.
    pub fn submit(
        &mut self,
        engine: &Engine<'_>,
        answers: &AnswerSet,
        created_at: DateTime<Utc>,
    ) -> Result<&ScoredVersion> {
        let category = self.category.ok_or(ScoreError::CategoryMissing)?;
        let evaluation = engine.evaluate(category, answers)?;
        let version_number = self.versions.len() + 1;
        self.versions
            .push(evaluation.into_version(version_number, created_at)?);
        self.current_version = version_number;
        tracing::info!(proposal = %self.id, version_number, "appended scored version");
        Ok(&self.versions[version_number - 1])
    }

    pub fn versions(&self) -> &[ScoredVersion] {
        &self.versions
    }

    pub fn current_version_number(&self) -> usize {
        self.current_version
    }

    pub fn active_version(&self) -> Option<&ScoredVersion> {
        self.current_version
            .checked_sub(1)
            .and_then(|index| self.versions.get(index))
    }

    pub fn select_version(&mut self, version_number: usize) -> Result<()> {
        if version_number == 0 || version_number > self.versions.len() {
            return Err(ScoreError::VersionOutOfRange {
                requested: version_number,
                available: self.versions.len(),
            });
        }
        self.current_version = version_number;
        Ok(())
    }

    /// Investment per scored point of the active version.
    pub fn cost_per_point(&self) -> Option<f64> {
        self.active_version()
            .filter(|version| version.total_score > 0.0 && self.investment > 0.0)
            .map(|version| self.investment / version.total_score)
    }
}

/// Reads a proposal store: a JSON array of proposals with their versions.
pub fn load_store(path: &Path) -> Result<Vec<Proposal>> {
    if !path.exists() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_store(path: &Path, proposals: &[Proposal]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(proposals)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

pub fn find_mut<'a>(proposals: &'a mut [Proposal], id: &str) -> Result<&'a mut Proposal> {
    proposals
        .iter_mut()
        .find(|proposal| proposal.id == id)
        .ok_or_else(|| ScoreError::ProposalNotFound(id.to_string()))
}
