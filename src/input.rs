use crate::engine::derive::{insertion_days_from_period, weekdays_only};
use crate::error::{Result, ScoreError};
use crate::proposal::Proposal;
use crate::types::answers::AnswerSet;
use crate::types::category::Category;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const INSERTION_DAYS_ID: &str = "tv_insertion_days";

/// Proposal metadata carried alongside the answers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProposalMeta {
    pub id: Option<String>,
    pub name: Option<String>,
    pub vehicle: Option<String>,
    #[serde(default)]
    pub investment: f64,
    pub city: Option<String>,
    pub region: Option<String>,
    pub proposal_date: Option<String>,
    pub campaign_period: Option<String>,
    /// Count only weekdays when deriving TV insertion days.
    #[serde(default)]
    pub weekdays_only: bool,
}

/// A questionnaire submission as written on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerFile {
    pub category: Option<String>,
    #[serde(default)]
    pub proposal: ProposalMeta,
    #[serde(default)]
    pub answers: AnswerSet,
}

impl AnswerFile {
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScoreError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let file = Self::parse(&content)
            .map_err(|err| ScoreError::InputParse(format!("{}: {}", path.display(), err)))?;
        debug!(path = %path.display(), answers = file.answers.len(), "loaded answer file");
        Ok(file)
    }

    /// `explicit` beats the file's own `category` key.
    pub fn resolve_category(&self, explicit: Option<&str>) -> Result<Category> {
        match explicit.or(self.category.as_deref()) {
            Some(key) => key.parse(),
            None => Err(ScoreError::CategoryMissing),
        }
    }

    /// Answers with TV insertion days filled in from the campaign period
    /// when the file leaves them blank.
    pub fn prepared_answers(&self, category: Category) -> AnswerSet {
        let mut answers = self.answers.clone();
        if category != Category::TvBundle
            || answers.is_excluded(INSERTION_DAYS_ID)
            || answers
                .get(INSERTION_DAYS_ID)
                .is_some_and(|raw| !raw.is_empty())
        {
            return answers;
        }
        let derived = self
            .proposal
            .campaign_period
            .as_deref()
            .and_then(insertion_days_from_period)
            .map(|days| {
                if self.proposal.weekdays_only {
                    weekdays_only(days)
                } else {
                    days
                }
            });
        if let Some(days) = derived {
            debug!(days, "derived insertion days from campaign period");
            answers.set(INSERTION_DAYS_ID, f64::from(days));
        }
        answers
    }

    pub fn to_proposal(&self, fallback_id: &str) -> Proposal {
        let id = self
            .proposal
            .id
            .clone()
            .unwrap_or_else(|| fallback_id.to_string());
        let mut proposal = Proposal::new(id.clone(), id);
        self.apply_metadata(&mut proposal);
        proposal
    }

    /// Overwrites a stored proposal's descriptive fields. Identity, category
    /// and versions are left alone.
    pub fn apply_metadata(&self, proposal: &mut Proposal) {
        let meta = &self.proposal;
        if let Some(name) = &meta.name {
            proposal.name = name.clone();
        }
        proposal.vehicle = meta.vehicle.clone();
        proposal.investment = meta.investment;
        proposal.city = meta.city.clone();
        proposal.region = meta.region.clone();
        proposal.proposal_date = meta.proposal_date.clone();
        proposal.campaign_period = meta.campaign_period.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answers::RawValue;
    use std::fs;
    use tempfile::TempDir;

    const TV_FILE: &str = r#"
category = "tv_bundle"

[proposal]
name = "Evening news"
investment = 18000
region = "Serra"
campaign_period = "Mar-Apr (28 days)"

[answers]
tv_daily_insertions = "4"
tv_spot_duration = "30"
"#;

    #[test]
    fn parse_reads_metadata_and_answers() {
        let file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        assert_eq!(
            file.resolve_category(None).expect("category should resolve"),
            Category::TvBundle
        );
        assert_eq!(file.proposal.region.as_deref(), Some("Serra"));
        assert_eq!(file.answers.len(), 2);
    }

    #[test]
    fn explicit_category_wins() {
        let file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        assert_eq!(
            file.resolve_category(Some("youtube-bundle"))
                .expect("category should resolve"),
            Category::YoutubeBundle
        );
    }

    #[test]
    fn missing_category_is_an_error() {
        let file = AnswerFile::parse("[answers]\ncpm = \"10\"\n").expect("file should parse");
        assert!(matches!(
            file.resolve_category(None),
            Err(ScoreError::CategoryMissing)
        ));
        assert!(matches!(
            file.resolve_category(Some("radio")),
            Err(ScoreError::UnknownCategory(_))
        ));
    }

    #[test]
    fn insertion_days_come_from_campaign_period() {
        let file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        let answers = file.prepared_answers(Category::TvBundle);
        assert_eq!(answers.get(INSERTION_DAYS_ID), Some(&RawValue::Number(28.0)));
    }

    #[test]
    fn weekday_flag_trims_derived_days() {
        let mut file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        file.proposal.weekdays_only = true;
        let answers = file.prepared_answers(Category::TvBundle);
        assert_eq!(answers.get(INSERTION_DAYS_ID), Some(&RawValue::Number(20.0)));
    }

    #[test]
    fn oversized_campaign_periods_do_not_panic() {
        let mut file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        file.proposal.weekdays_only = true;
        file.proposal.campaign_period = Some("Mar (900000000 days)".to_string());
        let answers = file.prepared_answers(Category::TvBundle);
        assert_eq!(
            answers.get(INSERTION_DAYS_ID),
            Some(&RawValue::Number(642_857_142.0))
        );

        file.proposal.campaign_period = Some("200000000 months".to_string());
        let answers = file.prepared_answers(Category::TvBundle);
        assert!(answers.get(INSERTION_DAYS_ID).is_none());
    }

    #[test]
    fn explicit_insertion_days_are_kept() {
        let mut file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        file.answers.set(INSERTION_DAYS_ID, "12");
        let answers = file.prepared_answers(Category::TvBundle);
        assert_eq!(answers.get(INSERTION_DAYS_ID), Some(&RawValue::from("12")));
    }

    #[test]
    fn other_categories_are_untouched() {
        let file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        let answers = file.prepared_answers(Category::PortalBlog);
        assert!(answers.get(INSERTION_DAYS_ID).is_none());
    }

    #[test]
    fn proposal_metadata_carries_over() {
        let file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        let proposal = file.to_proposal("evening.toml");
        assert_eq!(proposal.id, "evening.toml");
        assert_eq!(proposal.name, "Evening news");
        assert_eq!(proposal.investment, 18_000.0);
        assert_eq!(proposal.campaign_period.as_deref(), Some("Mar-Apr (28 days)"));
    }

    #[test]
    fn metadata_refresh_keeps_identity_and_history() {
        let file = AnswerFile::parse(TV_FILE).expect("answer file should parse");
        let mut stored = Proposal::new("evening", "Old name");
        stored
            .assign_category(Category::TvBundle)
            .expect("assignment should succeed");
        file.apply_metadata(&mut stored);
        assert_eq!(stored.id, "evening");
        assert_eq!(stored.name, "Evening news");
        assert_eq!(stored.investment, 18_000.0);
        assert_eq!(stored.category(), Some(Category::TvBundle));

        let unnamed = AnswerFile::parse("[answers]\n").expect("file should parse");
        unnamed.apply_metadata(&mut stored);
        assert_eq!(stored.name, "Evening news");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = AnswerFile::load(&dir.path().join("absent.toml")).expect_err("load should fail");
        assert!(matches!(err, ScoreError::PathNotFound(_)));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "category = ").expect("broken file should write");
        let err = AnswerFile::load(&broken).expect_err("parse should fail");
        assert!(err.to_string().contains("broken.toml"));
    }
}
