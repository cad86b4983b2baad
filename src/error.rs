use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid answer file: {0}")]
    InputParse(String),

    #[error("proposal not found: {0}")]
    ProposalNotFound(String),

    #[error("proposal has no category assigned")]
    CategoryMissing,

    #[error("category is locked to {current} once versions exist (requested {requested})")]
    CategoryLocked { current: String, requested: String },

    #[error("version {requested} out of range (proposal has {available})")]
    VersionOutOfRange { requested: usize, available: usize },

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScoreError {
    /// Catalog or category mismatches. These indicate a programming or
    /// configuration mistake rather than bad user data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ScoreError::UnknownCategory(_)
                | ScoreError::UnknownCriterion(_)
                | ScoreError::ConfigParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
