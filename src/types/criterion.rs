use crate::types::category::Category;
use serde::Serialize;

pub const MAX_SCORE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Select,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Currency,
    Percentage,
    /// Integer counts, entered with `.` as thousands separator.
    Count,
}

/// Structural precondition beyond the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    VideoChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionMatch {
    Value { value: &'static str },
    Range { min: Option<f64>, max: Option<f64> },
}

impl OptionMatch {
    pub fn contains(&self, number: f64) -> bool {
        match self {
            OptionMatch::Range { min, max } => {
                if min.is_none() && max.is_none() {
                    return false;
                }
                min.map_or(true, |min| number >= min) && max.map_or(true, |max| number <= max)
            }
            OptionMatch::Value { .. } => false,
        }
    }

    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            OptionMatch::Value { value } => *value == text,
            OptionMatch::Range { .. } => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreOption {
    pub label: &'static str,
    pub matcher: OptionMatch,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Criterion {
    pub id: &'static str,
    pub label: &'static str,
    pub indicator: &'static str,
    pub input_kind: InputKind,
    pub options: Vec<ScoreOption>,
    pub unit: Option<Unit>,
    /// `None` applies to every category.
    pub applicable_categories: Option<Vec<Category>>,
    pub requires: Option<Requirement>,
}

impl Criterion {
    pub fn applies_to(&self, category: Category) -> bool {
        self.applicable_categories
            .as_ref()
            .map_or(true, |categories| categories.contains(&category))
    }
}
