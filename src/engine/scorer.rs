use crate::engine::numbers::numeric_value;
use crate::types::answers::RawValue;
use crate::types::criterion::{Criterion, InputKind, MAX_SCORE};
use crate::types::scoring::ScoreEntry;

/// Score one criterion. Bad input degrades to `0 / "N/A"` instead of
/// failing; the first matching option in catalog order wins.
pub fn score_criterion(criterion: &Criterion, raw: Option<&RawValue>, excluded: bool) -> ScoreEntry {
    if excluded {
        return ScoreEntry::not_considered();
    }
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return ScoreEntry::not_available(),
    };

    let entry = match criterion.input_kind {
        InputKind::Numeric => score_numeric(criterion, raw),
        InputKind::Select => score_select(criterion, raw),
    };
    ScoreEntry {
        score: entry.score.clamp(0.0, MAX_SCORE),
        ..entry
    }
}

fn score_numeric(criterion: &Criterion, raw: &RawValue) -> ScoreEntry {
    let Some(number) = numeric_value(raw, criterion.unit) else {
        return ScoreEntry::not_available();
    };
    let label = raw.as_text();
    criterion
        .options
        .iter()
        .find(|option| option.matcher.contains(number))
        .map(|option| ScoreEntry::new(option.score, label.clone()))
        .unwrap_or_else(|| ScoreEntry::new(0.0, label))
}

fn score_select(criterion: &Criterion, raw: &RawValue) -> ScoreEntry {
    let text = raw.as_text();
    criterion
        .options
        .iter()
        .find(|option| option.matcher.matches_text(&text))
        .map(|option| ScoreEntry::new(option.score, option.label))
        .unwrap_or_else(ScoreEntry::not_available)
}
