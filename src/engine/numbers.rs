use crate::types::answers::RawValue;
use crate::types::criterion::Unit;

/// Integer counts typed with `.` as thousands separator, e.g. `1.250.000`.
pub fn parse_count(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Plain decimals; a trailing `%` and a decimal comma are tolerated.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn numeric_value(raw: &RawValue, unit: Option<Unit>) -> Option<f64> {
    match raw {
        RawValue::Number(number) => Some(*number).filter(|value| value.is_finite()),
        RawValue::Text(text) => match unit {
            Some(Unit::Count) => parse_count(text),
            _ => parse_decimal(text),
        },
        RawValue::Flag(_) | RawValue::List(_) => None,
    }
}
