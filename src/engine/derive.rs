use crate::engine::numbers::numeric_value;
use crate::types::answers::AnswerSet;
use crate::types::criterion::Unit;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DAYS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\((\d+)\s+(?:dias|days)\)").expect("days pattern is valid"));
static MONTHS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s+(?:m[êe]s(?:es)?|months?)").expect("months pattern is valid")
});

const DAYS_PER_MONTH: u32 = 30;

/// Insertion days implied by a campaign period such as `"Mar-Apr (45 days)"`
/// or `"2 months"`.
pub fn insertion_days_from_period(period: &str) -> Option<u32> {
    if let Some(captures) = DAYS_PATTERN.captures(period) {
        return captures[1].parse::<u32>().ok().filter(|days| *days > 0);
    }
    MONTHS_PATTERN
        .captures(period)
        .and_then(|captures| captures[1].parse::<u32>().ok())
        .and_then(|months| months.checked_mul(DAYS_PER_MONTH))
        .filter(|days| *days > 0)
}

/// Drops weekends: roughly five of every seven days remain.
pub fn weekdays_only(days: u32) -> u32 {
    // u64 intermediate: days * 5 overflows u32 for long periods
    (u64::from(days) * 5 / 7) as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TvDelivery {
    pub total_spots: f64,
    pub total_seconds: f64,
    pub total_hours: f64,
}

pub fn tv_delivery(answers: &AnswerSet) -> TvDelivery {
    let read = |key: &str| {
        answers
            .get(key)
            .and_then(|raw| numeric_value(raw, Some(Unit::Count)))
            .unwrap_or(0.0)
    };
    let total_spots = read("tv_daily_insertions") * read("tv_insertion_days");
    let total_seconds = total_spots * read("tv_spot_duration");
    TvDelivery {
        total_spots,
        total_seconds,
        total_hours: if total_seconds > 0.0 {
            total_seconds / 3600.0
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_day_count_wins() {
        assert_eq!(insertion_days_from_period("01/03 a 15/04 (45 dias)"), Some(45));
        assert_eq!(insertion_days_from_period("March (31 Days)"), Some(31));
    }

    #[test]
    fn months_convert_to_thirty_days() {
        assert_eq!(insertion_days_from_period("2 meses"), Some(60));
        assert_eq!(insertion_days_from_period("1 month"), Some(30));
        assert_eq!(insertion_days_from_period("whole campaign"), None);
        assert_eq!(insertion_days_from_period("0 months"), None);
    }

    #[test]
    fn weekdays_only_rounds_down() {
        assert_eq!(weekdays_only(30), 21);
        assert_eq!(weekdays_only(7), 5);
    }

    #[test]
    fn oversized_month_counts_are_rejected() {
        assert_eq!(insertion_days_from_period("200000000 months"), None);
        assert_eq!(insertion_days_from_period("99999999999 meses"), None);
    }

    #[test]
    fn huge_day_counts_survive_the_weekday_adjustment() {
        let days = insertion_days_from_period("Mar (900000000 days)")
            .expect("explicit day count should parse");
        assert_eq!(days, 900_000_000);
        assert_eq!(weekdays_only(days), 642_857_142);
        assert_eq!(weekdays_only(u32::MAX), 3_067_833_782);
    }

    #[test]
    fn delivery_totals_multiply_through() {
        let answers = AnswerSet::new()
            .with("tv_daily_insertions", "4")
            .with("tv_insertion_days", "30")
            .with("tv_spot_duration", "30");
        let delivery = tv_delivery(&answers);
        assert_eq!(delivery.total_spots, 120.0);
        assert_eq!(delivery.total_seconds, 3600.0);
        assert_eq!(delivery.total_hours, 1.0);
    }
}
