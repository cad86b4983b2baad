use crate::engine::numbers::numeric_value;
use crate::types::answers::{AnswerSet, ChannelMetric, SocialChannel};
use crate::types::criterion::Unit;
use serde::{Deserialize, Serialize};

pub const TOTAL_FOLLOWERS_ID: &str = "social_followers";
pub const AVERAGE_REACH_ID: &str = "avg_reach";
pub const REGIONAL_AUDIENCE_ID: &str = "demographic_rs_social";
pub const VIDEO_VIEWS_ID: &str = "video_views";

/// Per-channel social metrics reduced to the figures the scorer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialAggregate {
    pub channels: Vec<SocialChannel>,
    pub total_followers: f64,
    pub average_reach: f64,
    pub average_regional_audience: f64,
    /// `None` when no video-capable channel is selected.
    pub average_video_views: Option<f64>,
    pub total_insertions: f64,
}

impl SocialAggregate {
    pub fn has_video_channel(&self) -> bool {
        self.average_video_views.is_some()
    }
}

fn metric(answers: &AnswerSet, metric: ChannelMetric, channel: SocialChannel) -> f64 {
    let unit = match metric {
        ChannelMetric::AvgReach | ChannelMetric::RegionalAudience => Some(Unit::Percentage),
        ChannelMetric::Followers | ChannelMetric::VideoViews | ChannelMetric::Insertions => {
            Some(Unit::Count)
        }
    };
    answers
        .channel_metric(metric, channel)
        .and_then(|raw| numeric_value(raw, unit))
        .unwrap_or(0.0)
}

/// Never fails: missing or unparseable metrics count as zero.
pub fn consolidate(answers: &AnswerSet) -> SocialAggregate {
    let channels = answers.selected_channels();

    let mut total_followers = 0.0;
    let mut weighted_reach = 0.0;
    let mut weighted_regional = 0.0;
    let mut total_insertions = 0.0;
    for channel in &channels {
        let followers = metric(answers, ChannelMetric::Followers, *channel);
        total_followers += followers;
        if followers > 0.0 {
            weighted_reach += metric(answers, ChannelMetric::AvgReach, *channel) * followers;
            weighted_regional +=
                metric(answers, ChannelMetric::RegionalAudience, *channel) * followers;
        }
        total_insertions += metric(answers, ChannelMetric::Insertions, *channel);
    }

    let (average_reach, average_regional_audience) = if total_followers > 0.0 {
        (
            weighted_reach / total_followers,
            weighted_regional / total_followers,
        )
    } else {
        (0.0, 0.0)
    };

    let average_video_views = if channels.iter().any(SocialChannel::is_video_capable) {
        let views = channels
            .iter()
            .filter(|channel| channel.is_video_capable())
            .map(|channel| metric(answers, ChannelMetric::VideoViews, *channel))
            .filter(|views| *views > 0.0)
            .collect::<Vec<_>>();
        if views.is_empty() {
            Some(0.0)
        } else {
            Some(views.iter().sum::<f64>() / views.len() as f64)
        }
    } else {
        None
    };

    SocialAggregate {
        channels,
        total_followers,
        average_reach,
        average_regional_audience,
        average_video_views,
        total_insertions,
    }
}

/// Writes the aggregate figures into the answer set under their criterion
/// ids. The video-views answer is removed when no video channel is selected.
/// Nothing is written when no channel is selected, so directly entered
/// aggregate answers survive.
pub fn apply(answers: &AnswerSet, aggregate: &SocialAggregate) -> AnswerSet {
    let mut merged = answers.clone();
    if aggregate.channels.is_empty() {
        return merged;
    }
    merged.set(TOTAL_FOLLOWERS_ID, aggregate.total_followers);
    merged.set(AVERAGE_REACH_ID, aggregate.average_reach);
    merged.set(REGIONAL_AUDIENCE_ID, aggregate.average_regional_audience);
    match aggregate.average_video_views {
        Some(views) => merged.set(VIDEO_VIEWS_ID, views),
        None => {
            merged.remove(VIDEO_VIEWS_ID);
        }
    }
    merged
}
