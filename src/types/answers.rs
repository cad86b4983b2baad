use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const NOT_CONSIDERED_SUFFIX: &str = "_not_considered";
pub const SOCIAL_CHANNELS_KEY: &str = "social_channels";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl RawValue {
    /// Absent-equivalent values: blank text, empty lists, non-finite numbers.
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::List(items) => items.is_empty(),
            RawValue::Number(number) => !number.is_finite(),
            RawValue::Flag(_) => false,
        }
    }

    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Flag(flag) => write!(f, "{flag}"),
            RawValue::Number(number) => write!(f, "{number}"),
            RawValue::Text(text) => f.write_str(text.trim()),
            RawValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialChannel {
    Instagram,
    Facebook,
    Tiktok,
    Youtube,
    X,
    Linkedin,
    Kwai,
}

impl SocialChannel {
    pub const ALL: [SocialChannel; 7] = [
        SocialChannel::Instagram,
        SocialChannel::Facebook,
        SocialChannel::Tiktok,
        SocialChannel::Youtube,
        SocialChannel::X,
        SocialChannel::Linkedin,
        SocialChannel::Kwai,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SocialChannel::Instagram => "instagram",
            SocialChannel::Facebook => "facebook",
            SocialChannel::Tiktok => "tiktok",
            SocialChannel::Youtube => "youtube",
            SocialChannel::X => "x",
            SocialChannel::Linkedin => "linkedin",
            SocialChannel::Kwai => "kwai",
        }
    }

    pub fn is_video_capable(&self) -> bool {
        matches!(
            self,
            SocialChannel::Youtube | SocialChannel::Tiktok | SocialChannel::Kwai
        )
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let normalized = match normalized.as_str() {
            "x (twitter)" | "twitter" => "x",
            other => other,
        };
        SocialChannel::ALL
            .into_iter()
            .find(|channel| channel.slug() == normalized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMetric {
    Followers,
    AvgReach,
    RegionalAudience,
    VideoViews,
    Insertions,
}

impl ChannelMetric {
    pub fn prefix(&self) -> &'static str {
        match self {
            ChannelMetric::Followers => "followers",
            ChannelMetric::AvgReach => "avg_reach",
            ChannelMetric::RegionalAudience => "demographic_rs_social",
            ChannelMetric::VideoViews => "video_views",
            ChannelMetric::Insertions => "insertions",
        }
    }

    pub const ALL: [ChannelMetric; 5] = [
        ChannelMetric::Followers,
        ChannelMetric::AvgReach,
        ChannelMetric::RegionalAudience,
        ChannelMetric::VideoViews,
        ChannelMetric::Insertions,
    ];
}

pub fn channel_key(metric: ChannelMetric, channel: SocialChannel) -> String {
    format!("{}_{}", metric.prefix(), channel.slug())
}

pub fn not_considered_key(criterion_id: &str) -> String {
    format!("{criterion_id}{NOT_CONSIDERED_SUFFIX}")
}

/// Questionnaire answers keyed by criterion id, per-channel metric key
/// (`<metric>_<channel>`) or exclusion flag (`<criterion>_not_considered`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, RawValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, key: &str, value: impl Into<RawValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<RawValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    /// Flags the criterion as not considered and drops its value.
    pub fn exclude(&mut self, criterion_id: &str) {
        self.values.remove(criterion_id);
        self.values
            .insert(not_considered_key(criterion_id), RawValue::Flag(true));
    }

    pub fn is_excluded(&self, criterion_id: &str) -> bool {
        matches!(
            self.values.get(&not_considered_key(criterion_id)),
            Some(RawValue::Flag(true))
        )
    }

    pub fn channel_metric(&self, metric: ChannelMetric, channel: SocialChannel) -> Option<&RawValue> {
        self.values.get(&channel_key(metric, channel))
    }

    #[cfg(test)]
    pub fn set_channel_metric(
        &mut self,
        metric: ChannelMetric,
        channel: SocialChannel,
        value: impl Into<RawValue>,
    ) {
        self.values.insert(channel_key(metric, channel), value.into());
    }

    /// Selected channels in declaration order, duplicates and unknown
    /// names dropped.
    pub fn selected_channels(&self) -> Vec<SocialChannel> {
        let names: Vec<&str> = match self.values.get(SOCIAL_CHANNELS_KEY) {
            Some(RawValue::List(items)) => items.iter().map(String::as_str).collect(),
            Some(RawValue::Text(text)) => text.split(',').collect(),
            _ => Vec::new(),
        };
        let mut channels = Vec::new();
        for name in names {
            if let Some(channel) = SocialChannel::from_slug(name) {
                if !channels.contains(&channel) {
                    channels.push(channel);
                }
            }
        }
        channels
    }

    #[cfg(test)]
    pub fn select_channels(&mut self, channels: &[SocialChannel]) {
        self.values.insert(
            SOCIAL_CHANNELS_KEY.to_string(),
            RawValue::List(channels.iter().map(|c| c.slug().to_string()).collect()),
        );
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
