use crate::types::category::Category;
use crate::types::criterion::{
    Criterion, InputKind, OptionMatch, Requirement, ScoreOption, Unit,
};

const ALL_BUNDLES: &[Category] = &[
    Category::PortalSocial,
    Category::TvBundle,
    Category::YoutubeBundle,
];
const TEXT_BRANDED: &[Category] = &[Category::PortalBlog, Category::PortalSocial];
const VIDEO_BRANDED: &[Category] = &[Category::TvBundle, Category::YoutubeBundle];
const TV_ONLY: &[Category] = &[Category::TvBundle];
const YOUTUBE_ONLY: &[Category] = &[Category::YoutubeBundle];

fn choice(label: &'static str, value: &'static str, score: f64) -> ScoreOption {
    ScoreOption {
        label,
        matcher: OptionMatch::Value { value },
        score,
    }
}

fn band(label: &'static str, min: Option<f64>, max: Option<f64>, score: f64) -> ScoreOption {
    ScoreOption {
        label,
        matcher: OptionMatch::Range { min, max },
        score,
    }
}

fn select(
    id: &'static str,
    label: &'static str,
    indicator: &'static str,
    options: Vec<ScoreOption>,
    categories: Option<&[Category]>,
) -> Criterion {
    Criterion {
        id,
        label,
        indicator,
        input_kind: InputKind::Select,
        options,
        unit: None,
        applicable_categories: categories.map(<[Category]>::to_vec),
        requires: None,
    }
}

fn numeric(
    id: &'static str,
    label: &'static str,
    indicator: &'static str,
    unit: Option<Unit>,
    options: Vec<ScoreOption>,
    categories: Option<&[Category]>,
) -> Criterion {
    Criterion {
        id,
        label,
        indicator,
        input_kind: InputKind::Numeric,
        options,
        unit,
        applicable_categories: categories.map(<[Category]>::to_vec),
        requires: None,
    }
}

fn share_bands() -> Vec<ScoreOption> {
    vec![
        band("70% or more", Some(70.0), None, 3.0),
        band("50% to 70%", Some(50.0), Some(70.0), 2.0),
        band("30% to 50%", Some(30.0), Some(50.0), 1.0),
        band("Below 30%", Some(0.0), Some(30.0), 0.0),
    ]
}

fn reach_audit_options() -> Vec<ScoreOption> {
    vec![
        choice("Not estimated", "not_estimated", 0.0),
        choice("Generic estimate", "generic", 1.0),
        choice("Historical campaign data", "historical", 2.0),
        choice("Audited", "audited", 3.0),
    ]
}

fn format_count_options() -> Vec<ScoreOption> {
    vec![
        choice("None", "0", 0.0),
        choice("One format", "1", 1.0),
        choice("Two formats", "2", 2.0),
        choice("Three or more formats", "3", 3.0),
    ]
}

fn bonus_options() -> Vec<ScoreOption> {
    vec![
        choice("No bonus inventory", "none", 0.0),
        choice("Up to 20% extra", "up_to_20", 1.0),
        choice("20% to 50% extra", "up_to_50", 2.0),
        choice("Over 50% extra", "over_50", 3.0),
    ]
}

fn yes_no() -> Vec<ScoreOption> {
    vec![choice("No", "no", 0.0), choice("Yes", "yes", 3.0)]
}

/// The evaluation matrix in questionnaire order.
pub(super) fn evaluation_matrix() -> Vec<Criterion> {
    let mut video_views = numeric(
        "video_views",
        "Video views",
        "Average views per video across video-capable channels",
        Some(Unit::Count),
        vec![
            band("20,000 or more", Some(20_000.0), None, 3.0),
            band("5,000 to 20,000", Some(5_000.0), Some(20_000.0), 2.0),
            band("1,000 to 5,000", Some(1_000.0), Some(5_000.0), 1.0),
            band("Below 1,000", Some(0.0), Some(1_000.0), 0.0),
        ],
        Some(ALL_BUNDLES),
    );
    video_views.requires = Some(Requirement::VideoChannel);

    vec![
        // Portal / blog
        select(
            "portal_existence",
            "Portal existence",
            "Publishing frequency of the portal or blog",
            vec![
                choice("Nonexistent", "nonexistent", 0.0),
                choice("Outdated", "outdated", 1.0),
                choice("Updated weekly", "weekly", 2.0),
                choice("Updated daily", "daily", 3.0),
            ],
            None,
        ),
        numeric(
            "portal_audience",
            "Portal audience",
            "Monthly page views",
            Some(Unit::Count),
            vec![
                band("1,000,000 or more", Some(1_000_000.0), None, 3.0),
                band("200,000 to 1,000,000", Some(200_000.0), Some(1_000_000.0), 2.0),
                band("50,000 to 200,000", Some(50_000.0), Some(200_000.0), 1.0),
                band("Below 50,000", Some(0.0), Some(50_000.0), 0.0),
            ],
            None,
        ),
        numeric(
            "demographic_rs_portal",
            "Regional portal audience",
            "Share of portal audience located in the target state (%)",
            Some(Unit::Percentage),
            share_bands(),
            None,
        ),
        select(
            "privileged_visibility",
            "Privileged visibility",
            "Placement prominence of the purchased inventory",
            vec![
                choice("None", "none", 0.0),
                choice("Medium", "medium", 1.0),
                choice("Good", "good", 2.0),
                choice("Premium (home/top)", "premium", 3.0),
            ],
            None,
        ),
        select(
            "portal_formats",
            "Portal formats",
            "Number of distinct display formats offered",
            format_count_options(),
            None,
        ),
        select(
            "real_reach_portal",
            "Portal reach evidence",
            "How portal reach figures are substantiated",
            reach_audit_options(),
            None,
        ),
        select(
            "bonus_portal",
            "Portal bonus",
            "Bonus portal inventory over the purchased volume",
            bonus_options(),
            None,
        ),
        select(
            "branded_content_text",
            "Branded text content",
            "Sponsored editorial articles included",
            yes_no(),
            Some(TEXT_BRANDED),
        ),
        // Social media
        numeric(
            "social_followers",
            "Social followers",
            "Total followers across selected channels",
            Some(Unit::Count),
            vec![
                band("200,000 or more", Some(200_000.0), None, 3.0),
                band("50,000 to 200,000", Some(50_000.0), Some(200_000.0), 2.0),
                band("10,000 to 50,000", Some(10_000.0), Some(50_000.0), 1.0),
                band("Below 10,000", Some(0.0), Some(10_000.0), 0.0),
            ],
            Some(ALL_BUNDLES),
        ),
        numeric(
            "avg_reach",
            "Average reach",
            "Follower-weighted average reach per post (%)",
            Some(Unit::Percentage),
            vec![
                band("20% or more", Some(20.0), None, 3.0),
                band("10% to 20%", Some(10.0), Some(20.0), 2.0),
                band("5% to 10%", Some(5.0), Some(10.0), 1.0),
                band("Below 5%", Some(0.0), Some(5.0), 0.0),
            ],
            Some(ALL_BUNDLES),
        ),
        numeric(
            "demographic_rs_social",
            "Regional social audience",
            "Follower-weighted share of audience in the target state (%)",
            Some(Unit::Percentage),
            share_bands(),
            Some(ALL_BUNDLES),
        ),
        video_views,
        select(
            "social_formats",
            "Social formats",
            "Number of distinct social formats (feed, stories, reels)",
            format_count_options(),
            Some(ALL_BUNDLES),
        ),
        select(
            "real_reach_social",
            "Social reach evidence",
            "How social reach figures are substantiated",
            reach_audit_options(),
            Some(ALL_BUNDLES),
        ),
        select(
            "bonus_social",
            "Social bonus",
            "Bonus social insertions over the purchased volume",
            bonus_options(),
            Some(ALL_BUNDLES),
        ),
        // Television
        select(
            "tv_program_type",
            "Program type",
            "Genre of the program carrying the spots",
            vec![
                choice("Other", "other", 0.0),
                choice("Entertainment", "entertainment", 2.0),
                choice("Sports", "sports", 2.0),
                choice("Journalism", "journalism", 3.0),
            ],
            Some(TV_ONLY),
        ),
        numeric(
            "tv_daily_insertions",
            "Daily insertions",
            "Spots aired per day",
            Some(Unit::Count),
            vec![
                band("6 or more", Some(6.0), None, 3.0),
                band("4 to 6", Some(4.0), Some(6.0), 2.0),
                band("2 to 4", Some(2.0), Some(4.0), 1.0),
                band("Below 2", Some(0.0), Some(2.0), 0.0),
            ],
            Some(TV_ONLY),
        ),
        numeric(
            "tv_insertion_days",
            "Insertion days",
            "Number of days with spots on air",
            Some(Unit::Count),
            vec![
                band("30 days or more", Some(30.0), None, 3.0),
                band("15 to 30 days", Some(15.0), Some(30.0), 2.0),
                band("7 to 15 days", Some(7.0), Some(15.0), 1.0),
                band("Below 7 days", Some(0.0), Some(7.0), 0.0),
            ],
            Some(TV_ONLY),
        ),
        numeric(
            "tv_spot_duration",
            "Spot duration",
            "Length of each spot in seconds",
            Some(Unit::Count),
            vec![
                band("60 seconds or more", Some(60.0), None, 3.0),
                band("30 to 60 seconds", Some(30.0), Some(60.0), 2.0),
                band("15 to 30 seconds", Some(15.0), Some(30.0), 1.0),
                band("Below 15 seconds", Some(0.0), Some(15.0), 0.0),
            ],
            Some(TV_ONLY),
        ),
        select(
            "tv_daypart",
            "Daypart",
            "Time slot of the insertions",
            vec![
                choice("Overnight", "overnight", 0.0),
                choice("Morning", "morning", 1.0),
                choice("Afternoon", "afternoon", 2.0),
                choice("Prime time", "prime_time", 3.0),
            ],
            Some(TV_ONLY),
        ),
        numeric(
            "demographic_rs_tv",
            "Regional TV coverage",
            "Share of the target state covered by the signal (%)",
            Some(Unit::Percentage),
            share_bands(),
            Some(TV_ONLY),
        ),
        select(
            "tv_audience_source",
            "Audience source",
            "Origin of the audience figures",
            vec![
                choice("Not informed", "none", 0.0),
                choice("Broadcaster estimate", "broadcaster_estimate", 1.0),
                choice("Historical measurement", "historical", 2.0),
                choice("Independent audit", "audited", 3.0),
            ],
            Some(TV_ONLY),
        ),
        select(
            "tv_simultaneous_transmission",
            "Simultaneous transmission",
            "Program simulcast on digital channels",
            yes_no(),
            Some(TV_ONLY),
        ),
        // YouTube channel
        numeric(
            "youtube_views",
            "YouTube views",
            "Average views per video",
            Some(Unit::Count),
            vec![
                band("50,000 or more", Some(50_000.0), None, 3.0),
                band("10,000 to 50,000", Some(10_000.0), Some(50_000.0), 2.0),
                band("2,000 to 10,000", Some(2_000.0), Some(10_000.0), 1.0),
                band("Below 2,000", Some(0.0), Some(2_000.0), 0.0),
            ],
            Some(YOUTUBE_ONLY),
        ),
        numeric(
            "youtube_avg_duration",
            "Average watch time",
            "Average view duration in minutes",
            None,
            vec![
                band("8 minutes or more", Some(8.0), None, 3.0),
                band("4 to 8 minutes", Some(4.0), Some(8.0), 2.0),
                band("2 to 4 minutes", Some(2.0), Some(4.0), 1.0),
                band("Below 2 minutes", Some(0.0), Some(2.0), 0.0),
            ],
            Some(YOUTUBE_ONLY),
        ),
        numeric(
            "youtube_demographic_rs",
            "Regional YouTube audience",
            "Share of channel audience in the target state (%)",
            Some(Unit::Percentage),
            share_bands(),
            Some(YOUTUBE_ONLY),
        ),
        numeric(
            "youtube_video_quantity",
            "Video quantity",
            "Videos delivered in the campaign",
            Some(Unit::Count),
            vec![
                band("8 or more", Some(8.0), None, 3.0),
                band("4 to 8", Some(4.0), Some(8.0), 2.0),
                band("2 to 4", Some(2.0), Some(4.0), 1.0),
                band("Below 2", Some(0.0), Some(2.0), 0.0),
            ],
            Some(YOUTUBE_ONLY),
        ),
        select(
            "youtube_brand_usage",
            "Brand usage",
            "How the brand appears in the videos",
            vec![
                choice("Not shown", "none", 0.0),
                choice("Verbal mention", "mention", 1.0),
                choice("Integrated segment", "integration", 2.0),
                choice("Dedicated video", "dedicated", 3.0),
            ],
            Some(YOUTUBE_ONLY),
        ),
        select(
            "youtube_content_rights",
            "Content rights",
            "Usage rights over the produced content",
            vec![
                choice("No rights", "none", 0.0),
                choice("Time-limited", "time_limited", 2.0),
                choice("Perpetual", "perpetual", 3.0),
            ],
            Some(YOUTUBE_ONLY),
        ),
        select(
            "youtube_history",
            "Channel history",
            "Age of the channel",
            vec![
                choice("New channel", "new", 0.0),
                choice("Under one year", "under_1y", 1.0),
                choice("One to three years", "1_to_3y", 2.0),
                choice("Over three years", "over_3y", 3.0),
            ],
            Some(YOUTUBE_ONLY),
        ),
        select(
            "branded_content",
            "Branded video content",
            "Sponsored video content included",
            yes_no(),
            Some(VIDEO_BRANDED),
        ),
        // Commercial
        numeric(
            "cpm",
            "CPM",
            "Cost per thousand impressions (R$)",
            Some(Unit::Currency),
            vec![
                band("Up to R$ 20", Some(0.0), Some(20.0), 3.0),
                band("R$ 20.01 to R$ 40", Some(20.01), Some(40.0), 2.0),
                band("R$ 40.01 to R$ 60", Some(40.01), Some(60.0), 1.0),
                band("Above R$ 60", Some(60.01), None, 0.0),
            ],
            None,
        ),
        numeric(
            "cpc",
            "CPC",
            "Cost per click (R$)",
            Some(Unit::Currency),
            vec![
                band("Up to R$ 0.50", Some(0.0), Some(0.5), 3.0),
                band("R$ 0.51 to R$ 1.50", Some(0.51), Some(1.5), 2.0),
                band("R$ 1.51 to R$ 3.00", Some(1.51), Some(3.0), 1.0),
                band("Above R$ 3.00", Some(3.01), None, 0.0),
            ],
            None,
        ),
        select(
            "complementary_formats",
            "Complementary formats",
            "Extra formats such as newsletters, podcasts or events",
            format_count_options(),
            None,
        ),
        select(
            "crossposting",
            "Crossposting",
            "Number of partner outlets republishing the content",
            vec![
                choice("None", "0", 0.0),
                choice("One outlet", "1", 1.0),
                choice("Two outlets", "2", 2.0),
                choice("Three outlets", "3", 3.0),
                choice("Four or more outlets", "4", 3.0),
            ],
            None,
        ),
    ]
}
