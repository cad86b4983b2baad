use crate::types::category::Category;

/// Author-assigned base weights. Criteria applicable to a category but
/// absent here share whatever budget is left.
pub(super) fn base_table(category: Category) -> &'static [(&'static str, f64)] {
    match category {
        Category::PortalBlog => &[
            // Visibility, qualified audience and cost
            ("cpm", 0.20),
            ("privileged_visibility", 0.15),
            ("portal_audience", 0.15),
            ("demographic_rs_portal", 0.15),
            ("bonus_portal", 0.05),
            ("branded_content_text", 0.05),
            ("portal_formats", 0.05),
            ("real_reach_portal", 0.05),
            ("cpc", 0.05),
            ("portal_existence", 0.04),
            ("complementary_formats", 0.03),
            ("crossposting", 0.03),
        ],
        Category::PortalSocial => &[
            // Social block, 55%
            ("avg_reach", 0.14),
            ("social_formats", 0.12),
            ("demographic_rs_social", 0.10),
            ("social_followers", 0.05),
            ("video_views", 0.05),
            ("crossposting", 0.03),
            ("real_reach_social", 0.03),
            ("bonus_social", 0.03),
            // Portal block, 35%
            ("cpm", 0.10),
            ("privileged_visibility", 0.10),
            ("branded_content_text", 0.04),
            ("portal_audience", 0.03),
            ("demographic_rs_portal", 0.03),
            ("bonus_portal", 0.02),
            ("real_reach_portal", 0.01),
            ("portal_formats", 0.01),
            ("portal_existence", 0.01),
            // Mixed, 10%
            ("cpc", 0.05),
            ("complementary_formats", 0.05),
        ],
        Category::TvBundle => &[
            // TV block, 40%
            ("tv_program_type", 0.06),
            ("tv_daily_insertions", 0.06),
            ("tv_insertion_days", 0.06),
            ("demographic_rs_tv", 0.06),
            ("tv_audience_source", 0.05),
            ("tv_spot_duration", 0.04),
            ("tv_daypart", 0.04),
            ("tv_simultaneous_transmission", 0.03),
            // Digital block, 30%
            ("avg_reach", 0.05),
            ("portal_audience", 0.04),
            ("privileged_visibility", 0.03),
            ("cpc", 0.03),
            ("demographic_rs_portal", 0.02),
            ("demographic_rs_social", 0.02),
            ("social_followers", 0.02),
            ("video_views", 0.02),
            ("bonus_portal", 0.01),
            ("bonus_social", 0.01),
            ("real_reach_portal", 0.01),
            ("real_reach_social", 0.01),
            ("portal_formats", 0.01),
            ("social_formats", 0.01),
            ("portal_existence", 0.01),
            // Commercial and mixed, 30%
            ("cpm", 0.15),
            ("branded_content", 0.08),
            ("crossposting", 0.04),
            ("complementary_formats", 0.03),
        ],
        Category::YoutubeBundle => &[
            // YouTube and general, 60%
            ("cpm", 0.12),
            ("youtube_views", 0.10),
            ("youtube_avg_duration", 0.08),
            ("youtube_demographic_rs", 0.08),
            ("youtube_video_quantity", 0.05),
            ("youtube_brand_usage", 0.04),
            ("branded_content", 0.04),
            ("cpc", 0.03),
            ("youtube_content_rights", 0.03),
            ("youtube_history", 0.01),
            ("complementary_formats", 0.01),
            ("crossposting", 0.01),
            // Portal, 20%
            ("portal_audience", 0.05),
            ("demographic_rs_portal", 0.04),
            ("privileged_visibility", 0.04),
            ("portal_formats", 0.03),
            ("real_reach_portal", 0.02),
            ("bonus_portal", 0.01),
            ("portal_existence", 0.01),
            // Social, 20%
            ("avg_reach", 0.08),
            ("demographic_rs_social", 0.03),
            ("real_reach_social", 0.02),
            ("social_formats", 0.02),
            ("video_views", 0.02),
            ("social_followers", 0.02),
            ("bonus_social", 0.01),
        ],
    }
}
