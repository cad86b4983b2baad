use crate::engine::consolidate::SocialAggregate;
use crate::types::answers::AnswerSet;
use crate::types::category::Category;
use crate::types::criterion::{Criterion, Requirement};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicabilityContext {
    pub category: Category,
    pub video_channel_selected: bool,
}

impl ApplicabilityContext {
    pub fn new(category: Category, social: &SocialAggregate) -> Self {
        Self {
            category,
            video_channel_selected: social.has_video_channel(),
        }
    }
}

/// Category filter plus the criterion's structural requirement.
pub fn is_applicable(criterion: &Criterion, context: &ApplicabilityContext) -> bool {
    if !criterion.applies_to(context.category) {
        return false;
    }
    match criterion.requires {
        Some(Requirement::VideoChannel) => context.video_channel_selected,
        None => true,
    }
}

/// Applicable criteria that are not flagged as not considered.
pub fn active_criteria<'a>(
    criteria: impl IntoIterator<Item = &'a Criterion>,
    context: &ApplicabilityContext,
    answers: &AnswerSet,
) -> BTreeSet<String> {
    criteria
        .into_iter()
        .filter(|criterion| is_applicable(criterion, context))
        .filter(|criterion| !answers.is_excluded(criterion.id))
        .map(|criterion| criterion.id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn context(category: Category, video: bool) -> ApplicabilityContext {
        ApplicabilityContext {
            category,
            video_channel_selected: video,
        }
    }

    #[test]
    fn video_views_needs_a_video_channel() {
        let video_views = catalog().require("video_views").expect("criterion should exist");
        assert!(!is_applicable(video_views, &context(Category::PortalSocial, false)));
        assert!(is_applicable(video_views, &context(Category::PortalSocial, true)));
        assert!(!is_applicable(video_views, &context(Category::PortalBlog, true)));
    }

    #[test]
    fn active_set_drops_excluded_and_inapplicable() {
        let mut answers = AnswerSet::new();
        answers.exclude("cpm");
        let active = active_criteria(
            catalog().all_criteria(),
            &context(Category::PortalSocial, false),
            &answers,
        );
        assert!(!active.contains("cpm"));
        assert!(!active.contains("video_views"));
        assert!(!active.contains("tv_daypart"));
        assert!(active.contains("avg_reach"));
    }
}
