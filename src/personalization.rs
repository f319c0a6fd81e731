//! Content eligibility rules.
//!
//! Every function here is a pure filter over already-loaded catalog rows. Input order is
//! preserved and nothing is sorted, so callers control ordering through their queries.

use crate::entities::{RecoveryStage, exercise_video, mental_tip, recovery_tip, wellness_resource};

/// Bucket a postpartum month count into a recovery stage.
///
/// Boundaries are inclusive on the lower bucket: month 3 is `Early`, month 12 is `Mid`.
#[must_use]
pub const fn recovery_stage(postpartum_months: i32) -> RecoveryStage {
    if postpartum_months <= 3 {
        RecoveryStage::Early
    } else if postpartum_months <= 12 {
        RecoveryStage::Mid
    } else {
        RecoveryStage::Late
    }
}

/// Tips tagged with exactly this month. There is no nearest-month fallback.
#[must_use]
pub fn eligible_mental_tips(
    tips: &[mental_tip::Model],
    postpartum_months: i32,
) -> Vec<mental_tip::Model> {
    tips.iter()
        .filter(|tip| tip.month_relation == postpartum_months)
        .cloned()
        .collect()
}

/// Active recovery tips tagged with `stage`.
#[must_use]
pub fn eligible_recovery_tips(
    tips: &[recovery_tip::Model],
    stage: RecoveryStage,
) -> Vec<recovery_tip::Model> {
    tips.iter()
        .filter(|tip| tip.is_active && tip.recovery_stage == stage.as_str())
        .cloned()
        .collect()
}

/// Every active recovery tip regardless of stage, for the browse-all view.
#[must_use]
pub fn all_active_recovery_tips(tips: &[recovery_tip::Model]) -> Vec<recovery_tip::Model> {
    tips.iter().filter(|tip| tip.is_active).cloned().collect()
}

/// Active videos for an exercise type, or every active video when no type is given.
///
/// The type is compared by exact value.
#[must_use]
pub fn eligible_videos(
    videos: &[exercise_video::Model],
    exercise_type: Option<&str>,
) -> Vec<exercise_video::Model> {
    videos
        .iter()
        .filter(|video| video.is_active)
        .filter(|video| exercise_type.is_none_or(|wanted| video.exercise_type == wanted))
        .cloned()
        .collect()
}

/// Every active wellness resource. `mood_category` is not used as a filter.
#[must_use]
pub fn eligible_wellness_resources(
    resources: &[wellness_resource::Model],
) -> Vec<wellness_resource::Model> {
    resources
        .iter()
        .filter(|resource| resource.is_active)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn mental_tip(id: i32, month: i32) -> mental_tip::Model {
        mental_tip::Model {
            id,
            month_relation: month,
            tip_content: format!("tip {id}"),
            date_created: Utc::now().fixed_offset(),
        }
    }

    fn recovery_tip(id: i32, stage: &str, is_active: bool) -> recovery_tip::Model {
        recovery_tip::Model {
            id,
            title: format!("recovery {id}"),
            content: String::new(),
            recovery_stage: stage.to_string(),
            is_active,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn video(id: i32, exercise_type: &str, is_active: bool) -> exercise_video::Model {
        exercise_video::Model {
            id,
            exercise_type: exercise_type.to_string(),
            title: format!("video {id}"),
            video_url: format!("https://example.com/{id}"),
            description: None,
            difficulty_level: "Beginner".to_string(),
            duration: Some(10),
            is_active,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn resource(id: i32, mood: Option<&str>, is_active: bool) -> wellness_resource::Model {
        wellness_resource::Model {
            id,
            title: format!("resource {id}"),
            content: String::new(),
            resource_type: "Article".to_string(),
            mood_category: mood.map(str::to_string),
            is_active,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn ids<T>(items: &[T], id: impl Fn(&T) -> i32) -> Vec<i32> {
        items.iter().map(id).collect()
    }

    #[test]
    fn recovery_stage_boundaries() {
        assert_eq!(recovery_stage(0), RecoveryStage::Early);
        assert_eq!(recovery_stage(3), RecoveryStage::Early);
        assert_eq!(recovery_stage(4), RecoveryStage::Mid);
        assert_eq!(recovery_stage(12), RecoveryStage::Mid);
        assert_eq!(recovery_stage(13), RecoveryStage::Late);
        assert_eq!(recovery_stage(48), RecoveryStage::Late);
    }

    #[test]
    fn recovery_stage_matches_definition_over_a_range() {
        for m in 0..=60 {
            let expected = if m <= 3 {
                RecoveryStage::Early
            } else if m <= 12 {
                RecoveryStage::Mid
            } else {
                RecoveryStage::Late
            };
            assert_eq!(recovery_stage(m), expected, "month {m}");
        }
    }

    #[test]
    fn mental_tips_match_month_exactly_in_order() {
        let tips = vec![
            mental_tip(1, 2),
            mental_tip(2, 3),
            mental_tip(3, 2),
            mental_tip(4, 6),
        ];

        let eligible = eligible_mental_tips(&tips, 2);
        assert_eq!(ids(&eligible, |t| t.id), vec![1, 3]);
    }

    #[test]
    fn mental_tips_have_no_nearest_month_fallback() {
        let tips = vec![mental_tip(1, 3), mental_tip(2, 6)];
        assert!(eligible_mental_tips(&tips, 4).is_empty());
    }

    #[test]
    fn recovery_tips_exclude_inactive() {
        let tips = vec![
            recovery_tip(1, "Early", true),
            recovery_tip(2, "Early", false),
            recovery_tip(3, "Mid", true),
        ];

        let eligible = eligible_recovery_tips(&tips, RecoveryStage::Early);
        assert_eq!(ids(&eligible, |t| t.id), vec![1]);
    }

    #[test]
    fn browse_all_recovery_tips_ignores_stage() {
        let tips = vec![
            recovery_tip(1, "Late", true),
            recovery_tip(2, "Early", false),
            recovery_tip(3, "Mid", true),
            recovery_tip(4, "Early", true),
        ];

        let all = all_active_recovery_tips(&tips);
        assert_eq!(ids(&all, |t| t.id), vec![1, 3, 4]);
    }

    #[test]
    fn videos_filter_by_type_and_active() {
        let videos = vec![
            video(1, "Walking", true),
            video(2, "Pilates", true),
            video(3, "Walking", false),
            video(4, "Walking", true),
        ];

        let walking = eligible_videos(&videos, Some("Walking"));
        assert_eq!(ids(&walking, |v| v.id), vec![1, 4]);

        let all = eligible_videos(&videos, None);
        assert_eq!(ids(&all, |v| v.id), vec![1, 2, 4]);
    }

    #[test]
    fn videos_type_match_is_case_sensitive() {
        let videos = vec![video(1, "Walking", true)];
        assert!(eligible_videos(&videos, Some("walking")).is_empty());
    }

    #[test]
    fn wellness_resources_ignore_mood_category() {
        let resources = vec![
            resource(1, Some("Anxiety"), true),
            resource(2, None, true),
            resource(3, Some("Stress"), false),
            resource(4, Some("Stress"), true),
        ];

        let eligible = eligible_wellness_resources(&resources);
        assert_eq!(ids(&eligible, |r| r.id), vec![1, 2, 4]);
    }
}
