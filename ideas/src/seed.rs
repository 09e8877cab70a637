use chrono::{DateTime, Utc};

use crate::models::{Category, IdeaDraft, Priority, Status, VideoIdea};

/// The three example ideas shown on a fresh install, all stamped `now`.
pub fn seed_ideas(now: DateTime<Utc>) -> Vec<VideoIdea> {
    vec![
        VideoIdea::from_draft(
            "1".to_string(),
            IdeaDraft::new(
                "10 Essential Running Form Tips for Beginners",
                "Cover proper posture, foot strike, arm movement, and breathing techniques",
                Category::RunningTips,
                Priority::High,
                Status::Scripting,
            ),
            now,
        ),
        VideoIdea::from_draft(
            "2".to_string(),
            IdeaDraft::new(
                "Best Trail Running Shoes of 2024 - Comprehensive Review",
                "Test and review top 5 trail running shoes with different terrain tests",
                Category::GearReviews,
                Priority::High,
                Status::Idea,
            ),
            now,
        ),
        VideoIdea::from_draft(
            "3".to_string(),
            IdeaDraft::new(
                "Marathon Training Plan: Week by Week Guide",
                "16-week marathon training program with weekly breakdowns",
                Category::TrainingPlans,
                Priority::Medium,
                Status::Idea,
            ),
            now,
        ),
    ]
}
