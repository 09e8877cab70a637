use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type IdeaId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoIdea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl VideoIdea {
    pub fn from_draft(id: IdeaId, draft: IdeaDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            status: draft.status,
            created_at,
        }
    }

    /// Replaces every field except `id` and `created_at`.
    pub fn apply_draft(&mut self, draft: IdeaDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.category = draft.category;
        self.priority = draft.priority;
        self.status = draft.status;
    }

    pub fn to_draft(&self) -> IdeaDraft {
        IdeaDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            priority: self.priority,
            status: self.status,
        }
    }
}

/// An idea without its assigned identity and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
}

impl IdeaDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        status: Status,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            priority,
            status,
        }
    }
}

impl Default for IdeaDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::RunningTips,
            priority: Priority::Medium,
            status: Status::Idea,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    // Keys match the stored representation.
    pub fn key(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![Priority::Low, Priority::Medium, Priority::High]
    }
}

/// Production pipeline stage. Any stage may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idea,
    Scripting,
    Filming,
    Editing,
    Scheduled,
    Published,
}

impl Status {
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Idea => "Idea",
            Status::Scripting => "Scripting",
            Status::Filming => "Filming",
            Status::Editing => "Editing",
            Status::Scheduled => "Scheduled",
            Status::Published => "Published",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Status::Idea => "idea",
            Status::Scripting => "scripting",
            Status::Filming => "filming",
            Status::Editing => "editing",
            Status::Scheduled => "scheduled",
            Status::Published => "published",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "idea" => Some(Status::Idea),
            "scripting" => Some(Status::Scripting),
            "filming" => Some(Status::Filming),
            "editing" => Some(Status::Editing),
            "scheduled" => Some(Status::Scheduled),
            "published" => Some(Status::Published),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            Status::Idea,
            Status::Scripting,
            Status::Filming,
            Status::Editing,
            Status::Scheduled,
            Status::Published,
        ]
    }
}

/// Content category. Stored as its label; labels outside the known set are
/// kept verbatim in `Other` so a load/save cycle never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    RunningTips,
    GearReviews,
    TrainingPlans,
    RaceVlogs,
    Nutrition,
    InjuryPrevention,
    Motivation,
    Other(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::RunningTips => "Running Tips",
            Category::GearReviews => "Gear Reviews",
            Category::TrainingPlans => "Training Plans",
            Category::RaceVlogs => "Race Vlogs",
            Category::Nutrition => "Nutrition",
            Category::InjuryPrevention => "Injury Prevention",
            Category::Motivation => "Motivation",
            Category::Other(label) => label,
        }
    }

    /// The selectable categories, in display order.
    pub fn all_variants() -> Vec<Self> {
        vec![
            Category::RunningTips,
            Category::GearReviews,
            Category::TrainingPlans,
            Category::RaceVlogs,
            Category::Nutrition,
            Category::InjuryPrevention,
            Category::Motivation,
        ]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Running Tips" => Category::RunningTips,
            "Gear Reviews" => Category::GearReviews,
            "Training Plans" => Category::TrainingPlans,
            "Race Vlogs" => Category::RaceVlogs,
            "Nutrition" => Category::Nutrition,
            "Injury Prevention" => Category::InjuryPrevention,
            "Motivation" => Category::Motivation,
            _ => Category::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Display-only channel numbers. Nothing mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStats {
    pub subscribers: u64,
    pub total_views: u64,
    pub total_videos: u64,
    pub avg_views_per_video: u64,
}

impl Default for ChannelStats {
    fn default() -> Self {
        Self {
            subscribers: 15_420,
            total_views: 487_350,
            total_videos: 142,
            avg_views_per_video: 3_432,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn idea_serializes_with_camel_case_fields() {
        let idea = VideoIdea::from_draft(
            "42".to_string(),
            IdeaDraft::new("T", "D", Category::GearReviews, Priority::High, Status::Filming),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        );

        let value = serde_json::to_value(&idea).unwrap();
        assert_eq!(value["id"], "42");
        assert_eq!(value["category"], "Gear Reviews");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["status"], "filming");
        assert_eq!(value["createdAt"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn parses_records_written_by_browser_clients() {
        let json = r#"{
            "id": "1712345678901",
            "title": "Hill repeats",
            "description": "",
            "category": "Training Plans",
            "priority": "medium",
            "status": "scheduled",
            "createdAt": "2024-04-05T19:34:38.901Z"
        }"#;

        let idea: VideoIdea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.category, Category::TrainingPlans);
        assert_eq!(idea.status, Status::Scheduled);
        assert_eq!(idea.created_at.timestamp_millis(), 1_712_345_678_901);
    }

    #[test]
    fn unknown_category_is_preserved() {
        let category: Category = serde_json::from_str(r#""Ultra Stories""#).unwrap();
        assert_eq!(category, Category::Other("Ultra Stories".to_string()));
        assert!(!category.is_known());
        assert_eq!(serde_json::to_string(&category).unwrap(), r#""Ultra Stories""#);
    }

    #[test]
    fn unknown_priority_is_rejected() {
        assert!(serde_json::from_str::<Priority>(r#""urgent""#).is_err());
        assert_eq!(Priority::from_key("urgent"), None);
    }

    #[test]
    fn keys_match_serialized_form() {
        for status in Status::all_variants() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.key()));
            assert_eq!(Status::from_key(status.key()), Some(status));
        }
        for priority in Priority::all_variants() {
            let json = serde_json::to_string(&priority).unwrap();
            assert_eq!(json, format!("\"{}\"", priority.key()));
        }
    }

    #[test]
    fn channel_stats_are_fixed_placeholders() {
        let stats = ChannelStats::default();
        assert_eq!(stats.subscribers, 15_420);
        assert_eq!(stats.total_views, 487_350);
        assert_eq!(stats.total_videos, 142);
        assert_eq!(stats.avg_views_per_video, 3_432);
    }

    #[test]
    fn apply_draft_keeps_identity() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut idea = VideoIdea::from_draft("7".into(), IdeaDraft::default(), created_at);
        idea.apply_draft(IdeaDraft::new(
            "New",
            "Body",
            Category::Nutrition,
            Priority::Low,
            Status::Published,
        ));

        assert_eq!(idea.id, "7");
        assert_eq!(idea.created_at, created_at);
        assert_eq!(idea.title, "New");
        assert_eq!(idea.to_draft().category, Category::Nutrition);
    }
}
