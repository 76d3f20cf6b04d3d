use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Learning preferences submitted by the client
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub budget: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skill_level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time_availability: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub learning_style: String,
}

/// Reads an explicit JSON `null` as an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RecommendationRequest {
    /// Rejects requests without a subject
    pub fn validate(&self) -> AppResult<()> {
        if self.subject.is_empty() {
            return Err(AppError::InvalidInput("Subject is required".to_string()));
        }
        Ok(())
    }
}

/// A single recommended course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseRecommendation {
    pub course_name: String,
    pub platform: String,
    pub cost: String,
    pub duration: String,
    pub description: String,
    pub url: String,
    pub skill_level: String,
}

/// One stage of a learning roadmap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapStage {
    pub stage: String,
    pub description: String,
    pub estimated_time: String,
    pub key_skills: Vec<String>,
    pub resources: Vec<String>,
}

/// Courses, roadmap and tips for one subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationPlan {
    pub recommendations: Vec<CourseRecommendation>,
    pub roadmap: Vec<RoadmapStage>,
    pub additional_tips: String,
}

/// Body returned by the recommendation endpoint.
///
/// Serializes either as a plan (`recommendations`, `roadmap`,
/// `additional_tips`) or as `{"error": ...}`, never both.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RecommendationResult {
    /// Built locally from templates
    Plan(RecommendationPlan),
    /// Model payload, passed through as parsed
    Generated(Map<String, Value>),
    Failed { error: String },
}

impl RecommendationResult {
    pub fn is_error(&self) -> bool {
        matches!(self, RecommendationResult::Failed { .. })
    }
}
