use crate::models::{CourseRecommendation, RecommendationPlan, RoadmapStage};

/// Canned recommendations used when no model credential is configured.
///
/// Always three courses and three roadmap stages, with `subject` and
/// `skill_level` substituted into fixed templates.
pub fn fallback_plan(subject: &str, skill_level: &str) -> RecommendationPlan {
    tracing::info!(subject = %subject, skill_level = %skill_level, "Using fallback data");

    let recommendations = vec![
        course(
            format!("{} for {}s", subject, skill_level),
            "Coursera",
            "$49.99",
            "8 weeks",
            format!(
                "A comprehensive introduction to {} designed for {} learners.",
                subject,
                skill_level.to_lowercase()
            ),
            "https://coursera.org",
            skill_level,
        ),
        course(
            format!("Advanced {}", subject),
            "Udemy",
            "$29.99",
            "10 weeks",
            format!(
                "Take your {} skills to the next level with practical projects.",
                subject
            ),
            "https://udemy.com",
            "Intermediate",
        ),
        course(
            format!("{} Bootcamp", subject),
            "edX",
            "$199.99",
            "12 weeks",
            format!("Intensive {} training with industry experts.", subject),
            "https://edx.org",
            "Advanced",
        ),
    ];

    let roadmap = vec![
        stage(
            "Stage 1: Fundamentals",
            format!("Learn the basic concepts and principles of {}", subject),
            "4 weeks",
            &["Basic concepts", "Terminology", "Simple applications"],
            &["Textbooks", "Online tutorials"],
        ),
        stage(
            "Stage 2: Practical Application",
            format!("Apply your knowledge of {} to real-world problems", subject),
            "6 weeks",
            &["Problem-solving", "Tool usage", "Applied techniques"],
            &["Practice exercises", "Case studies"],
        ),
        stage(
            "Stage 3: Advanced Topics",
            format!("Explore specialized areas within {}", subject),
            "8 weeks",
            &["Advanced methodologies", "Specialized tools", "Research skills"],
            &["Academic papers", "Expert workshops"],
        ),
    ];

    RecommendationPlan {
        recommendations,
        roadmap,
        additional_tips: format!(
            "Consider joining online communities related to {} to network with other learners and professionals. Consistent practice is key to mastering this field.",
            subject
        ),
    }
}

fn course(
    course_name: String,
    platform: &str,
    cost: &str,
    duration: &str,
    description: String,
    url: &str,
    skill_level: &str,
) -> CourseRecommendation {
    CourseRecommendation {
        course_name,
        platform: platform.to_string(),
        cost: cost.to_string(),
        duration: duration.to_string(),
        description,
        url: url.to_string(),
        skill_level: skill_level.to_string(),
    }
}

fn stage(
    name: &str,
    description: String,
    estimated_time: &str,
    key_skills: &[&str],
    resources: &[&str],
) -> RoadmapStage {
    RoadmapStage {
        stage: name.to_string(),
        description,
        estimated_time: estimated_time.to_string(),
        key_skills: key_skills.iter().map(|s| s.to_string()).collect(),
        resources: resources.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_three_courses_and_stages() {
        let plan = fallback_plan("Python", "Beginner");
        assert_eq!(plan.recommendations.len(), 3);
        assert_eq!(plan.roadmap.len(), 3);
    }

    #[test]
    fn test_fallback_first_course() {
        let plan = fallback_plan("Python", "Beginner");
        let first = &plan.recommendations[0];
        assert_eq!(first.course_name, "Python for Beginners");
        assert_eq!(first.platform, "Coursera");
        assert_eq!(first.url, "https://coursera.org");
        assert_eq!(first.skill_level, "Beginner");
        assert_eq!(
            first.description,
            "A comprehensive introduction to Python designed for beginner learners."
        );
    }

    #[test]
    fn test_fallback_fixed_levels_and_platforms() {
        let plan = fallback_plan("Go", "Advanced");
        let platforms: Vec<&str> = plan
            .recommendations
            .iter()
            .map(|c| c.platform.as_str())
            .collect();
        assert_eq!(platforms, vec!["Coursera", "Udemy", "edX"]);
        assert_eq!(plan.recommendations[1].skill_level, "Intermediate");
        assert_eq!(plan.recommendations[2].course_name, "Go Bootcamp");
        assert_eq!(plan.roadmap[2].stage, "Stage 3: Advanced Topics");
        assert_eq!(
            plan.roadmap[0].key_skills,
            vec!["Basic concepts", "Terminology", "Simple applications"]
        );
    }

    #[test]
    fn test_fallback_is_byte_identical_across_calls() {
        let first = serde_json::to_string(&fallback_plan("Rust", "Intermediate")).unwrap();
        let second = serde_json::to_string(&fallback_plan("Rust", "Intermediate")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_tips_mention_subject() {
        let plan = fallback_plan("Chemistry", "Beginner");
        assert!(plan
            .additional_tips
            .starts_with("Consider joining online communities related to Chemistry"));
    }
}
