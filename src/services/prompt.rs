/// Renders the instruction sent to the model for one set of preferences.
///
/// Wording of the platform allow-list and the JSON example is part of the
/// contract with clients that consume the generated payload.
pub fn build_prompt(
    subject: &str,
    budget: &str,
    skill_level: &str,
    time_availability: &str,
    learning_style: &str,
) -> String {
    format!(
        r#"
        Act as a course recommendation system. Provide course recommendations based on the following parameters:
        - Subject: {subject}
        - Budget: {budget}
        - Skill Level: {skill_level}
        - Time Availability: {time_availability}
        - Learning Style: {learning_style}

        ### **Instructions for Course URLs:**
        - Only recommend courses from real platforms like **Coursera, YouTube, GeeksForGeeks, Udemy, edX, LinkedIn Learning, Pluralsight, or Khan Academy**.
        - **DO NOT generate fake URLs.** Only provide real, verifiable course links.
        - If you are unsure about a course URL, mention **"URL not found"** instead of a fake link.

        Return your response in the following JSON format:
        {{
            "recommendations": [
                {{
                    "course_name": "Course name",
                    "platform": "Platform name",
                    "cost": "Cost in USD",
                    "duration": "Estimated completion time",
                    "description": "Brief description",
                    "url": "Real course link or 'URL not found'",
                    "skill_level": "Beginner/Intermediate/Advanced"
                }}
            ],
            "roadmap": [
                {{
                    "stage": "Stage 1: Fundamentals",
                    "description": "Description of this stage",
                    "estimated_time": "Time to complete this stage",
                    "key_skills": ["skill1", "skill2", "skill3"],
                    "resources": ["resource1", "resource2"]
                }}
            ],
            "additional_tips": "Additional learning tips"
        }}
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prompt() -> String {
        build_prompt(
            "Data Science",
            "Under $100",
            "Intermediate",
            "10 hours/week",
            "Hands-on projects",
        )
    }

    #[test]
    fn test_prompt_contains_inputs_verbatim() {
        let prompt = sample_prompt();
        assert!(prompt.contains("- Subject: Data Science"));
        assert!(prompt.contains("- Budget: Under $100"));
        assert!(prompt.contains("- Skill Level: Intermediate"));
        assert!(prompt.contains("- Time Availability: 10 hours/week"));
        assert!(prompt.contains("- Learning Style: Hands-on projects"));
    }

    #[test]
    fn test_prompt_names_allowed_platforms() {
        let prompt = sample_prompt();
        assert!(prompt.contains(
            "**Coursera, YouTube, GeeksForGeeks, Udemy, edX, LinkedIn Learning, Pluralsight, or Khan Academy**"
        ));
        assert!(prompt.contains("\"URL not found\""));
    }

    #[test]
    fn test_prompt_shows_schema_with_single_braces() {
        let prompt = sample_prompt();
        assert!(prompt.contains("\"recommendations\": ["));
        assert!(prompt.contains("\"key_skills\": [\"skill1\", \"skill2\", \"skill3\"]"));
        assert!(prompt.contains("\"resources\": [\"resource1\", \"resource2\"]"));
        assert!(prompt.contains("\"additional_tips\": \"Additional learning tips\""));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_prompt_accepts_empty_optional_fields() {
        let prompt = build_prompt("Python", "", "", "", "");
        assert!(prompt.contains("- Subject: Python"));
        assert!(prompt.contains("- Budget: \n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(sample_prompt(), sample_prompt());
    }
}
