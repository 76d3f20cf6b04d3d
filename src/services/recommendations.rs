use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{
    config::Config,
    error::{ProviderError, RecommendationError},
    models::{RecommendationRequest, RecommendationResult},
    services::{
        extraction::{extract_json_candidate, first_balanced_object},
        fallback::fallback_plan,
        prompt::build_prompt,
        providers::{GeminiProvider, TextGenerator},
    },
};

const MISSING_KEY_MESSAGE: &str =
    "Missing GOOGLE_API_KEY environment variable. Please check your .env file.";
const PREVIEW_CHARS: usize = 500;
const REQUIRED_KEYS: [&str; 3] = ["recommendations", "roadmap", "additional_tips"];

/// Turns learning preferences into course recommendations
///
/// Holds the model provider when a credential was configured at startup.
/// Without one every request is answered from the fallback templates; a
/// failing model call is reported as an error, never replaced by fallback data.
#[derive(Clone)]
pub struct RecommendationService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl RecommendationService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// Creates the service with a Gemini provider if an API key is configured
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let generator = GeminiProvider::from_config(config)?
            .map(|provider| Arc::new(provider) as Arc<dyn TextGenerator>);

        if generator.is_none() {
            tracing::warn!("GOOGLE_API_KEY not set, serving fallback recommendations");
        }

        Ok(Self::new(generator))
    }

    fn acquire(&self) -> Result<&dyn TextGenerator, RecommendationError> {
        self.generator
            .as_deref()
            .ok_or_else(|| RecommendationError::Configuration(MISSING_KEY_MESSAGE.to_string()))
    }

    /// Resolves one request into a plan, a generated payload or an error body
    pub async fn resolve(&self, request: &RecommendationRequest) -> RecommendationResult {
        let generator = match self.acquire() {
            Ok(generator) => generator,
            Err(e) => {
                tracing::warn!(error = %e, "Model not configured, using fallback data");
                return RecommendationResult::Plan(fallback_plan(
                    &request.subject,
                    &request.skill_level,
                ));
            }
        };

        match self.generate(generator, request).await {
            Ok(payload) => RecommendationResult::Generated(payload),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    provider = generator.name(),
                    "Recommendation resolution failed"
                );
                RecommendationResult::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn generate(
        &self,
        generator: &dyn TextGenerator,
        request: &RecommendationRequest,
    ) -> Result<Map<String, Value>, RecommendationError> {
        let prompt = build_prompt(
            &request.subject,
            &request.budget,
            &request.skill_level,
            &request.time_availability,
            &request.learning_style,
        );

        tracing::debug!(
            provider = generator.name(),
            prompt_len = prompt.len(),
            "Sending prompt to model"
        );

        let raw = generator.generate(&prompt).await?;

        tracing::debug!(
            response_len = raw.len(),
            preview = %preview(&raw),
            "Received model response"
        );

        parse_payload(&raw)
    }
}

/// Extracts, parses and shape-checks a raw model reply
pub fn parse_payload(raw: &str) -> Result<Map<String, Value>, RecommendationError> {
    let candidate = extract_json_candidate(raw);

    let value = match serde_json::from_str::<Value>(candidate) {
        Ok(value) => value,
        Err(parse_error) => {
            let recovered = first_balanced_object(raw)
                .filter(|span| *span != candidate)
                .and_then(|span| serde_json::from_str::<Value>(span).ok());

            match recovered {
                Some(value) => {
                    tracing::debug!("Recovered JSON object outside the fenced block");
                    value
                }
                None => return Err(parse_error.into()),
            }
        }
    };

    validate_shape(value)
}

fn validate_shape(value: Value) -> Result<Map<String, Value>, RecommendationError> {
    let Value::Object(payload) = value else {
        return Err(RecommendationError::Shape(
            "model response is not a JSON object".to_string(),
        ));
    };

    if payload.contains_key("error") {
        return Err(RecommendationError::Shape(
            "model response contains an `error` key".to_string(),
        ));
    }

    if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !payload.contains_key(**key)) {
        return Err(RecommendationError::Shape(format!(
            "model response is missing `{}`",
            missing
        )));
    }

    Ok(payload)
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
