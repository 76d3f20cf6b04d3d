use std::sync::Arc;

use crate::{
    config::Config,
    error::ProviderError,
    services::{providers::TextGenerator, RecommendationService},
};

/// Shared application state
///
/// Immutable after startup; every request reads the same services.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<RecommendationService>,
}

impl AppState {
    /// Builds state from configuration, wiring Gemini when an API key is set
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Ok(Self {
            recommender: Arc::new(RecommendationService::from_config(config)?),
        })
    }

    /// Builds state around an explicit provider, or none for fallback mode
    pub fn with_generator(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            recommender: Arc::new(RecommendationService::new(generator)),
        }
    }
}
