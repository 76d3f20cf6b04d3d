pub mod extraction;
pub mod fallback;
pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use recommendations::RecommendationService;
