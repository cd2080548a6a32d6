use std::sync::Arc;

use crate::config::Config;
use crate::services::providers::{GeminiProvider, LanguageModel, MovieCatalog, TmdbProvider};
use crate::services::resolver::{PageSampler, ThreadRngSampler};

/// Shared application state: the two external collaborators and the
/// page-selection policy, all behind trait objects so tests can inject stubs.
#[derive(Clone)]
pub struct AppState {
    pub language_model: Arc<dyn LanguageModel>,
    pub movie_catalog: Arc<dyn MovieCatalog>,
    pub page_sampler: Arc<dyn PageSampler>,
}

impl AppState {
    pub fn new(
        language_model: Arc<dyn LanguageModel>,
        movie_catalog: Arc<dyn MovieCatalog>,
        page_sampler: Arc<dyn PageSampler>,
    ) -> Self {
        Self {
            language_model,
            movie_catalog,
            page_sampler,
        }
    }

    /// Production wiring: HTTP providers plus the thread-RNG sampler
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(GeminiProvider::new(
                config.language_model_api_key.clone(),
                config.language_model_api_url.clone(),
            )),
            Arc::new(TmdbProvider::new(
                config.tmdb_access_token.clone(),
                config.tmdb_api_url.clone(),
            )),
            Arc::new(ThreadRngSampler),
        )
    }
}
