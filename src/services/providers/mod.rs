/// External collaborator abstractions
///
/// Both collaborators sit behind traits so handlers and services depend only
/// on the contract: a prompt-in/text-out language model and a genre-filtered
/// movie discovery endpoint. Production implementations talk HTTP; tests
/// inject mocks or stubs.
use crate::{error::AppResult, models::MovieSummary};

pub mod gemini;
pub mod tmdb;

pub use gemini::GeminiProvider;
pub use tmdb::TmdbProvider;

/// Generative language-model collaborator: single prompt, single free-text
/// reply. No streaming, no function calling.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send one prompt and return the model's raw reply text
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Movie-metadata collaborator: one page of a genre-filtered discovery query.
///
/// Returns the page's full result list; bounding the list is the resolver's
/// policy, not the provider's.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one discovery page. An empty `genre_ids` slice means an
    /// unconstrained query.
    async fn discover(&self, genre_ids: &[u16], page: u8) -> AppResult<Vec<MovieSummary>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
