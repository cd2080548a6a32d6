use std::sync::Arc;

use rand::Rng;

use crate::{
    models::{Mood, MovieSummary},
    services::providers::MovieCatalog,
};

/// Upper bound on the movie list returned to the caller
pub const MAX_RESULTS: usize = 9;

/// Pages 1..=MAX_PAGE are eligible for diversity sampling
pub const MAX_PAGE: u8 = 20;

/// Page-selection policy for discovery queries.
///
/// Repeated calls with the same mood intentionally land on different pages so
/// the caller sees variety rather than a stable ranking. The seam exists so
/// tests can pin the page deterministically.
pub trait PageSampler: Send + Sync {
    fn sample(&self) -> u8;
}

/// Production sampler: uniform over 1..=MAX_PAGE from the thread RNG
pub struct ThreadRngSampler;

impl PageSampler for ThreadRngSampler {
    fn sample(&self) -> u8 {
        rand::thread_rng().gen_range(1..=MAX_PAGE)
    }
}

/// Resolve a mood parameter into a bounded movie list.
///
/// The parameter is looked up against the mood set; an unrecognized string is
/// permissive by design and queries with no genre constraint. Collaborator
/// failures are absorbed into an empty list and logged, never propagated, so
/// this function cannot fail past its boundary.
pub async fn resolve(
    catalog: Arc<dyn MovieCatalog>,
    sampler: Arc<dyn PageSampler>,
    mood_param: &str,
) -> Vec<MovieSummary> {
    let genre_ids: &[u16] = match mood_param.parse::<Mood>() {
        Ok(mood) => mood.genre_ids(),
        Err(_) => &[],
    };

    let page = sampler.sample();

    match catalog.discover(genre_ids, page).await {
        Ok(mut movies) => {
            movies.truncate(MAX_RESULTS);
            tracing::info!(
                mood = %mood_param,
                page = page,
                results = movies.len(),
                provider = catalog.name(),
                "Movies resolved"
            );
            movies
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                mood = %mood_param,
                page = page,
                provider = catalog.name(),
                "Movie discovery failed, returning empty result"
            );
            Vec::new()
        }
    }
}
