/// TMDB discovery provider
///
/// Queries /discover/movie with an optional genre constraint, sorted by
/// descending popularity, excluding adult and video-only content. Returns the
/// requested page untruncated.
use crate::{
    error::{AppError, AppResult},
    models::{DiscoverResponse, MovieSummary},
    services::providers::MovieCatalog,
};
use reqwest::Client as HttpClient;

const LANGUAGE: &str = "en-US";
const SORT_BY: &str = "popularity.desc";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    access_token: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(access_token: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            access_token,
            api_url,
        }
    }

    /// Comma-joined genre list, or None for an unconstrained query
    fn genre_filter(genre_ids: &[u16]) -> Option<String> {
        if genre_ids.is_empty() {
            return None;
        }
        Some(
            genre_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbProvider {
    async fn discover(&self, genre_ids: &[u16], page: u8) -> AppResult<Vec<MovieSummary>> {
        let url = format!("{}/discover/movie", self.api_url);

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("language", LANGUAGE),
                ("sort_by", SORT_BY),
                ("include_adult", "false"),
                ("include_video", "false"),
            ])
            .query(&[("page", page.to_string())]);

        if let Some(with_genres) = Self::genre_filter(genre_ids) {
            request = request.query(&[("with_genres", with_genres)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let discover: DiscoverResponse = response.json().await?;

        tracing::info!(
            page = discover.page,
            results = discover.results.len(),
            provider = self.name(),
            "Discovery page fetched"
        );

        Ok(discover.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
