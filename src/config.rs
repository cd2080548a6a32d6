use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// Both collaborator credentials are required and must come from the
/// environment; they are never embedded in source.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Bearer credential for the language-model collaborator
    pub language_model_api_key: String,

    /// Language-model API base URL
    #[serde(default = "default_language_model_api_url")]
    pub language_model_api_url: String,

    /// Bearer credential for the movie-metadata collaborator
    pub tmdb_access_token: String,

    /// Movie-metadata API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_language_model_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
