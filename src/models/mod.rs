use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// The closed set of mood labels recognized by the classifier.
///
/// This enum is the single source of truth: the classifier validates model
/// output against it, the prompt enumerates it, and the genre mapping is an
/// exhaustive match over it, so the two sets can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Anxious,
    Romantic,
    Angry,
    Nostalgic,
    Inspired,
    Adventurous,
    Relaxed,
    Mysterious,
    Thoughtful,
    Hopeful,
    Melancholic,
    Energetic,
    Scared,
    Peaceful,
    Curious,
}

impl Mood {
    /// Every recognized mood, in prompt order
    pub const ALL: [Mood; 18] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Anxious,
        Mood::Romantic,
        Mood::Angry,
        Mood::Nostalgic,
        Mood::Inspired,
        Mood::Adventurous,
        Mood::Relaxed,
        Mood::Mysterious,
        Mood::Thoughtful,
        Mood::Hopeful,
        Mood::Melancholic,
        Mood::Energetic,
        Mood::Scared,
        Mood::Peaceful,
        Mood::Curious,
    ];

    /// Lowercase wire form of the label
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Anxious => "anxious",
            Mood::Romantic => "romantic",
            Mood::Angry => "angry",
            Mood::Nostalgic => "nostalgic",
            Mood::Inspired => "inspired",
            Mood::Adventurous => "adventurous",
            Mood::Relaxed => "relaxed",
            Mood::Mysterious => "mysterious",
            Mood::Thoughtful => "thoughtful",
            Mood::Hopeful => "hopeful",
            Mood::Melancholic => "melancholic",
            Mood::Energetic => "energetic",
            Mood::Scared => "scared",
            Mood::Peaceful => "peaceful",
            Mood::Curious => "curious",
        }
    }

    /// TMDB genre IDs used to constrain the discovery query for this mood.
    ///
    /// Exhaustive by construction: adding a mood without a genre list is a
    /// compile error, so a valid-but-unmapped mood cannot exist.
    pub fn genre_ids(self) -> &'static [u16] {
        match self {
            Mood::Happy => &[35, 16, 10751],
            Mood::Sad => &[18, 10749],
            Mood::Excited => &[28, 12, 878],
            Mood::Anxious => &[53, 9648],
            Mood::Romantic => &[10749],
            Mood::Angry => &[28, 80],
            Mood::Nostalgic => &[36, 10752],
            Mood::Inspired => &[18, 36],
            Mood::Adventurous => &[12, 28, 14],
            Mood::Relaxed => &[35, 10751],
            Mood::Mysterious => &[9648, 53],
            Mood::Thoughtful => &[18, 99],
            Mood::Hopeful => &[18, 10751],
            Mood::Melancholic => &[18, 10402],
            Mood::Energetic => &[28, 10402],
            Mood::Scared => &[27, 53],
            Mood::Peaceful => &[99, 10751],
            Mood::Curious => &[99, 9648],
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse failure for a string outside the mood set
#[derive(Debug, thiserror::Error)]
#[error("unrecognized mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    /// Exact match against the lowercase wire forms; no substring matching,
    /// no trimming, no case folding. Callers lowercase first when needed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

// ============================================================================
// Movie-metadata API Types
// ============================================================================

/// A single movie record, passed through from the metadata collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
}

/// Raw response from GET /discover/movie
#[derive(Debug, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

// ============================================================================
// Language-model API Types
// ============================================================================

/// Raw generateContent response; only the reply text is of interest
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<ModelCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct ModelCandidate {
    pub content: ModelContent,
}

#[derive(Debug, Deserialize)]
pub struct ModelContent {
    #[serde(default)]
    pub parts: Vec<ModelPart>,
}

#[derive(Debug, Deserialize)]
pub struct ModelPart {
    pub text: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mood_parse_exact_lowercase() {
        assert_eq!("happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!("melancholic".parse::<Mood>().unwrap(), Mood::Melancholic);
    }

    #[test]
    fn test_mood_parse_rejects_mixed_case() {
        assert!("Happy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_parse_rejects_whitespace() {
        assert!("happy\n".parse::<Mood>().is_err());
        assert!(" happy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_parse_rejects_substring_containment() {
        // "happy" appears inside the reply, but only exact equality counts
        assert!("very happy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_parse_is_stable() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_mood_serde_round_trip() {
        let json = serde_json::to_string(&Mood::Nostalgic).unwrap();
        assert_eq!(json, r#""nostalgic""#);

        let mood: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(mood, Mood::Nostalgic);
    }

    #[test]
    fn test_mood_set_has_eighteen_distinct_labels() {
        let labels: HashSet<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(labels.len(), 18);
    }

    #[test]
    fn test_original_genre_mappings_preserved() {
        assert_eq!(Mood::Happy.genre_ids(), &[35, 16, 10751]);
        assert_eq!(Mood::Sad.genre_ids(), &[18, 10749]);
        assert_eq!(Mood::Excited.genre_ids(), &[28, 12, 878]);
        assert_eq!(Mood::Anxious.genre_ids(), &[53, 9648]);
        assert_eq!(Mood::Romantic.genre_ids(), &[10749]);
        assert_eq!(Mood::Angry.genre_ids(), &[28, 80]);
        assert_eq!(Mood::Nostalgic.genre_ids(), &[36, 10752]);
    }

    #[test]
    fn test_every_mood_has_genres() {
        for mood in Mood::ALL {
            assert!(
                !mood.genre_ids().is_empty(),
                "mood {} has no genre mapping",
                mood
            );
        }
    }

    #[test]
    fn test_movie_summary_deserialization() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "vote_average": 8.4,
            "release_date": "2010-07-15",
            "overview": "Cobb, a skilled thief."
        }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.vote_average, 8.4);
        assert_eq!(movie.release_date, Some("2010-07-15".to_string()));
    }

    #[test]
    fn test_movie_summary_tolerates_missing_fields() {
        let json = r#"{ "id": 1, "title": "Untitled" }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.overview, "");
    }

    #[test]
    fn test_generate_content_first_text() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "happy" }] } }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("happy"));
    }

    #[test]
    fn test_generate_content_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), None);
    }
}
