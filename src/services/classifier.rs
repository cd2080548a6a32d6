use crate::{error::AppResult, models::Mood, services::providers::LanguageModel};

/// Label substituted when the model's reply falls outside the mood set
pub const DEFAULT_MOOD: Mood = Mood::Happy;

/// Outcome of a classification attempt.
///
/// The two non-error paths are kept distinct: a reply that matched the mood
/// set exactly, and a reply that did not and was replaced by [`DEFAULT_MOOD`].
/// The wire response is the same for both, but logs and tests can observe
/// which path was taken. Transport failures are errors, never defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Classified(Mood),
    Defaulted { raw: String },
}

impl Classification {
    /// The mood to report to the caller
    pub fn mood(&self) -> Mood {
        match self {
            Classification::Classified(mood) => *mood,
            Classification::Defaulted { .. } => DEFAULT_MOOD,
        }
    }

    pub fn was_defaulted(&self) -> bool {
        matches!(self, Classification::Defaulted { .. })
    }
}

/// Prompt instructing the model to answer with exactly one enumerated mood
pub fn build_prompt(message: &str) -> String {
    let moods = Mood::ALL.map(Mood::as_str).join(", ");
    format!(
        "Analyze this feeling and respond ONLY with one of these moods: {}. Feeling: {}",
        moods, message
    )
}

/// Classify free text into a mood label via the language-model collaborator.
///
/// The raw reply is lowercased and compared for exact equality against the
/// mood set. No match means the fallback label, not an error; only a failed
/// collaborator call surfaces as an error.
pub async fn classify(model: &dyn LanguageModel, message: &str) -> AppResult<Classification> {
    let prompt = build_prompt(message);
    let raw = model.generate(&prompt).await?;
    let normalized = raw.to_lowercase();

    match normalized.parse::<Mood>() {
        Ok(mood) => {
            tracing::info!(mood = %mood, provider = model.name(), "Mood classified");
            Ok(Classification::Classified(mood))
        }
        Err(_) => {
            tracing::warn!(
                raw = %raw,
                default = %DEFAULT_MOOD,
                provider = model.name(),
                "Model reply outside mood set, substituting default"
            );
            Ok(Classification::Defaulted { raw: normalized })
        }
    }
}
