//! Small encouragements around the plan: a random "little boost" phrase and
//! the keyword-based quick explanation.
//!
//! The phrases are defined in `phrases.toml` and embedded in the binary at
//! compile time.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;

use studyplan_core::Language;

/// One motivational phrase from the embedded library.
#[derive(Debug, Clone, Deserialize)]
pub struct Phrase {
    pub language: Language,
    pub text: String,
}

/// Container for deserializing the embedded TOML file.
#[derive(Debug, Deserialize)]
struct PhraseLibrary {
    phrases: Vec<Phrase>,
}

/// The embedded phrase library.
static PHRASES_TOML: &str = include_str!("phrases.toml");

/// Load all phrases from the embedded library.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. The file ships with the binary,
/// so this only fails if it was edited into an invalid state.
pub fn load_phrases() -> Vec<Phrase> {
    let lib: PhraseLibrary = toml::from_str(PHRASES_TOML).expect("embedded phrases.toml is invalid");
    lib.phrases
}

/// Pick a phrase for `language` uniformly at random.
pub fn choose_motivation<R: Rng + ?Sized>(language: Language, rng: &mut R) -> Option<String> {
    let candidates: Vec<Phrase> = load_phrases()
        .into_iter()
        .filter(|p| p.language == language)
        .collect();
    candidates.choose(rng).map(|p| p.text.clone())
}

/// Words kept as keywords, at most.
const MAX_KEYWORDS: usize = 4;
/// Words this short are skipped.
const MIN_KEYWORD_CHARS: usize = 4;

/// Pull up to four longer words out of `question`, stripped of anything but
/// Latin letters and Devanagari.
pub fn extract_keywords(question: &str) -> Vec<String> {
    question
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphabetic() || ('\u{0900}'..='\u{097F}').contains(c))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// A short study tip built around the question's keywords.
pub fn quick_explanation(question: &str, language: Language) -> String {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return match language {
            Language::En => "Ask anything and I'll keep it short.".to_owned(),
            Language::Hi => "कुछ भी पूछें, मैं छोटा जवाब दूंगा।".to_owned(),
        };
    }

    let keywords = extract_keywords(trimmed);
    let subject = if keywords.is_empty() {
        trimmed.to_owned()
    } else {
        keywords.join(", ")
    };

    match language {
        Language::En => format!(
            "Try this: {subject} in simple words, then break it into keywords, \
             write a short summary, and test yourself once."
        ),
        Language::Hi => format!(
            "ऐसा करें: {subject} को सरल शब्दों में लिखें और इसे मुख्य शब्दों में बाँटें, \
             एक छोटा सार लिखें, और खुद से एक प्रश्न पूछें।"
        ),
    }
}
