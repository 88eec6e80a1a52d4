//! Turning a free-form artwork description into museum search keywords.

use tracing::{debug, instrument};
use unicode_segmentation::UnicodeSegmentation;

use crate::ai::config::AiConfig;
use crate::ai::ollama::generate;
use crate::ai::prompts::keyword_extraction_prompt;
use crate::lang::Locale;

pub const MAX_KEYWORDS: usize = 5;

/// Fallback tokens shorter than this are discarded as noise.
const MIN_TOKEN_LEN: usize = 4;

/// Function words and bot filler across all supported languages. The set is
/// deliberately one flat list rather than per-locale, so a misdetected
/// language still gets its filler stripped.
const STOP_WORDS: &[&str] = &[
    // English
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "show", "find",
    "paintings", "painting", "something",
    // Russian
    "я", "хочу", "покажи", "найди", "что-то", "картину", "картины", "с", "про",
    // German
    "ich", "möchte", "zeig", "zeige", "mir", "etwas", "ein", "eine", "der", "die", "das", "mit",
];

/// Extract up to [`MAX_KEYWORDS`] English search keywords from `text`.
///
/// The generation model is asked first; any failure falls back to the local
/// stop-word extractor, so this never returns an error. An empty result means
/// nothing in the text survived filtering, not that something went wrong.
#[instrument(level = "debug", skip(config))]
pub async fn extract_keywords(config: &AiConfig, text: &str, locale: Locale) -> Vec<String> {
    let prompt = keyword_extraction_prompt(text);
    let keywords = keywords_with_fallback(text, generate(config, &prompt).await);
    debug!(locale = locale.code(), ?keywords, "extracted keywords");
    keywords
}

fn keywords_with_fallback(text: &str, generated: anyhow::Result<String>) -> Vec<String> {
    match generated {
        Ok(raw) => parse_keyword_response(&raw),
        Err(err) => {
            tracing::warn!(error = %err, "keyword generation failed, using local extraction");
            local_keywords(text)
        }
    }
}

/// Clean up a raw model completion into a keyword list.
pub fn parse_keyword_response(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '\n'))
        .collect();

    cleaned
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .take(MAX_KEYWORDS)
        .map(ToString::to_string)
        .collect()
}

/// Stop-word-filtered tokenization, used when the model is unavailable.
///
/// Keeps the first [`MAX_KEYWORDS`] surviving tokens in their original order.
pub fn local_keywords(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .take(MAX_KEYWORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_quotes_and_lowercases() {
        let keywords = parse_keyword_response("\"Landscape\", Peaceful,\nBLUE ");
        assert_eq!(keywords, vec!["landscape", "peaceful", "blue"]);
    }

    #[test]
    fn parse_truncates_to_five() {
        let keywords = parse_keyword_response("a1, b2, c3, d4, e5, f6, g7");
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "a1");
    }

    #[test]
    fn parse_drops_empty_tokens() {
        assert_eq!(parse_keyword_response(",, sea ,"), vec!["sea"]);
        assert!(parse_keyword_response("").is_empty());
    }

    #[test]
    fn local_extraction_filters_stop_words_and_short_tokens() {
        let keywords = local_keywords("show me the sea and bright sunflowers");
        assert_eq!(keywords, vec!["bright", "sunflowers"]);
    }

    #[test]
    fn local_extraction_handles_russian() {
        let keywords = local_keywords("покажи картину с морем");
        assert_eq!(keywords, vec!["морем"]);
    }

    #[test]
    fn fallback_used_on_generation_error() {
        let text = "bright sunflowers";
        let fallback = keywords_with_fallback(text, Err(anyhow::anyhow!("down")));
        assert_eq!(fallback, local_keywords(text));
    }

    #[test]
    fn generation_result_wins_when_present() {
        let keywords = keywords_with_fallback("ignored", Ok("sea, storm".to_string()));
        assert_eq!(keywords, vec!["sea", "storm"]);
    }
}
