//! Progressive query relaxation over the museum search service.

use tracing::{debug, instrument};

use crate::ai::config::AiConfig;
use crate::ai::keywords::extract_keywords;
use crate::lang::Locale;
use crate::met::{Artwork, MetClient};

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Search the museum for artworks matching a free-form description.
///
/// Keywords are extracted from the text, then tried most-specific first: the
/// full keyword set, the first two keywords, the first keyword alone. Each
/// retry only happens when the previous attempt found nothing, so at most
/// three sequential museum calls are made. An empty keyword set returns
/// immediately without querying.
#[instrument(level = "debug", skip(ai, met))]
pub async fn relaxed_search(
    ai: &AiConfig,
    met: &MetClient,
    user_text: &str,
    limit: usize,
) -> Vec<Artwork> {
    let locale = Locale::detect(user_text);
    let keywords = extract_keywords(ai, user_text, locale).await;
    relaxed_keyword_search(met, &keywords, limit).await
}

/// The relaxation loop itself, starting from an already-extracted keyword set.
pub async fn relaxed_keyword_search(
    met: &MetClient,
    keywords: &[String],
    limit: usize,
) -> Vec<Artwork> {
    if keywords.is_empty() {
        debug!("no keywords extracted, skipping museum query");
        return Vec::new();
    }

    for prefix in attempt_lengths(keywords.len()) {
        let query = keywords[..prefix].join(" ");
        debug!(query, prefix, "relaxation attempt");
        let found = met.search_artworks(&query, limit).await;
        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}

/// Keyword-prefix lengths to try, in strictly decreasing order.
fn attempt_lengths(keyword_count: usize) -> Vec<usize> {
    let mut lengths = vec![keyword_count];
    for candidate in [2, 1] {
        if candidate < keyword_count {
            lengths.push(candidate);
        }
    }
    lengths
}
