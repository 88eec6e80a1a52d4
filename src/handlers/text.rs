//! Free-text messages are advanced searches.

use anyhow::Result;
use teloxide::{prelude::*, types::ParseMode};

use super::artwork::send_results;
use crate::ai::config::AiConfig;
use crate::db::Database;
use crate::met::MetClient;
use crate::search::{relaxed_search, DEFAULT_SEARCH_LIMIT};
use crate::texts::{text, TextKey};

/// Treat a plain text message as an artwork description and search for it.
pub async fn handle_search_text(
    bot: Bot,
    msg: Message,
    db: Database,
    ai: AiConfig,
    met: MetClient,
) -> Result<()> {
    let Some(user_text) = msg.text() else {
        return Ok(());
    };

    let locale = db.locale_or_default(msg.chat.id).await;
    tracing::info!(chat_id = msg.chat.id.0, "Advanced search request");

    bot.send_message(msg.chat.id, text(locale, TextKey::Searching))
        .await?;

    let artworks = relaxed_search(&ai, &met, user_text, DEFAULT_SEARCH_LIMIT).await;

    if artworks.is_empty() {
        bot.send_message(msg.chat.id, text(locale, TextKey::NoArtworks))
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    }

    send_results(&bot, msg.chat.id, &artworks, locale).await
}
