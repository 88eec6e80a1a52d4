//! Per-chat session state.
//!
//! The only thing a session carries is the user's chosen locale: written once
//! when they pick a language, read on every subsequent message. A chat
//! without a row simply gets the default locale.

use super::Database;
use anyhow::Result;
use teloxide::types::ChatId;

use crate::lang::Locale;

#[derive(sqlx::FromRow)]
struct SessionRow {
    locale: String,
}

impl Database {
    /// Locale chosen by this chat, if a session exists.
    pub async fn get_locale(&self, chat_id: ChatId) -> Result<Option<Locale>> {
        tracing::trace!(chat_id = chat_id.0, "Fetching session locale");
        let row =
            sqlx::query_as::<_, SessionRow>("SELECT locale FROM session WHERE chat_id = ?")
                .bind(chat_id.0)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.and_then(|r| Locale::from_code(&r.locale)))
    }

    /// Locale for rendering replies, defaulting to English.
    pub async fn locale_or_default(&self, chat_id: ChatId) -> Locale {
        match self.get_locale(chat_id).await {
            Ok(locale) => locale.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, chat_id = chat_id.0, "Failed to read session locale");
                Locale::default()
            }
        }
    }

    pub async fn set_locale(&self, chat_id: ChatId, locale: Locale) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, locale = locale.code(), "Updating session locale");
        sqlx::query(
            "INSERT INTO session (chat_id, locale) VALUES (?, ?) \
             ON CONFLICT(chat_id) DO UPDATE SET locale = excluded.locale",
        )
        .bind(chat_id.0)
        .bind(locale.code())
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Drop the session entirely, e.g. when the chat goes away.
    pub async fn clear_session(&self, chat_id: ChatId) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, "Clearing session");
        sqlx::query("DELETE FROM session WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
