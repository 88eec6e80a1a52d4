//! Inline-button callbacks: language selection, menu actions, quick searches.

use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, MaybeInaccessibleMessage, ParseMode},
};

use super::artwork::send_results;
use super::keyboard::{
    artist_keyboard, period_keyboard, period_query, ARTIST_PREFIX, LANG_PREFIX, MENU_PREFIX,
    PERIOD_PREFIX,
};
use super::menu::{help, random_artwork, show_main_menu};
use crate::db::Database;
use crate::lang::Locale;
use crate::met::MetClient;
use crate::texts::{text, TextKey};

/// Result count for one-tap artist/period searches.
const QUICK_SEARCH_LIMIT: usize = 3;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    db: Database,
    met: MetClient,
) -> Result<()> {
    if let (Some(data), Some(msg)) = (q.data.clone(), q.message.clone()) {
        if let Some(code) = data.strip_prefix(LANG_PREFIX) {
            select_language(&bot, &msg, &db, code).await?;
        } else if let Some(action) = data.strip_prefix(MENU_PREFIX) {
            let locale = db.locale_or_default(msg.chat().id).await;
            menu_action(&bot, msg.chat().id, &met, locale, action).await?;
        } else if let Some(key) = data.strip_prefix(PERIOD_PREFIX) {
            let locale = db.locale_or_default(msg.chat().id).await;
            match period_query(key) {
                Some(query) => quick_search(&bot, &msg, &met, locale, query).await?,
                None => tracing::warn!(key, "unknown period callback"),
            }
        } else if let Some(query) = data.strip_prefix(ARTIST_PREFIX) {
            let locale = db.locale_or_default(msg.chat().id).await;
            quick_search(&bot, &msg, &met, locale, query).await?;
        } else {
            tracing::warn!(data, "unhandled callback data");
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}

/// Store the chosen locale, confirm in that language, then show the menu.
async fn select_language(
    bot: &Bot,
    msg: &MaybeInaccessibleMessage,
    db: &Database,
    code: &str,
) -> Result<()> {
    let Some(locale) = Locale::from_code(code) else {
        tracing::warn!(code, "unknown language callback");
        return Ok(());
    };

    db.set_locale(msg.chat().id, locale).await?;

    if let Err(err) = bot
        .edit_message_text(msg.chat().id, msg.id(), text(locale, TextKey::LanguageSet))
        .await
    {
        tracing::warn!(error = %err, "failed to edit language prompt");
    }

    show_main_menu(bot, msg.chat().id, locale).await
}

async fn menu_action(
    bot: &Bot,
    chat_id: ChatId,
    met: &MetClient,
    locale: Locale,
    action: &str,
) -> Result<()> {
    match action {
        "search" => {
            bot.send_message(chat_id, text(locale, TextKey::SearchPrompt))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        "random" => random_artwork(bot.clone(), chat_id, met.clone(), locale).await?,
        "artist" => {
            bot.send_message(chat_id, text(locale, TextKey::SelectArtist))
                .parse_mode(ParseMode::Html)
                .reply_markup(artist_keyboard())
                .await?;
        }
        "period" => {
            bot.send_message(chat_id, text(locale, TextKey::SelectPeriod))
                .parse_mode(ParseMode::Html)
                .reply_markup(period_keyboard(locale))
                .await?;
        }
        "help" => help(bot.clone(), chat_id, locale).await?,
        _ => tracing::warn!(action, "unknown menu callback"),
    }
    Ok(())
}

/// One-tap search for a fixed artist or period query.
async fn quick_search(
    bot: &Bot,
    msg: &MaybeInaccessibleMessage,
    met: &MetClient,
    locale: Locale,
    query: &str,
) -> Result<()> {
    let chat_id = msg.chat().id;

    if let Err(err) = bot
        .edit_message_text(chat_id, msg.id(), text(locale, TextKey::Searching))
        .await
    {
        tracing::warn!(error = %err, "failed to edit quick-search prompt");
    }

    let artworks = met.search_artworks(query, QUICK_SEARCH_LIMIT).await;
    send_results(bot, chat_id, &artworks, locale).await
}
