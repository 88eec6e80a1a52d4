//! Command and menu flows: /start, /help, /random, main menu.

use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

use super::artwork::send_artwork;
use super::keyboard::{language_keyboard, main_menu_keyboard};
use crate::db::Database;
use crate::lang::Locale;
use crate::met::MetClient;
use crate::texts::{text, TextKey};

/// Greet the user. First contact shows the language picker; a chat with a
/// session goes straight to the localized main menu.
pub async fn start(bot: Bot, msg: Message, db: Database) -> Result<()> {
    match db.get_locale(msg.chat.id).await? {
        Some(locale) => {
            bot.send_message(msg.chat.id, text(locale, TextKey::Welcome))
                .parse_mode(ParseMode::Html)
                .reply_markup(main_menu_keyboard(locale))
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, text(Locale::En, TextKey::Welcome))
                .parse_mode(ParseMode::Html)
                .reply_markup(language_keyboard())
                .await?;
        }
    }
    Ok(())
}

pub async fn help(bot: Bot, chat_id: ChatId, locale: Locale) -> Result<()> {
    bot.send_message(chat_id, text(locale, TextKey::HelpText))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn show_main_menu(bot: &Bot, chat_id: ChatId, locale: Locale) -> Result<()> {
    bot.send_message(chat_id, text(locale, TextKey::MainMenu))
        .reply_markup(main_menu_keyboard(locale))
        .await?;
    Ok(())
}

/// Fetch and display one random artwork from the collection.
pub async fn random_artwork(
    bot: Bot,
    chat_id: ChatId,
    met: MetClient,
    locale: Locale,
) -> Result<()> {
    bot.send_message(chat_id, text(locale, TextKey::FindingRandom))
        .await?;

    match met.random_artwork().await {
        Some(artwork) => send_artwork(&bot, chat_id, &artwork, locale).await?,
        None => {
            bot.send_message(chat_id, text(locale, TextKey::ErrorFind))
                .await?;
        }
    }
    Ok(())
}
