//! Inline keyboards shown by the bot.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::lang::Locale;
use crate::texts::{text, TextKey};

/// Callback-data prefixes understood by the callback handler.
pub const LANG_PREFIX: &str = "lang_";
pub const MENU_PREFIX: &str = "menu_";
pub const PERIOD_PREFIX: &str = "period_";
pub const ARTIST_PREFIX: &str = "artist_";

/// Quick-search periods: callback key, museum query, label per locale.
const QUICK_PERIODS: [(&str, &str, [&str; 3]); 5] = [
    (
        "renaissance",
        "Renaissance",
        [
            "🏛️ Renaissance (1400-1600)",
            "🏛️ Ренессанс (1400-1600)",
            "🏛️ Renaissance (1400-1600)",
        ],
    ),
    (
        "baroque",
        "Baroque",
        [
            "👑 Baroque (1600-1750)",
            "👑 Барокко (1600-1750)",
            "👑 Barock (1600-1750)",
        ],
    ),
    (
        "romanticism",
        "Romanticism",
        [
            "🎭 Romanticism (1800-1850)",
            "🎭 Романтизм (1800-1850)",
            "🎭 Romantik (1800-1850)",
        ],
    ),
    (
        "impressionism",
        "Impressionism",
        [
            "🌅 Impressionism (1860-1890)",
            "🌅 Импрессионизм (1860-1890)",
            "🌅 Impressionismus (1860-1890)",
        ],
    ),
    (
        "modern",
        "Modern",
        ["🎨 Modern (1900+)", "🎨 Модерн (1900+)", "🎨 Moderne (1900+)"],
    ),
];

/// Famous artists offered as one-tap searches.
const QUICK_ARTISTS: [(&str, &str); 6] = [
    ("Vincent van Gogh", "van gogh"),
    ("Claude Monet", "monet"),
    ("Rembrandt", "rembrandt"),
    ("Leonardo da Vinci", "da vinci"),
    ("Pablo Picasso", "picasso"),
    ("Edgar Degas", "degas"),
];

fn locale_index(locale: Locale) -> usize {
    match locale {
        Locale::En => 0,
        Locale::Ru => 1,
        Locale::De => 2,
    }
}

pub fn language_keyboard() -> InlineKeyboardMarkup {
    let rows = [
        ("🇬🇧 English", "en"),
        ("🇷🇺 Русский", "ru"),
        ("🇩🇪 Deutsch", "de"),
    ]
    .map(|(label, code)| {
        vec![InlineKeyboardButton::callback(
            label,
            format!("{LANG_PREFIX}{code}"),
        )]
    });
    InlineKeyboardMarkup::new(rows)
}

pub fn main_menu_keyboard(locale: Locale) -> InlineKeyboardMarkup {
    let button = |key: TextKey, action: &str| {
        InlineKeyboardButton::callback(text(locale, key), format!("{MENU_PREFIX}{action}"))
    };
    InlineKeyboardMarkup::new([
        vec![
            button(TextKey::MenuSearch, "search"),
            button(TextKey::MenuRandom, "random"),
        ],
        vec![
            button(TextKey::MenuArtist, "artist"),
            button(TextKey::MenuPeriod, "period"),
        ],
        vec![button(TextKey::MenuHelp, "help")],
    ])
}

pub fn period_keyboard(locale: Locale) -> InlineKeyboardMarkup {
    let index = locale_index(locale);
    let rows: Vec<Vec<InlineKeyboardButton>> = QUICK_PERIODS
        .iter()
        .map(|(key, _, labels)| {
            vec![InlineKeyboardButton::callback(
                labels[index],
                format!("{PERIOD_PREFIX}{key}"),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Museum query for a period callback key.
pub fn period_query(key: &str) -> Option<&'static str> {
    QUICK_PERIODS
        .iter()
        .find(|(period_key, _, _)| *period_key == key)
        .map(|(_, query, _)| *query)
}

pub fn artist_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = QUICK_ARTISTS
        .iter()
        .map(|(label, query)| {
            vec![InlineKeyboardButton::callback(
                *label,
                format!("{ARTIST_PREFIX}{query}"),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}
