//! Rendering artworks into Telegram photo messages.

use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, ParseMode},
    utils::html,
};

use crate::lang::Locale;
use crate::met::Artwork;
use crate::text_utils::truncate_caption;
use crate::texts::{found_artworks, text, TextKey};

/// Build the photo caption: title header, key facts, then the full
/// description. The result is capped at the Telegram caption limit.
pub fn format_caption(artwork: &Artwork, locale: Locale) -> String {
    let date = if artwork.date.is_empty() {
        "Unknown"
    } else {
        artwork.date.as_str()
    };

    let caption = format!(
        "🎨 <b>{title}</b>\n\n\
         👨‍🎨 <b>{artist_label}:</b> {artist}\n\
         📅 <b>{year_label}:</b> {date}\n\
         🏛️ <b>{museum_label}:</b> Metropolitan Museum of Art\n\n\
         {description}",
        title = html::escape(&artwork.title),
        artist_label = text(locale, TextKey::ArtistLabel),
        artist = html::escape(&artwork.artist),
        year_label = text(locale, TextKey::YearLabel),
        date = html::escape(date),
        museum_label = text(locale, TextKey::MuseumLabel),
        description = crate::description::describe(artwork, locale),
    );

    truncate_caption(&caption)
}

/// Send one artwork as a photo with its caption.
///
/// A failed send (bad image URL, caption rejected) is logged and answered
/// with the localized display-error text instead of propagating.
pub async fn send_artwork(
    bot: &Bot,
    chat_id: ChatId,
    artwork: &Artwork,
    locale: Locale,
) -> Result<()> {
    let photo = match reqwest::Url::parse(&artwork.image_url) {
        Ok(url) => InputFile::url(url),
        Err(err) => {
            tracing::warn!(error = %err, url = %artwork.image_url, "invalid image URL");
            bot.send_message(chat_id, text(locale, TextKey::ErrorDisplay))
                .await?;
            return Ok(());
        }
    };

    let caption = format_caption(artwork, locale);
    if let Err(err) = bot
        .send_photo(chat_id, photo)
        .caption(caption)
        .parse_mode(ParseMode::Html)
        .await
    {
        tracing::warn!(error = %err, chat_id = chat_id.0, "failed to send artwork photo");
        bot.send_message(chat_id, text(locale, TextKey::ErrorDisplay))
            .await?;
    }
    Ok(())
}

/// Announce the hit count and send each found artwork in order.
pub async fn send_results(
    bot: &Bot,
    chat_id: ChatId,
    artworks: &[Artwork],
    locale: Locale,
) -> Result<()> {
    if artworks.is_empty() {
        bot.send_message(chat_id, text(locale, TextKey::NoArtworks))
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    }

    bot.send_message(chat_id, found_artworks(locale, artworks.len()))
        .await?;

    for artwork in artworks {
        send_artwork(bot, chat_id, artwork, locale).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_utils::MAX_CAPTION_LEN;

    fn sample_artwork() -> Artwork {
        Artwork {
            title: "Wheat Field <with> Cypresses".to_string(),
            artist: "Vincent van Gogh".to_string(),
            image_url: "https://example.org/wheat.jpg".to_string(),
            date: "1889".to_string(),
            culture: String::new(),
            department: "European Paintings".to_string(),
            medium: "Oil on canvas".to_string(),
        }
    }

    #[test]
    fn caption_escapes_html_in_fields() {
        let caption = format_caption(&sample_artwork(), Locale::En);
        assert!(caption.contains("Wheat Field &lt;with&gt; Cypresses"));
        assert!(caption.contains("<b>Artist:</b> Vincent van Gogh"));
    }

    #[test]
    fn caption_respects_limit() {
        let mut artwork = sample_artwork();
        artwork.title = "long ".repeat(400);
        let caption = format_caption(&artwork, Locale::En);
        assert!(caption.chars().count() <= MAX_CAPTION_LEN);
    }

    #[test]
    fn caption_localizes_labels() {
        let caption = format_caption(&sample_artwork(), Locale::Ru);
        assert!(caption.contains("<b>Год:</b> 1889"));
    }
}
