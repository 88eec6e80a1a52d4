/// Telegram caps photo captions at this many characters.
pub const MAX_CAPTION_LEN: usize = 1024;

/// Truncate a caption to the Telegram limit, never splitting a character.
pub fn truncate_caption(text: &str) -> String {
    if text.chars().count() <= MAX_CAPTION_LEN {
        return text.to_string();
    }
    text.chars().take(MAX_CAPTION_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_captions_pass_through() {
        assert_eq!(truncate_caption("hello"), "hello");
    }

    #[test]
    fn long_captions_are_cut_to_limit() {
        let long = "x".repeat(MAX_CAPTION_LEN + 50);
        let cut = truncate_caption(&long);
        assert_eq!(cut.chars().count(), MAX_CAPTION_LEN);
    }

    #[test]
    fn multibyte_captions_count_chars_not_bytes() {
        let long = "я".repeat(MAX_CAPTION_LEN + 1);
        let cut = truncate_caption(&long);
        assert_eq!(cut.chars().count(), MAX_CAPTION_LEN);
        assert!(cut.is_char_boundary(cut.len()));
    }
}
