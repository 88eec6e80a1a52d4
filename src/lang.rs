//! Supported user languages and text-based language detection.

/// One of the languages the bot can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
    De,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::De];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Guess the language of `text` from its script.
    ///
    /// Cyrillic wins over everything, German umlauts win over plain Latin,
    /// anything else is treated as English. Always returns a value.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_cyrillic) {
            Locale::Ru
        } else if text.chars().any(is_german_marker) {
            Locale::De
        } else {
            Locale::En
        }
    }
}

fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

fn is_german_marker(c: char) -> bool {
    matches!(c, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü' | 'ß')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_cyrillic() {
        assert_eq!(Locale::detect("покажи море"), Locale::Ru);
    }

    #[test]
    fn cyrillic_wins_over_umlauts() {
        assert_eq!(Locale::detect("schön море"), Locale::Ru);
    }

    #[test]
    fn detects_german_umlauts() {
        assert_eq!(Locale::detect("ein schönes Gemälde"), Locale::De);
        assert_eq!(Locale::detect("Straße"), Locale::De);
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(Locale::detect("show me the sea"), Locale::En);
        assert_eq!(Locale::detect(""), Locale::En);
    }

    #[test]
    fn code_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("fr"), None);
    }
}
