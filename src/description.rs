//! Derives a human-readable, localized description for an artwork record.
//!
//! Everything here is a pure lookup or rule; the same record and locale
//! always produce the same text, and every branch degrades to a defined
//! fallback instead of failing.

use teloxide::utils::html;

use crate::lang::Locale;
use crate::met::Artwork;
use crate::texts::{text, TextKey};

/// Coarse art-historical era derived from a work's creation year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Medieval,
    Renaissance,
    Baroque,
    EighteenthCentury,
    Romanticism,
    Impressionism,
    PostImpressionism,
    ModernArt,
    Contemporary,
}

impl Period {
    /// Derive the period from a free-form date string.
    ///
    /// The first four decimal digits found anywhere in the string are read as
    /// the year; strings with fewer than four digits have no period.
    pub fn from_date(date: &str) -> Option<Self> {
        let digits: String = date.chars().filter(char::is_ascii_digit).take(4).collect();
        if digits.len() < 4 {
            return None;
        }
        let year: u32 = digits.parse().ok()?;

        Some(match year {
            0..=1399 => Period::Medieval,
            1400..=1599 => Period::Renaissance,
            1600..=1699 => Period::Baroque,
            1700..=1799 => Period::EighteenthCentury,
            1800..=1849 => Period::Romanticism,
            1850..=1889 => Period::Impressionism,
            1890..=1909 => Period::PostImpressionism,
            1910..=1949 => Period::ModernArt,
            _ => Period::Contemporary,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Period::Medieval => "Medieval",
            Period::Renaissance => "Renaissance",
            Period::Baroque => "Baroque",
            Period::EighteenthCentury => "18th Century",
            Period::Romanticism => "Romanticism",
            Period::Impressionism => "Impressionism",
            Period::PostImpressionism => "Post-Impressionism",
            Period::ModernArt => "Modern Art",
            Period::Contemporary => "Contemporary",
        }
    }

    /// Localized narrative for the period. English covers every variant; the
    /// other locales override where a translation exists.
    fn narrative(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ru => match self {
                Period::Renaissance => {
                    "Ренессанс (14-17 века) ознаменовал культурное возрождение с акцентом на \
                     гуманизм, реализм и классическое вдохновение."
                }
                Period::Baroque => {
                    "Период барокко (1600-1750) характеризовался драматическим выражением, \
                     насыщенными цветами и интенсивными контрастами света и тени."
                }
                Period::Impressionism => {
                    "Импрессионизм (1860-1890) революционизировал искусство видимыми мазками \
                     кисти и акцентом на световых эффектах."
                }
                _ => self.narrative(Locale::En),
            },
            Locale::De => match self {
                Period::Renaissance => {
                    "Die Renaissance (14.-17. Jahrhundert) markierte eine kulturelle Wiedergeburt \
                     mit Betonung auf Humanismus, Realismus und klassischer Inspiration."
                }
                Period::Baroque => {
                    "Die Barockzeit (1600-1750) zeichnete sich durch dramatischen Ausdruck, \
                     reiche Farben und intensive Hell-Dunkel-Kontraste aus."
                }
                Period::Impressionism => {
                    "Der Impressionismus (1860-1890) revolutionierte die Kunst mit sichtbaren \
                     Pinselstrichen und Betonung auf Lichteffekten."
                }
                _ => self.narrative(Locale::En),
            },
            Locale::En => match self {
                Period::Medieval => {
                    "The Medieval period (5th-15th century) featured religious art, illuminated \
                     manuscripts, and Gothic architecture."
                }
                Period::Renaissance => {
                    "The Renaissance (14th-17th century) marked a cultural rebirth emphasizing \
                     humanism, realism, and classical inspiration. Artists mastered perspective \
                     and anatomy."
                }
                Period::Baroque => {
                    "The Baroque period (1600-1750) featured dramatic expression, rich colors, \
                     intense light and shadow contrasts, and grandeur."
                }
                Period::EighteenthCentury => {
                    "The 18th century saw Neoclassicism reviving classical styles, emphasizing \
                     order, symmetry, and moral virtue."
                }
                Period::Romanticism => {
                    "Romanticism (1800-1850) emphasized emotion, individualism, and nature's \
                     sublime power. Artists focused on dramatic subjects and expressive \
                     techniques."
                }
                Period::Impressionism => {
                    "Impressionism (1860-1890) revolutionized art with visible brushstrokes, \
                     emphasis on light effects, and scenes from everyday life."
                }
                Period::PostImpressionism => {
                    "Post-Impressionism (1886-1905) extended Impressionism while emphasizing \
                     symbolic content and formal structure."
                }
                Period::ModernArt => {
                    "Modern Art (1900-1950) broke from traditional techniques, embracing \
                     abstraction, experimentation, and diverse movements."
                }
                Period::Contemporary => {
                    "Contemporary Art (1950-present) encompasses diverse styles, media, and \
                     concepts, characterized by pluralism and conceptual approaches."
                }
            },
        }
    }
}

/// Artists the bot knows a biography for, matched by surname fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownArtist {
    VanGogh,
    Monet,
    Rembrandt,
    Leonardo,
    Picasso,
    Degas,
    Michelangelo,
    Caravaggio,
    Raphael,
    Rubens,
    Vermeer,
    Cezanne,
    Matisse,
    Goya,
}

impl KnownArtist {
    /// Order matters: the first fragment found in the name wins.
    const FRAGMENTS: [(&'static str, KnownArtist); 14] = [
        ("van gogh", KnownArtist::VanGogh),
        ("monet", KnownArtist::Monet),
        ("rembrandt", KnownArtist::Rembrandt),
        ("leonardo", KnownArtist::Leonardo),
        ("picasso", KnownArtist::Picasso),
        ("degas", KnownArtist::Degas),
        ("michelangelo", KnownArtist::Michelangelo),
        ("caravaggio", KnownArtist::Caravaggio),
        ("raphael", KnownArtist::Raphael),
        ("rubens", KnownArtist::Rubens),
        ("vermeer", KnownArtist::Vermeer),
        ("cezanne", KnownArtist::Cezanne),
        ("matisse", KnownArtist::Matisse),
        ("goya", KnownArtist::Goya),
    ];

    /// Case-insensitive substring match of a display name against the table.
    pub fn match_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::FRAGMENTS
            .iter()
            .find(|(fragment, _)| name.contains(fragment))
            .map(|(_, artist)| *artist)
    }

    fn biography(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ru => match self {
                KnownArtist::VanGogh => {
                    "Винсент ван Гог (1853-1890) был голландским постимпрессионистом, чьи работы \
                     глубоко повлияли на искусство XX века. Известен яркими цветами и \
                     эмоциональной честностью."
                }
                KnownArtist::Monet => {
                    "Клод Моне (1840-1926) был основателем французского импрессионизма. Знаменит \
                     серийными картинами, запечатлевающими свет и атмосферу."
                }
                KnownArtist::Rembrandt => {
                    "Рембрандт ван Рейн (1606-1669) был художником Золотого века Нидерландов, \
                     мастером света и тени (кьяроскуро)."
                }
                KnownArtist::Leonardo => {
                    "Леонардо да Винчи (1452-1519) был итальянским универсалом эпохи Возрождения \
                     - художником, изобретателем, учёным."
                }
                KnownArtist::Picasso => {
                    "Пабло Пикассо (1881-1973) был испанским художником и сооснователем кубизма."
                }
                _ => self.biography(Locale::En),
            },
            Locale::De => match self {
                KnownArtist::VanGogh => {
                    "Vincent van Gogh (1853-1890) war ein niederländischer postimpressionistischer \
                     Maler, dessen Werk die Kunst des 20. Jahrhunderts tiefgreifend beeinflusste. \
                     Bekannt für kräftige Farben und emotionale Ehrlichkeit."
                }
                KnownArtist::Monet => {
                    "Claude Monet (1840-1926) war ein Begründer des französischen \
                     Impressionismus. Berühmt für seine Serienbilder, die Licht und Atmosphäre \
                     einfangen."
                }
                KnownArtist::Rembrandt => {
                    "Rembrandt van Rijn (1606-1669) war ein niederländischer Maler des Goldenen \
                     Zeitalters, Meister von Licht und Schatten (Chiaroscuro)."
                }
                KnownArtist::Leonardo => {
                    "Leonardo da Vinci (1452-1519) war ein italienischer \
                     Renaissance-Universalgelehrter - Maler, Erfinder, Wissenschaftler."
                }
                KnownArtist::Picasso => {
                    "Pablo Picasso (1881-1973) war ein spanischer Maler und Mitbegründer des \
                     Kubismus."
                }
                _ => self.biography(Locale::En),
            },
            Locale::En => match self {
                KnownArtist::VanGogh => {
                    "Vincent van Gogh (1853-1890) was a Dutch Post-Impressionist painter whose \
                     work profoundly influenced 20th-century art. Known for bold colors, dramatic \
                     brushwork, and emotional honesty."
                }
                KnownArtist::Monet => {
                    "Claude Monet (1840-1926) was a founder of French Impressionism. Famous for \
                     his series paintings capturing light and atmosphere, including water lilies, \
                     haystacks, and the Rouen Cathedral."
                }
                KnownArtist::Rembrandt => {
                    "Rembrandt van Rijn (1606-1669) was a Dutch Golden Age painter, considered \
                     one of the greatest visual artists in history. Master of light and shadow \
                     (chiaroscuro)."
                }
                KnownArtist::Leonardo => {
                    "Leonardo da Vinci (1452-1519) was an Italian Renaissance polymath - painter, \
                     inventor, scientist. Creator of the Mona Lisa and The Last Supper."
                }
                KnownArtist::Picasso => {
                    "Pablo Picasso (1881-1973) was a Spanish painter and co-founder of Cubism. \
                     One of the most influential artists of the 20th century."
                }
                KnownArtist::Degas => {
                    "Edgar Degas (1834-1917) was a French Impressionist artist famous for his \
                     paintings of ballet dancers, capturing movement and light in innovative \
                     ways."
                }
                KnownArtist::Michelangelo => {
                    "Michelangelo (1475-1564) was an Italian Renaissance sculptor, painter, and \
                     architect. Creator of the Sistine Chapel ceiling and the statue of David."
                }
                KnownArtist::Caravaggio => {
                    "Caravaggio (1571-1610) was an Italian Baroque master known for dramatic use \
                     of light and shadow (tenebrism) and realistic depiction of religious scenes."
                }
                KnownArtist::Raphael => {
                    "Raphael (1483-1520) was an Italian High Renaissance painter known for \
                     harmonious compositions and graceful figures."
                }
                KnownArtist::Rubens => {
                    "Peter Paul Rubens (1577-1640) was a Flemish Baroque painter known for \
                     dynamic compositions, vibrant colors, and sensuous figures."
                }
                KnownArtist::Vermeer => {
                    "Johannes Vermeer (1632-1675) was a Dutch Baroque painter who specialized in \
                     domestic interior scenes. Master of light."
                }
                KnownArtist::Cezanne => {
                    "Paul Cézanne (1839-1906) was a French Post-Impressionist painter whose work \
                     laid foundations for the transition to Cubism."
                }
                KnownArtist::Matisse => {
                    "Henri Matisse (1869-1954) was a French artist known for revolutionary use \
                     of color. Leader of the Fauvism movement."
                }
                KnownArtist::Goya => {
                    "Francisco Goya (1746-1828) was a Spanish Romantic painter considered the \
                     last of the Old Masters and first of the moderns."
                }
            },
        }
    }
}

/// Biography text for an artist display name, templated when unknown.
fn artist_context(artist: &str, locale: Locale) -> String {
    if let Some(known) = KnownArtist::match_name(artist) {
        return known.biography(locale).to_string();
    }
    let artist = html::escape(artist);
    match locale {
        Locale::En => format!("{artist} was a significant artist whose work contributed to art history."),
        Locale::Ru => format!("{artist} был значимым художником, внёсшим вклад в историю искусства."),
        Locale::De => format!("{artist} war ein bedeutender Künstler, der zur Kunstgeschichte beitrug."),
    }
}

/// Rule-based style phrases from the artist, period and title.
fn style_characteristics(
    artist: &str,
    period: Option<Period>,
    title: &str,
    locale: Locale,
) -> String {
    let mut phrases: Vec<&'static str> = Vec::new();

    match KnownArtist::match_name(artist) {
        Some(KnownArtist::VanGogh) => phrases.push(match locale {
            Locale::En => "bold brushstrokes and vibrant colors",
            Locale::Ru => "смелые мазки и яркие цвета",
            Locale::De => "kühne Pinselstriche und lebendige Farben",
        }),
        Some(KnownArtist::Monet) => phrases.push(match locale {
            Locale::En => "impressionist light effects and soft palette",
            Locale::Ru => "импрессионистские световые эффекты",
            Locale::De => "impressionistische Lichteffekte",
        }),
        Some(KnownArtist::Rembrandt) => phrases.push(match locale {
            Locale::En => "dramatic chiaroscuro and psychological depth",
            Locale::Ru => "драматическое кьяроскуро и психологическая глубина",
            Locale::De => "dramatisches Chiaroscuro und psychologische Tiefe",
        }),
        Some(KnownArtist::Degas) => phrases.push(match locale {
            Locale::En => "innovative compositions and movement",
            Locale::Ru => "новаторские композиции и движение",
            Locale::De => "innovative Kompositionen und Bewegung",
        }),
        _ => {}
    }

    match period {
        Some(Period::Impressionism) | Some(Period::PostImpressionism) => {
            phrases.push(match locale {
                Locale::En => "loose brushwork capturing light",
                Locale::Ru => "свободные мазки, передающие свет",
                Locale::De => "lockere Pinselführung, die Licht einfängt",
            })
        }
        Some(Period::Baroque) => phrases.push(match locale {
            Locale::En => "dramatic composition and rich colors",
            Locale::Ru => "драматическая композиция и насыщенные цвета",
            Locale::De => "dramatische Komposition und satte Farben",
        }),
        Some(Period::Renaissance) => phrases.push(match locale {
            Locale::En => "realistic perspective and balance",
            Locale::Ru => "реалистичная перспектива и баланс",
            Locale::De => "realistische Perspektive und Balance",
        }),
        _ => {}
    }

    let title = title.to_lowercase();
    if title.contains("portrait") {
        phrases.push(match locale {
            Locale::En => "human expression focus",
            Locale::Ru => "внимание к человеческому выражению",
            Locale::De => "Fokus auf menschlichen Ausdruck",
        });
    } else if title.contains("landscape") {
        phrases.push(match locale {
            Locale::En => "natural scenery emphasis",
            Locale::Ru => "акцент на природных пейзажах",
            Locale::De => "Betonung natürlicher Landschaften",
        });
    }

    if phrases.is_empty() {
        match locale {
            Locale::En => "distinctive artistic vision",
            Locale::Ru => "уникальное художественное видение",
            Locale::De => "einzigartige künstlerische Vision",
        }
        .to_string()
    } else {
        phrases.join(", ")
    }
}

/// Assemble the full multi-section description for an artwork.
///
/// Section order is fixed: historical context, artist, period (omitted when
/// no year can be parsed from the date), technical details. Museum-supplied
/// fields are HTML-escaped here so the result can go straight into an
/// HTML-parse-mode caption.
pub fn describe(artwork: &Artwork, locale: Locale) -> String {
    let artist = html::escape(&artwork.artist);
    let mut out = String::new();

    out.push_str(text(locale, TextKey::HistoricalContext));
    out.push('\n');

    if !artwork.culture.is_empty() {
        let culture = html::escape(&artwork.culture);
        match locale {
            Locale::En => out.push_str(&format!(
                "This masterpiece originates from {culture} culture. "
            )),
            Locale::Ru => out.push_str(&format!("Этот шедевр происходит из культуры {culture}. ")),
            Locale::De => out.push_str(&format!(
                "Dieses Meisterwerk stammt aus der {culture} Kultur. "
            )),
        }
    }

    match locale {
        Locale::En => out.push_str(&format!("Created by {artist}")),
        Locale::Ru => out.push_str(&format!("Создано {artist}")),
        Locale::De => out.push_str(&format!("Geschaffen von {artist}")),
    }
    if !artwork.date.is_empty() && artwork.date != "Unknown" {
        let date = html::escape(&artwork.date);
        match locale {
            Locale::En => out.push_str(&format!(" in {date}")),
            Locale::Ru => out.push_str(&format!(" в {date}")),
            Locale::De => out.push_str(&format!(" im Jahr {date}")),
        }
    }
    out.push_str(".\n\n");

    out.push_str(text(locale, TextKey::AboutArtist));
    out.push('\n');
    out.push_str(&artist_context(&artwork.artist, locale));
    out.push_str("\n\n");

    let period = Period::from_date(&artwork.date);
    if let Some(period) = period {
        out.push_str(text(locale, TextKey::ArtisticPeriod));
        out.push('\n');
        out.push_str(period.narrative(locale));
        out.push_str("\n\n");
    }

    out.push_str(text(locale, TextKey::TechnicalDetails));
    out.push('\n');
    if !artwork.medium.is_empty() {
        out.push_str(&format!(
            "{}: {}\n",
            text(locale, TextKey::MediumLabel),
            html::escape(&artwork.medium)
        ));
    }
    if !artwork.department.is_empty() {
        out.push_str(&format!(
            "{}: {}\n",
            text(locale, TextKey::DepartmentLabel),
            html::escape(&artwork.department)
        ));
    }
    out.push_str(&format!(
        "{}: {}\n",
        text(locale, TextKey::StyleLabel),
        style_characteristics(&artwork.artist, period, &artwork.title, locale)
    ));

    out
}
