//! # Collation
//!
//! Locale-aware string ordering for the country list.
//!
//! Byte order puts `"Zambia"` before `"Åland Islands"` and `"Zimbabwe"`
//! before `"Ísland"`. Users expect alphabetical order, so names are compared
//! on several levels, each consulted only when the previous one ties:
//!
//! ```text
//! primary    base letters, case-folded, accents stripped   "cote d'ivoire"
//! secondary  accents (NFD, case-folded)                    "co\u{302}te d'ivoire"
//! tertiary   case, lowercase first                         [T, f, f, ...]
//! identical  NFC code points                               "Côte d'Ivoire"
//! ```
//!
//! The locale only affects the primary level. Tailored languages treat some
//! letters (or letter pairs such as Czech `ch`) as letters of their own that
//! sort right after a base letter. Languages whose alphabet already matches
//! the root order use it silently; any other language falls back to the root
//! order with a warning in the log.

use std::cmp::Ordering;

use log::warn;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Letters that the root order folds onto plain ASCII letters even though
/// they do not decompose canonically.
const ROOT_EXPANSIONS: &[(char, &str)] = &[
    ('æ', "ae"),
    ('œ', "oe"),
    ('ß', "ss"),
    ('ø', "o"),
    ('đ', "d"),
    ('ð', "d"),
    ('ł', "l"),
    ('ı', "i"),
];

/// A tailored letter: lowercase NFC sequence, the base letter it follows,
/// and its rank among letters following that base (1 is closest).
type Tailored = (&'static str, char, u32);

/// Swedish and Finnish: å < ä < ö, all after z. æ and ø sort with ä and ö.
const SWEDISH: &[Tailored] = &[
    ("å", 'z', 1),
    ("ä", 'z', 2),
    ("æ", 'z', 2),
    ("ö", 'z', 3),
    ("ø", 'z', 3),
];

/// Danish and Norwegian: æ < ø < å, all after z. ä and ö sort with æ and ø.
const DANISH: &[Tailored] = &[
    ("æ", 'z', 1),
    ("ä", 'z', 1),
    ("ø", 'z', 2),
    ("ö", 'z', 2),
    ("å", 'z', 3),
];

const SPANISH: &[Tailored] = &[("ñ", 'n', 1)];

const CZECH: &[Tailored] = &[
    ("č", 'c', 1),
    ("ch", 'h', 1),
    ("ř", 'r', 1),
    ("š", 's', 1),
    ("ž", 'z', 1),
];

const SLOVAK: &[Tailored] = &[
    ("ä", 'a', 1),
    ("č", 'c', 1),
    ("ch", 'h', 1),
    ("ô", 'o', 1),
    ("š", 's', 1),
    ("ž", 'z', 1),
];

const POLISH: &[Tailored] = &[
    ("ą", 'a', 1),
    ("ć", 'c', 1),
    ("ę", 'e', 1),
    ("ł", 'l', 1),
    ("ń", 'n', 1),
    ("ó", 'o', 1),
    ("ś", 's', 1),
    ("ź", 'z', 1),
    ("ż", 'z', 2),
];

/// Croatian, Bosnian and Latin-script Serbian.
const CROATIAN: &[Tailored] = &[
    ("č", 'c', 1),
    ("ć", 'c', 2),
    ("dž", 'd', 1),
    ("đ", 'd', 2),
    ("lj", 'l', 1),
    ("nj", 'n', 1),
    ("š", 's', 1),
    ("ž", 'z', 1),
];

/// Hungarian. Long vowels ő and ű share the primary weight of ö and ü.
const HUNGARIAN: &[Tailored] = &[
    ("cs", 'c', 1),
    ("dz", 'd', 1),
    ("dzs", 'd', 2),
    ("gy", 'g', 1),
    ("ly", 'l', 1),
    ("ny", 'n', 1),
    ("ö", 'o', 1),
    ("ő", 'o', 1),
    ("sz", 's', 1),
    ("ty", 't', 1),
    ("ü", 'u', 1),
    ("ű", 'u', 1),
    ("zs", 'z', 1),
];

/// Languages whose alphabetical order is the root order.
const ROOT_ORDER_LANGUAGES: &[&str] = &[
    "root", "und", "af", "ca", "de", "en", "fr", "ga", "id", "it", "ms", "nl", "pt", "sw",
];

/// Primary weights leave room below each code point for tailored letters.
const WEIGHT_SHIFT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tailoring {
    #[default]
    Root,
    Swedish,
    Danish,
    Spanish,
    Czech,
    Slovak,
    Polish,
    Croatian,
    Hungarian,
}

impl Tailoring {
    fn from_language(language: &str) -> Option<Self> {
        let tailoring = match language {
            "sv" | "fi" => Tailoring::Swedish,
            "da" | "nb" | "nn" | "no" => Tailoring::Danish,
            "es" => Tailoring::Spanish,
            "cs" => Tailoring::Czech,
            "sk" => Tailoring::Slovak,
            "pl" => Tailoring::Polish,
            "hr" | "bs" | "sr" => Tailoring::Croatian,
            "hu" => Tailoring::Hungarian,
            _ => return None,
        };
        Some(tailoring)
    }

    fn table(self) -> &'static [Tailored] {
        match self {
            Tailoring::Root => &[],
            Tailoring::Swedish => SWEDISH,
            Tailoring::Danish => DANISH,
            Tailoring::Spanish => SPANISH,
            Tailoring::Czech => CZECH,
            Tailoring::Slovak => SLOVAK,
            Tailoring::Polish => POLISH,
            Tailoring::Croatian => CROATIAN,
            Tailoring::Hungarian => HUNGARIAN,
        }
    }
}

/// Lowercased language subtag of a BCP 47 style tag.
fn primary_language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Precomputed comparison key. Two strings compare the same way their keys do.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    primary: Vec<u32>,
    secondary: Vec<char>,
    tertiary: Vec<bool>,
    identical: String,
}

/// A string comparator parameterized by locale.
#[derive(Debug, Clone)]
pub struct Collator {
    locale: String,
    tailoring: Tailoring,
}

impl Default for Collator {
    fn default() -> Self {
        Self::root()
    }
}

impl Collator {
    /// Builds a collator for a BCP 47 style tag (`"en-US"`, `"sv"`, `"nb_NO"`).
    /// Only the language subtag is consulted. Languages without rules get the
    /// root order.
    pub fn new(locale: &str) -> Self {
        let locale = locale.trim();
        if locale.is_empty() {
            return Self::root();
        }
        let language = primary_language(locale);
        let tailoring = Tailoring::from_language(&language).unwrap_or_else(|| {
            if !ROOT_ORDER_LANGUAGES.contains(&language.as_str()) {
                warn!("No collation rules for locale {:?}, sorting in root order", locale);
            }
            Tailoring::Root
        });
        Self {
            locale: locale.to_string(),
            tailoring,
        }
    }

    /// Whether this collator orders names by rules specific to its locale.
    pub fn is_tailored(&self) -> bool {
        self.tailoring != Tailoring::Root
    }

    pub fn root() -> Self {
        Self {
            locale: "root".to_string(),
            tailoring: Tailoring::Root,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    pub fn sort_key(&self, s: &str) -> SortKey {
        let composed: String = s.nfc().collect();
        SortKey {
            primary: self.primary_weights(&composed),
            secondary: composed.chars().flat_map(char::to_lowercase).nfd().collect(),
            tertiary: composed.chars().map(char::is_uppercase).collect(),
            identical: composed,
        }
    }

    /// Stable sort of `items` by the string `key` returns, computing each key once.
    pub fn sort_by<T, F>(&self, items: &mut [T], key: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by_cached_key(|item| self.sort_key(key(item)));
    }

    fn primary_weights(&self, composed: &str) -> Vec<u32> {
        let table = self.tailoring.table();
        let lowered: String = composed.chars().flat_map(char::to_lowercase).collect();
        let mut weights = Vec::with_capacity(lowered.len());
        let mut rest = lowered.as_str();

        while let Some(lower) = rest.chars().next() {
            // Longest match wins, so Hungarian "dzs" beats "dz".
            let tailored = table
                .iter()
                .filter(|(sequence, _, _)| rest.starts_with(sequence))
                .max_by_key(|(sequence, _, _)| sequence.len());
            if let Some(&(sequence, follows, rank)) = tailored {
                weights.push(base_weight(follows) + rank);
                rest = &rest[sequence.len()..];
                continue;
            }

            rest = &rest[lower.len_utf8()..];
            if let Some(&(_, expansion)) = ROOT_EXPANSIONS.iter().find(|(letter, _)| *letter == lower) {
                weights.extend(expansion.chars().map(base_weight));
                continue;
            }
            weights.extend(
                std::iter::once(lower)
                    .nfd()
                    .filter(|c| !is_combining_mark(*c))
                    .map(base_weight),
            );
        }

        weights
    }
}

fn base_weight(c: char) -> u32 {
    (c as u32) << WEIGHT_SHIFT
}
