use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Locales the catalog is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the source locale.
    #[default]
    En,
    Es,
    Fr,
}

/// Supported locales in presentation order.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Es, Locale::Fr];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("unsupported locale '{0}'; expected one of en/es/fr")]
    UnsupportedLocale(String),
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Name of the locale written in that locale, for the locale selector.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    /// Parses a language tag, ignoring case and any region or script subtag.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the best supported locale from an `Accept-Language` header value.
///
/// Entries are ranked by their `q` weight; ties keep header order. Entries
/// with `q=0`, wildcards and unsupported languages are skipped, as are
/// weights outside `0..=1` or that are not finite.
pub fn negotiate(accept_language: &str) -> Option<Locale> {
    let mut best: Option<(Locale, f32)> = None;

    for entry in accept_language.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or("").trim();
        let weight = parts
            .find_map(|param| param.trim().strip_prefix("q="))
            .map_or(Some(1.0), |q| {
                q.trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|weight| (0.0..=1.0).contains(weight))
            });

        let Some(weight) = weight else {
            continue;
        };
        if weight <= 0.0 || tag == "*" {
            continue;
        }
        let Some(locale) = Locale::parse(tag) else {
            continue;
        };

        if best.map_or(true, |(_, current)| weight > current) {
            best = Some((locale, weight));
        }
    }

    best.map(|(locale, _)| locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_region() {
        assert_eq!(Locale::parse("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::parse("FR_ca"), Some(Locale::Fr));
        assert_eq!(Locale::parse(" en "), Some(Locale::En));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn from_str_reports_unsupported_locale() {
        let err = "ja".parse::<Locale>().unwrap_err();
        assert_eq!(err, I18nError::UnsupportedLocale("ja".to_string()));
        assert_eq!("es".parse::<Locale>(), Ok(Locale::Es));
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Locale::Fr).unwrap();
        assert_eq!(json, "\"fr\"");
        let parsed: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, Locale::Es);
    }

    #[test]
    fn negotiate_prefers_highest_weight() {
        assert_eq!(negotiate("de-DE, fr;q=0.4, es;q=0.9"), Some(Locale::Es));
        assert_eq!(negotiate("fr-CH, fr;q=0.9, en;q=0.8"), Some(Locale::Fr));
    }

    #[test]
    fn negotiate_keeps_header_order_on_ties() {
        assert_eq!(negotiate("es, fr"), Some(Locale::Es));
    }

    #[test]
    fn negotiate_skips_unusable_entries() {
        assert_eq!(negotiate("*, de;q=0.8"), None);
        assert_eq!(negotiate("es;q=0, fr;q=abc, en;q=0.1"), Some(Locale::En));
        assert_eq!(negotiate(""), None);
    }

    #[test]
    fn negotiate_rejects_out_of_range_weights() {
        assert_eq!(negotiate("fr;q=NaN, es"), Some(Locale::Es));
        assert_eq!(negotiate("es, fr;q=5"), Some(Locale::Es));
        assert_eq!(negotiate("es;q=0.9, fr;q=inf"), Some(Locale::Es));
        assert_eq!(negotiate("fr;q=-1"), None);
    }
}
