use catalog_i18n::{LabelResolver, Locale, Translator};

use super::models::Genre;

const BRANCHES: &[&str] = &["Main Street Branch", "Riverside Branch", "Hillside Branch"];

const SHELVES: &[&str] = &[
    "Fiction, Row A, Shelf 3",
    "Fiction, Row A, Shelf 5",
    "Science, Row B, Shelf 7",
    "Science, Row B, Shelf 9",
    "History, Row C, Shelf 2",
    "Philosophy, Row D, Shelf 1",
];

/// Years whose display differs from their decimal form.
const SPECIAL_YEARS: &[(i32, &str)] = &[(-500, "500 BC")];

/// Display labels for stored catalog values in one locale.
///
/// Every lookup falls back to the raw stored value, so an unlisted branch or
/// a year without a special label still renders.
#[derive(Debug, Clone, Copy)]
pub struct CatalogLabels {
    translator: Translator,
}

impl CatalogLabels {
    pub fn new(locale: Locale) -> Self {
        Self {
            translator: Translator::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    /// Translate a fixed interface string.
    pub fn gt(&self, source: &str) -> String {
        self.translator.gt(source)
    }

    pub fn genre(&self, genre: Genre) -> String {
        self.resolve_label(genre.as_str(), genre.as_str())
    }

    pub fn branch(&self, branch: &str) -> String {
        self.resolve_label(branch, branch)
    }

    pub fn shelf(&self, shelf: &str) -> String {
        self.resolve_label(shelf, shelf)
    }

    pub fn year(&self, year: i32) -> String {
        let raw = year.to_string();
        self.resolve_label(&raw, &raw)
    }

    /// Descriptions are keyed by their English text.
    pub fn description(&self, description: &str) -> String {
        self.translator.gt(description)
    }
}

/// English source string for a stored key, if the key is a known label.
fn source_for(key: &str) -> Option<&'static str> {
    if let Some(genre) = Genre::ALL.into_iter().find(|g| g.as_str() == key) {
        return Some(genre.source_label());
    }
    if let Some(source) = BRANCHES.iter().chain(SHELVES).find(|s| **s == key) {
        return Some(*source);
    }
    SPECIAL_YEARS
        .iter()
        .find(|(year, _)| year.to_string() == key)
        .map(|(_, source)| *source)
}

impl LabelResolver for CatalogLabels {
    fn resolve_label(&self, key: &str, fallback: &str) -> String {
        match source_for(key) {
            Some(source) => self.translator.gt(source),
            None => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_use_display_names() {
        assert_eq!(CatalogLabels::new(Locale::En).genre(Genre::Science), "Science");
        assert_eq!(CatalogLabels::new(Locale::Es).genre(Genre::Science), "Ciencia");
        assert_eq!(
            CatalogLabels::new(Locale::Fr).genre(Genre::Philosophy),
            "Philosophie"
        );
    }

    #[test]
    fn branches_and_shelves_translate() {
        let labels = CatalogLabels::new(Locale::Es);
        assert_eq!(labels.branch("Riverside Branch"), "Sucursal Riverside");
        assert_eq!(
            labels.shelf("History, Row C, Shelf 2"),
            "Historia, fila C, estante 2"
        );
    }

    #[test]
    fn unknown_values_fall_back_to_raw() {
        let labels = CatalogLabels::new(Locale::Fr);
        assert_eq!(labels.branch("Harbor Branch"), "Harbor Branch");
        assert_eq!(labels.shelf("Poetry, Row E"), "Poetry, Row E");
        assert_eq!(labels.resolve_label("poetry", "poetry"), "poetry");
    }

    #[test]
    fn only_special_years_get_labels() {
        assert_eq!(CatalogLabels::new(Locale::En).year(-500), "500 BC");
        assert_eq!(CatalogLabels::new(Locale::Es).year(-500), "500 a. C.");
        assert_eq!(CatalogLabels::new(Locale::Fr).year(1925), "1925");
        assert_eq!(CatalogLabels::new(Locale::En).year(-44), "-44");
    }

    #[test]
    fn descriptions_translate_by_text() {
        let source = crate::books::data::find_by_slug("cosmos").unwrap().description;
        let labels = CatalogLabels::new(Locale::Fr);
        assert!(labels.description(source).starts_with("Cosmos retrace"));
        assert_eq!(CatalogLabels::new(Locale::En).description(source), source);
    }
}
