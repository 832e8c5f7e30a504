//! Localization for the library catalog.
//!
//! Strings are keyed by their English source text. Each non-source locale
//! carries a static table of `(source, translation)` pairs; a missing entry
//! resolves to the source text, so English needs no table at all.

mod catalog;
mod locale;

pub use catalog::Translator;
pub use locale::{negotiate, I18nError, Locale, SUPPORTED_LOCALES};

/// Resolves a stored value to its display label.
///
/// Implementations return `fallback` when `key` has no known label, so an
/// unknown value degrades to its raw form instead of failing.
pub trait LabelResolver {
    fn resolve_label(&self, key: &str, fallback: &str) -> String;
}
