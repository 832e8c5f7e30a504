//! Genre and free-text filtering over the catalog.

use serde::Serialize;

use super::models::{Book, Genre, UnknownGenre};

/// Parse a `genre` request parameter. A blank value means no selection.
pub fn parse_genre(raw: Option<&str>) -> Result<Option<Genre>, UnknownGenre> {
    match raw.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => key.parse().map(Some),
        None => Ok(None),
    }
}

/// Anything the catalog filter can match against.
pub trait Searchable {
    fn genre(&self) -> Genre;
    fn title(&self) -> &str;
    fn author(&self) -> &str;
}

impl Searchable for Book {
    fn genre(&self) -> Genre {
        self.genre
    }

    fn title(&self) -> &str {
        self.title
    }

    fn author(&self) -> &str {
        self.author
    }
}

/// Transient filter state for one view.
///
/// A record passes when its genre equals the selected genre (if any) and the
/// query, ignoring case, occurs in its title or its author. An empty query
/// passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFilter {
    genre: Option<Genre>,
    query: String,
}

impl CatalogFilter {
    pub fn new(genre: Option<Genre>, query: impl Into<String>) -> Self {
        Self {
            genre,
            query: query.into(),
        }
    }

    pub fn genre(&self) -> Option<Genre> {
        self.genre
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select `genre`, or clear the selection if `genre` is already selected.
    pub fn toggle_genre(&mut self, genre: Genre) {
        self.genre = if self.genre == Some(genre) {
            None
        } else {
            Some(genre)
        };
    }

    /// The state a click on `genre`'s button would produce.
    pub fn toggled(&self, genre: Genre) -> Self {
        let mut next = self.clone();
        next.toggle_genre(genre);
        next
    }

    pub fn clear_genre(&mut self) {
        self.genre = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.matches_needle(item, &self.query.to_lowercase())
    }

    /// Matching records in source order.
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let needle = self.query.to_lowercase();
        let matched: Vec<&T> = items
            .iter()
            .filter(|item| self.matches_needle(*item, &needle))
            .collect();

        tracing::debug!(
            genre = ?self.genre,
            query = %self.query,
            total = items.len(),
            matched = matched.len(),
            "catalog filter applied"
        );
        matched
    }

    fn matches_needle<T: Searchable + ?Sized>(&self, item: &T, needle: &str) -> bool {
        let genre_matches = self.genre.map_or(true, |genre| item.genre() == genre);
        let text_matches = needle.is_empty()
            || item.title().to_lowercase().contains(needle)
            || item.author().to_lowercase().contains(needle);
        genre_matches && text_matches
    }
}
