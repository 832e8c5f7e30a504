use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{filter::CatalogFilter, labels::CatalogLabels};

/// Closed set of catalog genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Fiction,
    Science,
    History,
    Philosophy,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown genre '{0}'")]
pub struct UnknownGenre(pub String);

impl Genre {
    pub const ALL: [Genre; 4] = [
        Genre::Fiction,
        Genre::Science,
        Genre::History,
        Genre::Philosophy,
    ];

    /// Stored key, as it appears in URLs and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::Science => "science",
            Genre::History => "history",
            Genre::Philosophy => "philosophy",
        }
    }

    /// English display name, the source string for translation.
    pub const fn source_label(self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::Science => "Science",
            Genre::History => "History",
            Genre::Philosophy => "Philosophy",
        }
    }
}

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One static catalog entry.
///
/// `copies == 0` goes with `available == false` in the shipped table; that is
/// an authoring convention checked by [`super::audit`], not enforced here.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub genre: Genre,
    pub pages: u32,
    pub available: bool,
    /// ISO `YYYY-MM-DD`
    pub due_date: Option<&'static str>,
    pub copies: u32,
    pub total_copies: u32,
    /// Negative years are BCE.
    pub year: i32,
    pub isbn: &'static str,
    pub description: &'static str,
    pub branch: &'static str,
    pub shelf: &'static str,
    pub similar_slugs: &'static [&'static str],
}

/// A book as shown in a list, with its genre label localized.
#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub genre: Genre,
    pub genre_label: String,
    pub pages: u32,
    pub available: bool,
    pub due_date: Option<&'static str>,
    pub copies: u32,
    pub total_copies: u32,
}

impl BookSummary {
    pub fn localized(book: &Book, labels: &CatalogLabels) -> Self {
        Self {
            slug: book.slug,
            title: book.title,
            author: book.author,
            genre: book.genre,
            genre_label: labels.genre(book.genre),
            pages: book.pages,
            available: book.available,
            due_date: book.due_date,
            copies: book.copies,
            total_copies: book.total_copies,
        }
    }
}

/// A book as shown on its own page.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    #[serde(flatten)]
    pub summary: BookSummary,
    pub year: i32,
    pub year_label: String,
    pub isbn: &'static str,
    pub description: String,
    pub branch: &'static str,
    pub branch_label: String,
    pub shelf: &'static str,
    pub shelf_label: String,
    pub similar: Vec<BookSummary>,
}

impl BookDetail {
    pub fn localized(book: &Book, similar: &[&Book], labels: &CatalogLabels) -> Self {
        Self {
            summary: BookSummary::localized(book, labels),
            year: book.year,
            year_label: labels.year(book.year),
            isbn: book.isbn,
            description: labels.description(book.description),
            branch: book.branch,
            branch_label: labels.branch(book.branch),
            shelf: book.shelf,
            shelf_label: labels.shelf(book.shelf),
            similar: similar
                .iter()
                .map(|book| BookSummary::localized(book, labels))
                .collect(),
        }
    }
}

/// Counts shown above the catalog list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub checked_out: usize,
    pub genres: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreOption {
    pub key: Genre,
    pub label: String,
}

impl GenreOption {
    pub fn localized(genre: Genre, labels: &CatalogLabels) -> Self {
        Self {
            key: genre,
            label: labels.genre(genre),
        }
    }
}

/// The filtered catalog in one locale, with the filter that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    pub locale: catalog_i18n::Locale,
    #[serde(flatten)]
    pub filter: CatalogFilter,
    pub count: usize,
    pub books: Vec<BookSummary>,
    /// Localized "no results" text, present only when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CatalogListing {
    pub fn build(books: &[Book], filter: CatalogFilter, labels: &CatalogLabels) -> Self {
        let books: Vec<BookSummary> = filter
            .apply(books)
            .into_iter()
            .map(|book| BookSummary::localized(book, labels))
            .collect();
        let message = books
            .is_empty()
            .then(|| labels.gt("No books found matching your search."));

        Self {
            locale: labels.locale(),
            filter,
            count: books.len(),
            books,
            message,
        }
    }
}
