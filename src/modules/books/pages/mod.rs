//! Server-rendered catalog pages.
//!
//! Every page lives under a locale prefix. Filter state travels in the query
//! string, so each genre button is a plain link to the toggled state.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use catalog_http::error::AppError;
use catalog_i18n::{Locale, Translator, SUPPORTED_LOCALES};
use minijinja::{Environment, State as TemplateState};
use serde::{Deserialize, Serialize};

use super::{
    data::{self, BOOKS},
    filter::{parse_genre, CatalogFilter},
    labels::CatalogLabels,
    models::{BookDetail, BookSummary, CatalogStats, Genre},
};
use crate::locales;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("catalog.html", include_str!("../templates/catalog.html")),
    ("book.html", include_str!("../templates/book.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

const META_DESCRIPTION_CHARS: usize = 160;

/// Template environment shared by all page handlers.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .with_context(|| format!("failed to load template '{}'", name))?;
        }
        env.add_function("gt", translate);
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> anyhow::Result<String> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("unknown template '{}'", name))?;
        template
            .render(context)
            .with_context(|| format!("failed to render template '{}'", name))
    }
}

/// `gt(source)` inside templates, translated into the page's `locale`.
fn translate(state: &TemplateState, source: String) -> String {
    let locale = state
        .lookup("locale")
        .and_then(|value| value.as_str().and_then(Locale::parse))
        .unwrap_or_default();
    Translator::new(locale).gt(&source)
}

#[derive(Clone)]
pub struct PageState {
    pub renderer: Arc<PageRenderer>,
    pub default_locale: Locale,
}

pub fn router(state: PageState) -> Router {
    Router::new()
        .route("/", get(redirect_to_locale))
        .route("/{locale}", get(catalog_page))
        .route("/{locale}/book/{slug}", get(book_page))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub genre: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
struct LocaleLink {
    code: Locale,
    name: &'static str,
    href: String,
    current: bool,
}

/// One genre filter button. `target` is the selection a click produces.
#[derive(Debug, Serialize)]
pub struct GenreButton {
    pub key: Genre,
    pub label: String,
    pub active: bool,
    pub target: Option<Genre>,
}

#[derive(Serialize)]
struct CatalogPage {
    locale: Locale,
    locales: Vec<LocaleLink>,
    stats: CatalogStats,
    selected: Option<Genre>,
    query: String,
    genres: Vec<GenreButton>,
    books: Vec<BookSummary>,
}

#[derive(Serialize)]
struct BookPage {
    locale: Locale,
    locales: Vec<LocaleLink>,
    page_title: String,
    meta_description: String,
    book: BookDetail,
}

#[derive(Serialize)]
struct NotFoundPage {
    locale: Locale,
    locales: Vec<LocaleLink>,
}

/// Page locales must be spelled exactly as their code.
fn page_locale(code: &str) -> Option<Locale> {
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|locale| locale.as_str() == code)
}

fn locale_links(current: Locale, path: impl Fn(Locale) -> String) -> Vec<LocaleLink> {
    SUPPORTED_LOCALES
        .iter()
        .map(|&code| LocaleLink {
            code,
            name: code.display_name(),
            href: path(code),
            current: code == current,
        })
        .collect()
}

pub fn genre_buttons(filter: &CatalogFilter, labels: &CatalogLabels) -> Vec<GenreButton> {
    data::genres(BOOKS)
        .into_iter()
        .map(|genre| GenreButton {
            key: genre,
            label: labels.genre(genre),
            active: filter.genre() == Some(genre),
            target: filter.toggled(genre).genre(),
        })
        .collect()
}

/// Cut to at most `limit` characters without splitting one.
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

async fn redirect_to_locale(State(state): State<PageState>, headers: HeaderMap) -> Redirect {
    let locale = locales::from_headers(&headers, state.default_locale);
    Redirect::temporary(&format!("/{}", locale))
}

async fn catalog_page(
    State(state): State<PageState>,
    headers: HeaderMap,
    Path(code): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Response, AppError> {
    let Some(locale) = page_locale(&code) else {
        tracing::debug!(locale = %code, "unsupported page locale");
        return not_found(&state, locales::from_headers(&headers, state.default_locale));
    };

    // an unrecognized genre on a page just means "no genre"
    let genre = parse_genre(params.genre.as_deref()).unwrap_or_default();
    let filter = CatalogFilter::new(genre, params.q.unwrap_or_default());
    let labels = CatalogLabels::new(locale);

    let page = CatalogPage {
        locale,
        locales: locale_links(locale, |code| format!("/{}", code)),
        stats: data::stats(BOOKS),
        selected: filter.genre(),
        query: filter.query().to_string(),
        genres: genre_buttons(&filter, &labels),
        books: filter
            .apply(BOOKS)
            .into_iter()
            .map(|book| BookSummary::localized(book, &labels))
            .collect(),
    };

    let html = state.renderer.render("catalog.html", page)?;
    Ok(Html(html).into_response())
}

async fn book_page(
    State(state): State<PageState>,
    headers: HeaderMap,
    Path((code, slug)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let Some(locale) = page_locale(&code) else {
        return not_found(&state, locales::from_headers(&headers, state.default_locale));
    };
    let Some(book) = data::find_by_slug(&slug) else {
        tracing::debug!(%slug, "unknown book slug");
        return not_found(&state, locale);
    };

    let labels = CatalogLabels::new(locale);
    let detail = BookDetail::localized(book, &data::similar_titles(book), &labels);
    let page = BookPage {
        locale,
        locales: locale_links(locale, |code| format!("/{}/book/{}", code, book.slug)),
        page_title: format!("{} | {}", book.title, labels.gt("Library Catalog")),
        meta_description: truncate_chars(&detail.description, META_DESCRIPTION_CHARS),
        book: detail,
    };

    let html = state.renderer.render("book.html", page)?;
    Ok(Html(html).into_response())
}

fn not_found(state: &PageState, locale: Locale) -> Result<Response, AppError> {
    let page = NotFoundPage {
        locale,
        locales: locale_links(locale, |code| format!("/{}", code)),
    };
    let html = state.renderer.render("not_found.html", page)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
