//! JSON endpoints for the catalog, mounted under `/api/books`.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use catalog_http::error::AppError;
use catalog_i18n::{Locale, SUPPORTED_LOCALES};
use serde::Deserialize;
use serde_json::json;

use super::{
    data::{self, BOOKS},
    filter::{parse_genre, CatalogFilter},
    labels::CatalogLabels,
    models::{BookDetail, CatalogListing, CatalogStats, Genre, GenreOption},
};
use crate::locales;

#[derive(Debug, Clone, Copy)]
pub struct ApiState {
    pub default_locale: Locale,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(list_books))
        .route("/genres", get(list_genres))
        .route("/stats", get(catalog_stats))
        .route("/health", get(health_check))
        .route("/{slug}", get(show_book))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub genre: Option<String>,
    pub q: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

/// An explicit `locale` parameter wins, then `Accept-Language`, then the default.
fn resolve_locale(
    requested: Option<&str>,
    headers: &HeaderMap,
    default: Locale,
) -> Result<Locale, AppError> {
    match requested.map(str::trim).filter(|code| !code.is_empty()) {
        Some(code) => code.parse().map_err(|err: catalog_i18n::I18nError| {
            let supported: Vec<&str> = SUPPORTED_LOCALES.iter().map(|l| l.as_str()).collect();
            AppError::bad_request(err.to_string())
                .with_detail(json!({ "field": "locale", "value": code, "supported": supported }))
        }),
        None => Ok(locales::from_headers(headers, default)),
    }
}

async fn list_books(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<CatalogListing>, AppError> {
    let locale = resolve_locale(params.locale.as_deref(), &headers, state.default_locale)?;
    let genre = parse_genre(params.genre.as_deref()).map_err(|err| {
        let supported: Vec<&str> = Genre::ALL.iter().map(|g| g.as_str()).collect();
        AppError::bad_request(err.to_string())
            .with_detail(json!({ "field": "genre", "value": err.0, "supported": supported }))
    })?;

    let filter = CatalogFilter::new(genre, params.q.unwrap_or_default());
    let listing = CatalogListing::build(BOOKS, filter, &CatalogLabels::new(locale));
    Ok(Json(listing))
}

async fn list_genres(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<LocaleParams>,
) -> Result<Json<Vec<GenreOption>>, AppError> {
    let locale = resolve_locale(params.locale.as_deref(), &headers, state.default_locale)?;
    let labels = CatalogLabels::new(locale);
    let genres = data::genres(BOOKS)
        .into_iter()
        .map(|genre| GenreOption::localized(genre, &labels))
        .collect();
    Ok(Json(genres))
}

async fn catalog_stats() -> Json<CatalogStats> {
    Json(data::stats(BOOKS))
}

async fn show_book(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<BookDetail>, AppError> {
    let locale = resolve_locale(params.locale.as_deref(), &headers, state.default_locale)?;
    let book = data::find_by_slug(&slug)
        .ok_or_else(|| AppError::not_found(format!("book '{}' not found", slug)))?;

    let similar = data::similar_titles(book);
    Ok(Json(BookDetail::localized(
        book,
        &similar,
        &CatalogLabels::new(locale),
    )))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "books module is healthy"
}
