pub mod audit;
pub mod data;
pub mod filter;
pub mod labels;
pub mod models;
pub mod pages;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use catalog_i18n::Locale;
use catalog_kernel::{InitCtx, Module};
use once_cell::sync::OnceCell;

use pages::{PageRenderer, PageState};
use routes::ApiState;

/// Catalog browsing: the JSON API under `/api/books` and the localized pages.
pub struct BooksModule {
    renderer: Arc<PageRenderer>,
    default_locale: OnceCell<Locale>,
}

impl BooksModule {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            renderer: Arc::new(PageRenderer::new()?),
            default_locale: OnceCell::new(),
        })
    }

    fn default_locale(&self) -> Locale {
        self.default_locale.get().copied().unwrap_or_default()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let locale = ctx.settings.i18n.default_locale;
        if self.default_locale.set(locale).is_err() {
            tracing::warn!(module = self.name(), "module initialized more than once");
        }

        let findings = audit::audit(data::BOOKS);
        for finding in &findings {
            tracing::warn!(slug = finding.slug, issue = %finding.issue, "catalog data issue");
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = data::BOOKS.len(),
            findings = findings.len(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(ApiState {
            default_locale: self.default_locale(),
        })
    }

    fn pages(&self) -> Router {
        pages::router(PageState {
            renderer: Arc::clone(&self.renderer),
            default_locale: self.default_locale(),
        })
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let locale_param = serde_json::json!({
            "name": "locale",
            "in": "query",
            "required": false,
            "description": "Response locale; falls back to Accept-Language, then the configured default",
            "schema": { "type": "string", "enum": ["en", "es", "fr"] }
        });
        let error_response = |description: &str| {
            serde_json::json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            })
        };

        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books matching a genre and search query",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "genre",
                                "in": "query",
                                "required": false,
                                "schema": { "$ref": "#/components/schemas/Genre" }
                            },
                            {
                                "name": "q",
                                "in": "query",
                                "required": false,
                                "description": "Case-insensitive substring of the title or author",
                                "schema": { "type": "string" }
                            },
                            locale_param
                        ],
                        "responses": {
                            "200": {
                                "description": "Matching books in catalog order",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/CatalogListing" }
                                    }
                                }
                            },
                            "400": error_response("Unknown genre or unsupported locale")
                        }
                    }
                },
                "/genres": {
                    "get": {
                        "summary": "Genres in order of first appearance",
                        "tags": ["Books"],
                        "parameters": [locale_param],
                        "responses": {
                            "200": {
                                "description": "Genre keys with localized labels",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/GenreOption" }
                                        }
                                    }
                                }
                            },
                            "400": error_response("Unsupported locale")
                        }
                    }
                },
                "/stats": {
                    "get": {
                        "summary": "Catalog counts",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Totals across the whole catalog",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/CatalogStats" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Books health check",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": { "text/plain": { "schema": { "type": "string" } } }
                            }
                        }
                    }
                },
                "/{slug}": {
                    "get": {
                        "summary": "Book detail with similar titles",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "slug",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "string" }
                            },
                            locale_param
                        ],
                        "responses": {
                            "200": {
                                "description": "The book with localized labels",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookDetail" }
                                    }
                                }
                            },
                            "400": error_response("Unsupported locale"),
                            "404": error_response("No book has this slug")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Genre": {
                        "type": "string",
                        "enum": ["fiction", "science", "history", "philosophy"]
                    },
                    "GenreOption": {
                        "type": "object",
                        "properties": {
                            "key": { "$ref": "#/components/schemas/Genre" },
                            "label": { "type": "string" }
                        },
                        "required": ["key", "label"]
                    },
                    "BookSummary": {
                        "type": "object",
                        "properties": {
                            "slug": { "type": "string" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "genre": { "$ref": "#/components/schemas/Genre" },
                            "genre_label": { "type": "string" },
                            "pages": { "type": "integer" },
                            "available": { "type": "boolean" },
                            "due_date": { "type": "string", "format": "date", "description": "Present while checked out" },
                            "copies": { "type": "integer" },
                            "total_copies": { "type": "integer" }
                        },
                        "required": ["slug", "title", "author", "genre", "genre_label", "pages", "available", "copies", "total_copies"]
                    },
                    "BookDetail": {
                        "allOf": [
                            { "$ref": "#/components/schemas/BookSummary" },
                            {
                                "type": "object",
                                "properties": {
                                    "year": { "type": "integer", "description": "Negative years are BCE" },
                                    "year_label": { "type": "string" },
                                    "isbn": { "type": "string" },
                                    "description": { "type": "string" },
                                    "branch": { "type": "string" },
                                    "branch_label": { "type": "string" },
                                    "shelf": { "type": "string" },
                                    "shelf_label": { "type": "string" },
                                    "similar": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/BookSummary" }
                                    }
                                }
                            }
                        ]
                    },
                    "CatalogListing": {
                        "type": "object",
                        "properties": {
                            "locale": { "type": "string" },
                            "genre": { "$ref": "#/components/schemas/Genre" },
                            "query": { "type": "string" },
                            "count": { "type": "integer" },
                            "books": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/BookSummary" }
                            },
                            "message": { "type": "string", "description": "Present only when nothing matched" }
                        },
                        "required": ["locale", "query", "count", "books"]
                    },
                    "CatalogStats": {
                        "type": "object",
                        "properties": {
                            "total": { "type": "integer" },
                            "available": { "type": "integer" },
                            "checked_out": { "type": "integer" },
                            "genres": { "type": "integer" }
                        },
                        "required": ["total", "available", "checked_out", "genres"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> anyhow::Result<Arc<dyn Module>> {
    Ok(Arc::new(BooksModule::new()?))
}
