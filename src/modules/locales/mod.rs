use async_trait::async_trait;
use axum::{
    extract::State,
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    routing::get,
    Json, Router,
};
use catalog_i18n::{negotiate, Locale, SUPPORTED_LOCALES};
use catalog_kernel::{InitCtx, Module};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::sync::Arc;

/// Pick the response locale from `Accept-Language`, else `default`.
pub fn from_headers(headers: &HeaderMap, default: Locale) -> Locale {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(negotiate)
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleInfo {
    pub code: Locale,
    pub name: &'static str,
    pub default: bool,
}

pub fn supported(default: Locale) -> Vec<LocaleInfo> {
    SUPPORTED_LOCALES
        .iter()
        .map(|&code| LocaleInfo {
            code,
            name: code.display_name(),
            default: code == default,
        })
        .collect()
}

/// Publishes the supported locales and the configured default
pub struct LocalesModule {
    default_locale: OnceCell<Locale>,
}

impl LocalesModule {
    pub const fn new() -> Self {
        Self {
            default_locale: OnceCell::new(),
        }
    }

    fn default_locale(&self) -> Locale {
        self.default_locale.get().copied().unwrap_or_default()
    }
}

impl Default for LocalesModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for LocalesModule {
    fn name(&self) -> &'static str {
        "locales"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let locale = ctx.settings.i18n.default_locale;
        if self.default_locale.set(locale).is_err() {
            tracing::warn!(module = self.name(), "module initialized more than once");
        }
        tracing::info!(
            module = self.name(),
            default_locale = %locale,
            supported = SUPPORTED_LOCALES.len(),
            "locales module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_locales))
            .with_state(self.default_locale())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List supported locales",
                        "tags": ["Locales"],
                        "responses": {
                            "200": {
                                "description": "Supported locales in presentation order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/LocaleInfo" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "LocaleInfo": {
                        "type": "object",
                        "properties": {
                            "code": { "type": "string", "enum": ["en", "es", "fr"] },
                            "name": { "type": "string", "description": "Locale name in its own language" },
                            "default": { "type": "boolean" }
                        },
                        "required": ["code", "name", "default"]
                    }
                }
            }
        }))
    }
}

async fn list_locales(State(default): State<Locale>) -> Json<Vec<LocaleInfo>> {
    Json(supported(default))
}

/// Create a new instance of the locales module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(LocalesModule::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use catalog_kernel::settings::Settings;
    use tower::ServiceExt;

    #[test]
    fn headers_negotiate_or_fall_back() {
        let mut headers = HeaderMap::new();
        assert_eq!(from_headers(&headers, Locale::Fr), Locale::Fr);

        headers.insert(ACCEPT_LANGUAGE, "es-ES,es;q=0.9,en;q=0.5".parse().unwrap());
        assert_eq!(from_headers(&headers, Locale::Fr), Locale::Es);

        headers.insert(ACCEPT_LANGUAGE, "de-DE".parse().unwrap());
        assert_eq!(from_headers(&headers, Locale::En), Locale::En);
    }

    #[test]
    fn exactly_one_default_is_flagged() {
        let locales = supported(Locale::Es);
        assert_eq!(locales.len(), SUPPORTED_LOCALES.len());
        let defaults: Vec<_> = locales.iter().filter(|l| l.default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].code, Locale::Es);
    }

    #[tokio::test]
    async fn lists_locales_with_configured_default() {
        let module = LocalesModule::new();
        let mut settings = Settings::default();
        settings.i18n.default_locale = Locale::Fr;
        module.init(&InitCtx { settings: &settings }).await.unwrap();

        let response = module
            .routes()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body[0]["code"], "en");
        assert_eq!(body[2]["code"], "fr");
        assert_eq!(body[2]["default"], true);
        assert_eq!(body[1]["name"], "Español");
    }
}
