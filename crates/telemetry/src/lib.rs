//! Logging bootstrap.

use anyhow::Context;
use catalog_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter built from `RUST_LOG` when it parses, otherwise from the configured
/// level. A `RUST_LOG` value that failed to parse is handed back so it can be
/// reported once logging is up.
pub struct FilterChoice {
    pub filter: EnvFilter,
    pub rejected_rust_log: Option<String>,
}

/// Build the filter: a valid `rust_log` wins, otherwise the configured level.
pub fn choose_filter(
    rust_log: Option<&str>,
    settings: &TelemetrySettings,
) -> anyhow::Result<FilterChoice> {
    let rejected_rust_log = match rust_log {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => {
                return Ok(FilterChoice {
                    filter,
                    rejected_rust_log: None,
                })
            }
            Err(_) => Some(directives.to_string()),
        },
        None => None,
    };

    let filter = EnvFilter::try_new(&settings.level)
        .with_context(|| format!("invalid log level directive '{}'", settings.level))?;
    Ok(FilterChoice {
        filter,
        rejected_rust_log,
    })
}

/// Install the global tracing subscriber.
///
/// A second call is a no-op so tests and embedded callers can invoke it freely.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let FilterChoice {
        filter,
        rejected_rust_log,
    } = choose_filter(rust_log.as_deref(), settings)?;

    let installed = match settings.log_format {
        LogFormat::Pretty => fmt().with_env_filter(filter).try_init().is_ok(),
        LogFormat::Json => fmt()
            .json()
            .with_current_span(true)
            .with_env_filter(filter)
            .try_init()
            .is_ok(),
    };

    if installed {
        if let Some(directives) = rejected_rust_log {
            tracing::warn!(
                target: "catalog-telemetry",
                rust_log = %directives,
                fallback = %settings.level,
                "ignoring unparsable RUST_LOG"
            );
        }
        tracing::info!(
            target: "catalog-telemetry",
            format = ?settings.log_format,
            level = %settings.level,
            "telemetry initialized"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(level: &str) -> TelemetrySettings {
        TelemetrySettings {
            log_format: LogFormat::Pretty,
            level: level.to_string(),
        }
    }

    #[test]
    fn invalid_level_is_reported() {
        let err = choose_filter(None, &settings("catalog=notalevel"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("notalevel"));
    }

    #[test]
    fn valid_rust_log_wins() {
        let choice = choose_filter(Some("catalog_app=debug"), &settings("info")).unwrap();
        assert!(choice.rejected_rust_log.is_none());
        assert_eq!(choice.filter.to_string(), "catalog_app=debug");
    }

    #[test]
    fn malformed_rust_log_falls_back_and_is_kept_for_reporting() {
        let choice = choose_filter(Some("catalog=loudest"), &settings("warn")).unwrap();
        assert_eq!(choice.rejected_rust_log.as_deref(), Some("catalog=loudest"));
        assert_eq!(choice.filter.to_string(), "warn");
    }

    #[test]
    fn init_twice_is_harmless() {
        let settings = TelemetrySettings::default();
        init(&settings).unwrap();
        init(&settings).unwrap();
    }
}
