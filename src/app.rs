//! Application bootstrap shared by the `catalog-app` binary and the CLI.

use anyhow::Context;
use catalog_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules;

/// Registry with every catalog module registered, not yet initialized.
pub fn build_registry() -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry).context("failed to register catalog modules")?;
    Ok(registry)
}

/// Run module lifecycle hooks around the HTTP server until shutdown.
pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    tracing::info!(
        env = ?settings.environment,
        default_locale = %settings.i18n.default_locale,
        "catalog bootstrap starting"
    );

    let registry = build_registry()?;
    let ctx = InitCtx { settings };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    let served = catalog_http::start_server(&registry, settings).await;

    // stop modules even if the server failed
    registry.stop_modules().await?;
    served
}
