pub mod books;
pub mod locales;

use catalog_kernel::ModuleRegistry;

/// Register all catalog modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) -> anyhow::Result<()> {
    registry.register(locales::create_module())?;
    registry.register(books::create_module()?)?;
    Ok(())
}
