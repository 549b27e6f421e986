pub mod language_switcher;
pub mod log_console;

use log::info;

use crate::extensions::api::{ExtensionCatalog, ExtensionCatalogError};

/// Install the extensions bundled with the viewer.
pub fn register_builtin_extensions(
    catalog: &mut ExtensionCatalog,
) -> Result<(), ExtensionCatalogError> {
    catalog.register_package(language_switcher::bundle())?;
    catalog.register_package(log_console::bundle())?;
    info!("builtin extensions installed");
    Ok(())
}
