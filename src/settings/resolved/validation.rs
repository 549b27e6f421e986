use quire::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if let Some(name) = &config.theme
        && theme::by_name(name).is_none()
    {
        return Err(ConfigError::invalid(
            "ui.theme",
            name.clone(),
            sources.source_for_theme(),
            format!("unknown theme (available: {})", theme::names().join(", ")),
        ));
    }

    if let Some(path) = &config.notebook_path
        && !path.exists()
    {
        return Err(ConfigError::invalid(
            "notebook.path",
            path.display().to_string(),
            sources.source_for_notebook_path(),
            "file does not exist",
        ));
    }

    Ok(())
}
