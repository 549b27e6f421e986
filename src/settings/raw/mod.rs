use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod notebook;
mod ui;

use notebook::NotebookSection;
use ui::UiSection;

/// Configuration exactly as the files and environment provided it, before
/// CLI overrides land and anything is validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    notebook: NotebookSection,
    ui: UiSection,
}

impl RawConfig {
    /// Let CLI flags win over whatever the files and environment supplied.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.notebook.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
    }

    /// Validate the merged values and produce the final [`ResolvedConfig`],
    /// recording where each validated setting came from for error reporting.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            notebook_path: self.notebook.path.is_some().then(|| {
                origin_of(
                    "notebook.path",
                    "NOTEBOOK",
                    "QUIRE__NOTEBOOK__PATH",
                    cli.notebook.is_some(),
                )
            }),
            ui_theme: self.ui.theme.is_some().then(|| {
                origin_of(
                    "ui.theme",
                    "--theme",
                    "QUIRE__UI__THEME",
                    cli.theme.is_some(),
                )
            }),
        };

        let config = ResolvedConfig {
            notebook_path: self.notebook.path,
            theme: self.ui.theme,
            animate: self.ui.animate.unwrap_or(true),
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

/// Where a present setting value came from, checked in override order: the
/// CLI flag wins, then the environment, then the configuration file.
fn origin_of(
    key: &'static str,
    cli_flag: &'static str,
    env_var: &'static str,
    from_cli: bool,
) -> SettingSource {
    if from_cli {
        SettingSource::CliFlag(cli_flag)
    } else if env::var_os(env_var).is_some() {
        SettingSource::Environment(env_var)
    } else {
        SettingSource::ConfigKey(key)
    }
}
