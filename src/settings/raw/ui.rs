use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) theme: Option<String>,
    pub(super) animate: Option<bool>,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(theme) = cli.theme.clone() {
            self.theme = Some(theme);
        }
        if let Some(value) = cli.animate {
            self.animate = Some(value);
        }
    }
}
