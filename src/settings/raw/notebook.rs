use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// Notebook specific configuration options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct NotebookSection {
    pub(super) path: Option<PathBuf>,
}

impl NotebookSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.notebook.clone() {
            self.path = Some(path);
        }
    }
}
