use anyhow::Result;
use quire::tui::theme::by_name;
use quire::{App, Notebook};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive notebook viewer.
pub(crate) struct ViewerWorkflow {
    app: App,
}

impl ViewerWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            notebook_path,
            theme,
            animate,
        } = config;

        let notebook = match notebook_path {
            Some(path) => Notebook::from_path(&path)?,
            None => Notebook::sample(),
        };

        let mut app = App::new(notebook);
        if let Some(name) = theme
            && let Some(theme) = by_name(&name)
        {
            app.set_theme(theme);
        }
        app.set_animate(animate);

        Ok(Self { app })
    }

    pub(crate) fn run(self) -> Result<()> {
        let mut app = self.app;
        app.run()
    }
}
