use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use quire::app_dirs;

/// Merge every configuration source into a single [`Config`].
///
/// Later sources win: default files, then explicit `--config` files, then
/// `QUIRE__`-prefixed environment variables. CLI flags are applied after
/// deserialization and override all of these.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    for (path, required) in file_sources(cli) {
        builder = builder.add_source(File::from(path).required(required));
    }
    builder = builder.add_source(environment_source());

    builder
        .build()
        .context("failed to merge configuration sources")
}

/// Configuration files in merge order. Only files named with `--config` must
/// exist; the default locations are consulted opportunistically.
fn file_sources(cli: &CliArgs) -> Vec<(PathBuf, bool)> {
    let mut sources = Vec::new();
    if !cli.no_config {
        sources.extend(default_config_files().into_iter().map(|path| (path, false)));
    }
    sources.extend(cli.config.iter().map(|path| (path.clone(), true)));
    sources
}

/// Environment variables shaped `QUIRE__SECTION__KEY`, e.g. `QUIRE__UI__THEME`.
fn environment_source() -> Environment {
    Environment::with_prefix("quire")
        .separator("__")
        .try_parsing(true)
}

/// Default configuration file locations, most global first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current) = env::current_dir() {
        files.push(current.join(".quire.toml"));
        files.push(current.join("quire.toml"));
    }

    files
}
