//! Configuration and data directory lookup for `quire`.
//!
//! Each directory honours an environment override first and otherwise lands
//! in the platform location chosen by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "quire";
const APPLICATION: &str = "quire";

const CONFIG_DIR_ENV: &str = "QUIRE_CONFIG_DIR";
const DATA_DIR_ENV: &str = "QUIRE_DATA_DIR";

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
    resolve(CONFIG_DIR_ENV, |dirs| dirs.config_local_dir().to_path_buf())
}

/// Return the data directory that stores viewer assets.
pub fn get_data_dir() -> Result<PathBuf> {
    resolve(DATA_DIR_ENV, |dirs| dirs.data_local_dir().to_path_buf())
}

fn resolve(env_key: &str, select: impl FnOnce(&ProjectDirs) -> PathBuf) -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(env_key) {
        return Ok(dir);
    }

    let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for quire"))?;
    Ok(select(&dirs))
}

/// An empty value counts as unset, so exported-but-blank variables fall back
/// to the platform default.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
