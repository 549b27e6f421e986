use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by merging default files, explicit `--config` files,
/// environment variables and CLI overrides into a validated [`ResolvedConfig`].
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let mut raw: RawConfig = build_config(cli)?
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}
