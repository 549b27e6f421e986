use thiserror::Error;

use super::SettingSource;

/// Validation failure for a single resolved setting, annotated with where the
/// offending value came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }
}
