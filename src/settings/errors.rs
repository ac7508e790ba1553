use std::fmt;

use thiserror::Error;

/// Where an effective setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Default,
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("built-in default"),
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Origins of the settings that can fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfigSources {
    pub(crate) start: SettingSource,
    pub(crate) theme: SettingSource,
    pub(crate) transition_ms: SettingSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            start: SettingSource::Default,
            theme: SettingSource::Default,
            transition_ms: SettingSource::Default,
        }
    }
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_key_origin_and_value() {
        let err = ConfigError::invalid(
            "ui.transition_ms",
            "0",
            SettingSource::Environment("SLIDR__UI__TRANSITION_MS"),
            "must be between 1 and 10000",
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"invalid value for ui.transition_ms from environment variable `SLIDR__UI__TRANSITION_MS`: must be between 1 and 10000 (value: 0)"
        );
    }
}
