use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;
use slidr::tui::theme;
use slidr::ui::transition::DEFAULT_TRANSITION;
use slidr::{Motion, UnsupportedPolicy, app_dirs};

use super::errors::{ConfigError, ConfigSources, SettingSource};
use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "hlt";
const MAX_TRANSITION_MS: u64 = 10_000;

/// Mirror of the configuration files before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    pub(super) deck: DeckSection,
    pub(super) ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DeckSection {
    pub(super) path: Option<PathBuf>,
    pub(super) start: Option<String>,
    pub(super) strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) theme: Option<String>,
    pub(super) animations: Option<bool>,
    pub(super) transition_ms: Option<u64>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the file and environment values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = &cli.deck {
            self.deck.path = Some(path.clone());
        }
        if let Some(start) = &cli.start {
            self.deck.start = Some(start.clone());
        }
        if cli.strict {
            self.deck.strict = Some(true);
        }
        if let Some(theme) = &cli.theme {
            self.ui.theme = Some(theme.clone());
        }
        if cli.no_animation {
            self.ui.animations = Some(false);
        }
        if let Some(ms) = cli.transition_ms {
            self.ui.transition_ms = Some(ms);
        }
    }

    /// Validate and fill defaults, producing the configuration the binary runs with.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            start: detect_source(
                cli.start.is_some(),
                self.deck.start.is_some(),
                "SLIDR__DECK__START",
                "--start",
                "deck.start",
            ),
            theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "SLIDR__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            transition_ms: detect_source(
                cli.transition_ms.is_some(),
                self.ui.transition_ms.is_some(),
                "SLIDR__UI__TRANSITION_MS",
                "--transition-ms",
                "ui.transition_ms",
            ),
        };

        let theme_name = self
            .ui
            .theme
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let Some(theme) = theme::by_name(&theme_name) else {
            return Err(Error::new(ConfigError::invalid(
                "ui.theme",
                theme_name,
                sources.theme,
                format!("unknown theme; available: {}", theme::names().join(", ")),
            )));
        };

        let transition = match self.ui.transition_ms {
            Some(ms) if !(1..=MAX_TRANSITION_MS).contains(&ms) => {
                return Err(Error::new(ConfigError::invalid(
                    "ui.transition_ms",
                    ms.to_string(),
                    sources.transition_ms,
                    format!("must be between 1 and {MAX_TRANSITION_MS}"),
                )));
            }
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_TRANSITION,
        };
        let motion = Motion {
            enabled: self.ui.animations.unwrap_or(true),
            transition,
        };

        let policy = if self.deck.strict.unwrap_or(false) {
            UnsupportedPolicy::Reject
        } else {
            UnsupportedPolicy::Skip
        };

        Ok(ResolvedConfig {
            deck_path: self.deck.path.map(|path| locate_deck(&path)),
            start: self.deck.start.filter(|start| !start.trim().is_empty()),
            policy,
            theme_name,
            theme,
            motion,
            log_file: cli.log_file.clone(),
            sources,
        })
    }
}

/// Relative deck paths missing from the working directory are looked up in
/// the data directory.
fn locate_deck(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    match app_dirs::get_data_dir() {
        Ok(dir) if dir.join(path).is_file() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> SettingSource {
    if !value_present {
        return SettingSource::Default;
    }

    if cli_present {
        return SettingSource::CliFlag(cli_flag);
    }

    if env::var_os(env_var).is_some() {
        return SettingSource::Environment(env_var);
    }

    SettingSource::ConfigKey(key)
}
