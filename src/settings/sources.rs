use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use slidr::app_dirs;

use crate::cli::CliArgs;

/// Prefix of the environment variables read as settings, e.g. `SLIDR__UI__THEME`.
pub(super) const ENV_PREFIX: &str = "slidr";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Layer default files, `--config` files and the environment, in that order.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Config files consulted unless `--no-config` is given, lowest priority first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".slidr.toml"));
        files.push(current_dir.join("slidr.toml"));
    }

    files
}
