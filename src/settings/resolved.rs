use std::path::PathBuf;

use slidr::{Deck, Motion, PresenterOptions, Theme, UnsupportedPolicy};

use super::errors::{ConfigError, ConfigSources};

/// Application-ready configuration derived from the CLI, config files,
/// the environment and defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Deck file to present; the built-in deck when `None`.
    pub deck_path: Option<PathBuf>,
    /// Start selector, checked once the deck is loaded.
    pub start: Option<String>,
    pub policy: UnsupportedPolicy,
    pub theme_name: String,
    pub theme: Theme,
    pub motion: Motion,
    pub log_file: Option<PathBuf>,
    pub(crate) sources: ConfigSources,
}

impl ResolvedConfig {
    /// Resolve the start selector against `deck`.
    pub(crate) fn start_index(&self, deck: &Deck) -> Result<usize, ConfigError> {
        let Some(selector) = &self.start else {
            return Ok(0);
        };
        deck.resolve_start(selector).ok_or_else(|| {
            ConfigError::invalid(
                "deck.start",
                selector.clone(),
                self.sources.start.clone(),
                format!(
                    "no slide with that id or position (the deck has {} slides)",
                    deck.slide_count()
                ),
            )
        })
    }

    pub(crate) fn presenter_options(&self, deck: &Deck) -> Result<PresenterOptions, ConfigError> {
        Ok(PresenterOptions {
            theme: self.theme,
            motion: self.motion,
            start: self.start_index(deck)?,
        })
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }

    fn summary(&self) -> String {
        let deck = self
            .deck_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string());
        let policy = match self.policy {
            UnsupportedPolicy::Skip => "skip",
            UnsupportedPolicy::Reject => "reject",
        };
        let log_file = self
            .log_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(cache directory)".to_string());

        let lines = [
            "Effective configuration:".to_string(),
            format!("  Deck: {deck}"),
            format!("  Start: {}", self.start.as_deref().unwrap_or("1")),
            format!("  Unknown slide types: {policy}"),
            format!("  Theme: {}", self.theme_name),
            format!("  Animations: {}", bool_to_word(self.motion.enabled)),
            format!("  Transition: {} ms", self.motion.transition.as_millis()),
            format!("  Log file: {log_file}"),
        ];
        lines.join("\n")
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
