mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{parse_cli, print_slides};
use settings::ResolvedConfig;
use slidr::tui::theme;
use slidr::{Deck, logging};

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for descriptor in theme::descriptors() {
            if descriptor.aliases.is_empty() {
                println!("{}", descriptor.name);
            } else {
                println!("{} ({})", descriptor.name, descriptor.aliases.join(", "));
            }
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    match logging::initialize(resolved.log_file.as_deref()) {
        Ok(path) => log::debug!("logging to {}", path.display()),
        Err(err) => eprintln!("slidr: logging disabled: {err:#}"),
    }

    let deck = load_deck(&resolved)?;

    if cli.list_slides {
        return print_slides(&deck, cli.output);
    }

    present(deck, &resolved)
}

/// Load the configured deck file, or the built-in deck.
fn load_deck(settings: &ResolvedConfig) -> Result<Deck> {
    match &settings.deck_path {
        Some(path) => Deck::from_path(path, settings.policy)
            .with_context(|| format!("failed to load deck {}", path.display())),
        None => Deck::builtin().context("built-in deck is invalid"),
    }
}

fn present(deck: Deck, settings: &ResolvedConfig) -> Result<()> {
    let options = settings.presenter_options(&deck)?;
    log::info!(
        "presenting {} slides with theme `{}`",
        deck.slide_count(),
        settings.theme_name
    );

    let outcome = slidr::run(deck, options)?;
    log::info!(
        "left on slide {} `{}` after {} slide views",
        outcome.index + 1,
        outcome.slide_id,
        outcome.slides_viewed
    );
    Ok(())
}
