//! Core crate exports for presenting slide decks in the terminal.
//!
//! Deck loading and navigation live in `slidr-deck` and are re-exported here
//! next to the presenter, so embedders only need this crate.

pub mod app_dirs;
pub mod logging;
pub mod tui;
pub mod ui;

pub use slidr_deck as deck;
pub use slidr_deck::{Deck, DeckError, Navigator, Slide, SlideBody, SlideKind, UnsupportedPolicy};

pub use crate::tui::theme::{Theme, default_theme};
pub use crate::ui::transition::Motion;
pub use crate::ui::{App, Command, PresentationOutcome, PresenterOptions, SlideView, run};
