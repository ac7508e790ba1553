//! Slide descriptors and navigation state shared by the `slidr` presenter.
//!
//! This crate knows nothing about terminals. It parses deck files into typed
//! [`Slide`]s, guarantees a deck is never empty, and owns the wraparound
//! index arithmetic used to move between slides.

mod deck;
mod error;
pub mod format;
mod navigation;
pub mod types;

pub use deck::{BUILTIN_DECK, Deck, UnsupportedPolicy};
pub use error::DeckError;
pub use navigation::Navigator;
pub use types::{
    ChartContent, ChartKind, Datum, HeroContent, Slide, SlideBody, SlideKind, StatTile,
};
