mod raw;
mod slide;

pub(crate) use raw::RawDeck;
pub use slide::{
    ChartContent, ChartKind, Datum, HeroContent, Row, Slide, SlideBody, SlideKind, StatTile,
};
