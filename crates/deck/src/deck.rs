use std::collections::HashSet;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::error::DeckError;
use crate::navigation::Navigator;
use crate::types::{RawDeck, Slide};

/// The deck shown when no deck file is given.
pub const BUILTIN_DECK: &str = include_str!("../assets/welcome.json");

/// What to do with slides whose `type` tag no template handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsupportedPolicy {
    /// Keep the slide and render it as an empty area.
    #[default]
    Skip,
    /// Fail the load with [`DeckError::UnknownType`].
    Reject,
}

/// A non-empty, ordered list of slides with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    title: Option<String>,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(DeckError::DuplicateId(slide.id.clone()));
            }
        }

        Ok(Self {
            title: None,
            slides,
        })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Load the deck bundled with the crate.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_json(BUILTIN_DECK, UnsupportedPolicy::Skip)
    }

    pub fn from_json(text: &str, policy: UnsupportedPolicy) -> Result<Self, DeckError> {
        let raw = RawDeck::parse(text)?;
        let slides = raw
            .slides
            .into_iter()
            .map(|slide| slide.into_slide(policy))
            .collect::<Result<Vec<_>, _>>()?;

        let deck = Self::new(slides)?;
        Ok(match raw.title {
            Some(title) => deck.with_title(title),
            None => deck,
        })
    }

    pub fn from_path(path: &Path, policy: UnsupportedPolicy) -> Result<Self, DeckError> {
        let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_json(&text, policy)?;
        log::debug!(
            "loaded {} slides from {}",
            deck.slide_count(),
            path.display()
        );
        Ok(deck)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// The slide under the navigator's cursor.
    pub fn current(&self, navigator: &Navigator) -> &Slide {
        let index = navigator.index().min(self.slides.len() - 1);
        &self.slides[index]
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    /// Resolve a start selector: a 1-based position or a slide id.
    ///
    /// Ids take precedence so that a slide called `"2"` stays reachable.
    pub fn resolve_start(&self, selector: &str) -> Option<usize> {
        let selector = selector.trim();
        if let Some(index) = self.position_of(selector) {
            return Some(index);
        }
        match selector.parse::<usize>() {
            Ok(position) if (1..=self.slides.len()).contains(&position) => Some(position - 1),
            _ => None,
        }
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.slide_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeroContent, SlideBody, SlideKind};

    fn hero(id: &str) -> Slide {
        Slide::new(id, id.to_uppercase(), SlideBody::Hero(HeroContent::default()))
    }

    #[test]
    fn empty_decks_are_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::Empty)));
        assert!(matches!(
            Deck::from_json("[]", UnsupportedPolicy::Skip),
            Err(DeckError::Empty)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Deck::new(vec![hero("a"), hero("b"), hero("a")]).unwrap_err();
        assert!(matches!(err, DeckError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn builtin_deck_has_one_slide_of_each_template() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.slide_count().get(), 4);
        assert_eq!(deck.title(), Some("Higher Learning Technologies"));

        let kinds: Vec<_> = deck
            .slides()
            .iter()
            .filter_map(|slide| slide.body.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Hero,
                SlideKind::Stats,
                SlideKind::Chart,
                SlideKind::Chart
            ]
        );
    }

    #[test]
    fn builtin_charts_keep_their_column_order() {
        let deck = Deck::builtin().unwrap();
        let chart = |id: &str| match &deck.slides()[deck.position_of(id).unwrap()].body {
            SlideBody::Chart(chart) => chart.clone(),
            other => panic!("{id} is not a chart: {other:?}"),
        };

        let growth = chart("financial-growth");
        assert_eq!(growth.x_key(), Some("year"));
        assert_eq!(growth.x_labels(), vec!["2023", "2024", "2025"]);

        let engagement = chart("user-engagement");
        assert_eq!(engagement.x_key(), Some("week"));
        assert_eq!(engagement.x_labels()[0], "Sep 11");
    }

    #[test]
    fn start_selector_accepts_ids_and_positions() {
        let deck = Deck::new(vec![hero("intro"), hero("2"), hero("outro")]).unwrap();
        assert_eq!(deck.resolve_start("outro"), Some(2));
        assert_eq!(deck.resolve_start("2"), Some(1));
        assert_eq!(deck.resolve_start("3"), Some(2));
        assert_eq!(deck.resolve_start("0"), None);
        assert_eq!(deck.resolve_start("4"), None);
        assert_eq!(deck.resolve_start("missing"), None);
    }

    #[test]
    fn current_follows_the_navigator() {
        let deck = Deck::new(vec![hero("a"), hero("b")]).unwrap();
        let mut navigator = deck.navigator();
        assert_eq!(deck.current(&navigator).id, "a");
        navigator.previous();
        assert_eq!(deck.current(&navigator).id, "b");
    }
}
