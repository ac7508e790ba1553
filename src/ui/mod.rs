//! Interactive presenter: navigation state, input handling, drawing and the
//! terminal event loop.

mod actions;
pub mod render;
mod runtime;
pub mod transition;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use slidr_deck::{Deck, Navigator, Slide};

use crate::tui::Theme;
use transition::{Motion, Timeline};

pub use actions::Command;
pub use render::slides::{ChartView, Series, SlideView};
pub use runtime::run;

/// Settings the presenter is started with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenterOptions {
    pub theme: Theme,
    pub motion: Motion,
    /// Index of the slide shown first.
    pub start: usize,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            motion: Motion::default(),
            start: 0,
        }
    }
}

/// Where the user was when they left the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationOutcome {
    pub index: usize,
    pub slide_id: String,
    pub slides_viewed: usize,
}

/// Screen regions of the navigation controls from the last drawn frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ControlAreas {
    pub(crate) previous: Option<Rect>,
    pub(crate) next: Option<Rect>,
}

/// Presenter state: the deck, the cursor into it and the running transition.
pub struct App {
    deck: Deck,
    navigator: Navigator,
    theme: Theme,
    motion: Motion,
    entered_at: Instant,
    /// Index of the slide shown before the last change.
    leaving: Option<usize>,
    slides_viewed: usize,
    pub(crate) controls: ControlAreas,
}

impl App {
    pub fn new(deck: Deck, options: PresenterOptions) -> Self {
        let navigator = Navigator::starting_at(deck.slide_count(), options.start);
        Self {
            deck,
            navigator,
            theme: options.theme,
            motion: options.motion,
            entered_at: Instant::now(),
            leaving: None,
            slides_viewed: 1,
            controls: ControlAreas::default(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_slide(&self) -> &Slide {
        self.deck.current(&self.navigator)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Apply a navigation command. Returns `true` when the user asked to quit.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = self.navigator.index();
        match command {
            Command::Next => {
                self.navigator.next();
            }
            Command::Previous => {
                self.navigator.previous();
            }
            Command::First => {
                self.navigator.first();
            }
            Command::Last => {
                self.navigator.last();
            }
            Command::Jump(index) => {
                self.navigator.jump(index);
            }
            Command::Quit => return true,
        }

        if self.navigator.index() != before {
            self.enter_current_slide(before);
        }
        false
    }

    pub fn outcome(&self) -> PresentationOutcome {
        PresentationOutcome {
            index: self.navigator.index(),
            slide_id: self.current_slide().id.clone(),
            slides_viewed: self.slides_viewed,
        }
    }

    fn enter_current_slide(&mut self, previous: usize) {
        // Mid-exit the outgoing slide is still the one on screen.
        if self.exiting_slide(self.elapsed()).is_none() {
            self.leaving = Some(previous);
        }
        self.entered_at = Instant::now();
        self.slides_viewed += 1;
        let slide = self.current_slide();
        log::debug!(
            "showing slide {} `{}` ({})",
            self.navigator.counter(),
            slide.id,
            slide.kind_tag()
        );
    }

    fn elapsed(&self) -> Duration {
        self.entered_at.elapsed()
    }

    fn timeline_at(&self, elapsed: Duration) -> Timeline {
        self.motion.timeline(elapsed)
    }

    /// The outgoing slide if it is still exiting `elapsed` after the change.
    fn exiting_slide(&self, elapsed: Duration) -> Option<&Slide> {
        if self.timeline_at(elapsed).is_settled_for(self.motion.exit()) {
            return None;
        }
        self.deck.get(self.leaving?)
    }

    /// Time the current slide has spent entering, `elapsed` after the change.
    fn entrance_elapsed(&self, elapsed: Duration) -> Duration {
        match self.leaving {
            Some(_) => elapsed.saturating_sub(self.motion.exit().end()),
            None => elapsed,
        }
    }

    /// Whether a transition or template reveal is still running.
    pub(crate) fn is_animating(&self) -> bool {
        let elapsed = self.elapsed();
        let settle = render::SETTLE_AFTER.max(self.motion.transition);
        self.motion.enabled
            && (self.exiting_slide(elapsed).is_some() || self.entrance_elapsed(elapsed) < settle)
    }
}
