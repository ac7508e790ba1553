//! Time-based reveal helpers for slide transitions.
//!
//! Everything here is a pure function of the time elapsed since the last
//! slide change, so frames can be reproduced in tests without a clock. A
//! change first plays the exit of the outgoing slide, then the entrance of
//! the new one.

use std::time::Duration;

/// Default length of each transition phase.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

/// A window of time in which one element animates from hidden to settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub delay: Duration,
    pub duration: Duration,
}

impl Reveal {
    pub const fn millis(delay: u64, duration: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay),
            duration: Duration::from_millis(duration),
        }
    }

    /// The same reveal starting `extra` later.
    #[must_use]
    pub fn delayed_by(self, extra: Duration) -> Self {
        Self {
            delay: self.delay + extra,
            ..self
        }
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn has_started(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay
    }

    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

/// Motion settings chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub enabled: bool,
    pub transition: Duration,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            enabled: true,
            transition: DEFAULT_TRANSITION,
        }
    }
}

impl Motion {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// The slide-out of the outgoing slide, right after a change.
    pub fn exit(&self) -> Reveal {
        Reveal {
            delay: Duration::ZERO,
            duration: self.transition,
        }
    }

    /// The slide-in reveal, measured from the start of the entrance phase.
    pub fn entrance(&self) -> Reveal {
        Reveal {
            delay: Duration::ZERO,
            duration: self.transition,
        }
    }

    pub fn timeline(&self, elapsed: Duration) -> Timeline {
        if self.enabled {
            Timeline::at(elapsed)
        } else {
            Timeline::settled()
        }
    }
}

/// Elapsed time within a transition phase, as seen by templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    elapsed: Option<Duration>,
}

impl Timeline {
    pub fn at(elapsed: Duration) -> Self {
        Self {
            elapsed: Some(elapsed),
        }
    }

    /// A timeline on which every reveal has already finished.
    pub fn settled() -> Self {
        Self { elapsed: None }
    }

    /// Eased progress of `reveal`.
    pub fn progress(&self, reveal: Reveal) -> f32 {
        match self.elapsed {
            Some(elapsed) => ease_out_cubic(reveal.progress(elapsed)),
            None => 1.0,
        }
    }

    pub fn visible(&self, reveal: Reveal) -> bool {
        self.elapsed
            .is_none_or(|elapsed| reveal.has_started(elapsed))
    }

    /// Whether `reveal` is visible but still in the first half of its run,
    /// which templates draw dimmed.
    pub fn fading(&self, reveal: Reveal) -> bool {
        self.visible(reveal) && self.progress(reveal) < 0.5
    }

    pub fn is_settled_for(&self, reveal: Reveal) -> bool {
        self.elapsed.is_none_or(|elapsed| elapsed >= reveal.end())
    }
}
