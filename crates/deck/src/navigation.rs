use std::num::NonZeroUsize;

/// Cursor over a deck of `count` slides.
///
/// The index always lies in `0..count`. Moving past either end wraps around,
/// and because `count` is non-zero the modular arithmetic is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    count: NonZeroUsize,
}

impl Navigator {
    pub fn new(count: NonZeroUsize) -> Self {
        Self { index: 0, count }
    }

    /// Start at `index`, clamped to the last slide.
    pub fn starting_at(count: NonZeroUsize, index: usize) -> Self {
        let mut navigator = Self::new(count);
        navigator.jump(index);
        navigator
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// 1-based position of the current slide.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Advance to the following slide, wrapping to the first.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }

    /// Step back to the preceding slide, wrapping to the last.
    pub fn previous(&mut self) -> usize {
        let count = self.count.get();
        self.index = (self.index + count - 1) % count;
        self.index
    }

    pub fn first(&mut self) -> usize {
        self.index = 0;
        self.index
    }

    pub fn last(&mut self) -> usize {
        self.index = self.count.get() - 1;
        self.index
    }

    /// Move to `index`, clamped to the last slide.
    pub fn jump(&mut self, index: usize) -> usize {
        self.index = index.min(self.count.get() - 1);
        self.index
    }

    /// On-screen counter, e.g. `"2 / 4"`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position(), self.count)
    }
}
