//! One template per slide kind, selected by an exhaustive match.

pub mod chart;
mod hero;
mod stats;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use slidr_deck::{Slide, SlideBody};

use crate::tui::Theme;
use crate::ui::transition::Timeline;

pub use chart::{ChartView, Series};

/// What every template needs besides its own content.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SlideContext<'a> {
    pub(crate) theme: &'a Theme,
    pub(crate) timeline: Timeline,
}

/// Widget drawing the body of a single slide.
///
/// Slides of an unsupported kind draw nothing: the area is left exactly as
/// it was handed in.
#[derive(Debug, Clone, Copy)]
pub struct SlideView<'a> {
    slide: &'a Slide,
    theme: &'a Theme,
    timeline: Timeline,
}

impl<'a> SlideView<'a> {
    pub fn new(slide: &'a Slide, theme: &'a Theme) -> Self {
        Self {
            slide,
            theme,
            timeline: Timeline::settled(),
        }
    }

    #[must_use]
    pub fn timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let ctx = SlideContext {
            theme: self.theme,
            timeline: self.timeline,
        };
        match &self.slide.body {
            SlideBody::Hero(content) => hero::render(content, area, buf, &ctx),
            SlideBody::Stats(tiles) => stats::render(tiles, area, buf, &ctx),
            SlideBody::Chart(content) => chart::render(content, area, buf, &ctx),
            SlideBody::Unsupported { .. } => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Flatten a buffer into one line of text per row.
    pub(crate) fn buffer_text(buf: &Buffer) -> String {
        let mut lines = Vec::with_capacity(buf.area.height as usize);
        for y in buf.area.top()..buf.area.bottom() {
            let mut line = String::new();
            for x in buf.area.left()..buf.area.right() {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use slidr_deck::{Deck, HeroContent};

    use super::test_support::buffer_text;
    use super::*;

    fn render(slide: &Slide, timeline: Timeline) -> Buffer {
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        SlideView::new(slide, &Theme::default())
            .timeline(timeline)
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn unsupported_slides_render_nothing() {
        let slide = Slide::new(
            "clip",
            "Demo",
            SlideBody::Unsupported {
                kind: "video".into(),
            },
        );
        let buf = render(&slide, Timeline::settled());
        assert_eq!(buf, Buffer::empty(buf.area));
    }

    #[test]
    fn every_builtin_slide_draws_something() {
        let deck = Deck::builtin().unwrap();
        for slide in deck.slides() {
            let buf = render(slide, Timeline::settled());
            assert_ne!(buf, Buffer::empty(buf.area), "slide `{}` was blank", slide.id);
        }
    }

    #[test]
    fn hero_heading_waits_for_its_delay() {
        let slide = Slide::new(
            "welcome",
            "Welcome",
            SlideBody::Hero(HeroContent {
                heading: "Higher Learning Technologies".into(),
                subheading: "Transforming Healthcare Education".into(),
                logo: "HLT".into(),
            }),
        );

        let early = buffer_text(&render(&slide, Timeline::at(Default::default())));
        assert!(!early.contains("Higher Learning Technologies"));

        let settled = buffer_text(&render(&slide, Timeline::settled()));
        assert!(settled.contains("HLT"));
        assert!(settled.contains("Higher Learning Technologies"));
        assert!(settled.contains("Transforming Healthcare Education"));
    }

    #[test]
    fn empty_areas_are_ignored() {
        let deck = Deck::builtin().unwrap();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        SlideView::new(&deck.slides()[0], &Theme::default()).render(area, &mut buf);
    }
}
