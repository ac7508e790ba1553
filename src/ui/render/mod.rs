mod footer;
pub mod slides;

use std::time::Duration;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Widget};

use super::App;
use footer::render_footer;
use slides::SlideView;

/// Longest reveal any template schedules; frames after this are static.
pub(crate) const SETTLE_AFTER: Duration = Duration::from_secs(2);

const MAX_CARD_WIDTH: u16 = 100;
/// Fraction of the slide width a slide travels while exiting or entering.
const SLIDE_SHIFT: f32 = 0.2;

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let elapsed = self.elapsed();
        self.draw_at(frame, elapsed);
    }

    /// Draw the frame as it looks `elapsed` after the last slide change.
    pub fn draw_at(&mut self, frame: &mut Frame, elapsed: Duration) {
        let area = frame.area();
        self.render_card(area, frame.buffer_mut(), elapsed);
    }

    fn render_card(&mut self, area: Rect, buf: &mut Buffer, elapsed: Duration) {
        let [card] = Layout::horizontal([Constraint::Max(MAX_CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(area.inner(Margin::new(1, 0)));

        let slide = self.current_slide();
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.card)
            .title(Line::styled(format!(" {} ", slide.title), self.theme.title));
        if let Some(title) = self.deck.title() {
            block = block.title(
                Line::styled(format!(" {title} "), self.theme.muted).right_aligned(),
            );
        }
        let inner = block.inner(card).inner(Margin::new(2, 1));
        block.render(card, buf);

        let [slide_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
                .spacing(1)
                .areas(inner);

        if let Some(leaving) = self.exiting_slide(elapsed) {
            let progress = self.timeline_at(elapsed).progress(self.motion.exit());
            let shifted = shift_left(slide_area, exit_offset(slide_area.width, progress));
            SlideView::new(leaving, &self.theme).render(shifted, buf);
            buf.set_style(slide_area, self.theme.fading());
        } else {
            let timeline = self.timeline_at(self.entrance_elapsed(elapsed));
            let entrance = self.motion.entrance();
            let shifted = shift_right(
                slide_area,
                entrance_offset(slide_area.width, timeline.progress(entrance)),
            );
            SlideView::new(slide, &self.theme)
                .timeline(timeline)
                .render(shifted, buf);
            if timeline.fading(entrance) {
                buf.set_style(slide_area, self.theme.fading());
            }
        }

        self.controls = render_footer(&self.navigator, &self.theme, footer_area, buf);
    }
}

/// Columns the entering slide is still shifted right by at `progress`.
fn entrance_offset(width: u16, progress: f32) -> u16 {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);
    (f32::from(width) * SLIDE_SHIFT * remaining).round() as u16
}

/// Columns the outgoing slide has moved left by at `progress`.
fn exit_offset(width: u16, progress: f32) -> u16 {
    (f32::from(width) * SLIDE_SHIFT * progress.clamp(0.0, 1.0)).round() as u16
}

fn shift_right(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.width);
    Rect {
        x: area.x + offset,
        width: area.width - offset,
        ..area
    }
}

/// Narrow `area` from the right, so centred content moves left.
fn shift_left(area: Rect, offset: u16) -> Rect {
    Rect {
        width: area.width - offset.min(area.width),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;
    use slidr_deck::{Deck, Slide, SlideBody};

    use super::slides::test_support::buffer_text;
    use super::*;
    use crate::ui::transition::Motion;
    use crate::ui::{Command, PresenterOptions};

    fn frame_text(app: &mut App, elapsed: Duration) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 28)).unwrap();
        terminal.draw(|frame| app.draw_at(frame, elapsed)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn settled_frame_shows_title_counter_and_controls() {
        let mut app = App::new(Deck::builtin().unwrap(), PresenterOptions::default());
        let text = frame_text(&mut app, SETTLE_AFTER);
        assert!(text.contains("Welcome to HLT"));
        assert!(text.contains("Higher Learning Technologies"));
        assert!(text.contains("1 / 4"));
        assert!(text.contains("prev"));
        assert!(text.contains("next"));
        assert!(app.controls.previous.is_some());
        assert!(app.controls.next.is_some());
    }

    #[test]
    fn counter_tracks_navigation() {
        let mut app = App::new(Deck::builtin().unwrap(), PresenterOptions::default());
        app.apply(Command::Previous);
        let text = frame_text(&mut app, SETTLE_AFTER);
        assert!(text.contains("4 / 4"));
        assert!(text.contains("User Engagement"));
    }

    #[test]
    fn unsupported_slides_keep_the_frame_but_no_body() {
        let deck = Deck::new(vec![Slide::new(
            "clip",
            "Demo video",
            SlideBody::Unsupported {
                kind: "video".into(),
            },
        )])
        .unwrap();
        let mut app = App::new(deck, PresenterOptions::default());
        let text = frame_text(&mut app, SETTLE_AFTER);
        assert!(text.contains("Demo video"));
        assert!(text.contains("1 / 1"));
    }

    #[test]
    fn entering_slides_are_dimmed() {
        let mut app = App::new(Deck::builtin().unwrap(), PresenterOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(90, 28)).unwrap();
        terminal
            .draw(|frame| app.draw_at(frame, Duration::ZERO))
            .unwrap();
        let buf = terminal.backend().buffer();
        let center = (buf.area.width / 2, buf.area.height / 2);
        assert!(buf[center].modifier.contains(Modifier::DIM));
    }

    fn column_of(text: &str, needle: &str) -> usize {
        text.lines()
            .find_map(|line| line.find(needle))
            .unwrap_or_else(|| panic!("`{needle}` not drawn:\n{text}"))
    }

    #[test]
    fn outgoing_slide_exits_left_before_the_next_enters() {
        const SUBHEADING: &str = "Transforming Healthcare Education";
        let mut app = App::new(Deck::builtin().unwrap(), PresenterOptions::default());
        let resting = column_of(&frame_text(&mut app, SETTLE_AFTER), SUBHEADING);

        app.apply(Command::Next);
        let exit = app.motion.exit();
        let mut terminal = Terminal::new(TestBackend::new(90, 28)).unwrap();
        terminal
            .draw(|frame| app.draw_at(frame, exit.duration / 2))
            .unwrap();
        let buf = terminal.backend().buffer();
        let text = buffer_text(buf);
        assert!(column_of(&text, SUBHEADING) < resting, "{text}");
        assert!(!text.contains("AI-generated questions"), "{text}");
        assert!(text.contains("AI Revolution"));
        assert!(text.contains("2 / 4"));
        let center = (buf.area.width / 2, buf.area.height / 2);
        assert!(buf[center].modifier.contains(Modifier::DIM));

        let text = frame_text(&mut app, exit.end() + SETTLE_AFTER);
        assert!(!text.contains(SUBHEADING), "{text}");
        assert!(text.contains("AI-generated questions"), "{text}");
    }

    #[test]
    fn disabled_motion_skips_the_exit() {
        let options = PresenterOptions {
            motion: Motion::disabled(),
            ..PresenterOptions::default()
        };
        let mut app = App::new(Deck::builtin().unwrap(), options);
        app.apply(Command::Next);
        let text = frame_text(&mut app, Duration::ZERO);
        assert!(!text.contains("Transforming Healthcare Education"), "{text}");
        assert!(text.contains("AI-generated questions"), "{text}");
    }

    #[test]
    fn disabled_motion_draws_the_settled_frame_immediately() {
        let options = PresenterOptions {
            motion: Motion::disabled(),
            ..PresenterOptions::default()
        };
        let mut app = App::new(Deck::builtin().unwrap(), options);
        let text = frame_text(&mut app, Duration::ZERO);
        assert!(text.contains("Transforming Healthcare Education with AI"));
    }

    #[test]
    fn entrance_offset_shrinks_to_zero() {
        assert_eq!(entrance_offset(80, 0.0), 16);
        assert_eq!(entrance_offset(80, 0.5), 8);
        assert_eq!(entrance_offset(80, 1.0), 0);
        let area = Rect::new(4, 2, 10, 5);
        assert_eq!(shift_right(area, 30), Rect::new(14, 2, 0, 5));
    }

    #[test]
    fn exit_offset_grows_from_zero() {
        assert_eq!(exit_offset(80, 0.0), 0);
        assert_eq!(exit_offset(80, 0.5), 8);
        assert_eq!(exit_offset(80, 1.0), 16);
        let area = Rect::new(4, 2, 10, 5);
        assert_eq!(shift_left(area, 3), Rect::new(4, 2, 7, 5));
        assert_eq!(shift_left(area, 30), Rect::new(4, 2, 0, 5));
    }
}
