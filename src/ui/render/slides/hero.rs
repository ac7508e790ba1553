use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};
use slidr_deck::HeroContent;
use unicode_width::UnicodeWidthStr;

use super::SlideContext;
use crate::ui::transition::Reveal;

const BADGE: Reveal = Reveal::millis(0, 500);
const HEADING: Reveal = Reveal::millis(300, 500);
const SUBHEADING: Reveal = Reveal::millis(600, 500);

const BADGE_HEIGHT: u16 = 5;
const BADGE_PADDING: u16 = 6;
const BADGE_MIN_WIDTH: u16 = 11;

pub(super) fn render(content: &HeroContent, area: Rect, buf: &mut Buffer, ctx: &SlideContext) {
    let [badge_area, _, heading_area, _, subheading_area] = Layout::vertical([
        Constraint::Length(BADGE_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .flex(Flex::Center)
    .areas(area);

    render_badge(&content.logo, badge_area, buf, ctx);

    let timeline = ctx.timeline;
    if timeline.visible(HEADING) {
        // Drops into place from the spacer row above.
        let mut target = heading_area;
        if timeline.fading(HEADING) {
            target.y = target.y.saturating_sub(1).max(area.y);
        }
        let style = faded(ctx.theme.accent, timeline.fading(HEADING), ctx);
        Paragraph::new(Line::styled(content.heading.as_str(), style))
            .alignment(Alignment::Center)
            .render(target, buf);
    }

    if timeline.visible(SUBHEADING) {
        let style = faded(ctx.theme.muted, timeline.fading(SUBHEADING), ctx);
        Paragraph::new(Line::styled(content.subheading.as_str(), style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(subheading_area, buf);
    }
}

fn render_badge(logo: &str, area: Rect, buf: &mut Buffer, ctx: &SlideContext) {
    let timeline = ctx.timeline;
    if !timeline.visible(BADGE) {
        return;
    }

    let logo_width = u16::try_from(logo.width()).unwrap_or(u16::MAX);
    let full_width = logo_width
        .saturating_add(BADGE_PADDING)
        .max(BADGE_MIN_WIDTH);

    // The badge grows from its centre while it scales in.
    let scale = timeline.progress(BADGE);
    let width = scaled(full_width, scale).max(logo_width);
    let height = scaled(BADGE_HEIGHT, scale).max(1);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [badge] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(ctx.theme.badge);
    let inner = if height >= 3 {
        let inner = block.inner(badge);
        block.render(badge, buf);
        inner
    } else {
        badge
    };

    let [logo_row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(inner);
    Paragraph::new(Line::styled(logo, ctx.theme.badge))
        .alignment(Alignment::Center)
        .render(logo_row, buf);
}

fn scaled(length: u16, scale: f32) -> u16 {
    (f32::from(length) * scale.clamp(0.0, 1.0)).round() as u16
}

fn faded(style: Style, fading: bool, ctx: &SlideContext) -> Style {
    if fading {
        style.patch(ctx.theme.fading())
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_rounds_to_whole_cells() {
        assert_eq!(scaled(11, 0.0), 0);
        assert_eq!(scaled(11, 0.5), 6);
        assert_eq!(scaled(11, 1.0), 11);
        assert_eq!(scaled(5, 2.0), 5);
    }
}
