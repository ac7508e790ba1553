use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use slidr_deck::StatTile;
use slidr_deck::format::format_stat_value;

use super::SlideContext;
use crate::ui::transition::Reveal;

const COLUMNS: usize = 2;
const TILE_HEIGHT: u16 = 5;
const TILE: Reveal = Reveal::millis(0, 500);
const VALUE: Reveal = Reveal::millis(500, 300);
const STAGGER: Duration = Duration::from_millis(100);

pub(super) fn render(tiles: &[StatTile], area: Rect, buf: &mut Buffer, ctx: &SlideContext) {
    if tiles.is_empty() {
        return;
    }

    let rows = tiles.len().div_ceil(COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); rows])
        .spacing(1)
        .flex(Flex::Center)
        .split(area);

    for (index, tile) in tiles.iter().enumerate() {
        let Some(row_area) = row_areas.get(index / COLUMNS) else {
            break;
        };
        let cells: [Rect; COLUMNS] = Layout::horizontal([Constraint::Fill(1); COLUMNS])
            .spacing(2)
            .areas(*row_area);
        render_tile(tile, index, cells[index % COLUMNS], buf, ctx);
    }
}

fn render_tile(tile: &StatTile, index: usize, area: Rect, buf: &mut Buffer, ctx: &SlideContext) {
    let stagger = STAGGER * u32::try_from(index).unwrap_or(u32::MAX);
    let appear = TILE.delayed_by(stagger);
    let value = VALUE.delayed_by(stagger);
    let timeline = ctx.timeline;
    if !timeline.visible(appear) {
        return;
    }

    let theme = ctx.theme;
    let fading = timeline.fading(appear);
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.card);
    if fading {
        block = block.style(theme.fading());
    }
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = Vec::with_capacity(3);
    lines.push(Line::raw(tile.icon.as_deref().unwrap_or_default()));
    if timeline.visible(value) {
        let text = format_stat_value(tile.value, tile.suffix.as_deref());
        let style = if timeline.fading(value) {
            theme.accent.patch(theme.fading())
        } else {
            theme.accent
        };
        lines.push(Line::styled(text, style));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::styled(tile.title.as_str(), theme.muted));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}
