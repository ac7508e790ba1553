use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use slidr_deck::Navigator;
use unicode_width::UnicodeWidthStr;

use crate::tui::Theme;
use crate::ui::ControlAreas;

const PREVIOUS_LABEL: &str = " ‹ prev ";
const NEXT_LABEL: &str = " next › ";

/// Draw the previous control, the counter and the next control, returning
/// where the controls landed so clicks can be matched against them.
pub(super) fn render_footer(
    navigator: &Navigator,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) -> ControlAreas {
    let previous_width = label_width(PREVIOUS_LABEL);
    let next_width = label_width(NEXT_LABEL);
    let [previous, counter, next] = Layout::horizontal([
        Constraint::Length(previous_width),
        Constraint::Fill(1),
        Constraint::Length(next_width),
    ])
    .areas(area);

    Line::styled(PREVIOUS_LABEL, theme.control).render(previous, buf);
    Paragraph::new(Line::styled(navigator.counter(), theme.counter))
        .alignment(Alignment::Center)
        .render(counter, buf);
    Line::styled(NEXT_LABEL, theme.control).render(next, buf);

    ControlAreas {
        previous: (!previous.is_empty()).then_some(previous),
        next: (!next.is_empty()).then_some(next),
    }
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX)
}
