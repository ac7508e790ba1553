//! Bar and line charts over a slide's table.
//!
//! A [`ChartView`] is built from the slide content first: the x labels plus
//! exactly one [`Series`] per key, with colours already resolved. The widgets
//! are then drawn from the view, so what is on screen and what the view
//! describes cannot drift apart.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph, Widget,
};
use slidr_deck::format::{format_number, group_thousands};
use slidr_deck::{ChartContent, ChartKind};

use super::SlideContext;
use crate::tui::Theme;
use crate::tui::theme::parse_color;
use crate::ui::transition::Reveal;

/// Bars and lines grow in over this window.
const GROW: Reveal = Reveal::millis(0, 1000);

/// Bar heights are integers; values are scaled so two decimals survive.
const BAR_SCALE: f64 = 100.0;
const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 3;
const MAX_BAR_WIDTH: u16 = 12;

/// One plotted key of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color,
    /// One entry per row; `None` where the cell is missing or not numeric.
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// `(x, y)` points for the first `visible` rows, skipping gaps.
    fn points(&self, visible: usize) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .take(visible)
            .enumerate()
            .filter_map(|(x, value)| value.map(|y| (x as f64, y)))
            .collect()
    }
}

/// Render-ready description of a chart slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub kind: ChartKind,
    pub x_labels: Vec<String>,
    series: Vec<Series>,
    range: Option<(f64, f64)>,
}

impl ChartView {
    /// Build the view. Series colours come from the slide when they parse,
    /// otherwise from the theme palette.
    pub fn build(content: &ChartContent, theme: &Theme) -> Self {
        let series = content
            .keys
            .iter()
            .enumerate()
            .map(|(index, key)| Series {
                name: key.clone(),
                color: content
                    .color_for(index)
                    .and_then(|color| parse_color(color).ok())
                    .unwrap_or_else(|| theme.series_color(index)),
                values: content.series_values(key),
            })
            .collect();

        Self {
            kind: content.chart_type,
            x_labels: content.x_labels(),
            series,
            range: content.value_range(),
        }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Y-axis bounds: always include zero, with headroom above the data.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (low, high) = self.range.unwrap_or((0.0, 1.0));
        let low = low.min(0.0);
        let high = high.max(0.0);
        if high - low <= f64::EPSILON {
            return [low, low + 1.0];
        }
        [low, high + (high - low) * 0.1]
    }
}

pub(super) fn render(content: &ChartContent, area: Rect, buf: &mut Buffer, ctx: &SlideContext) {
    let view = ChartView::build(content, ctx.theme);
    let growth = ctx.timeline.progress(GROW);

    let [legend_area, plot_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(3)])
        .spacing(1)
        .areas(area);
    render_legend(&view, legend_area, buf);

    match view.kind {
        ChartKind::Bar => render_bars(&view, growth, plot_area, buf, ctx.theme),
        ChartKind::Line => render_lines(&view, growth, plot_area, buf, ctx.theme),
    }
}

fn render_legend(view: &ChartView, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::with_capacity(view.series.len() * 3);
    for (index, series) in view.series.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled("■ ", Style::new().fg(series.color)));
        spans.push(Span::raw(series.name.as_str()));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Width of each bar for `groups` groups of `per_group` bars in `width` cells.
fn bar_width(width: u16, groups: usize, per_group: usize) -> u16 {
    let groups = u16::try_from(groups.max(1)).unwrap_or(u16::MAX);
    let per_group = u16::try_from(per_group.max(1)).unwrap_or(u16::MAX);
    let available = width.saturating_sub(GROUP_GAP.saturating_mul(groups - 1));
    let group_width = available / groups;
    let bars = group_width.saturating_sub(BAR_GAP.saturating_mul(per_group - 1));
    (bars / per_group).clamp(1, MAX_BAR_WIDTH)
}

fn bars_total_width(bar_width: u16, groups: usize, per_group: usize) -> u16 {
    let groups = u16::try_from(groups.max(1)).unwrap_or(u16::MAX);
    let per_group = u16::try_from(per_group.max(1)).unwrap_or(u16::MAX);
    let group = bar_width
        .saturating_mul(per_group)
        .saturating_add(BAR_GAP.saturating_mul(per_group - 1));
    group
        .saturating_mul(groups)
        .saturating_add(GROUP_GAP.saturating_mul(groups - 1))
}

/// Negative values have no downward bar; they keep a zero-height bar whose
/// text still shows the signed value.
fn render_bars(view: &ChartView, growth: f32, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let groups = view.x_labels.len();
    let per_group = view.series.len();
    let width = bar_width(area.width, groups, per_group);
    let total = bars_total_width(width, groups, per_group).min(area.width);
    let [centered] = Layout::horizontal([Constraint::Length(total)])
        .flex(Flex::Center)
        .areas(area);

    let [_, high] = view.y_bounds();
    let max = (high.max(0.0) * BAR_SCALE).ceil().max(1.0) as u64;
    let mut chart = BarChart::default()
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP)
        .max(max)
        .label_style(theme.muted);

    for (row, label) in view.x_labels.iter().enumerate() {
        let bars: Vec<Bar> = view
            .series
            .iter()
            .map(|series| {
                let value = series.values.get(row).copied().flatten();
                let height = value
                    .map(|value| (value.max(0.0) * f64::from(growth) * BAR_SCALE).round() as u64)
                    .unwrap_or(0);
                Bar::default()
                    .value(height)
                    .text_value(value.map(format_number).unwrap_or_default())
                    .style(Style::new().fg(series.color))
                    .value_style(Style::new().fg(Color::Black).bg(series.color))
            })
            .collect();
        chart = chart.data(BarGroup::default().label(Line::from(label.as_str())).bars(&bars));
    }

    chart.render(centered, buf);
}

fn render_lines(view: &ChartView, growth: f32, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let rows = view.x_labels.len();
    let visible = ((rows as f32 * growth).ceil() as usize).min(rows);
    let points: Vec<Vec<(f64, f64)>> = view
        .series
        .iter()
        .map(|series| series.points(visible))
        .collect();

    let datasets = view
        .series
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::new().fg(series.color))
                .data(data)
        })
        .collect::<Vec<_>>();

    let x_max = rows.saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = view
        .x_labels
        .iter()
        .map(|label| Span::raw(label.as_str()))
        .collect();
    let [low, high] = view.y_bounds();
    let y_labels = vec![
        Span::raw(group_thousands(low.round())),
        Span::raw(group_thousands(((low + high) / 2.0).round())),
        Span::raw(group_thousands(high.round())),
    ];

    Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme.muted)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.muted)
                .bounds([low, high])
                .labels(y_labels),
        )
        .render(area, buf);
}
