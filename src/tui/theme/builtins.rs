use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

const HLT_BLUE: Color = Color::Rgb(0, 85, 164);
const HLT_GOLD: Color = Color::Rgb(255, 215, 0);

pub const HLT: Theme = Theme {
    card: Style::new().fg(Color::Rgb(199, 210, 254)),
    title: Style::new().fg(HLT_BLUE).add_modifier(Modifier::BOLD),
    accent: Style::new().fg(HLT_BLUE).add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::Rgb(75, 85, 99)),
    badge: Style::new()
        .fg(Color::White)
        .bg(HLT_BLUE)
        .add_modifier(Modifier::BOLD),
    control: Style::new().fg(Color::White).bg(HLT_BLUE),
    counter: Style::new()
        .fg(Color::Rgb(75, 85, 99))
        .add_modifier(Modifier::BOLD),
    palette: [
        Color::Rgb(136, 132, 216),
        Color::Rgb(130, 202, 157),
        HLT_GOLD,
        HLT_BLUE,
    ],
};

pub const SLATE: Theme = Theme {
    card: Style::new().fg(Color::Rgb(71, 85, 105)),
    title: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    accent: Style::new()
        .fg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::DarkGray),
    badge: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    control: Style::new().fg(Color::LightCyan),
    counter: Style::new().fg(Color::Rgb(148, 163, 184)),
    palette: [Color::LightCyan, Color::Yellow, Color::LightMagenta, Color::LightGreen],
};

pub const SOLARIZED: Theme = Theme {
    card: Style::new().fg(Color::Rgb(88, 110, 117)),
    title: Style::new()
        .fg(Color::Rgb(253, 246, 227))
        .add_modifier(Modifier::BOLD),
    accent: Style::new()
        .fg(Color::Rgb(181, 137, 0))
        .add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::Rgb(131, 148, 150)),
    badge: Style::new()
        .fg(Color::Rgb(253, 246, 227))
        .bg(Color::Rgb(38, 139, 210)),
    control: Style::new().fg(Color::Rgb(38, 139, 210)),
    counter: Style::new().fg(Color::Rgb(147, 161, 161)),
    palette: [
        Color::Rgb(38, 139, 210),
        Color::Rgb(133, 153, 0),
        Color::Rgb(203, 75, 22),
        Color::Rgb(108, 113, 196),
    ],
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition::new("hlt", HLT).with_aliases(&["default", "brand"]),
    ThemeDefinition::new("slate", SLATE).with_aliases(&["dark"]),
    ThemeDefinition::new("solarized", SOLARIZED),
];

pub fn default_theme() -> Theme {
    HLT
}
