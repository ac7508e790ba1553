use ratatui::style::{Color, Modifier, Style};

/// Styles for the presenter's card, templates and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Border of the slide card.
    pub card: Style,
    /// Deck and slide titles in the card border.
    pub title: Style,
    /// Brand colour for headings and stat values.
    pub accent: Style,
    /// Secondary text: subheadings, tile labels, axis labels.
    pub muted: Style,
    /// The round logo badge on hero slides.
    pub badge: Style,
    /// Previous/next controls.
    pub control: Style,
    /// The `current / total` counter.
    pub counter: Style,
    /// Series colours used when a chart does not name its own.
    pub palette: [Color; 4],
}

impl Theme {
    /// Colour for the chart series at `index`, cycling through the palette.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// Style applied to content that is still fading in.
    #[must_use]
    pub fn fading(&self) -> Style {
        Style::new().add_modifier(Modifier::DIM)
    }
}

/// A theme bundled with the binary.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub theme: Theme,
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            aliases: &[],
            theme,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Public view of a registered theme.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
    pub name: String,
    pub aliases: Vec<String>,
    pub theme: Theme,
}
