use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::format_number;

/// One column-ordered record of a chart dataset.
pub type Row = IndexMap<String, Datum>;

/// A single slide of a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub body: SlideBody,
}

impl Slide {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: SlideBody) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body,
        }
    }

    /// Tag of the slide as written in the deck file.
    pub fn kind_tag(&self) -> &str {
        match &self.body {
            SlideBody::Unsupported { kind } => kind.as_str(),
            body => body.kind().map(SlideKind::as_str).unwrap_or_default(),
        }
    }
}

/// The payload of a slide, one variant per template.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideBody {
    Hero(HeroContent),
    Stats(Vec<StatTile>),
    Chart(ChartContent),
    /// A descriptor whose `type` tag no template handles. It renders as
    /// nothing; see [`crate::UnsupportedPolicy`].
    Unsupported { kind: String },
}

impl SlideBody {
    pub fn kind(&self) -> Option<SlideKind> {
        match self {
            Self::Hero(_) => Some(SlideKind::Hero),
            Self::Stats(_) => Some(SlideKind::Stats),
            Self::Chart(_) => Some(SlideKind::Chart),
            Self::Unsupported { .. } => None,
        }
    }
}

/// The slide templates known to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Hero,
    Stats,
    Chart,
}

impl SlideKind {
    pub const ALL: [SlideKind; 3] = [SlideKind::Hero, SlideKind::Stats, SlideKind::Chart];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Stats => "stats",
            Self::Chart => "chart",
        }
    }

    /// Look up a kind by its deck file tag. Tags are matched exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title banner with a text badge standing in for a logo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub heading: String,
    pub subheading: String,
    pub logo: String,
}

/// A labelled numeric tile on a stats slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatTile {
    pub title: String,
    pub value: f64,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// How a chart plots its series. Only the `"bar"` tag selects bars; any
/// other tag, or none at all, plots lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    #[default]
    Line,
}

impl ChartKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "bar" { Self::Bar } else { Self::Line }
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(tag) => Self::from_tag(&tag),
            _ => Self::Line,
        })
    }
}

/// One cell of a chart dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Text(String),
    Missing,
}

impl Datum {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Missing => None,
        }
    }

    /// Text used when the datum labels an axis tick.
    pub fn label(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Text(text) => text.clone(),
            Self::Missing => String::new(),
        }
    }
}

/// A bar or line chart over a small table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartContent {
    #[serde(default)]
    pub chart_type: ChartKind,
    pub data: Vec<Row>,
    pub keys: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Column used for the x axis. Defaults to the first column of the first
    /// row.
    #[serde(default)]
    pub x_key: Option<String>,
}

impl ChartContent {
    pub fn x_key(&self) -> Option<&str> {
        self.x_key
            .as_deref()
            .or_else(|| self.data.first()?.keys().next().map(String::as_str))
    }

    pub fn x_labels(&self) -> Vec<String> {
        let Some(x_key) = self.x_key() else {
            return vec![String::new(); self.data.len()];
        };
        self.data
            .iter()
            .map(|row| row.get(x_key).map(Datum::label).unwrap_or_default())
            .collect()
    }

    /// Values of one series in row order. Missing or non-numeric cells are
    /// `None`.
    pub fn series_values(&self, key: &str) -> Vec<Option<f64>> {
        self.data
            .iter()
            .map(|row| row.get(key).and_then(Datum::as_f64))
            .collect()
    }

    pub fn color_for(&self, series: usize) -> Option<&str> {
        self.colors.get(series).map(String::as_str)
    }

    /// Smallest and largest value across every series, if any value exists.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.keys
            .iter()
            .flat_map(|key| self.series_values(key))
            .flatten()
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((low, high)) => Some((f64::min(low, value), f64::max(high, value))),
            })
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if self.keys.is_empty() {
            return Err("chart has no series keys".to_string());
        }
        if self.data.is_empty() {
            return Err("chart has no data rows".to_string());
        }
        let Some(x_key) = self.x_key() else {
            return Err("chart has no x-axis column".to_string());
        };
        if !self.data.iter().any(|row| row.contains_key(x_key)) {
            return Err(format!("x-axis column `{x_key}` does not appear in the data"));
        }
        for key in &self.keys {
            if !self.data.iter().any(|row| row.contains_key(key)) {
                return Err(format!("series `{key}` does not appear in the data"));
            }
        }
        Ok(())
    }
}
