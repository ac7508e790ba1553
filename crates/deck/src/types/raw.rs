use serde::Deserialize;
use serde_json::Value;

use super::slide::{Slide, SlideBody, SlideKind};
use crate::deck::UnsupportedPolicy;
use crate::error::DeckError;

/// Deck document as it appears on disk: either a bare array of slides or an
/// object carrying a title alongside the slides.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDeck {
    #[serde(default)]
    pub(crate) title: Option<String>,
    pub(crate) slides: Vec<RawSlide>,
}

impl RawDeck {
    pub(crate) fn parse(text: &str) -> Result<Self, DeckError> {
        let value: Value = serde_json::from_str(text)?;
        let deck = match value {
            Value::Array(_) => RawDeck {
                title: None,
                slides: serde_json::from_value(value)?,
            },
            other => serde_json::from_value(other)?,
        };
        Ok(deck)
    }
}

/// A slide descriptor before its content is checked against its tag.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSlide {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    #[serde(default)]
    pub(crate) content: Value,
}

impl RawSlide {
    pub(crate) fn into_slide(self, policy: UnsupportedPolicy) -> Result<Slide, DeckError> {
        let RawSlide {
            id,
            title,
            kind,
            content,
        } = self;

        let Some(known) = SlideKind::from_tag(&kind) else {
            return match policy {
                UnsupportedPolicy::Skip => {
                    log::warn!("slide `{id}` has unrecognised type `{kind}`; it will render empty");
                    Ok(Slide::new(id, title, SlideBody::Unsupported { kind }))
                }
                UnsupportedPolicy::Reject => Err(DeckError::UnknownType { id, kind }),
            };
        };

        let body = match known {
            SlideKind::Hero => serde_json::from_value(content).map(SlideBody::Hero),
            SlideKind::Stats => serde_json::from_value(content).map(SlideBody::Stats),
            SlideKind::Chart => serde_json::from_value(content).map(SlideBody::Chart),
        };
        let body = match body {
            Ok(body) => body,
            Err(source) => {
                return Err(DeckError::InvalidContent {
                    id,
                    kind: known,
                    source,
                });
            }
        };

        if let SlideBody::Chart(chart) = &body
            && let Err(reason) = chart.check()
        {
            return Err(DeckError::Chart { id, reason });
        }

        Ok(Slide::new(id, title, body))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::ChartKind;

    fn raw(kind: &str, content: Value) -> RawSlide {
        RawSlide {
            id: "s1".into(),
            title: "Slide".into(),
            kind: kind.into(),
            content,
        }
    }

    #[test]
    fn bare_arrays_parse_without_title() {
        let deck = RawDeck::parse(r#"[{ "id": "a", "type": "hero", "content": {} }]"#).unwrap();
        assert!(deck.title.is_none());
        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].title, "");
    }

    #[test]
    fn titled_documents_keep_their_title() {
        let deck = RawDeck::parse(r#"{ "title": "Q3", "slides": [] }"#).unwrap();
        assert_eq!(deck.title.as_deref(), Some("Q3"));
    }

    #[test]
    fn unknown_types_become_unsupported_when_skipping() {
        let slide = raw("video", json!({ "src": "intro.mp4" }))
            .into_slide(UnsupportedPolicy::Skip)
            .unwrap();
        assert_eq!(
            slide.body,
            SlideBody::Unsupported {
                kind: "video".into()
            }
        );
        assert_eq!(slide.kind_tag(), "video");
    }

    #[test]
    fn unknown_types_fail_when_rejecting() {
        let err = raw("video", Value::Null)
            .into_slide(UnsupportedPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, DeckError::UnknownType { ref kind, .. } if kind == "video"));
    }

    #[test]
    fn stats_content_must_be_a_list() {
        let err = raw("stats", json!({ "title": "x", "value": 1 }))
            .into_slide(UnsupportedPolicy::Skip)
            .unwrap_err();
        assert!(matches!(
            err,
            DeckError::InvalidContent {
                kind: SlideKind::Stats,
                ..
            }
        ));
    }

    #[test]
    fn charts_are_checked_after_parsing() {
        let err = raw(
            "chart",
            json!({ "chartType": "line", "data": [{ "x": 1 }], "keys": [] }),
        )
        .into_slide(UnsupportedPolicy::Skip)
        .unwrap_err();
        assert!(matches!(err, DeckError::Chart { .. }));
    }

    #[test]
    fn unfamiliar_chart_types_plot_lines() {
        let rows = json!([{ "quarter": "Q1", "alpha": 3 }]);
        for content in [
            json!({ "chartType": "area", "data": rows, "keys": ["alpha"] }),
            json!({ "data": rows, "keys": ["alpha"] }),
        ] {
            let slide = raw("chart", content)
                .into_slide(UnsupportedPolicy::Reject)
                .unwrap();
            let SlideBody::Chart(chart) = slide.body else {
                panic!("expected a chart");
            };
            assert_eq!(chart.chart_type, ChartKind::Line);
            assert_eq!(chart.x_key(), Some("quarter"));
        }
    }
}
