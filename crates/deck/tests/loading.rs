use std::io::Write;

use slidr_deck::{ChartKind, Deck, DeckError, SlideBody, UnsupportedPolicy};
use tempfile::NamedTempFile;

const MIXED_DECK: &str = r#"{
    "title": "Quarterly review",
    "slides": [
        { "id": "cover", "title": "Cover", "type": "hero",
          "content": { "heading": "Q3", "subheading": "Results", "logo": "Q3" } },
        { "id": "clip", "title": "Demo video", "type": "video",
          "content": { "src": "demo.mp4" } },
        { "id": "trend", "title": "Trend", "type": "chart",
          "content": { "chartType": "line", "xKey": "month",
                       "data": [ { "users": 10, "month": "Jan" },
                                 { "users": 12, "month": "Feb" } ],
                       "keys": ["users"] } }
    ]
}"#;

fn write_deck(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn decks_load_from_disk_with_unsupported_slides_kept() {
    let file = write_deck(MIXED_DECK);
    let deck = Deck::from_path(file.path(), UnsupportedPolicy::Skip).unwrap();

    assert_eq!(deck.title(), Some("Quarterly review"));
    assert_eq!(deck.slide_count().get(), 3);
    assert!(matches!(
        deck.slides()[1].body,
        SlideBody::Unsupported { ref kind } if kind == "video"
    ));

    let SlideBody::Chart(chart) = &deck.slides()[2].body else {
        panic!("expected a chart slide");
    };
    assert_eq!(chart.chart_type, ChartKind::Line);
    assert_eq!(chart.x_labels(), vec!["Jan", "Feb"]);
}

#[test]
fn strict_loading_rejects_unsupported_slides() {
    let file = write_deck(MIXED_DECK);
    let err = Deck::from_path(file.path(), UnsupportedPolicy::Reject).unwrap_err();
    assert_eq!(err.to_string(), "slide `clip` has unrecognised type `video`");
}

#[test]
fn missing_files_report_their_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Deck::from_path(&path, UnsupportedPolicy::Skip).unwrap_err();
    assert!(matches!(err, DeckError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Deck::from_json("{ \"slides\": [", UnsupportedPolicy::Skip).unwrap_err();
    assert!(matches!(err, DeckError::Parse(_)));
}
