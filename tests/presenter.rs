use std::fs;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use slidr::deck::{ChartContent, SlideBody};
use slidr::ui::ChartView;
use slidr::{
    App, Command, Deck, Motion, PresenterOptions, SlideView, Theme, UnsupportedPolicy,
};
use tempfile::tempdir;

const DECK: &str = r#"{
    "title": "Quarterly review",
    "slides": [
        {
            "id": "intro",
            "title": "Intro",
            "type": "hero",
            "content": {"heading": "Q3 in numbers", "subheading": "A short tour", "logo": "Q3"}
        },
        {
            "id": "clip",
            "title": "Launch video",
            "type": "video",
            "content": {"src": "launch.mp4"}
        },
        {
            "id": "revenue",
            "title": "Revenue",
            "type": "chart",
            "content": {
                "chartType": "bar",
                "keys": ["online", "retail", "partners"],
                "data": [
                    {"month": "Jul", "online": 120, "retail": 80, "partners": 15},
                    {"month": "Aug", "online": 140, "retail": 75, "partners": 22}
                ]
            }
        }
    ]
}"#;

fn load_deck() -> Deck {
    let dir = tempdir().unwrap();
    let path = dir.path().join("review.json");
    fs::write(&path, DECK).unwrap();
    Deck::from_path(&path, UnsupportedPolicy::Skip).unwrap()
}

fn frame_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| app.draw_at(frame, Duration::from_secs(5)))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn walking_the_deck_wraps_around() {
    let mut app = App::new(load_deck(), PresenterOptions::default());

    let mut visited = Vec::new();
    for _ in 0..4 {
        visited.push(app.current_slide().id.clone());
        app.apply(Command::Next);
    }
    assert_eq!(visited, ["intro", "clip", "revenue", "intro"]);

    app.apply(Command::Previous);
    app.apply(Command::Previous);
    assert_eq!(app.current_slide().id, "revenue");
    assert_eq!(app.navigator().counter(), "3 / 3");
}

#[test]
fn frames_show_titles_and_counter() {
    let mut app = App::new(load_deck(), PresenterOptions::default());
    let text = frame_text(&mut app);
    assert!(text.contains("Quarterly review"));
    assert!(text.contains("Q3 in numbers"));
    assert!(text.contains("1 / 3"));

    app.apply(Command::Last);
    let text = frame_text(&mut app);
    assert!(text.contains("Revenue"));
    assert!(text.contains("retail"));
    assert!(text.contains("3 / 3"));
}

#[test]
fn unknown_slide_types_draw_nothing() {
    let deck = load_deck();
    let clip = &deck.slides()[1];
    assert!(matches!(clip.body, SlideBody::Unsupported { ref kind } if kind == "video"));

    let area = Rect::new(0, 0, 60, 20);
    let mut buf = Buffer::empty(area);
    let theme = Theme::default();
    SlideView::new(clip, &theme).render(area, &mut buf);
    assert_eq!(buf, Buffer::empty(area));

    let mut app = App::new(deck, PresenterOptions::default());
    app.apply(Command::Jump(1));
    let text = frame_text(&mut app);
    assert!(text.contains("Launch video"));
    assert!(text.contains("2 / 3"));
}

#[test]
fn strict_loading_refuses_unknown_types() {
    let err = Deck::from_json(DECK, UnsupportedPolicy::Reject).unwrap_err();
    assert!(err.to_string().contains("video"), "{err}");
}

#[test]
fn charts_plot_one_series_per_key() {
    let deck = load_deck();
    let SlideBody::Chart(content) = &deck.slides()[2].body else {
        panic!("revenue is a chart");
    };
    let content: &ChartContent = content;
    let view = ChartView::build(content, &Theme::default());

    let names: Vec<_> = view.series().iter().map(|series| series.name.as_str()).collect();
    assert_eq!(names, content.keys);
    assert_eq!(view.x_labels, ["Jul", "Aug"]);
}

#[test]
fn disabled_motion_settles_at_once() {
    let options = PresenterOptions {
        motion: Motion::disabled(),
        ..PresenterOptions::default()
    };
    let mut app = App::new(load_deck(), options);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| app.draw_at(frame, Duration::ZERO))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("A short tour"));
}
