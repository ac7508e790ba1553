use anyhow::Result;
use serde_json::json;
use slidr::Deck;

use super::OutputFormat;

/// Print the deck's slides in the chosen format.
pub(crate) fn print_slides(deck: &Deck, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => println!("{}", format_slides_plain(deck)),
        OutputFormat::Json => println!("{}", format_slides_json(deck)?),
    }
    Ok(())
}

/// One line per slide: position, id, type tag and title.
pub(crate) fn format_slides_plain(deck: &Deck) -> String {
    let mut lines = Vec::with_capacity(deck.slides().len() + 1);
    if let Some(title) = deck.title() {
        lines.push(title.to_string());
    }
    for (index, slide) in deck.slides().iter().enumerate() {
        let marker = if slide.body.kind().is_some() { "" } else { " (not drawn)" };
        lines.push(format!(
            "{}. {} [{}] {}{marker}",
            index + 1,
            slide.id,
            slide.kind_tag(),
            slide.title
        ));
    }
    lines.join("\n")
}

pub(crate) fn format_slides_json(deck: &Deck) -> Result<String> {
    let slides: Vec<_> = deck
        .slides()
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            json!({
                "position": index + 1,
                "id": slide.id,
                "type": slide.kind_tag(),
                "title": slide.title,
                "supported": slide.body.kind().is_some(),
            })
        })
        .collect();

    let payload = json!({
        "title": deck.title(),
        "count": deck.slide_count().get(),
        "slides": slides,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use slidr::UnsupportedPolicy;

    use super::*;

    const DECK: &str = r#"[
        {"id": "intro", "title": "Intro", "type": "hero", "content": {"heading": "Hi"}},
        {"id": "clip", "title": "Clip", "type": "video", "content": {}}
    ]"#;

    fn deck() -> Deck {
        Deck::from_json(DECK, UnsupportedPolicy::Skip).unwrap()
    }

    #[test]
    fn plain_listing_marks_undrawn_slides() {
        insta::assert_snapshot!(format_slides_plain(&deck()), @r"
        1. intro [hero] Intro
        2. clip [video] Clip (not drawn)
        ");
    }

    #[test]
    fn json_listing_includes_every_slide() {
        let json = format_slides_json(&deck()).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["count"], 2);
        assert_eq!(value["title"], Value::Null);
        assert_eq!(value["slides"][0]["type"], "hero");
        assert_eq!(value["slides"][1]["type"], "video");
        assert_eq!(value["slides"][1]["supported"], false);
    }
}
