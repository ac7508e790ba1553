use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour `{0}`")]
pub struct InvalidColor(pub String);

/// Parse a colour written as `#rgb`, `#rrggbb`, `rgb(r, g, b)`, an ANSI index
/// or a named terminal colour.
pub fn parse_color(input: &str) -> Result<Color, InvalidColor> {
    let value = input.trim();
    let invalid = || InvalidColor(input.to_string());

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let mut parts = body.split(',').map(|part| part.trim().parse::<u8>());
        return match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Color::Rgb(r, g, b)),
            _ => Err(invalid()),
        };
    }

    Color::from_str(value).map_err(|_| invalid())
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        3 => {
            let mut expanded = [0u8; 3];
            for (slot, digit) in expanded.iter_mut().zip(hex.chars()) {
                let doubled: String = [digit, digit].iter().collect();
                *slot = channel(&doubled)?;
            }
            Some(Color::Rgb(expanded[0], expanded[1], expanded[2]))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}
