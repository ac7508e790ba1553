use std::fmt::Write;

use clap::Arg;
use clap::builder::{
    StyledStr,
    styling::{AnsiColor, Color, Style},
};

const DEFAULT_MARKER: &str = "(default: ";

/// Move clap's `[possible values]`, `[default]` and `[env]` notes into the
/// help text and draw them, along with any `(default: ...)` note, dimmed.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
    let help_text = arg
        .get_help()
        .map(ToString::to_string)
        .unwrap_or_default();
    let mentions_default = help_text.contains(DEFAULT_MARKER);

    let mut annotations = Vec::new();
    if let Some(annotation) = possible_values_annotation(&arg) {
        arg = arg.hide_possible_values(true);
        annotations.push(annotation);
    }
    if !mentions_default && let Some(annotation) = default_value_annotation(&arg) {
        arg = arg.hide_default_value(true);
        annotations.push(annotation);
    }
    if let Some(annotation) = env_annotation(&arg) {
        arg = arg.hide_env(true);
        annotations.push(annotation);
    }

    if help_text.is_empty() && annotations.is_empty() {
        return arg;
    }

    let mut styled = dim_default_notes(&help_text);
    let mut separate = !help_text.is_empty();
    for annotation in annotations {
        if separate {
            styled.push_str(" ");
        }
        push_muted(&mut styled, &annotation);
        separate = true;
    }
    arg.help(styled)
}

fn muted() -> Style {
    Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
        .dimmed()
}

fn push_muted(target: &mut StyledStr, text: &str) {
    let style = muted();
    let _ = write!(target, "{style}{text}{style:#}");
}

/// Copy `text`, dimming every `(default: ...)` note in it.
pub(crate) fn dim_default_notes(text: &str) -> StyledStr {
    let mut styled = StyledStr::new();
    let mut rest = text;
    while let Some(start) = rest.find(DEFAULT_MARKER) {
        let Some(length) = rest[start..].find(')') else {
            break;
        };
        let end = start + length + 1;
        styled.push_str(&rest[..start]);
        push_muted(&mut styled, &rest[start..end]);
        rest = &rest[end..];
    }
    styled.push_str(rest);
    styled
}

fn quote_if_spaced(text: &str) -> String {
    if text.chars().any(char::is_whitespace) {
        format!("{text:?}")
    } else {
        text.to_string()
    }
}

pub(crate) fn possible_values_annotation(arg: &Arg) -> Option<String> {
    if !arg.get_action().takes_values() {
        return None;
    }
    let visible: Vec<String> = arg
        .get_possible_values()
        .iter()
        .filter(|value| !value.is_hide_set())
        .map(|value| quote_if_spaced(value.get_name()))
        .collect();
    if visible.is_empty() {
        return None;
    }
    Some(format!("[possible values: {}]", visible.join(", ")))
}

pub(crate) fn default_value_annotation(arg: &Arg) -> Option<String> {
    let rendered: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|value| value.to_string_lossy())
        .filter(|text| !text.trim().is_empty())
        .map(|text| quote_if_spaced(&text))
        .collect();
    if rendered.is_empty() {
        return None;
    }
    Some(format!("(default: {})", rendered.join(", ")))
}

pub(crate) fn env_annotation(arg: &Arg) -> Option<String> {
    let name = arg.get_env()?.to_string_lossy();
    if name.trim().is_empty() {
        return None;
    }
    Some(format!("[env: {name}=]"))
}
