//! Number formatting for tiles, labels and axis ticks.

/// Decimal places kept before trailing zeros are trimmed.
const MAX_DECIMALS: usize = 3;

/// Format a number without grouping, trimming trailing zeros: `6.40` becomes
/// `6.4` and `2023.0` becomes `2023`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{:.*}", MAX_DECIMALS, value);
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a number with `,` between groups of three integer digits.
pub fn group_thousands(value: f64) -> String {
    let plain = format_number(value);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if !integer.bytes().all(|byte| byte.is_ascii_digit()) {
        return plain;
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (offset, digit) in integer.chars().enumerate() {
        if offset > 0 && (integer.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Text shown on a stat tile: the grouped value followed by its suffix.
pub fn format_stat_value(value: f64, suffix: Option<&str>) -> String {
    let mut text = group_thousands(value);
    if let Some(suffix) = suffix {
        text.push_str(suffix);
    }
    text
}
