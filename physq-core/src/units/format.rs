//! Text rendering helpers shared by quantities and operation results.

/// Superscript glyph for a unit exponent (`""` for 1).
#[must_use]
pub fn exponent_glyph(exponent: i32) -> String {
    match exponent {
        1 => String::new(),
        2 => "²".to_string(),
        3 => "³".to_string(),
        4 => "⁴".to_string(),
        _ => format!("^{exponent}"),
    }
}

/// Renders `value` with at most `digits` significant digits.
///
/// Trailing zeros are trimmed. Values whose decimal exponent is below -5 or
/// at least `digits` are written in scientific form (`3.6e6`, `1.5e-7`).
#[must_use]
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1);

    // Round first so that 999999.7 is treated as 1e6
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -5 || exponent >= digits as i32 {
        return format!("{}e{exponent}", trim_fraction(mantissa));
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
