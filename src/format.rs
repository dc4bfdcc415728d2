//! Engineering-notation rendering and parsing of resistance values.

/// SI scales, largest first.
const SCALES: &[(f64, &str)] = &[
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
];

/// Render a resistance in engineering notation, e.g. `4.70k`.
///
/// The largest prefix whose scale does not exceed the value is chosen, so the
/// mantissa lands in `[1, 1000)` for everything between 1 pΩ and 1000 TΩ.
/// Mantissas carry two decimals, except whole bare-ohm values of 100 and
/// above which print without decimals (`470`). No unit symbol is appended.
pub fn format_resistance(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    if value == 0.0 {
        return "0.00".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let mut index = SCALES
        .iter()
        .position(|(scale, _)| magnitude >= *scale)
        .unwrap_or(SCALES.len() - 1);
    // A mantissa that rounds to 1000.00 moves up to the next prefix.
    if index > 0 && (magnitude / SCALES[index].0 * 100.0).round() >= 100_000.0 {
        index -= 1;
    }
    let (scale, prefix) = SCALES[index];
    let scaled = magnitude / scale;

    if prefix.is_empty() && scaled >= 100.0 && scaled.fract() == 0.0 {
        format!("{}{:.0}", sign, scaled)
    } else {
        format!("{}{:.2}{}", sign, scaled, prefix)
    }
}

/// Parse a resistance with optional SI suffix, e.g. `4.7k`, `100`, `2.2MΩ`.
///
/// A trailing `Ω` or `R` unit marker is ignored. Returns `None` for anything
/// that is not a number.
pub fn parse_resistance(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text
        .strip_suffix('Ω')
        .or_else(|| text.strip_suffix('R'))
        .unwrap_or(text)
        .trim_end();
    if text.is_empty() {
        return None;
    }

    let last = text.chars().last()?;
    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        'T' => 1e12,
        _ => 1.0,
    };
    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}
