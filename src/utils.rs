/// Format a batting average with three decimals, e.g. `0.300`.
pub fn format_avg(value: f64) -> String {
    format!("{:.3}", value)
}

/// Text shown in the hover label for a cell.
pub fn tooltip_text(value: f64) -> String {
    format!("{}: {}", crate::config::TOOLTIP_PREFIX, format_avg(value))
}

/// Format a pixel coordinate for an SVG attribute.
///
/// Rounds to two decimals and drops trailing zeros so the markup stays
/// stable across renders.
pub fn fmt_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // -0.0 would print as "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Upper-case the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avg_has_three_decimals() {
        assert_eq!(format_avg(0.3), "0.300");
        assert_eq!(format_avg(0.2999), "0.300");
        assert_eq!(format_avg(1.0), "1.000");
    }

    #[test]
    fn tooltip_text_is_prefixed() {
        assert_eq!(tooltip_text(0.3), "AVG: 0.300");
    }

    #[test]
    fn px_trims_trailing_zeros() {
        assert_eq!(fmt_px(180.0), "180");
        assert_eq!(fmt_px(7.2), "7.2");
        assert_eq!(fmt_px(9.199999), "9.2");
        assert_eq!(fmt_px(-0.001), "0");
        assert_eq!(fmt_px(12.346), "12.35");
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize("rizzo"), "Rizzo");
        assert_eq!(capitalize(""), "");
    }
}
