//! Hex color validation and conversion to HSL channel triples.
//!
//! The presentation layer expresses color as `H S% L%` strings so renderers
//! can composite over them (opacity overlays, gradients) via
//! `hsl(var(--role) / alpha)`.

/// True when `value` is a 3- or 6-digit hex color, with or without a
/// leading `#`.
pub fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Convert a hex color to an `"H S% L%"` string: hue in integer degrees
/// 0–359, saturation and lightness as integer percentages.
///
/// Non-hex input passes through unchanged — stored values may already be a
/// raw color expression.
pub fn hex_to_hsl(value: &str) -> String {
    let Some((r, g, b)) = parse_hex(value) else {
        return value.to_string();
    };

    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let lightness = (max + min) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    format!(
        "{} {}% {}%",
        (hue.round() as i64).rem_euclid(360),
        (saturation * 100.0).round() as i64,
        (lightness * 100.0).round() as i64
    )
}

fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    if !is_hex_color(value) {
        return None;
    }
    let digits = value.strip_prefix('#').unwrap_or(value);
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_hex_forms() {
        assert!(is_hex_color("#C65D3E"));
        assert!(is_hex_color("C65D3E"));
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("0a0"));
        assert!(!is_hex_color("#C65D3"));
        assert!(!is_hex_color("#GGHHII"));
        assert!(!is_hex_color("hsl(14 54% 51%)"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn converts_white_and_black() {
        assert_eq!(hex_to_hsl("#FFFFFF"), "0 0% 100%");
        assert_eq!(hex_to_hsl("#000000"), "0 0% 0%");
    }

    #[test]
    fn converts_terracotta_reference_value() {
        // #C65D3E: hand-computed 13.7° hue, 54.4% saturation, 51.0% lightness.
        assert_eq!(hex_to_hsl("#C65D3E"), "14 54% 51%");
    }

    #[test]
    fn expands_short_hex() {
        assert_eq!(hex_to_hsl("#fff"), "0 0% 100%");
        assert_eq!(hex_to_hsl("#f00"), "0 100% 50%");
    }

    #[test]
    fn primary_channels() {
        assert_eq!(hex_to_hsl("#00FF00"), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000FF"), "240 100% 50%");
    }

    #[test]
    fn non_hex_passes_through() {
        assert_eq!(hex_to_hsl("oklch(0.7 0.1 50)"), "oklch(0.7 0.1 50)");
        assert_eq!(hex_to_hsl("220 14% 96%"), "220 14% 96%");
    }
}
