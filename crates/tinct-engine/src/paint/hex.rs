//! Conversions between packed `0xRRGGBB` tints, normalized RGB, and hex strings.

use super::ColorError;

/// Splits a packed tint into normalized `[r, g, b]`.
#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// Packs normalized `[r, g, b]` into a tint.
///
/// Each channel is scaled by 255 and truncated, then clamped to a byte.
#[inline]
pub fn rgb_to_hex(rgb: [f32; 3]) -> u32 {
    let byte = |c: f32| ((c * 255.0) as i32).clamp(0, 255) as u32;
    (byte(rgb[0]) << 16) | (byte(rgb[1]) << 8) | byte(rgb[2])
}

/// Formats the low 24 bits of a tint as `#rrggbb`.
#[inline]
pub fn hex_to_string(hex: u32) -> String {
    format!("#{:06x}", hex & 0xFF_FFFF)
}

/// Parses `#rrggbb`, `0xrrggbb`, `rrggbb` or short `#rgb` into a tint.
pub fn string_to_hex(s: &str) -> Result<u32, ColorError> {
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        log::debug!("rejected hex color {s:?}");
        return Err(ColorError::InvalidHex(s.to_owned()));
    }

    let parsed = match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok(),
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok()
        }
        _ => None,
    };

    parsed.ok_or_else(|| {
        log::debug!("rejected hex color {s:?}");
        ColorError::InvalidHex(s.to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_splits_channels() {
        assert_eq!(hex_to_rgb(0xFF0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb(0x00FF00), [0.0, 1.0, 0.0]);
        assert_eq!(hex_to_rgb(0x0000FF), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn rgb_to_hex_truncates_and_clamps() {
        assert_eq!(rgb_to_hex([1.0, 0.5, 0.0]), 0xFF7F00);
        assert_eq!(rgb_to_hex([2.0, -1.0, 1.0]), 0xFF00FF);
    }

    #[test]
    fn rgb_hex_round_trip_for_exact_bytes() {
        for hex in [0x000000, 0xFF00FF, 0xFFFFFF] {
            assert_eq!(rgb_to_hex(hex_to_rgb(hex)), hex);
        }
    }

    #[test]
    fn hex_to_string_pads() {
        assert_eq!(hex_to_string(0x0000FF), "#0000ff");
        assert_eq!(hex_to_string(0xABCDEF), "#abcdef");
        assert_eq!(hex_to_string(0xFF_ABCDEF), "#abcdef");
    }

    #[test]
    fn string_to_hex_prefixes() {
        assert_eq!(string_to_hex("#ff8000"), Ok(0xFF8000));
        assert_eq!(string_to_hex("0xFF8000"), Ok(0xFF8000));
        assert_eq!(string_to_hex("ff8000"), Ok(0xFF8000));
    }

    #[test]
    fn string_to_hex_short_form() {
        assert_eq!(string_to_hex("#f80"), Ok(0xFF8800));
    }

    #[test]
    fn string_to_hex_rejects_garbage() {
        for s in ["", "#", "#12345", "#gggggg", "+12345", "#1234567"] {
            assert_eq!(string_to_hex(s), Err(ColorError::InvalidHex(s.to_owned())));
        }
    }

    #[test]
    fn string_round_trip() {
        for hex in [0x000000, 0x0A0B0C, 0xFFFFFF] {
            assert_eq!(string_to_hex(&hex_to_string(hex)), Ok(hex));
        }
    }
}
