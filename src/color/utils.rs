use crate::{color::Rgb, math8::scale8};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Parse a `RRGGBB` hex string, with or without a leading `#`.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn parse_hex(color: &str) -> Option<Rgb> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb_from_u32)
}

/// Scale every channel of a color by an 8-bit level
#[inline]
pub fn scale_color(color: Rgb, level: u8) -> Rgb {
    match level {
        255 => color,
        0 => Rgb::default(),
        level => Rgb {
            r: scale8(color.r, level),
            g: scale8(color.g, level),
            b: scale8(color.b, level),
        },
    }
}
