//! Packed-color decoding, parsing and formatting.
//!
//! Colors use the caller format `0xAARRGGBB`. The alpha byte is carried but
//! masked out of channel extraction and lit-determination.

/// Decoded per-channel intensities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Extract the red/green/blue channels from a packed `0xAARRGGBB` value.
pub fn split(color: u32) -> Rgb {
    Rgb {
        red: ((color >> 16) & 0xFF) as u8,
        green: ((color >> 8) & 0xFF) as u8,
        blue: (color & 0xFF) as u8,
    }
}

/// Perceptual brightness of a packed color, `0..=255`.
///
/// Channel weights 77/150/29 sum to 256, so the shifted result needs no
/// clamping.
pub fn to_brightness(color: u32) -> u8 {
    let c = split(color);
    ((77 * c.red as u32 + 150 * c.green as u32 + 29 * c.blue as u32) >> 8) as u8
}

/// True iff any color channel is nonzero. Alpha alone never lights a channel.
pub fn is_lit(color: u32) -> bool {
    color & 0x00FF_FFFF != 0
}

/// Parse a color string into the packed format `0xAARRGGBB`.
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"` (alpha implied `0xFF`)
/// - Hex with alpha: `"#80FF0000"`
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`, `"yellow"`,
///   `"purple"`, `"cyan"` (alpha implied `0xFF`)
pub fn parse_color(s: &str) -> crate::error::Result<u32> {
    let s = s.trim();

    // Named colors
    match s.to_lowercase().as_str() {
        "red" => return Ok(0xFFFF_0000),
        "green" => return Ok(0xFF00_FF00),
        "blue" => return Ok(0xFF00_00FF),
        "white" => return Ok(0xFFFF_FFFF),
        "orange" => return Ok(0xFFFF_8000),
        "yellow" => return Ok(0xFFFF_FF00),
        "purple" => return Ok(0xFF80_00FF),
        "cyan" => return Ok(0xFF00_FFFF),
        "off" | "black" => return Ok(0x0000_0000),
        _ => {}
    }

    // Hex color
    let hex = s.strip_prefix('#').unwrap_or(s);
    let val = u32::from_str_radix(hex, 16)
        .map_err(|_| crate::LedmuxError::Color(format!("Invalid hex color: {s}")))?;
    match hex.len() {
        6 => Ok(0xFF00_0000 | val),
        8 => Ok(val),
        _ => Err(crate::LedmuxError::Color(format!(
            "Invalid color: {s} (use #RRGGBB, #AARRGGBB or a color name)"
        ))),
    }
}

/// Format a packed color value as `#RRGGBB` (alpha dropped).
pub fn format_color(val: u32) -> String {
    let c = split(val);
    format!("#{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
}
