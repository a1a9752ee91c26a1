//! RGBA value type and hex color codec.
//!
//! Colors travel through the preview pipeline as plain 8-bit RGBA
//! quadruples. The textual form accepted from callers is an optional `#`
//! marker followed by 6 (RGB) or 8 (RGBA) hex digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, Result};

/// An 8-bit-per-channel RGBA color.
///
/// Equality is component-wise; the type is a plain value with no
/// color-space semantics attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Parse a hex color string.
    ///
    /// An optional leading `#` is stripped, after which the remaining text
    /// must decode as exactly 3 (RGB, alpha defaults to opaque) or 4 (RGBA)
    /// two-digit hex bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidColorFormat`] for empty input, odd
    /// length, non-hex digits, or any byte count other than 3 or 4.
    pub fn parse_hex(text: &str) -> Result<Self> {
        let invalid = || PreviewError::InvalidColorFormat(text.to_string());

        // Validate on raw bytes: only ASCII hex digits are acceptable, so
        // multibyte input can neither slip through nor upset indexing.
        let digits = text.strip_prefix('#').unwrap_or(text).as_bytes();
        if digits.is_empty()
            || digits.len() % 2 != 0
            || !digits.iter().all(|b| b.is_ascii_hexdigit())
        {
            return Err(invalid());
        }

        let count = digits.len() / 2;
        if count != 3 && count != 4 {
            return Err(invalid());
        }
        let mut channels = [0u8; 4];
        for (slot, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
            *slot = (hex_nibble(pair[0]) << 4) | hex_nibble(pair[1]);
        }

        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: if count == 4 { channels[3] } else { 255 },
        })
    }
}

/// Decode one ASCII hex digit. Callers validate with
/// [`u8::is_ascii_hexdigit`] first.
const fn hex_nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl FromStr for Rgba {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_rgb_with_marker() {
        let color = Rgba::parse_hex("#FF00FF").unwrap();
        assert_eq!(color, Rgba::new(255, 0, 255, 255));
    }

    #[test]
    fn test_parse_rgba_without_marker() {
        let color = Rgba::parse_hex("FF00FF80").unwrap();
        assert_eq!(color, Rgba::new(255, 0, 255, 128));
    }

    #[test]
    fn test_parse_lowercase() {
        let color = Rgba::parse_hex("80c000").unwrap();
        assert_eq!(color, Rgba::rgb(128, 192, 0));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in ["ZZZZZZ", "FFF", "", "#", "FF00F", "FF00FF00FF", "#GG0000"] {
            let err = Rgba::parse_hex(bad).unwrap_err();
            assert!(
                matches!(err, PreviewError::InvalidColorFormat(_)),
                "expected InvalidColorFormat for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_multibyte_input_without_panicking() {
        for bad in ["日日", "#ÿÿÿ", "FF00F\u{e9}", "\u{1f5fa}\u{1f5fa}\u{1f5fa}"] {
            let err = Rgba::parse_hex(bad).unwrap_err();
            assert!(
                matches!(err, PreviewError::InvalidColorFormat(_)),
                "expected InvalidColorFormat for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_signed_pairs() {
        // u8::from_str_radix would accept "+1"; only bare hex digits may.
        for bad in ["+1+2+3", "-1-2-3", "+FFF00", " F00F00"] {
            let err = Rgba::parse_hex(bad).unwrap_err();
            assert!(
                matches!(err, PreviewError::InvalidColorFormat(_)),
                "expected InvalidColorFormat for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_display_roundtrip_opaque() {
        let color = Rgba::rgb(128, 0, 0);
        assert_eq!(color.to_string(), "#800000");
        assert_eq!(color.to_string().parse::<Rgba>().unwrap(), color);
    }

    proptest! {
        #[test]
        fn prop_display_parse_roundtrip(r: u8, g: u8, b: u8, a: u8) {
            let color = Rgba::new(r, g, b, a);
            let reparsed = Rgba::parse_hex(&color.to_string()).unwrap();
            prop_assert_eq!(reparsed, color);
        }

        #[test]
        fn prop_parse_never_panics(text in "\\PC{0,12}") {
            let _ = Rgba::parse_hex(&text);
        }
    }
}
