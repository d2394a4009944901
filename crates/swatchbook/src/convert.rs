//! String-level conversions between color representations.
//!
//! The functions in this module accept and produce hexadecimal strings, which
//! makes them a good fit for text inputs and stored palettes. With the
//! exception of [`hex_to_rgb`] and [`try_normalize_hex`], they never fail.
//! Malformed input results in `None` or passes through unchanged. Code that
//! already holds a [`Color`] should use its methods instead.
//!
//! ```
//! # use swatchbook::convert::{hex_to_hsl, hsl_to_hex, is_valid_hex, normalize_hex};
//! # use swatchbook::Hsl;
//! assert!(is_valid_hex("#abc"));
//! assert_eq!(normalize_hex("#abc"), "#AABBCC");
//! assert_eq!(hex_to_hsl("#FF0000"), Some(Hsl { h: 0, s: 100, l: 50 }));
//! assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
//! ```

use crate::core::{format_hashed, hsl_to_rgb, is_hashed, normalize, to_channel};
use crate::error::ColorFormatError;
use crate::{Cmyk, Color, Float, Hsl, Rgb};

/// Parse a hexadecimal color into its red, green, and blue coordinates.
///
/// This function is strict. It accepts exactly six hexadecimal digits after
/// an optional `#`, in either case.
///
/// ```
/// # use swatchbook::convert::hex_to_rgb;
/// # use swatchbook::error::ColorFormatError;
/// # use swatchbook::Rgb;
/// assert_eq!(hex_to_rgb("#4ECDC4"), Ok(Rgb { r: 78, g: 205, b: 196 }));
/// assert_eq!(hex_to_rgb("#4EC"), Err(ColorFormatError::UnexpectedLength));
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorFormatError> {
    Color::from_hex(hex).map(|c| c.rgb())
}

/// Format red, green, and blue coordinates as a canonical hexadecimal color.
///
/// Each coordinate is rounded and clamped to `0..=255`. Not-a-number becomes
/// zero.
///
/// ```
/// # use swatchbook::convert::rgb_to_hex;
/// assert_eq!(rgb_to_hex(255.0, 107.4, 107.6), "#FF6B6C");
/// assert_eq!(rgb_to_hex(-1.0, 256.0, 0.0), "#00FF00");
/// ```
pub fn rgb_to_hex(r: Float, g: Float, b: Float) -> String {
    format_hashed(&[to_channel(r), to_channel(g), to_channel(b)])
}

/// Convert a hexadecimal color to rounded hue, saturation, and lightness.
///
/// This function returns `None` if the color is not six hexadecimal digits
/// with an optional leading `#`.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    Color::from_hex(hex).ok().map(|c| c.hsl())
}

/// Convert hue, saturation, and lightness to a canonical hexadecimal color.
///
/// The hue is in degrees and wraps around. Saturation and lightness are
/// percentages clamped to `0..=100`.
pub fn hsl_to_hex(h: Float, s: Float, l: Float) -> String {
    format_hashed(&hsl_to_rgb(h, s, l))
}

/// Convert a hexadecimal color to cyan, magenta, yellow, and key percentages.
///
/// This function returns `None` for malformed colors.
///
/// ```
/// # use swatchbook::convert::hex_to_cmyk;
/// # use swatchbook::Cmyk;
/// assert_eq!(hex_to_cmyk("#000000"), Some(Cmyk { c: 0, m: 0, y: 0, k: 100 }));
/// assert_eq!(hex_to_cmyk("#0080FF"), Some(Cmyk { c: 100, m: 50, y: 0, k: 0 }));
/// assert_eq!(hex_to_cmyk("nope"), None);
/// ```
pub fn hex_to_cmyk(hex: &str) -> Option<Cmyk> {
    Color::from_hex(hex).ok().map(|c| c.cmyk())
}

/// Determine whether the string is a hexadecimal color with three or six
/// digits after an optional `#`.
pub fn is_valid_hex(s: &str) -> bool {
    is_hashed(s)
}

/// Normalize a hexadecimal color to canonical notation.
///
/// This function strips the first `#`, converts letters to upper case,
/// expands three-digit shorthand, and adds the `#` back. It does not validate
/// its input, so malformed strings come out in a different case but otherwise
/// unchanged. Use [`try_normalize_hex`] to reject them instead.
///
/// ```
/// # use swatchbook::convert::normalize_hex;
/// assert_eq!(normalize_hex("ff6b6b"), "#FF6B6B");
/// assert_eq!(normalize_hex("#f60"), "#FF6600");
/// assert_eq!(normalize_hex("#hello"), "#HELLO");
/// ```
pub fn normalize_hex(s: &str) -> String {
    normalize(s)
}

/// Normalize a hexadecimal color to canonical notation or fail.
///
/// Unlike [`normalize_hex`], this function accepts only what
/// [`is_valid_hex`] accepts.
///
/// ```
/// # use swatchbook::convert::try_normalize_hex;
/// # use swatchbook::error::ColorFormatError;
/// assert_eq!(try_normalize_hex("#f60"), Ok("#FF6600".to_string()));
/// assert_eq!(try_normalize_hex("#hello"), Err(ColorFormatError::UnexpectedLength));
/// ```
pub fn try_normalize_hex(s: &str) -> Result<String, ColorFormatError> {
    s.parse::<Color>().map(|c| c.to_hex())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ff0000"), Ok(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(hex_to_rgb("00FF00"), Ok(Rgb { r: 0, g: 255, b: 0 }));
        assert_eq!(hex_to_rgb("#12345"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(hex_to_rgb("#12345G"), Err(ColorFormatError::MalformedHex));
        assert_eq!(hex_to_rgb(""), Err(ColorFormatError::UnexpectedLength));
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(rgb_to_hex(255.0, 255.0, 255.0), "#FFFFFF");
        assert_eq!(rgb_to_hex(Float::NAN, 15.5, 1000.0), "#0010FF");

        for hex in ["#FF6B6B", "#4ECDC4", "#2D3436", "#000000"] {
            let Rgb { r, g, b } = hex_to_rgb(hex).expect("valid color");
            assert_eq!(rgb_to_hex(r as Float, g as Float, b as Float), hex);
        }
    }

    #[test]
    fn test_hsl() {
        assert_eq!(hex_to_hsl("#808080"), Some(Hsl { h: 0, s: 0, l: 50 }));
        assert_eq!(hex_to_hsl("#0000FF"), Some(Hsl { h: 240, s: 100, l: 50 }));
        assert_eq!(hex_to_hsl("#00F"), None);
        assert_eq!(hex_to_hsl("#GGGGGG"), None);

        assert_eq!(hsl_to_hex(0.0, 100.0, 75.0), "#FF8080");
        assert_eq!(hsl_to_hex(720.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(-60.0, 100.0, 50.0), "#FF00FF");
    }

    #[test]
    fn test_rounded_hsl_round_trip() {
        // Rounding to whole degrees and percent loses up to a few units.
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let hex = rgb_to_hex(r as Float, g as Float, b as Float);
                    let Hsl { h, s, l } = hex_to_hsl(&hex).expect("valid color");
                    let back = hsl_to_hex(h as Float, s as Float, l as Float);

                    let Rgb { r: r1, g: g1, b: b1 } = hex_to_rgb(&hex).expect("valid color");
                    let Rgb { r: r2, g: g2, b: b2 } = hex_to_rgb(&back).expect("valid color");
                    assert!(
                        r1.abs_diff(r2) <= 5 && g1.abs_diff(g2) <= 5 && b1.abs_diff(b2) <= 5,
                        "{} round-trips to {}",
                        hex,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_validity() {
        for valid in ["#FFF", "#ffffff", "abc", "123456"] {
            assert!(is_valid_hex(valid), "{} should be valid", valid);
        }
        for invalid in ["#FFFF", "#GGG", "", "#", "rgb(0, 0, 0)", "#1234567"] {
            assert!(!is_valid_hex(invalid), "{} should be invalid", invalid);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_hex("#abc"), "#AABBCC");
        assert_eq!(normalize_hex("#A1B2C3"), "#A1B2C3");
        assert_eq!(normalize_hex("1"), "#1");
        assert_eq!(try_normalize_hex("abcdef"), Ok("#ABCDEF".to_string()));
        assert_eq!(try_normalize_hex("#abcd"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(try_normalize_hex("#xyz"), Err(ColorFormatError::MalformedHex));

        // Normalization is idempotent for valid colors.
        for hex in ["#abc", "def", "#123456"] {
            let once = normalize_hex(hex);
            assert_eq!(normalize_hex(&once), once);
        }
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(hex_to_cmyk("#FFFFFF"), Some(Cmyk { c: 0, m: 0, y: 0, k: 0 }));
        assert_eq!(hex_to_cmyk("#FF0000"), Some(Cmyk { c: 0, m: 100, y: 100, k: 0 }));
        assert_eq!(hex_to_cmyk("#808080"), Some(Cmyk { c: 0, m: 0, y: 0, k: 50 }));
    }
}
