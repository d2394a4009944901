//! String-level color metrics: luminance, contrast, text color, and names.
//!
//! Like [`convert`](crate::convert), these functions accept hexadecimal
//! strings and never fail. Malformed colors produce a contrast ratio of zero,
//! black text, and the name `Unknown`.

use crate::core::to_relative_luminance;
use crate::{Color, Float};

/// Compute the WCAG 2.x relative luminance of the given coordinates.
///
/// ```
/// # use swatchbook::metrics::relative_luminance;
/// assert_eq!(relative_luminance(0, 0, 0), 0.0);
/// assert_eq!(relative_luminance(255, 255, 255), 1.0);
/// ```
pub fn relative_luminance(r: u8, g: u8, b: u8) -> Float {
    to_relative_luminance(&[r, g, b])
}

/// Compute the WCAG 2.x contrast ratio between two hexadecimal colors.
///
/// The result lies between 1 and 21 and is the same for either argument
/// order. If either color is malformed, this function returns 0.
///
/// ```
/// # use swatchbook::metrics::contrast_ratio;
/// assert_eq!(contrast_ratio("#000000", "#FFFFFF"), 21.0);
/// assert_eq!(contrast_ratio("#FF6B6B", "#FF6B6B"), 1.0);
/// assert_eq!(contrast_ratio("#000000", "white"), 0.0);
/// ```
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Float {
    match (Color::from_hex(hex1), Color::from_hex(hex2)) {
        (Ok(c1), Ok(c2)) => c1.contrast_ratio(&c2),
        _ => 0.0,
    }
}

/// Pick black or white text for an overlay on the hexadecimal color.
///
/// This function returns `#000000` for light backgrounds and `#FFFFFF` for
/// dark ones. It falls back on `#000000` for malformed colors. The luma
/// estimate it relies on differs from relative luminance, so the choice does
/// not always maximize the WCAG contrast ratio.
pub fn contrast_color(hex: &str) -> &'static str {
    match Color::from_hex(hex).map(|c| c.contrast_text()) {
        Ok(Color::WHITE) => "#FFFFFF",
        _ => "#000000",
    }
}

/// Get a human-readable name for the hexadecimal color.
///
/// ```
/// # use swatchbook::metrics::color_name;
/// assert_eq!(color_name("#FF0000"), "Red");
/// assert_eq!(color_name("#1A1A1A"), "Black");
/// assert_eq!(color_name("#96CEB4"), "Cyan");
/// assert_eq!(color_name("#12"), "Unknown");
/// ```
pub fn color_name(hex: &str) -> String {
    Color::from_hex(hex).map_or_else(|_| "Unknown".to_string(), |c| c.name())
}

// ====================================================================================================================
