//! WCAG 2.x conformance grading of contrast ratios.
//!
//! WCAG 2.x requires a contrast ratio of at least 4.5:1 for normal text and
//! 3:1 for large text at level AA, and 7:1 and 4.5:1, respectively, at level
//! AAA. Large text is at least 18pt or bold at 14pt.
//!
//! ```
//! # use swatchbook::wcag::{ContrastReport, TextSize, WcagLevel};
//! # use swatchbook::Color;
//! let report = ContrastReport::new(Color::new(0x77, 0x77, 0x77), Color::WHITE);
//! assert!(report.passes(WcagLevel::AA, TextSize::Large));
//! assert!(!report.passes(WcagLevel::AA, TextSize::Normal));
//! assert_eq!(report.to_string(), "4.48:1");
//! ```

use crate::{Color, Float};

/// A WCAG conformance level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    /// The minimum level.
    AA,
    /// The enhanced level.
    AAA,
}

/// A text size category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextSize {
    #[default]
    Normal,
    /// At least 18pt, or 14pt and bold.
    Large,
}

impl WcagLevel {
    /// Get the minimum contrast ratio for text of the given size.
    pub const fn threshold(&self, size: TextSize) -> Float {
        match (*self, size) {
            (Self::AA, TextSize::Normal) => 4.5,
            (Self::AA, TextSize::Large) => 3.0,
            (Self::AAA, TextSize::Normal) => 7.0,
            (Self::AAA, TextSize::Large) => 4.5,
        }
    }
}

/// Determine whether the contrast ratio meets the level for text of the
/// given size.
pub fn passes(ratio: Float, level: WcagLevel, size: TextSize) -> bool {
    ratio >= level.threshold(size)
}

/// The contrast between a foreground and background color, graded against
/// WCAG 2.x.
///
/// The display is the ratio with two decimals, e.g., `21.00:1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastReport {
    pub foreground: Color,
    pub background: Color,
    pub ratio: Float,
}

impl ContrastReport {
    /// Create a new contrast report for the given colors.
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            ratio: foreground.contrast_ratio(&background),
        }
    }

    /// Create a new contrast report for hexadecimal colors.
    ///
    /// Both colors may use three-digit shorthand. A malformed foreground
    /// falls back on black and a malformed background on white, which is
    /// what a contrast checker shows while the user is still typing.
    ///
    /// ```
    /// # use swatchbook::wcag::ContrastReport;
    /// # use swatchbook::Color;
    /// let report = ContrastReport::from_hex("#00", "#fff");
    /// assert_eq!(report.foreground, Color::BLACK);
    /// assert_eq!(report.ratio, 21.0);
    /// ```
    pub fn from_hex(foreground: &str, background: &str) -> Self {
        Self::new(
            foreground.parse().unwrap_or(Color::BLACK),
            background.parse().unwrap_or(Color::WHITE),
        )
    }

    /// Determine whether the contrast meets the level for text of the given
    /// size.
    pub fn passes(&self, level: WcagLevel, size: TextSize) -> bool {
        passes(self.ratio, level, size)
    }

    /// Swap foreground and background colors.
    ///
    /// The ratio stays the same.
    pub fn swapped(&self) -> Self {
        Self {
            foreground: self.background,
            background: self.foreground,
            ratio: self.ratio,
        }
    }
}

impl core::fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}:1", self.ratio)
    }
}

// ====================================================================================================================
