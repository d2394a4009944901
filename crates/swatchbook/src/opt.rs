//! Helper module with the options for generating palettes.
//!
//! This module provides the options for the palette generator and the
//! corresponding builder. The builder keeps options consistent: Saturation
//! and lightness ranges are clamped to `0..=100` and put in order, and the
//! palette size is at least one.
//!
//!
//! # Example
//!
//! ```
//! # use swatchbook::opt::GeneratorOptions;
//! let options = GeneratorOptions::builder()
//!     .hue_step(72.0)
//!     .saturation(90.0, 60.0)
//!     .size(6)
//!     .build();
//!
//! assert_eq!(options.hue_step(), 72.0);
//! assert_eq!(options.saturation(), (60.0, 90.0));
//! assert_eq!(options.size(), 6);
//! ```

use crate::Float;

/// The number of colors in a freshly generated palette.
pub const PALETTE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
struct OptionData {
    hue_step: Float,
    jitter: Float,
    saturation: (Float, Float),
    lightness: (Float, Float),
    size: usize,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            hue_step: 45.0,
            jitter: 30.0,
            saturation: (50.0, 90.0),
            lightness: (40.0, 70.0),
            size: PALETTE_SIZE,
        }
    }
}

/// Clamp both bounds to percent and order them.
fn to_percent_range(lo: Float, hi: Float) -> (Float, Float) {
    let lo = if lo.is_nan() { 0.0 } else { lo.clamp(0.0, 100.0) };
    let hi = if hi.is_nan() { 0.0 } else { hi.clamp(0.0, 100.0) };
    if lo <= hi {
        (lo, hi)
    } else {
        (hi, lo)
    }
}

/// A builder of generator options.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the hue distance in degrees between adjacent palette slots.
    pub fn hue_step(&mut self, degrees: Float) -> &mut Self {
        self.0.hue_step = if degrees.is_finite() { degrees } else { 0.0 };
        self
    }

    /// Set the maximum random deviation in degrees from a slot's hue.
    ///
    /// Negative values count as their magnitude.
    pub fn jitter(&mut self, degrees: Float) -> &mut Self {
        self.0.jitter = if degrees.is_finite() { degrees.abs() } else { 0.0 };
        self
    }

    /// Set the range for saturation in percent.
    pub fn saturation(&mut self, lo: Float, hi: Float) -> &mut Self {
        self.0.saturation = to_percent_range(lo, hi);
        self
    }

    /// Set the range for lightness in percent.
    pub fn lightness(&mut self, lo: Float, hi: Float) -> &mut Self {
        self.0.lightness = to_percent_range(lo, hi);
        self
    }

    /// Set the number of colors in a freshly generated palette.
    ///
    /// A size of zero is bumped to one.
    pub fn size(&mut self, size: usize) -> &mut Self {
        self.0.size = size.max(1);
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> GeneratorOptions {
        GeneratorOptions(self.0.clone())
    }
}

/// An options object for the palette generator.
///
/// The defaults space palette slots 45° apart, jitter each hue by up to 30°
/// either way, and draw saturation from 50–90% and lightness from 40–70%,
/// which avoids both muddy and washed out colors.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorOptions(OptionData);

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions(OptionData::new())
    }
}

impl GeneratorOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the hue step in degrees.
    pub fn hue_step(&self) -> Float {
        self.0.hue_step
    }

    /// Get the hue jitter in degrees.
    pub fn jitter(&self) -> Float {
        self.0.jitter
    }

    /// Get the saturation range in percent.
    pub fn saturation(&self) -> (Float, Float) {
        self.0.saturation
    }

    /// Get the lightness range in percent.
    pub fn lightness(&self) -> (Float, Float) {
        self.0.lightness
    }

    /// Get the palette size.
    pub fn size(&self) -> usize {
        self.0.size
    }
}
