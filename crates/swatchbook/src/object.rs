use crate::core::{
    format_hashed, hsl_to_rgb, parse_hashed, rgb_to_cmyk, rgb_to_hsl, round_hsl, to_channel,
    to_contrast_ratio, to_name, to_overlay_luma, to_relative_luminance,
};
use crate::error::ColorFormatError;
use crate::vision::VisionDeficiency;
use crate::Float;

/// A color's red, green, and blue coordinates.
///
/// Its display is the CSS functional notation `rgb(r, g, b)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color's hue, saturation, and lightness, rounded to whole units.
///
/// The hue is in degrees `0..360`, saturation and lightness are percentages
/// `0..=100`. Its display is the CSS functional notation `hsl(h, s%, l%)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl core::fmt::Display for Hsl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// A color's cyan, magenta, yellow, and key (black) percentages.
///
/// Its display is `cmyk(c%, m%, y%, k%)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl core::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

// ====================================================================================================================

/// A 24-bit sRGB color.
///
/// Colors are the engine's canonical value. They are small, `Copy`, and
/// compare by their coordinates. Their display is the canonical hashed
/// hexadecimal notation, i.e., `#` followed by six uppercase hexadecimal
/// digits, which is always exactly seven characters long. All other
/// representations, i.e., [`Rgb`], [`Hsl`], and [`Cmyk`], are derived on
/// demand.
///
/// # Parsing
///
/// There are two ways of parsing colors. [`Color::from_hex`] is strict and
/// only accepts six hexadecimal digits after an optional `#`. In contrast,
/// `Color as FromStr` also accepts three-digit shorthand, which expands each
/// digit by duplication. Both accept either case.
///
/// ```
/// # use swatchbook::Color;
/// # use swatchbook::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let coral: Color = "#f80".parse()?;
/// assert_eq!(coral, Color::from_hex("FF8800")?);
/// assert_eq!(coral.to_string(), "#FF8800");
/// assert!(Color::from_hex("#f80").is_err());
/// # Ok(())
/// # }
/// ```
///
/// # Two Luminances
///
/// [`Color::relative_luminance`] and [`Color::contrast_ratio`] implement the
/// WCAG 2.x formulas and are suitable for accessibility reporting.
/// [`Color::contrast_text`] uses a quick luma estimate on gamma-encoded
/// coordinates instead and only picks black or white text for overlays. The
/// two may disagree for mid-tones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color([u8; 3]);

impl Color {
    /// Black.
    pub const BLACK: Color = Color([0, 0, 0]);

    /// White.
    pub const WHITE: Color = Color([255, 255, 255]);

    /// Instantiate a new color from its red, green, and blue coordinates.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::new(255, 0, 0).to_string(), "#FF0000");
    /// ```
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Instantiate a new color from a packed `0xRRGGBB` value.
    ///
    /// The most significant byte is ignored. This constructor is `const`, so
    /// that color tables can be written as hexadecimal literals.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::from_u32(0xFF6B6B), Color::new(255, 107, 107));
    /// assert_eq!(Color::from_u32(0xAA00_00FF), Color::new(0, 0, 255));
    /// ```
    pub const fn from_u32(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self([r, g, b])
    }

    /// Parse a color from exactly six hexadecimal digits with an optional
    /// leading `#`.
    ///
    /// Letters may be in either case. Three-digit shorthand is rejected with
    /// [`ColorFormatError::UnexpectedLength`]; use `str::parse` to accept it.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// # use swatchbook::error::ColorFormatError;
    /// assert_eq!(Color::from_hex("#ff0000"), Ok(Color::new(255, 0, 0)));
    /// assert_eq!(Color::from_hex("ff0000"), Ok(Color::new(255, 0, 0)));
    /// assert_eq!(Color::from_hex("#f00"), Err(ColorFormatError::UnexpectedLength));
    /// assert_eq!(Color::from_hex("#ff000g"), Err(ColorFormatError::MalformedHex));
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        parse_hashed(s, false).map(Self)
    }

    /// Create a new color from floating point red, green, and blue
    /// coordinates.
    ///
    /// Each coordinate is rounded to the nearest integer and clamped to
    /// `0..=255`, with not-a-number becoming zero. This never fails, since
    /// slider arithmetic routinely overshoots a little.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::from_rgb_clamped(-4.0, 127.5, 300.0), Color::new(0, 128, 255));
    /// ```
    pub fn from_rgb_clamped(r: Float, g: Float, b: Float) -> Self {
        Self([to_channel(r), to_channel(g), to_channel(b)])
    }

    /// Create a new color from hue, saturation, and lightness.
    ///
    /// The hue is in degrees and may fall outside `0..360`. Saturation and
    /// lightness are percentages and are clamped to `0..=100`. None of the
    /// coordinates need to be whole numbers.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::from_hsl(120.0, 100.0, 50.0).to_string(), "#00FF00");
    /// assert_eq!(Color::from_hsl(-120.0, 100.0, 50.0).to_string(), "#0000FF");
    /// ```
    pub fn from_hsl(h: Float, s: Float, l: Float) -> Self {
        Self(hsl_to_rgb(h, s, l))
    }

    /// Format this color in canonical hashed hexadecimal notation.
    ///
    /// This method is equivalent to `to_string()`.
    pub fn to_hex(&self) -> String {
        format_hashed(&self.0)
    }

    /// Get this color's red, green, and blue coordinates.
    pub fn rgb(&self) -> Rgb {
        let [r, g, b] = self.0;
        Rgb { r, g, b }
    }

    /// Get this color's hue, saturation, and lightness rounded to whole
    /// degrees and percent.
    ///
    /// Achromatic colors have zero hue and zero saturation. Since rounding
    /// loses information, converting the result back with
    /// [`Color::from_hsl`] may be off by a few units per coordinate; use
    /// [`Color::to_hsl_exact`] for lossless round-trips.
    ///
    /// ```
    /// # use swatchbook::{Color, Hsl};
    /// assert_eq!(Color::new(128, 128, 128).hsl(), Hsl { h: 0, s: 0, l: 50 });
    /// ```
    pub fn hsl(&self) -> Hsl {
        let (h, s, l) = round_hsl(&rgb_to_hsl(&self.0));
        Hsl { h, s, l }
    }

    /// Get this color's unrounded hue, saturation, and lightness.
    pub fn to_hsl_exact(&self) -> [Float; 3] {
        rgb_to_hsl(&self.0)
    }

    /// Get this color's cyan, magenta, yellow, and key percentages.
    pub fn cmyk(&self) -> Cmyk {
        let [c, m, y, k] = rgb_to_cmyk(&self.0);
        Cmyk { c, m, y, k }
    }

    /// Determine whether this color is achromatic, i.e., a gray.
    pub fn is_achromatic(&self) -> bool {
        let [r, g, b] = self.0;
        r == g && g == b
    }

    /// Compute this color's WCAG 2.x relative luminance.
    ///
    /// The result is in unit range, with black at 0 and white at 1.
    pub fn relative_luminance(&self) -> Float {
        to_relative_luminance(&self.0)
    }

    /// Compute the WCAG 2.x contrast ratio between this and the other color.
    ///
    /// The result is symmetric and ranges from 1 for colors with the same
    /// luminance to 21 for black against white.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::BLACK.contrast_ratio(&Color::WHITE), 21.0);
    /// ```
    pub fn contrast_ratio(&self, other: &Color) -> Float {
        to_contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    /// Pick black or white as the text color for an overlay on this color.
    ///
    /// This method uses a quick luma estimate and returns black if the luma
    /// exceeds one half and white otherwise.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::WHITE.contrast_text(), Color::BLACK);
    /// assert_eq!(Color::BLACK.contrast_text(), Color::WHITE);
    /// ```
    pub fn contrast_text(&self) -> Color {
        if to_overlay_luma(&self.0) > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Get a human-readable name for this color such as `Light Blue` or
    /// `Dark Gray`.
    pub fn name(&self) -> String {
        let Hsl { h, s, l } = self.hsl();
        to_name(h, s, l)
    }

    /// Compute the Euclidean distance between the red, green, and blue
    /// coordinates of this and the other color.
    pub fn distance(&self, other: &Color) -> Float {
        let [r1, g1, b1] = self.0.map(Float::from);
        let [r2, g2, b2] = other.0.map(Float::from);
        let (dr, dg, db) = (r1 - r2, g1 - g2, b1 - b2);
        dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
    }

    /// Derive a ramp of `count` progressively darker shades from this color.
    ///
    /// See [`shade`](crate::shade) for details.
    pub fn shades(&self, count: usize) -> Vec<Color> {
        crate::shade::shades_of(self, count)
    }

    /// Simulate how this color appears with the given color vision
    /// deficiency.
    pub fn simulate(&self, deficiency: VisionDeficiency) -> Color {
        deficiency.simulate(self)
    }

}

impl core::str::FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// This method accepts three or six hexadecimal digits after an optional
    /// `#`, in either case. It does not trim white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s, true).map(Self)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl AsRef<[u8; 3]> for Color {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Color {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self([value.r, value.g, value.b])
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        value.rgb()
    }
}

impl core::fmt::Display for Color {
    /// Format this color in canonical hashed hexadecimal notation.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================
