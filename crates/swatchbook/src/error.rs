//! Utility module with swatchbook's errors.

/// An erroneous hexadecimal color format.
///
/// Most of the engine reports malformed input through sentinels such as
/// `None` or a contrast ratio of zero. Only the strict parsers, i.e.,
/// [`Color::from_hex`](crate::Color::from_hex),
/// [`hex_to_rgb`](crate::convert::hex_to_rgb), and
/// [`try_normalize_hex`](crate::convert::try_normalize_hex), as well as the
/// [`FromStr`](core::str::FromStr) implementation for colors, report this
/// error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with the wrong number of hexadecimal digits. For
    /// example, `#12345` is missing a digit. The strict parsers accept six
    /// digits only, whereas the lenient ones also accept three.
    UnexpectedLength,

    /// A color format with the correct length but at least one character
    /// that is not a hexadecimal digit. For example, `#00GG00` has two
    /// unsuitable characters.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::UnexpectedLength => f.write_str(
                "hexadecimal color should have 3 or 6 digits after an optional `#`",
            ),
            Self::MalformedHex => {
                f.write_str("hexadecimal color should contain only the digits 0-9 and A-F")
            }
        }
    }
}

impl core::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An out-of-bounds error.
///
/// This error indicates a count or index value that is out of bounds for some
/// range. The ranges used by this crate include:
///
///   * `2..=5` for the number of [`GradientStop`](crate::gradient::GradientStop)s
///     in a [`Gradient`](crate::gradient::Gradient);
///   * `0..=n-1` for the index of a stop in a gradient with `n` stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl core::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An error decoding a share token.
///
/// A share token lists a palette's colors as hexadecimal digits separated by
/// dashes. Segments that are not valid colors are skipped. Decoding only
/// succeeds if the number of valid colors matches the expected palette size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareTokenError {
    /// The number of valid colors found in the token.
    pub count: usize,
    /// The number of colors the palette requires.
    pub expected: usize,
}

impl core::fmt::Display for ShareTokenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "share token should contain {} valid colors but has {}",
            self.expected, self.count
        ))
    }
}

impl core::error::Error for ShareTokenError {}
