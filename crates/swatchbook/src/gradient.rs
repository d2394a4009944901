//! CSS gradients with two to five color stops.
//!
//! A [`Gradient`] is linear with an angle or radial and always has between
//! [`MIN_STOPS`] and [`MAX_STOPS`] [`GradientStop`]s, each of which places a
//! color at a position between 0% and 100%. Operations that would violate
//! the stop count fail with an [`OutOfBoundsError`].
//!
//! ```
//! # use swatchbook::gradient::{Gradient, GradientKind};
//! let mut gradient = Gradient::default();
//! assert_eq!(gradient.to_css(), "linear-gradient(135deg, #6366F1 0%, #EC4899 100%)");
//!
//! gradient.set_kind(GradientKind::Radial);
//! assert_eq!(
//!     gradient.to_declaration(),
//!     "background: radial-gradient(circle, #6366F1 0%, #EC4899 100%);"
//! );
//! ```

use rand::Rng;

use crate::error::OutOfBoundsError;
use crate::{Color, Float};

/// The minimum number of stops.
pub const MIN_STOPS: usize = 2;

/// The maximum number of stops.
pub const MAX_STOPS: usize = 5;

const STOP_RANGE: core::ops::RangeInclusive<usize> = MIN_STOPS..=MAX_STOPS;

/// The shape of a gradient.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientKind {
    /// A linear gradient along the angle in whole degrees `0..360`, with 0°
    /// pointing up and angles increasing clockwise.
    Linear { angle: u16 },
    /// A circular radial gradient.
    Radial,
}

impl Default for GradientKind {
    fn default() -> Self {
        Self::Linear { angle: 135 }
    }
}

/// A color stop.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientStop {
    pub color: Color,
    /// The position in percent `0..=100`.
    pub position: u8,
}

impl GradientStop {
    /// Create a new stop. Positions beyond 100% are clamped.
    pub fn new(color: Color, position: u8) -> Self {
        Self {
            color,
            position: position.min(100),
        }
    }
}

impl core::fmt::Display for GradientStop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}%", self.color, self.position)
    }
}

/// Space `count` stops evenly from 0% to 100%.
fn even_position(index: usize, count: usize) -> u8 {
    if count < 2 {
        return 0;
    }
    (index as Float * 100.0 / (count - 1) as Float).round() as u8
}

/// A random opaque color.
fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::from(rng.random::<[u8; 3]>())
}

// ====================================================================================================================

/// A CSS gradient.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<GradientStop>,
}

impl Default for Gradient {
    /// Create the indigo to pink linear gradient at 135°.
    fn default() -> Self {
        Self {
            kind: GradientKind::default(),
            stops: vec![
                GradientStop::new(Color::new(0x63, 0x66, 0xf1), 0),
                GradientStop::new(Color::new(0xec, 0x48, 0x99), 100),
            ],
        }
    }
}

impl Gradient {
    /// Create a new gradient with the given stops.
    pub fn new(kind: GradientKind, stops: Vec<GradientStop>) -> Result<Self, OutOfBoundsError> {
        if !STOP_RANGE.contains(&stops.len()) {
            return Err(OutOfBoundsError::new(stops.len(), STOP_RANGE));
        }

        Ok(Self {
            kind: Self::normalize_kind(kind),
            stops,
        })
    }

    /// Create a new linear gradient at 135° with the colors spaced evenly.
    ///
    /// ```
    /// # use swatchbook::gradient::Gradient;
    /// # use swatchbook::Color;
    /// # use swatchbook::error::OutOfBoundsError;
    /// # fn main() -> Result<(), OutOfBoundsError> {
    /// let colors = [Color::BLACK, Color::new(255, 0, 0), Color::WHITE];
    /// let gradient = Gradient::from_colors(&colors)?;
    /// assert_eq!(
    ///     gradient.to_css(),
    ///     "linear-gradient(135deg, #000000 0%, #FF0000 50%, #FFFFFF 100%)"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_colors(colors: &[Color]) -> Result<Self, OutOfBoundsError> {
        let mut gradient = Self::default();
        gradient.set_colors(colors)?;
        Ok(gradient)
    }

    /// Create a random linear gradient with two or three evenly spaced stops
    /// and an angle in whole degrees.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let count = rng.random_range(2..=3);
        let stops = (0..count)
            .map(|index| GradientStop::new(random_color(rng), even_position(index, count)))
            .collect();
        let angle = rng.random_range(0..360);

        Self {
            kind: GradientKind::Linear { angle },
            stops,
        }
    }

    fn normalize_kind(kind: GradientKind) -> GradientKind {
        match kind {
            GradientKind::Linear { angle } => GradientKind::Linear { angle: angle % 360 },
            GradientKind::Radial => GradientKind::Radial,
        }
    }

    /// Get the kind.
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Get the stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Update the kind. Linear angles wrap around at 360°.
    pub fn set_kind(&mut self, kind: GradientKind) {
        self.kind = Self::normalize_kind(kind);
    }

    /// Replace all stops with the colors spaced evenly.
    ///
    /// The kind stays the same.
    pub fn set_colors(&mut self, colors: &[Color]) -> Result<(), OutOfBoundsError> {
        if !STOP_RANGE.contains(&colors.len()) {
            return Err(OutOfBoundsError::new(colors.len(), STOP_RANGE));
        }

        self.stops = colors
            .iter()
            .enumerate()
            .map(|(index, color)| GradientStop::new(*color, even_position(index, colors.len())))
            .collect();
        Ok(())
    }

    /// Add a stop with a random color.
    ///
    /// The new stop's position is halfway between the first and last stops,
    /// rounded up. Stops are then sorted by position, with the new stop
    /// following existing stops at the same position. This method fails if
    /// the gradient already has the maximum number of stops.
    pub fn add_stop<R: Rng>(&mut self, rng: &mut R) -> Result<(), OutOfBoundsError> {
        if MAX_STOPS <= self.stops.len() {
            return Err(OutOfBoundsError::new(self.stops.len() + 1, STOP_RANGE));
        }

        let first = self.stops.first().map_or(0, |stop| stop.position);
        let last = self.stops.last().map_or(100, |stop| stop.position);
        let position = (u16::from(first) + u16::from(last)).div_ceil(2) as u8;

        self.stops.push(GradientStop::new(random_color(rng), position));
        self.stops.sort_by_key(|stop| stop.position);
        Ok(())
    }

    /// Remove the stop at the given index.
    ///
    /// This method fails if the index is out of bounds or the gradient
    /// already has the minimum number of stops.
    pub fn remove_stop(&mut self, index: usize) -> Result<GradientStop, OutOfBoundsError> {
        self.check_index(index)?;
        if self.stops.len() <= MIN_STOPS {
            return Err(OutOfBoundsError::new(self.stops.len() - 1, STOP_RANGE));
        }

        Ok(self.stops.remove(index))
    }

    /// Update the color of the stop at the given index.
    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), OutOfBoundsError> {
        self.check_index(index)?;
        self.stops[index].color = color;
        Ok(())
    }

    /// Update the position of the stop at the given index.
    ///
    /// Positions beyond 100% are clamped. Stops are not re-sorted, so that
    /// dragging a stop past its neighbors does not change which stop is
    /// being dragged.
    pub fn set_position(&mut self, index: usize, position: u8) -> Result<(), OutOfBoundsError> {
        self.check_index(index)?;
        self.stops[index].position = position.min(100);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), OutOfBoundsError> {
        if index < self.stops.len() {
            Ok(())
        } else {
            Err(OutOfBoundsError::new(index, 0..=self.stops.len() - 1))
        }
    }

    /// Render this gradient as a CSS image value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Render this gradient as a CSS `background` declaration.
    pub fn to_declaration(&self) -> String {
        format!("background: {};", self)
    }
}

impl core::fmt::Display for Gradient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            GradientKind::Linear { angle } => write!(f, "linear-gradient({}deg", angle)?,
            GradientKind::Radial => f.write_str("radial-gradient(circle")?,
        }

        for stop in &self.stops {
            write!(f, ", {}", stop)?;
        }

        f.write_str(")")
    }
}

// ====================================================================================================================

/// A curated gradient.
#[derive(Debug)]
pub struct GradientPreset {
    pub name: &'static str,
    pub colors: &'static [Color],
}

impl GradientPreset {
    /// Turn this preset into a linear gradient at 135°.
    pub fn to_gradient(&self) -> Result<Gradient, OutOfBoundsError> {
        Gradient::from_colors(self.colors)
    }
}

/// A category of curated gradients.
#[derive(Debug)]
pub struct PresetCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub gradients: &'static [GradientPreset],
}

macro_rules! preset {
    ($name:literal, [$($color:literal),+ $(,)?]) => {
        GradientPreset {
            name: $name,
            colors: &[$(Color::from_u32($color)),+],
        }
    };
}

/// The curated gradients, by category.
pub const PRESETS: &[PresetCategory] = &[
    PresetCategory {
        id: "sunset",
        name: "🌅 Sunset",
        gradients: &[
            preset!("Sunset Blaze", [0xFF512F, 0xF09819]),
            preset!("Golden Hour", [0xF37335, 0xFDC830]),
            preset!("Burning Orange", [0xFF416C, 0xFF4B2B]),
            preset!("Desert Dusk", [0xFFB347, 0xFFCC33]),
            preset!("Coral Sunset", [0xFF9966, 0xFF5E62]),
            preset!("Mango Tango", [0xFFE259, 0xFFA751]),
        ],
    },
    PresetCategory {
        id: "ocean",
        name: "🌊 Ocean",
        gradients: &[
            preset!("Deep Sea", [0x2193B0, 0x6DD5ED]),
            preset!("Pacific Dream", [0x0093E9, 0x80D0C7]),
            preset!("Aqua Marine", [0x1A2980, 0x26D0CE]),
            preset!("Sea Breeze", [0x00C6FF, 0x0072FF]),
            preset!("Tidal Wave", [0x667DB6, 0x0082C8, 0x0082C8, 0x667DB6]),
            preset!("Ocean Blue", [0x2E3192, 0x1BFFFF]),
        ],
    },
    PresetCategory {
        id: "forest",
        name: "🌲 Forest",
        gradients: &[
            preset!("Forest Mist", [0x11998E, 0x38EF7D]),
            preset!("Emerald Lake", [0x1D976C, 0x93F9B9]),
            preset!("Deep Forest", [0x0F2027, 0x203A43, 0x2C5364]),
            preset!("Pine Green", [0x134E5E, 0x71B280]),
            preset!("Moss", [0x56AB2F, 0xA8E063]),
            preset!("Jungle", [0x5A3F37, 0x2C7744]),
        ],
    },
    PresetCategory {
        id: "purple",
        name: "💜 Purple",
        gradients: &[
            preset!("Purple Haze", [0x7303C0, 0xEC38BC, 0xFDEFF9]),
            preset!("Lavender", [0xC471F5, 0xFA71CD]),
            preset!("Violet Dream", [0x4776E6, 0x8E54E9]),
            preset!("Royal Purple", [0x141E30, 0x243B55]),
            preset!("Ultra Violet", [0x654EA3, 0xEAAFC8]),
            preset!("Mystic", [0x757F9A, 0xD7DDE8]),
        ],
    },
    PresetCategory {
        id: "fire",
        name: "🔥 Fire",
        gradients: &[
            preset!("Fire Blaze", [0xF12711, 0xF5AF19]),
            preset!("Cherry", [0xEB3349, 0xF45C43]),
            preset!("Hot Flame", [0xF7971E, 0xFFD200]),
            preset!("Lava", [0xFF0000, 0xFDCF58]),
            preset!("Ember", [0xFF512F, 0xDD2476]),
            preset!("Phoenix", [0xF83600, 0xF9D423]),
        ],
    },
    PresetCategory {
        id: "night",
        name: "🌙 Night",
        gradients: &[
            preset!("Midnight", [0x0F2027, 0x203A43, 0x2C5364]),
            preset!("Night Sky", [0x141E30, 0x243B55]),
            preset!("Starry Night", [0x000428, 0x004E92]),
            preset!("Dark Ocean", [0x373B44, 0x4286F4]),
            preset!("Eclipse", [0x1F1C2C, 0x928DAB]),
            preset!("Cosmic", [0x0F0C29, 0x302B63, 0x24243E]),
        ],
    },
];

/// Get an iterator over all curated gradients across categories.
pub fn all_presets() -> impl Iterator<Item = &'static GradientPreset> {
    PRESETS.iter().flat_map(|category| category.gradients.iter())
}

// ====================================================================================================================
