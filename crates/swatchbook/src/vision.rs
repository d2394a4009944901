//! Simulation of color vision deficiencies.
//!
//! Each [`VisionDeficiency`] maps to a 3×3 matrix in row-major order that is
//! applied directly to gamma-encoded sRGB coordinates. That is a coarse
//! approximation, since physiologically grounded simulation operates on
//! linear light in an LMS space. But it suffices for judging whether a
//! palette's colors remain distinguishable. Every matrix row sums to one, so
//! grays are fixed points for all deficiencies.
//!
//! ```
//! # use swatchbook::vision::VisionDeficiency;
//! # use swatchbook::Color;
//! let red = Color::new(255, 0, 0);
//! assert_eq!(red.simulate(VisionDeficiency::Achromatopsia).to_string(), "#4C4C4C");
//! assert_eq!(red.simulate(VisionDeficiency::Normal), red);
//! ```

use crate::core::to_channel;
use crate::{Color, Float};

/// A color vision deficiency.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisionDeficiency {
    /// Trichromatic vision, i.e., no deficiency.
    #[default]
    Normal,
    /// Red-blind.
    Protanopia,
    /// Red-weak.
    Protanomaly,
    /// Green-blind.
    Deuteranopia,
    /// Green-weak.
    Deuteranomaly,
    /// Blue-blind.
    Tritanopia,
    /// Blue-weak.
    Tritanomaly,
    /// Complete color blindness.
    Achromatopsia,
}

const ALL: [VisionDeficiency; 8] = [
    VisionDeficiency::Normal,
    VisionDeficiency::Protanopia,
    VisionDeficiency::Protanomaly,
    VisionDeficiency::Deuteranopia,
    VisionDeficiency::Deuteranomaly,
    VisionDeficiency::Tritanopia,
    VisionDeficiency::Tritanomaly,
    VisionDeficiency::Achromatopsia,
];

impl VisionDeficiency {
    /// Get an iterator over all vision deficiencies, starting with normal
    /// vision.
    pub fn all() -> VisionDeficiencyIterator {
        VisionDeficiencyIterator::new()
    }

    /// Get this deficiency's lowercase identifier, e.g., `protanopia`.
    pub const fn id(&self) -> &'static str {
        match *self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Protanomaly => "protanomaly",
            Self::Deuteranopia => "deuteranopia",
            Self::Deuteranomaly => "deuteranomaly",
            Self::Tritanopia => "tritanopia",
            Self::Tritanomaly => "tritanomaly",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Get this deficiency's display name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Normal => "Normal Vision",
            Self::Protanopia => "Protanopia",
            Self::Protanomaly => "Protanomaly",
            Self::Deuteranopia => "Deuteranopia",
            Self::Deuteranomaly => "Deuteranomaly",
            Self::Tritanopia => "Tritanopia",
            Self::Tritanomaly => "Tritanomaly",
            Self::Achromatopsia => "Achromatopsia",
        }
    }

    /// Get a short description including prevalence.
    pub const fn description(&self) -> &'static str {
        match *self {
            Self::Normal => "Standard color vision (trichromacy)",
            Self::Protanopia => "Red-blind (~1% of males)",
            Self::Protanomaly => "Red-weak (~1% of males)",
            Self::Deuteranopia => "Green-blind (~1% of males)",
            Self::Deuteranomaly => "Green-weak (~5% of males)",
            Self::Tritanopia => "Blue-blind (rare)",
            Self::Tritanomaly => "Blue-weak (rare)",
            Self::Achromatopsia => "Complete color blindness (very rare)",
        }
    }

    /// Get the simulation matrix in row-major order.
    pub const fn matrix(&self) -> [Float; 9] {
        match *self {
            Self::Normal => [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            Self::Protanopia => [0.567, 0.433, 0.0, 0.558, 0.442, 0.0, 0.0, 0.242, 0.758],
            Self::Protanomaly => [0.817, 0.183, 0.0, 0.333, 0.667, 0.0, 0.0, 0.125, 0.875],
            Self::Deuteranopia => [0.625, 0.375, 0.0, 0.7, 0.3, 0.0, 0.0, 0.3, 0.7],
            Self::Deuteranomaly => [0.8, 0.2, 0.0, 0.258, 0.742, 0.0, 0.0, 0.142, 0.858],
            Self::Tritanopia => [0.95, 0.05, 0.0, 0.0, 0.433, 0.567, 0.0, 0.475, 0.525],
            Self::Tritanomaly => [0.967, 0.033, 0.0, 0.0, 0.733, 0.267, 0.0, 0.183, 0.817],
            Self::Achromatopsia => [
                0.299, 0.587, 0.114, 0.299, 0.587, 0.114, 0.299, 0.587, 0.114,
            ],
        }
    }

    /// Simulate how the color appears with this deficiency.
    pub fn simulate(&self, color: &Color) -> Color {
        simulate(color, &self.matrix())
    }
}

/// Apply the simulation matrix to the color.
///
/// The resulting coordinates are rounded and clamped to `0..=255`.
pub fn simulate(color: &Color, matrix: &[Float; 9]) -> Color {
    let [r, g, b] = <[u8; 3]>::from(*color).map(Float::from);
    let [m0, m1, m2, m3, m4, m5, m6, m7, m8] = *matrix;

    Color::new(
        to_channel(m0.mul_add(r, m1.mul_add(g, m2 * b))),
        to_channel(m3.mul_add(r, m4.mul_add(g, m5 * b))),
        to_channel(m6.mul_add(r, m7.mul_add(g, m8 * b))),
    )
}

/// Simulate the deficiency for a hexadecimal color.
///
/// This function returns `None` if the color is malformed.
pub fn simulate_hex(hex: &str, deficiency: VisionDeficiency) -> Option<String> {
    Color::from_hex(hex)
        .ok()
        .map(|color| deficiency.simulate(&color).to_hex())
}

/// Simulate the deficiency for every color of a palette.
pub fn simulate_palette(colors: &[Color], deficiency: VisionDeficiency) -> Vec<Color> {
    let matrix = deficiency.matrix();
    colors.iter().map(|color| simulate(color, &matrix)).collect()
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over vision deficiencies.
///
/// This iterator is fused and exact.
#[derive(Debug)]
pub struct VisionDeficiencyIterator {
    index: usize,
}

impl VisionDeficiencyIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for VisionDeficiencyIterator {
    type Item = VisionDeficiency;

    fn next(&mut self) -> Option<Self::Item> {
        let item = ALL.get(self.index).copied()?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ALL.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VisionDeficiencyIterator {
    fn len(&self) -> usize {
        ALL.len() - self.index
    }
}

impl core::iter::FusedIterator for VisionDeficiencyIterator {}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{simulate_hex, simulate_palette, VisionDeficiency};
    use crate::Color;

    #[test]
    fn test_catalog() {
        let all = VisionDeficiency::all().collect::<Vec<_>>();
        assert_eq!(all.len(), 8);
        assert_eq!(VisionDeficiency::all().len(), 8);
        assert_eq!(all[0], VisionDeficiency::Normal);
        assert_eq!(all[7], VisionDeficiency::Achromatopsia);
        assert_eq!(VisionDeficiency::Deuteranomaly.description(), "Green-weak (~5% of males)");
        assert_eq!(VisionDeficiency::Normal.name(), "Normal Vision");
        assert_eq!(VisionDeficiency::Tritanopia.id(), "tritanopia");

        for deficiency in VisionDeficiency::all() {
            let m = deficiency.matrix();
            for row in m.chunks_exact(3) {
                let sum: crate::Float = row.iter().sum();
                assert!((sum - 1.0).abs() < 1e-6, "{:?} row sums to {}", deficiency, sum);
            }
        }
    }

    #[test]
    fn test_normal_is_identity() {
        for hex in ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#000000"] {
            assert_eq!(simulate_hex(hex, VisionDeficiency::Normal).as_deref(), Some(hex));
        }
    }

    #[test]
    fn test_grays_are_fixed() {
        for deficiency in VisionDeficiency::all() {
            for level in (0..=255).step_by(15) {
                let gray = Color::new(level, level, level);
                assert_eq!(deficiency.simulate(&gray), gray, "{:?}", deficiency);
            }
        }
    }

    #[test]
    fn test_simulate() {
        assert_eq!(
            simulate_hex("#FF0000", VisionDeficiency::Achromatopsia).as_deref(),
            Some("#4C4C4C")
        );
        assert_eq!(
            simulate_hex("#FF0000", VisionDeficiency::Protanopia).as_deref(),
            Some("#918E00")
        );
        assert_eq!(simulate_hex("#F00", VisionDeficiency::Protanopia), None);

        let palette = [Color::new(255, 0, 0), Color::new(0, 255, 0)];
        let simulated = simulate_palette(&palette, VisionDeficiency::Achromatopsia);
        assert_eq!(simulated, vec![Color::new(76, 76, 76), Color::new(150, 150, 150)]);
    }
}
