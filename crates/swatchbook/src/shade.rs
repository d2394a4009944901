//! Shade ramps of progressively darker colors.
//!
//! A ramp keeps the base color's hue and saturation and spaces lightness
//! evenly between white and black, exclusive of both. For `count` shades, the
//! lightness step is `100 / (count + 1)` and shade `i`, counting from one,
//! has lightness `100 - i·step`. The base color's own lightness does not
//! matter. Hence the ramp for pure red with three shades has lightness 75%,
//! 50%, and 25%:
//!
//! ```
//! # use swatchbook::shade::generate_shades;
//! assert_eq!(generate_shades("#FF0000", 3), vec!["#FF8080", "#FF0000", "#800000"]);
//! ```

use crate::export::root_block;
use crate::{Color, Float, Hsl};

/// The default number of shades.
pub const DEFAULT_SHADE_COUNT: usize = 9;

/// Derive `count` shades from the given color.
pub(crate) fn shades_of(color: &Color, count: usize) -> Vec<Color> {
    let Hsl { h, s, .. } = color.hsl();
    let step = 100.0 / (count as Float + 1.0);

    (1..=count)
        .map(|index| {
            let lightness = step.mul_add(-(index as Float), 100.0);
            Color::from_hsl(Float::from(h), Float::from(s), lightness)
        })
        .collect()
}

/// Generate a ramp of `count` shades for the hexadecimal color.
///
/// If the color is malformed, this function returns a vector with just the
/// color. If the count is zero, it returns an empty vector.
pub fn generate_shades(hex: &str, count: usize) -> Vec<String> {
    match Color::from_hex(hex) {
        Ok(color) => shades_of(&color, count)
            .iter()
            .map(Color::to_hex)
            .collect(),
        Err(_) => vec![hex.to_string()],
    }
}

/// A base color with its shades.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadeRamp {
    pub base_color: Color,
    pub shades: Vec<Color>,
}

impl ShadeRamp {
    /// Create a new ramp with the given number of shades.
    pub fn new(base_color: Color, count: usize) -> Self {
        Self {
            base_color,
            shades: shades_of(&base_color, count),
        }
    }

    /// Render the shades as CSS custom properties.
    ///
    /// The properties are named `--shade-100`, `--shade-200`, and so on.
    ///
    /// ```
    /// # use swatchbook::shade::ShadeRamp;
    /// # use swatchbook::Color;
    /// let ramp = ShadeRamp::new(Color::new(255, 0, 0), 1);
    /// assert_eq!(ramp.to_css(), ":root {\n  --shade-100: #FF0000;\n}");
    /// ```
    pub fn to_css(&self) -> String {
        root_block(
            self.shades
                .iter()
                .enumerate()
                .map(|(index, shade)| (format!("shade-{}", (index + 1) * 100), *shade)),
        )
    }

    /// Render the shades as a comma-separated list.
    pub fn to_list(&self) -> String {
        self.shades
            .iter()
            .map(Color::to_hex)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render this ramp as pretty-printed JSON with the keys `baseColor` and
    /// `shades`. <i class=rust-only>Rust only!</i>
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ShadeRamp {
    fn default() -> Self {
        Self::new(Color::default(), DEFAULT_SHADE_COUNT)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{generate_shades, ShadeRamp, DEFAULT_SHADE_COUNT};
    use crate::Color;

    #[test]
    fn test_generate_shades() {
        assert_eq!(generate_shades("#FF0000", 1), vec!["#FF0000"]);
        assert_eq!(generate_shades("#ff0000", 0), Vec::<String>::new());
        assert_eq!(generate_shades("not a color", 5), vec!["not a color"]);
        assert_eq!(generate_shades("#F00", 5), vec!["#F00"]);

        // Grays stay gray.
        assert_eq!(
            generate_shades("#808080", 4),
            vec!["#CCCCCC", "#999999", "#666666", "#333333"]
        );
    }

    #[test]
    fn test_decreasing_lightness() {
        for base in [
            Color::new(255, 107, 107),
            Color::new(78, 205, 196),
            Color::new(45, 52, 54),
            Color::WHITE,
        ] {
            let ramp = ShadeRamp::new(base, DEFAULT_SHADE_COUNT);
            assert_eq!(ramp.shades.len(), DEFAULT_SHADE_COUNT);
            for (c1, c2) in ramp.shades.iter().zip(ramp.shades.iter().skip(1)) {
                let [_, _, l1] = c1.to_hsl_exact();
                let [_, _, l2] = c2.to_hsl_exact();
                assert!(l1 > l2, "{} should be lighter than {}", c1, c2);
            }
        }
    }

    #[test]
    fn test_export() {
        let ramp = ShadeRamp::new(Color::new(255, 0, 0), 3);
        assert_eq!(ramp.to_list(), "#FF8080, #FF0000, #800000");
        assert_eq!(
            ramp.to_css(),
            ":root {\n  --shade-100: #FF8080;\n  --shade-200: #FF0000;\n  --shade-300: #800000;\n}"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() -> Result<(), serde_json::Error> {
        let ramp = ShadeRamp::new(Color::new(255, 0, 0), 2);
        let json = ramp.to_json()?;
        assert!(json.starts_with("{\n  \"baseColor\": \"#FF0000\""), "{}", json);

        let back: ShadeRamp = serde_json::from_str(&json)?;
        assert_eq!(back, ramp);
        Ok(())
    }
}
