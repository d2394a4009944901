//! Export of palettes as CSS custom properties and share tokens.
//!
//! A share token lists a palette's colors as hexadecimal digits without the
//! leading `#`, separated by dashes, which keeps it URL-safe:
//!
//! ```
//! # use swatchbook::export::{decode_share_token, encode_share_token};
//! # use swatchbook::error::ShareTokenError;
//! # use swatchbook::Color;
//! # fn main() -> Result<(), ShareTokenError> {
//! let colors = [Color::new(255, 107, 107), Color::new(78, 205, 196)];
//! let token = encode_share_token(&colors);
//! assert_eq!(token, "FF6B6B-4ECDC4");
//! assert_eq!(decode_share_token(&token, 2)?, colors);
//! # Ok(())
//! # }
//! ```

use crate::error::ShareTokenError;
use crate::Color;

/// Render CSS custom properties in a `:root` rule.
///
/// Each property goes on its own line, indented by two spaces.
pub(crate) fn root_block<I: IntoIterator<Item = (String, Color)>>(properties: I) -> String {
    let mut css = String::from(":root {\n");
    for (name, color) in properties {
        css.push_str("  --");
        css.push_str(&name);
        css.push_str(": ");
        css.push_str(&color.to_hex());
        css.push_str(";\n");
    }
    css.push('}');
    css
}

/// Render the colors as CSS custom properties.
///
/// The properties are named after the prefix and numbered from one.
///
/// ```
/// # use swatchbook::export::css_variables;
/// # use swatchbook::Color;
/// let css = css_variables(&[Color::BLACK, Color::WHITE], "color");
/// assert_eq!(css, ":root {\n  --color-1: #000000;\n  --color-2: #FFFFFF;\n}");
/// ```
pub fn css_variables(colors: &[Color], prefix: &str) -> String {
    root_block(
        colors
            .iter()
            .enumerate()
            .map(|(index, color)| (format!("{}-{}", prefix, index + 1), *color)),
    )
}

/// Encode the colors as a share token.
pub fn encode_share_token(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|color| {
            let hex = color.to_hex();
            hex.trim_start_matches('#').to_string()
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Build a share link for the colors relative to the given origin.
///
/// ```
/// # use swatchbook::export::share_link;
/// # use swatchbook::Color;
/// assert_eq!(
///     share_link("https://example.com", &[Color::BLACK]),
///     "https://example.com/generator?colors=000000"
/// );
/// ```
pub fn share_link(origin: &str, colors: &[Color]) -> String {
    format!(
        "{}/generator?colors={}",
        origin.trim_end_matches('/'),
        encode_share_token(colors)
    )
}

/// Decode a share token.
///
/// This function splits the token at dashes and parses each segment as a
/// color with three or six hexadecimal digits. It skips malformed segments
/// and succeeds only if exactly `expected` colors remain.
pub fn decode_share_token(token: &str, expected: usize) -> Result<Vec<Color>, ShareTokenError> {
    let colors = token
        .split('-')
        .filter(|segment| !segment.starts_with('#'))
        .filter_map(|segment| segment.parse::<Color>().ok())
        .collect::<Vec<_>>();

    if colors.len() == expected {
        Ok(colors)
    } else {
        log::debug!(
            "share token has {} valid colors instead of {}",
            colors.len(),
            expected
        );
        Err(ShareTokenError {
            count: colors.len(),
            expected,
        })
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{css_variables, decode_share_token, encode_share_token};
    use crate::error::ShareTokenError;
    use crate::opt::PALETTE_SIZE;
    use crate::Color;

    #[test]
    fn test_css_variables() {
        assert_eq!(css_variables(&[], "color"), ":root {\n}");
        assert_eq!(
            css_variables(&[Color::new(255, 107, 107)], "brand"),
            ":root {\n  --brand-1: #FF6B6B;\n}"
        );
    }

    #[test]
    fn test_share_token() -> Result<(), ShareTokenError> {
        let colors = decode_share_token("ff6b6b-4ECDC4-45b7d1-96CEB4-ffeaa7", PALETTE_SIZE)?;
        assert_eq!(
            encode_share_token(&colors),
            "FF6B6B-4ECDC4-45B7D1-96CEB4-FFEAA7"
        );

        // Shorthand is expanded, malformed segments are skipped.
        let colors = decode_share_token("abc-zzzzzz-000000-#ffffff-12345-fff-111-222", 5)?;
        assert_eq!(
            encode_share_token(&colors),
            "AABBCC-000000-FFFFFF-111111-222222"
        );

        assert_eq!(
            decode_share_token("FF6B6B-4ECDC4", PALETTE_SIZE),
            Err(ShareTokenError {
                count: 2,
                expected: 5
            })
        );
        assert_eq!(
            decode_share_token("", PALETTE_SIZE),
            Err(ShareTokenError {
                count: 0,
                expected: 5
            })
        );
        Ok(())
    }
}
