use crate::Float;

/// The WCAG 2.x coefficients for computing relative luminance from linear
/// sRGB coordinates.
const WCAG_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The BT.601 coefficients for the quick luma estimate used to pick overlay
/// text colors.
const OVERLAY_LUMA: &[Float; 3] = &[0.299, 0.587, 0.114];

/// The threshold below which WCAG 2.x linearizes sRGB with a straight line.
///
/// WCAG 2.x prints 0.03928, not the 0.04045 of IEC 61966-2-1.
const LINEAR_THRESHOLD: Float = 0.03928;

/// Convert a gamma-encoded sRGB coordinate in unit range to linear light.
#[inline]
fn linearize(value: Float) -> Float {
    if value <= LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG 2.x relative luminance of the 24-bit color.
///
/// The result is in unit range, with black at 0 and white at 1.
pub(crate) fn to_relative_luminance(coordinates: &[u8; 3]) -> Float {
    let [r, g, b] = coordinates.map(|c| linearize(c as Float / 255.0));
    let [c1, c2, c3] = *WCAG_LUMINANCE;

    c1.mul_add(r, c2.mul_add(g, c3 * b))
}

/// Compute the WCAG 2.x contrast ratio for the two relative luminance values.
///
/// The arguments are interchangeable. The result ranges from 1 for identical
/// luminance to 21 for black against white.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 >= luminance2 {
        (luminance1, luminance2)
    } else {
        (luminance2, luminance1)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the quick luma estimate for picking overlay text.
///
/// This is *not* relative luminance. It weighs the gamma-encoded coordinates
/// directly, which is good enough for choosing between black and white text
/// on a swatch but unsuitable for accessibility reporting.
pub(crate) fn to_overlay_luma(coordinates: &[u8; 3]) -> Float {
    let [r, g, b] = coordinates.map(|c| c as Float);
    let [c1, c2, c3] = *OVERLAY_LUMA;

    c1.mul_add(r, c2.mul_add(g, c3 * b)) / 255.0
}

#[cfg(test)]
mod test {
    use super::{to_contrast_ratio, to_overlay_luma, to_relative_luminance};
    use crate::assert_close_enough;

    #[test]
    fn test_relative_luminance() {
        assert_close_enough!(to_relative_luminance(&[0, 0, 0]), 0.0);
        assert_close_enough!(to_relative_luminance(&[255, 255, 255]), 1.0);
        assert_close_enough!(to_relative_luminance(&[255, 0, 0]), 0.2126);
        assert_close_enough!(to_relative_luminance(&[0, 255, 0]), 0.7152);
        assert_close_enough!(to_relative_luminance(&[0, 0, 255]), 0.0722);

        // 128 sits above the linear segment.
        let gray = to_relative_luminance(&[128, 128, 128]);
        assert!((0.21..0.22).contains(&gray), "gray luminance {}", gray);

        // 10 sits on the linear segment.
        assert_close_enough!(to_relative_luminance(&[10, 10, 10]), 10.0 / 255.0 / 12.92);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_eq!(to_contrast_ratio(1.0, 0.0), 21.0);
        assert_eq!(to_contrast_ratio(0.0, 1.0), 21.0);
        assert_eq!(to_contrast_ratio(0.4, 0.4), 1.0);
    }

    #[test]
    fn test_overlay_luma() {
        assert_close_enough!(to_overlay_luma(&[255, 255, 255]), 1.0);
        assert_close_enough!(to_overlay_luma(&[0, 0, 0]), 0.0);
        assert_close_enough!(to_overlay_luma(&[255, 0, 0]), 0.299);
    }
}
