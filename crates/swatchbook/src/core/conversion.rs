use crate::Float;

/// Convert a floating point channel value to an unsigned byte.
///
/// The value is rounded to the nearest integer and clamped to `0..=255`.
/// Not-a-number becomes zero.
#[inline]
pub(crate) fn to_channel(value: Float) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 255.0) as u8
    }
}

/// Convert 24-bit RGB coordinates to unrounded HSL coordinates.
///
/// The hue is in degrees `0.0..360.0`, saturation and lightness are
/// percentages `0.0..=100.0`. Achromatic colors, i.e., colors with three
/// equal coordinates, have zero hue and zero saturation.
pub(crate) fn rgb_to_hsl(coordinates: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = coordinates.map(|c| c as Float / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness * 100.0];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Red is tested first, so ties between red and another maximal channel
    // resolve to red.
    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [hue * 60.0, saturation * 100.0, lightness * 100.0]
}

/// Round HSL coordinates to whole degrees and percent.
///
/// A hue that rounds up to 360° wraps around to 0°.
pub(crate) fn round_hsl(coordinates: &[Float; 3]) -> (u16, u8, u8) {
    let [h, s, l] = *coordinates;
    let hue = (h.round() as u16) % 360;
    let saturation = s.round().clamp(0.0, 100.0) as u8;
    let lightness = l.round().clamp(0.0, 100.0) as u8;
    (hue, saturation, lightness)
}

/// Convert HSL coordinates to 24-bit RGB coordinates.
///
/// This function implements the alternative algorithm from CSS Color 4,
/// which computes each channel directly from `k = (n + h/30) mod 12` for `n`
/// equal to 0, 8, and 4. The hue may be any finite number of degrees;
/// saturation and lightness are clamped to `0..=100`.
pub(crate) fn hsl_to_rgb(hue: Float, saturation: Float, lightness: Float) -> [u8; 3] {
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);

    let channel = |n: Float| {
        let k = (n + hue / 30.0).rem_euclid(12.0);
        let t = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        to_channel(255.0 * (l - a * t))
    };

    [channel(0.0), channel(8.0), channel(4.0)]
}

/// Convert 24-bit RGB coordinates to CMYK percentages.
///
/// Pure black is special-cased as `[0, 0, 0, 100]` since the general formula
/// would divide by zero.
pub(crate) fn rgb_to_cmyk(coordinates: &[u8; 3]) -> [u8; 4] {
    let [r, g, b] = coordinates.map(|c| c as Float / 255.0);
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return [0, 0, 0, 100];
    }

    let percent = |value: Float| (value * 100.0).round().clamp(0.0, 100.0) as u8;
    let white = 1.0 - k;

    [
        percent((white - r) / white),
        percent((white - g) / white),
        percent((white - b) / white),
        percent(k),
    ]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl, round_hsl, to_channel};
    use crate::assert_close_enough;
    use crate::Float;

    #[test]
    fn test_to_channel() {
        assert_eq!(to_channel(-12.0), 0);
        assert_eq!(to_channel(127.5), 128);
        assert_eq!(to_channel(254.4), 254);
        assert_eq!(to_channel(300.0), 255);
        assert_eq!(to_channel(Float::NAN), 0);
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(round_hsl(&rgb_to_hsl(&[255, 0, 0])), (0, 100, 50));
        assert_eq!(round_hsl(&rgb_to_hsl(&[0, 255, 0])), (120, 100, 50));
        assert_eq!(round_hsl(&rgb_to_hsl(&[0, 0, 255])), (240, 100, 50));
        assert_eq!(round_hsl(&rgb_to_hsl(&[255, 255, 0])), (60, 100, 50));
        assert_eq!(round_hsl(&rgb_to_hsl(&[128, 128, 128])), (0, 0, 50));
        assert_eq!(round_hsl(&rgb_to_hsl(&[78, 205, 196])), (176, 56, 55));

        // Red is maximal and blue exceeds green, so the hue wraps around.
        let [h, _, _] = rgb_to_hsl(&[255, 0, 128]);
        assert!((329.0..331.0).contains(&h), "hue {} should be near 330", h);

        // Achromatic colors have zero saturation, never not-a-number.
        for level in [0_u8, 1, 64, 127, 200, 255] {
            let [h, s, _] = rgb_to_hsl(&[level, level, level]);
            assert_close_enough!(h, 0.0);
            assert_close_enough!(s, 0.0);
        }
    }

    #[test]
    fn test_round_hsl_wraps_hue() {
        assert_eq!(round_hsl(&[359.7, 50.2, 49.5]), (0, 50, 50));
        assert_eq!(round_hsl(&[359.4, 0.0, 100.0]), (359, 0, 100));
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, 75.0), [255, 128, 128]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), [128, 128, 128]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), [255, 255, 255]);

        // Hues outside of one rotation, including negative ones, wrap around.
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), hsl_to_rgb(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), hsl_to_rgb(240.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(480.0, 100.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));

        // Out-of-range saturation and lightness are clamped.
        assert_eq!(hsl_to_rgb(0.0, 250.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, -20.0), [0, 0, 0]);
    }

    #[test]
    fn test_exact_round_trip() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(51) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let [h, s, l] = rgb_to_hsl(&rgb);
                    let back = hsl_to_rgb(h, s, l);
                    for (c1, c2) in rgb.iter().zip(back.iter()) {
                        assert!(
                            c1.abs_diff(*c2) <= 1,
                            "{:?} round-trips to {:?}",
                            rgb,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_cmyk() {
        assert_eq!(rgb_to_cmyk(&[0, 0, 0]), [0, 0, 0, 100]);
        assert_eq!(rgb_to_cmyk(&[255, 255, 255]), [0, 0, 0, 0]);
        assert_eq!(rgb_to_cmyk(&[255, 0, 0]), [0, 100, 100, 0]);
        assert_eq!(rgb_to_cmyk(&[0, 128, 255]), [100, 50, 0, 0]);
        assert_eq!(rgb_to_cmyk(&[128, 128, 128]), [0, 0, 0, 50]);
    }
}
