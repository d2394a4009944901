//! Dominant-color extraction from decoded images.
//!
//! Extraction works on raw RGBA pixels, four bytes per pixel, as produced by
//! an image decoder or canvas. Decoding and downscaling are up to the caller;
//! about 100 pixels on the longer side suffice.
//!
//! The algorithm quantizes each channel to the nearest multiple of 32, ranks
//! the resulting buckets by pixel count, and walks the ten most frequent
//! ones, skipping any bucket that is too close to an already accepted color.
//! If fewer than five colors survive, random colors fill the gap.

use std::collections::HashMap;

use rand::Rng;

use crate::opt::PALETTE_SIZE;
use crate::{Color, Float};

/// The quantization step per channel.
const BUCKET_SIZE: u16 = 32;

/// The number of most frequent buckets considered.
const CANDIDATES: usize = 10;

/// Candidates closer than this Euclidean RGB distance to an accepted color
/// are skipped.
const MIN_DISTANCE: Float = 50.0;

/// The number of candidates accepted before padding and truncation.
const MAX_ACCEPTED: usize = PALETTE_SIZE + 1;

/// Quantize a channel to the nearest multiple of the bucket size, rounding
/// half up and capping at 255.
#[inline]
fn quantize(channel: u8) -> u8 {
    let step = BUCKET_SIZE;
    let value = (u16::from(channel) + step / 2) / step * step;
    value.min(255) as u8
}

/// Count quantized colors, keeping buckets in order of first appearance.
fn histogram(rgba: &[u8]) -> Vec<(Color, usize)> {
    let mut index: HashMap<Color, usize> = HashMap::new();
    let mut buckets: Vec<(Color, usize)> = Vec::new();

    for pixel in rgba.chunks_exact(4) {
        let &[r, g, b, _] = pixel else { continue };
        let color = Color::new(quantize(r), quantize(g), quantize(b));
        match index.get(&color).and_then(|&position| buckets.get_mut(position)) {
            Some((_, count)) => *count += 1,
            None => {
                index.insert(color, buckets.len());
                buckets.push((color, 1));
            }
        }
    }

    buckets
}

/// Extract the five dominant colors from RGBA pixel data.
///
/// Alpha is ignored, as is a trailing partial pixel. Ties in frequency are
/// broken by first appearance. The result always has five colors, with
/// random colors filling in for images with too little variety.
///
/// ```
/// # use rand::{rngs::StdRng, SeedableRng};
/// # use swatchbook::extract::extract_palette;
/// # use swatchbook::Color;
/// let mut pixels = Vec::new();
/// for [r, g, b] in [[255, 0, 0], [0, 0, 255], [0, 255, 0], [0, 0, 0], [255, 255, 255]] {
///     pixels.extend_from_slice(&[r, g, b, 255]);
/// }
///
/// let colors = extract_palette(&pixels, &mut StdRng::seed_from_u64(1));
/// assert_eq!(colors[0], Color::new(255, 0, 0));
/// assert_eq!(colors[4], Color::WHITE);
/// ```
pub fn extract_palette<R: Rng>(rgba: &[u8], rng: &mut R) -> Vec<Color> {
    let mut buckets = histogram(rgba);
    buckets.sort_by(|(_, n1), (_, n2)| n2.cmp(n1));
    log::trace!(
        "quantized {} pixels into {} buckets",
        rgba.len() / 4,
        buckets.len()
    );

    let mut colors: Vec<Color> = Vec::with_capacity(MAX_ACCEPTED);
    for (candidate, _) in buckets.iter().take(CANDIDATES) {
        let is_similar = colors
            .iter()
            .any(|accepted| accepted.distance(candidate) < MIN_DISTANCE);

        if !is_similar && colors.len() < MAX_ACCEPTED {
            colors.push(*candidate);
        }
    }

    if colors.len() < PALETTE_SIZE {
        log::warn!(
            "image yields only {} distinct colors, padding with random ones",
            colors.len()
        );
        while colors.len() < PALETTE_SIZE {
            colors.push(Color::from(rng.random::<[u8; 3]>()));
        }
    }

    colors.truncate(PALETTE_SIZE);
    colors
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{extract_palette, histogram, quantize};
    use crate::Color;

    fn pixels(colors: &[([u8; 3], usize)]) -> Vec<u8> {
        let mut data = Vec::new();
        for &(rgb, count) in colors {
            for _ in 0..count {
                data.extend_from_slice(&rgb);
                data.push(255);
            }
        }
        data
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(15), 0);
        assert_eq!(quantize(16), 32);
        assert_eq!(quantize(100), 96);
        assert_eq!(quantize(239), 224);
        assert_eq!(quantize(240), 255);
        assert_eq!(quantize(255), 255);
    }

    #[test]
    fn test_frequency_order() {
        let data = pixels(&[
            ([250, 250, 250], 3),
            ([0, 0, 250], 10),
            ([250, 0, 0], 5),
            ([0, 250, 0], 7),
            ([0, 0, 0], 1),
            ([128, 128, 128], 2),
        ]);

        let colors = extract_palette(&data, &mut StdRng::seed_from_u64(0));
        assert_eq!(
            colors,
            vec![
                Color::new(0, 0, 255),
                Color::new(0, 255, 0),
                Color::new(255, 0, 0),
                Color::WHITE,
                Color::new(128, 128, 128),
            ]
        );
    }

    #[test]
    fn test_similar_colors_are_skipped() {
        // The second bucket is only 32 away from the first.
        let data = pixels(&[
            ([200, 40, 40], 9),
            ([200, 70, 40], 8),
            ([0, 0, 0], 1),
        ]);

        let colors = extract_palette(&data, &mut StdRng::seed_from_u64(0));
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], Color::new(192, 32, 32));
        assert_eq!(colors[1], Color::BLACK);
    }

    #[test]
    fn test_histogram() {
        let data = pixels(&[([10, 10, 10], 2), ([250, 0, 0], 1), ([0, 0, 0], 3)]);
        assert_eq!(
            histogram(&data),
            vec![(Color::BLACK, 5), (Color::new(255, 0, 0), 1)]
        );
        assert!(histogram(&[]).is_empty());
    }

    #[test]
    fn test_padding() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(extract_palette(&[], &mut rng).len(), 5);

        // Alpha and a trailing partial pixel do not matter.
        let colors = extract_palette(&[10, 10, 10, 0, 255, 255], &mut rng);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], Color::BLACK);
    }
}
