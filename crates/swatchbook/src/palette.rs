//! Harmonious palette generation with lockable entries.
//!
//! A [`Palette`] is an ordered list of [`PaletteEntry`]s, each of which
//! combines a stable [`EntryId`], a [`Color`], and a lock. Generation picks
//! one random base hue and spaces the palette's slots evenly around the hue
//! circle from there, jittering each slot's hue and drawing saturation and
//! lightness from moderate ranges. Regeneration picks a fresh base hue but
//! leaves locked entries untouched. Unlocked entries are spaced by their
//! position among the *unlocked* entries only, so that locking some colors
//! does not open gaps in the hue progression of the rest.
//!
//! Randomness is injected as any [`rand::Rng`] and identifiers as any
//! [`IdSource`], which keeps generation reproducible under test:
//!
//! ```
//! # use rand::{rngs::StdRng, SeedableRng};
//! # use swatchbook::opt::GeneratorOptions;
//! # use swatchbook::palette::{Palette, SequentialIds};
//! let options = GeneratorOptions::default();
//! let p1 = Palette::generate(&options, &mut StdRng::seed_from_u64(7), &mut SequentialIds::default());
//! let p2 = Palette::generate(&options, &mut StdRng::seed_from_u64(7), &mut SequentialIds::default());
//! assert_eq!(p1, p2);
//! assert_eq!(p1[0].id.as_ref(), "c1");
//! ```

use std::collections::HashSet;

use rand::Rng;

use crate::opt::GeneratorOptions;
use crate::{Color, Float};

/// A palette entry's identifier.
///
/// Identifiers are opaque strings. They stay the same when an entry's color
/// changes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    /// Create a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// ====================================================================================================================

/// A source of fresh identifiers.
pub trait IdSource {
    /// Produce the next identifier. It must differ from all identifiers
    /// produced before.
    fn next_id(&mut self) -> EntryId;
}

/// Random identifiers made of seven base-36 digits.
///
/// Uniqueness is probabilistic. With 36⁷ possible identifiers, collisions
/// within a palette or library are vanishingly rare.
#[derive(Debug)]
pub struct RandomIds<R>(R);

impl<R: Rng> RandomIds<R> {
    /// The number of digits per identifier.
    pub const LENGTH: usize = 7;

    /// Create a new source drawing from the given random number generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> IdSource for RandomIds<R> {
    fn next_id(&mut self) -> EntryId {
        let id = (0..Self::LENGTH)
            .map(|_| char::from_digit(self.0.random_range(0..36), 36).unwrap_or('0'))
            .collect::<String>();
        EntryId(id)
    }
}

/// Sequential identifiers `c1`, `c2`, `c3`, and so on.
#[derive(Debug, Default)]
pub struct SequentialIds(usize);

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        self.0 += 1;
        EntryId(format!("c{}", self.0))
    }
}

// ====================================================================================================================

/// A palette entry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub id: EntryId,
    pub color: Color,
    pub locked: bool,
}

/// Pick a random base hue in degrees `0..360`.
pub fn random_hue<R: Rng>(rng: &mut R) -> Float {
    rng.random::<Float>() * 360.0
}

/// Generate a color harmonizing with the anchor hue.
///
/// The color's hue deviates from the anchor by at most the jitter and wraps
/// around. Its saturation and lightness are drawn uniformly from the
/// configured ranges.
pub fn harmonious<R: Rng>(anchor: Float, options: &GeneratorOptions, rng: &mut R) -> Color {
    let jitter = options.jitter();
    let (s_lo, s_hi) = options.saturation();
    let (l_lo, l_hi) = options.lightness();

    let hue = (anchor + rng.random_range(-jitter..=jitter)).rem_euclid(360.0);
    let saturation = rng.random_range(s_lo..=s_hi);
    let lightness = rng.random_range(l_lo..=l_hi);

    Color::from_hsl(hue, saturation, lightness)
}

/// Regenerate the unlocked entries.
///
/// This function picks a fresh base hue and then processes the entries in
/// order. Entries whose identifiers are in the locked set are copied
/// unchanged. The k-th entry not in the locked set, counting from zero, gets
/// a harmonious color anchored at `base + k·hue_step` but keeps its
/// identifier and lock flag.
pub fn regenerate<R: Rng>(
    entries: &[PaletteEntry],
    locked: &HashSet<EntryId>,
    options: &GeneratorOptions,
    rng: &mut R,
) -> Vec<PaletteEntry> {
    let base = random_hue(rng);
    let step = options.hue_step();
    let mut index: u16 = 0;

    let result = entries
        .iter()
        .map(|entry| {
            if locked.contains(&entry.id) {
                entry.clone()
            } else {
                let anchor = step.mul_add(Float::from(index), base);
                index = index.saturating_add(1);
                PaletteEntry {
                    color: harmonious(anchor, options, rng),
                    ..entry.clone()
                }
            }
        })
        .collect();

    log::debug!(
        "regenerated {} of {} palette entries from base hue {:.1}°",
        index,
        entries.len(),
        base
    );

    result
}

// ====================================================================================================================

/// An ordered palette of lockable colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Generate a new palette with `options.size()` unlocked entries.
    ///
    /// Slot `i` gets a harmonious color anchored at `base + i·hue_step` for a
    /// random base hue.
    pub fn generate<R: Rng, I: IdSource + ?Sized>(
        options: &GeneratorOptions,
        rng: &mut R,
        ids: &mut I,
    ) -> Self {
        let base = random_hue(rng);
        let step = options.hue_step();

        let entries = (0..options.size())
            .map(|index| {
                let anchor = step.mul_add(index as Float, base);
                PaletteEntry {
                    id: ids.next_id(),
                    color: harmonious(anchor, options, rng),
                    locked: false,
                }
            })
            .collect();

        Self { entries }
    }

    /// Create a new palette with unlocked entries for the given colors.
    pub fn from_colors<I: IdSource + ?Sized>(colors: &[Color], ids: &mut I) -> Self {
        let entries = colors
            .iter()
            .map(|color| PaletteEntry {
                id: ids.next_id(),
                color: *color,
                locked: false,
            })
            .collect();

        Self { entries }
    }

    /// Replace this palette's entries with unlocked entries for the given
    /// colors.
    ///
    /// All entries get fresh identifiers, even if a color was present before.
    pub fn load<I: IdSource + ?Sized>(&mut self, colors: &[Color], ids: &mut I) {
        *self = Self::from_colors(colors, ids);
        log::debug!("loaded palette with {} colors", self.entries.len());
    }

    /// Regenerate all unlocked entries.
    pub fn regenerate<R: Rng>(&mut self, options: &GeneratorOptions, rng: &mut R) {
        let locked = self
            .entries
            .iter()
            .filter(|entry| entry.locked)
            .map(|entry| entry.id.clone())
            .collect::<HashSet<_>>();

        self.entries = regenerate(&self.entries, &locked, options, rng);
    }

    /// Toggle the lock of the entry with the given identifier.
    ///
    /// This method returns the new lock state or `None` if no entry has the
    /// identifier.
    pub fn toggle_lock(&mut self, id: &EntryId) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|entry| entry.id == *id)?;
        entry.locked = !entry.locked;
        Some(entry.locked)
    }

    /// Update the color of the entry with the given identifier.
    ///
    /// This method leaves the entry's lock unchanged. It returns whether an
    /// entry has the identifier.
    pub fn update_color(&mut self, id: &EntryId, color: Color) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == *id) {
            Some(entry) => {
                entry.color = color;
                true
            }
            None => false,
        }
    }

    /// Look up the entry with the given identifier.
    pub fn entry(&self, id: &EntryId) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Get this palette's colors in order.
    pub fn colors(&self) -> Vec<Color> {
        self.entries.iter().map(|entry| entry.color).collect()
    }

    /// Get this palette's entries.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Get an iterator over this palette's entries.
    pub fn iter(&self) -> core::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::ops::Index<usize> for Palette {
    type Output = PaletteEntry;

    /// Access the entry at the given position.
    ///
    /// # Panics
    ///
    /// This method panics if the index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = core::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{regenerate, EntryId, IdSource, Palette, RandomIds, SequentialIds};
    use crate::opt::GeneratorOptions;
    use crate::{Color, Float};

    fn hue_distance(h1: Float, h2: Float) -> Float {
        (h2 - h1).rem_euclid(360.0)
    }

    #[test]
    fn test_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), EntryId::from("c1"));
        assert_eq!(ids.next_id(), EntryId::from("c2"));

        let mut ids = RandomIds::new(StdRng::seed_from_u64(1));
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let id = ids.next_id();
            assert_eq!(id.as_ref().len(), 7);
            assert!(
                id.as_ref().chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
                "{} should be base 36",
                id
            );
            seen.insert(id);
        }
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn test_generate() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut ids = SequentialIds::default();

        for size in [1, 5, 8] {
            let options = GeneratorOptions::builder().size(size).build();
            let palette = Palette::generate(&options, &mut rng, &mut ids);
            assert_eq!(palette.len(), size);

            let mut distinct = HashSet::new();
            for entry in &palette {
                assert!(!entry.locked, "fresh entries are unlocked");
                assert_eq!(Color::from_hex(&entry.color.to_hex()), Ok(entry.color));
                distinct.insert(entry.id.clone());

                let [_, s, l] = entry.color.to_hsl_exact();
                assert!((48.0..=92.0).contains(&s), "saturation {} out of range", s);
                assert!((39.0..=71.0).contains(&l), "lightness {} out of range", l);
            }
            assert_eq!(distinct.len(), size);
        }
    }

    #[test]
    fn test_generate_spacing() {
        let options = GeneratorOptions::builder()
            .jitter(0.0)
            .saturation(100.0, 100.0)
            .lightness(50.0, 50.0)
            .build();
        let palette = Palette::generate(
            &options,
            &mut StdRng::seed_from_u64(99),
            &mut SequentialIds::default(),
        );

        let colors = palette.colors();
        for (c1, c2) in colors.iter().zip(colors.iter().skip(1)) {
            let [h1, _, _] = c1.to_hsl_exact();
            let [h2, _, _] = c2.to_hsl_exact();
            let distance = hue_distance(h1, h2);
            assert!((43.0..=47.0).contains(&distance), "hue step {}", distance);
        }
    }

    #[test]
    fn test_regenerate_keeps_locked() {
        let options = GeneratorOptions::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut palette = Palette::generate(&options, &mut rng, &mut SequentialIds::default());

        let second = palette[1].id.clone();
        let fourth = palette[3].id.clone();
        assert_eq!(palette.toggle_lock(&second), Some(true));
        assert_eq!(palette.toggle_lock(&fourth), Some(true));
        let before = palette.clone();

        for _ in 0..20 {
            palette.regenerate(&options, &mut rng);
            assert_eq!(palette.len(), before.len());
            for (old, new) in before.iter().zip(palette.iter()) {
                assert_eq!(old.id, new.id);
                assert_eq!(old.locked, new.locked);
                if old.locked {
                    assert_eq!(old, new);
                }
            }
        }

        assert_eq!(palette.toggle_lock(&second), Some(false));
        assert_eq!(palette.toggle_lock(&EntryId::from("nope")), None);
    }

    #[test]
    fn test_regenerate_spaces_unlocked() {
        let options = GeneratorOptions::builder()
            .jitter(0.0)
            .saturation(100.0, 100.0)
            .lightness(50.0, 50.0)
            .build();
        let mut rng = StdRng::seed_from_u64(3);
        let palette = Palette::from_colors(
            &[Color::BLACK, Color::WHITE, Color::BLACK, Color::WHITE, Color::BLACK],
            &mut SequentialIds::default(),
        );

        let locked = [EntryId::from("c2"), EntryId::from("c3")]
            .into_iter()
            .collect::<HashSet<_>>();
        let entries = regenerate(palette.entries(), &locked, &options, &mut rng);

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[1].color, Color::WHITE);
        assert_eq!(entries[2].color, Color::BLACK);

        // Unlocked entries 0, 3, and 4 are one hue step apart each.
        let [h0, _, _] = entries[0].color.to_hsl_exact();
        let [h3, _, _] = entries[3].color.to_hsl_exact();
        let [h4, _, _] = entries[4].color.to_hsl_exact();
        let d03 = hue_distance(h0, h3);
        let d34 = hue_distance(h3, h4);
        assert!((43.0..=47.0).contains(&d03), "hue step {}", d03);
        assert!((43.0..=47.0).contains(&d34), "hue step {}", d34);
    }

    #[test]
    fn test_load_and_update() {
        let mut ids = SequentialIds::default();
        let mut palette = Palette::generate(
            &GeneratorOptions::default(),
            &mut StdRng::seed_from_u64(0),
            &mut ids,
        );
        let first = palette[0].id.clone();
        palette.toggle_lock(&first);

        let colors = [Color::new(255, 107, 107), Color::new(78, 205, 196)];
        palette.load(&colors, &mut ids);
        assert_eq!(palette.colors(), colors);
        assert!(palette.iter().all(|entry| !entry.locked), "loaded entries are unlocked");
        assert_eq!(palette.entry(&first), None);
        assert_eq!(palette[0].id, EntryId::from("c6"));

        let id = palette[1].id.clone();
        assert!(palette.update_color(&id, Color::BLACK), "entry should exist");
        assert_eq!(palette.entry(&id).map(|entry| entry.color), Some(Color::BLACK));
        assert!(!palette.update_color(&first, Color::BLACK), "entry should not exist");
    }
}
