//! A library of saved and recent palettes with likes and a curated catalog.
//!
//! The library is a plain value. Persisting it is up to the caller, e.g., by
//! serializing it with the `serde` feature. Timestamps are milliseconds since
//! the Unix epoch and always passed in, so that expiry is testable.
//!
//! ```
//! # use swatchbook::library::{curated, search, PaletteLibrary};
//! # use swatchbook::palette::SequentialIds;
//! # use swatchbook::Color;
//! let mut library = PaletteLibrary::default();
//! let mut ids = SequentialIds::default();
//! library.save(&[Color::BLACK, Color::WHITE], Some("Mono".to_string()), 0, &mut ids);
//! assert_eq!(search(library.saved(), "mono").len(), 1);
//!
//! let catalog = curated();
//! assert_eq!(search(&catalog, "#ff6b6b")[0].name.as_deref(), Some("Tropical Sunset"));
//! ```

use std::collections::HashMap;

use crate::export::encode_share_token;
use crate::palette::{EntryId, IdSource};
use crate::Color;

/// The maximum number of recent palettes.
pub const RECENT_LIMIT: usize = 20;

/// The age in milliseconds at which recent palettes expire, i.e., one week.
pub const RECENT_TTL_MS: u64 = 1000 * 60 * 60 * 24 * 7;

/// A palette saved to the library.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedPalette {
    pub id: EntryId,
    pub colors: Vec<Color>,
    /// The time of saving in milliseconds since the Unix epoch.
    pub saved_at: u64,
    pub name: Option<String>,
}

impl SavedPalette {
    /// Get the key for liking this palette, which is its share token.
    pub fn key(&self) -> String {
        encode_share_token(&self.colors)
    }

    /// Determine whether this palette matches the search query.
    ///
    /// A blank query matches every palette. Otherwise, the lowercased query
    /// must be a substring of the lowercased name or of one of the
    /// lowercased hashed hexadecimal colors.
    pub fn matches(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }

        let query = query.to_lowercase();
        self.name
            .as_ref()
            .is_some_and(|name| name.to_lowercase().contains(&query))
            || self
                .colors
                .iter()
                .any(|color| color.to_hex().to_lowercase().contains(&query))
    }
}

/// Select the palettes matching the search query.
pub fn search<'a>(palettes: &'a [SavedPalette], query: &str) -> Vec<&'a SavedPalette> {
    palettes
        .iter()
        .filter(|palette| palette.matches(query))
        .collect()
}

// ====================================================================================================================

/// A library of saved palettes, recently generated palettes, and likes.
///
/// Saved and recent palettes are ordered newest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteLibrary {
    saved: Vec<SavedPalette>,
    recent: Vec<SavedPalette>,
    likes: HashMap<String, u32>,
}

impl PaletteLibrary {
    /// Get the saved palettes, newest first.
    pub fn saved(&self) -> &[SavedPalette] {
        &self.saved
    }

    /// Get the recent palettes, newest first.
    pub fn recent(&self) -> &[SavedPalette] {
        &self.recent
    }

    /// Save the colors as a new palette.
    pub fn save<I: IdSource + ?Sized>(
        &mut self,
        colors: &[Color],
        name: Option<String>,
        now: u64,
        ids: &mut I,
    ) -> &SavedPalette {
        let palette = SavedPalette {
            id: ids.next_id(),
            colors: colors.to_vec(),
            saved_at: now,
            name,
        };

        log::debug!("saving palette {} with {} colors", palette.id, colors.len());
        self.saved.insert(0, palette);
        &self.saved[0]
    }

    /// Delete the saved palette with the given identifier.
    pub fn delete(&mut self, id: &EntryId) -> Option<SavedPalette> {
        let index = self.saved.iter().position(|palette| palette.id == *id)?;
        log::debug!("deleting palette {}", id);
        Some(self.saved.remove(index))
    }

    /// Record the colors as the most recent palette.
    ///
    /// Only the [`RECENT_LIMIT`] most recent palettes are kept.
    pub fn record_recent<I: IdSource + ?Sized>(&mut self, colors: &[Color], now: u64, ids: &mut I) {
        self.recent.insert(
            0,
            SavedPalette {
                id: ids.next_id(),
                colors: colors.to_vec(),
                saved_at: now,
                name: None,
            },
        );
        self.recent.truncate(RECENT_LIMIT);
    }

    /// Drop recent palettes that are at least a week old.
    ///
    /// This method returns the number of dropped palettes.
    pub fn expire_recent(&mut self, now: u64) -> usize {
        let before = self.recent.len();
        self.recent
            .retain(|palette| now.saturating_sub(palette.saved_at) < RECENT_TTL_MS);

        let expired = before - self.recent.len();
        if 0 < expired {
            log::debug!("expired {} recent palettes", expired);
        }
        expired
    }

    /// Like the palette with the given key and return the new like count.
    pub fn like(&mut self, key: &str) -> u32 {
        let count = self.likes.entry(key.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Get the like count for the palette with the given key.
    pub fn likes(&self, key: &str) -> u32 {
        self.likes.get(key).copied().unwrap_or(0)
    }
}

// ====================================================================================================================

const CURATED: [(&str, [u32; 5]); 12] = [
    ("Tropical Sunset", [0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0x96CEB4, 0xFFEAA7]),
    ("Minimal Gray", [0x2D3436, 0x636E72, 0xB2BEC3, 0xDFE6E9, 0xFFFFFF]),
    ("Ocean Dreams", [0x6C5CE7, 0xA29BFE, 0x74B9FF, 0x81ECEC, 0x00CEC9]),
    ("Vibrant Pop", [0xFD79A8, 0xF8B500, 0x00B894, 0x00CEC9, 0x0984E3]),
    ("Rainbow Bright", [0xE17055, 0xFDCB6E, 0x00B894, 0x0984E3, 0x6C5CE7]),
    ("Corporate Clean", [0x2C3E50, 0xE74C3C, 0xECF0F1, 0x3498DB, 0x2ECC71]),
    ("Dark Neon", [0x1A1A2E, 0x16213E, 0x0F3460, 0xE94560, 0x533483]),
    ("Light Shades", [0xF8F9FA, 0xE9ECEF, 0xDEE2E6, 0xCED4DA, 0xADB5BD]),
    ("Pastel Dream", [0xFF9A9E, 0xFECFEF, 0xFFDDE1, 0xA1C4FD, 0xC2E9FB]),
    ("Gradient Magic", [0x667EEA, 0x764BA2, 0xF093FB, 0xF5576C, 0x4FACFE]),
    ("Dark Mode", [0x0F0F0F, 0x1A1A1A, 0x2D2D2D, 0x3D3D3D, 0x4D4D4D]),
    ("Deep Blue", [0x00B4D8, 0x0077B6, 0x03045E, 0x023E8A, 0x0096C7]),
];

/// Get the curated catalog of palettes.
///
/// Curated palettes have the identifiers `c1` through `c12` and a timestamp
/// of zero.
pub fn curated() -> Vec<SavedPalette> {
    CURATED
        .iter()
        .enumerate()
        .map(|(index, (name, colors))| SavedPalette {
            id: EntryId::new(format!("c{}", index + 1)),
            colors: colors.iter().copied().map(Color::from_u32).collect(),
            saved_at: 0,
            name: Some((*name).to_string()),
        })
        .collect()
}

// ====================================================================================================================
