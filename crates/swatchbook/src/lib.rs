//! # Swatchbook
//!
//! Swatchbook is the color math and palette engine behind a palette design
//! tool.
//!
//! Everything in this crate is a pure function or operates on values owned by
//! the caller. Randomness, identifiers, and the current time are injected.
//!
//!
//! ## 1. Overview
//!
//! Swatchbook's main abstractions are:
//!
//!   * [`Color`] is a **24-bit sRGB color** whose display is the canonical
//!     `#RRGGBB` notation. Its methods derive the [`Rgb`], [`Hsl`], and
//!     [`Cmyk`] representations, WCAG luminance and contrast, overlay text
//!     colors, human-readable names, shades, and simulated color vision
//!     deficiencies.
//!   * The [`convert`] and [`metrics`] modules offer the same functionality
//!     as **string-level functions** that accept hexadecimal strings and
//!     report malformed input with sentinels instead of errors.
//!   * The [`palette`] module **generates harmonious palettes** with
//!     [`Palette`](palette::Palette), which keeps locked entries unchanged
//!     across regenerations. The [`opt`] module configures the generator.
//!   * The [`shade`] module derives **shade ramps** of decreasing lightness
//!     and the [`vision`] module **simulates color vision deficiencies**.
//!   * The [`wcag`], [`export`], [`gradient`], [`extract`], and [`library`]
//!     modules cover accessibility ratings, CSS and share-link export,
//!     gradients, dominant-color extraction from pixels, and a palette
//!     library.
//!
//!
//! ## 2. Generating a Palette
//!
//! ```
//! # use rand::{rngs::StdRng, SeedableRng};
//! # use swatchbook::opt::GeneratorOptions;
//! # use swatchbook::palette::{Palette, SequentialIds};
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut ids = SequentialIds::default();
//! let options = GeneratorOptions::default();
//!
//! let mut palette = Palette::generate(&options, &mut rng, &mut ids);
//! assert_eq!(palette.len(), 5);
//!
//! // Lock the first entry and regenerate: it stays put.
//! let first = palette[0].clone();
//! palette.toggle_lock(&first.id);
//! palette.regenerate(&options, &mut rng);
//! assert_eq!(palette[0].color, first.color);
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Swatchbook supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** implements serialization for colors, palettes, and the
//!     library and enables JSON export of shade ramps. This feature is
//!     disabled by default.
//!
//! Swatchbook logs through the [`log`](https://docs.rs/log) facade but never
//! installs a logger.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod convert;
pub mod error;
pub mod export;
pub mod extract;
pub mod gradient;
pub mod library;
pub mod metrics;
mod object;
pub mod opt;
pub mod palette;
pub mod shade;
pub mod vision;
pub mod wcag;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use object::{Cmyk, Color, Hsl, Rgb};
