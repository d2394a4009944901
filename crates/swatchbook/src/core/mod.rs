mod contrast;
mod conversion;
mod math;
mod naming;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_overlay_luma, to_relative_luminance};

// conversion
pub(crate) use conversion::{hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl, round_hsl, to_channel};

// math
pub use math::to_eq_bits;

// naming
pub(crate) use naming::to_name;

// string
pub(crate) use string::{format_hashed, is_hashed, normalize, parse_hashed};
