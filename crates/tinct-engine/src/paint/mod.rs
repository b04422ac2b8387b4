//! Paint model shared between batching and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - blend modes and their premultiplied-alpha corrections
//! - tint packing and hex conversions
//!
//! GPU-facing state derived from these lives in `render`.

pub mod blend_mode;
pub mod color;
pub mod error;
pub mod hex;
pub mod premultiply;

pub use blend_mode::{BLEND_MODE_SLOTS, BlendMode, NpmPair};
pub use color::Color;
pub use error::ColorError;
pub use hex::{hex_to_rgb, hex_to_string, rgb_to_hex, string_to_hex};
pub use premultiply::{
    BlendModeTable, PREMULTIPLY_BLEND_MODE, correct_blend_mode, correct_blend_mode_raw,
    premultiply_rgba, premultiply_rgba_into, premultiply_tint, premultiply_tint_to_rgba,
    premultiply_tint_to_rgba_into,
};
