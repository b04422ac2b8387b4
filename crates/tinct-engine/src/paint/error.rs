use std::fmt;

use super::blend_mode::BLEND_MODE_SLOTS;

/// Errors raised by the fallible entry points of the paint module.
///
/// The numeric transforms themselves never fail; only raw indices and
/// user-provided strings are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Raw blend-mode index outside the correction table.
    InvalidBlendMode(u32),
    /// Index inside the table range that names no blend mode.
    UnknownBlendMode(u32),
    /// String that does not parse as a hex color.
    InvalidHex(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidBlendMode(v) => {
                write!(f, "blend mode index {v} is out of range (expected < {BLEND_MODE_SLOTS})")
            }
            ColorError::UnknownBlendMode(v) => write!(f, "no blend mode has index {v}"),
            ColorError::InvalidHex(s) => write!(f, "invalid hex color {s:?}"),
        }
    }
}

impl std::error::Error for ColorError {}
