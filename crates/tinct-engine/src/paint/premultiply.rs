//! Premultiplied-alpha corrections for blend modes and tints.
//!
//! A texture's pixel encoding (straight or premultiplied) decides which blend
//! equation composites it correctly. [`correct_blend_mode`] remaps the nominal
//! mode a draw asks for to the one that matches the texture. The tint helpers
//! turn a `0xRRGGBB` tint plus alpha into the color the batcher uploads.
//!
//! Everything here is a pure function; the only shared data is the immutable
//! [`PREMULTIPLY_BLEND_MODE`] table.

use super::blend_mode::{BLEND_MODE_SLOTS, BlendMode, NpmPair};
use super::ColorError;

/// 2×32 blend-mode remapping: `[premultiplied as usize][nominal] -> corrected`.
///
/// Row 0 is used for straight-alpha sources, row 1 for premultiplied ones.
/// Slots with no counterpart map to themselves, including the reserved slots
/// past the last named mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BlendModeTable {
    rows: [[u8; BLEND_MODE_SLOTS]; 2],
}

impl BlendModeTable {
    /// Builds the table from plain/straight mode pairs.
    ///
    /// Starts from identity on both rows, then for each pair:
    /// - row 0 sends the `npm` slot to `plain`
    /// - row 1 sends the `plain` slot to `npm`
    pub const fn build(pairs: &[NpmPair]) -> Self {
        let mut straight = [0u8; BLEND_MODE_SLOTS];
        let mut i = 0;
        while i < BLEND_MODE_SLOTS {
            straight[i] = i as u8;
            i += 1;
        }
        let mut premul = straight;

        let mut p = 0;
        while p < pairs.len() {
            let pair = pairs[p];
            straight[pair.npm.index()] = pair.plain as u8;
            premul[pair.plain.index()] = pair.npm as u8;
            p += 1;
        }

        Self { rows: [straight, premul] }
    }

    /// Corrected mode for a source with the given premultiplication.
    #[inline]
    pub const fn correct(&self, mode: BlendMode, premultiplied: bool) -> BlendMode {
        let raw = self.rows[premultiplied as usize][mode.index()];
        // `build` only writes named modes into named slots.
        match BlendMode::from_index(raw as usize) {
            Some(corrected) => corrected,
            None => mode,
        }
    }

    /// Same lookup on a raw mode index.
    ///
    /// Fails with [`ColorError::InvalidBlendMode`] for indices outside the
    /// table. Reserved in-range slots map to themselves.
    pub fn correct_raw(&self, mode: u32, premultiplied: bool) -> Result<u32, ColorError> {
        let row = &self.rows[premultiplied as usize];
        match row.get(mode as usize) {
            Some(&corrected) => Ok(u32::from(corrected)),
            None => {
                log::debug!("rejected blend mode index {mode}");
                Err(ColorError::InvalidBlendMode(mode))
            }
        }
    }
}

/// Process-wide correction table built from [`BlendMode::NPM_PAIRS`].
pub static PREMULTIPLY_BLEND_MODE: BlendModeTable = BlendModeTable::build(&BlendMode::NPM_PAIRS);

/// Returns the blend mode that is correct for a source texture's encoding.
#[inline]
pub fn correct_blend_mode(mode: BlendMode, premultiplied: bool) -> BlendMode {
    PREMULTIPLY_BLEND_MODE.correct(mode, premultiplied)
}

/// [`correct_blend_mode`] for an unchecked integer mode, e.g. read from a
/// serialized scene.
#[inline]
pub fn correct_blend_mode_raw(mode: u32, premultiplied: bool) -> Result<u32, ColorError> {
    PREMULTIPLY_BLEND_MODE.correct_raw(mode, premultiplied)
}

/// Combines `rgb` and `alpha` into a fresh RGBA vector.
///
/// With `premultiply` the color channels are scaled by `alpha`; otherwise
/// they are copied as-is. Alpha is not clamped.
#[inline]
pub fn premultiply_rgba(rgb: [f32; 3], alpha: f32, premultiply: bool) -> [f32; 4] {
    let mut out = [0.0; 4];
    premultiply_rgba_into(rgb, alpha, &mut out, premultiply);
    out
}

/// [`premultiply_rgba`] writing into a caller-owned buffer.
#[inline]
pub fn premultiply_rgba_into(rgb: [f32; 3], alpha: f32, out: &mut [f32; 4], premultiply: bool) {
    if premultiply {
        out[0] = rgb[0] * alpha;
        out[1] = rgb[1] * alpha;
        out[2] = rgb[2] * alpha;
    } else {
        out[0] = rgb[0];
        out[1] = rgb[1];
        out[2] = rgb[2];
    }
    out[3] = alpha;
}

/// Packs `tint` premultiplied by `alpha` into `0xAARRGGBB`.
///
/// R, G and B are rounded half-up. The alpha byte is `alpha * 255` truncated,
/// so `premultiply_tint(0xFFFFFF, 0.5) == 0x7F80_8080`. Batched shaders depend
/// on this exact packing; do not round the alpha byte.
///
/// `alpha` is `f64` so the half-up rounding lands where double-precision
/// callers expect: `0.7` packs red 255 as `0xB3`, which `0.7f32` would not.
pub fn premultiply_tint(tint: u32, alpha: f64) -> u32 {
    if alpha == 1.0 {
        return (255u32 << 24).wrapping_add(tint);
    }
    if alpha == 0.0 {
        return 0;
    }

    let scale = |channel: u32| (f64::from(channel) * alpha + 0.5) as i32;

    let r = scale((tint >> 16) & 0xFF);
    let g = scale((tint >> 8) & 0xFF);
    let b = scale(tint & 0xFF);
    let a = (alpha * 255.0) as i32;

    (a << 24)
        .wrapping_add(r << 16)
        .wrapping_add(g << 8)
        .wrapping_add(b) as u32
}

/// Unpacks `tint` into normalized RGBA, premultiplied by `alpha` when asked.
///
/// The alpha component is always `alpha`.
#[inline]
pub fn premultiply_tint_to_rgba(tint: u32, alpha: f32, premultiply: bool) -> [f32; 4] {
    let mut out = [0.0; 4];
    premultiply_tint_to_rgba_into(tint, alpha, &mut out, premultiply);
    out
}

/// [`premultiply_tint_to_rgba`] writing into a caller-owned buffer.
pub fn premultiply_tint_to_rgba_into(tint: u32, alpha: f32, out: &mut [f32; 4], premultiply: bool) {
    out[0] = ((tint >> 16) & 0xFF) as f32 / 255.0;
    out[1] = ((tint >> 8) & 0xFF) as f32 / 255.0;
    out[2] = (tint & 0xFF) as f32 / 255.0;
    if premultiply {
        out[0] *= alpha;
        out[1] *= alpha;
        out[2] *= alpha;
    }
    out[3] = alpha;
}
