use super::ColorError;

/// Number of slots in the blend-mode index space.
///
/// Every `BlendMode` discriminant is below this; slots past the last named
/// mode are reserved.
pub const BLEND_MODE_SLOTS: usize = 32;

/// Compositing operation applied when a draw lands on the render target.
///
/// Discriminants are stable and double as indices into
/// [`BlendModeTable`](super::BlendModeTable).
///
/// The `*Npm` variants assume straight (non-premultiplied) source color.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    #[default]
    Normal = 0,
    Add = 1,
    Multiply = 2,
    Screen = 3,
    Overlay = 4,
    Darken = 5,
    Lighten = 6,
    ColorDodge = 7,
    ColorBurn = 8,
    HardLight = 9,
    SoftLight = 10,
    Difference = 11,
    Exclusion = 12,
    Hue = 13,
    Saturation = 14,
    Color = 15,
    Luminosity = 16,
    NormalNpm = 17,
    AddNpm = 18,
    ScreenNpm = 19,
    /// Blending disabled; source replaces destination.
    None = 20,
    SrcIn = 21,
    SrcOut = 22,
    SrcAtop = 23,
    DstOver = 24,
    DstIn = 25,
    DstOut = 26,
    DstAtop = 27,
    Subtract = 28,
    Xor = 29,
}

impl BlendMode {
    /// Porter-Duff source-over. Same slot as [`BlendMode::Normal`].
    pub const SRC_OVER: BlendMode = BlendMode::Normal;
    /// Punches out the destination. Same slot as [`BlendMode::DstOut`].
    pub const ERASE: BlendMode = BlendMode::DstOut;

    /// All named modes in discriminant order.
    pub const ALL: [BlendMode; 30] = [
        BlendMode::Normal,
        BlendMode::Add,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
        BlendMode::NormalNpm,
        BlendMode::AddNpm,
        BlendMode::ScreenNpm,
        BlendMode::None,
        BlendMode::SrcIn,
        BlendMode::SrcOut,
        BlendMode::SrcAtop,
        BlendMode::DstOver,
        BlendMode::DstIn,
        BlendMode::DstOut,
        BlendMode::DstAtop,
        BlendMode::Subtract,
        BlendMode::Xor,
    ];

    /// Plain/straight pairs the correction table swaps between.
    pub const NPM_PAIRS: [NpmPair; 3] = [
        NpmPair::new(BlendMode::Normal, BlendMode::NormalNpm),
        NpmPair::new(BlendMode::Add, BlendMode::AddNpm),
        NpmPair::new(BlendMode::Screen, BlendMode::ScreenNpm),
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a mode by its slot index. `None` for reserved or out-of-range slots.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_npm(self) -> bool {
        matches!(self, BlendMode::NormalNpm | BlendMode::AddNpm | BlendMode::ScreenNpm)
    }
}

impl TryFrom<u32> for BlendMode {
    type Error = ColorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        BlendMode::from_index(value as usize).ok_or(ColorError::UnknownBlendMode(value))
    }
}

impl From<BlendMode> for u32 {
    #[inline]
    fn from(mode: BlendMode) -> u32 {
        mode as u32
    }
}

/// A plain blend mode and its straight-alpha counterpart.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NpmPair {
    pub plain: BlendMode,
    pub npm: BlendMode,
}

impl NpmPair {
    #[inline]
    pub const fn new(plain: BlendMode, npm: BlendMode) -> Self {
        Self { plain, npm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_discriminant_order() {
        for (i, mode) in BlendMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn aliases_share_slots() {
        assert_eq!(BlendMode::SRC_OVER, BlendMode::Normal);
        assert_eq!(BlendMode::ERASE.index(), 26);
    }

    #[test]
    fn try_from_known_value() {
        assert_eq!(BlendMode::try_from(19u32), Ok(BlendMode::ScreenNpm));
        assert_eq!(u32::from(BlendMode::Xor), 29);
    }

    #[test]
    fn try_from_reserved_slot_fails() {
        assert_eq!(BlendMode::try_from(30u32), Err(ColorError::UnknownBlendMode(30)));
        assert_eq!(BlendMode::try_from(1000u32), Err(ColorError::UnknownBlendMode(1000)));
    }

    #[test]
    fn every_mode_fits_the_slot_range() {
        assert!(BlendMode::ALL.iter().all(|m| m.index() < BLEND_MODE_SLOTS));
    }

    #[test]
    fn npm_pairs_are_consistent() {
        for pair in BlendMode::NPM_PAIRS {
            assert!(pair.npm.is_npm());
            assert!(!pair.plain.is_npm());
        }
    }
}
