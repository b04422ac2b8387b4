use super::premultiply::premultiply_tint_to_rgba;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from a `0xRRGGBB` tint and straight alpha.
    #[inline]
    pub fn from_tint(tint: u32, alpha: f32) -> Self {
        let [r, g, b, a] = premultiply_tint_to_rgba(tint, alpha, true);
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight `0xRRGGBB` tint, rounded to the nearest byte per channel.
    ///
    /// Inverse of [`from_tint`](Self::from_tint) up to rounding. The color is
    /// [`clamped`](Self::clamped) first, so out-of-range channels saturate.
    /// Fully transparent colors carry no tint and return 0.
    pub fn to_packed_tint(self) -> u32 {
        let (r, g, b, a) = self.clamped().to_straight();
        if a <= 0.0 {
            return 0;
        }
        let byte = |c: f32| (c * 255.0).round() as u32;
        (byte(r) << 16) | (byte(g) << 8) | byte(b)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);

        // Premultiplied rgb cannot exceed alpha.
        let r = self.r.clamp(0.0, a);
        let g = self.g.clamp(0.0, a);
        let b = self.b.clamp(0.0, a);

        Self { r, g, b, a }
    }
}
