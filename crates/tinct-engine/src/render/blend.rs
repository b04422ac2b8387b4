//! GPU blend states for each [`BlendMode`].

use wgpu::{BlendComponent, BlendFactor, BlendOperation, BlendState};

use crate::paint::{BlendMode, correct_blend_mode};

#[inline]
const fn component(src_factor: BlendFactor, dst_factor: BlendFactor) -> BlendComponent {
    BlendComponent { src_factor, dst_factor, operation: BlendOperation::Add }
}

/// Same factors for color and alpha.
#[inline]
const fn uniform(src: BlendFactor, dst: BlendFactor) -> BlendState {
    BlendState { color: component(src, dst), alpha: component(src, dst) }
}

/// Separate color and alpha factors.
#[inline]
const fn separate(
    src_rgb: BlendFactor,
    dst_rgb: BlendFactor,
    src_alpha: BlendFactor,
    dst_alpha: BlendFactor,
) -> BlendState {
    BlendState { color: component(src_rgb, dst_rgb), alpha: component(src_alpha, dst_alpha) }
}

/// Fixed-function blend state for `mode`.
///
/// Returns `None` for [`BlendMode::None`]: the pipeline should be built with
/// blending disabled. Plain modes expect premultiplied source color; the
/// `*Npm` modes weight the source by its own alpha.
///
/// Modes that need shader support (overlay, hue, ...) fall back to
/// premultiplied source-over.
pub fn blend_state(mode: BlendMode) -> Option<BlendState> {
    use BlendFactor::*;

    let state = match mode {
        BlendMode::None => return None,

        BlendMode::Normal
        | BlendMode::Overlay
        | BlendMode::Darken
        | BlendMode::Lighten
        | BlendMode::ColorDodge
        | BlendMode::ColorBurn
        | BlendMode::HardLight
        | BlendMode::SoftLight
        | BlendMode::Difference
        | BlendMode::Exclusion
        | BlendMode::Hue
        | BlendMode::Saturation
        | BlendMode::Color
        | BlendMode::Luminosity => uniform(One, OneMinusSrcAlpha),
        BlendMode::Add => uniform(One, One),
        BlendMode::Multiply => separate(Dst, OneMinusSrcAlpha, One, OneMinusSrcAlpha),
        BlendMode::Screen => separate(One, OneMinusSrc, One, OneMinusSrcAlpha),

        BlendMode::NormalNpm => separate(SrcAlpha, OneMinusSrcAlpha, One, OneMinusSrcAlpha),
        BlendMode::AddNpm => separate(SrcAlpha, One, One, One),
        BlendMode::ScreenNpm => separate(SrcAlpha, OneMinusSrc, One, OneMinusSrcAlpha),

        BlendMode::SrcIn => uniform(DstAlpha, Zero),
        BlendMode::SrcOut => uniform(OneMinusDstAlpha, Zero),
        BlendMode::SrcAtop => uniform(DstAlpha, OneMinusSrcAlpha),
        BlendMode::DstOver => uniform(OneMinusDstAlpha, One),
        BlendMode::DstIn => uniform(Zero, SrcAlpha),
        BlendMode::DstOut => uniform(Zero, OneMinusSrcAlpha),
        BlendMode::DstAtop => uniform(OneMinusDstAlpha, SrcAlpha),
        BlendMode::Xor => uniform(OneMinusDstAlpha, OneMinusSrcAlpha),

        BlendMode::Subtract => BlendState {
            color: BlendComponent {
                src_factor: One,
                dst_factor: One,
                operation: BlendOperation::ReverseSubtract,
            },
            alpha: component(One, One),
        },
    };

    Some(state)
}

/// Member of `mode`'s plain/straight pair whose factors match the source
/// encoding: the plain mode (`One` source factor) for premultiplied sources,
/// the `*Npm` mode (`SrcAlpha` source factor) for straight ones.
///
/// Modes outside [`BlendMode::NPM_PAIRS`] are returned unchanged.
fn factors_for_encoding(mode: BlendMode, premultiplied: bool) -> BlendMode {
    BlendMode::NPM_PAIRS
        .iter()
        .find(|pair| pair.plain == mode || pair.npm == mode)
        .map_or(mode, |pair| if premultiplied { pair.plain } else { pair.npm })
}

/// Blend state for a draw of a texture with the given alpha encoding.
///
/// `mode` is first corrected with [`correct_blend_mode`]; the corrected mode
/// picks the blend family and the texture's encoding picks the source
/// factor, so premultiplied texels are never scaled by alpha a second time.
pub fn resolve_blend_state(mode: BlendMode, premultiplied: bool) -> Option<BlendState> {
    let corrected = correct_blend_mode(mode, premultiplied);
    if corrected != mode {
        log::trace!("blend mode {mode:?} corrected to {corrected:?} (premultiplied={premultiplied})");
    }
    blend_state(factors_for_encoding(corrected, premultiplied))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_disables_blending() {
        assert_eq!(blend_state(BlendMode::None), None);
    }

    #[test]
    fn normal_is_premultiplied_source_over() {
        assert_eq!(blend_state(BlendMode::Normal), Some(BlendState::PREMULTIPLIED_ALPHA_BLENDING));
    }

    #[test]
    fn erase_alias_punches_out() {
        let state = blend_state(BlendMode::ERASE).unwrap();
        assert_eq!(state.color.src_factor, BlendFactor::Zero);
        assert_eq!(state.color.dst_factor, BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn npm_variants_weight_by_source_alpha() {
        for mode in [BlendMode::NormalNpm, BlendMode::AddNpm, BlendMode::ScreenNpm] {
            let state = blend_state(mode).unwrap();
            assert_eq!(state.color.src_factor, BlendFactor::SrcAlpha, "{mode:?}");
            assert_eq!(state.alpha.src_factor, BlendFactor::One, "{mode:?}");
        }
    }

    #[test]
    fn subtract_reverses_color_only() {
        let state = blend_state(BlendMode::Subtract).unwrap();
        assert_eq!(state.color.operation, BlendOperation::ReverseSubtract);
        assert_eq!(state.alpha.operation, BlendOperation::Add);
    }

    #[test]
    fn every_mode_but_none_has_a_state() {
        for mode in BlendMode::ALL {
            assert_eq!(blend_state(mode).is_none(), mode == BlendMode::None, "{mode:?}");
        }
    }

    #[test]
    fn resolve_uses_source_factor_of_encoding() {
        let premul = resolve_blend_state(BlendMode::Normal, true).unwrap();
        assert_eq!(premul.color.src_factor, BlendFactor::One);
        let straight = resolve_blend_state(BlendMode::Normal, false).unwrap();
        assert_eq!(straight.color.src_factor, BlendFactor::SrcAlpha);
    }

    #[test]
    fn resolve_ignores_nominal_npm_variant() {
        for pair in BlendMode::NPM_PAIRS {
            for premultiplied in [false, true] {
                assert_eq!(
                    resolve_blend_state(pair.plain, premultiplied),
                    resolve_blend_state(pair.npm, premultiplied),
                    "{pair:?} premultiplied={premultiplied}"
                );
            }
        }
    }

    #[test]
    fn resolve_premultiplied_matches_plain_states() {
        assert_eq!(resolve_blend_state(BlendMode::Add, true), blend_state(BlendMode::Add));
        assert_eq!(resolve_blend_state(BlendMode::AddNpm, false), blend_state(BlendMode::AddNpm));
        assert_eq!(
            resolve_blend_state(BlendMode::Multiply, true),
            blend_state(BlendMode::Multiply)
        );
        assert_eq!(resolve_blend_state(BlendMode::None, true), None);
    }
}
