//! Vertex format for batched, tinted quads.

use bytemuck::{Pod, Zeroable};

use crate::paint::premultiply_tint;

/// Packs a tint and alpha into the per-vertex `color` attribute.
///
/// Premultiplied textures need the tint scaled by alpha so the shader can
/// multiply it straight into the sampled texel. Straight textures, and any
/// opaque draw, carry the tint unscaled with alpha in the top byte.
#[inline]
pub fn pack_vertex_color(tint: u32, alpha: f64, premultiplied_texture: bool) -> u32 {
    if premultiplied_texture && alpha < 1.0 {
        premultiply_tint(tint, alpha)
    } else {
        let a = (alpha * 255.0) as i32 as u32;
        (a << 24).wrapping_add(tint)
    }
}

/// One vertex of a batched quad.
///
/// `color` is a packed `0xAARRGGBB` tint read by the shader as `Unorm8x4`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BatchVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: u32,
    pub texture_id: f32,
}

impl BatchVertex {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2,
        2 => Unorm8x4,
        3 => Float32
    ];

    #[inline]
    pub fn new(pos: [f32; 2], uv: [f32; 2], tint: u32, alpha: f64, premultiplied_texture: bool) -> Self {
        Self {
            pos,
            uv,
            color: pack_vertex_color(tint, alpha, premultiplied_texture),
            texture_id: 0.0,
        }
    }

    #[inline]
    pub fn with_texture_id(mut self, texture_id: f32) -> Self {
        self.texture_id = texture_id;
        self
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BatchVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Four vertices of a tinted quad in `pos`/`uv` order top-left, top-right,
/// bottom-right, bottom-left.
pub fn quad_vertices(
    origin: [f32; 2],
    size: [f32; 2],
    tint: u32,
    alpha: f64,
    premultiplied_texture: bool,
) -> [BatchVertex; 4] {
    let [x0, y0] = origin;
    let [x1, y1] = [origin[0] + size[0], origin[1] + size[1]];
    let v = |pos, uv| BatchVertex::new(pos, uv, tint, alpha, premultiplied_texture);
    [
        v([x0, y0], [0.0, 0.0]),
        v([x1, y0], [1.0, 0.0]),
        v([x1, y1], [1.0, 1.0]),
        v([x0, y1], [0.0, 1.0]),
    ]
}

/// Index pattern for [`quad_vertices`].
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
