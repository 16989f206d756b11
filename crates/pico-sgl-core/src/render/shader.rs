//! Shading: a tagged shader kind plus optional stage callbacks.
//!
//! The built-in kinds (flat, textured, wireframe) are dispatched by tag
//! on the hot path and never touch a function pointer. `Custom` shaders
//! supply per-triangle and/or per-fragment stages as plain `fn` pointers
//! reading a fixed-slot parameter block.

use crate::color::Color;
use crate::math::{Fx, Vec2, Vec3};
use crate::render::mesh::Vertex;
use crate::render::texture::Texture2D;

/// Input/output of the per-triangle stage.
///
/// Carries the three object-space vertices before projection, so a flat
/// shading decision here lets the rasterizer skip per-pixel work. This
/// stage runs once per triangle regardless of later culling or occlusion
/// and therefore must stay cheap.
#[derive(Clone, Copy, Debug)]
pub struct TriangleStage {
    pub v0: Vertex,
    pub v1: Vertex,
    pub v2: Vertex,
    /// Color used for every fragment unless a fragment stage overrides it.
    pub color: Color,
}

/// Input/output of the per-fragment stage.
#[derive(Clone, Copy, Debug)]
pub struct FragmentStage {
    /// Interpolated vertex normal, transformed into world space and
    /// normalized.
    pub normal: Vec3,
    /// Screen x, y and clip-space depth of the fragment.
    pub frag_coord: Vec3,
    /// Interpolated texture coordinate.
    pub uv: Vec2,
    /// Viewport size in pixels.
    pub resolution: Vec2,
    /// In: triangle color. Out: final fragment color.
    pub color: Color,
}

pub type TriangleFn = fn(&mut TriangleStage, &ShaderParams);
pub type FragmentFn = fn(&mut FragmentStage, &ShaderParams);

/// Optional stage callbacks of a custom shader.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShaderStages {
    pub triangle: Option<TriangleFn>,
    pub fragment: Option<FragmentFn>,
}

/// Shader kind tag. Selects the rasterizer's dispatch path.
#[derive(Clone, Copy, Debug)]
pub enum Shader {
    /// One color per triangle, no per-fragment work.
    Flat,
    /// Per-fragment texture sampling with a UV scale.
    Textured,
    /// Draws the three edges instead of filling; no depth interaction.
    Wireframe,
    /// User-provided stages.
    Custom(ShaderStages),
}

/// Fixed-slot parameter block for custom shaders. Slots a shader does not
/// read stay at their defaults; no allocation, no type erasure.
#[derive(Clone, Copy, Debug)]
pub struct CustomParams<'a> {
    pub texture: Option<&'a Texture2D<'a>>,
    pub colors: [Color; 2],
    pub vectors: [Vec3; 2],
    pub scalars: [Fx; 2],
}

impl Default for CustomParams<'_> {
    fn default() -> Self {
        Self {
            texture: None,
            colors: [Color::WHITE; 2],
            vectors: [Vec3::ZERO; 2],
            scalars: [Fx::ZERO; 2],
        }
    }
}

/// Parameter block matching each shader kind.
#[derive(Clone, Copy, Debug)]
pub enum ShaderParams<'a> {
    Flat { color: Color },
    Textured { texture: &'a Texture2D<'a>, scale: Vec2 },
    Wireframe { color: Color },
    Custom(CustomParams<'a>),
}

/// One shader instance bound to one parameter block.
///
/// The constructors are the parameter-block factory: each allocates the
/// block shape its shader kind reads.
#[derive(Clone, Copy, Debug)]
pub struct Material<'a> {
    pub shader: Shader,
    pub params: ShaderParams<'a>,
}

impl<'a> Material<'a> {
    pub const fn flat(color: Color) -> Self {
        Self {
            shader: Shader::Flat,
            params: ShaderParams::Flat { color },
        }
    }

    pub const fn textured(texture: &'a Texture2D<'a>, scale: Vec2) -> Self {
        Self {
            shader: Shader::Textured,
            params: ShaderParams::Textured { texture, scale },
        }
    }

    pub const fn wireframe(color: Color) -> Self {
        Self {
            shader: Shader::Wireframe,
            params: ShaderParams::Wireframe { color },
        }
    }

    pub const fn custom(stages: ShaderStages, params: CustomParams<'a>) -> Self {
        Self {
            shader: Shader::Custom(stages),
            params: ShaderParams::Custom(params),
        }
    }
}
