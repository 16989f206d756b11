//! Demo scene definitions and per-frame submission logic.

use pico_sgl_core::color::Color;
use pico_sgl_core::math::{vec2, vec3, Fx, Mat4, Vec3};
use pico_sgl_core::render::mesh::Mesh;
use pico_sgl_core::render::shader::{
    CustomParams, FragmentStage, Material, ShaderParams, ShaderStages,
};
use pico_sgl_core::render::texture::Texture2D;
use pico_sgl_core::render::{submit_blocking, CullMode, DepthTest, DrawCall, DrawProducer};

/// Active demo selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Demo {
    #[default]
    FlatCube,
    TexturedCube,
    LitPyramid,
}

impl Demo {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Demo::FlatCube),
            1 => Some(Demo::TexturedCube),
            2 => Some(Demo::LitPyramid),
            _ => None,
        }
    }
}

/// Degrees of model rotation added per frame.
pub const SPIN_PER_FRAME: f32 = 3.0;

/// Directional diffuse stage: modulates the sampled or flat color by
/// clamped N·L against the light direction in the parameter block.
fn diffuse_fragment(io: &mut FragmentStage, params: &ShaderParams) {
    let ShaderParams::Custom(custom) = params else {
        return;
    };
    let light_dir = custom.vectors[0];
    let light = custom.colors[0];

    let diff = io
        .normal
        .dot(light_dir)
        .clamp(Fx::from_f32(0.02), Fx::ONE);

    let base = match custom.texture {
        Some(texture) => texture.sample(io.uv),
        None => io.color,
    };

    let scale = |channel: u8, tint: u8| -> u8 {
        let lit = (channel as u32 * tint as u32) >> 8;
        (Fx::from_int(lit as i32) * diff).to_i32().clamp(0, 255) as u8
    };
    io.color = Color::new(
        scale(base.r, light.r),
        scale(base.g, light.g),
        scale(base.b, light.b),
        255,
    );
}

/// Material for the lit demo: key light from the upper left.
pub fn lit_material<'a>(texture: Option<&'a Texture2D<'a>>) -> Material<'a> {
    let stages = ShaderStages {
        triangle: None,
        fragment: Some(diffuse_fragment),
    };
    let params = CustomParams {
        texture,
        colors: [Color::new(255, 240, 220, 255), Color::BLACK],
        vectors: [
            vec3(Fx::from_f32(-0.57), Fx::from_f32(0.57), Fx::from_f32(-0.57)),
            Vec3::ZERO,
        ],
        scalars: [Fx::ZERO; 2],
    };
    Material::custom(stages, params)
}

pub fn textured_material<'a>(texture: &'a Texture2D<'a>) -> Material<'a> {
    Material::textured(texture, vec2(Fx::ONE, Fx::ONE))
}

/// Submit one frame of the selected demo.
pub fn submit_frame<'s>(
    demo: Demo,
    producer: &mut DrawProducer<'_, 's>,
    cube: &'s Mesh<'s>,
    pyramid: &'s Mesh<'s>,
    flat: Material<'s>,
    textured: Material<'s>,
    lit: Material<'s>,
    wire: Material<'s>,
    angle_deg: f32,
) {
    let spin = Mat4::from_euler(vec3(
        Fx::from_f32(angle_deg * 0.37),
        Fx::from_f32(angle_deg),
        Fx::ZERO,
    ));

    match demo {
        Demo::FlatCube => {
            submit_blocking(
                producer,
                DrawCall {
                    mesh: cube,
                    model: spin,
                    material: flat,
                    cull: CullMode::Back,
                    depth_test: DepthTest::Less,
                },
            );
            // Wireframe shell a touch larger than the solid cube.
            let shell = spin * Mat4::scale(vec3(
                Fx::from_f32(1.02),
                Fx::from_f32(1.02),
                Fx::from_f32(1.02),
            ));
            submit_blocking(
                producer,
                DrawCall {
                    mesh: cube,
                    model: shell,
                    material: wire,
                    cull: CullMode::None,
                    depth_test: DepthTest::Never,
                },
            );
        }
        Demo::TexturedCube => {
            submit_blocking(
                producer,
                DrawCall {
                    mesh: cube,
                    model: spin,
                    material: textured,
                    cull: CullMode::Back,
                    depth_test: DepthTest::Less,
                },
            );
        }
        Demo::LitPyramid => {
            let model = spin * Mat4::translate(vec3(Fx::ZERO, Fx::from_f32(-0.5), Fx::ZERO));
            submit_blocking(
                producer,
                DrawCall {
                    mesh: pyramid,
                    model,
                    material: lit,
                    cull: CullMode::Back,
                    depth_test: DepthTest::Less,
                },
            );
        }
    }
}
