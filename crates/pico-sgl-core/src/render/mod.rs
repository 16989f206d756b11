//! Render pipeline types: draw calls, the bounded submit queue, and the
//! rasterizer itself.
//!
//! Two logical workers cooperate per frame. The submission side fills the
//! SPSC queue through [`submit_blocking`]; the rasterization side drains
//! it through [`raster::Rasterizer::render`]. The queue is the only
//! channel between them, and by protocol at most one side rasterizes.

pub mod camera;
pub mod font;
pub mod mesh;
pub mod raster;
pub mod shader;
pub mod texture;

use crate::math::Mat4;
use self::mesh::Mesh;
use self::shader::Material;

/// Facing-based triangle rejection, by the sign of the screen-space
/// winding.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CullMode {
    /// Keep every triangle regardless of winding.
    None,
    /// Discard front-facing triangles.
    Front,
    /// Discard back-facing triangles.
    #[default]
    Back,
}

/// Depth comparison applied per fragment against the stored 16-bit value.
///
/// `Never` disables depth testing entirely: every fragment passes and the
/// depth buffer is left untouched. All other modes compare and, on pass,
/// write the new depth before shading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DepthTest {
    Never,
    #[default]
    Less,
    Greater,
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,
}

/// One request to rasterize one mesh with one material and one transform.
///
/// A draw call is an immutable snapshot: once submitted it must not be
/// mutated, because rasterization runs concurrently with submission of
/// the next call.
#[derive(Clone, Copy, Debug)]
pub struct DrawCall<'s> {
    pub mesh: &'s Mesh<'s>,
    pub model: Mat4,
    pub material: Material<'s>,
    pub cull: CullMode,
    pub depth_test: DepthTest,
}

/// Draw-call queue capacity.
///
/// Deep enough for the submission side to run ahead by a scene's worth of
/// calls; a full queue applies backpressure rather than dropping.
pub const DRAW_QUEUE_DEPTH: usize = 32;

/// The bounded SPSC draw-call queue shared by the two workers.
pub type DrawQueue<'s> = heapless::spsc::Queue<DrawCall<'s>, DRAW_QUEUE_DEPTH>;
/// Producer end, owned by the submission worker.
pub type DrawProducer<'q, 's> = heapless::spsc::Producer<'q, DrawCall<'s>>;
/// Consumer end, owned by the rasterization worker.
pub type DrawConsumer<'q, 's> = heapless::spsc::Consumer<'q, DrawCall<'s>>;

/// Enqueue a draw call, spinning while the queue is full.
///
/// A submitted call is never dropped and the queue never grows; a full
/// queue stalls the submission worker until the rasterizer catches up.
pub fn submit_blocking<'s>(producer: &mut DrawProducer<'_, 's>, call: DrawCall<'s>) {
    let mut call = call;
    loop {
        match producer.enqueue(call) {
            Ok(()) => return,
            Err(returned) => {
                call = returned;
                core::hint::spin_loop();
            }
        }
    }
}
