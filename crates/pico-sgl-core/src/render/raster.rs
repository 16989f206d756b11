//! The rasterizer: frame lifecycle, draw-call execution, and the
//! edge-function triangle fill.
//!
//! One `Rasterizer` value is the whole render context: framebuffer,
//! depth buffer, and per-frame camera snapshot. There are no globals;
//! construct one and pass it by reference.
//!
//! Frame protocol: `prepare` (clear + snapshot camera) → any number of
//! `submit_blocking` on the producer side → `render` per queued call on
//! the consumer side → `finish` (drain barrier). Only after `finish` may
//! the submitting side read the framebuffer.
//!
//! Interpolation is affine in screen space, not perspective-correct, and
//! there is no per-triangle clipping beyond whole-call frustum rejection:
//! a triangle straddling a clip plane can project to coordinates outside
//! the fixed-point multiply range and render incorrectly. Known and
//! accepted for this renderer's scale.

use pico_sgl_hal::DisplayLink;

use crate::color::{Color, Rgba4444};
use crate::math::{
    edge_function, vec2, vec3, BoundingBox2, BoundingVolume, Fx, Mat4, Vec2, Vec3, Vec4,
};
use crate::render::camera::{volume_in_frustum, Camera};
use crate::render::font::Font;
use crate::render::shader::{FragmentStage, Shader, ShaderParams, TriangleStage};
use crate::render::texture::Texture2D;
use crate::render::{CullMode, DepthTest, DrawCall, DrawConsumer};
use crate::{FRAME_HEIGHT, FRAME_PIXELS, FRAME_WIDTH};

/// Depth value the buffer is cleared to (the far plane).
const DEPTH_CLEAR: u16 = u16::MAX;

/// Software rasterizer sized to the display resolution.
pub struct Rasterizer {
    frame: [Rgba4444; FRAME_PIXELS],
    depth: [u16; FRAME_PIXELS],

    /// Viewport in pixels, intersected with every triangle's bounds.
    bounds: BoundingBox2,
    /// NDC → pixel mapping, constant for the lifetime of the context.
    raster_mat: Mat4,

    /// Camera snapshot taken at `prepare`; submission-side camera writes
    /// during the frame cannot affect calls already in flight.
    view_proj: Mat4,
    raster_view_proj: Mat4,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        let w = Fx::from_int(FRAME_WIDTH as i32);
        let h = Fx::from_int(FRAME_HEIGHT as i32);

        let raster_mat = Mat4::scale(vec3(w, h, Fx::ONE))
            * Mat4::translate(vec3(Fx::HALF, Fx::HALF, Fx::ZERO))
            * Mat4::scale(vec3(Fx::HALF, Fx::HALF, Fx::ONE));

        Self {
            frame: [Rgba4444::from_bits(0); FRAME_PIXELS],
            depth: [DEPTH_CLEAR; FRAME_PIXELS],
            bounds: BoundingBox2::new(vec2(Fx::ZERO, Fx::ZERO), vec2(w, h)),
            raster_mat,
            view_proj: Mat4::identity(),
            raster_view_proj: Mat4::identity(),
        }
    }

    /// Begin a frame: clear color and depth, snapshot the camera.
    ///
    /// Must complete before the first `submit_blocking` of the frame.
    pub fn prepare(&mut self, camera: &mut Camera, clear: Color) {
        let clear: Rgba4444 = clear.into();
        self.frame.fill(clear);
        self.depth.fill(DEPTH_CLEAR);

        self.view_proj = camera.projection_matrix() * camera.view_matrix();
        self.raster_view_proj = self.raster_mat * self.view_proj;
    }

    /// Pop and rasterize one queued draw call. Returns whether more
    /// calls remain in the queue.
    pub fn render(&mut self, queue: &mut DrawConsumer<'_, '_>) -> bool {
        if let Some(call) = queue.dequeue() {
            self.draw_mesh(&call);
        }
        queue.peek().is_some()
    }

    /// Frame barrier: drain the queue to empty. After this returns the
    /// submitting worker may read the framebuffer.
    pub fn finish(&mut self, queue: &mut DrawConsumer<'_, '_>) {
        while queue.peek().is_some() {
            self.render(queue);
        }
    }

    pub fn framebuffer(&self) -> &[Rgba4444] {
        &self.frame
    }

    pub fn depth_buffer(&self) -> &[u16] {
        &self.depth
    }

    /// Hand the finished frame to the display, observing the busy/flip
    /// handshake: any outstanding transfer is waited out first.
    pub fn present<D: DisplayLink>(&self, display: &mut D) -> Result<(), D::Error> {
        display.wait_idle();
        display.present(
            Rgba4444::as_wire_words(&self.frame),
            FRAME_WIDTH,
            FRAME_HEIGHT,
        )
    }

    /// Bounds-checked pixel write; out-of-viewport writes are dropped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < FRAME_WIDTH as i32 && y >= 0 && y < FRAME_HEIGHT as i32 {
            self.frame[y as usize * FRAME_WIDTH + x as usize] = color.into();
        }
    }

    /// Fill a screen-space box, clipped to the viewport.
    pub fn draw_box(&mut self, bb: BoundingBox2, color: Color) {
        let bbi = self.bounds.intersect(&bb);
        let packed: Rgba4444 = color.into();

        let x0 = bbi.min.x().floor().to_i32().clamp(0, FRAME_WIDTH as i32);
        let x1 = bbi.max.x().ceil().to_i32().clamp(0, FRAME_WIDTH as i32);
        let y0 = bbi.min.y().floor().to_i32().clamp(0, FRAME_HEIGHT as i32);
        let y1 = bbi.max.y().ceil().to_i32().clamp(0, FRAME_HEIGHT as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                self.frame[y as usize * FRAME_WIDTH + x as usize] = packed;
            }
        }
    }

    /// Bresenham line with a square brush of `width` pixels.
    pub fn draw_line(&mut self, start: (i32, i32), end: (i32, i32), color: Color, width: u8) {
        let (mut x0, mut y0) = start;
        let (x1, y1) = end;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        let w = width.max(1) as i32;
        let half = w / 2;

        loop {
            for by in 0..w {
                for bx in 0..w {
                    self.put_pixel(x0 + bx - half, y0 + by - half, color);
                }
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// World-space line through the frame's camera snapshot.
    pub fn draw_line_3d(&mut self, p1: Vec3, p2: Vec3, color: Color, width: u8) {
        let a = self.raster_view_proj.transform_point(p1).homogenize();
        let b = self.raster_view_proj.transform_point(p2).homogenize();
        self.draw_line(
            (a.x().to_i32(), a.y().to_i32()),
            (b.x().to_i32(), b.y().to_i32()),
            color,
            width,
        );
    }

    /// Copy a texture to the framebuffer at `pos`, clipped to the viewport.
    pub fn blit(&mut self, tex: &Texture2D<'_>, pos: (i32, i32)) {
        let x0 = pos.0.max(0);
        let y0 = pos.1.max(0);
        let x1 = (pos.0 + tex.width as i32).min(FRAME_WIDTH as i32);
        let y1 = (pos.1 + tex.height as i32).min(FRAME_HEIGHT as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                let texel = tex.get_pixel((x - pos.0) as u32, (y - pos.1) as u32);
                self.frame[y as usize * FRAME_WIDTH + x as usize] = texel.into();
            }
        }
    }

    /// Draw a string of glyph indices (one byte per character), advancing
    /// by the fixed glyph width. Each bitmap row maps to one scanline.
    pub fn draw_text(&mut self, font: &Font<'_>, text: &str, pos: (i32, i32), color: Color) {
        let advance = font.glyph_width() as i32;
        let bytes_per_row = font.bytes_per_row();

        for (i, ch) in text.bytes().enumerate() {
            let Some(bitmap) = font.glyph(ch as usize) else {
                continue;
            };
            let gx = pos.0 + i as i32 * advance;

            for row in 0..font.glyph_height() as usize {
                let row_bits = &bitmap[row * bytes_per_row..(row + 1) * bytes_per_row];
                for col in 0..font.glyph_width() as usize {
                    if row_bits[col / 8] & (0x80 >> (col % 8)) != 0 {
                        self.put_pixel(gx + col as i32, pos.1 + row as i32, color);
                    }
                }
            }
        }
    }

    /// Debug overlay: the twelve edges of a bounding volume under
    /// `model`. Runs as a separate sequential pass after rasterization
    /// (call it between `finish` and `present`).
    pub fn draw_volume(&mut self, volume: &BoundingVolume, model: &Mat4, color: Color) {
        let mut corners = volume.corners();
        for c in corners.iter_mut() {
            *c = model.transform_point(*c).xyz();
        }

        const EDGES: [(usize, usize); 12] = [
            (0, 1),
            (0, 2),
            (1, 3),
            (2, 3),
            (4, 5),
            (4, 6),
            (5, 7),
            (6, 7),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        for (a, b) in EDGES {
            self.draw_line_3d(corners[a], corners[b], color, 1);
        }
    }

    /// Execute one draw call: frustum rejection, then the per-triangle
    /// pipeline over the index buffer.
    fn draw_mesh(&mut self, call: &DrawCall<'_>) {
        if !volume_in_frustum(&self.view_proj, &call.mesh.volume, &call.model) {
            return;
        }

        // Combined object → pixel matrix, once per draw call.
        let rmvp = self.raster_view_proj * call.model;

        let mesh = call.mesh;
        for tri_index in 0..mesh.triangle_count() {
            let idx = tri_index * 3;
            let (i0, i1, i2) = (
                mesh.indices[idx] as usize,
                mesh.indices[idx + 1] as usize,
                mesh.indices[idx + 2] as usize,
            );
            if i0 >= mesh.vertices.len() || i1 >= mesh.vertices.len() || i2 >= mesh.vertices.len()
            {
                continue;
            }

            // Per-triangle stage on object-space data, before projection.
            let mut tri = TriangleStage {
                v0: mesh.vertices[i0],
                v1: mesh.vertices[i1],
                v2: mesh.vertices[i2],
                color: Color::PURPLE,
            };
            match (&call.material.shader, &call.material.params) {
                (Shader::Flat, ShaderParams::Flat { color }) => tri.color = *color,
                (Shader::Custom(stages), params) => {
                    if let Some(triangle_fn) = stages.triangle {
                        triangle_fn(&mut tri, params);
                    }
                }
                _ => {}
            }

            // Project and homogenize the three corners.
            let pv0 = (rmvp * Vec4::from_vec3(tri.v0.position, Fx::ONE)).homogenize();
            let pv1 = (rmvp * Vec4::from_vec3(tri.v1.position, Fx::ONE)).homogenize();
            let pv2 = (rmvp * Vec4::from_vec3(tri.v2.position, Fx::ONE)).homogenize();

            let bb = BoundingBox2::from_triangle(pv0.xy(), pv1.xy(), pv2.xy());
            let bbi = self.bounds.intersect(&bb);
            if bbi.is_empty() {
                continue;
            }

            if let (Shader::Wireframe, ShaderParams::Wireframe { color }) =
                (&call.material.shader, &call.material.params)
            {
                let color = *color;
                let p0 = (pv0.x().to_i32(), pv0.y().to_i32());
                let p1 = (pv1.x().to_i32(), pv1.y().to_i32());
                let p2 = (pv2.x().to_i32(), pv2.y().to_i32());
                self.draw_line(p0, p1, color, 1);
                self.draw_line(p1, p2, color, 1);
                self.draw_line(p2, p0, color, 1);
                continue;
            }

            // Winding from the z of the 2D cross product.
            let winding = (pv1 - pv0).cross(pv2 - pv0).z();
            match call.cull {
                CullMode::Back if winding > Fx::ZERO => continue,
                CullMode::Front if winding < Fx::ZERO => continue,
                _ => {}
            }

            self.fill_triangle(call, &tri, pv0, pv1, pv2, bbi);
        }
    }

    /// Edge-function fill with incremental per-column/per-row deltas.
    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(
        &mut self,
        call: &DrawCall<'_>,
        tri: &TriangleStage,
        pv0: Vec3,
        pv1: Vec3,
        pv2: Vec3,
        bbi: BoundingBox2,
    ) {
        let area = edge_function(pv0, pv1, pv2);
        // Zero projected area: nothing to fill, and it guards the
        // barycentric division below.
        if area == Fx::ZERO {
            return;
        }

        let x0 = bbi.min.x().floor().to_i32().clamp(0, FRAME_WIDTH as i32);
        let x1 = bbi.max.x().ceil().to_i32().clamp(0, FRAME_WIDTH as i32);
        let y0 = bbi.min.y().floor().to_i32().clamp(0, FRAME_HEIGHT as i32);
        let y1 = bbi.max.y().ceil().to_i32().clamp(0, FRAME_HEIGHT as i32);

        // Seed the three edge values at the box origin, then step by
        // constant deltas instead of re-evaluating per pixel.
        let origin = vec3(Fx::from_int(x0), Fx::from_int(y0), Fx::ZERO);
        let mut w0_row = edge_function(pv1, pv2, origin);
        let mut w1_row = edge_function(pv2, pv0, origin);
        let mut w2_row = edge_function(pv0, pv1, origin);

        // d/dx of E(a, b, p) is (b.y - a.y); d/dy is (a.x - b.x).
        let w0_dx = pv2.y() - pv1.y();
        let w1_dx = pv0.y() - pv2.y();
        let w2_dx = pv1.y() - pv0.y();
        let w0_dy = pv1.x() - pv2.x();
        let w1_dy = pv2.x() - pv0.x();
        let w2_dy = pv0.x() - pv1.x();

        let positive_area = area > Fx::ZERO;
        let depth_z = vec3(pv0.z(), pv1.z(), pv2.z());

        for y in y0..y1 {
            let mut w0 = w0_row;
            let mut w1 = w1_row;
            let mut w2 = w2_row;

            for x in x0..x1 {
                // Inside iff all three edges share the sign of the total
                // signed area; boundary pixels count as inside.
                let inside = if positive_area {
                    w0 >= Fx::ZERO && w1 >= Fx::ZERO && w2 >= Fx::ZERO
                } else {
                    w0 <= Fx::ZERO && w1 <= Fx::ZERO && w2 <= Fx::ZERO
                };

                if inside {
                    let weights = vec3(w0 / area, w1 / area, w2 / area);
                    let z = depth_z.dot(weights);

                    if z >= Fx::ZERO && z <= Fx::ONE {
                        // Q16 cannot scale by 65535 without overflow, so
                        // the quantization widens through f32.
                        let z16 = (z.to_f32() * 65535.0) as u16;
                        let pixel = y as usize * FRAME_WIDTH + x as usize;

                        if depth_passes(call.depth_test, z16, self.depth[pixel]) {
                            if call.depth_test != DepthTest::Never {
                                self.depth[pixel] = z16;
                            }
                            let color = shade_fragment(call, tri, weights, x, y, z);
                            self.frame[pixel] = color.into();
                        }
                    }
                }

                w0 += w0_dx;
                w1 += w1_dx;
                w2 += w2_dx;
            }

            w0_row += w0_dy;
            w1_row += w1_dy;
            w2_row += w2_dy;
        }
    }
}

fn depth_passes(mode: DepthTest, z: u16, stored: u16) -> bool {
    match mode {
        DepthTest::Never => true,
        DepthTest::Less => z < stored,
        DepthTest::Greater => z > stored,
        DepthTest::Equal => z == stored,
        DepthTest::NotEqual => z != stored,
        DepthTest::LessEqual => z <= stored,
        DepthTest::GreaterEqual => z >= stored,
    }
}

/// Per-fragment color. Built-in kinds bypass the callback path; the
/// interpolants are only computed for the kinds that read them.
fn shade_fragment(
    call: &DrawCall<'_>,
    tri: &TriangleStage,
    weights: Vec3,
    x: i32,
    y: i32,
    z: Fx,
) -> Color {
    match (&call.material.shader, &call.material.params) {
        (Shader::Textured, ShaderParams::Textured { texture, scale }) => {
            let uv = interpolate_uv(tri, weights);
            texture.sample(vec2(uv.x() * scale.x(), uv.y() * scale.y()))
        }
        (Shader::Custom(stages), params) => match stages.fragment {
            Some(fragment_fn) => {
                let normal = tri.v0.normal * weights.x()
                    + tri.v1.normal * weights.y()
                    + tri.v2.normal * weights.z();
                let normal = call.model.transform_direction(normal).normalize();

                let mut io = FragmentStage {
                    normal,
                    frag_coord: vec3(Fx::from_int(x), Fx::from_int(y), z),
                    uv: interpolate_uv(tri, weights),
                    resolution: vec2(
                        Fx::from_int(FRAME_WIDTH as i32),
                        Fx::from_int(FRAME_HEIGHT as i32),
                    ),
                    color: tri.color,
                };
                fragment_fn(&mut io, params);
                io.color
            }
            None => tri.color,
        },
        _ => tri.color,
    }
}

fn interpolate_uv(tri: &TriangleStage, weights: Vec3) -> Vec2 {
    tri.v0.uv * weights.x() + tri.v1.uv * weights.y() + tri.v2.uv * weights.z()
}
