//! Software 3D rendering core: fixed-point math, packed color formats,
//! meshes, materials, camera, and the triangle rasterizer.
//!
//! Everything here is `no_std` and allocation-free so the same crate
//! drives both the embedded panel target and the desktop debug host.

#![no_std]

pub mod color;
pub mod input;
pub mod math;
pub mod render;

/// Display width in pixels.
pub const FRAME_WIDTH: usize = 120;
/// Display height in pixels.
pub const FRAME_HEIGHT: usize = 120;
/// Pixels per frame.
pub const FRAME_PIXELS: usize = FRAME_WIDTH * FRAME_HEIGHT;
