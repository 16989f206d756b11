//! Desktop debug host for the pico-sgl renderer.
//!
//! Runs a demo scene through the full pipeline at the panel resolution
//! and presents each frame as a PNG. Single-threaded: render commands
//! are drained in the main loop, so no inter-core queue pressure exists
//! here; the two-worker protocol is exercised the same way the firmware
//! exercises it, just sequentially.
//!
//! Usage: pico-sgl-pc [demo 0-2] [frames] [out_dir] [--overlay]

mod assets;
mod demos;
mod display;

use std::path::PathBuf;

use pico_sgl_core::color::Color;
use pico_sgl_core::math::{vec3, Fx};
use pico_sgl_core::render::camera::Camera;
use pico_sgl_core::render::mesh::Mesh;
use pico_sgl_core::render::raster::Rasterizer;
use pico_sgl_core::render::shader::Material;
use pico_sgl_core::render::texture::{SampleMode, Texture2D};
use pico_sgl_core::render::DrawQueue;
use pico_sgl_core::{FRAME_HEIGHT, FRAME_WIDTH};

use demos::Demo;
use display::PngDisplay;

struct Options {
    demo: Demo,
    frames: usize,
    out_dir: PathBuf,
    overlay: bool,
}

fn parse_args() -> Option<Options> {
    let mut opts = Options {
        demo: Demo::default(),
        frames: 24,
        out_dir: PathBuf::from("frames"),
        overlay: false,
    };

    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "--overlay" {
            opts.overlay = true;
            continue;
        }
        match positional {
            0 => opts.demo = Demo::from_index(arg.parse().ok()?)?,
            1 => opts.frames = arg.parse().ok()?,
            2 => opts.out_dir = PathBuf::from(arg),
            _ => return None,
        }
        positional += 1;
    }
    Some(opts)
}

fn main() {
    env_logger::init();

    let Some(opts) = parse_args() else {
        log::error!("usage: pico-sgl-pc [demo 0-2] [frames] [out_dir] [--overlay]");
        std::process::exit(1);
    };
    log::info!(
        "pico-sgl-pc: demo {:?}, {} frames, {}x{}",
        opts.demo,
        opts.frames,
        FRAME_WIDTH,
        FRAME_HEIGHT
    );

    // Startup failures are fatal; per-frame issues never are.
    let mut display = match PngDisplay::new(opts.out_dir.clone()) {
        Ok(d) => d,
        Err(e) => {
            log::error!("cannot create output dir {}: {e}", opts.out_dir.display());
            std::process::exit(1);
        }
    };

    // Static scene data.
    let cube = Mesh::new(&assets::CUBE_VERTICES, &assets::CUBE_INDICES);
    let pyramid = Mesh::new(&assets::PYRAMID_VERTICES, &assets::PYRAMID_INDICES);
    let checkerboard = Texture2D::new(
        &assets::CHECKERBOARD,
        assets::CHECKERBOARD_SIZE,
        assets::CHECKERBOARD_SIZE,
        SampleMode::Nearest,
    );

    let flat = Material::flat(Color::GREEN);
    let textured = demos::textured_material(&checkerboard);
    let lit = demos::lit_material(None);
    let wire = Material::wireframe(Color::CYAN);

    // Camera five units back, looking at the origin along +Z.
    let mut camera = Camera::new(
        Fx::from_int(45),
        Fx::from_f32(0.1),
        Fx::from_int(100),
        Fx::ONE,
    );
    camera.set_position(vec3(Fx::ZERO, Fx::ZERO, Fx::from_int(-5)));

    let mut queue = DrawQueue::new();
    let (mut producer, mut consumer) = queue.split();
    let mut raster = Rasterizer::new();

    let mut angle = 0.0f32;
    for frame in 0..opts.frames {
        raster.prepare(&mut camera, Color::new(16, 16, 24, 255));

        demos::submit_frame(
            opts.demo,
            &mut producer,
            &cube,
            &pyramid,
            flat,
            textured,
            lit,
            wire,
            angle,
        );

        raster.finish(&mut consumer);

        if opts.overlay {
            let mesh = match opts.demo {
                Demo::LitPyramid => &pyramid,
                _ => &cube,
            };
            raster.draw_volume(&mesh.volume, &pico_sgl_core::math::Mat4::identity(), Color::YELLOW);
        }

        if let Err(e) = raster.present(&mut display) {
            log::error!("present failed on frame {frame}: {e}");
            std::process::exit(1);
        }

        angle = (angle + demos::SPIN_PER_FRAME) % 360.0;
    }

    log::info!("done: {} frames in {}", opts.frames, opts.out_dir.display());
}
