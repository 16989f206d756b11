//! Sampled 2D textures over borrowed packed-pixel data.

use crate::color::{Color, Rgba4444};
use crate::math::{Fx, Vec2};

/// How `sample` reads between texel centers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SampleMode {
    #[default]
    Nearest,
    /// Four-tap blend. Mostly useful on the desktop host; the 4-bit
    /// framebuffer swallows most of the gradient anyway.
    Bilinear,
}

/// Packed-pixel image with UV sampling.
///
/// Sampling wraps via modulo on both axes rather than clamping, so UVs
/// outside [0, 1) tile the image.
#[derive(Clone, Copy, Debug)]
pub struct Texture2D<'a> {
    pub data: &'a [Rgba4444],
    pub width: u32,
    pub height: u32,
    pub mode: SampleMode,
}

impl<'a> Texture2D<'a> {
    pub const fn new(data: &'a [Rgba4444], width: u32, height: u32, mode: SampleMode) -> Self {
        Self {
            data,
            width,
            height,
            mode,
        }
    }

    /// Texel fetch by integer coordinate. Callers pass in-range values;
    /// `blit` clips before fetching, `sample` wraps.
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.data[(y * self.width + x) as usize].into()
    }

    pub fn sample(&self, uv: Vec2) -> Color {
        match self.mode {
            SampleMode::Nearest => {
                let x = (uv.x().abs() % Fx::ONE) * Fx::from_int(self.width as i32);
                let y = (uv.y().abs() % Fx::ONE) * Fx::from_int(self.height as i32);
                self.get_pixel(x.to_i32() as u32 % self.width, y.to_i32() as u32 % self.height)
            }
            SampleMode::Bilinear => {
                let x = uv.x() * Fx::from_int(self.width as i32);
                let y = uv.y() * Fx::from_int(self.height as i32);

                let x0 = x.floor();
                let y0 = y.floor();
                let x_weight = x - x0;
                let y_weight = y - y0;

                let x0 = wrap(x0.to_i32(), self.width);
                let y0 = wrap(y0.to_i32(), self.height);
                let x1 = (x0 + 1) % self.width;
                let y1 = (y0 + 1) % self.height;

                let c00 = self.get_pixel(x0, y0);
                let c01 = self.get_pixel(x1, y0);
                let c10 = self.get_pixel(x0, y1);
                let c11 = self.get_pixel(x1, y1);

                let top = c00.lerp(c01, x_weight);
                let bottom = c10.lerp(c11, x_weight);
                top.lerp(bottom, y_weight)
            }
        }
    }
}

fn wrap(v: i32, extent: u32) -> u32 {
    v.rem_euclid(extent as i32) as u32
}
