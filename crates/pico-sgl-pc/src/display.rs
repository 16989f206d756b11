//! PNG-file display backend: each presented frame becomes a numbered
//! image in the output directory.
//!
//! A real panel driver would latch a DMA transfer here and report busy
//! until the scan-out finishes; files are written synchronously, so this
//! implementation is never busy.

use std::path::PathBuf;

use image::{ImageBuffer, Rgba};
use pico_sgl_core::color::{Color, Rgba4444};
use pico_sgl_hal::DisplayLink;

pub struct PngDisplay {
    out_dir: PathBuf,
    frame_index: usize,
}

impl PngDisplay {
    pub fn new(out_dir: PathBuf) -> std::io::Result<Self> {
        std::fs::create_dir_all(&out_dir)?;
        Ok(Self {
            out_dir,
            frame_index: 0,
        })
    }
}

impl DisplayLink for PngDisplay {
    type Error = image::ImageError;

    fn busy(&self) -> bool {
        false
    }

    fn wait_idle(&mut self) {}

    fn present(&mut self, pixels: &[u16], width: usize, height: usize) -> Result<(), Self::Error> {
        let mut img = ImageBuffer::new(width as u32, height as u32);
        for (i, pixel) in img.pixels_mut().enumerate() {
            let c: Color = Rgba4444::from_bits(pixels[i]).into();
            *pixel = Rgba([c.r, c.g, c.b, c.a]);
        }

        let path = self.out_dir.join(format!("frame_{:04}.png", self.frame_index));
        self.frame_index += 1;
        img.save(&path)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
