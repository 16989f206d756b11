//! PNG texture conversion: decode to RGBA8, pack to the renderer's
//! 4-bit-per-channel framebuffer format.

use std::path::Path;

use crate::error::AssetError;
use crate::identifier::generate_identifier;
use crate::types::TextureAsset;

pub fn load_and_convert(path: &Path) -> Result<TextureAsset, AssetError> {
    let img = image::open(path)
        .map_err(|e| AssetError::ImageDecode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Validation(format!(
            "zero-sized image: {}",
            path.display()
        )));
    }

    let pixels = img
        .pixels()
        .map(|p| pack_rgba4444(p.0[0], p.0[1], p.0[2], p.0[3]))
        .collect();

    Ok(TextureAsset {
        source: path.to_path_buf(),
        identifier: generate_identifier(path)?,
        width,
        height,
        pixels,
    })
}

/// Pack RGBA8 down to 4 bits per channel.
fn pack_rgba4444(r: u8, g: u8, b: u8, a: u8) -> u16 {
    ((r as u16 >> 4) << 12) | ((g as u16 >> 4) << 8) | ((b as u16 >> 4) << 4) | (a as u16 >> 4)
}
