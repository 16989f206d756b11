//! Tests for the 2D drawing layer: pixels, boxes, lines, blits, text,
//! and the debug volume overlay.

use pico_sgl_core::color::{Color, Rgba4444};
use pico_sgl_core::math::{vec2, vec3, BoundingBox2, BoundingVolume, Fx, Mat4};
use pico_sgl_core::render::camera::Camera;
use pico_sgl_core::render::font::{Font, FontError, PSF2_MAGIC};
use pico_sgl_core::render::raster::Rasterizer;
use pico_sgl_core::render::texture::{SampleMode, Texture2D};
use pico_sgl_core::{FRAME_HEIGHT, FRAME_WIDTH};

fn fx(v: f32) -> Fx {
    Fx::from_f32(v)
}

fn fresh_raster() -> Rasterizer {
    let mut camera = Camera::new(fx(90.0), fx(0.1), fx(100.0), fx(1.0));
    let mut raster = Rasterizer::new();
    raster.prepare(&mut camera, Color::BLACK);
    raster
}

fn pixel(raster: &Rasterizer, x: usize, y: usize) -> Rgba4444 {
    raster.framebuffer()[y * FRAME_WIDTH + x]
}

mod pixels {
    use super::*;

    #[test]
    fn put_pixel_writes_in_bounds() {
        let mut raster = fresh_raster();
        raster.put_pixel(5, 7, Color::WHITE);
        assert_eq!(pixel(&raster, 5, 7), Color::WHITE.into());
    }

    #[test]
    fn put_pixel_drops_out_of_bounds_writes() {
        let mut raster = fresh_raster();
        raster.put_pixel(-1, 0, Color::WHITE);
        raster.put_pixel(0, -1, Color::WHITE);
        raster.put_pixel(FRAME_WIDTH as i32, 0, Color::WHITE);
        raster.put_pixel(0, FRAME_HEIGHT as i32, Color::WHITE);

        let black: Rgba4444 = Color::BLACK.into();
        assert!(raster.framebuffer().iter().all(|&p| p == black));
    }
}

mod boxes {
    use super::*;

    #[test]
    fn draw_box_fills_interior() {
        let mut raster = fresh_raster();
        let bb = BoundingBox2::new(vec2(fx(10.0), fx(20.0)), vec2(fx(14.0), fx(24.0)));
        raster.draw_box(bb, Color::GREEN);

        assert_eq!(pixel(&raster, 10, 20), Color::GREEN.into());
        assert_eq!(pixel(&raster, 13, 23), Color::GREEN.into());
        assert_eq!(pixel(&raster, 14, 24), Color::BLACK.into());
        assert_eq!(pixel(&raster, 9, 20), Color::BLACK.into());
    }

    #[test]
    fn draw_box_clips_to_viewport() {
        let mut raster = fresh_raster();
        let bb = BoundingBox2::new(vec2(fx(-30.0), fx(-30.0)), vec2(fx(5.0), fx(5.0)));
        raster.draw_box(bb, Color::GREEN);
        assert_eq!(pixel(&raster, 0, 0), Color::GREEN.into());
        assert_eq!(pixel(&raster, 4, 4), Color::GREEN.into());
        assert_eq!(pixel(&raster, 5, 5), Color::BLACK.into());
    }
}

mod lines {
    use super::*;

    #[test]
    fn horizontal_line_covers_both_endpoints() {
        let mut raster = fresh_raster();
        raster.draw_line((10, 50), (30, 50), Color::WHITE, 1);
        for x in 10..=30 {
            assert_eq!(pixel(&raster, x, 50), Color::WHITE.into(), "x = {x}");
        }
        assert_eq!(pixel(&raster, 9, 50), Color::BLACK.into());
        assert_eq!(pixel(&raster, 31, 50), Color::BLACK.into());
    }

    #[test]
    fn diagonal_line_is_connected() {
        let mut raster = fresh_raster();
        raster.draw_line((0, 0), (20, 20), Color::WHITE, 1);
        for i in 0..=20 {
            assert_eq!(pixel(&raster, i, i), Color::WHITE.into(), "i = {i}");
        }
    }

    #[test]
    fn wide_line_paints_a_brush() {
        let mut raster = fresh_raster();
        raster.draw_line((50, 50), (60, 50), Color::WHITE, 3);
        // 3-pixel brush: row above and below are covered too.
        assert_eq!(pixel(&raster, 55, 49), Color::WHITE.into());
        assert_eq!(pixel(&raster, 55, 50), Color::WHITE.into());
        assert_eq!(pixel(&raster, 55, 51), Color::WHITE.into());
    }

    #[test]
    fn line_leaving_the_viewport_is_clipped_not_wrapped() {
        let mut raster = fresh_raster();
        raster.draw_line((110, 5), (140, 5), Color::WHITE, 1);
        assert_eq!(pixel(&raster, 115, 5), Color::WHITE.into());
        // Nothing wrapped onto the next row.
        for x in 0..30 {
            assert_eq!(pixel(&raster, x, 6), Color::BLACK.into(), "x = {x}");
        }
    }
}

mod blits {
    use super::*;

    #[test]
    fn blit_copies_texels() {
        let texels = [
            Rgba4444::from(Color::RED),
            Rgba4444::from(Color::GREEN),
            Rgba4444::from(Color::BLUE),
            Rgba4444::from(Color::WHITE),
        ];
        let tex = Texture2D::new(&texels, 2, 2, SampleMode::Nearest);

        let mut raster = fresh_raster();
        raster.blit(&tex, (10, 10));
        assert_eq!(pixel(&raster, 10, 10), Color::RED.into());
        assert_eq!(pixel(&raster, 11, 10), Color::GREEN.into());
        assert_eq!(pixel(&raster, 10, 11), Color::BLUE.into());
        assert_eq!(pixel(&raster, 11, 11), Color::WHITE.into());
    }

    #[test]
    fn blit_clips_at_the_edges() {
        let texels = [Rgba4444::from(Color::RED); 4];
        let tex = Texture2D::new(&texels, 2, 2, SampleMode::Nearest);

        let mut raster = fresh_raster();
        raster.blit(&tex, (-1, -1));
        raster.blit(&tex, (FRAME_WIDTH as i32 - 1, FRAME_HEIGHT as i32 - 1));

        assert_eq!(pixel(&raster, 0, 0), Color::RED.into());
        assert_eq!(
            pixel(&raster, FRAME_WIDTH - 1, FRAME_HEIGHT - 1),
            Color::RED.into()
        );
    }
}

mod fonts {
    use super::*;

    /// Build a tiny 2-glyph 8x8 PSF2 blob: glyph 0 is blank, glyph 1 is a
    /// solid 8x8 block.
    fn tiny_font_blob() -> Vec<u8> {
        let mut data = Vec::new();
        let header: [u32; 8] = [
            PSF2_MAGIC, // magic
            0,          // version
            32,         // header size
            0,          // flags
            2,          // glyph count
            8,          // bytes per glyph
            8,          // height
            8,          // width
        ];
        for word in header {
            data.extend_from_slice(&word.to_le_bytes());
        }
        data.extend_from_slice(&[0x00; 8]); // glyph 0: blank
        data.extend_from_slice(&[0xFF; 8]); // glyph 1: solid
        data
    }

    #[test]
    fn parse_reads_header_fields() {
        let blob = tiny_font_blob();
        let font = Font::parse(&blob).unwrap();
        assert_eq!(font.glyph_width(), 8);
        assert_eq!(font.glyph_height(), 8);
        assert_eq!(font.bytes_per_row(), 1);
        assert_eq!(font.header().glyph_count, 2);
    }

    #[test]
    fn parse_rejects_bad_magic() {
        let mut blob = tiny_font_blob();
        blob[0] = 0x00;
        match Font::parse(&blob) {
            Err(FontError::BadMagic(_)) => {}
            other => panic!("expected BadMagic, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_truncated_data() {
        let blob = tiny_font_blob();
        assert!(matches!(
            Font::parse(&blob[..16]),
            Err(FontError::Truncated)
        ));
        // Header intact but the glyph table cut short.
        assert!(matches!(
            Font::parse(&blob[..36]),
            Err(FontError::Truncated)
        ));
    }

    #[test]
    fn glyph_lookup_bounds() {
        let blob = tiny_font_blob();
        let font = Font::parse(&blob).unwrap();
        assert_eq!(font.glyph(0), Some(&[0x00u8; 8][..]));
        assert_eq!(font.glyph(1), Some(&[0xFFu8; 8][..]));
        assert_eq!(font.glyph(2), None);
    }

    #[test]
    fn draw_text_advances_by_glyph_width() {
        let blob = tiny_font_blob();
        let font = Font::parse(&blob).unwrap();

        let mut raster = fresh_raster();
        // Glyph 1 (solid), then glyph 0 (blank), then glyph 1 again.
        raster.draw_text(&font, "\x01\x00\x01", (10, 10), Color::WHITE);

        // First cell solid.
        assert_eq!(pixel(&raster, 10, 10), Color::WHITE.into());
        assert_eq!(pixel(&raster, 17, 17), Color::WHITE.into());
        // Second cell blank.
        assert_eq!(pixel(&raster, 20, 12), Color::BLACK.into());
        // Third cell solid again (advance = 2 * 8).
        assert_eq!(pixel(&raster, 26, 10), Color::WHITE.into());
    }
}

mod debug_overlay {
    use super::*;

    #[test]
    fn draw_volume_paints_edges_after_rasterization() {
        let mut raster = fresh_raster();
        let volume = BoundingVolume::new(
            vec3(fx(-0.3), fx(-0.3), fx(-0.3)),
            vec3(fx(0.3), fx(0.3), fx(0.3)),
        );
        // Push the volume in front of the camera.
        let model = Mat4::translate(vec3(fx(0.0), fx(0.0), fx(1.0)));
        raster.draw_volume(&volume, &model, Color::YELLOW);

        let yellow: Rgba4444 = Color::YELLOW.into();
        let painted = raster
            .framebuffer()
            .iter()
            .filter(|&&p| p == yellow)
            .count();
        assert!(painted > 20, "only {painted} overlay pixels");
    }
}
