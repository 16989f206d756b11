//! Rust source emission: converted assets become literal const arrays so
//! targets reference them with no runtime filesystem or parsing.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::AssetError;
use crate::types::{AssetKind, BlobAsset, GeneratedAsset, MeshAsset, TextureAsset};

/// Format an f32 as a valid Rust literal (always includes a decimal
/// point).
fn f32_literal(v: f32) -> String {
    let s = format!("{}", v);
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// Write `<id>.rs` with vertex and index arrays for a mesh.
pub fn write_mesh_output(
    mesh: &MeshAsset,
    out_dir: &Path,
) -> Result<GeneratedAsset, AssetError> {
    let module_name = mesh.identifier.to_lowercase();
    let rs_filename = format!("{}.rs", module_name);
    let id = &mesh.identifier;

    let mut src = String::new();
    let _ = writeln!(src, "// Generated from: {}", mesh.source.display());
    let _ = writeln!(
        src,
        "// {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    let _ = writeln!(src);
    let _ = writeln!(
        src,
        "pub const {id}_VERTEX_COUNT: usize = {};",
        mesh.vertices.len()
    );
    let _ = writeln!(
        src,
        "pub const {id}_VERTICES: [Vertex; {}] = [",
        mesh.vertices.len()
    );
    for v in &mesh.vertices {
        let _ = writeln!(
            src,
            "    Vertex::from_f32([{}, {}, {}], [{}, {}, {}], [{}, {}]),",
            f32_literal(v.position[0]),
            f32_literal(v.position[1]),
            f32_literal(v.position[2]),
            f32_literal(v.normal[0]),
            f32_literal(v.normal[1]),
            f32_literal(v.normal[2]),
            f32_literal(v.uv[0]),
            f32_literal(v.uv[1]),
        );
    }
    let _ = writeln!(src, "];");
    let _ = writeln!(src);
    let _ = writeln!(
        src,
        "pub const {id}_INDICES: [u32; {}] = [",
        mesh.indices.len()
    );
    for triple in mesh.indices.chunks(3) {
        let entries: Vec<String> = triple.iter().map(|i| i.to_string()).collect();
        let _ = writeln!(src, "    {},", entries.join(", "));
    }
    let _ = writeln!(src, "];");

    fs::write(out_dir.join(&rs_filename), src)?;

    Ok(GeneratedAsset {
        module_name,
        identifier: mesh.identifier.clone(),
        rs_path: rs_filename.into(),
        source_path: mesh.source.clone(),
        kind: AssetKind::Mesh,
    })
}

/// Write `<id>.rs` with a packed-pixel array for a texture.
pub fn write_texture_output(
    texture: &TextureAsset,
    out_dir: &Path,
) -> Result<GeneratedAsset, AssetError> {
    let module_name = texture.identifier.to_lowercase();
    let rs_filename = format!("{}.rs", module_name);
    let id = &texture.identifier;

    let mut src = String::new();
    let _ = writeln!(src, "// Generated from: {}", texture.source.display());
    let _ = writeln!(
        src,
        "// {}x{} RGBA4444, {} bytes packed",
        texture.width,
        texture.height,
        texture.pixels.len() * 2
    );
    let _ = writeln!(src);
    let _ = writeln!(src, "pub const {id}_WIDTH: u32 = {};", texture.width);
    let _ = writeln!(src, "pub const {id}_HEIGHT: u32 = {};", texture.height);
    let _ = writeln!(
        src,
        "pub const {id}_PIXELS: [Rgba4444; {}] = [",
        texture.pixels.len()
    );
    for row in texture.pixels.chunks(8) {
        let entries: Vec<String> = row
            .iter()
            .map(|p| format!("Rgba4444::from_bits(0x{:04X})", p))
            .collect();
        let _ = writeln!(src, "    {},", entries.join(", "));
    }
    let _ = writeln!(src, "];");

    fs::write(out_dir.join(&rs_filename), src)?;

    Ok(GeneratedAsset {
        module_name,
        identifier: texture.identifier.clone(),
        rs_path: rs_filename.into(),
        source_path: texture.source.clone(),
        kind: AssetKind::Texture,
    })
}

/// Write `<id>.rs` with a raw byte array.
pub fn write_blob_output(blob: &BlobAsset, out_dir: &Path) -> Result<GeneratedAsset, AssetError> {
    let module_name = blob.identifier.to_lowercase();
    let rs_filename = format!("{}.rs", module_name);
    let id = &blob.identifier;

    let mut src = String::new();
    let _ = writeln!(src, "// Generated from: {}", blob.source.display());
    let _ = writeln!(src);
    let _ = writeln!(src, "pub const {id}_LEN: usize = {};", blob.bytes.len());
    let _ = writeln!(src, "pub const {id}: [u8; {}] = [", blob.bytes.len());
    for row in blob.bytes.chunks(12) {
        let entries: Vec<String> = row.iter().map(|b| format!("0x{:02x}", b)).collect();
        let _ = writeln!(src, "    {},", entries.join(", "));
    }
    let _ = writeln!(src, "];");

    fs::write(out_dir.join(&rs_filename), src)?;

    Ok(GeneratedAsset {
        module_name,
        identifier: blob.identifier.clone(),
        rs_path: rs_filename.into(),
        source_path: blob.source.clone(),
        kind: AssetKind::Blob,
    })
}

/// Write the `mod.rs` index that wraps each generated file in a module
/// with the imports its literals need.
pub fn write_mod_rs(assets: &[GeneratedAsset], out_dir: &Path) -> Result<(), AssetError> {
    let mut src = String::new();
    let _ = writeln!(src, "// Generated asset index. Include from the consuming crate:");
    let _ = writeln!(
        src,
        "//   mod assets {{ include!(concat!(env!(\"OUT_DIR\"), \"/assets/mod.rs\")); }}"
    );
    let _ = writeln!(src);

    for asset in assets {
        let _ = writeln!(src, "pub mod {} {{", asset.module_name);
        match asset.kind {
            AssetKind::Mesh => {
                let _ = writeln!(src, "    use pico_sgl_core::render::mesh::Vertex;");
            }
            AssetKind::Texture => {
                let _ = writeln!(src, "    use pico_sgl_core::color::Rgba4444;");
            }
            AssetKind::Blob => {}
        }
        let _ = writeln!(src, "    include!(\"{}\");", asset.rs_path.display());
        let _ = writeln!(src, "}}");
    }

    fs::write(out_dir.join("mod.rs"), src)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VertexData;
    use std::path::PathBuf;

    #[test]
    fn f32_literals_always_have_a_decimal_point() {
        assert_eq!(f32_literal(1.0), "1.0");
        assert_eq!(f32_literal(0.5), "0.5");
        assert_eq!(f32_literal(-3.0), "-3.0");
    }

    #[test]
    fn mesh_output_contains_typed_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let mesh = MeshAsset {
            source: PathBuf::from("meshes/tri.obj"),
            identifier: "MESHES_TRI".into(),
            vertices: vec![
                VertexData {
                    position: [0.0, 1.0, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    uv: [0.5, 0.0],
                },
                VertexData::default(),
                VertexData::default(),
            ],
            indices: vec![0, 1, 2],
        };

        let generated = write_mesh_output(&mesh, dir.path()).unwrap();
        assert_eq!(generated.module_name, "meshes_tri");

        let src = std::fs::read_to_string(dir.path().join("meshes_tri.rs")).unwrap();
        assert!(src.contains("pub const MESHES_TRI_VERTICES: [Vertex; 3]"));
        assert!(src.contains("Vertex::from_f32([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.5, 0.0])"));
        assert!(src.contains("pub const MESHES_TRI_INDICES: [u32; 3]"));
    }

    #[test]
    fn texture_output_packs_pixels_as_hex() {
        let dir = tempfile::tempdir().unwrap();
        let texture = TextureAsset {
            source: PathBuf::from("textures/dot.png"),
            identifier: "TEXTURES_DOT".into(),
            width: 2,
            height: 1,
            pixels: vec![0xF00F, 0x0F0F],
        };

        write_texture_output(&texture, dir.path()).unwrap();
        let src = std::fs::read_to_string(dir.path().join("textures_dot.rs")).unwrap();
        assert!(src.contains("pub const TEXTURES_DOT_WIDTH: u32 = 2;"));
        assert!(src.contains("Rgba4444::from_bits(0xF00F)"));
    }

    #[test]
    fn blob_output_embeds_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let blob = BlobAsset {
            source: PathBuf::from("raw/font.psf"),
            identifier: "RAW_FONT".into(),
            bytes: vec![0x72, 0xb5, 0x4a, 0x86],
        };

        write_blob_output(&blob, dir.path()).unwrap();
        let src = std::fs::read_to_string(dir.path().join("raw_font.rs")).unwrap();
        assert!(src.contains("pub const RAW_FONT_LEN: usize = 4;"));
        assert!(src.contains("0x72, 0xb5, 0x4a, 0x86"));
    }

    #[test]
    fn mod_rs_imports_match_asset_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let assets = vec![
            GeneratedAsset {
                module_name: "meshes_tri".into(),
                identifier: "MESHES_TRI".into(),
                rs_path: "meshes_tri.rs".into(),
                source_path: "meshes/tri.obj".into(),
                kind: AssetKind::Mesh,
            },
            GeneratedAsset {
                module_name: "textures_dot".into(),
                identifier: "TEXTURES_DOT".into(),
                rs_path: "textures_dot.rs".into(),
                source_path: "textures/dot.png".into(),
                kind: AssetKind::Texture,
            },
        ];

        write_mod_rs(&assets, dir.path()).unwrap();
        let src = std::fs::read_to_string(dir.path().join("mod.rs")).unwrap();
        assert!(src.contains("pub mod meshes_tri {"));
        assert!(src.contains("use pico_sgl_core::render::mesh::Vertex;"));
        assert!(src.contains("use pico_sgl_core::color::Rgba4444;"));
    }
}
