//! Build-time asset embedding: OBJ meshes, PNG textures, and arbitrary
//! binary files become compiled Rust const arrays, so render targets
//! reference static data with no runtime filesystem.

pub mod codegen;
pub mod error;
pub mod identifier;
pub mod obj;
pub mod png;
pub mod raw;
pub mod types;

pub use error::AssetError;
pub use types::{AssetBuildConfig, AssetKind, BlobAsset, GeneratedAsset, MeshAsset, TextureAsset};

use std::fs;
use std::path::{Path, PathBuf};

/// Process every asset under `config.source_dir` and write generated
/// sources plus a `mod.rs` index to `config.out_dir`.
///
/// Scans `meshes/*.obj`, `textures/*.png`, and `raw/*` (any extension).
/// An empty source tree succeeds with an empty index.
pub fn build_assets(config: &AssetBuildConfig) -> Result<Vec<GeneratedAsset>, AssetError> {
    fs::create_dir_all(&config.out_dir)?;

    let mut obj_files = collect_files(&config.source_dir.join("meshes"), Some("obj"));
    let mut png_files = collect_files(&config.source_dir.join("textures"), Some("png"));
    let mut raw_files = collect_files(&config.source_dir.join("raw"), None);
    obj_files.sort();
    png_files.sort();
    raw_files.sort();

    let all_paths: Vec<&Path> = obj_files
        .iter()
        .chain(png_files.iter())
        .chain(raw_files.iter())
        .map(|p| p.as_path())
        .collect();
    identifier::check_collisions(&all_paths)?;

    let mut generated = Vec::new();

    for path in &obj_files {
        log::info!("converting mesh: {}", path.display());
        let mesh = obj::load_and_convert(path)?;
        log::info!(
            "  {} vertices, {} triangles",
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        generated.push(codegen::write_mesh_output(&mesh, &config.out_dir)?);
    }

    for path in &png_files {
        log::info!("converting texture: {}", path.display());
        let texture = png::load_and_convert(path)?;
        generated.push(codegen::write_texture_output(&texture, &config.out_dir)?);
    }

    for path in &raw_files {
        log::info!("embedding blob: {}", path.display());
        let blob = raw::load(path)?;
        generated.push(codegen::write_blob_output(&blob, &config.out_dir)?);
    }

    codegen::write_mod_rs(&generated, &config.out_dir)?;
    Ok(generated)
}

/// Convert a single OBJ mesh into `out_dir`.
pub fn convert_mesh(input: &Path, out_dir: &Path) -> Result<MeshAsset, AssetError> {
    fs::create_dir_all(out_dir)?;
    let mesh = obj::load_and_convert(input)?;
    codegen::write_mesh_output(&mesh, out_dir)?;
    Ok(mesh)
}

/// Convert a single PNG texture into `out_dir`.
pub fn convert_texture(input: &Path, out_dir: &Path) -> Result<TextureAsset, AssetError> {
    fs::create_dir_all(out_dir)?;
    let texture = png::load_and_convert(input)?;
    codegen::write_texture_output(&texture, out_dir)?;
    Ok(texture)
}

/// Embed a single file verbatim into `out_dir`.
pub fn convert_blob(input: &Path, out_dir: &Path) -> Result<BlobAsset, AssetError> {
    fs::create_dir_all(out_dir)?;
    let blob = raw::load(input)?;
    codegen::write_blob_output(&blob, out_dir)?;
    Ok(blob)
}

/// Collect files from a directory, optionally filtered by extension
/// (non-recursive).
fn collect_files(dir: &Path, extension: Option<&str>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = match extension {
            Some(ext) => path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case(ext)),
            None => true,
        };
        if matches {
            files.push(path);
        }
    }
    files
}
