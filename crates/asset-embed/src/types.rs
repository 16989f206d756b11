use std::path::PathBuf;

/// Configuration for a full asset-directory build (used by build.rs).
#[derive(Debug, Clone)]
pub struct AssetBuildConfig {
    /// Directory containing source assets (meshes/*.obj, textures/*.png,
    /// raw/* for verbatim byte embedding).
    pub source_dir: PathBuf,
    /// Output directory for generated .rs files.
    pub out_dir: PathBuf,
}

/// What a generated file contains; selects the imports the module index
/// emits for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Mesh,
    Texture,
    Blob,
}

/// Metadata about one generated output file.
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    /// Rust module name for this asset.
    pub module_name: String,
    /// Rust identifier prefix (uppercase).
    pub identifier: String,
    /// Generated .rs filename (relative to the output directory).
    pub rs_path: PathBuf,
    /// Source file that produced this asset (for rerun-if-changed).
    pub source_path: PathBuf,
    pub kind: AssetKind,
}

/// Per-vertex attribute data in f32, before literal emission.
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexData {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Converted OBJ mesh.
#[derive(Debug, Clone)]
pub struct MeshAsset {
    pub source: PathBuf,
    pub identifier: String,
    pub vertices: Vec<VertexData>,
    pub indices: Vec<u32>,
}

impl MeshAsset {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Converted PNG image, packed to the framebuffer's 4444 format.
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub source: PathBuf,
    pub identifier: String,
    pub width: u32,
    pub height: u32,
    /// RGBA4444 pixels, row-major.
    pub pixels: Vec<u16>,
}

/// An arbitrary file embedded as raw bytes.
#[derive(Debug, Clone)]
pub struct BlobAsset {
    pub source: PathBuf,
    pub identifier: String,
    pub bytes: Vec<u8>,
}
