//! CLI front-end for the asset embedding library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asset-embed")]
#[command(about = "Convert OBJ/PNG/binary assets to compiled Rust arrays")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one OBJ mesh to a Vertex/index array source file.
    Mesh {
        input: PathBuf,
        #[arg(short, long, default_value = "generated")]
        out_dir: PathBuf,
    },
    /// Convert one PNG image to a packed-pixel array source file.
    Texture {
        input: PathBuf,
        #[arg(short, long, default_value = "generated")]
        out_dir: PathBuf,
    },
    /// Embed one file verbatim as a byte array source file.
    Blob {
        input: PathBuf,
        #[arg(short, long, default_value = "generated")]
        out_dir: PathBuf,
    },
    /// Convert a whole asset directory (meshes/, textures/, raw/).
    All {
        source_dir: PathBuf,
        #[arg(short, long, default_value = "generated")]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Mesh { input, out_dir } => {
            asset_embed::convert_mesh(&input, &out_dir).map(|mesh| {
                log::info!(
                    "{}: {} vertices, {} triangles",
                    mesh.identifier,
                    mesh.vertices.len(),
                    mesh.triangle_count()
                );
            })
        }
        Command::Texture { input, out_dir } => {
            asset_embed::convert_texture(&input, &out_dir).map(|texture| {
                log::info!(
                    "{}: {}x{}",
                    texture.identifier,
                    texture.width,
                    texture.height
                );
            })
        }
        Command::Blob { input, out_dir } => {
            asset_embed::convert_blob(&input, &out_dir).map(|blob| {
                log::info!("{}: {} bytes", blob.identifier, blob.bytes.len());
            })
        }
        Command::All {
            source_dir,
            out_dir,
        } => asset_embed::build_assets(&asset_embed::AssetBuildConfig {
            source_dir,
            out_dir,
        })
        .map(|assets| {
            log::info!("generated {} assets", assets.len());
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
