//! OBJ mesh conversion via tobj.

use std::path::Path;

use crate::error::AssetError;
use crate::identifier::generate_identifier;
use crate::types::{MeshAsset, VertexData};

/// Load an OBJ file, merge all objects/groups, return a unified mesh.
pub fn load_and_convert(path: &Path) -> Result<MeshAsset, AssetError> {
    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };

    let (models, _materials) =
        tobj::load_obj(path, &load_options).map_err(|e| AssetError::ObjParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if models.is_empty() {
        return Err(AssetError::Validation(format!(
            "OBJ file has no geometry: {}",
            path.display()
        )));
    }
    if models.len() > 1 {
        log::warn!(
            "OBJ contains {} objects/groups, all geometry will be merged",
            models.len()
        );
    }

    let (vertices, indices) = merge_models(&models);
    if vertices.is_empty() || indices.is_empty() {
        return Err(AssetError::Validation(format!(
            "mesh has no vertices or faces: {}",
            path.display()
        )));
    }

    Ok(MeshAsset {
        source: path.to_path_buf(),
        identifier: generate_identifier(path)?,
        vertices,
        indices,
    })
}

/// Merge all tobj models into one vertex list and one index list.
fn merge_models(models: &[tobj::Model]) -> (Vec<VertexData>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut vertex_offset: u32 = 0;

    for model in models {
        let mesh = &model.mesh;
        if mesh.positions.is_empty() {
            continue;
        }

        let vert_count = mesh.positions.len() / 3;
        let has_uvs = !mesh.texcoords.is_empty();
        let has_normals = !mesh.normals.is_empty();

        if !has_uvs {
            log::warn!("mesh '{}' has no UVs, defaulting to (0, 0)", model.name);
        }
        if !has_normals {
            log::warn!("mesh '{}' has no normals, defaulting to zero", model.name);
        }

        for i in 0..vert_count {
            let position = [
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            ];
            let uv = if has_uvs && i * 2 + 1 < mesh.texcoords.len() {
                [mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1]]
            } else {
                [0.0, 0.0]
            };
            let normal = if has_normals && i * 3 + 2 < mesh.normals.len() {
                [
                    mesh.normals[i * 3],
                    mesh.normals[i * 3 + 1],
                    mesh.normals[i * 3 + 2],
                ]
            } else {
                [0.0, 0.0, 0.0]
            };
            vertices.push(VertexData {
                position,
                normal,
                uv,
            });
        }

        for &index in &mesh.indices {
            indices.push(index + vertex_offset);
        }
        vertex_offset += vert_count as u32;
    }

    (vertices, indices)
}
