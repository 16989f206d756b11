//! Verbatim byte embedding for arbitrary files (fonts, lookup tables).

use std::path::Path;

use crate::error::AssetError;
use crate::identifier::generate_identifier;
use crate::types::BlobAsset;

pub fn load(path: &Path) -> Result<BlobAsset, AssetError> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(AssetError::Validation(format!(
            "empty file: {}",
            path.display()
        )));
    }
    Ok(BlobAsset {
        source: path.to_path_buf(),
        identifier: generate_identifier(path)?,
        bytes,
    })
}
