//! Rust identifier derivation from asset paths.

use std::collections::HashMap;
use std::path::Path;

use crate::error::AssetError;

/// Derive an uppercase Rust identifier from a file path, prefixed with
/// the immediate parent directory so `meshes/ship.obj` and
/// `textures/ship.png` stay distinct.
pub fn generate_identifier(path: &Path) -> Result<String, AssetError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| AssetError::Validation(format!("invalid filename: {}", path.display())))?;

    let parent = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str());

    let identifier = match parent {
        Some(parent) => format!("{}_{}", sanitize(parent), sanitize(stem)),
        None => sanitize(stem),
    };
    Ok(identifier.to_uppercase())
}

/// Fail if two source paths map to the same identifier.
pub fn check_collisions(paths: &[&Path]) -> Result<(), AssetError> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    for &path in paths {
        let identifier = generate_identifier(path)?;
        if let Some(&previous) = seen.get(&identifier) {
            return Err(AssetError::IdentifierCollision {
                identifier,
                path_a: previous.to_path_buf(),
                path_b: path.to_path_buf(),
            });
        }
        seen.insert(identifier, path);
    }
    Ok(())
}

/// Replace anything that is not alphanumeric/underscore; a leading digit
/// gets an underscore prefix.
fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    for (i, ch) in s.chars().enumerate() {
        if i == 0 && ch.is_numeric() {
            out.push('_');
            out.push(ch);
        } else if ch.is_alphanumeric() || ch == '_' {
            out.push(ch);
        } else {
            out.push('_');
        }
    }
    if out.is_empty() {
        out.push_str("ASSET");
    }
    out
}
