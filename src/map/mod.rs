use std::fs;
use std::path::Path;

use anyhow::Context;

mod document;

pub use document::*;

/// Read and parse a map document from disk.
///
/// This runs once at startup, before the app schedule, because the document
/// is needed synchronously to build colliders and resolve the spawn point.
pub fn load_map_document(path: impl AsRef<Path>) -> Result<MapDocument, anyhow::Error> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading map document {}", path.display()))?;
    let document: MapDocument = serde_json::from_str(&raw)
        .with_context(|| format!("parsing map document {}", path.display()))?;
    Ok(document)
}
