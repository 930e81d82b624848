pub mod export;
pub mod info;
pub mod preview;
pub mod template;
pub mod validate;

use std::io::Read;
use std::path::Path;

use clipsheet_clip_model::clip::ClipConfig;
use clipsheet_clip_model::edit::FieldEdit;
use clipsheet_common::error::{ClipsheetError, ClipsheetResult};

/// Read a clip snapshot from `path` (or stdin for `-`) and apply `edits`.
pub fn load_clip(path: &Path, edits: &[FieldEdit]) -> ClipsheetResult<ClipConfig> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !path.exists() {
            return Err(ClipsheetError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        std::fs::read_to_string(path)?
    };

    let clip = ClipConfig::from_json(&json).map_err(|e| ClipsheetError::clip(e.to_string()))?;

    if !edits.is_empty() {
        tracing::debug!(edits = edits.len(), "Applying field edits");
    }

    clip.apply_all(edits)
        .map_err(|e| ClipsheetError::edit(e.to_string()))
}
