//! Print the sheet export block.

use std::path::PathBuf;

use clipsheet_clip_model::edit::FieldEdit;
use clipsheet_processing_core::export::{render_block, serialize_clip};
use clipsheet_processing_core::validate::validate;

pub fn run(path: PathBuf, edits: Vec<FieldEdit>, json: bool) -> anyhow::Result<()> {
    let clip = super::load_clip(&path, &edits)?;

    let violations = validate(&clip);
    if !violations.is_empty() {
        tracing::warn!(
            issues = violations.len(),
            "Exporting a clip with validation issues"
        );
    }

    let entries = serialize_clip(&clip, clip.duration());
    if json {
        let out = serde_json::to_string_pretty(&entries)
            .map_err(|e| anyhow::anyhow!("Failed to render export: {e}"))?;
        println!("{out}");
    } else {
        println!("{}", render_block(&entries));
    }

    Ok(())
}
