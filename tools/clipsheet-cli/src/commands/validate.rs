//! Validate a clip snapshot.

use std::path::PathBuf;

use clipsheet_clip_model::edit::FieldEdit;
use clipsheet_processing_core::validate::validate;

pub fn run(path: PathBuf, edits: Vec<FieldEdit>, strict: bool) -> anyhow::Result<()> {
    println!("Validating clip at: {}", path.display());

    let clip = super::load_clip(&path, &edits)?;

    println!("  Video: {}", clip.video_name);
    println!("  Range: {} -> {}", clip.start, clip.end);
    println!("  Final name: {}", clip.final_name);

    let violations = validate(&clip);
    if violations.is_empty() {
        println!("\nClip is valid.");
        return Ok(());
    }

    println!("\nValidation issues:");
    for violation in &violations {
        println!("  - {violation}");
    }
    println!("\n{} issue(s) found.", violations.len());

    if strict {
        anyhow::bail!("clip has {} validation issue(s)", violations.len());
    }
    Ok(())
}
