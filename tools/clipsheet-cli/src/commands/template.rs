//! Print the default clip snapshot.

use clipsheet_clip_model::clip::ClipConfig;

pub fn run() -> anyhow::Result<()> {
    let json = ClipConfig::default()
        .to_json_pretty()
        .map_err(|e| anyhow::anyhow!("Failed to render template: {e}"))?;
    println!("{json}");
    Ok(())
}
