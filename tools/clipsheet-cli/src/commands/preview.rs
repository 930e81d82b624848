//! Show normalized preview geometry for a clip.

use std::path::PathBuf;

use clipsheet_clip_model::edit::FieldEdit;
use clipsheet_clip_model::surface::{Rect, Size};
use clipsheet_common::config::PreviewDefaults;
use clipsheet_processing_core::normalize::{NormalizeConfig, TextAnchor};
use clipsheet_processing_core::report::evaluate;

fn fmt_rect(r: &Rect) -> String {
    format!("x={:.2} y={:.2} w={:.2} h={:.2}", r.x, r.y, r.w, r.h)
}

pub fn run(
    path: PathBuf,
    edits: Vec<FieldEdit>,
    defaults: &PreviewDefaults,
    width: Option<f64>,
    height: Option<f64>,
    profile_surface: bool,
    json: bool,
) -> anyhow::Result<()> {
    let clip = super::load_clip(&path, &edits)?;

    let surface = if profile_surface {
        let (w, h) = clip.profile.dimensions();
        Size::new(f64::from(w), f64::from(h))
    } else {
        Size::new(
            width.unwrap_or(defaults.width),
            height.unwrap_or(defaults.height),
        )
    };
    if !(surface.width > 0.0 && surface.height > 0.0) {
        anyhow::bail!(
            "Surface must be positive, got {}x{}",
            surface.width,
            surface.height
        );
    }

    let config = NormalizeConfig {
        text_inset: defaults.text_inset,
    };
    let report = evaluate(&clip, surface, &config);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to render report: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let geo = &report.geometry;
    println!("Preview surface: {}x{}", surface.width, surface.height);
    match report.duration {
        Some(d) => println!("  Duration: {d:.1}s"),
        None => println!("  Duration: (invalid)"),
    }
    println!("  Visible area: {}", fmt_rect(&geo.visible));
    println!();

    println!("Crop bands:");
    if geo.crop_bands.is_empty() {
        println!("  (none)");
    }
    for band in &geo.crop_bands {
        println!("  {:?}: {}", band.edge, fmt_rect(&band.rect));
    }

    match &geo.mask {
        Some(mask) => println!("Mask: {}", fmt_rect(mask)),
        None if report.has_mask => println!("Mask: set but not drawable"),
        None => println!("Mask: (none)"),
    }

    match &geo.text {
        Some(text) => {
            let anchor = match &text.anchor {
                TextAnchor::Top { x, width, y } => {
                    format!("top edge y={y:.2}, x={x:.2} w={width:.2}")
                }
                TextAnchor::Bottom { x, width, y } => {
                    format!("bottom edge y={y:.2}, x={x:.2} w={width:.2}")
                }
                TextAnchor::Center { x, width, y } => {
                    format!("centered on y={y:.2}, x={x:.2} w={width:.2}")
                }
                TextAnchor::Fill { rect } => format!("inside mask {}", fmt_rect(rect)),
            };
            println!("Text: \"{}\" at {anchor}", text.display);
        }
        None if report.has_text => println!("Text: not rendered (@mask needs a mask)"),
        None => println!("Text: (none)"),
    }
    println!();

    if report.is_valid() {
        println!("Status: Valid");
    } else {
        println!("Status: {} issue(s)", report.violations.len());
        for violation in &report.violations {
            println!("  - {violation}");
        }
    }

    Ok(())
}
