//! Show clip information.

use std::path::PathBuf;

use clipsheet_clip_model::edit::FieldEdit;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn run(path: PathBuf, edits: Vec<FieldEdit>) -> anyhow::Result<()> {
    let clip = super::load_clip(&path, &edits)?;

    println!("Clip #{}: {}", clip.position, clip.video_name);
    match clip.duration() {
        Some(d) => println!("  Range: {} -> {} ({d:.1}s)", clip.start, clip.end),
        None => println!("  Range: {} -> {} (invalid)", clip.start, clip.end),
    }
    println!();

    let (w, h) = clip.profile.dimensions();
    println!("Output:");
    println!("  Profile: {} ({w}x{h})", clip.profile);
    println!("  Transition: {}", clip.transition);
    println!("  Final name: {}", clip.final_name);
    println!();

    let crop = clip.crop();
    println!("Edits:");
    println!(
        "  Crop: {} (top {}, bottom {}, left {}, right {})",
        yes_no(clip.has_crop()),
        crop.top,
        crop.bottom,
        crop.left,
        crop.right
    );
    let mask = clip.mask_input();
    println!(
        "  Mask: {} ({}/4 fields filled)",
        yes_no(clip.has_mask()),
        mask.filled_count()
    );
    let directive = clip.text_directive();
    if clip.has_text() {
        println!(
            "  Text: Yes ({:?}) \"{}\"",
            directive.position, directive.display
        );
    } else {
        println!("  Text: No");
    }

    Ok(())
}
