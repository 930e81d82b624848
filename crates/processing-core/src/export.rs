//! Sheet export.
//!
//! Produces the fixed-order `key: value` block operators paste into the
//! tracking sheet. Key names and order are a contract with that sheet.

use serde::Serialize;

use clipsheet_clip_model::clip::ClipConfig;
use clipsheet_clip_model::field::NumericField;

/// Export keys in sheet column order.
pub const EXPORT_KEYS: [&str; 17] = [
    "position",
    "video_name",
    "Start",
    "End",
    "clip_length",
    "Profile",
    "Transition",
    "Text",
    "crop_top",
    "crop_bottom",
    "crop_left",
    "crop_right",
    "mask_x",
    "mask_y",
    "mask_w",
    "mask_h",
    "FinalName",
];

const EMPTY: &str = "(empty)";

/// Rendered in place of `clip_length` when a time bound does not parse.
const INVALID_DURATION: &str = "(invalid)";

/// One line of the export block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportEntry {
    pub key: &'static str,
    pub value: String,
}

/// Format a clip as ordered sheet entries.
pub fn serialize_clip(clip: &ClipConfig, duration: Option<f64>) -> Vec<ExportEntry> {
    let clip_length = match duration {
        Some(d) => one_decimal(d),
        None => INVALID_DURATION.to_string(),
    };
    let text = if clip.text.is_empty() {
        EMPTY.to_string()
    } else {
        clip.text.clone()
    };

    let values = [
        clip.position.to_string(),
        clip.video_name.clone(),
        clip.start.to_string(),
        clip.end.to_string(),
        clip_length,
        clip.profile.to_string(),
        clip.transition.to_string(),
        text,
        or_zero(&clip.crop_top),
        or_zero(&clip.crop_bottom),
        or_zero(&clip.crop_left),
        or_zero(&clip.crop_right),
        or_empty(&clip.mask_x),
        or_empty(&clip.mask_y),
        or_empty(&clip.mask_w),
        or_empty(&clip.mask_h),
        clip.final_name.clone(),
    ];

    EXPORT_KEYS
        .into_iter()
        .zip(values)
        .map(|(key, value)| ExportEntry { key, value })
        .collect()
}

/// The export block for a clip, one `key: value` per line.
pub fn export_block(clip: &ClipConfig) -> String {
    render_block(&serialize_clip(clip, clip.duration()))
}

/// Join entries into lines. Line breaks inside values are escaped so the
/// block always has one line per key.
pub fn render_block(entries: &[ExportEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            let value = e.value.replace('\r', "\\r").replace('\n', "\\n");
            format!("{}: {}", e.key, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One decimal place, ties rounded away from zero (`5.25` -> `5.3`).
fn one_decimal(d: f64) -> String {
    format!("{:.1}", (d * 10.0).round() / 10.0)
}

fn or_zero(field: &NumericField) -> String {
    match field {
        NumericField::Unset => "0".to_string(),
        other => other.to_string(),
    }
}

fn or_empty(field: &NumericField) -> String {
    match field {
        NumericField::Unset => EMPTY.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use clipsheet_clip_model::edit::{ClipField, FieldEdit};

    use super::*;

    #[test]
    fn test_default_block() {
        let block = export_block(&ClipConfig::default());
        let expected = "\
position: 1
video_name: product_demo.mp4
Start: 5
End: 23.5
clip_length: 18.5
Profile: 1080p
Transition: crossfade 300ms
Text: (empty)
crop_top: 0
crop_bottom: 0
crop_left: 0
crop_right: 0
mask_x: (empty)
mask_y: (empty)
mask_w: (empty)
mask_h: (empty)
FinalName: demo-features-v1.mp4";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_keys_in_fixed_order() {
        let entries = serialize_clip(&ClipConfig::default(), Some(1.0));
        let keys: Vec<&str> = entries.iter().map(|e| e.key).collect();
        assert_eq!(keys, EXPORT_KEYS.to_vec());
    }

    #[test]
    fn test_blank_crop_renders_zero_and_values_kept() {
        let clip = ClipConfig::default()
            .apply_all(&[
                FieldEdit::text(ClipField::CropTop, ""),
                FieldEdit::text(ClipField::CropLeft, "192"),
                FieldEdit::text(ClipField::MaskX, "0"),
                FieldEdit::text(ClipField::MaskY, "12px"),
            ])
            .unwrap();
        let entries = serialize_clip(&clip, clip.duration());
        let value = |key: &str| {
            entries
                .iter()
                .find(|e| e.key == key)
                .map(|e| e.value.clone())
                .unwrap()
        };
        assert_eq!(value("crop_top"), "0");
        assert_eq!(value("crop_left"), "192");
        assert_eq!(value("mask_x"), "0");
        assert_eq!(value("mask_y"), "12px");
        assert_eq!(value("mask_w"), "(empty)");
    }

    #[test]
    fn test_duration_one_decimal() {
        let entries = serialize_clip(&ClipConfig::default(), Some(2.0));
        assert_eq!(entries[4].value, "2.0");
        let entries = serialize_clip(&ClipConfig::default(), Some(1.0 / 3.0));
        assert_eq!(entries[4].value, "0.3");
        let entries = serialize_clip(&ClipConfig::default(), None);
        assert_eq!(entries[4].value, "(invalid)");
    }

    #[test]
    fn test_duration_ties_round_up() {
        for (d, expected) in [(0.25, "0.3"), (5.25, "5.3"), (18.75, "18.8"), (-0.25, "-0.3")] {
            let entries = serialize_clip(&ClipConfig::default(), Some(d));
            assert_eq!(entries[4].value, expected, "duration {d}");
        }

        let clip = ClipConfig::default()
            .apply_all(&[
                FieldEdit::text(ClipField::Start, "5"),
                FieldEdit::text(ClipField::End, "10.25"),
            ])
            .unwrap();
        assert!(export_block(&clip).contains("clip_length: 5.3"));
    }

    #[test]
    fn test_numbers_exported_as_typed() {
        let clip = ClipConfig::default()
            .apply_all(&[
                FieldEdit::text(ClipField::Position, "010"),
                FieldEdit::text(ClipField::Start, "5.0"),
                FieldEdit::text(ClipField::End, "23.50"),
                FieldEdit::text(ClipField::CropTop, "054"),
            ])
            .unwrap();
        let entries = serialize_clip(&clip, clip.duration());
        assert_eq!(entries[0].value, "010");
        assert_eq!(entries[2].value, "5.0");
        assert_eq!(entries[3].value, "23.50");
        assert_eq!(entries[4].value, "18.5");
        assert_eq!(entries[8].value, "054");
    }

    #[test]
    fn test_text_kept_verbatim() {
        let clip = ClipConfig {
            text: "@top Hello".to_string(),
            ..ClipConfig::default()
        };
        let entries = serialize_clip(&clip, clip.duration());
        assert_eq!(entries[7].value, "@top Hello");
    }

    #[test]
    fn test_multiline_text_stays_on_one_line() {
        let clip = ClipConfig {
            text: "line one\nline two".to_string(),
            ..ClipConfig::default()
        };
        let block = export_block(&clip);
        assert_eq!(block.lines().count(), 17);
        assert!(block.contains("Text: line one\\nline two"));
    }
}
