//! Field-level edits.
//!
//! The presentation layer reports one changed field at a time. Applying an
//! edit never mutates the current snapshot; it returns the next one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clip::{ClipConfig, ClipError};
use crate::field::NumericField;

/// Every editable clip field, in export order.
///
/// Serialized by sheet key, the same names `FromStr` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ClipField {
    Position,
    VideoName,
    Start,
    End,
    Profile,
    Transition,
    Text,
    CropTop,
    CropBottom,
    CropLeft,
    CropRight,
    MaskX,
    MaskY,
    MaskW,
    MaskH,
    FinalName,
}

impl ClipField {
    pub const ALL: [ClipField; 16] = [
        ClipField::Position,
        ClipField::VideoName,
        ClipField::Start,
        ClipField::End,
        ClipField::Profile,
        ClipField::Transition,
        ClipField::Text,
        ClipField::CropTop,
        ClipField::CropBottom,
        ClipField::CropLeft,
        ClipField::CropRight,
        ClipField::MaskX,
        ClipField::MaskY,
        ClipField::MaskW,
        ClipField::MaskH,
        ClipField::FinalName,
    ];

    /// Sheet column name for this field.
    pub fn key(&self) -> &'static str {
        match self {
            ClipField::Position => "position",
            ClipField::VideoName => "video_name",
            ClipField::Start => "Start",
            ClipField::End => "End",
            ClipField::Profile => "Profile",
            ClipField::Transition => "Transition",
            ClipField::Text => "Text",
            ClipField::CropTop => "crop_top",
            ClipField::CropBottom => "crop_bottom",
            ClipField::CropLeft => "crop_left",
            ClipField::CropRight => "crop_right",
            ClipField::MaskX => "mask_x",
            ClipField::MaskY => "mask_y",
            ClipField::MaskW => "mask_w",
            ClipField::MaskH => "mask_h",
            ClipField::FinalName => "FinalName",
        }
    }
}

impl fmt::Display for ClipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ClipField {
    type Err = ClipError;

    /// Accepts sheet keys case-insensitively, plus `final_name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("final_name") {
            return Ok(ClipField::FinalName);
        }
        ClipField::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ClipError::UnknownField(s.to_string()))
    }
}

impl TryFrom<String> for ClipField {
    type Error = ClipError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClipField> for &'static str {
    fn from(field: ClipField) -> Self {
        field.key()
    }
}

/// A new raw value for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn into_numeric(self) -> NumericField {
        match self {
            FieldValue::Number(v) => NumericField::from_number(v),
            FieldValue::Text(s) => NumericField::parse(&s),
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldValue::Number(v) => v.to_string(),
            FieldValue::Text(s) => s,
        }
    }
}

/// One edit event from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEdit {
    pub field: ClipField,
    pub value: FieldValue,
}

impl FieldEdit {
    pub fn new(field: ClipField, value: FieldValue) -> Self {
        Self { field, value }
    }

    pub fn text(field: ClipField, value: impl Into<String>) -> Self {
        Self::new(field, FieldValue::Text(value.into()))
    }

    pub fn number(field: ClipField, value: f64) -> Self {
        Self::new(field, FieldValue::Number(value))
    }
}

impl FromStr for FieldEdit {
    type Err = ClipError;

    /// Parse `field=value`. The value is taken verbatim as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| ClipError::MalformedEdit(s.to_string()))?;
        Ok(Self::text(field.parse()?, value))
    }
}

impl ClipConfig {
    /// Produce the snapshot that results from one edit.
    ///
    /// Numeric fields accept any text; only enum fields can reject a value.
    pub fn apply(&self, edit: &FieldEdit) -> Result<ClipConfig, ClipError> {
        let mut next = self.clone();
        let value = edit.value.clone();
        match edit.field {
            ClipField::Position => next.position = value.into_numeric(),
            ClipField::VideoName => next.video_name = value.into_text(),
            ClipField::Start => next.start = value.into_numeric(),
            ClipField::End => next.end = value.into_numeric(),
            ClipField::Profile => next.profile = value.into_text().parse()?,
            ClipField::Transition => next.transition = value.into_text().parse()?,
            ClipField::Text => next.text = value.into_text(),
            ClipField::CropTop => next.crop_top = value.into_numeric(),
            ClipField::CropBottom => next.crop_bottom = value.into_numeric(),
            ClipField::CropLeft => next.crop_left = value.into_numeric(),
            ClipField::CropRight => next.crop_right = value.into_numeric(),
            ClipField::MaskX => next.mask_x = value.into_numeric(),
            ClipField::MaskY => next.mask_y = value.into_numeric(),
            ClipField::MaskW => next.mask_w = value.into_numeric(),
            ClipField::MaskH => next.mask_h = value.into_numeric(),
            ClipField::FinalName => next.final_name = value.into_text(),
        }
        Ok(next)
    }

    /// Apply edits in order, stopping at the first rejected one.
    pub fn apply_all<'a>(
        &self,
        edits: impl IntoIterator<Item = &'a FieldEdit>,
    ) -> Result<ClipConfig, ClipError> {
        edits
            .into_iter()
            .try_fold(self.clone(), |clip, edit| clip.apply(edit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::{Profile, Transition};

    #[test]
    fn test_field_keys_parse_back() {
        for field in ClipField::ALL {
            assert_eq!(field.key().parse::<ClipField>().unwrap(), field);
        }
        assert_eq!("start".parse::<ClipField>().unwrap(), ClipField::Start);
        assert_eq!(
            "final_name".parse::<ClipField>().unwrap(),
            ClipField::FinalName
        );
        assert!("clip_length".parse::<ClipField>().is_err());
    }

    #[test]
    fn test_apply_returns_new_snapshot() {
        let base = ClipConfig::default();
        let next = base
            .apply(&FieldEdit::text(ClipField::VideoName, "intro.mov"))
            .unwrap();
        assert_eq!(next.video_name, "intro.mov");
        assert_eq!(base.video_name, "product_demo.mp4");
    }

    #[test]
    fn test_numeric_edit_never_rejected() {
        let clip = ClipConfig::default()
            .apply(&FieldEdit::text(ClipField::End, "2x"))
            .unwrap();
        assert_eq!(clip.end, NumericField::Invalid("2x".to_string()));

        let clip = clip.apply(&FieldEdit::text(ClipField::MaskW, "")).unwrap();
        assert_eq!(clip.mask_w, NumericField::Unset);

        let clip = clip.apply(&FieldEdit::number(ClipField::CropLeft, 192.0)).unwrap();
        assert_eq!(clip.crop_left, NumericField::from_number(192.0));
    }

    #[test]
    fn test_enum_edits_validate_tags() {
        let clip = ClipConfig::default()
            .apply(&FieldEdit::text(ClipField::Profile, "4K"))
            .unwrap();
        assert_eq!(clip.profile, Profile::Uhd4k);

        let clip = clip
            .apply(&FieldEdit::text(ClipField::Transition, "wipeleft"))
            .unwrap();
        assert_eq!(clip.transition, Transition::WipeLeft);

        let err = clip
            .apply(&FieldEdit::text(ClipField::Transition, "dissolve"))
            .unwrap_err();
        assert!(matches!(err, ClipError::UnknownTransition(_)));
    }

    #[test]
    fn test_number_into_text_field() {
        let clip = ClipConfig::default()
            .apply(&FieldEdit::number(ClipField::Text, 42.0))
            .unwrap();
        assert_eq!(clip.text, "42");
    }

    #[test]
    fn test_parse_edit_string() {
        let edit: FieldEdit = "Text=@top a=b".parse().unwrap();
        assert_eq!(edit.field, ClipField::Text);
        assert_eq!(edit.value, FieldValue::Text("@top a=b".to_string()));

        assert!(matches!(
            "Text".parse::<FieldEdit>(),
            Err(ClipError::MalformedEdit(_))
        ));
    }

    #[test]
    fn test_apply_all_in_order() {
        let edits = vec![
            FieldEdit::text(ClipField::Start, "1"),
            FieldEdit::text(ClipField::End, "3"),
            FieldEdit::text(ClipField::End, "4"),
        ];
        let clip = ClipConfig::default().apply_all(&edits).unwrap();
        assert_eq!(clip.duration(), Some(3.0));
    }

    #[test]
    fn test_edit_event_json() {
        let edit: FieldEdit =
            serde_json::from_str(r#"{"field": "crop_top", "value": 54}"#).unwrap();
        assert_eq!(edit, FieldEdit::number(ClipField::CropTop, 54.0));

        let edit: FieldEdit =
            serde_json::from_str(r#"{"field": "final_name", "value": "out.mp4"}"#).unwrap();
        assert_eq!(edit, FieldEdit::text(ClipField::FinalName, "out.mp4"));
    }

    #[test]
    fn test_field_json_uses_sheet_keys() {
        for field in ClipField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
            assert_eq!(serde_json::from_str::<ClipField>(&json).unwrap(), field);
        }

        let parsed: FieldEdit = "crop_top=54".parse().unwrap();
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(serde_json::from_str::<FieldEdit>(&json).unwrap(), parsed);

        assert!(serde_json::from_str::<ClipField>(r#""clip_length""#).is_err());
    }
}
