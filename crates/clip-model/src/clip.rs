//! Clip parameter record.
//!
//! A `ClipConfig` is one immutable snapshot of everything the operator has
//! entered for a clip. Edits produce new snapshots (see `edit`). Derived
//! values such as duration are recomputed on every read.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::field::NumericField;
use crate::text::{has_text, TextDirective};

/// Output resolution / aspect profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    #[serde(rename = "1080p")]
    Hd1080,
    #[serde(rename = "Vertical 9:16")]
    Vertical,
    #[serde(rename = "Square 1:1")]
    Square,
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "4K")]
    Uhd4k,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::Hd1080,
        Profile::Vertical,
        Profile::Square,
        Profile::Hd720,
        Profile::Uhd4k,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Profile::Hd1080 => "1080p",
            Profile::Vertical => "Vertical 9:16",
            Profile::Square => "Square 1:1",
            Profile::Hd720 => "720p",
            Profile::Uhd4k => "4K",
        }
    }

    /// Nominal output dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Profile::Hd1080 => (1920, 1080),
            Profile::Vertical => (1080, 1920),
            Profile::Square => (1080, 1080),
            Profile::Hd720 => (1280, 720),
            Profile::Uhd4k => (3840, 2160),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profile {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| ClipError::UnknownProfile(s.to_string()))
    }
}

/// Transition into the next clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Transition {
    #[serde(rename = "none")]
    None,
    #[default]
    #[serde(rename = "crossfade 300ms")]
    Crossfade300,
    #[serde(rename = "fade")]
    Fade,
    #[serde(rename = "wipeleft")]
    WipeLeft,
}

impl Transition {
    pub const ALL: [Transition; 4] = [
        Transition::None,
        Transition::Crossfade300,
        Transition::Fade,
        Transition::WipeLeft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Transition::None => "none",
            Transition::Crossfade300 => "crossfade 300ms",
            Transition::Fade => "fade",
            Transition::WipeLeft => "wipeleft",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Transition {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transition::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ClipError::UnknownTransition(s.to_string()))
    }
}

/// Per-edge crop margins.
///
/// Canonical pixels when read from a clip, where blank or invalid input reads
/// as zero. Normalized geometry carries the same type in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl CropMargins {
    pub fn is_zero(&self) -> bool {
        !(self.top > 0.0 || self.bottom > 0.0 || self.left > 0.0 || self.right > 0.0)
    }
}

/// The four mask fields as entered, possibly partially filled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaskInput {
    pub x: NumericField,
    pub y: NumericField,
    pub w: NumericField,
    pub h: NumericField,
}

impl MaskInput {
    fn fields(&self) -> [&NumericField; 4] {
        [&self.x, &self.y, &self.w, &self.h]
    }

    /// Number of fields holding any input (including unparsable text).
    pub fn filled_count(&self) -> usize {
        self.fields().iter().filter(|f| f.is_filled()).count()
    }

    /// All four fields hold some input.
    pub fn is_complete(&self) -> bool {
        self.filled_count() == 4
    }

    /// Only 1 to 3 fields hold input.
    pub fn is_partial(&self) -> bool {
        matches!(self.filled_count(), 1..=3)
    }

    /// The mask rectangle, present only when all four fields parse.
    pub fn rect(&self) -> Option<MaskRect> {
        Some(MaskRect {
            x: self.x.integer()?,
            y: self.y.integer()?,
            w: self.w.integer()?,
            h: self.h.integer()?,
        })
    }
}

/// A privacy mask in canonical pixels, relative to the post-crop visible area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// All parameters of a single clip.
///
/// Field names on the wire match the keys of the exported block so a
/// snapshot can be round-tripped through the same sheet columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    /// Ordinal of the clip in its sequence.
    pub position: NumericField,

    /// Source media identifier.
    pub video_name: String,

    /// Start time in seconds.
    #[serde(rename = "Start", alias = "start")]
    pub start: NumericField,

    /// End time in seconds.
    #[serde(rename = "End", alias = "end")]
    pub end: NumericField,

    pub crop_top: NumericField,
    pub crop_bottom: NumericField,
    pub crop_left: NumericField,
    pub crop_right: NumericField,

    pub mask_x: NumericField,
    pub mask_y: NumericField,
    pub mask_w: NumericField,
    pub mask_h: NumericField,

    /// Overlay text, optionally led by a placement tag.
    #[serde(rename = "Text", alias = "text")]
    pub text: String,

    #[serde(rename = "Profile", alias = "profile")]
    pub profile: Profile,

    #[serde(rename = "Transition", alias = "transition")]
    pub transition: Transition,

    /// Export filename.
    #[serde(rename = "FinalName", alias = "final_name")]
    pub final_name: String,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            position: NumericField::from_number(1.0),
            video_name: "product_demo.mp4".to_string(),
            start: NumericField::from_number(5.0),
            end: NumericField::from_number(23.5),
            crop_top: NumericField::from_number(0.0),
            crop_bottom: NumericField::from_number(0.0),
            crop_left: NumericField::from_number(0.0),
            crop_right: NumericField::from_number(0.0),
            mask_x: NumericField::Unset,
            mask_y: NumericField::Unset,
            mask_w: NumericField::Unset,
            mask_h: NumericField::Unset,
            text: String::new(),
            profile: Profile::Hd1080,
            transition: Transition::Crossfade300,
            final_name: "demo-features-v1.mp4".to_string(),
        }
    }
}

impl ClipConfig {
    /// Parse a snapshot from JSON. Missing keys take session defaults.
    pub fn from_json(json: &str) -> Result<Self, ClipError> {
        serde_json::from_str(json).map_err(ClipError::Parse)
    }

    pub fn to_json_pretty(&self) -> Result<String, ClipError> {
        serde_json::to_string_pretty(self).map_err(ClipError::Parse)
    }

    /// `end - start`, when both bounds parse.
    pub fn duration(&self) -> Option<f64> {
        Some(self.end.value()? - self.start.value()?)
    }

    pub fn crop(&self) -> CropMargins {
        CropMargins {
            top: self.crop_top.integer_or_zero(),
            bottom: self.crop_bottom.integer_or_zero(),
            left: self.crop_left.integer_or_zero(),
            right: self.crop_right.integer_or_zero(),
        }
    }

    pub fn mask_input(&self) -> MaskInput {
        MaskInput {
            x: self.mask_x.clone(),
            y: self.mask_y.clone(),
            w: self.mask_w.clone(),
            h: self.mask_h.clone(),
        }
    }

    /// Any crop margin is positive.
    pub fn has_crop(&self) -> bool {
        !self.crop().is_zero()
    }

    /// All four mask fields are filled.
    pub fn has_mask(&self) -> bool {
        self.mask_input().is_complete()
    }

    /// The text field is non-blank.
    pub fn has_text(&self) -> bool {
        has_text(&self.text)
    }

    pub fn text_directive(&self) -> TextDirective {
        TextDirective::parse(&self.text)
    }
}

/// Errors that can occur when building or editing a clip.
#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown profile: {0} (expected one of: 1080p, Vertical 9:16, Square 1:1, 720p, 4K)")]
    UnknownProfile(String),

    #[error("Unknown transition: {0} (expected one of: none, crossfade 300ms, fade, wipeleft)")]
    UnknownTransition(String),

    #[error("Malformed edit: {0} (expected field=value)")]
    MalformedEdit(String),

    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextPosition;

    #[test]
    fn test_default_session_values() {
        let clip = ClipConfig::default();
        assert_eq!(clip.video_name, "product_demo.mp4");
        assert_eq!(clip.duration(), Some(18.5));
        assert!(!clip.has_crop());
        assert!(!clip.has_mask());
        assert!(!clip.has_text());
        assert_eq!(clip.profile, Profile::Hd1080);
        assert_eq!(clip.transition, Transition::Crossfade300);
    }

    #[test]
    fn test_duration_requires_both_bounds() {
        let clip = ClipConfig {
            end: NumericField::parse("soon"),
            ..ClipConfig::default()
        };
        assert_eq!(clip.duration(), None);
    }

    #[test]
    fn test_has_crop_ignores_negative_and_invalid() {
        let mut clip = ClipConfig {
            crop_left: NumericField::from_number(-10.0),
            crop_top: NumericField::parse("wide"),
            ..ClipConfig::default()
        };
        assert!(!clip.has_crop());
        clip.crop_right = NumericField::from_number(1.0);
        assert!(clip.has_crop());
    }

    #[test]
    fn test_mask_rect_requires_all_values() {
        let mut mask = MaskInput {
            x: NumericField::from_number(10.0),
            y: NumericField::from_number(10.0),
            ..MaskInput::default()
        };
        assert!(mask.is_partial());
        assert!(mask.rect().is_none());

        mask.w = NumericField::from_number(100.0);
        mask.h = NumericField::parse("tall");
        assert!(mask.is_complete());
        assert!(mask.rect().is_none());

        mask.h = NumericField::from_number(50.5);
        let rect = mask.rect().unwrap();
        assert_eq!(rect.h, 50.0);
    }

    #[test]
    fn test_profile_and_transition_labels() {
        for p in Profile::ALL {
            assert_eq!(p.label().parse::<Profile>().unwrap(), p);
        }
        for t in Transition::ALL {
            assert_eq!(t.label().parse::<Transition>().unwrap(), t);
        }
        assert!(matches!(
            "8K".parse::<Profile>(),
            Err(ClipError::UnknownProfile(_))
        ));
        assert_eq!(Profile::Vertical.dimensions(), (1080, 1920));
    }

    #[test]
    fn test_json_uses_sheet_keys() {
        let json = ClipConfig::default().to_json_pretty().unwrap();
        assert!(json.contains("\"video_name\""));
        assert!(json.contains("\"Start\": 5.0"));
        assert!(json.contains("\"Profile\": \"1080p\""));
        assert!(json.contains("\"Transition\": \"crossfade 300ms\""));
        assert!(json.contains("\"mask_x\": \"\""));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let clip = ClipConfig::from_json(
            r#"{"Start": "2", "end": 4, "Text": "@top Hi", "Profile": "Square 1:1"}"#,
        )
        .unwrap();
        assert_eq!(clip.duration(), Some(2.0));
        assert_eq!(clip.profile, Profile::Square);
        assert_eq!(clip.text_directive().position, TextPosition::Top);
        assert_eq!(clip.final_name, "demo-features-v1.mp4");
    }

    #[test]
    fn test_unknown_profile_in_json_is_parse_error() {
        let err = ClipConfig::from_json(r#"{"Profile": "8K"}"#).unwrap_err();
        assert!(matches!(err, ClipError::Parse(_)));
    }
}
