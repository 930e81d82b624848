//! Combined evaluation of a clip snapshot.

use serde::Serialize;

use clipsheet_clip_model::clip::ClipConfig;
use clipsheet_clip_model::surface::Size;
use clipsheet_clip_model::text::TextDirective;

use crate::normalize::{normalize, NormalizeConfig, NormalizedGeometry};
use crate::validate::{validate, ViolationKind};

/// Everything the presentation layer shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipReport {
    pub violations: Vec<ViolationKind>,
    pub directive: TextDirective,
    pub geometry: NormalizedGeometry,
    /// `End - Start` in seconds, when both parse.
    pub duration: Option<f64>,
    pub has_crop: bool,
    pub has_mask: bool,
    pub has_text: bool,
}

impl ClipReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run validation, text parsing, and normalization against one snapshot.
pub fn evaluate(clip: &ClipConfig, surface: Size, config: &NormalizeConfig) -> ClipReport {
    let report = ClipReport {
        violations: validate(clip),
        directive: clip.text_directive(),
        geometry: normalize(clip, surface, config),
        duration: clip.duration(),
        has_crop: clip.has_crop(),
        has_mask: clip.has_mask(),
        has_text: clip.has_text(),
    };

    tracing::debug!(
        valid = report.is_valid(),
        crop = report.has_crop,
        mask = report.has_mask,
        text = report.has_text,
        width = surface.width,
        height = surface.height,
        "Evaluated clip"
    );

    report
}

#[cfg(test)]
mod tests {
    use clipsheet_clip_model::text::TextPosition;

    use super::*;

    #[test]
    fn test_default_report() {
        let report = evaluate(
            &ClipConfig::default(),
            Size::new(320.0, 180.0),
            &NormalizeConfig::default(),
        );
        assert!(report.is_valid());
        assert_eq!(report.duration, Some(18.5));
        assert!(!report.has_crop && !report.has_mask && !report.has_text);
        assert_eq!(report.directive.position, TextPosition::Bottom);
    }

    #[test]
    fn test_invalid_clip_still_has_geometry() {
        let clip = ClipConfig {
            video_name: String::new(),
            text: "@top Still here".to_string(),
            ..ClipConfig::default()
        };
        let report = evaluate(&clip, Size::new(640.0, 360.0), &NormalizeConfig::default());
        assert!(!report.is_valid());
        assert!(report.geometry.text.is_some());
        assert_eq!(report.directive.display, "Still here");
    }
}
