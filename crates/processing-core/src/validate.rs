//! Clip validation.
//!
//! Every rule is checked independently and all violations are returned, in
//! rule order. Violations are advisory: geometry and export stay computable
//! for an invalid clip so the operator keeps a live preview while fixing it.

use std::fmt;

use serde::{Deserialize, Serialize};

use clipsheet_clip_model::clip::ClipConfig;
use clipsheet_clip_model::edit::ClipField;

/// A reason a clip fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// `video_name` is empty.
    MissingVideoName,
    /// A time bound is blank or not a number.
    InvalidNumber { field: ClipField },
    /// `End` is not after `Start`.
    InvalidTimeRange,
    /// Some but not all mask fields are filled.
    IncompleteMask { filled: usize },
    /// `FinalName` contains whitespace.
    FinalNameHasSpaces,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingVideoName => f.write_str("Missing video_name"),
            ViolationKind::InvalidNumber { field } => write!(f, "{field} must be a number"),
            ViolationKind::InvalidTimeRange => f.write_str("End time must be after Start time"),
            ViolationKind::IncompleteMask { .. } => {
                f.write_str("Mask requires all 4 fields or leave all blank")
            }
            ViolationKind::FinalNameHasSpaces => f.write_str("FinalName cannot contain spaces"),
        }
    }
}

/// Check a clip snapshot. An empty list means the clip is valid.
pub fn validate(clip: &ClipConfig) -> Vec<ViolationKind> {
    let mut violations = vec![];

    if clip.video_name.is_empty() {
        violations.push(ViolationKind::MissingVideoName);
    }

    for (field, value) in [(ClipField::Start, &clip.start), (ClipField::End, &clip.end)] {
        if value.value().is_none() {
            violations.push(ViolationKind::InvalidNumber { field });
        }
    }

    if let (Some(start), Some(end)) = (clip.start.value(), clip.end.value()) {
        if end <= start {
            violations.push(ViolationKind::InvalidTimeRange);
        }
    }

    let mask = clip.mask_input();
    if mask.is_partial() {
        violations.push(ViolationKind::IncompleteMask {
            filled: mask.filled_count(),
        });
    }

    if clip.final_name.chars().any(char::is_whitespace) {
        violations.push(ViolationKind::FinalNameHasSpaces);
    }

    tracing::debug!(
        violations = violations.len(),
        video = %clip.video_name,
        "Validated clip"
    );

    violations
}
