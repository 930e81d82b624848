//! Overlay text directives.
//!
//! The text field may start with a placement tag followed by a single space:
//! `@top`, `@bottom`, `@center`, or `@mask`. Without a recognized tag the text
//! is placed at the bottom.

use serde::{Deserialize, Serialize};

/// Where overlay text is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Top,
    #[default]
    Bottom,
    Center,
    /// Inside the privacy mask rectangle. Requires a mask.
    Mask,
}

/// Tags in match priority order. Each includes its separating space.
const DIRECTIVE_TAGS: [(&str, TextPosition); 4] = [
    ("@top ", TextPosition::Top),
    ("@bottom ", TextPosition::Bottom),
    ("@center ", TextPosition::Center),
    ("@mask ", TextPosition::Mask),
];

/// Parsed text field: placement plus the string to display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextDirective {
    pub position: TextPosition,
    pub display: String,
}

impl TextDirective {
    /// Parse the raw text field.
    ///
    /// Tags are matched against the trimmed text and stripped exactly. When no
    /// tag matches, the raw text is displayed unchanged.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        for (tag, position) in DIRECTIVE_TAGS {
            if let Some(rest) = trimmed.strip_prefix(tag) {
                return Self {
                    position,
                    display: rest.to_string(),
                };
            }
        }

        Self {
            position: TextPosition::Bottom,
            display: raw.to_string(),
        }
    }
}

/// Whether the raw text field carries anything to show.
pub fn has_text(raw: &str) -> bool {
    !raw.trim().is_empty()
}
