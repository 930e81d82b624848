//! Geometry normalization.
//!
//! Crop and mask values are authored in canonical 1920x1080 pixels. This
//! module resolves them onto an arbitrary target surface, crop first, then the
//! mask inside the visible (post-crop) area, then the text anchor.
//!
//! The mask is scaled by `visible / canonical`, not `visible / cropped
//! canonical`: mask coordinates are canonical pixels applied as a fraction of
//! the visible area. Renderers depend on this exact mapping.
//!
//! Output is linear in the surface size and is never clamped.

use serde::{Deserialize, Serialize};

use clipsheet_clip_model::clip::{ClipConfig, CropMargins};
use clipsheet_clip_model::surface::{Edge, Rect, Size, CANONICAL_HEIGHT, CANONICAL_WIDTH};
use clipsheet_clip_model::text::TextPosition;

/// Configuration for geometry normalization.
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Gap between overlay text and the crop-adjusted frame edges, in
    /// canonical pixels. Scaled per axis like crop margins.
    pub text_inset: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self { text_inset: 60.0 }
    }
}

/// Hatched band covering one cropped edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropBand {
    pub edge: Edge,
    pub rect: Rect,
}

/// Where the text box is anchored on the surface.
///
/// Edge anchors give the horizontal span; the box height is up to the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "anchor", rename_all = "snake_case")]
pub enum TextAnchor {
    /// Top of the box at `y`.
    Top { x: f64, width: f64, y: f64 },
    /// Bottom of the box at `y`.
    Bottom { x: f64, width: f64, y: f64 },
    /// Box vertically centered on `y`.
    Center { x: f64, width: f64, y: f64 },
    /// Box fills `rect`, text centered inside.
    Fill { rect: Rect },
}

/// Text to draw and where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub position: TextPosition,
    pub display: String,
    pub anchor: TextAnchor,
}

/// Everything the preview needs to draw a clip on one surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedGeometry {
    /// The surface this geometry was resolved for.
    pub surface: Size,

    /// Crop margins in surface units.
    pub crop: CropMargins,

    /// The post-crop area. Extents may be negative.
    pub visible: Rect,

    /// One band per edge with a positive margin.
    pub crop_bands: Vec<CropBand>,

    /// Mask on the surface, when fully specified and of positive size.
    pub mask: Option<Rect>,

    /// Overlay text, when there is text and it can be anchored.
    pub text: Option<TextOverlay>,
}

/// Resolve a clip's crop, mask, and text onto a `surface`.
pub fn normalize(clip: &ClipConfig, surface: Size, config: &NormalizeConfig) -> NormalizedGeometry {
    let (sx, sy) = (surface.scale_x(), surface.scale_y());

    let canonical = clip.crop();
    let crop = CropMargins {
        top: canonical.top * sy,
        bottom: canonical.bottom * sy,
        left: canonical.left * sx,
        right: canonical.right * sx,
    };

    let visible = Rect::new(
        crop.left,
        crop.top,
        surface.width - crop.left - crop.right,
        surface.height - crop.top - crop.bottom,
    );

    let crop_bands = crop_bands(&crop, surface);

    let mask = clip
        .mask_input()
        .rect()
        .map(|m| {
            let mx = visible.w / CANONICAL_WIDTH;
            let my = visible.h / CANONICAL_HEIGHT;
            Rect::new(
                crop.left + m.x * mx,
                crop.top + m.y * my,
                m.w * mx,
                m.h * my,
            )
        })
        .filter(Rect::has_area);

    let text = if clip.has_text() {
        let directive = clip.text_directive();
        let inset_x = config.text_inset * sx;
        let inset_y = config.text_inset * sy;
        let x = crop.left + inset_x;
        let width = visible.w - 2.0 * inset_x;

        let anchor = match directive.position {
            TextPosition::Top => Some(TextAnchor::Top {
                x,
                width,
                y: crop.top + inset_y,
            }),
            TextPosition::Bottom => Some(TextAnchor::Bottom {
                x,
                width,
                y: surface.height - crop.bottom - inset_y,
            }),
            TextPosition::Center => Some(TextAnchor::Center {
                x,
                width,
                y: surface.height / 2.0,
            }),
            TextPosition::Mask => mask.map(|rect| TextAnchor::Fill { rect }),
        };

        if anchor.is_none() {
            tracing::debug!("Mask-anchored text has no mask, not rendered");
        }

        anchor.map(|anchor| TextOverlay {
            position: directive.position,
            display: directive.display,
            anchor,
        })
    } else {
        None
    };

    NormalizedGeometry {
        surface,
        crop,
        visible,
        crop_bands,
        mask,
        text,
    }
}

fn crop_bands(crop: &CropMargins, surface: Size) -> Vec<CropBand> {
    let (w, h) = (surface.width, surface.height);
    [
        (Edge::Top, crop.top, Rect::new(0.0, 0.0, w, crop.top)),
        (
            Edge::Bottom,
            crop.bottom,
            Rect::new(0.0, h - crop.bottom, w, crop.bottom),
        ),
        (Edge::Left, crop.left, Rect::new(0.0, 0.0, crop.left, h)),
        (
            Edge::Right,
            crop.right,
            Rect::new(w - crop.right, 0.0, crop.right, h),
        ),
    ]
    .into_iter()
    .filter(|(_, margin, _)| *margin > 0.0)
    .map(|(edge, _, rect)| CropBand { edge, rect })
    .collect()
}
