//! Clipsheet Processing Core
//!
//! Turns a clip snapshot into everything the presentation layer shows:
//! - **Validation:** Advisory rule violations, all collected
//! - **Normalization:** Crop bands, mask, and text anchor on any surface
//! - **Export:** The fixed-order `key: value` block for the tracking sheet
//!
//! This crate is pure computation. No I/O, no shared state; every function
//! can be re-run on each edit.

pub mod export;
pub mod normalize;
pub mod report;
pub mod validate;

pub use export::{export_block, render_block, serialize_clip, ExportEntry, EXPORT_KEYS};
pub use normalize::{normalize, NormalizeConfig, NormalizedGeometry};
pub use report::{evaluate, ClipReport};
pub use validate::{validate, ViolationKind};
