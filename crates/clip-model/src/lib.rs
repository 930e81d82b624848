//! Clipsheet Clip Model
//!
//! Defines the data contracts for authoring a single clip:
//! - **Fields:** Raw numeric input kept as `Unset | Invalid | Value`
//! - **Clip:** The full parameter record and its derived values
//! - **Edits:** One-field-at-a-time changes producing new snapshots
//! - **Text:** The `@top|@bottom|@center|@mask` placement directive
//!
//! Crop and mask values are authored in a canonical 1920x1080 pixel frame;
//! `surface` holds the rectangle types geometry is resolved into.

pub mod clip;
pub mod edit;
pub mod field;
pub mod surface;
pub mod text;

pub use clip::*;
pub use edit::*;
pub use field::*;
pub use surface::*;
pub use text::*;
