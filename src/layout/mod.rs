//! Layout module: Window geometry and the split layout engine.
//!
//! Geometry flows strictly top-down: a split pushes fresh origins and
//! extents to its children on every move or resize, recursing through
//! nested splits. Nothing is cached across resizes; the divider
//! coordinate is re-resolved from the current extent on every query.

mod rect;
mod split;

pub use rect::Rect;
pub use split::{Axis, Slot, Split, SplitLocation};
