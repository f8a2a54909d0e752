//! Widget module: The window tree.
//!
//! Every screen region implements [`Window`]; containers additionally
//! implement [`Container`] and own their children exclusively. The
//! resident widgets:
//!
//! - [`Label`]: scrollable word-wrapped text area
//! - [`View`]: coordinate-translating window into the grid
//! - [`Frame`]: single-slot pass-through container
//!
//! The split container lives in [`crate::layout`] next to the geometry
//! it negotiates.

mod frame;
mod label;
mod view;
mod window;

pub use frame::Frame;
pub use label::{EndOfContent, Label};
pub use view::View;
pub use window::{Container, ContainerFull, Window};
