//! # Sash
//!
//! A split-pane widget toolkit for terminal UIs.
//!
//! Sash composes a small set of screen regions (labels, views, frames,
//! and nestable split containers) onto a shared character grid. The
//! interesting machinery is the split layout engine, which negotiates
//! geometry recursively across a tree of containers, and the label's
//! word wrapper, which is unicode-aware with long-word hyphenation and
//! scroll/page state. Everything else is a thin cell-drawing backend.
//!
//! ## Core Concepts
//!
//! - **Window tree**: everything drawable implements [`Window`];
//!   containers own their children and push geometry down on resize
//! - **Split layout**: a [`Split`] divides its rectangle at a
//!   [`SplitLocation`] (fraction or absolute offset, from either edge)
//!   and re-tiles its subtree on every resize
//! - **Lazy labels**: a [`Label`] re-wraps its content against the
//!   current width only when the next draw or scroll needs it
//! - **Frame loop**: the caller clears the grid, draws the tree, and
//!   [`terminal::present`]s the result; the toolkit never owns the tty
//!
//! ## Example
//!
//! ```rust
//! use std::fmt::Write as _;
//! use sash::{Buffer, Label, Rect, Split, Window};
//!
//! // A vertical split: log on the left, help on the right.
//! let mut root = Split::vertical(0.75).with_rect(Rect::new(0, 0, 80, 24));
//!
//! let mut log = Label::new();
//! write!(log, "starting up...").unwrap();
//! root.place(Box::new(log)).unwrap();
//! root.place(Box::new(Label::new().with_borders(true))).unwrap();
//!
//! let mut grid = Buffer::new(80, 24);
//! root.draw(&mut grid);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod layout;
pub mod terminal;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use layout::{Axis, Rect, Slot, Split, SplitLocation};
pub use text::wrap_text;
pub use widget::{Container, ContainerFull, EndOfContent, Frame, Label, View, Window};
