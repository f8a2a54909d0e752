//! Window and Container: The capabilities every screen region implements.
//!
//! A [`Window`] is anything that can be drawn onto the grid, moved, and
//! resized. A [`Container`] additionally accepts child windows and owns
//! them exclusively; layout flows strictly top-down, with parents pushing
//! geometry to children on move/resize.

use std::cell::RefCell;
use std::rc::Rc;

use crate::buffer::Buffer;

/// A drawable, movable, resizable screen region.
///
/// Labels, views, frames, and splits all implement this trait, allowing
/// them to be composed into a heterogeneous window tree. Containers hold
/// children as `Box<dyn Window>`, so a split can be nested inside
/// another split to arbitrary depth.
pub trait Window {
    /// Draw this window (and any children) onto the grid.
    ///
    /// Drawing may recompute lazily maintained state first, hence the
    /// mutable receiver.
    fn draw(&mut self, grid: &mut Buffer);

    /// Move the window to a new absolute origin.
    ///
    /// Containers reposition their children accordingly.
    fn move_to(&mut self, x: u16, y: u16);

    /// Resize the window to a new extent.
    ///
    /// Containers recompute their internal geometry and push the new
    /// sizes down to their children.
    fn resize(&mut self, width: u16, height: u16);
}

/// Shared window handles.
///
/// Containers own their children, so an application that wants to keep
/// driving a widget after placing it (scrolling a label from the input
/// loop, say) places a shared handle instead and keeps a clone. The
/// toolkit is single-threaded and cooperative, which is exactly the
/// model `Rc<RefCell>` serves.
impl<W: Window> Window for Rc<RefCell<W>> {
    fn draw(&mut self, grid: &mut Buffer) {
        self.borrow_mut().draw(grid);
    }

    fn move_to(&mut self, x: u16, y: u16) {
        self.borrow_mut().move_to(x, y);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.borrow_mut().resize(width, height);
    }
}

/// Error returned by [`Container::place`] when every child slot is
/// occupied.
///
/// The rejected window is handed back so the caller can place it
/// elsewhere or free a slot first.
#[derive(thiserror::Error)]
#[error("container is full")]
pub struct ContainerFull(pub Box<dyn Window>);

impl std::fmt::Debug for ContainerFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ContainerFull(..)")
    }
}

/// A window that stores and tiles child windows.
///
/// Containers own their children; a removed child is dropped unless it
/// is reclaimed with a `take` method on the concrete type.
pub trait Container: Window {
    /// Place a window into the first free child slot.
    ///
    /// The child is immediately assigned its origin and extent from the
    /// container's current geometry; no follow-up resize is required.
    fn place(&mut self, window: Box<dyn Window>) -> Result<(), ContainerFull>;
}
