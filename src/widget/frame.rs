//! Frame: A single-slot pass-through container.
//!
//! A frame forwards its geometry and draw calls to one child. It is the
//! degenerate container: useful as a stable mount point whose content
//! can be swapped without touching the rest of the tree.

use crate::buffer::Buffer;
use crate::widget::{Container, ContainerFull, Window};
use crate::layout::Rect;

/// A container holding at most one child, spanning the frame exactly.
pub struct Frame {
    rect: Rect,
    child: Option<Box<dyn Window>>,
}

impl Frame {
    /// Create an empty frame with zero extent.
    pub fn new() -> Self {
        Self {
            rect: Rect::ZERO,
            child: None,
        }
    }

    /// Set the bounds (builder pattern), pushing geometry to the child.
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.move_to(rect.x, rect.y);
        self.resize(rect.width, rect.height);
        self
    }

    /// Get the current bounds.
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Place a window into the frame, replacing any current child.
    ///
    /// The child immediately receives the frame's origin and extent.
    pub fn place(&mut self, mut window: Box<dyn Window>) {
        window.move_to(self.rect.x, self.rect.y);
        window.resize(self.rect.width, self.rect.height);
        self.child = Some(window);
    }

    /// Drop the child, if any.
    pub fn remove(&mut self) {
        self.child = None;
    }

    /// Take the child out of the frame, reclaiming ownership.
    pub fn take(&mut self) -> Option<Box<dyn Window>> {
        self.child.take()
    }

    /// Borrow the child, if any.
    pub fn child(&self) -> Option<&dyn Window> {
        self.child.as_deref()
    }

    /// Mutably borrow the child, if any.
    pub fn child_mut(&mut self) -> Option<&mut (dyn Window + 'static)> {
        self.child.as_deref_mut()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Window for Frame {
    fn draw(&mut self, grid: &mut Buffer) {
        if let Some(child) = &mut self.child {
            child.draw(grid);
        }
    }

    fn move_to(&mut self, x: u16, y: u16) {
        self.rect.x = x;
        self.rect.y = y;
        if let Some(child) = &mut self.child {
            child.move_to(x, y);
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.rect.width = width;
        self.rect.height = height;
        if let Some(child) = &mut self.child {
            child.resize(width, height);
        }
    }
}

impl Container for Frame {
    /// Frames never refuse a window; placing replaces the child.
    fn place(&mut self, window: Box<dyn Window>) -> Result<(), ContainerFull> {
        Self::place(self, window);
        Ok(())
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("rect", &self.rect)
            .field("occupied", &self.child.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Label;

    #[test]
    fn test_frame_forwards_geometry() {
        let mut frame = Frame::new().with_rect(Rect::new(0, 0, 40, 10));
        frame.place(Box::new(Label::new()));

        frame.move_to(5, 2);
        frame.resize(30, 8);
        assert_eq!(frame.rect(), Rect::new(5, 2, 30, 8));
    }

    #[test]
    fn test_frame_place_assigns_geometry() {
        let mut frame = Frame::new().with_rect(Rect::new(3, 4, 20, 6));
        frame.place(Box::new(Label::new().with_borders(false)));

        let mut grid = Buffer::new(40, 20);
        let mut label = Label::new();
        label.write("probe");
        frame.place(Box::new(label));
        frame.draw(&mut grid);

        // The replacing child spans the frame, so its text lands at the
        // frame's origin.
        assert_eq!(grid.get(3, 4).unwrap().ch(), 'p');
    }

    #[test]
    fn test_frame_take_and_remove() {
        let mut frame = Frame::new().with_rect(Rect::new(0, 0, 10, 4));
        frame.place(Box::new(Label::new()));
        assert!(frame.child().is_some());

        assert!(frame.take().is_some());
        assert!(frame.child().is_none());

        frame.remove(); // no-op on empty
        assert!(frame.child().is_none());
    }
}
