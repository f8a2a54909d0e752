//! View: A coordinate-translating window into the character grid.
//!
//! A view owns no cells. It maps local (x, y) writes into a
//! sub-rectangle of the grid, silently clipping anything that falls
//! outside its extent, so callers can render as if they had the whole
//! screen to themselves.

use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::Rect;
use crate::terminal;
use crate::widget::Window;

/// A sub-rectangle mapping over the shared grid.
///
/// # Example
/// ```
/// use sash::{Buffer, Rect, Rgb, View};
///
/// let mut grid = Buffer::new(80, 24);
/// let view = View::with_rect(Rect::new(10, 5, 20, 10));
///
/// // Lands at (10, 5) on the grid.
/// view.set_cell(&mut grid, 0, 0, '#', Rgb::WHITE, Rgb::BLACK);
/// // Outside the view: clipped, the grid is untouched.
/// view.set_cell(&mut grid, 25, 0, '#', Rgb::WHITE, Rgb::BLACK);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct View {
    rect: Rect,
}

impl View {
    /// Create a full-screen view.
    ///
    /// The extent defaults to the terminal size.
    pub fn new() -> Self {
        let (width, height) = terminal::screen_size();
        Self {
            rect: Rect::from_size(width, height),
        }
    }

    /// Create a view over the given sub-rectangle.
    pub const fn with_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Get the current bounds.
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Write one cell at view-local coordinates.
    ///
    /// Coordinates at or beyond the view's extent are clipped silently;
    /// in-bounds writes are translated by the view's origin before
    /// reaching the grid.
    pub fn set_cell(&self, grid: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb, bg: Rgb) {
        if x >= self.rect.width || y >= self.rect.height {
            return;
        }
        grid.set_char(self.rect.x + x, self.rect.y + y, ch, fg, bg);
    }

    /// Shift the view by a relative offset.
    ///
    /// Content already rendered does not move; future writes land at
    /// the new location.
    pub fn shift(&mut self, dx: i16, dy: i16) {
        self.rect.x = self.rect.x.saturating_add_signed(dx);
        self.rect.y = self.rect.y.saturating_add_signed(dy);
    }

    /// Blank the view's rectangle with the given attributes.
    pub fn clear(&self, grid: &mut Buffer, fg: Rgb, bg: Rgb) {
        let cell = Cell::new(' ').with_fg(fg).with_bg(bg);
        grid.fill_rect(self.rect.x, self.rect.y, self.rect.width, self.rect.height, cell);
    }

    /// Blank the view's rectangle with default attributes.
    pub fn clear_default(&self, grid: &mut Buffer) {
        self.clear(grid, Rgb::DEFAULT_FG, Rgb::DEFAULT_BG);
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl Window for View {
    /// A view owns no content; drawing it is a no-op.
    fn draw(&mut self, _grid: &mut Buffer) {}

    fn move_to(&mut self, x: u16, y: u16) {
        self.rect.x = x;
        self.rect.y = y;
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.rect.width = width;
        self.rect.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_translates_writes() {
        let mut grid = Buffer::new(20, 10);
        let view = View::with_rect(Rect::new(5, 3, 10, 5));

        view.set_cell(&mut grid, 0, 0, 'A', Rgb::WHITE, Rgb::BLACK);
        view.set_cell(&mut grid, 9, 4, 'B', Rgb::WHITE, Rgb::BLACK);

        assert_eq!(grid.get(5, 3).unwrap().ch(), 'A');
        assert_eq!(grid.get(14, 7).unwrap().ch(), 'B');
    }

    #[test]
    fn test_view_clips_out_of_bounds() {
        let mut grid = Buffer::new(20, 10);
        let view = View::with_rect(Rect::new(5, 3, 10, 5));

        view.set_cell(&mut grid, 10, 0, 'X', Rgb::WHITE, Rgb::BLACK);
        view.set_cell(&mut grid, 0, 5, 'X', Rgb::WHITE, Rgb::BLACK);

        // Nothing escaped the view's rectangle.
        for y in 0..10 {
            for x in 0..20 {
                assert_eq!(grid.get(x, y).unwrap().ch(), ' ');
            }
        }
    }

    #[test]
    fn test_view_shift_is_relative() {
        let mut view = View::with_rect(Rect::new(5, 3, 10, 5));
        view.shift(2, -1);
        assert_eq!(view.rect(), Rect::new(7, 2, 10, 5));

        // Saturates instead of wrapping.
        view.shift(-100, 0);
        assert_eq!(view.rect().x, 0);
    }

    #[test]
    fn test_view_move_to_is_absolute() {
        let mut view = View::with_rect(Rect::new(5, 3, 10, 5));
        view.move_to(1, 1);
        assert_eq!(view.rect(), Rect::new(1, 1, 10, 5));
    }

    #[test]
    fn test_view_clear() {
        let mut grid = Buffer::new(20, 10);
        grid.set(6, 4, crate::buffer::Cell::new('X'));
        grid.set(0, 0, crate::buffer::Cell::new('K'));

        let view = View::with_rect(Rect::new(5, 3, 10, 5));
        view.clear_default(&mut grid);

        assert_eq!(grid.get(6, 4).unwrap().ch(), ' ');
        assert_eq!(grid.get(0, 0).unwrap().ch(), 'K'); // outside untouched
    }
}
