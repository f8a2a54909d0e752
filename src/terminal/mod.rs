//! Terminal module: The flush boundary between the grid and the tty.
//!
//! The toolkit never owns the terminal session. Callers run their own
//! frame loop (clear the grid, draw the window tree, [`present`] the
//! grid) and keep raw-mode and event handling to themselves.

mod output;

pub use output::OutputBuffer;

use crate::buffer::{Buffer, Modifiers, Rgb};
use std::io::Write;
use tracing::trace;

/// Fallback extent when no terminal is attached.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Query the terminal size.
///
/// Used by the full-screen factories at construction time. Falls back
/// to 80x24 when the size cannot be determined (no tty attached).
pub fn screen_size() -> (u16, u16) {
    let (width, height) = crossterm::terminal::size().unwrap_or(DEFAULT_SIZE);
    trace!(width, height, "screen size");
    (width, height)
}

/// Render the whole grid to a writer as ANSI, in a single syscall.
///
/// Wide-character continuation cells are skipped (the preceding wide
/// code point already covers their column), and color sequences are
/// emitted only when the attributes change between cells.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn present<W: Write>(grid: &Buffer, writer: &mut W) -> std::io::Result<()> {
    let mut out = OutputBuffer::with_capacity(grid.len() * 4);
    out.cursor_hide();

    let mut last_fg: Option<Rgb> = None;
    let mut last_bg: Option<Rgb> = None;
    let mut last_modifiers = Modifiers::empty();

    for (y, row) in grid.rows().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        out.cursor_move(0, y as u16);
        for cell in row {
            if cell.is_wide_continuation() {
                continue;
            }
            if cell.modifiers() != last_modifiers {
                // SGR modifiers only stack, so dropping one means
                // resetting and replaying the colors.
                out.reset_attrs();
                out.set_modifiers(cell.modifiers());
                last_modifiers = cell.modifiers();
                last_fg = None;
                last_bg = None;
            }
            if last_fg != Some(cell.fg()) {
                out.set_fg(cell.fg());
                last_fg = Some(cell.fg());
            }
            if last_bg != Some(cell.bg()) {
                out.set_bg(cell.bg());
                last_bg = Some(cell.bg());
            }
            out.write_char(cell.ch());
        }
    }

    out.reset_attrs();
    out.cursor_show();
    out.flush_to(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cell;

    #[test]
    fn test_screen_size_is_nonzero() {
        let (width, height) = screen_size();
        assert!(width > 0);
        assert!(height > 0);
    }

    #[test]
    fn test_present_emits_cells() {
        let mut grid = Buffer::new(4, 2);
        grid.set(0, 0, Cell::new('H'));
        grid.set(1, 0, Cell::new('i'));

        let mut sink = Vec::new();
        present(&grid, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("Hi"));
        assert!(text.starts_with("\x1b[?25l"));
        assert!(text.ends_with("\x1b[?25h"));
    }

    #[test]
    fn test_present_skips_wide_continuations() {
        let mut grid = Buffer::new(4, 1);
        grid.set_char(0, 0, '日', Rgb::WHITE, Rgb::BLACK);

        let mut sink = Vec::new();
        present(&grid, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        // The wide cell appears once, followed directly by the blanks.
        assert!(text.contains("日  "));
        assert!(!text.contains('\0'));
    }
}
