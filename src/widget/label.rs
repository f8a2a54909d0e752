//! Label: A scrollable text area.
//!
//! A label accumulates raw content lines and derives a formatted buffer
//! from them lazily: every line word-wrapped to the label's interior
//! width. The buffer is recomputed at most once per geometry or content
//! change, at the top of the next read-path operation (draw or scroll).
//! A scroll cursor indexes into the formatted buffer; paging is sugar
//! over scrolling by one view height.

use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::Rect;
use crate::text::wrap_text;
use crate::widget::Window;
use tracing::trace;

/// Scroll position clamped at a content boundary.
///
/// Informational, not fatal: the label stays at the clamped position
/// and keeps rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("end of content")]
pub struct EndOfContent;

/// A text area with word wrapping, scrolling, and optional borders.
///
/// # Example
/// ```
/// use std::fmt::Write as _;
/// use sash::{Buffer, Label, Rect, Window};
///
/// let mut label = Label::new().with_rect(Rect::new(0, 0, 20, 5));
/// write!(label, "hello from the toolkit").unwrap();
///
/// let mut grid = Buffer::new(80, 24);
/// label.draw(&mut grid);
/// assert_eq!(grid.get(0, 0).unwrap().ch(), 'h');
/// ```
pub struct Label {
    /// Position and size.
    rect: Rect,
    /// Whether a box is drawn along the perimeter.
    borders: bool,
    /// Interior width available to text.
    view_width: u16,
    /// Interior height available to text.
    view_height: u16,
    /// Foreground attribute, passed through to cells unmodified.
    fg: Rgb,
    /// Background attribute, passed through to cells unmodified.
    bg: Rgb,
    /// Raw content lines in write order.
    content: Vec<String>,
    /// Formatted buffer: every line fits the interior width.
    buffer: Vec<String>,
    /// Index of the first visible formatted line.
    start_line: usize,
    /// Formatted buffer is stale relative to content or geometry.
    dirty: bool,
}

impl Label {
    /// Create an empty label with zero extent.
    pub fn new() -> Self {
        Self {
            rect: Rect::ZERO,
            borders: false,
            view_width: 0,
            view_height: 0,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            content: Vec::new(),
            buffer: Vec::new(),
            start_line: 0,
            dirty: false,
        }
    }

    /// Set the bounds (builder pattern).
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.move_to(rect.x, rect.y);
        self.resize(rect.width, rect.height);
        self
    }

    /// Enable or disable borders (builder pattern).
    #[must_use]
    pub fn with_borders(mut self, borders: bool) -> Self {
        self.set_borders(borders);
        self
    }

    /// Set the foreground attribute (builder pattern).
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background attribute (builder pattern).
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Get the current bounds.
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Interior size available to text, after the border allowance.
    pub const fn view_size(&self) -> (u16, u16) {
        (self.view_width, self.view_height)
    }

    /// Index of the first visible formatted line.
    pub const fn start_line(&self) -> usize {
        self.start_line
    }

    /// Set the foreground attribute for subsequent draws.
    pub fn set_fg(&mut self, fg: Rgb) {
        self.fg = fg;
    }

    /// Set the background attribute for subsequent draws.
    pub fn set_bg(&mut self, bg: Rgb) {
        self.bg = bg;
    }

    /// Enable or disable the perimeter box.
    ///
    /// Borders reserve a fixed allowance: 4 cells off the width and 4
    /// off the height (a 2-cell margin on each side). The interior
    /// saturates at zero, so a tiny bordered label shows no text.
    pub fn set_borders(&mut self, borders: bool) {
        self.borders = borders;
        self.update_view_size();
        self.dirty = true;
    }

    /// Recompute the interior size from the extent and border flag.
    fn update_view_size(&mut self) {
        let interior = if self.borders { self.rect.shrink(2) } else { self.rect };
        self.view_width = interior.width;
        self.view_height = interior.height;
    }

    /// Append text to the label. Never fails.
    ///
    /// The text is split on newlines and each fragment becomes a new
    /// content line; every call starts a new line. No width limit is
    /// applied here; wrapping happens lazily against the interior
    /// width current at the next draw or scroll. Returns the number of
    /// bytes consumed.
    pub fn write(&mut self, text: &str) -> usize {
        for fragment in text.split('\n') {
            self.content.push(fragment.to_owned());
        }
        self.dirty = true;
        text.len()
    }

    /// Drop all content and reset the scroll position.
    ///
    /// The next read-path operation recomputes an empty buffer.
    pub fn clear(&mut self) {
        self.content.clear();
        self.start_line = 0;
        self.dirty = true;
    }

    /// Recompute the formatted buffer if it is stale.
    fn ensure_fresh(&mut self) {
        if !self.dirty {
            return;
        }
        self.buffer = if self.view_width == 0 {
            Vec::new()
        } else {
            let limit = self.view_width as usize;
            self.content
                .iter()
                .flat_map(|line| wrap_text(line, limit))
                .collect()
        };
        trace!(
            content_lines = self.content.len(),
            formatted_lines = self.buffer.len(),
            width = self.view_width,
            "label reflowed"
        );
        self.dirty = false;
    }

    /// Number of lines in the formatted buffer, reflowing first if
    /// needed.
    pub fn line_count(&mut self) -> usize {
        self.ensure_fresh();
        self.buffer.len()
    }

    /// Move the scroll cursor by `amount` formatted lines.
    ///
    /// Scrolling past either boundary clamps the cursor and reports
    /// [`EndOfContent`]. The end clamp lands on the last buffer line
    /// rather than the last full page, so the final position shows a
    /// mostly blank page; scrolling to exactly one past the last line
    /// succeeds silently. Both are long-standing observed behavior.
    pub fn scroll(&mut self, amount: isize) -> Result<(), EndOfContent> {
        self.ensure_fresh();
        #[allow(clippy::cast_possible_wrap)]
        let len = self.buffer.len() as isize;
        #[allow(clippy::cast_possible_wrap)]
        let target = self.start_line as isize + amount;

        if target > len {
            self.start_line = self.buffer.len().saturating_sub(1);
            return Err(EndOfContent);
        }
        if target < 0 {
            self.start_line = 0;
            return Err(EndOfContent);
        }
        #[allow(clippy::cast_sign_loss)]
        {
            self.start_line = target as usize;
        }
        Ok(())
    }

    /// Scroll forward by one view height.
    pub fn next_page(&mut self) -> Result<(), EndOfContent> {
        self.scroll(self.view_height as isize)
    }

    /// Scroll backward by one view height.
    pub fn prev_page(&mut self) -> Result<(), EndOfContent> {
        self.scroll(-(self.view_height as isize))
    }

    /// Blank the label's whole rectangle, then draw.
    pub fn redraw(&mut self, grid: &mut Buffer) {
        grid.fill_rect(
            self.rect.x,
            self.rect.y,
            self.rect.width,
            self.rect.height,
            Cell::EMPTY.with_bg(self.bg),
        );
        self.draw(grid);
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl Window for Label {
    fn draw(&mut self, grid: &mut Buffer) {
        self.ensure_fresh();

        if self.borders {
            grid.draw_box(self.rect.x, self.rect.y, self.rect.width, self.rect.height);
        }

        let (origin_x, origin_y) = if self.borders {
            (self.rect.x + 2, self.rect.y + 2)
        } else {
            (self.rect.x, self.rect.y)
        };

        for row in 0..self.view_height {
            let line = self.buffer.get(self.start_line + row as usize);
            let mut chars = line.map_or_else(|| "".chars(), |line| line.chars());
            for col in 0..self.view_width {
                // Rows past the buffer end and columns past each line's
                // end fill with blanks.
                let ch = chars.next().unwrap_or(' ');
                grid.set_char(origin_x + col, origin_y + row, ch, self.fg, self.bg);
            }
        }
    }

    fn move_to(&mut self, x: u16, y: u16) {
        self.rect.x = x;
        self.rect.y = y;
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.rect.width = width;
        self.rect.height = height;
        self.update_view_size();
        self.dirty = true;
    }
}

impl std::fmt::Write for Label {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.write(s);
        Ok(())
    }

    // The macro default streams each format fragment as a separate
    // write_str call, which would scatter one formatted string across
    // content lines. Format first, append once.
    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) -> std::fmt::Result {
        self.write(&args.to_string());
        Ok(())
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label")
            .field("rect", &self.rect)
            .field("borders", &self.borders)
            .field("content_lines", &self.content.len())
            .field("start_line", &self.start_line)
            .field("dirty", &self.dirty)
            .finish()
    }
}
