//! Cell: The atomic unit of the character grid.
//!
//! Every window ultimately draws by writing cells. A cell carries one
//! Unicode code point plus its colors and style modifiers; wide (CJK)
//! code points occupy a second continuation column on the grid.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth. Attribute values are passed
/// through to the terminal unmodified; the toolkit imposes no color
/// semantics of its own.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use sash::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::UNDERLINE;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single grid cell.
///
/// Each cell holds exactly one code point. The grid is a per-codepoint
/// surface: a formatted line is placed one code point per cell, and a
/// wide character is followed by a zero-width continuation cell in the
/// next column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The code point to display.
    ch: char,
    /// Display width of the code point (0=continuation, 1=normal, 2=wide CJK).
    display_width: u8,
    /// Foreground color.
    fg: Rgb,
    /// Background color.
    bg: Rgb,
    /// Text modifiers (bold, underline, etc.).
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        ch: ' ',
        display_width: 1,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
    };

    /// Create a new cell from any code point.
    ///
    /// Zero-width code points (combining marks, control characters) get
    /// a display width of 0 and occupy no column on present.
    #[inline]
    pub fn new(ch: char) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let width = UnicodeWidthChar::width(ch).unwrap_or(0) as u8;
        Self {
            ch,
            display_width: width,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a continuation cell for the column after a wide character.
    #[inline]
    pub const fn wide_continuation() -> Self {
        Self {
            ch: '\0',
            display_width: 0,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Get the code point.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.ch == '\0' && self.display_width == 0
    }

    /// Get the display width (0, 1, or 2).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color.
    #[inline]
    pub fn set_fg(&mut self, fg: Rgb) -> &mut Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub fn set_bg(&mut self, bg: Rgb) -> &mut Self {
        self.bg = bg;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Reset the cell to empty (space with default colors).
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch)
            .field("width", &self.display_width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_tuple() {
        let rgb: Rgb = (255, 128, 0).into();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 128);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0xFF8000.into();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 128);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn test_cell_new_ascii() {
        let cell = Cell::new('A');
        assert_eq!(cell.ch(), 'A');
        assert_eq!(cell.display_width(), 1);
    }

    #[test]
    fn test_cell_new_cjk() {
        let cell = Cell::new('日');
        assert_eq!(cell.ch(), '日');
        assert_eq!(cell.display_width(), 2);
    }

    #[test]
    fn test_cell_equality() {
        let a = Cell::new('A').with_fg(Rgb::new(255, 0, 0));
        let b = Cell::new('A').with_fg(Rgb::new(255, 0, 0));
        let c = Cell::new('A').with_fg(Rgb::new(0, 255, 0));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::new('X')
            .with_fg(Rgb::new(255, 0, 0))
            .with_bg(Rgb::new(0, 0, 255))
            .with_modifiers(Modifiers::BOLD | Modifiers::UNDERLINE);

        assert_eq!(cell.fg(), Rgb::new(255, 0, 0));
        assert_eq!(cell.bg(), Rgb::new(0, 0, 255));
        assert!(cell.modifiers().contains(Modifiers::BOLD));
        assert!(cell.modifiers().contains(Modifiers::UNDERLINE));
    }

    #[test]
    fn test_cell_reset() {
        let mut cell = Cell::new('X').with_fg(Rgb::new(255, 0, 0));
        cell.reset();
        assert_eq!(cell, Cell::EMPTY);
    }

    #[test]
    fn test_wide_continuation() {
        let cont = Cell::wide_continuation();
        assert!(cont.is_wide_continuation());
        assert_eq!(cont.display_width(), 0);
    }
}
