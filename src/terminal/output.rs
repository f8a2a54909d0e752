//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::buffer::{Modifiers, Rgb};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()`
/// syscall to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single code point.
    #[inline]
    pub fn write_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.data
            .extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color (true color).
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn set_fg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set background color (true color).
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn set_bg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Emit SGR sequences for the given style modifiers.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        const SGR: [(Modifiers, &[u8]); 6] = [
            (Modifiers::BOLD, b"\x1b[1m"),
            (Modifiers::DIM, b"\x1b[2m"),
            (Modifiers::ITALIC, b"\x1b[3m"),
            (Modifiers::UNDERLINE, b"\x1b[4m"),
            (Modifiers::REVERSED, b"\x1b[7m"),
            (Modifiers::STRIKETHROUGH, b"\x1b[9m"),
        ];
        for (modifier, sequence) in SGR {
            if modifiers.contains(modifier) {
                self.data.extend_from_slice(sequence);
            }
        }
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_buffer_cursor_move() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H");
    }

    #[test]
    fn test_output_buffer_colors() {
        let mut out = OutputBuffer::new();
        out.set_fg(Rgb::new(1, 2, 3));
        assert_eq!(out.as_bytes(), b"\x1b[38;2;1;2;3m");

        out.clear();
        out.set_bg(Rgb::new(9, 8, 7));
        assert_eq!(out.as_bytes(), b"\x1b[48;2;9;8;7m");
    }

    #[test]
    fn test_output_buffer_modifiers() {
        let mut out = OutputBuffer::new();
        out.set_modifiers(Modifiers::BOLD | Modifiers::UNDERLINE);
        assert_eq!(out.as_bytes(), b"\x1b[1m\x1b[4m");
    }

    #[test]
    fn test_output_buffer_write_char() {
        let mut out = OutputBuffer::new();
        out.write_char('A');
        out.write_char('é');
        assert_eq!(out.as_bytes(), "Aé".as_bytes());
    }

    #[test]
    fn test_output_buffer_flush_to() {
        let mut out = OutputBuffer::new();
        out.write_str("hello");

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hello");
    }
}
