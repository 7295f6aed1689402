//! blockfont: big ASCII-art banners from a built-in 5x7 bitmap font.
//!
//! ```
//! use blockfont::{render, RenderOptions};
//!
//! let lines = render("HI", &RenderOptions::default()).unwrap();
//! assert_eq!(lines.len(), 7);
//! assert_eq!(lines[3], "#####   #  ");
//! ```

mod error;
pub mod font;
mod glyph;
mod options;
mod render;

pub use error::{BannerError, Result};
pub use glyph::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use options::{RenderOptions, SizePreset, DEFAULT_FILL, DEFAULT_SPACING};
pub use render::{line_width, render, render_into, render_to_string, LineBuffer};

// Test utilities
pub mod test_support;

/// Receives a banner cell by cell, row by row.
///
/// [`render_into`] drives a target left to right and calls [`next_line`]
/// after every finished row, so a target sees exactly `7 * scale` line ends
/// for non-empty text.
///
/// [`next_line`]: BannerTarget::next_line
pub trait BannerTarget {
    type Error: std::fmt::Display;
    fn draw(&mut self, ink: &str) -> std::result::Result<(), Self::Error>;
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;
    fn line_width_hint(&mut self, _width: usize) {}

    /// Emit one blank column.
    /// Default implementation draws a space. Implementors can override
    /// to simply advance the cursor without drawing.
    fn skip(&mut self) -> std::result::Result<(), Self::Error> {
        self.draw(" ")
    }
}
