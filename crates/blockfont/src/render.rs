use std::convert::Infallible;

use crate::{
    error::{BannerError, Result},
    font,
    glyph::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH},
    options::RenderOptions,
    BannerTarget,
};

/// Collects rendered rows into owned strings.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
    cur: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished lines. A row that was started but never ended is dropped.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl BannerTarget for LineBuffer {
    type Error = Infallible;

    fn draw(&mut self, ink: &str) -> std::result::Result<(), Self::Error> {
        self.cur.push_str(ink);
        Ok(())
    }

    fn skip(&mut self) -> std::result::Result<(), Self::Error> {
        self.cur.push(' ');
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.lines.push(std::mem::take(&mut self.cur));
        Ok(())
    }

    fn line_width_hint(&mut self, width: usize) {
        self.cur.reserve(width);
    }
}

/// Width in columns (chars) of every line produced for `text`.
///
/// Zero for empty text. Spacing is only inserted between glyphs.
pub fn line_width(text: &str, options: &RenderOptions) -> usize {
    let count = text.chars().count();
    if count == 0 {
        return 0;
    }
    let glyph_width = GLYPH_WIDTH * options.scale as usize * options.cell_width();
    count * glyph_width + (count - 1) * options.spacing
}

/// Render `text` into `target`.
///
/// Options are validated before anything is drawn. Empty text draws nothing
/// and produces no line ends.
pub fn render_into<T: BannerTarget>(
    target: &mut T,
    text: &str,
    options: &RenderOptions,
) -> Result<()> {
    options.validate()?;
    let glyphs: Vec<Glyph> = text.chars().map(font::glyph_or_blank).collect();
    if glyphs.is_empty() {
        return Ok(());
    }
    tracing::trace!(
        chars = glyphs.len(),
        scale = options.scale,
        spacing = options.spacing,
        "rendering banner"
    );

    let scale = options.scale as usize;
    let cell_width = options.cell_width();
    let width = line_width(text, options);
    let fail = |e: T::Error| BannerError::Target(e.to_string());

    for row in 0..GLYPH_HEIGHT {
        for _ in 0..scale {
            target.line_width_hint(width);
            for (i, glyph) in glyphs.iter().enumerate() {
                if i > 0 {
                    for _ in 0..options.spacing {
                        target.skip().map_err(fail)?;
                    }
                }
                for col in 0..GLYPH_WIDTH {
                    let on = glyph.is_on(row, col);
                    for _ in 0..scale {
                        if on {
                            target.draw(&options.fill).map_err(fail)?;
                        } else {
                            for _ in 0..cell_width {
                                target.skip().map_err(fail)?;
                            }
                        }
                    }
                }
            }
            target.next_line().map_err(fail)?;
        }
    }
    Ok(())
}

/// Render `text` as `7 * scale` lines of equal width, or no lines for empty text.
pub fn render(text: &str, options: &RenderOptions) -> Result<Vec<String>> {
    let mut buffer = LineBuffer::new();
    render_into(&mut buffer, text, options)?;
    Ok(buffer.into_lines())
}

/// [`render`] joined with `'\n'`, without a trailing newline.
pub fn render_to_string(text: &str, options: &RenderOptions) -> Result<String> {
    Ok(render(text, options)?.join("\n"))
}
