use crate::error::{BannerError, Result};

/// Number of cell columns in every glyph.
pub const GLYPH_WIDTH: usize = 5;
/// Number of cell rows in every glyph.
pub const GLYPH_HEIGHT: usize = 7;

const ROW_MASK: u8 = (1 << GLYPH_WIDTH) - 1;

/// A fixed 5x7 bitmap.
///
/// Each row is stored as a 5 bit mask, most significant bit is the leftmost
/// column. Bits above the fifth are masked off on construction, so every glyph
/// has exactly 7 rows of exactly 5 cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// The all-off glyph substituted for characters the font does not define.
    pub const BLANK: Glyph = Glyph::from_bits([0; GLYPH_HEIGHT]);

    pub const fn from_bits(bits: [u8; GLYPH_HEIGHT]) -> Self {
        let mut rows = [0u8; GLYPH_HEIGHT];
        let mut i = 0;
        while i < GLYPH_HEIGHT {
            rows[i] = bits[i] & ROW_MASK;
            i += 1;
        }
        Self { rows }
    }

    /// Parse a textual pattern of seven `"01110"` style rows.
    pub fn from_pattern(pattern: &[&str]) -> Result<Self> {
        if pattern.len() != GLYPH_HEIGHT {
            return Err(BannerError::InvalidGlyph(format!(
                "expected {GLYPH_HEIGHT} rows, got {}",
                pattern.len()
            )));
        }
        let mut rows = [0u8; GLYPH_HEIGHT];
        for (row, line) in rows.iter_mut().zip(pattern) {
            if line.chars().count() != GLYPH_WIDTH {
                return Err(BannerError::InvalidGlyph(format!(
                    "row {line:?} is not {GLYPH_WIDTH} cells wide"
                )));
            }
            for ch in line.chars() {
                *row <<= 1;
                match ch {
                    '1' | '#' => *row |= 1,
                    '0' | '.' | ' ' => {}
                    other => {
                        return Err(BannerError::InvalidGlyph(format!(
                            "unexpected cell {other:?} in row {line:?}"
                        )))
                    }
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        if row >= GLYPH_HEIGHT || col >= GLYPH_WIDTH {
            return false;
        }
        self.rows[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }

    /// Raw row bitmasks, top to bottom.
    pub fn bits(&self) -> [u8; GLYPH_HEIGHT] {
        self.rows
    }

    /// The glyph as rows of on/off cells.
    pub fn cells(&self) -> [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT] {
        let mut out = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.is_on(r, c);
            }
        }
        out
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| *r == 0)
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}
