//! Test support utilities for blockfont.
//!
//! This module provides helper types and functions that are useful for testing
//! banner rendering, but are not part of the public API.

use crate::{BannerError, BannerTarget};

/// A memory grid target useful for tests.
///
/// Records every column as on (`true`, something other than a space was
/// drawn) or off, one `Vec` per finished line.
#[derive(Debug, Default)]
pub struct GridTarget {
    pub lines: Vec<Vec<bool>>,
    cur: Vec<bool>,
    pub width_hints: Vec<usize>,
}

impl GridTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column `col` of every line, top to bottom.
    pub fn column(&self, col: usize) -> Vec<bool> {
        self.lines
            .iter()
            .map(|l| l.get(col).copied().unwrap_or(false))
            .collect()
    }
}

impl BannerTarget for GridTarget {
    type Error = BannerError;

    fn draw(&mut self, ink: &str) -> std::result::Result<(), Self::Error> {
        for ch in ink.chars() {
            self.cur.push(ch != ' ');
        }
        Ok(())
    }

    fn skip(&mut self) -> std::result::Result<(), Self::Error> {
        self.cur.push(false);
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.lines.push(std::mem::take(&mut self.cur));
        Ok(())
    }

    fn line_width_hint(&mut self, width: usize) {
        self.width_hints.push(width);
    }
}

/// A target that refuses to draw, for exercising error propagation.
#[derive(Debug, Default)]
pub struct FailingTarget;

impl BannerTarget for FailingTarget {
    type Error = std::fmt::Error;

    fn draw(&mut self, _ink: &str) -> std::result::Result<(), Self::Error> {
        Err(std::fmt::Error)
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        Err(std::fmt::Error)
    }
}
