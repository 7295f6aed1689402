use std::{fmt, str::FromStr};

use crate::error::{BannerError, Result};

pub const DEFAULT_FILL: &str = "#";
pub const DEFAULT_SPACING: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Each font cell becomes a `scale x scale` block.
    pub scale: u32,
    /// Drawn for every on-cell. Off-cells are padded with spaces to the same width.
    pub fill: String,
    /// Blank columns between adjacent glyphs.
    /// Counted in output columns, not cells: it is neither scaled nor widened by a multi-char fill.
    pub spacing: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            fill: DEFAULT_FILL.to_string(),
            spacing: DEFAULT_SPACING,
        }
    }
}

impl RenderOptions {
    pub fn preset(preset: SizePreset) -> Self {
        Self {
            scale: preset.scale(),
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Width in columns of a single on- or off-cell before scaling.
    pub fn cell_width(&self) -> usize {
        self.fill.chars().count()
    }

    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 {
            return Err(BannerError::InvalidScale(self.scale));
        }
        if self.fill.is_empty() {
            return Err(BannerError::EmptyFill);
        }
        if self.fill.chars().any(char::is_control) {
            return Err(BannerError::InvalidFill(self.fill.clone()));
        }
        Ok(())
    }
}

/// Named scale shortcuts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizePreset {
    Small,
    Medium,
    #[default]
    Large,
    Huge,
}

impl SizePreset {
    pub const ALL: [SizePreset; 4] = [
        SizePreset::Small,
        SizePreset::Medium,
        SizePreset::Large,
        SizePreset::Huge,
    ];

    pub fn scale(self) -> u32 {
        match self {
            SizePreset::Small => 1,
            SizePreset::Medium => 2,
            SizePreset::Large => 4,
            SizePreset::Huge => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
            SizePreset::Huge => "huge",
        }
    }

    /// The preset whose scale is exactly `scale`, if any.
    pub fn from_scale(scale: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.scale() == scale)
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizePreset {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BannerError::UnknownPreset(s.to_string()))
    }
}
