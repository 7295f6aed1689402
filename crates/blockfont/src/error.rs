use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BannerError {
    #[error("invalid scale {0}: scale must be >= 1")]
    InvalidScale(u32),
    #[error("fill string must not be empty")]
    EmptyFill,
    #[error("fill string must not contain control characters: {0:?}")]
    InvalidFill(String),
    #[error("invalid glyph pattern: {0}")]
    InvalidGlyph(String),
    #[error("unknown size preset: {0} (expected small, medium, large or huge)")]
    UnknownPreset(String),
    #[error("render target error: {0}")]
    Target(String),
}

pub type Result<T> = std::result::Result<T, BannerError>;
