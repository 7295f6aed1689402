//! Settings file for the command line shell.
//!
//! ```toml
//! [defaults]
//! size = "large"
//! char = "#"
//! spacing = 1
//!
//! [branding]
//! title = "ACME build server"
//! ```
//!
//! Looked up at `--config <path>` or `config.toml` in the platform config
//! directory. The renderer never reads this file; the shell turns it into
//! [`RenderOptions`] and prints the branding lines itself.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use blockfont::{RenderOptions, SizePreset, DEFAULT_FILL, DEFAULT_SPACING};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: Defaults,
    pub branding: Branding,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizePreset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(rename = "char", skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Printed above the banner on standard output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Printed below the banner on standard output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// Values given on the command line. They win over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub size: Option<SizePreset>,
    pub scale: Option<u32>,
    pub fill: Option<String>,
    pub spacing: Option<usize>,
}

pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "blockfont", "blockfont").map(|d| d.config_dir().join("config.toml"))
}

impl Settings {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load an explicit file, or the default one if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("loading config from {}", path.display());
            return Self::read(path);
        }
        match default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("loading config from {}", path.display());
                Self::read(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Merge command line overrides, the file and built-in defaults.
    ///
    /// An explicit scale beats a size preset from the same source, and the
    /// command line beats the file. Without either the `large` preset applies.
    pub fn render_options(&self, cli: &Overrides) -> RenderOptions {
        let scale = cli
            .scale
            .or(cli.size.map(SizePreset::scale))
            .or(self.defaults.scale)
            .or(self.defaults.size.map(SizePreset::scale))
            .unwrap_or_else(|| SizePreset::default().scale());
        let fill = cli
            .fill
            .clone()
            .or_else(|| self.defaults.fill.clone())
            .unwrap_or_else(|| DEFAULT_FILL.to_string());
        let spacing = cli
            .spacing
            .or(self.defaults.spacing)
            .unwrap_or(DEFAULT_SPACING);
        RenderOptions {
            scale,
            fill,
            spacing,
        }
    }

    /// The settings that would actually be used, with every default filled in.
    pub fn effective(&self, cli: &Overrides) -> Settings {
        let options = self.render_options(cli);
        Settings {
            defaults: Defaults {
                size: SizePreset::from_scale(options.scale),
                scale: Some(options.scale),
                fill: Some(options.fill),
                spacing: Some(options.spacing),
            },
            branding: self.branding.clone(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
