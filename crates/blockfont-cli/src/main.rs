use std::{
    io::{self, IsTerminal, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use blockfont::{font, render, SizePreset};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Overrides, Settings};
mod config;
mod output;

/// Render text as big ASCII-art letters using a built-in 5x7 font.
#[derive(Parser, Debug)]
#[command(name = "blockfont", version, about, long_about = None)]
struct Cli {
    /// Text to render (read from stdin when omitted and stdin is piped)
    text: Option<String>,

    /// Draw character or string for lit cells, e.g. '█' for denser output
    #[arg(short = 'c', long = "char")]
    fill: Option<String>,

    /// Scale factor (>= 1). Overrides --size
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    scale: Option<u32>,

    /// Size preset: small, medium, large or huge (default: large)
    #[arg(long)]
    size: Option<SizePreset>,

    /// Blank columns between letters (default: 1)
    #[arg(long)]
    spacing: Option<usize>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read text from stdin
    #[arg(long)]
    stdin: bool,

    /// Settings file (default: config.toml in the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// List the characters the font defines and exit
    #[arg(long)]
    list_chars: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            scale: self.scale,
            fill: self.fill.clone(),
            spacing: self.spacing,
        }
    }

    fn read_text(&self) -> Result<String> {
        let stdin = io::stdin();
        if self.stdin || (self.text.is_none() && !stdin.is_terminal()) {
            let mut buf = String::new();
            stdin
                .lock()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            return Ok(buf.trim_end_matches(['\n', '\r']).to_string());
        }
        Ok(self.text.clone().unwrap_or_default())
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("blockfont={log_level}")),
        ))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    let overrides = cli.overrides();

    if cli.print_config {
        print!("{}", settings.effective(&overrides).to_toml()?);
        return Ok(());
    }
    if cli.list_chars {
        let chars: String = font::supported_chars().collect();
        println!("{chars}");
        return Ok(());
    }

    let text = cli.read_text()?;
    if text.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let options = settings.render_options(&overrides);
    tracing::debug!(?options, "rendering {} chars", text.chars().count());
    let lines = match render(&text, &options) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    let banner = output::banner_text(&lines);

    match &cli.output {
        Some(path) => output::write_banner(path, &banner, &settings.branding)?,
        None => output::print_banner(&banner, &settings.branding)?,
    }
    Ok(())
}
