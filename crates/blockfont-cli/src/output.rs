use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::config::Branding;

/// Join banner lines into file content: one line per row, newline terminated.
pub fn banner_text(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Print the banner on stdout, wrapped in the configured branding lines.
pub fn print_banner(banner: &str, branding: &Branding) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if let Some(title) = &branding.title {
        writeln!(stdout, "{title}")?;
    }
    stdout.write_all(banner.as_bytes())?;
    if let Some(footer) = &branding.footer {
        writeln!(stdout, "{footer}")?;
    }
    stdout.flush()
}

/// Write the banner to `path`.
///
/// When the write fails and stdout is a terminal the banner is shown there
/// instead; otherwise the error is returned.
pub fn write_banner(path: &Path, banner: &str, branding: &Branding) -> Result<()> {
    match fs::write(path, banner) {
        Ok(()) => {
            tracing::info!(bytes = banner.len(), "wrote {}", path.display());
            println!("Wrote ASCII art to {}", path.display());
            Ok(())
        }
        Err(err) if io::stdout().is_terminal() => {
            tracing::warn!("could not write {}: {err}", path.display());
            eprintln!(
                "Warning: failed to write {} ({err}); showing output instead",
                path.display()
            );
            print_banner(banner, branding)?;
            Ok(())
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to write output to {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_text_terminates_every_line() {
        let lines = vec!["# #".to_string(), " # ".to_string()];
        assert_eq!(banner_text(&lines), "# #\n # \n");
        assert_eq!(banner_text(&[]), "");
    }
}
