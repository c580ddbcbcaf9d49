//! `tagtree render` command implementation.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use tagtree_config::{CliSettings, Config};
use tagtree_site::{Page, render_page};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page to render (index, login, showcase).
    pub(crate) page: String,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover tagtree.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long, env = "TAGTREE_TITLE")]
    pub(crate) title: Option<String>,

    /// Omit the leading `<!DOCTYPE html>`.
    #[arg(long)]
    pub(crate) no_doctype: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// The page is rendered in full before the output file is opened, so a
    /// failed render leaves an existing file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the page is unknown or the
    /// page cannot be rendered and written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            title: self.title,
            doctype: self.no_doctype.then_some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let page: Page = self.page.parse()?;
        tracing::info!(page = %page, "Rendering page");
        let html = render_page(&config.site, page)?;

        match self.output {
            Some(path) => {
                fs::write(&path, &html)?;
                Output::new().success(&format!("Wrote {page} to {}", path.display()));
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
