//! Markdown to HTML page conversion command.

use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use hm_config::{CliSettings, Config};
use hm_page::{PageOptions, assemble_page_from_bytes};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for converting a markdown document.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Markdown file to convert (reads stdin when omitted).
    input: Option<PathBuf>,

    /// Write the page to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Page title (default: first level-1 heading, then "Document").
    #[arg(short, long)]
    title: Option<String>,

    /// Custom CSS file appended to the page styles.
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Disable the built-in stylesheet.
    #[arg(long)]
    no_default_styles: bool,

    /// HTML inserted right before `</head>`.
    #[arg(long, value_name = "HTML")]
    before_head_end: Option<String>,

    /// HTML inserted right after `<body>`.
    #[arg(long, value_name = "HTML")]
    after_body_start: Option<String>,

    /// HTML inserted right before `</body>`.
    #[arg(long, value_name = "HTML")]
    before_body_end: Option<String>,

    /// Add `id` attributes to headings.
    #[arg(long)]
    heading_ids: bool,

    /// Path to configuration file (default: auto-discover hyper-marked.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logs on stderr).
    #[arg(long)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Execute the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, an input cannot be read or
    /// the page cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            css_file: self.css,
            no_default_styles: self.no_default_styles.then_some(true),
            before_head_end: self.before_head_end,
            after_body_start: self.after_body_start,
            before_body_end: self.before_body_end,
            heading_ids: self.heading_ids.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let css = config
            .page_resolved
            .css_file
            .as_deref()
            .map(read_css)
            .transpose()?;
        let options = page_options(&config, css);

        let markdown = match &self.input {
            Some(path) => std::fs::read(path).map_err(|source| CliError::ReadInput {
                path: path.clone(),
                source,
            })?,
            None => read_stdin()?,
        };
        tracing::debug!(
            input = ?self.input,
            bytes = markdown.len(),
            "Read markdown"
        );

        let html = assemble_page_from_bytes(&markdown, &options)?;

        if let Some(path) = &self.output {
            std::fs::write(path, &html).map_err(|source| CliError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            output.success(&format!("Generated: {}", path.display()));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }

        Ok(())
    }
}

/// Build page options from the resolved configuration.
fn page_options(config: &Config, css: Option<String>) -> PageOptions {
    let page = &config.page_resolved;
    PageOptions {
        title: page.title.clone(),
        css,
        no_default_styles: page.no_default_styles,
        before_head_end: page.before_head_end.clone(),
        after_body_start: page.after_body_start.clone(),
        before_body_end: page.before_body_end.clone(),
        renderer: config.renderer.clone(),
    }
}

fn read_css(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadCss {
        path: path.to_path_buf(),
        source,
    })
}

/// Read all of stdin, refusing to wait on an interactive terminal.
fn read_stdin() -> Result<Vec<u8>, CliError> {
    let mut stdin = std::io::stdin().lock();
    if stdin.is_terminal() {
        return Err(CliError::NoInput);
    }
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;
    Ok(buf)
}
