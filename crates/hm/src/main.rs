//! hyper-marked CLI - turn a markdown document into a standalone HTML page.
//!
//! Reads markdown from a file or stdin and writes the page to stdout or to
//! the file given with `--output`.

mod convert;
mod error;
mod output;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use convert::ConvertArgs;
use error::CliError;
use output::Output;

/// hyper-marked - convert markdown into a complete, styled HTML page.
#[derive(Parser)]
#[command(name = "hyper-marked", version, about, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    #[allow(dead_code)] // Surfaces as a DisplayVersion error, never stored
    version: Option<bool>,

    #[command(flatten)]
    args: ConvertArgs,
}

fn main() -> ExitCode {
    let output = Output::new();

    // Bare invocation from a terminal has nothing to convert
    if std::env::args_os().len() <= 1 && std::io::stdin().is_terminal() {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let err = CliError::Usage(usage_message(&err));
            output.error(&format!("Error: {err}"));
            return ExitCode::FAILURE;
        }
    };

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.args.execute() {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// First line of a clap error without its `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_owned()
}
