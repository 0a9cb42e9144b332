//! SmartTask CLI - runs the task tracking demonstration.

mod demo;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use smarttask_core::{ConsoleSink, SystemClock};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smarttask")]
#[command(about = "In-memory task tracking demo", long_about = None)]
struct Cli {
    /// Diagnostic verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    demo::run(Arc::new(ConsoleSink::stdout()), Arc::new(SystemClock))?;

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the transcript.
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["smarttask"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(default_level(cli.verbose), "warn");
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["smarttask", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(cli.verbose), "debug");
        assert_eq!(default_level(9), "debug");
    }

    #[test]
    fn test_rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["smarttask", "--bogus"]).is_err());
    }
}
