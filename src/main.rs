use anyhow::Result;
use clap::Parser;
use keycheck::{check, EnvFileSource, Outcome};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keycheck", version)]
#[command(about = "Check that OPENAI_API_KEY is configured", long_about = None)]
struct Args {
    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[arg(long, help = "Load this env file instead of searching for .env")]
    env_file: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr; stdout is reserved for the report
    let filter = if args.debug {
        EnvFilter::from_default_env().add_directive("keycheck=debug".parse()?)
    } else {
        EnvFilter::from_default_env().add_directive("keycheck=warn".parse()?)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting keycheck v{}", env!("CARGO_PKG_VERSION"));

    let source = args
        .env_file
        .map_or(EnvFileSource::Discover, EnvFileSource::Path);

    let outcome = check::run(&source);
    let code = report(&outcome, &mut io::stdout().lock());
    Ok(ExitCode::from(code))
}

/// Writes the report and picks the exit code. A failed write is logged, not raised.
fn report<W: Write>(outcome: &Outcome, out: &mut W) -> u8 {
    if let Err(e) = outcome.write_report(out) {
        warn!("Failed to write report: {}", e);
        return 1;
    }
    outcome.exit_code()
}
