//! Tenox CLI - extract the TenoxUI styles a project actually uses
//!
//! Reads `tenoxui.config.json` from the working directory, scans the
//! configured markup and writes the used styles to the configured module.
//! With `-w`/`--watch` it keeps running and regenerates on every change.

use clap::Parser;
use colored::Colorize;
use std::ffi::OsString;
use std::path::Path;
use tenox_core::DEFAULT_CONFIG_FILE;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "tenox-styles")]
#[command(author = "TenoxUI Contributors")]
#[command(version)]
#[command(about = "Extract the TenoxUI styles used by your markup", long_about = None)]
struct Cli {
    /// Keep running and regenerate styles when a markup file changes
    #[arg(short, long)]
    watch: bool,
}

/// Flags the parser understands, short spelling first; anything else on the
/// command line is ignored.
const KNOWN_FLAGS: &[(&str, &str)] = &[("-w", "--watch"), ("-h", "--help"), ("-V", "--version")];

/// Keeps the program name and known flags, wherever they appear.
///
/// Flags are passed on once in their long spelling; clap rejects a repeated
/// `--watch`.
fn known_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    for arg in args {
        let long = KNOWN_FLAGS
            .iter()
            .find(|(short, long)| arg == *short || arg == *long)
            .map(|(_, long)| OsString::from(*long));

        if let Some(long) = long {
            if !kept[1..].contains(&long) {
                kept.push(long);
            }
        }
    }
    kept
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse_from(known_args(std::env::args_os()));

    // Status lines go to stdout; diagnostics only when RUST_LOG asks for them.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();

    let result = commands::run(Path::new(DEFAULT_CONFIG_FILE), cli.watch).await;

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
