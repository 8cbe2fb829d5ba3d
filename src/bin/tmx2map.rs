//! Convert a Tiled TMX map into a World Rally map file
//!
//! Run with: cargo run --bin tmx2map -- track.tmx track.map

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tmx2map", version)]
#[command(about = "TMX2MAP: World Rally maps+events generation from Tiled TMX files")]
struct Args {
    /// Input TMX file (CSV layer encoding)
    input: PathBuf,

    /// Output map file
    output: PathBuf,

    /// Log every parsed object and encoded event
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match tmx2map::convert_files(&args.input, &args.output) {
        Ok(summary) => {
            if summary.overflowed_tiles > 0 {
                warn!(count = summary.overflowed_tiles, "tile values truncated to one byte");
            }
            info!(
                tiles = summary.tiles,
                events = summary.events,
                "{} -> {}",
                args.input.display(),
                args.output.display()
            );
        }
        Err(e) => {
            error!(kind = ?e.kind(), "{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
