//! Print the contents of a World Rally map file
//!
//! Run with: cargo run --bin dump-map -- track.map [--json]

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tmx2map::codec::{Difficulty, MapFile, MAP_HEIGHT, MAP_WIDTH};

#[derive(Parser)]
#[command(name = "dump-map")]
#[command(about = "Dump the tile grid and events of a map file")]
struct Args {
    /// Map file written by tmx2map
    map: PathBuf,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> tmx2map::Result<()> {
    let data = std::fs::read(&args.map)?;
    let map = MapFile::read(&data)?;

    if args.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &map).map_err(std::io::Error::from)?;
        writeln!(stdout)?;
        return Ok(());
    }

    println!("Tiles ({}x{}):", MAP_WIDTH, MAP_HEIGHT);
    for y in 0..MAP_HEIGHT {
        let row: Vec<String> = map.row(y).iter().map(|t| format!("{:02x}", t)).collect();
        println!("  {:2}: {}", y, row.join(" "));
    }

    println!("\nEvents ({}):", map.events.len());
    for (i, event) in map.events.iter().enumerate() {
        let direction = event.direction().map_or("?", |d| d.name());
        let color = Difficulty::from_u8(event.color)
            .map_or_else(|| event.color.to_string(), |d| format!("{:?}", d));
        println!(
            "  {:2}: trigger {:#04x} ({:<2} {:?}) cp {:3} type {:2} color {}",
            i,
            event.trigger_type,
            direction,
            event.flags(),
            event.checkpoint,
            event.kind,
            color
        );
    }

    Ok(())
}
