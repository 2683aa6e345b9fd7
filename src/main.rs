//! Headless grid inspector (default binary).
//!
//! Loads a saved grid blob (or builds an empty grid from a config), prints a
//! short report, and optionally compacts full lines and prints the new blob.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use playfield::core::{Grid, GridConfig};

#[derive(Parser, Debug)]
#[command(name = "playfield", about = "Inspect and compact saved playfield grids")]
struct Cli {
    /// JSON grid config ({"width": .., "height": ..}); defaults to 10x20
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clear full rows and columns, then print the resulting blob
    #[arg(long)]
    compact: bool,

    /// Saved grid blob; when omitted an empty grid is created
    blob: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = cli.config.as_deref().map(load_config).transpose()?;

    let mut grid = match &cli.blob {
        Some(path) => load_grid(path, config)?,
        None => Grid::new(config.unwrap_or_default()),
    };

    info!("loaded {}x{} grid", grid.width(), grid.height());
    report(&grid, &mut io::stdout().lock())?;

    if cli.compact {
        let rows = grid.clear_full_rows();
        let columns = grid.clear_full_columns();
        info!("compacted {} rows and {} columns", rows, columns);
        println!("{}", grid.serialize()?);
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<GridConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Load a blob into a grid of the configured size. Without an explicit
/// config the blob's own dimensions win.
fn load_grid(path: &Path, config: Option<GridConfig>) -> Result<Grid> {
    let blob = fs::read_to_string(path)
        .with_context(|| format!("reading grid blob {}", path.display()))?;
    let grid = match config {
        Some(config) => {
            let mut grid = Grid::new(config);
            grid.deserialize(&blob).map(|()| grid)
        }
        None => Grid::from_blob(&blob),
    };
    grid.with_context(|| format!("decoding grid blob {}", path.display()))
}

fn report(grid: &Grid, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "grid {}x{}", grid.width(), grid.height())?;
    writeln!(out, "active cells: {}", grid.active_count())?;
    writeln!(out, "full rows: {:?}", grid.full_rows())?;
    writeln!(out, "full columns: {:?}", grid.full_columns())?;
    writeln!(out, "connected groups: {}", grid.connected_groups().len())
}
