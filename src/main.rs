use anyhow::{bail, Context};
use clap::Parser;
use hexgrid::{input::direction_for_key, AppConfig, GridLayout, GridViewState};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{path::PathBuf, process};

/// Build a hex grid without opening a window: print its layout, and
/// optionally replay key presses against the selection.
#[derive(Debug, Parser)]
#[command(name = "hexgrid")]
struct Args {
    /// Path to a TOML config file. Defaults are used if it doesn't exist
    #[arg(short, long, default_value = "hexgrid.toml")]
    config: PathBuf,

    /// Override the tile radius from the config
    #[arg(long)]
    radius: Option<f32>,

    /// Override the column count from the config
    #[arg(long)]
    columns: Option<usize>,

    /// Override the row count from the config
    #[arg(long)]
    rows: Option<usize>,

    /// Override the tile layout: column_offset or paired_columns
    #[arg(long)]
    layout: Option<GridLayout>,

    /// Key presses to replay, e.g. "wwwsss". Each of q/w/e/a/s/d moves the
    /// selection one tile
    #[arg(short, long)]
    moves: Option<String>,

    /// Print the center of every tile
    #[arg(long)]
    tiles: bool,

    /// The logging level. See https://docs.rs/log/latest/log/enum.LevelFilter.html
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

/// Run the CLI with some options
fn run(args: Args) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(args.log_level).init()?;

    let mut config = AppConfig::load(&args.config)?;
    if let Some(radius) = args.radius {
        config.grid.radius = radius;
    }
    if let Some(columns) = args.columns {
        config.grid.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(layout) = args.layout {
        config.grid.layout = layout;
    }
    config.validate().context("invalid grid options")?;

    let mut state = config.build_state()?;
    print_summary(&state);
    if args.tiles {
        print_tiles(&state);
    }

    if let Some(moves) = args.moves {
        replay_moves(&mut state, &moves)?;
    }
    if let Some(selection) = state.selection() {
        println!("selection: {}", selection.position);
    }
    Ok(())
}

/// Apply each key in `moves` to the selection. Whitespace is skipped; any
/// other key that isn't bound to a direction is an error, and the moves
/// before it stay applied.
fn replay_moves(state: &mut GridViewState, moves: &str) -> anyhow::Result<()> {
    for key in moves.chars().filter(|c| !c.is_whitespace()) {
        if direction_for_key(key).is_none() {
            bail!("unknown move key {:?}, expected one of q w e a s d", key);
        }
        let before = state.selection().map(|s| s.position);
        state.handle_key(key);
        if let (Some(before), Some(after)) = (before, state.selection()) {
            info!("{}: {} -> {}", key, before, after.position);
        }
    }
    Ok(())
}

fn print_summary(state: &GridViewState) {
    let grid = state.grid();
    println!(
        "grid: {} columns x {} rows, radius {}, {} layout",
        grid.columns(),
        grid.rows(),
        grid.radius(),
        grid.layout()
    );
    println!(
        "tiles: {} ({:.2} x {:.2} each)",
        grid.tiles().len(),
        grid.tile_width(),
        grid.tile_height()
    );
    if let Some((min, max)) = grid.bounds() {
        let size = max - min;
        println!("extent: {:.2} x {:.2}", size.x, size.y);
    }
}

fn print_tiles(state: &GridViewState) {
    let grid = state.grid();
    for (index, tile) in grid.tiles().iter().enumerate() {
        if let Some(position) = grid.position_of(index) {
            println!(
                "{:4}: {} center ({:.2}, {:.2})",
                index,
                position,
                tile.center().x,
                tile.center().y
            );
        }
    }
}

fn main() {
    let exit_code = match run(Args::parse()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
