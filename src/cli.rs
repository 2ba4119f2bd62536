//! Command line argument structures.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xodraw::{BoardGeometry, Colour, Pos};

/// Top level command line interface
#[derive(Parser, Debug)]
#[command(name = "xodraw")]
#[command(about = "Render X's and O's game boards to SVG", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a board snapshot (a blank board if no file is given)
    Board {
        /// Board file: a JSON 3x3 grid of "X", "O" or "" strings
        board: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render a game from an ordered move list
    Game {
        /// Game file: a JSON array of {"pos": [row, col], "marker": "X"} moves
        game: PathBuf,

        /// Render only the last N moves (all moves if omitted)
        #[arg(long, value_name = "N")]
        last: Option<usize>,

        /// Start cell of a win line, as ROW,COL
        #[arg(long, value_name = "ROW,COL", value_parser = parse_pos, requires = "win_to")]
        win_from: Option<Pos>,

        /// End cell of a win line, as ROW,COL
        #[arg(long, value_name = "ROW,COL", value_parser = parse_pos, requires = "win_from")]
        win_to: Option<Pos>,

        /// Win line colour: a CSS name or #rrggbb
        #[arg(long, value_name = "COLOUR", default_value = "yellow", value_parser = parse_colour)]
        win_colour: Colour,

        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Options shared by every render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Board edge length in pixels, up to 1000000
    #[arg(long, value_name = "PIXELS", value_parser = parse_dimension)]
    pub size: Option<u32>,

    /// Margin around the board in pixels, up to 1000000
    #[arg(long, value_name = "PIXELS", value_parser = parse_dimension)]
    pub margin: Option<u32>,

    /// Style file (TOML) with sizes and colours
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Output SVG file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Parses a ROW,COL cell reference.
fn parse_pos(s: &str) -> Result<Pos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let row: u8 = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{row}'"))?;
    let col: u8 = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{col}'"))?;
    Pos::new(row, col).map_err(|e| e.to_string())
}

/// Parses a colour name or #rrggbb value.
fn parse_colour(s: &str) -> Result<Colour, String> {
    s.parse::<Colour>().map_err(|e| e.to_string())
}

/// Parses a pixel dimension, rejecting values the geometry would clamp.
fn parse_dimension(s: &str) -> Result<u32, String> {
    let pixels: u32 = s
        .parse()
        .map_err(|_| format!("invalid pixel count '{s}'"))?;
    if pixels > BoardGeometry::MAX_DIMENSION {
        return Err(format!(
            "{pixels} exceeds the {} pixel maximum",
            BoardGeometry::MAX_DIMENSION
        ));
    }
    Ok(pixels)
}
