//! xodraw - render X's and O's game boards to SVG from the command line.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, RenderArgs};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use xodraw::{Board, BoardRenderer, BoardStyle, Colour, Game, MoveWindow, Pos, SvgCanvas};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the SVG document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Board { board, render } => run_board(board, render),
        Command::Game {
            game,
            last,
            win_from,
            win_to,
            win_colour,
            render,
        } => run_game(game, last, win_from, win_to, win_colour, render),
    }
}

/// Renders a board file, or a blank board, to SVG.
fn run_board(board: Option<PathBuf>, render: RenderArgs) -> Result<()> {
    let style = load_style(&render)?;
    let board = board.map(|path| load_board(&path)).transpose()?;

    let mut renderer = BoardRenderer::with_style(SvgCanvas::new(), style);
    renderer.draw_board(board.as_ref(), true)?;

    emit(renderer.into_canvas(), render.out.as_deref())
}

/// Renders a game file to SVG, with an optional win line.
fn run_game(
    game: PathBuf,
    last: Option<usize>,
    win_from: Option<Pos>,
    win_to: Option<Pos>,
    win_colour: Colour,
    render: RenderArgs,
) -> Result<()> {
    let style = load_style(&render)?;
    let moves = load_game(&game)?;

    let mut renderer = BoardRenderer::with_style(SvgCanvas::new(), style);
    renderer.draw_game(&moves, MoveWindow::from(last), true)?;
    if let (Some(from), Some(to)) = (win_from, win_to) {
        renderer.draw_win(from, to, win_colour)?;
    }

    emit(renderer.into_canvas(), render.out.as_deref())
}

/// Builds the style from the optional style file plus flag overrides.
fn load_style(render: &RenderArgs) -> Result<BoardStyle> {
    let mut style = match &render.style {
        Some(path) => BoardStyle::from_file(path)
            .with_context(|| format!("loading style {}", path.display()))?,
        None => BoardStyle::default(),
    };
    if let Some(size) = render.size {
        style = style.with_size(size);
    }
    if let Some(margin) = render.margin {
        style = style.with_margin(margin);
    }
    Ok(style)
}

/// Reads a JSON board file.
fn load_board(path: &Path) -> Result<Board> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading board {}", path.display()))?;
    let board = serde_json::from_str(&content)
        .with_context(|| format!("parsing board {}", path.display()))?;
    Ok(board)
}

/// Reads a JSON game file.
fn load_game(path: &Path) -> Result<Game> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading game {}", path.display()))?;
    let moves = serde_json::from_str(&content)
        .with_context(|| format!("parsing game {}", path.display()))?;
    Ok(moves)
}

/// Writes the rendered document to a file or stdout.
fn emit(canvas: SvgCanvas, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            canvas
                .save(path)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "SVG written");
        }
        None => print!("{}", canvas.to_svg()),
    }
    Ok(())
}
