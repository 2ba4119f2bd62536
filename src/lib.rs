//! xodraw - a turtle-style renderer for X's and O's game boards.
//!
//! Given a board or an ordered move list, [`BoardRenderer`] emits the pen
//! commands that draw a 3x3 grid, the markers in its cells, and an
//! optional win line, onto any [`Canvas`] implementation.  The crate is a
//! pure rendering layer: no game rules, no win detection, no retained
//! board state.  Callers own the state and pass it to every call.
//!
//! # Architecture
//!
//! - **State**: [`Marker`], [`Square`], [`Pos`], [`Move`] and [`Board`],
//!   the typed snapshots a caller supplies.
//! - **Style**: [`BoardStyle`] and [`MarkerPalette`], immutable defaults
//!   (180-pixel board, 30-pixel margin, white grid, red X and green O),
//!   loadable from TOML.
//! - **Surfaces**: the [`Canvas`] trait, with [`RecordingCanvas`] for
//!   command capture and [`SvgCanvas`] for SVG documents.
//! - **Renderer**: [`BoardRenderer`], the five drawing operations.
//!
//! # Example
//!
//! ```
//! use xodraw::{BoardRenderer, Colour, Marker, Pos, RecordingCanvas};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut renderer = BoardRenderer::new(RecordingCanvas::new());
//! renderer.draw_new_board()?;
//! renderer.draw_marker(Marker::X, Pos::new(1, 1)?, Colour::RED)?;
//! renderer.draw_win(Pos::new(0, 0)?, Pos::new(2, 2)?, Colour::YELLOW)?;
//!
//! let commands = renderer.into_canvas().into_commands();
//! assert!(!commands.is_empty());
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod canvas;
mod colour;
mod geometry;
mod renderer;
mod style;
mod svg;

// Crate-level exports - Board state
pub use board::{Board, Game, InvalidPos, Marker, Move, ParseMarkerError, Pos, Square};

// Crate-level exports - Colours and style
pub use colour::{Colour, ParseColourError};
pub use style::{BoardStyle, MarkerPalette, StyleError};

// Crate-level exports - Drawing surfaces
pub use canvas::{Canvas, CanvasError, PenCommand, RecordingCanvas};
pub use svg::SvgCanvas;

// Crate-level exports - Rendering
pub use geometry::BoardGeometry;
pub use renderer::{BoardRenderer, MoveWindow};
