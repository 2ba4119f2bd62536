//! The board renderer: five drawing operations over any [`Canvas`].
//!
//! A [`BoardRenderer`] owns its surface and a [`BoardStyle`].  It holds no
//! board state between calls; callers own the state and pass it to every
//! operation, and geometry is rederived from the style each time.
use crate::board::{Board, Marker, Move, Pos, Square};
use crate::canvas::{Canvas, CanvasError};
use crate::colour::Colour;
use crate::geometry::BoardGeometry;
use crate::style::BoardStyle;
use tracing::{debug, instrument};

/// Animation speed hint passed to the surface on session start.  Static
/// surfaces ignore it.
const INIT_SPEED: u32 = 10;

/// Which moves of a game to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveWindow {
    /// Render every move from the start of the game.
    All,
    /// Render only the last `n` moves, in their original order.
    ///
    /// `Last(0)` renders nothing; a window longer than the game renders
    /// the whole game.
    Last(usize),
}

impl MoveWindow {
    /// The index of the first move inside the window, for a game of `len`
    /// moves.
    fn first_index(self, len: usize) -> usize {
        match self {
            MoveWindow::All => 0,
            MoveWindow::Last(n) => len.saturating_sub(n),
        }
    }
}

impl From<Option<usize>> for MoveWindow {
    /// `None` renders the whole game, `Some(n)` the last `n` moves.
    fn from(last: Option<usize>) -> Self {
        match last {
            None => MoveWindow::All,
            Some(n) => MoveWindow::Last(n),
        }
    }
}

/// Renders X's and O's boards onto a [`Canvas`].
///
/// The renderer owns its surface, so independent boards get independent
/// renderers.  Errors from the surface propagate unchanged; drawing stops
/// at the first failure.
#[derive(Debug, Clone)]
pub struct BoardRenderer<C> {
    canvas: C,
    style: BoardStyle,
}

impl<C: Canvas> BoardRenderer<C> {
    /// Creates a renderer over `canvas` with the default style.
    pub fn new(canvas: C) -> Self {
        Self::with_style(canvas, BoardStyle::default())
    }

    /// Creates a renderer over `canvas` with an explicit style.
    pub fn with_style(canvas: C, style: BoardStyle) -> Self {
        Self { canvas, style }
    }

    /// The renderer's style.
    pub fn style(&self) -> &BoardStyle {
        &self.style
    }

    /// The underlying surface.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Mutable access to the underlying surface.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Consumes the renderer, returning its surface.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Draws an empty board: a fresh canvas session, then the four grid
    /// lines in the style's board colour.
    ///
    /// # Errors
    ///
    /// Fails only if the surface does.
    #[instrument(skip(self))]
    pub fn draw_new_board(&mut self) -> Result<(), CanvasError> {
        let geometry = self.style.geometry();
        debug!(
            size = *geometry.size(),
            margin = *geometry.margin(),
            "drawing new board"
        );
        self.canvas.initialise(INIT_SPEED, geometry.canvas_size())?;
        self.canvas.hide_cursor()?;
        self.canvas.set_colour(*self.style.board_colour())?;
        for (from, to) in geometry.grid_lines() {
            self.line(from, to)?;
        }
        Ok(())
    }

    /// Draws `square` in the cell at `pos` using `colour`.
    ///
    /// An X is two diagonal strokes inset from the cell edges; an O is a
    /// circle walked as small turn-and-step segments.  Drawing
    /// [`Square::Empty`] sets the colour and nothing else, the inert draw
    /// used for empty cells.  A bare [`Marker`] is accepted too.
    #[instrument(skip_all, fields(pos = %pos))]
    pub fn draw_marker(
        &mut self,
        square: impl Into<Square>,
        pos: Pos,
        colour: Colour,
    ) -> Result<(), CanvasError> {
        let square = square.into();
        let geometry = self.style.geometry();
        self.canvas.hide_cursor()?;
        self.canvas.set_colour(colour)?;
        match square {
            Square::Empty => Ok(()),
            Square::Marked(Marker::X) => self.draw_x(&geometry, pos),
            Square::Marked(Marker::O) => self.draw_o(&geometry, pos),
        }
    }

    /// Draws a straight line between the centres of two cells.
    ///
    /// Purely geometric: the cells need not form a real line of three, and
    /// no game rule is checked.
    #[instrument(skip_all, fields(start = %start, end = %end))]
    pub fn draw_win(&mut self, start: Pos, end: Pos, colour: Colour) -> Result<(), CanvasError> {
        let geometry = self.style.geometry();
        self.canvas.hide_cursor()?;
        self.canvas.set_colour(colour)?;
        self.line(geometry.cell_centre(start), geometry.cell_centre(end))
    }

    /// Draws a full board.
    ///
    /// With `None` the caller has no state yet: an empty board is drawn
    /// and nothing else.  With `Some`, an empty board is drawn first when
    /// the board holds no markers or `new_board` is set; every cell is
    /// then drawn in row-major order, empty cells inertly in the palette's
    /// empty colour.
    #[instrument(skip_all, fields(new_board = new_board))]
    pub fn draw_board(&mut self, board: Option<&Board>, new_board: bool) -> Result<(), CanvasError> {
        let Some(board) = board else {
            return self.draw_new_board();
        };
        if board.is_blank() || new_board {
            self.draw_new_board()?;
        }
        for (pos, square) in board.cells() {
            self.draw_marker(square, pos, self.style.palette().colour_for(square))?;
        }
        Ok(())
    }

    /// Draws a board from an ordered move list.
    ///
    /// An empty board is drawn first when the game is empty or `new_board`
    /// is set.  `window` selects which moves render; selected moves draw
    /// in their original order, in the palette colour for their marker.
    #[instrument(
        skip_all,
        fields(moves = moves.len(), window = ?window, new_board = new_board)
    )]
    pub fn draw_game(
        &mut self,
        moves: &[Move],
        window: MoveWindow,
        new_board: bool,
    ) -> Result<(), CanvasError> {
        if moves.is_empty() || new_board {
            self.draw_new_board()?;
        }
        let first = window.first_index(moves.len());
        debug!(first, total = moves.len(), "rendering move window");
        for mv in &moves[first..] {
            self.draw_marker(mv.marker(), mv.pos(), self.style.palette().colour_of(mv.marker()))?;
        }
        Ok(())
    }

    /// One pen-up reposition followed by a pen-down line.
    fn line(&mut self, from: (u32, u32), to: (u32, u32)) -> Result<(), CanvasError> {
        self.canvas.pen_up()?;
        self.canvas.move_to(f64::from(from.0), f64::from(from.1))?;
        self.canvas.pen_down()?;
        self.canvas.move_to(f64::from(to.0), f64::from(to.1))
    }

    fn draw_x(&mut self, geometry: &BoardGeometry, pos: Pos) -> Result<(), CanvasError> {
        for (from, to) in geometry.x_strokes(pos) {
            self.line(from, to)?;
        }
        Ok(())
    }

    /// Walks an inscribed circle as turn-and-step segments of one pixel.
    fn draw_o(&mut self, geometry: &BoardGeometry, pos: Pos) -> Result<(), CanvasError> {
        let (x, y) = geometry.circle_start(pos);
        self.canvas.pen_up()?;
        self.canvas.move_to(f64::from(x), f64::from(y))?;
        self.canvas.pen_down()?;
        let segments = geometry.circle_steps() * 2;
        for _ in 0..segments {
            self.canvas.turn_right(360.0 / f64::from(segments))?;
            self.canvas.forward(1.0)?;
        }
        Ok(())
    }
}
