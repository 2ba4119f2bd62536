//! Board state: markers, squares, positions and moves.
//!
//! These types carry the state a caller hands to the renderer.  Nothing
//! here knows about pixels or pens, and nothing enforces game rules --
//! a board of nine X's is as renderable as a legal position.
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A marker glyph placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// The X marker, drawn as two diagonal strokes.
    #[serde(alias = "x")]
    X,
    /// The O marker, drawn as a circle.
    #[serde(alias = "o")]
    O,
}

/// A single cell value: empty, or marked.
///
/// Serialises as the marker string, with the empty string standing for an
/// empty square, so a full board reads as a grid of `"X"`, `"O"` and `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Square {
    /// A square holding no marker.
    #[default]
    Empty,
    /// A square holding a marker.
    Marked(Marker),
}

impl Square {
    /// The marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }

    /// Returns true if the square holds no marker.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl From<Marker> for Square {
    fn from(marker: Marker) -> Self {
        Square::Marked(marker)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => Ok(()),
            Square::Marked(marker) => write!(f, "{marker}"),
        }
    }
}

impl FromStr for Square {
    type Err = ParseMarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Square::Empty);
        }
        s.parse::<Marker>()
            .map(Square::Marked)
            .map_err(|_| ParseMarkerError::new(s))
    }
}

impl TryFrom<String> for Square {
    type Error = ParseMarkerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

/// Error for marker strings other than `"X"`, `"O"` (any case) or `""`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognised marker '{}': expected \"X\", \"O\" or an empty string", input)]
pub struct ParseMarkerError {
    /// The rejected input.
    pub input: String,
}

impl ParseMarkerError {
    /// Creates a parse error recording the rejected input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A cell position: row and column, each 0-2, counted from the top left.
///
/// Construction checks the bounds, so rendering code never sees an
/// off-board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// All nine positions in row-major order.
    pub const ALL: [Pos; 9] = [
        Pos { row: 0, col: 0 },
        Pos { row: 0, col: 1 },
        Pos { row: 0, col: 2 },
        Pos { row: 1, col: 0 },
        Pos { row: 1, col: 1 },
        Pos { row: 1, col: 2 },
        Pos { row: 2, col: 0 },
        Pos { row: 2, col: 1 },
        Pos { row: 2, col: 2 },
    ];

    /// Creates a position, rejecting coordinates outside the 3x3 board.
    pub const fn new(row: u8, col: u8) -> Result<Self, InvalidPos> {
        if row > 2 || col > 2 {
            return Err(InvalidPos { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a position from a row-major index (0-8).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= 9 {
            return None;
        }
        Some(Self {
            row: (index / 3) as u8,
            col: (index % 3) as u8,
        })
    }

    /// The row index (0-2).
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The column index (0-2).
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The row-major index of this position (0-8).
    pub const fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(u8, u8)> for Pos {
    type Error = InvalidPos;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Pos> for (u8, u8) {
    fn from(pos: Pos) -> Self {
        (pos.row, pos.col)
    }
}

/// Error for coordinates outside the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid position ({}, {}): row and column must be 0-2", row, col)]
pub struct InvalidPos {
    /// The rejected row.
    pub row: u8,
    /// The rejected column.
    pub col: u8,
}

/// A single move: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    pos: Pos,
    marker: Marker,
}

impl Move {
    /// The position the marker lands on.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The marker placed.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.marker, self.pos)
    }
}

/// An ordered sequence of moves.  Draw order is play order.
pub type Game = Vec<Move>;

/// A 3x3 grid of squares.
///
/// Serialises transparently as a 2D array of marker strings
/// (`[["X", "", "O"], ...]`), the shape callers naturally hold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from rows of squares, top row first.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The square at the given position.
    pub fn get(&self, pos: Pos) -> Square {
        self.rows[pos.row() as usize][pos.col() as usize]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Pos, square: Square) {
        self.rows[pos.row() as usize][pos.col() as usize] = square;
    }

    /// Returns true if no square holds a marker.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|square| square.is_empty())
    }

    /// All squares with their positions, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Square)> + '_ {
        Pos::ALL.iter().map(|&pos| (pos, self.get(pos)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "\n-+-+-\n")?;
            }
            for (j, square) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "|")?;
                }
                match square {
                    Square::Empty => write!(f, " ")?,
                    Square::Marked(marker) => write!(f, "{marker}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_marker_parses_any_case() {
        for marker in Marker::iter() {
            let upper = marker.to_string();
            let lower = upper.to_ascii_lowercase();
            assert_eq!(upper.parse::<Marker>(), Ok(marker));
            assert_eq!(lower.parse::<Marker>(), Ok(marker));
        }
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("".parse::<Square>(), Ok(Square::Empty));
        assert_eq!("X".parse::<Square>(), Ok(Square::Marked(Marker::X)));
        assert_eq!("o".parse::<Square>(), Ok(Square::Marked(Marker::O)));
        assert!("Z".parse::<Square>().is_err());
        assert!("XO".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_string_round_trip() {
        for square in [
            Square::Empty,
            Square::Marked(Marker::X),
            Square::Marked(Marker::O),
        ] {
            let text = String::from(square);
            assert_eq!(text.parse::<Square>(), Ok(square));
        }
    }

    #[test]
    fn test_pos_bounds() {
        assert!(Pos::new(0, 0).is_ok());
        assert!(Pos::new(2, 2).is_ok());
        assert_eq!(Pos::new(3, 0), Err(InvalidPos { row: 3, col: 0 }));
        assert_eq!(Pos::new(0, 7), Err(InvalidPos { row: 0, col: 7 }));
    }

    #[test]
    fn test_pos_index_round_trip() {
        for (i, pos) in Pos::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Pos::from_index(i), Some(*pos));
        }
        assert_eq!(Pos::from_index(9), None);
    }

    #[test]
    fn test_board_get_set() {
        let mut board = Board::new();
        assert!(board.is_blank());
        let centre = Pos::new(1, 1).unwrap();
        board.set(centre, Square::Marked(Marker::X));
        assert_eq!(board.get(centre), Square::Marked(Marker::X));
        assert!(!board.is_blank());
    }

    #[test]
    fn test_board_cells_row_major() {
        let board = Board::new();
        let positions: Vec<Pos> = board.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions.as_slice(), Pos::ALL.as_slice());
    }

    #[test]
    fn test_board_json_round_trip() {
        let json = r#"[["X", "", "O"], ["", "x", ""], ["o", "", "X"]]"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.get(Pos::new(0, 0).unwrap()), Square::Marked(Marker::X));
        assert_eq!(board.get(Pos::new(0, 1).unwrap()), Square::Empty);
        assert_eq!(board.get(Pos::new(1, 1).unwrap()), Square::Marked(Marker::X));
        assert_eq!(board.get(Pos::new(2, 0).unwrap()), Square::Marked(Marker::O));

        let text = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&text).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_board_rejects_bad_marker() {
        let json = r#"[["X", "", "Q"], ["", "", ""], ["", "", ""]]"#;
        let result: Result<Board, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0).unwrap(), Square::Marked(Marker::X));
        board.set(Pos::new(1, 1).unwrap(), Square::Marked(Marker::O));
        assert_eq!(board.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Pos::new(2, 1).unwrap(), Marker::O);
        assert_eq!(mv.to_string(), "O at (2, 1)");
    }
}
