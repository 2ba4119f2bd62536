//! Pixel geometry for a rendered board.
//!
//! Everything here is floor-based integer arithmetic: the drawing surface
//! is pixel-addressable, so fractional cell sizes are floored once when the
//! geometry is derived and every later measurement stays on whole pixels.
use crate::board::Pos;
use derive_getters::Getters;

/// Pixel measurements derived from a board size and margin.
///
/// Cheap to build; the renderer derives one per draw call rather than
/// caching it, so style changes always take effect on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct BoardGeometry {
    /// Requested board edge length in pixels.
    size: u32,
    /// Border padding around the board in pixels.
    margin: u32,
    /// Edge length of one cell: a third of the board, floored.
    cell_size: u32,
    /// Edge length of the drawn grid: three cells exactly.
    board_size: u32,
}

impl BoardGeometry {
    /// Largest board size or margin a geometry accepts, in pixels.
    ///
    /// Dimensions are clamped to this bound so every derived pixel
    /// measurement fits in `u32` without overflow.
    pub const MAX_DIMENSION: u32 = 1_000_000;

    /// Derives the geometry for a board `size` pixels across with `margin`
    /// pixels of padding on every side.
    ///
    /// Dimensions above [`MAX_DIMENSION`](Self::MAX_DIMENSION) are clamped
    /// to it.
    pub fn new(size: u32, margin: u32) -> Self {
        let size = size.min(Self::MAX_DIMENSION);
        let margin = margin.min(Self::MAX_DIMENSION);
        let cell_size = size / 3;
        Self {
            size,
            margin,
            cell_size,
            board_size: cell_size * 3,
        }
    }

    /// Width and height of the canvas holding the board plus margins.
    pub fn canvas_size(&self) -> (u32, u32) {
        let edge = self.size + 2 * self.margin;
        (edge, edge)
    }

    /// The top-left pixel of the cell at `pos`.
    pub fn cell_origin(&self, pos: Pos) -> (u32, u32) {
        (
            self.margin + self.cell_size * u32::from(pos.col()),
            self.margin + self.cell_size * u32::from(pos.row()),
        )
    }

    /// The centre pixel of the cell at `pos`, floored.
    pub fn cell_centre(&self, pos: Pos) -> (u32, u32) {
        let (x, y) = self.cell_origin(pos);
        let offset = self.cell_size / 2;
        (x + offset, y + offset)
    }

    /// Inset of marker strokes from the cell edges: a fifth of a cell.
    pub fn marker_inset(&self) -> u32 {
        self.cell_size / 5
    }

    /// Endpoint pairs for the four grid lines, verticals first.
    pub fn grid_lines(&self) -> [((u32, u32), (u32, u32)); 4] {
        let m = self.margin;
        let c = self.cell_size;
        let b = self.board_size;
        [
            ((m + c, m), (m + c, m + b)),
            ((m + b - c, m), (m + b - c, m + b)),
            ((m, m + c), (m + b, m + c)),
            ((m, m + b - c), (m + b, m + b - c)),
        ]
    }

    /// Endpoint pairs for the two X strokes in the cell at `pos`: the
    /// falling diagonal, then the rising one.
    pub fn x_strokes(&self, pos: Pos) -> [((u32, u32), (u32, u32)); 2] {
        let (x, y) = self.cell_origin(pos);
        let inset = self.marker_inset();
        let far = self.cell_size - inset;
        [
            ((x + inset, y + inset), (x + far, y + far)),
            ((x + far, y + inset), (x + inset, y + far)),
        ]
    }

    /// Pen start for the O circle walk: the inset left edge of the cell at
    /// its vertical centre.
    pub fn circle_start(&self, pos: Pos) -> (u32, u32) {
        let (x, y) = self.cell_origin(pos);
        (x + self.marker_inset(), y + self.cell_size / 2)
    }

    /// Step count for the O circle walk.
    ///
    /// The walk takes twice this many 1-pixel steps, turning a matching
    /// fraction of 360 degrees before each, which closes an inscribed
    /// circle at any cell size.
    pub fn circle_steps(&self) -> u32 {
        (self.cell_size * 7) / 5 - 2 * self.marker_inset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let geometry = BoardGeometry::new(180, 30);
        assert_eq!(*geometry.cell_size(), 60);
        assert_eq!(*geometry.board_size(), 180);
        assert_eq!(geometry.canvas_size(), (240, 240));
    }

    #[test]
    fn test_size_floors_to_cells() {
        let geometry = BoardGeometry::new(100, 10);
        assert_eq!(*geometry.cell_size(), 33);
        assert_eq!(*geometry.board_size(), 99);
        // Canvas keeps the requested size even when the grid floors short.
        assert_eq!(geometry.canvas_size(), (120, 120));
    }

    #[test]
    fn test_cell_origins() {
        let geometry = BoardGeometry::new(180, 30);
        assert_eq!(geometry.cell_origin(Pos::new(0, 0).unwrap()), (30, 30));
        assert_eq!(geometry.cell_origin(Pos::new(0, 2).unwrap()), (150, 30));
        assert_eq!(geometry.cell_origin(Pos::new(2, 0).unwrap()), (30, 150));
        assert_eq!(geometry.cell_centre(Pos::new(1, 1).unwrap()), (120, 120));
    }

    #[test]
    fn test_grid_lines() {
        let geometry = BoardGeometry::new(180, 30);
        assert_eq!(
            geometry.grid_lines(),
            [
                ((90, 30), (90, 210)),
                ((150, 30), (150, 210)),
                ((30, 90), (210, 90)),
                ((30, 150), (210, 150)),
            ]
        );
    }

    #[test]
    fn test_x_strokes_inset() {
        let geometry = BoardGeometry::new(180, 30);
        assert_eq!(geometry.marker_inset(), 12);
        assert_eq!(
            geometry.x_strokes(Pos::new(1, 1).unwrap()),
            [((102, 102), (138, 138)), ((138, 102), (102, 138))]
        );
    }

    #[test]
    fn test_circle_walk_parameters() {
        let geometry = BoardGeometry::new(180, 30);
        assert_eq!(geometry.circle_start(Pos::new(0, 0).unwrap()), (42, 60));
        assert_eq!(geometry.circle_steps(), 60);
    }

    #[test]
    fn test_degenerate_sizes_stay_total() {
        let tiny = BoardGeometry::new(2, 0);
        assert_eq!(*tiny.cell_size(), 0);
        assert_eq!(tiny.circle_steps(), 0);
        assert_eq!(tiny.marker_inset(), 0);

        let small = BoardGeometry::new(7, 1);
        assert_eq!(*small.cell_size(), 2);
        assert_eq!(small.circle_steps(), 2);
    }

    #[test]
    fn test_huge_dimensions_clamp() {
        let geometry = BoardGeometry::new(u32::MAX, u32::MAX);
        assert_eq!(*geometry.size(), BoardGeometry::MAX_DIMENSION);
        assert_eq!(*geometry.margin(), BoardGeometry::MAX_DIMENSION);
        assert_eq!(*geometry.cell_size(), 333_333);
        assert_eq!(geometry.canvas_size(), (3_000_000, 3_000_000));
        assert_eq!(geometry.circle_steps(), 333_334);

        let corner = Pos::new(2, 2).unwrap();
        assert_eq!(geometry.cell_origin(corner), (1_666_666, 1_666_666));
        assert_eq!(geometry.cell_centre(corner), (1_833_332, 1_833_332));
    }
}
