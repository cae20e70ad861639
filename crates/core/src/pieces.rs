//! Pieces module - piece catalog, occupancy masks and rotation
//!
//! Shapes are stored as small boolean grids (at most 4x4). The anchor of a
//! piece is the top-left corner of its bounding box, so rotating a shape
//! changes which cells the piece covers relative to the anchor but never
//! moves the anchor itself.

use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Largest bounding-box side of any shape.
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular occupancy grid for one piece orientation.
///
/// Cells outside `rows x cols` are always empty, so two shapes compare equal
/// exactly when they cover the same cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    rows: u8,
    cols: u8,
    mask: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl PieceShape {
    /// Build a shape from row-major `0/1` rows.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty, ragged, or larger than 4x4.
    ///
    /// ```
    /// use term_tetris_core::PieceShape;
    ///
    /// let t = PieceShape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert_eq!(t.cell_count(), 4);
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_DIM,
            "shape must have 1..=4 rows"
        );
        let cols = rows[0].len();
        assert!(
            cols > 0 && cols <= MAX_SHAPE_DIM,
            "shape must have 1..=4 columns"
        );

        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "shape rows must all have the same length");
            for (x, &v) in row.iter().enumerate() {
                mask[y][x] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            mask,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Occupied cells as `(dx, dy)` offsets from the anchor, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |y| {
            (0..self.cols as usize)
                .filter(move |&x| self.mask[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90° clockwise about the bounding box.
    ///
    /// An `R x C` grid becomes `C x R` with `new[j][R-1-i] = old[i][j]`.
    /// Four rotations give back the original shape.
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows as usize;
        let c = self.cols as usize;
        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in self.mask.iter().enumerate().take(r) {
            for (j, &filled) in row.iter().enumerate().take(c) {
                mask[j][r - 1 - i] = filled;
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            mask,
        }
    }
}

/// Canonical spawn shape for a piece kind.
pub fn shape_of(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => PieceShape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => PieceShape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => PieceShape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => PieceShape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => PieceShape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => PieceShape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => PieceShape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// The piece currently falling: its kind, current orientation and anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece of `kind` at the spawn anchor.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn color_tag(&self) -> u8 {
        self.kind.color_tag()
    }

    /// Absolute field coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
