//! Field module - the playing grid
//!
//! The field is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that locked into it. Storage is a single flat row-major array so
//! the session owns the whole grid by value and nothing aliases into it.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// Number of rows, as a `usize` for array sizing.
pub const FIELD_ROWS: usize = FIELD_HEIGHT as usize;

/// Color-tag view of the field, `grid[y][x]`, 0 for empty.
pub type ColorGrid = [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

/// Row indices removed by one [`Field::clear_full_rows`] call, bottom to top.
pub type ClearedRows = ArrayVec<usize, FIELD_ROWS>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_ROWS {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Game-over check: any locked cell in row 0.
    pub fn is_top_row_occupied(&self) -> bool {
        self.row(0).iter().any(|cell| cell.is_some())
    }

    /// Fill every cell of row `y` with `kind`.
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y >= FIELD_ROWS {
            return;
        }
        let start = y * FIELD_WIDTH as usize;
        self.cells[start..start + FIELD_WIDTH as usize].fill(Some(kind));
    }

    /// Remove every full row, shift the rows above down and insert empty rows
    /// at the top. Relative order of the surviving rows is preserved.
    ///
    /// Single bottom-up pass: surviving rows are copied down to a write cursor,
    /// which has the same effect as removing a row and re-checking the index
    /// that the row above slid into.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = FIELD_WIDTH as usize;
        let mut write_y = FIELD_ROWS;

        for read_y in (0..FIELD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write color tags into `out` (0 = empty).
    pub fn write_color_grid(&self, out: &mut ColorGrid) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * FIELD_WIDTH as usize + x].map_or(0, PieceKind::color_tag);
            }
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * FIELD_WIDTH as usize;
        &self.cells[start..start + FIELD_WIDTH as usize]
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_calculation() {
        assert_eq!(Field::index(0, 0), Some(0));
        assert_eq!(Field::index(9, 0), Some(9));
        assert_eq!(Field::index(0, 1), Some(10));
        assert_eq!(Field::index(9, 19), Some(199));
        assert_eq!(Field::index(-1, 0), None);
        assert_eq!(Field::index(10, 0), None);
        assert_eq!(Field::index(0, 20), None);
        assert_eq!(Field::index(0, -1), None);
    }

    #[test]
    fn test_field_flat_array() {
        let mut field = Field::new();
        field.set(0, 0, Some(PieceKind::I));
        field.set(5, 10, Some(PieceKind::T));

        assert_eq!(field.cells[0], Some(PieceKind::I));
        assert_eq!(field.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_top_row_occupied() {
        let mut field = Field::new();
        assert!(!field.is_top_row_occupied());
        field.set(9, 1, Some(PieceKind::S));
        assert!(!field.is_top_row_occupied());
        field.set(9, 0, Some(PieceKind::S));
        assert!(field.is_top_row_occupied());
    }

    #[test]
    fn test_clear_full_rows_empties_top() {
        let mut field = Field::new();
        for y in 16..20 {
            field.fill_row(y, PieceKind::I);
        }
        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 18, 17, 16]);
        assert_eq!(field.occupied_count(), 0);
    }

    #[test]
    fn test_clear_rows_five_and_seven_keeps_order() {
        let mut field = Field::new();
        field.fill_row(5, PieceKind::I);
        field.fill_row(7, PieceKind::I);
        // Markers in the surviving rows, one distinct column per row.
        for y in 0..FIELD_ROWS {
            if y != 5 && y != 7 {
                field.set((y % 10) as i8, y as i8, Some(PieceKind::ALL[y % 7]));
            }
        }
        let before: Vec<Cell> = (0..FIELD_ROWS)
            .filter(|&y| y != 5 && y != 7)
            .map(|y| field.get((y % 10) as i8, y as i8).unwrap())
            .collect();

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.len(), 2);
        assert_eq!(cleared.as_slice(), &[7, 5]);

        assert!(field.row(0).iter().all(|c| c.is_none()));
        assert!(field.row(1).iter().all(|c| c.is_none()));
        assert!((0..FIELD_ROWS).all(|y| !field.is_row_full(y)));

        // Rows 0..5 moved down by two, row 6 by one, rows 8.. stayed put.
        let survivors = [0, 1, 2, 3, 4, 6, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19];
        let after: Vec<Cell> = survivors
            .iter()
            .enumerate()
            .map(|(i, &orig_y)| field.get((orig_y % 10) as i8, (i + 2) as i8).unwrap())
            .collect();
        assert_eq!(after, before);
        assert_eq!(field.occupied_count(), 18);
    }

    #[test]
    fn test_write_color_grid() {
        let mut field = Field::new();
        field.set(2, 19, Some(PieceKind::L));
        field.set(0, 0, Some(PieceKind::I));

        let mut grid = [[0u8; 10]; 20];
        field.write_color_grid(&mut grid);
        assert_eq!(grid[19][2], 7);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid.iter().flatten().filter(|&&v| v != 0).count(), 2);
    }
}
