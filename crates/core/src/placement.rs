//! Collision and lock-in rules.
//!
//! [`can_place`] is the only legality test in the game: movement, rotation,
//! gravity and spawn all go through it.

use crate::field::Field;
use crate::pieces::{ActivePiece, PieceShape};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Whether `shape` anchored at `(x, y)` fits on `field`.
///
/// Cells left of column 0, right of the last column or below the last row
/// are rejected. Cells above the field (`row < 0`) are allowed and skip the
/// collision check; every other cell must land on an empty field cell.
pub fn can_place(shape: &PieceShape, x: i8, y: i8, field: &Field) -> bool {
    shape.cells().all(|(dx, dy)| {
        let fx = x as i16 + dx as i16;
        let fy = y as i16 + dy as i16;
        if fx < 0 || fx >= FIELD_WIDTH as i16 || fy >= FIELD_HEIGHT as i16 {
            return false;
        }
        fy < 0 || !field.is_occupied(fx as i8, fy as i8)
    })
}

/// Write the piece's color into every field cell it covers.
///
/// Cells above the field are skipped. The caller must have checked the
/// position with [`can_place`]. Returns the number of cells written.
pub fn lock_in(piece: &ActivePiece, field: &mut Field) -> usize {
    debug_assert!(
        can_place(&piece.shape, piece.x, piece.y, field),
        "lock_in on an illegal position"
    );

    let mut written = 0;
    for (x, y) in piece.cells() {
        if y < 0 {
            continue;
        }
        if field.set(x, y, Some(piece.kind)) {
            written += 1;
        }
    }
    written
}

/// How many rows `shape` can fall from `(x, y)` before it is blocked.
pub fn drop_distance(shape: &PieceShape, x: i8, y: i8, field: &Field) -> i8 {
    let mut distance = 0;
    while can_place(shape, x, y + distance + 1, field) {
        distance += 1;
    }
    distance
}
