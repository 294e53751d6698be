// Top-down view of the board filling the whole viewport: x grows to the right, y grows up,
// both in [-1, 1]. Row 0 is at the top.

use checkers_core::coord::{NUM_COLS, NUM_ROWS};
use checkers_core::{Coord, EntityRef, PickingService, SquareId};

use crate::scene::SharedScene;


pub struct FlatBoardPicker {
    scene: SharedScene,
}

// Maps [-1, 1] onto `0..num_cells`. The upper bound belongs to the last cell.
fn ndc_to_cell(v: f64, num_cells: u8) -> Option<i8> {
    if !(-1.0..=1.0).contains(&v) {
        return None;
    }
    let cell = ((v + 1.0) / 2.0 * num_cells as f64).floor() as i8;
    Some(cell.min(num_cells as i8 - 1))
}

pub fn ndc_to_square(x: f64, y: f64) -> Option<SquareId> {
    let col = ndc_to_cell(x, NUM_COLS)?;
    let row = ndc_to_cell(-y, NUM_ROWS)?;
    Coord::try_from_zero_based(row, col).map(Coord::to_square_id)
}

#[cfg(test)]
pub fn square_center(square: SquareId) -> (f64, f64) {
    let coord = square.to_coord();
    let x = (coord.col.to_zero_based() as f64 + 0.5) / NUM_COLS as f64 * 2.0 - 1.0;
    let y = 1.0 - (coord.row.to_zero_based() as f64 + 0.5) / NUM_ROWS as f64 * 2.0;
    (x, y)
}

impl FlatBoardPicker {
    pub fn new(scene: SharedScene) -> Self { FlatBoardPicker { scene } }
}

impl PickingService for FlatBoardPicker {
    // Pieces sit on top of squares, so they win.
    fn pick_entity_at(&mut self, x: f64, y: f64) -> Option<EntityRef> {
        let square = ndc_to_square(x, y)?;
        Some(match self.scene.borrow().piece_on(square) {
            Some(piece) => EntityRef::Piece(piece),
            None => EntityRef::Square(square),
        })
    }
}
