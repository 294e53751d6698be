use std::{fmt, ops};

use ndarray::{Array, Array2};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::piece::PieceId;


// Square occupancy. Pieces themselves live in `Board`; the grid only records which piece
// stands where.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Array2<Option<PieceId>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn occupied_coords(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        Coord::all().filter_map(|coord| self[coord].map(|id| (coord, id)))
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<PieceId>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output { &mut self.data[coord_to_index(pos)] }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [
        pos.row.to_zero_based() as usize,
        pos.col.to_zero_based() as usize,
    ]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.occupied_coords().map(|(coord, id)| (coord.to_square_id(), id.0)))
            .finish()
    }
}
