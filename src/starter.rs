use std::ops::Range;

use enum_map::{EnumMap, enum_map};
use strum::IntoEnumIterator;

use crate::board::Board;
use crate::coord::Coord;
use crate::force::Force;
use crate::rules::{PiecePlacement, StartingPosition};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StartingPositionError {
    SquareTaken(PiecePlacement),
}

fn home_rows() -> EnumMap<Force, Range<u8>> {
    enum_map! {
        Force::Black => 0..3,
        Force::White => 5..8,
    }
}

pub fn classic_placements() -> Vec<PiecePlacement> {
    let home_rows = home_rows();
    let mut placements = Vec::new();
    for force in Force::iter() {
        for coord in Coord::all() {
            if coord.is_dark() && home_rows[force].contains(&coord.row.to_zero_based()) {
                placements.push(PiecePlacement { force, square: coord.to_square_id() });
            }
        }
    }
    placements
}

pub fn generate_starting_board(
    position: &StartingPosition,
) -> Result<Board, StartingPositionError> {
    let placements = match position {
        StartingPosition::Classic => classic_placements(),
        StartingPosition::Custom(placements) => placements.clone(),
    };
    let mut board = Board::empty();
    for placement in placements {
        if board.is_occupied(placement.square) {
            return Err(StartingPositionError::SquareTaken(placement));
        }
        board.add_piece(placement.force, placement.square);
    }
    Ok(board)
}
