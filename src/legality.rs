// Move rules: single diagonal steps forward and single jump captures in any diagonal
// direction. There is no multi-jump continuation: one jump ends the turn even if another
// capture is available right away.
//
// Improvement potential. Queens (`Piece::is_queen`) move like regular pieces. Nothing
//   promotes pieces, so this only matters for hand-crafted positions.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coord::{Coord, SquareId};
use crate::piece::Piece;


#[derive(Clone, Copy, PartialEq, Eq, Debug, new)]
pub struct Delta {
    pub col_distance: u8,
    pub row_delta: i8,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DestinationKind {
    Move,
    Capture,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Destinations {
    pub kind: DestinationKind,
    pub squares: Vec<SquareId>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveClass {
    Illegal,
    Simple,
    Capture { captured: SquareId },
}

impl Destinations {
    pub fn contains(&self, square: SquareId) -> bool { self.squares.contains(&square) }
    pub fn is_empty(&self) -> bool { self.squares.is_empty() }
}

pub fn delta(from: SquareId, to: SquareId) -> Delta {
    let (row_delta, col_delta) = to.to_coord() - from.to_coord();
    Delta::new(col_delta.unsigned_abs(), row_delta)
}

pub fn is_legal_step(board: &Board, piece: &Piece, target: SquareId) -> bool {
    let d = delta(piece.square, target);
    d.col_distance == 1
        && d.row_delta == piece.force.forward_row_delta()
        && !board.is_occupied(target)
}

pub fn is_legal_jump_capture(board: &Board, piece: &Piece, target: SquareId) -> bool {
    jumped_square(board, piece, target).is_some()
}

// Returns the square of the opponent piece that would be captured by jumping onto `target`.
fn jumped_square(board: &Board, piece: &Piece, target: SquareId) -> Option<SquareId> {
    let d = delta(piece.square, target);
    if d.col_distance != 2 || d.row_delta.abs() != 2 || board.is_occupied(target) {
        return None;
    }
    let middle = midpoint(piece.square.to_coord(), target.to_coord()).to_square_id();
    let jumped = board.occupant(middle)?;
    (jumped.force != piece.force).then_some(middle)
}

// Both coordinate differences must be even.
fn midpoint(a: Coord, b: Coord) -> Coord {
    let (d_row, d_col) = b - a;
    debug_assert!(d_row % 2 == 0 && d_col % 2 == 0, "{a:?} {b:?}");
    Coord::try_from_zero_based(
        a.row.to_zero_based() as i8 + d_row / 2,
        a.col.to_zero_based() as i8 + d_col / 2,
    )
    .unwrap()
}

// Captures take priority: if any capture is available, simple moves are not reported at all.
pub fn available_moves(board: &Board, piece: &Piece) -> Destinations {
    let mut moves = Vec::new();
    let mut captures = Vec::new();
    for square in SquareId::all() {
        if is_legal_jump_capture(board, piece, square) {
            captures.push(square);
        } else if is_legal_step(board, piece, square) {
            moves.push(square);
        }
    }
    if captures.is_empty() {
        Destinations { kind: DestinationKind::Move, squares: moves }
    } else {
        Destinations { kind: DestinationKind::Capture, squares: captures }
    }
}

// Classifies a single target independently of `available_moves`. Note that a simple move is
// accepted here even when a capture is available elsewhere: capture priority only affects which
// destinations are suggested.
pub fn validate_and_classify(board: &Board, piece: &Piece, target: SquareId) -> MoveClass {
    if let Some(captured) = jumped_square(board, piece, target) {
        MoveClass::Capture { captured }
    } else if is_legal_step(board, piece, target) {
        MoveClass::Simple
    } else {
        MoveClass::Illegal
    }
}
