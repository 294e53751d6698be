use std::collections::BTreeMap;

use enum_map::{EnumMap, enum_map};

use crate::coord::{Col, Coord, Row, SquareId};
use crate::error::InconsistentBoardState;
use crate::force::Force;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::piece::{Piece, PieceId, piece_to_pictogram};


// Read-only view of a board cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Square {
    pub id: SquareId,
    pub occupant: Option<PieceId>,
}

impl Square {
    pub fn is_occupied(&self) -> bool { self.occupant.is_some() }
}

// Owns all pieces. Occupancy is stored twice: in the grid (square -> piece) and in each
// piece (piece -> square). The two are kept in sync by `place` and `remove`, the only
// mutation primitives; neither of them knows anything about game rules.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    pieces: BTreeMap<PieceId, Piece>,
    next_piece_id: PieceId,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: Grid::new(),
            pieces: BTreeMap::new(),
            next_piece_id: PieceId::new(),
        }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn square(&self, id: SquareId) -> Square {
        Square { id, occupant: self.grid[id.to_coord()] }
    }
    pub fn square_at(&self, row: Row, col: Col) -> Square {
        self.square(Coord::new(row, col).to_square_id())
    }
    pub fn piece(&self, id: PieceId) -> Option<&Piece> { self.pieces.get(&id) }
    pub fn occupant(&self, square: SquareId) -> Option<&Piece> {
        self.grid[square.to_coord()].and_then(|id| self.pieces.get(&id))
    }
    pub fn is_occupied(&self, square: SquareId) -> bool { self.grid[square.to_coord()].is_some() }
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> { self.pieces.values() }

    pub fn piece_count(&self) -> EnumMap<Force, usize> {
        let mut count = enum_map! { _ => 0 };
        for piece in self.pieces.values() {
            count[piece.force] += 1;
        }
        count
    }

    // Creates a new piece. Only used during setup: the square must be free.
    pub fn add_piece(&mut self, force: Force, square: SquareId) -> PieceId {
        let pos = square.to_coord();
        assert!(self.grid[pos].is_none(), "{}", internal_error_message!("{square:?} is taken"));
        let id = self.next_piece_id.inc();
        self.pieces.insert(id, Piece::new(id, force, square));
        self.grid[pos] = Some(id);
        self.debug_verify_consistency();
        id
    }

    // Moves the piece to `to`, vacating its previous square. Does not check legality.
    #[track_caller]
    pub fn place(&mut self, id: PieceId, to: SquareId) {
        let piece = self
            .pieces
            .get_mut(&id)
            .unwrap_or_else(|| panic!("{}", internal_error_message!("{id:?} is not on board")));
        let to_pos = to.to_coord();
        if let Some(other) = self.grid[to_pos] {
            assert_eq!(
                other,
                id,
                "{}",
                internal_error_message!("cannot place {id:?} on {to:?} held by {other:?}")
            );
        }
        let from_pos = piece.square.to_coord();
        if self.grid[from_pos] == Some(id) {
            self.grid[from_pos] = None;
        }
        piece.square = to;
        self.grid[to_pos] = Some(id);
        self.debug_verify_consistency();
    }

    // Clears the square and drops the piece that stood there, if any.
    pub fn remove(&mut self, square: SquareId) -> Option<Piece> {
        let id = self.grid[square.to_coord()].take()?;
        let piece = self.pieces.remove(&id);
        assert!(
            piece.is_some(),
            "{}",
            internal_error_message!("{square:?} referenced missing {id:?}")
        );
        self.debug_verify_consistency();
        piece
    }

    pub fn verify_consistency(&self) -> Result<(), InconsistentBoardState> {
        for piece in self.pieces.values() {
            if self.grid[piece.square.to_coord()] != Some(piece.id) {
                return Err(InconsistentBoardState { square: piece.square, piece: piece.id });
            }
        }
        for (coord, id) in self.grid.occupied_coords() {
            let square = coord.to_square_id();
            if self.pieces.get(&id).map(|p| p.square) != Some(square) {
                return Err(InconsistentBoardState { square, piece: id });
            }
        }
        Ok(())
    }

    #[track_caller]
    fn debug_verify_consistency(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.verify_consistency() {
                panic!("{}", internal_error_message!("{err:?}\n{}", self.render_as_unicode()));
            }
        }
    }

    // Row 0 on top, which is where White is heading.
    pub fn render_as_unicode(&self) -> String {
        let mut s = String::new();
        for row in Row::all() {
            for col in Col::all() {
                let coord = Coord::new(row, col);
                let ch = match self.occupant(coord.to_square_id()) {
                    Some(piece) => piece_to_pictogram(piece.force, piece.is_queen),
                    None if coord.is_dark() => '·',
                    None => ' ',
                };
                s.push(ch);
            }
            s.push('\n');
        }
        s
    }
}
