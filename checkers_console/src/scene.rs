// Piece positions as known to the picker. Follows the board through feedback requests only,
// the way a renderer's scene graph would.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use checkers_core::{Board, PieceId, SquareId};
use log::warn;


pub type SharedScene = Rc<RefCell<Scene>>;

#[derive(Debug)]
pub struct Scene {
    pieces: HashMap<SquareId, PieceId>,
}

impl Scene {
    pub fn from_board(board: &Board) -> Self {
        Scene {
            pieces: board.pieces().map(|p| (p.square, p.id)).collect(),
        }
    }

    pub fn into_shared(self) -> SharedScene { Rc::new(RefCell::new(self)) }

    pub fn piece_on(&self, square: SquareId) -> Option<PieceId> {
        self.pieces.get(&square).copied()
    }

    pub fn move_piece(&mut self, piece: PieceId, from: SquareId, to: SquareId) {
        match self.pieces.remove(&from) {
            Some(id) if id == piece => {
                self.pieces.insert(to, id);
            }
            other => warn!("Scene out of sync: expected {piece:?} on {from}, found {other:?}"),
        }
    }

    pub fn remove_piece(&mut self, square: SquareId) {
        if self.pieces.remove(&square).is_none() {
            warn!("Scene out of sync: nothing to remove on {square}");
        }
    }
}
