use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::coord::SquareId;
use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    pub fn new() -> Self { PieceId(0) }
    pub fn inc(&mut self) -> Self {
        let id = *self;
        self.0 += 1;
        id
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub force: Force,
    pub square: SquareId,
    // Reserved. Nothing promotes pieces yet, and the rules treat every piece as a man.
    #[new(default)]
    pub is_queen: bool,
}

pub fn piece_to_pictogram(force: Force, is_queen: bool) -> char {
    match (force, is_queen) {
        (Force::White, false) => '⛀',
        (Force::White, true) => '⛁',
        (Force::Black, false) => '⛂',
        (Force::Black, true) => '⛃',
    }
}

pub fn piece_to_ascii(force: Force) -> char {
    match force {
        Force::White => 'w',
        Force::Black => 'b',
    }
}

pub fn piece_from_ascii(ch: char) -> Option<Force> {
    match ch {
        'w' => Some(Force::White),
        'b' => Some(Force::Black),
        _ => None,
    }
}
