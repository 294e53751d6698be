use serde::{Deserialize, Serialize};

use crate::coord::SquareId;
use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PiecePlacement {
    pub force: Force,
    pub square: SquareId,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StartingPosition {
    // Three rows of pieces per side on dark squares.
    Classic,
    Custom(Vec<PiecePlacement>),
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rules {
    pub starting_position: StartingPosition,
    pub first_to_move: Force,
}

impl Rules {
    pub fn classic() -> Self {
        Rules {
            starting_position: StartingPosition::Classic,
            first_to_move: Force::White,
        }
    }

    pub fn custom(pieces: Vec<PiecePlacement>, first_to_move: Force) -> Self {
        Rules {
            starting_position: StartingPosition::Custom(pieces),
            first_to_move,
        }
    }
}
