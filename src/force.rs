use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, Enum, EnumIter, Serialize,
    Deserialize,
)]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::White => Force::Black,
            Force::Black => Force::White,
        }
    }

    // White starts at the bottom rows and moves towards row 0.
    pub fn forward_row_delta(self) -> i8 {
        match self {
            Force::White => -1,
            Force::Black => 1,
        }
    }
}
