use crate::coord::SquareId;
use crate::piece::PieceId;


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

// Reasons to drop user input. None of these is ever shown to the user: the interface
// communicates illegality by simply not reacting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputError {
    // Selected piece belongs to the player who is not on turn.
    WrongPlayer,
    // A move is being resolved; input is dropped, not queued.
    MoveLocked,
    // Move target given while nothing is selected.
    NoPieceSelected,
    // Piece id does not refer to a piece on the board (e.g. it has been captured).
    PieceMissing,
    // A piece cannot be displaced by a move.
    TargetOccupied,
    // Target is neither a step nor a jump capture for the selected piece.
    IllegalDestination,
}

// Square and piece disagree about occupancy. This is a bug in board mutation, never a
// consequence of user input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InconsistentBoardState {
    pub square: SquareId,
    pub piece: PieceId,
}
