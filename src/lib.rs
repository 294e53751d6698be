// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod coord;
pub mod error;
pub mod force;
pub mod game;
pub mod grid;
pub mod interaction;
pub mod legality;
pub mod piece;
pub mod rules;
pub mod starter;
pub mod test_util;

pub use board::{Board, Square};
pub use coord::{Col, Coord, Row, SquareId};
pub use error::{InconsistentBoardState, InputError};
pub use force::Force;
pub use game::{CommittedMove, GameSession, GameState, MoveCompletion, SelectOutcome};
pub use interaction::{
    EntityRef, FeedbackSink, HighlightStyle, HighlightTarget, InteractionAdapter, NoopTurnObserver,
    PickingService, TurnObserver,
};
pub use legality::{Delta, DestinationKind, Destinations, MoveClass};
pub use piece::{Piece, PieceId};
pub use rules::{PiecePlacement, Rules, StartingPosition};
