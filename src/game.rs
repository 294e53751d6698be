// Defines `GameSession`: the board plus selection and turn state.
//
// A move is committed in two phases. `attempt_move` validates the move, locks the session
// and mutates the board right away. The turn only passes to the opponent once the returned
// `MoveCompletion` comes back through `complete_move`, which normally happens when the renderer
// finishes animating the move. Input arriving in between is dropped.

use std::fmt;
use std::sync::atomic::{self, AtomicU64};
use std::thread;

use log::{debug, info};
use scopeguard::ScopeGuard;

use crate::board::Board;
use crate::coord::SquareId;
use crate::error::InputError;
use crate::force::Force;
use crate::internal_error_message;
use crate::legality::{self, Destinations, MoveClass};
use crate::piece::{Piece, PieceId};
use crate::rules::Rules;
use crate::starter::{StartingPositionError, generate_starting_board};


type MoveSeq = u64;

// Process-wide, so that a completion can never be accepted by a session it doesn't belong to.
static NEXT_MOVE_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameState {
    pub active_force: Force,
    // Always a piece of `active_force`.
    pub selected: Option<PieceId>,
    pub move_locked: bool,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SelectOutcome {
    Selected { piece: PieceId, destinations: Destinations },
    Reselected { previous: PieceId, piece: PieceId, destinations: Destinations },
    Deselected { piece: PieceId },
}

fn completion_never_fired(seq: MoveSeq) {
    if !thread::panicking() {
        panic!("{}", internal_error_message!("completion for move #{seq} never fired"));
    }
}

// Must be passed back to `GameSession::complete_move`. Dropping it panics: the session would
// otherwise stay locked forever.
#[must_use]
pub struct MoveCompletion {
    seq: ScopeGuard<MoveSeq, fn(MoveSeq)>,
}

impl MoveCompletion {
    fn new(seq: MoveSeq) -> Self {
        MoveCompletion {
            seq: scopeguard::guard(seq, completion_never_fired as fn(MoveSeq)),
        }
    }

    fn defuse(self) -> MoveSeq { ScopeGuard::into_inner(self.seq) }
}

impl fmt::Debug for MoveCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveCompletion(#{})", *self.seq)
    }
}

#[derive(Debug)]
pub struct CommittedMove {
    pub piece: PieceId,
    pub from: SquareId,
    pub to: SquareId,
    // Already removed from the board.
    pub captured: Option<Piece>,
    pub completion: MoveCompletion,
}

#[derive(Debug)]
pub struct GameSession {
    rules: Rules,
    board: Board,
    state: GameState,
    pending_move: Option<MoveSeq>,
    moves_completed: u32,
}

impl GameSession {
    pub fn new(rules: Rules) -> Result<Self, StartingPositionError> {
        let board = generate_starting_board(&rules.starting_position)?;
        Ok(Self::with_board(rules, board))
    }

    pub fn with_board(rules: Rules, board: Board) -> Self {
        let active_force = rules.first_to_move;
        GameSession {
            rules,
            board,
            state: GameState { active_force, selected: None, move_locked: false },
            pending_move: None,
            moves_completed: 0,
        }
    }

    pub fn rules(&self) -> &Rules { &self.rules }
    pub fn board(&self) -> &Board { &self.board }
    pub fn state(&self) -> GameState { self.state }
    pub fn active_force(&self) -> Force { self.state.active_force }
    pub fn is_move_locked(&self) -> bool { self.state.move_locked }
    pub fn moves_completed(&self) -> u32 { self.moves_completed }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.state.selected.map(|id| self.existing_piece(id))
    }

    // Destinations of the selected piece, as they were reported on selection.
    pub fn destinations(&self) -> Option<Destinations> {
        self.selected_piece().map(|piece| legality::available_moves(&self.board, piece))
    }

    pub fn select(&mut self, piece_id: PieceId) -> Result<SelectOutcome, InputError> {
        if self.state.move_locked {
            return Err(InputError::MoveLocked);
        }
        let piece = self.board.piece(piece_id).ok_or(InputError::PieceMissing)?;
        if piece.force != self.state.active_force {
            return Err(InputError::WrongPlayer);
        }
        if self.state.selected == Some(piece_id) {
            self.state.selected = None;
            debug!("Deselected {piece_id:?}");
            return Ok(SelectOutcome::Deselected { piece: piece_id });
        }
        let destinations = legality::available_moves(&self.board, piece);
        debug!("Selected {piece_id:?} on {}: {destinations:?}", piece.square);
        let previous = self.state.selected.replace(piece_id);
        Ok(match previous {
            Some(previous) => SelectOutcome::Reselected { previous, piece: piece_id, destinations },
            None => SelectOutcome::Selected { piece: piece_id, destinations },
        })
    }

    // On success the board is already updated, but the turn stays with the current player
    // until `complete_move` is called.
    pub fn attempt_move(&mut self, target: SquareId) -> Result<CommittedMove, InputError> {
        if self.state.move_locked {
            return Err(InputError::MoveLocked);
        }
        let piece_id = self.state.selected.ok_or(InputError::NoPieceSelected)?;
        if self.board.is_occupied(target) {
            return Err(InputError::TargetOccupied);
        }
        let piece = *self.existing_piece(piece_id);
        let captured_square = match legality::validate_and_classify(&self.board, &piece, target) {
            MoveClass::Illegal => return Err(InputError::IllegalDestination),
            MoveClass::Simple => None,
            MoveClass::Capture { captured } => Some(captured),
        };

        self.state.move_locked = true;
        let captured = captured_square.map(|square| {
            self.board.remove(square).unwrap_or_else(|| {
                panic!("{}", internal_error_message!("nothing to capture on {square:?}"))
            })
        });
        self.board.place(piece_id, target);

        let seq = NEXT_MOVE_SEQ.fetch_add(1, atomic::Ordering::Relaxed);
        self.pending_move = Some(seq);
        match &captured {
            Some(captured) => info!(
                "{} {piece_id:?} captured {:?}: {} -> {target} (move #{seq})",
                piece.force, captured.id, piece.square
            ),
            None => info!("{} {piece_id:?}: {} -> {target} (move #{seq})", piece.force, piece.square),
        }
        Ok(CommittedMove {
            piece: piece_id,
            from: piece.square,
            to: target,
            captured,
            completion: MoveCompletion::new(seq),
        })
    }

    // Releases the lock and passes the turn. Returns the new active force.
    pub fn complete_move(&mut self, completion: MoveCompletion) -> Force {
        let seq = completion.defuse();
        let pending = self.pending_move.take();
        assert_eq!(
            pending,
            Some(seq),
            "{}",
            internal_error_message!("unexpected completion for move #{seq}")
        );
        self.state.selected = None;
        self.state.move_locked = false;
        self.state.active_force = self.state.active_force.opponent();
        self.moves_completed += 1;
        info!("{} to move", self.state.active_force);
        self.state.active_force
    }

    #[track_caller]
    fn existing_piece(&self, id: PieceId) -> &Piece {
        self.board
            .piece(id)
            .unwrap_or_else(|| panic!("{}", internal_error_message!("{id:?} is not on board")))
    }
}
