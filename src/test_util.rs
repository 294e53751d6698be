// Test utilities shared by unit tests, integration tests and the console driver's tests.

use std::collections::{HashMap, VecDeque};

use itertools::Itertools;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row, SquareId};
use crate::force::Force;
use crate::game::MoveCompletion;
use crate::interaction::{
    EntityRef, FeedbackSink, HighlightStyle, HighlightTarget, PickingService, TurnObserver,
};
use crate::piece::{Piece, PieceId, piece_from_ascii, piece_to_ascii};


// In theory random tests verify properties that should always hold, but let's fix the seed to
// avoid sporadic failures.
pub fn deterministic_rng() -> impl Rng { rand::rngs::StdRng::from_seed([0; 32]) }

// Parses 8 lines of 8 characters: 'w' and 'b' for pieces, anything else for an empty square.
// Row 0 comes first. Leading and trailing blank lines are ignored.
pub fn board_from_diagram(diagram: &str) -> Board {
    let lines = diagram.trim().lines().map(str::trim).collect_vec();
    assert_eq!(lines.len(), NUM_ROWS as usize, "{diagram}");
    let mut board = Board::empty();
    for (row_idx, line) in lines.into_iter().enumerate() {
        let chars = line.chars().collect_vec();
        assert_eq!(chars.len(), NUM_COLS as usize, "{line}");
        for (col_idx, ch) in chars.into_iter().enumerate() {
            if let Some(force) = piece_from_ascii(ch) {
                let row = Row::from_zero_based(row_idx as u8);
                let col = Col::from_zero_based(col_idx as u8);
                board.add_piece(force, Coord::new(row, col).to_square_id());
            }
        }
    }
    board
}

pub fn board_to_diagram(board: &Board) -> String {
    Row::all()
        .map(|row| {
            Col::all()
                .map(|col| match board.occupant(Coord::new(row, col).to_square_id()) {
                    Some(piece) => piece_to_ascii(piece.force),
                    None => '.',
                })
                .collect::<String>()
        })
        .join("\n")
}

// Returns pre-recorded picking results in order. Picks nothing once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    script: VecDeque<Option<EntityRef>>,
}

impl ScriptedPicker {
    pub fn push(&mut self, entity: Option<EntityRef>) { self.script.push_back(entity); }
}

impl PickingService for ScriptedPicker {
    fn pick_entity_at(&mut self, _x: f64, _y: f64) -> Option<EntityRef> {
        self.script.pop_front().flatten()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FeedbackRequest {
    Highlight(Vec<HighlightTarget>, HighlightStyle),
    AnimateMove { piece: PieceId, from: SquareId, to: SquareId },
    AnimateCapture(Piece),
}

// Records every request and parks move completions until the test decides the animation
// is over. Dropping it with a parked completion panics, like any lost completion.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub requests: Vec<FeedbackRequest>,
    styles: HashMap<HighlightTarget, HighlightStyle>,
    pending_completions: VecDeque<MoveCompletion>,
}

impl RecordingFeedback {
    pub fn take_requests(&mut self) -> Vec<FeedbackRequest> { std::mem::take(&mut self.requests) }

    pub fn take_completion(&mut self) -> Option<MoveCompletion> {
        self.pending_completions.pop_front()
    }

    // Current non-default style of every target.
    pub fn styles(&self) -> &HashMap<HighlightTarget, HighlightStyle> { &self.styles }

    pub fn style(&self, target: HighlightTarget) -> HighlightStyle {
        self.styles.get(&target).copied().unwrap_or(HighlightStyle::Default)
    }
}

impl FeedbackSink for RecordingFeedback {
    fn highlight(&mut self, targets: &[HighlightTarget], style: HighlightStyle) {
        for &target in targets {
            if style == HighlightStyle::Default {
                self.styles.remove(&target);
            } else {
                self.styles.insert(target, style);
            }
        }
        self.requests.push(FeedbackRequest::Highlight(targets.to_vec(), style));
    }
    fn animate_move(
        &mut self, piece: PieceId, from: SquareId, to: SquareId, completion: MoveCompletion,
    ) {
        self.requests.push(FeedbackRequest::AnimateMove { piece, from, to });
        self.pending_completions.push_back(completion);
    }
    fn animate_capture(&mut self, removed: &Piece) {
        self.requests.push(FeedbackRequest::AnimateCapture(*removed));
    }
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub player_changes: Vec<Force>,
}

impl TurnObserver for RecordingObserver {
    fn on_player_change(&mut self, active_force: Force) { self.player_changes.push(active_force); }
}
