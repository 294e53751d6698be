// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use checkers_core::test_util::{
    RecordingFeedback, RecordingObserver, ScriptedPicker, board_from_diagram,
};
use checkers_core::{
    Board, EntityRef, GameSession, InteractionAdapter, PieceId, Rules, SquareId,
};


pub type TestAdapter = InteractionAdapter<ScriptedPicker, RecordingFeedback, RecordingObserver>;

#[allow(dead_code)]
pub fn sq(idx: u8) -> SquareId { SquareId::from_index(idx) }

#[allow(dead_code)]
pub fn adapter_with_board(board: Board) -> TestAdapter {
    InteractionAdapter::new(
        GameSession::with_board(Rules::classic(), board),
        ScriptedPicker::default(),
        RecordingFeedback::default(),
        RecordingObserver::default(),
    )
}

#[allow(dead_code)]
pub fn adapter_from_diagram(diagram: &str) -> TestAdapter {
    adapter_with_board(board_from_diagram(diagram))
}

#[allow(dead_code)]
pub fn piece_on(adapter: &TestAdapter, idx: u8) -> PieceId {
    adapter.session().board().occupant(sq(idx)).unwrap().id
}

// Clicks go through the picking service, the way real pointer input does.
#[allow(dead_code)]
pub fn click_piece(adapter: &mut TestAdapter, idx: u8) {
    let id = piece_on(adapter, idx);
    adapter.picker_mut().push(Some(EntityRef::Piece(id)));
    adapter.on_click(0.0, 0.0);
}

#[allow(dead_code)]
pub fn click_square(adapter: &mut TestAdapter, idx: u8) {
    adapter.picker_mut().push(Some(EntityRef::Square(sq(idx))));
    adapter.on_click(0.0, 0.0);
}

#[allow(dead_code)]
pub fn hover_piece(adapter: &mut TestAdapter, idx: u8) {
    let id = piece_on(adapter, idx);
    adapter.picker_mut().push(Some(EntityRef::Piece(id)));
    adapter.on_pointer_move(0.0, 0.0);
}

// Finishes the pending move animation, if any.
#[allow(dead_code)]
pub fn finish_animation(adapter: &mut TestAdapter) -> bool {
    match adapter.feedback_mut().take_completion() {
        Some(completion) => {
            adapter.on_move_animation_complete(completion);
            true
        }
        None => false,
    }
}
