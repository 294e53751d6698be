mod common;

use checkers_core::test_util::{FeedbackRequest, board_to_diagram};
use checkers_core::{EntityRef, Force, HighlightStyle, HighlightTarget};
use common::*;
use indoc::indoc;
use pretty_assertions::assert_eq;


const SIMPLE_MOVE: &str = indoc! {"
    ........
    w.......
    ........
    ........
    ........
    ........
    ......b.
    ........
"};

const CAPTURE: &str = indoc! {"
    ........
    ..b.....
    .w......
    ........
    ........
    ........
    ......b.
    ........
"};

#[test]
fn simple_move() {
    let mut adapter = adapter_from_diagram(SIMPLE_MOVE);
    let white = piece_on(&adapter, 8);
    click_piece(&mut adapter, 8);
    assert_eq!(adapter.highlighted_destinations(), &[sq(1)]);
    assert_eq!(
        adapter.feedback().style(HighlightTarget::Square(sq(1))),
        HighlightStyle::DestinationMove
    );

    click_square(&mut adapter, 1);
    let board = adapter.session().board();
    assert_eq!(board.square(sq(1)).occupant, Some(white));
    assert!(!board.square(sq(8)).is_occupied());
    assert_eq!(board.piece(white).unwrap().square, sq(1));
    assert!(adapter.session().is_move_locked());
    assert!(adapter.highlighted_destinations().is_empty());
    assert_eq!(adapter.feedback().style(HighlightTarget::Square(sq(1))), HighlightStyle::Default);
    assert!(adapter.feedback().requests.contains(&FeedbackRequest::AnimateMove {
        piece: white,
        from: sq(8),
        to: sq(1),
    }));
    assert!(adapter.observer().player_changes.is_empty());

    assert!(finish_animation(&mut adapter));
    assert_eq!(adapter.observer().player_changes, vec![Force::Black]);
    assert_eq!(adapter.session().active_force(), Force::Black);
    assert!(!adapter.session().is_move_locked());
    assert!(adapter.feedback().styles().is_empty());
}

#[test]
fn capture_move() {
    let mut adapter = adapter_from_diagram(CAPTURE);
    let white = piece_on(&adapter, 17);
    let black = *adapter.session().board().occupant(sq(10)).unwrap();
    click_piece(&mut adapter, 17);
    assert_eq!(adapter.highlighted_destinations(), &[sq(3)]);
    assert_eq!(
        adapter.feedback().style(HighlightTarget::Square(sq(3))),
        HighlightStyle::DestinationCapture
    );

    click_square(&mut adapter, 3);
    let requests = adapter.feedback_mut().take_requests();
    assert!(requests.contains(&FeedbackRequest::AnimateCapture(black)));
    assert!(finish_animation(&mut adapter));

    let board = adapter.session().board();
    assert_eq!(board_to_diagram(board), indoc! {"
        ...w....
        ........
        ........
        ........
        ........
        ........
        ......b.
        ........"});
    assert_eq!(board.square(sq(3)).occupant, Some(white));
    assert!(board.piece(black.id).is_none());
    assert_eq!(board.piece_count()[Force::Black], 1);
}

// Simple steps stay legal even when the highlighted destinations only list captures.
#[test]
fn simple_move_allowed_while_capture_available() {
    let mut adapter = adapter_from_diagram(CAPTURE);
    click_piece(&mut adapter, 17);
    click_square(&mut adapter, 8);
    assert!(finish_animation(&mut adapter));
    assert!(adapter.session().board().is_occupied(sq(8)));
    assert!(adapter.session().board().is_occupied(sq(10)));
}

#[test]
fn move_onto_occupied_square_is_ignored() {
    let mut adapter = adapter_from_diagram(indoc! {"
        ........
        .b......
        w.......
        ........
        ........
        ........
        ........
        ........
    "});
    let white = piece_on(&adapter, 16);
    click_piece(&mut adapter, 16);
    let before = board_to_diagram(adapter.session().board());
    adapter.feedback_mut().take_requests();

    click_square(&mut adapter, 9);
    assert_eq!(board_to_diagram(adapter.session().board()), before);
    assert_eq!(adapter.session().state().selected, Some(white));
    assert!(!adapter.session().is_move_locked());
    assert!(adapter.feedback().requests.is_empty());
    assert!(!finish_animation(&mut adapter));
}

#[test]
fn illegal_destination_is_ignored() {
    let mut adapter = adapter_from_diagram(SIMPLE_MOVE);
    click_piece(&mut adapter, 8);
    adapter.feedback_mut().take_requests();
    click_square(&mut adapter, 17);
    click_square(&mut adapter, 24);
    assert!(adapter.feedback().requests.is_empty());
    assert_eq!(adapter.highlighted_destinations(), &[sq(1)]);
    assert!(!finish_animation(&mut adapter));
}

#[test]
fn reselect_other_piece() {
    let mut adapter = adapter_from_diagram(indoc! {"
        ........
        w.......
        ........
        ...w....
        ........
        ........
        ......b.
        ........
    "});
    let first = piece_on(&adapter, 8);
    let second = piece_on(&adapter, 27);
    click_piece(&mut adapter, 8);
    click_piece(&mut adapter, 27);

    assert_eq!(adapter.session().state().selected, Some(second));
    assert_eq!(adapter.highlighted_destinations(), &[sq(18), sq(20)]);
    let feedback = adapter.feedback();
    assert_eq!(feedback.style(HighlightTarget::Piece(first)), HighlightStyle::Default);
    assert_eq!(feedback.style(HighlightTarget::Piece(second)), HighlightStyle::Selected);
    assert_eq!(feedback.style(HighlightTarget::Square(sq(1))), HighlightStyle::Default);
    assert_eq!(feedback.style(HighlightTarget::Square(sq(18))), HighlightStyle::DestinationMove);
    assert_eq!(adapter.session().board().piece(first).unwrap().square, sq(8));
    assert_eq!(adapter.session().board().piece(second).unwrap().square, sq(27));
}

#[test]
fn clicking_selected_piece_deselects() {
    let mut adapter = adapter_from_diagram(SIMPLE_MOVE);
    let before = board_to_diagram(adapter.session().board());
    click_piece(&mut adapter, 8);
    click_piece(&mut adapter, 8);
    assert_eq!(adapter.session().state().selected, None);
    assert!(adapter.highlighted_destinations().is_empty());
    assert!(adapter.feedback().styles().is_empty());
    assert_eq!(board_to_diagram(adapter.session().board()), before);
    assert_eq!(adapter.session().active_force(), Force::White);
}

#[test]
fn input_dropped_while_locked() {
    let mut adapter = adapter_from_diagram(indoc! {"
        ........
        w.......
        ........
        ...w....
        ........
        ........
        ......b.
        ........
    "});
    let white = piece_on(&adapter, 8);
    click_piece(&mut adapter, 8);
    click_square(&mut adapter, 1);
    let state = adapter.session().state();
    let board = board_to_diagram(adapter.session().board());
    adapter.feedback_mut().take_requests();

    click_piece(&mut adapter, 27);
    click_piece(&mut adapter, 54);
    click_piece(&mut adapter, 1);
    click_square(&mut adapter, 20);
    assert_eq!(adapter.session().state(), state);
    assert_eq!(adapter.session().state().selected, Some(white));
    assert_eq!(board_to_diagram(adapter.session().board()), board);
    assert!(adapter.feedback().requests.is_empty());

    assert!(finish_animation(&mut adapter));
    // Dropped, not replayed.
    assert_eq!(adapter.session().state().selected, None);
    assert!(!finish_animation(&mut adapter));
}

#[test]
fn opponent_piece_click_is_ignored() {
    let mut adapter = adapter_from_diagram(SIMPLE_MOVE);
    click_piece(&mut adapter, 54);
    assert_eq!(adapter.session().state().selected, None);
    assert!(adapter.feedback().requests.is_empty());
}

#[test]
fn click_on_nothing() {
    let mut adapter = adapter_from_diagram(SIMPLE_MOVE);
    click_piece(&mut adapter, 8);
    adapter.on_click(0.0, 0.0);
    adapter.click(None);
    click_square(&mut adapter, 1);
    assert!(finish_animation(&mut adapter));
    assert_eq!(adapter.observer().player_changes, vec![Force::Black]);
}

#[test]
fn turns_alternate() {
    let mut adapter = adapter_from_diagram(SIMPLE_MOVE);
    // Black cannot move first.
    click_piece(&mut adapter, 54);
    click_square(&mut adapter, 61);
    assert!(!finish_animation(&mut adapter));

    click_piece(&mut adapter, 8);
    click_square(&mut adapter, 1);
    assert!(finish_animation(&mut adapter));

    // White cannot move twice.
    click_piece(&mut adapter, 1);
    assert_eq!(adapter.session().state().selected, None);

    click_piece(&mut adapter, 54);
    click_square(&mut adapter, 63);
    assert!(finish_animation(&mut adapter));
    assert_eq!(adapter.observer().player_changes, vec![Force::Black, Force::White]);
    assert_eq!(adapter.session().moves_completed(), 2);
}

// A jump ends the turn even if the same piece could capture again.
#[test]
fn no_multi_capture() {
    let mut adapter = adapter_from_diagram(indoc! {"
        ........
        ........
        ........
        ..b.....
        ........
        ..b.....
        .w......
        ........
    "});
    click_piece(&mut adapter, 49);
    click_square(&mut adapter, 35);
    assert!(finish_animation(&mut adapter));
    assert_eq!(adapter.session().active_force(), Force::Black);
    assert!(adapter.session().board().is_occupied(sq(26)));
}

#[test]
fn hover_marks_selectable_pieces() {
    let mut adapter = adapter_from_diagram(indoc! {"
        ........
        w.......
        ........
        ...w....
        ........
        ........
        ......b.
        ........
    "});
    let first = piece_on(&adapter, 8);
    let second = piece_on(&adapter, 27);

    hover_piece(&mut adapter, 8);
    assert_eq!(adapter.hovered(), Some(first));
    assert_eq!(adapter.feedback().style(HighlightTarget::Piece(first)), HighlightStyle::Hoverable);

    // Repeated hover over the same piece does nothing.
    adapter.feedback_mut().take_requests();
    hover_piece(&mut adapter, 8);
    assert!(adapter.feedback().requests.is_empty());

    // Opponent pieces keep the previous mark.
    hover_piece(&mut adapter, 54);
    assert_eq!(adapter.hovered(), Some(first));

    hover_piece(&mut adapter, 27);
    assert_eq!(adapter.hovered(), Some(second));
    assert_eq!(adapter.feedback().style(HighlightTarget::Piece(first)), HighlightStyle::Default);

    adapter.hover(Some(EntityRef::Square(sq(0))));
    assert_eq!(adapter.hovered(), None);
    assert!(adapter.feedback().styles().is_empty());
}

#[test]
fn no_hover_while_selected() {
    let mut adapter = adapter_from_diagram(indoc! {"
        ........
        w.......
        ........
        ...w....
        ........
        ........
        ......b.
        ........
    "});
    let first = piece_on(&adapter, 8);
    hover_piece(&mut adapter, 8);
    click_piece(&mut adapter, 8);
    assert_eq!(adapter.hovered(), None);
    assert_eq!(adapter.feedback().style(HighlightTarget::Piece(first)), HighlightStyle::Selected);

    hover_piece(&mut adapter, 27);
    assert_eq!(adapter.hovered(), None);
}
