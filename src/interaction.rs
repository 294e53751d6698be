// Glue between pointer input and `GameSession`.
//
// Picking (what is under the pointer) and all visual feedback belong to the renderer; the
// adapter only decides what to ask for. Feedback requests are fire-and-forget, with one
// exception: `FeedbackSink::animate_move` receives the `MoveCompletion` of the move, and the
// renderer must hand it back via `InteractionAdapter::on_move_animation_complete` once the
// animation is over. The completion cannot be returned synchronously from `animate_move`
// because the adapter is borrowed at that point; park it and return it afterwards.

use log::debug;
use strum::Display;

use crate::coord::SquareId;
use crate::force::Force;
use crate::game::{CommittedMove, GameSession, MoveCompletion, SelectOutcome};
use crate::legality::{DestinationKind, Destinations};
use crate::piece::{Piece, PieceId};


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityRef {
    Piece(PieceId),
    Square(SquareId),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HighlightTarget {
    Piece(PieceId),
    Square(SquareId),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum HighlightStyle {
    Default,
    Hoverable,
    Selected,
    DestinationMove,
    DestinationCapture,
}

pub trait PickingService {
    // Pointer coordinates are opaque to the adapter; `None` means nothing interactive.
    fn pick_entity_at(&mut self, x: f64, y: f64) -> Option<EntityRef>;
}

pub trait FeedbackSink {
    fn highlight(&mut self, targets: &[HighlightTarget], style: HighlightStyle);
    fn animate_move(
        &mut self, piece: PieceId, from: SquareId, to: SquareId, completion: MoveCompletion,
    );
    // The piece has already been removed from the board.
    fn animate_capture(&mut self, removed: &Piece);

    fn clear_highlight(&mut self, targets: &[HighlightTarget]) {
        self.highlight(targets, HighlightStyle::Default);
    }
}

pub trait TurnObserver {
    // Called exactly once per completed move, after the lock is released.
    fn on_player_change(&mut self, active_force: Force);
}

pub struct NoopTurnObserver {}

impl TurnObserver for NoopTurnObserver {
    fn on_player_change(&mut self, _active_force: Force) {}
}

pub struct InteractionAdapter<P, F, O> {
    session: GameSession,
    picker: P,
    feedback: F,
    observer: O,
    hovered: Option<PieceId>,
    highlighted_destinations: Vec<SquareId>,
}

impl<P, F, O> InteractionAdapter<P, F, O>
where
    P: PickingService,
    F: FeedbackSink,
    O: TurnObserver,
{
    pub fn new(session: GameSession, picker: P, feedback: F, observer: O) -> Self {
        InteractionAdapter {
            session,
            picker,
            feedback,
            observer,
            hovered: None,
            highlighted_destinations: Vec::new(),
        }
    }

    pub fn session(&self) -> &GameSession { &self.session }
    pub fn picker_mut(&mut self) -> &mut P { &mut self.picker }
    pub fn feedback(&self) -> &F { &self.feedback }
    pub fn feedback_mut(&mut self) -> &mut F { &mut self.feedback }
    pub fn observer(&self) -> &O { &self.observer }
    pub fn hovered(&self) -> Option<PieceId> { self.hovered }
    pub fn highlighted_destinations(&self) -> &[SquareId] { &self.highlighted_destinations }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let entity = self.picker.pick_entity_at(x, y);
        self.hover(entity);
    }

    pub fn on_click(&mut self, x: f64, y: f64) {
        let entity = self.picker.pick_entity_at(x, y);
        self.click(entity);
    }

    // Hover only marks pieces that could be selected right now. Hovering an opponent piece
    // keeps the previous hover mark.
    pub fn hover(&mut self, entity: Option<EntityRef>) {
        let state = self.session.state();
        if let (None, Some(EntityRef::Piece(id))) = (state.selected, entity) {
            let selectable =
                self.session.board().piece(id).is_some_and(|p| p.force == state.active_force);
            if selectable && self.hovered != Some(id) {
                self.reset_hover();
                self.hovered = Some(id);
                self.feedback.highlight(&[HighlightTarget::Piece(id)], HighlightStyle::Hoverable);
            }
        } else {
            self.reset_hover();
        }
    }

    pub fn click(&mut self, entity: Option<EntityRef>) {
        if self.session.is_move_locked() {
            debug!("Dropped click on {entity:?}: move in progress");
            return;
        }
        match entity {
            Some(EntityRef::Piece(id)) => self.click_piece(id),
            Some(EntityRef::Square(square)) => self.click_square(square),
            None => {}
        }
    }

    pub fn on_move_animation_complete(&mut self, completion: MoveCompletion) {
        let moved = self.session.state().selected;
        let active_force = self.session.complete_move(completion);
        if let Some(piece) = moved {
            self.feedback.clear_highlight(&[HighlightTarget::Piece(piece)]);
        }
        self.observer.on_player_change(active_force);
    }

    fn click_piece(&mut self, id: PieceId) {
        match self.session.select(id) {
            Ok(SelectOutcome::Selected { piece, destinations }) => {
                self.mark_selected(piece, &destinations);
            }
            Ok(SelectOutcome::Reselected { previous, piece, destinations }) => {
                self.clear_destinations();
                self.feedback.clear_highlight(&[HighlightTarget::Piece(previous)]);
                self.mark_selected(piece, &destinations);
            }
            Ok(SelectOutcome::Deselected { piece }) => {
                self.clear_destinations();
                self.feedback.clear_highlight(&[HighlightTarget::Piece(piece)]);
            }
            Err(err) => debug!("Ignored click on {id:?}: {err:?}"),
        }
    }

    fn click_square(&mut self, square: SquareId) {
        match self.session.attempt_move(square) {
            Ok(CommittedMove { piece, from, to, captured, completion }) => {
                self.clear_destinations();
                self.feedback.animate_move(piece, from, to, completion);
                if let Some(captured) = captured {
                    self.feedback.animate_capture(&captured);
                }
            }
            Err(err) => debug!("Ignored click on {square:?}: {err:?}"),
        }
    }

    fn mark_selected(&mut self, piece: PieceId, destinations: &Destinations) {
        self.reset_hover();
        self.feedback.highlight(&[HighlightTarget::Piece(piece)], HighlightStyle::Selected);
        let style = match destinations.kind {
            DestinationKind::Move => HighlightStyle::DestinationMove,
            DestinationKind::Capture => HighlightStyle::DestinationCapture,
        };
        if !destinations.is_empty() {
            let targets: Vec<_> =
                destinations.squares.iter().map(|&sq| HighlightTarget::Square(sq)).collect();
            self.feedback.highlight(&targets, style);
        }
        self.highlighted_destinations = destinations.squares.clone();
    }

    fn clear_destinations(&mut self) {
        if self.highlighted_destinations.is_empty() {
            return;
        }
        let targets: Vec<_> = self
            .highlighted_destinations
            .drain(..)
            .map(HighlightTarget::Square)
            .collect();
        self.feedback.clear_highlight(&targets);
    }

    fn reset_hover(&mut self) {
        if let Some(id) = self.hovered.take() {
            self.feedback.clear_highlight(&[HighlightTarget::Piece(id)]);
        }
    }
}
