use std::collections::HashMap;

use checkers_core::{
    FeedbackSink, Force, HighlightStyle, HighlightTarget, MoveCompletion, Piece, PieceId,
    SquareId, TurnObserver,
};
use console::Style;
use log::{debug, error};

use crate::scene::SharedScene;


// There are no real animations in the terminal: moves are applied to the scene at once and the
// completion waits until the current command is processed.
pub struct ConsoleFeedback {
    scene: SharedScene,
    styles: HashMap<HighlightTarget, HighlightStyle>,
    pending_completion: Option<MoveCompletion>,
}

impl ConsoleFeedback {
    pub fn new(scene: SharedScene) -> Self {
        ConsoleFeedback {
            scene,
            styles: HashMap::new(),
            pending_completion: None,
        }
    }

    pub fn style(&self, target: HighlightTarget) -> HighlightStyle {
        self.styles.get(&target).copied().unwrap_or(HighlightStyle::Default)
    }

    pub fn take_completion(&mut self) -> Option<MoveCompletion> { self.pending_completion.take() }
}

impl FeedbackSink for ConsoleFeedback {
    fn highlight(&mut self, targets: &[HighlightTarget], style: HighlightStyle) {
        debug!("Highlight {targets:?} as {style}");
        for &target in targets {
            if style == HighlightStyle::Default {
                self.styles.remove(&target);
            } else {
                self.styles.insert(target, style);
            }
        }
    }

    fn animate_move(
        &mut self, piece: PieceId, from: SquareId, to: SquareId, completion: MoveCompletion,
    ) {
        self.scene.borrow_mut().move_piece(piece, from, to);
        if let Some(stale) = self.pending_completion.replace(completion) {
            // Cannot happen while the session is locked. Keep the new one and let the old one
            // panic on drop.
            error!("Animation requested before the previous one completed");
            drop(stale);
        }
    }

    fn animate_capture(&mut self, removed: &Piece) {
        self.styles.remove(&HighlightTarget::Piece(removed.id));
        self.scene.borrow_mut().remove_piece(removed.square);
    }
}

pub struct AnnouncingObserver {}

impl TurnObserver for AnnouncingObserver {
    fn on_player_change(&mut self, active_force: Force) {
        println!("{}", Style::new().bold().apply_to(format!("{active_force} to move")));
    }
}
