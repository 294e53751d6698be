use checkers_core::coord::NUM_COLS;
use checkers_core::piece::piece_to_pictogram;
use checkers_core::{Board, Col, Coord, Force, HighlightStyle, HighlightTarget, Row};
use console::Style;
use itertools::Itertools;

use crate::feedback::ConsoleFeedback;


fn cell_style(is_dark: bool, style: HighlightStyle) -> Style {
    let base = if is_dark {
        Style::new().color256(232).on_color256(137)
    } else {
        Style::new().color256(232).on_color256(223)
    };
    match style {
        HighlightStyle::Default => base,
        HighlightStyle::Hoverable => base.underlined(),
        HighlightStyle::Selected => base.reverse(),
        HighlightStyle::DestinationMove => base.on_green(),
        HighlightStyle::DestinationCapture => base.on_red(),
    }
}

fn render_grid(board: &Board, feedback: &ConsoleFeedback) -> String {
    let col_names = Col::all().map(|col| format!(" {} ", col.to_zero_based())).join("");
    let mut s = format!("   {col_names}\n");
    for row in Row::all() {
        s.push_str(&format!(" {} ", row.to_zero_based()));
        for col in Col::all() {
            let coord = Coord::new(row, col);
            let square = coord.to_square_id();
            let (ch, style) = match board.occupant(square) {
                Some(piece) => (
                    piece_to_pictogram(piece.force, piece.is_queen),
                    feedback.style(HighlightTarget::Piece(piece.id)),
                ),
                None => (' ', feedback.style(HighlightTarget::Square(square))),
            };
            s.push_str(&cell_style(coord.is_dark(), style).apply_to(format!(" {ch} ")).to_string());
        }
        s.push('\n');
    }
    s
}

fn render_status(board: &Board, active_force: Force) -> String {
    let count = board.piece_count();
    let board_width = (NUM_COLS as usize + 1) * 3;
    format!(
        "{1:^0$}\n",
        board_width,
        format!(
            "{active_force} to move | White: {} | Black: {}",
            count[Force::White],
            count[Force::Black]
        )
    )
}

pub fn render_game(board: &Board, feedback: &ConsoleFeedback, active_force: Force) -> String {
    format!("{}{}", render_grid(board, feedback), render_status(board, active_force))
}
