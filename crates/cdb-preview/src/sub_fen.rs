//! Sub-position extraction from marked squares.

use std::collections::BTreeSet;

use cdb_model::{Board, Cord, EMPTY_PLACEMENT, START_FEN};

/// Reduce `board` to the placement pattern spanned by `marked` squares.
///
/// Unmarked squares are blanked, turning them into wildcards. When no mark
/// lands on an occupied square the whole position is kept instead, so an
/// add-with-no-circles still captures something usable; the one exception
/// is the standard starting position, where that filter would match every
/// game, and extraction yields nothing.
pub fn sub_position_pattern(board: &Board, marked: &BTreeSet<Cord>) -> Option<String> {
    let mut reduced = board.clone();
    for cord in Cord::all() {
        if !marked.contains(&cord) {
            reduced.clear(cord);
        }
    }
    let pattern = reduced.placement();
    if pattern != EMPTY_PLACEMENT {
        return Some(pattern);
    }
    if board.to_fen() == START_FEN {
        return None;
    }
    Some(board.placement())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(squares: &[&str]) -> BTreeSet<Cord> {
        squares
            .iter()
            .map(|s| s.parse().expect("algebraic square"))
            .collect()
    }

    #[test]
    fn no_marks_on_the_starting_position_extracts_nothing() {
        assert_eq!(sub_position_pattern(&Board::start(), &marks(&[])), None);
    }

    #[test]
    fn no_marks_elsewhere_extracts_the_whole_position() {
        let board = Board::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").expect("fen");
        assert_eq!(
            sub_position_pattern(&board, &marks(&[])),
            Some("4k3/8/8/3q4/8/8/8/4K3".to_string())
        );
    }

    #[test]
    fn marks_on_empty_squares_only_fall_back_the_same_way() {
        assert_eq!(
            sub_position_pattern(&Board::start(), &marks(&["e4", "d5"])),
            None
        );
        let board = Board::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").expect("fen");
        assert_eq!(
            sub_position_pattern(&board, &marks(&["a1"])),
            Some("4k3/8/8/3q4/8/8/8/4K3".to_string())
        );
    }

    #[test]
    fn marked_squares_keep_their_pieces_and_blank_the_rest() {
        assert_eq!(
            sub_position_pattern(&Board::start(), &marks(&["a1", "h8"])),
            Some("7r/8/8/8/8/8/8/R7".to_string())
        );
    }

    #[test]
    fn a_non_canonical_start_without_marks_still_extracts() {
        // Same placement as the start but Black to move is not the
        // canonical starting position.
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
                .expect("fen");
        assert_eq!(
            sub_position_pattern(&board, &marks(&[])),
            Some("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".to_string())
        );
    }
}
