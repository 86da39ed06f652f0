//! Per-ply game snapshots as previewed by the database panel.

use crate::board::Board;
use crate::error::MoveError;
use crate::moves::Move;

/// A loaded game: one board snapshot per ply plus the move sequence.
///
/// Snapshots are immutable once pushed; a new record replaces the whole
/// model. There is always at least one snapshot, and
/// `boards.len() == moves.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModel {
    boards: Vec<Board>,
    moves: Vec<Move>,
}

impl GameModel {
    /// A model holding the single empty-position snapshot.
    pub fn empty() -> Self {
        Self::from_start(Board::empty())
    }

    /// A model starting from a given set-up position.
    pub fn from_start(start: Board) -> Self {
        Self {
            boards: vec![start],
            moves: Vec::new(),
        }
    }

    /// Replace the whole model with a new starting position.
    pub fn reset(&mut self, start: Board) {
        self.boards.clear();
        self.boards.push(start);
        self.moves.clear();
    }

    /// Replay one more move, pushing its snapshot.
    pub fn push_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let next = self.current().apply(mv)?;
        self.boards.push(next);
        self.moves.push(mv);
        Ok(())
    }

    /// Ply of the first snapshot; non-zero for set-up positions.
    pub fn low_ply(&self) -> usize {
        self.boards[0].ply()
    }

    /// Ply of the last snapshot.
    pub fn high_ply(&self) -> usize {
        self.low_ply() + self.moves.len()
    }

    /// Clamp a ply into this model's `[low_ply, high_ply]` range.
    pub fn clamp_ply(&self, ply: usize) -> usize {
        ply.clamp(self.low_ply(), self.high_ply())
    }

    /// Snapshot at a ply, clamped into range.
    pub fn board_at(&self, ply: usize) -> &Board {
        &self.boards[self.clamp_ply(ply) - self.low_ply()]
    }

    /// The move that produced the snapshot at `ply`, if any.
    pub fn move_into(&self, ply: usize) -> Option<Move> {
        let ply = self.clamp_ply(ply);
        if ply == self.low_ply() {
            None
        } else {
            self.moves.get(ply - self.low_ply() - 1).copied()
        }
    }

    /// The last snapshot.
    pub fn current(&self) -> &Board {
        self.boards.last().expect("model holds at least one snapshot")
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn snapshot_count(&self) -> usize {
        self.boards.len()
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EMPTY_FEN;

    fn model_with_moves(moves: &[&str]) -> GameModel {
        let mut model = GameModel::from_start(Board::start());
        for token in moves {
            model
                .push_move(token.parse().expect("move"))
                .expect("replay");
        }
        model
    }

    #[test]
    fn empty_model_is_a_single_blank_snapshot() {
        let model = GameModel::empty();
        assert_eq!(model.snapshot_count(), 1);
        assert_eq!(model.low_ply(), 0);
        assert_eq!(model.high_ply(), 0);
        assert_eq!(model.current().to_fen(), EMPTY_FEN);
    }

    #[test]
    fn ply_range_follows_moves() {
        let model = model_with_moves(&["e2e4", "e7e5", "g1f3"]);
        assert_eq!(model.low_ply(), 0);
        assert_eq!(model.high_ply(), 3);
        assert_eq!(model.snapshot_count(), 4);
        assert_eq!(model.clamp_ply(99), 3);
        assert_eq!(model.board_at(1).ply(), 1);
    }

    #[test]
    fn set_up_positions_start_at_their_own_ply() {
        let start = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 20").expect("fen");
        let mut model = GameModel::from_start(start);
        assert_eq!(model.low_ply(), 39);
        model.push_move("e8d8".parse().expect("move")).expect("replay");
        assert_eq!(model.high_ply(), 40);
        assert_eq!(model.board_at(40).ply(), 40);
    }

    #[test]
    fn move_into_names_the_producing_move() {
        let model = model_with_moves(&["e2e4", "e7e5"]);
        assert_eq!(model.move_into(0), None);
        assert_eq!(model.move_into(1).map(|m| m.to_string()), Some("e2e4".into()));
        assert_eq!(model.move_into(2).map(|m| m.to_string()), Some("e7e5".into()));
    }

    #[test]
    fn reset_replaces_everything() {
        let mut model = model_with_moves(&["e2e4"]);
        model.reset(Board::empty());
        assert_eq!(model.snapshot_count(), 1);
        assert!(model.moves().is_empty());
    }
}
