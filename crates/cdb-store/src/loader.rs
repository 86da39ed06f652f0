//! Loading a stored record into a game model.

use tracing::debug;

use cdb_model::{Board, GameModel, Move};

use crate::collection::{GameCollection, GameRecord, StoredGame};
use crate::error::LoadingError;

impl GameCollection {
    /// Replay a record into `model`, replacing its previous contents.
    ///
    /// On failure the model is left in whatever partial state replay
    /// reached; the caller decides how to surface the error.
    pub fn load_record(
        &self,
        record: &GameRecord,
        model: &mut GameModel,
    ) -> Result<(), LoadingError> {
        self.load_into(record.id, model)
    }

    pub(crate) fn load_into(&self, id: usize, model: &mut GameModel) -> Result<(), LoadingError> {
        let game = self.game(id).ok_or_else(|| {
            LoadingError::new(format!("Game {} is not in this collection", id + 1))
        })?;
        let start = match &game.start_fen {
            Some(fen) => Board::from_fen(fen).map_err(|err| {
                LoadingError::with_detail(
                    format!("{} has an unreadable set-up position", game.tags.summary()),
                    err.to_string(),
                )
            })?,
            None => Board::start(),
        };
        model.reset(start);
        for token in movetext_tokens(&game.movetext) {
            let mv: Move = token
                .parse()
                .map_err(|err| replay_error(game, err))?;
            model.push_move(mv).map_err(|err| replay_error(game, err))?;
        }
        debug!(game = id + 1, moves = model.moves().len(), "loaded record");
        Ok(())
    }
}

fn replay_error(game: &StoredGame, err: impl std::fmt::Display) -> LoadingError {
    LoadingError::with_detail(
        format!("{} could not be fully loaded", game.tags.summary()),
        err.to_string(),
    )
}

/// Movetext tokens worth replaying: move numbers and game results are
/// notation, not moves.
fn movetext_tokens(movetext: &str) -> impl Iterator<Item = &str> {
    movetext
        .split_whitespace()
        .filter(|token| !is_move_number(token) && !is_result(token))
}

fn is_move_number(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    token.ends_with('.') && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_result(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movetext_tokens_skip_numbers_and_results() {
        let tokens: Vec<&str> =
            movetext_tokens("1. e2e4 e7e5 2. g1f3 b8c6 1/2-1/2").collect();
        assert_eq!(tokens, ["e2e4", "e7e5", "g1f3", "b8c6"]);
    }

    #[test]
    fn move_numbers_with_ellipsis_are_skipped() {
        assert!(is_move_number("1."));
        assert!(is_move_number("23..."));
        assert!(!is_move_number("e2e4"));
        assert!(!is_move_number("."));
    }
}
